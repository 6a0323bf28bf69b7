//! Coverage summary: the overall extent across all matching channels.

use std::fmt;

use tracing::debug;

use crate::availability::{AvailabilityError, AvailabilityRow, ExtentQuery};
use crate::domain::{NetworkCode, StationPattern, Timestamp};

/// Earliest start and latest end over every returned channel epoch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageSummary {
    /// Network code as queried
    pub network: NetworkCode,
    /// Station pattern as queried, not expanded
    pub station: StationPattern,
    pub earliest_start: Timestamp,
    pub latest_end: Timestamp,
}

/// Reduce rows to their overall extent.
///
/// Comparison uses full timestamp precision. An empty slice is reported as
/// [`AvailabilityError::NoData`] rather than producing a summary.
pub fn summarize(
    rows: &[AvailabilityRow],
    query: &ExtentQuery,
) -> Result<CoverageSummary, AvailabilityError> {
    let no_data = || AvailabilityError::NoData {
        network: query.network.clone(),
        station: query.station.clone(),
    };

    let earliest_start = rows.iter().map(|r| r.start_time).min().ok_or_else(no_data)?;
    let latest_end = rows.iter().map(|r| r.end_time).max().ok_or_else(no_data)?;

    debug!(
        rows = rows.len(),
        %earliest_start,
        %latest_end,
        "computed coverage extent"
    );

    Ok(CoverageSummary {
        network: query.network.clone(),
        station: query.station.clone(),
        earliest_start,
        latest_end,
    })
}

impl fmt::Display for CoverageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Data availability:")?;
        writeln!(f, "  network: {}", self.network)?;
        writeln!(f, "  station: {}", self.station)?;
        writeln!(f, "  Start time: {}", self.earliest_start.date().format("%Y-%m-%d"))?;
        writeln!(f, "  End time: {}", self.latest_end.date().format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::parse_rows;

    fn query(network: &str, station: &str) -> ExtentQuery {
        ExtentQuery::new(
            NetworkCode::parse(network).unwrap(),
            StationPattern::parse(station).unwrap(),
        )
    }

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    #[test]
    fn single_row_is_its_own_extent() {
        let rows = parse_rows("IM TX01 -- BHZ 2020-01-01T00:00:00 2020-06-01T00:00:00").unwrap();
        let summary = summarize(&rows, &query("IM", "TX01")).unwrap();

        assert_eq!(summary.earliest_start, rows[0].start_time);
        assert_eq!(summary.latest_end, rows[0].end_time);
    }

    #[test]
    fn min_start_and_max_end_come_from_different_rows() {
        let body = "\
IM TX01 -- BHZ 2018-03-01T00:00:00Z 2019-01-01T00:00:00Z
IM TX02 -- BHZ 2016-07-15T00:00:00Z 2017-01-01T00:00:00Z
IM TX03 00 BHN 2019-01-01T00:00:00Z 2023-09-30T12:00:00Z
";
        let rows = parse_rows(body).unwrap();
        let summary = summarize(&rows, &query("IM", "TX*")).unwrap();

        assert_eq!(summary.earliest_start, ts("2016-07-15"));
        assert_eq!(summary.latest_end, ts("2023-09-30T12:00:00Z"));
        assert_eq!(summary.station.as_str(), "TX*");
    }

    #[test]
    fn sub_second_differences_decide_the_extent() {
        let body = "\
IU ANMO 00 BHZ 2020-01-01T00:00:00.500000Z 2020-02-01T00:00:00.100000Z
IU ANMO 10 BHZ 2020-01-01T00:00:00.250000Z 2020-02-01T00:00:00.900000Z
";
        let rows = parse_rows(body).unwrap();
        let summary = summarize(&rows, &query("IU", "ANMO")).unwrap();

        assert_eq!(summary.earliest_start, rows[1].start_time);
        assert_eq!(summary.latest_end, rows[1].end_time);
    }

    #[test]
    fn empty_rows_are_no_data() {
        let err = summarize(&[], &query("IM", "NOPE")).unwrap_err();
        assert!(matches!(err, AvailabilityError::NoData { .. }));
        assert_eq!(
            err.to_string(),
            "no availability data for network IM station NOPE"
        );
    }

    #[test]
    fn display_truncates_to_dates() {
        let summary = CoverageSummary {
            network: NetworkCode::parse("IM").unwrap(),
            station: StationPattern::parse("TX01").unwrap(),
            earliest_start: ts("2020-01-01T23:59:59.999Z"),
            latest_end: ts("2020-06-01T00:00:00Z"),
        };

        assert_eq!(
            summary.to_string(),
            "Data availability:\n  network: IM\n  station: TX01\n  Start time: 2020-01-01\n  End time: 2020-06-01\n"
        );
    }
}
