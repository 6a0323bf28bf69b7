//! Request parameters for the availability extent endpoint.

use crate::domain::{NetworkCode, StationPattern};

/// Output format selector: one plain-text line per channel epoch.
const REQUEST_FORMAT: &str = "request";

/// What to ask the availability service for.
///
/// Location and channel are left out of the request, which FDSN services
/// treat as an unrestricted wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtentQuery {
    pub network: NetworkCode,
    pub station: StationPattern,
}

impl ExtentQuery {
    pub fn new(network: NetworkCode, station: StationPattern) -> Self {
        Self { network, station }
    }

    /// Query-string pairs, in the order they are sent.
    pub fn params(&self) -> [(&'static str, &str); 3] {
        [
            ("net", self.network.as_str()),
            ("sta", self.station.as_str()),
            ("format", REQUEST_FORMAT),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_select_request_format() {
        let query = ExtentQuery::new(
            NetworkCode::parse("IM").unwrap(),
            StationPattern::parse("TX*").unwrap(),
        );

        assert_eq!(
            query.params(),
            [("net", "IM"), ("sta", "TX*"), ("format", "request")]
        );
    }

    #[test]
    fn no_location_or_channel_filter() {
        let query = ExtentQuery::new(
            NetworkCode::parse("IU").unwrap(),
            StationPattern::parse("ANMO,COLA").unwrap(),
        );

        assert!(
            query
                .params()
                .iter()
                .all(|(key, _)| *key != "loc" && *key != "cha")
        );
    }
}
