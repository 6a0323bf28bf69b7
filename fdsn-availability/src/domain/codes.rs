//! Network and station selector types.

use std::fmt;

/// Characters allowed in a selector besides ASCII letters and digits.
///
/// `*` and `?` are FDSN wildcards, `,` separates list entries.
const SELECTOR_PUNCTUATION: &[u8] = b"*?,-_";

/// Error returned when a network code or station pattern is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind}: {reason}")]
pub struct InvalidSelector {
    kind: &'static str,
    reason: &'static str,
}

fn validate(s: &str, kind: &'static str) -> Result<(), InvalidSelector> {
    if s.is_empty() {
        return Err(InvalidSelector {
            kind,
            reason: "must not be empty",
        });
    }

    for b in s.bytes() {
        if !b.is_ascii_alphanumeric() && !SELECTOR_PUNCTUATION.contains(&b) {
            return Err(InvalidSelector {
                kind,
                reason: "must contain only letters, digits, wildcards or commas",
            });
        }
    }

    if s.split(',').any(str::is_empty) {
        return Err(InvalidSelector {
            kind,
            reason: "list entries must not be empty",
        });
    }

    Ok(())
}

/// A station-network code such as `IM` or `IU`.
///
/// Kept exactly as the user typed it; the data center does the matching.
///
/// # Examples
///
/// ```
/// use fdsn_availability::domain::NetworkCode;
///
/// let im = NetworkCode::parse("IM").unwrap();
/// assert_eq!(im.as_str(), "IM");
///
/// assert!(NetworkCode::parse("").is_err());
/// assert!(NetworkCode::parse("I M").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NetworkCode(String);

impl NetworkCode {
    pub fn parse(s: &str) -> Result<Self, InvalidSelector> {
        validate(s, "network code")?;
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for NetworkCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NetworkCode({})", self.0)
    }
}

impl fmt::Display for NetworkCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A station selector: a single code, a comma-separated list, or a
/// wildcard expression like `TX*`.
///
/// The pattern is never expanded locally; it is echoed back verbatim in
/// the summary.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationPattern(String);

impl StationPattern {
    pub fn parse(s: &str) -> Result<Self, InvalidSelector> {
        validate(s, "station pattern")?;
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationPattern({})", self.0)
    }
}

impl fmt::Display for StationPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[A-Z0-9]{1,5}(,[A-Z0-9*?]{1,5}){0,3}") {
            let station = StationPattern::parse(&s).unwrap();
            prop_assert_eq!(station.as_str(), s.as_str());
        }

        /// Any embedded whitespace is rejected
        #[test]
        fn whitespace_rejected(a in "[A-Z]{1,3}", b in "[A-Z]{1,3}", ws in "[ \t\n]") {
            let s = format!("{a}{ws}{b}");
            prop_assert!(NetworkCode::parse(&s).is_err());
            prop_assert!(StationPattern::parse(&s).is_err());
        }
    }
}
