//! Event Ordering
//!
//! The events endpoint orders results either by start or by end date.

use serde::{Deserialize, Serialize};

/// Result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ordering {
    /// Order by start date
    DateFrom,
    /// Order by end date
    #[default]
    DateTo,
}

impl Ordering {
    /// Parse from the wire token
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "date_from" => Some(Self::DateFrom),
            "date_to" => Some(Self::DateTo),
            _ => None,
        }
    }

    /// Wire token sent as the `ordering` parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DateFrom => "date_from",
            Self::DateTo => "date_to",
        }
    }
}

impl std::fmt::Display for Ordering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_date_to() {
        assert_eq!(Ordering::default(), Ordering::DateTo);
    }

    #[test]
    fn test_ordering_tokens() {
        assert_eq!(Ordering::DateFrom.as_str(), "date_from");
        assert_eq!(Ordering::DateTo.to_string(), "date_to");
        assert_eq!(Ordering::from_str("date_from"), Some(Ordering::DateFrom));
        assert_eq!(Ordering::from_str("start"), None);
    }
}
