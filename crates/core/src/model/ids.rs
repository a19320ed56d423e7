use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a stored survey response.
///
/// Assigned by the store on append (SQLite rowid), monotonically increasing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResponseId(u64);

impl ResponseId {
    /// Creates a new `ResponseId`
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying u64 value
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ResponseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResponseId({})", self.0)
    }
}

impl fmt::Display for ResponseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing an ID from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for ResponseId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(ResponseId::new)
            .map_err(|_| ParseIdError {
                kind: "ResponseId".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_id_display() {
        let id = ResponseId::new(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn response_id_from_str() {
        let id: ResponseId = "123".parse().unwrap();
        assert_eq!(id, ResponseId::new(123));
    }

    #[test]
    fn response_id_from_str_invalid() {
        let result = "not-a-number".parse::<ResponseId>();
        assert!(result.is_err());
    }

    #[test]
    fn response_id_roundtrip() {
        let original = ResponseId::new(7);
        let deserialized: ResponseId = original.to_string().parse().unwrap();
        assert_eq!(original, deserialized);
    }
}
