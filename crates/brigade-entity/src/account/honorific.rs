//! Honorific enumeration for account display names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Honorific prefix shown before an account's display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "honorific", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Honorific {
    Mr,
    Ms,
    Mrs,
}

impl Honorific {
    /// Return the honorific as its display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mr => "Mr",
            Self::Ms => "Ms",
            Self::Mrs => "Mrs",
        }
    }
}

impl fmt::Display for Honorific {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_matches_database_representation() {
        assert_eq!(serde_json::to_string(&Honorific::Mr).unwrap(), "\"mr\"");
        assert_eq!(
            serde_json::from_str::<Honorific>("\"mrs\"").unwrap(),
            Honorific::Mrs
        );
    }
}
