//! Strongly-typed ID wrappers for entity types
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! entity types at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Try to parse the full UUID
                if let Ok(uuid) = Uuid::parse_str(s) {
                    return Ok(Self(uuid));
                }
                // Try stripping the display prefix
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(ExpenseId, "exp-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_id_creation() {
        let id = ExpenseId::new();
        assert!(!id.as_uuid().is_nil());
    }

    #[test]
    fn test_id_display() {
        let id = ExpenseId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("exp-"));
        assert_eq!(display.len(), 12); // "exp-" + 8 chars
    }

    #[test]
    fn test_id_equality() {
        let id1 = ExpenseId::new();
        let id2 = id1;
        assert_eq!(id1, id2);

        let id3 = ExpenseId::new();
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_id_serialization() {
        let id = ExpenseId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: ExpenseId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_id_from_str() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: ExpenseId = uuid_str.parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);
    }
}
