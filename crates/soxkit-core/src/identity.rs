//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the identifiers in the audit stack. These prevent
//! accidental identifier confusion — you cannot pass a `ControlId` where
//! an `EvidenceId` is expected, even though both are UUIDs underneath.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an internal control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControlId(pub Uuid);

/// Unique identifier for an uploaded evidence record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvidenceId(pub Uuid);

/// Unique identifier for a test run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TestRunId(pub Uuid);

/// Unique identifier for a generated workpaper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkpaperId(pub Uuid);

macro_rules! impl_id {
    ($ty:ident, $prefix:literal) => {
        impl $ty {
            /// Generate a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Access the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, ":{}"), self.0)
            }
        }

        impl From<Uuid> for $ty {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }
    };
}

impl_id!(ControlId, "control");
impl_id!(EvidenceId, "evidence");
impl_id!(TestRunId, "testrun");
impl_id!(WorkpaperId, "workpaper");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        assert_ne!(ControlId::new(), ControlId::new());
        assert_ne!(EvidenceId::new(), EvidenceId::new());
    }

    #[test]
    fn test_display_carries_namespace() {
        let id = ControlId::new();
        assert!(id.to_string().starts_with("control:"));
        let id = EvidenceId::new();
        assert!(id.to_string().starts_with("evidence:"));
        let id = TestRunId::new();
        assert!(id.to_string().starts_with("testrun:"));
        let id = WorkpaperId::new();
        assert!(id.to_string().starts_with("workpaper:"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = EvidenceId::new();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: EvidenceId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = ControlId::from(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }
}
