//! # Control Attribute Taxonomy
//!
//! The attributes an internal control can declare for testing. Each
//! attribute names a property that supporting evidence must demonstrate.
//! A control declares an ordered set of attributes; cross-validation
//! evaluates them in that order.
//!
//! Attributes serialize as `snake_case` strings — the enum prevents
//! defective string values from entering the data model.

use serde::{Deserialize, Serialize};

/// An attribute a control is tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    /// The recorded transaction actually took place.
    Occurrence,
    /// All transactions that should be recorded are recorded.
    Completeness,
    /// Amounts and data are recorded correctly.
    Accuracy,
    /// Transactions are recorded in the correct period.
    Timeliness,
    /// Transactions are approved by someone with authority to do so.
    Authorization,
    /// Segregation of duties — no single person controls all stages.
    Sod,
}

impl AttributeType {
    /// Return the string representation of this attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Occurrence => "occurrence",
            Self::Completeness => "completeness",
            Self::Accuracy => "accuracy",
            Self::Timeliness => "timeliness",
            Self::Authorization => "authorization",
            Self::Sod => "sod",
        }
    }
}

impl std::fmt::Display for AttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
