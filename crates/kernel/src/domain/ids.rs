//! Small integer-backed value-object ids.
//!
//! `spec.md` §3 stores both policy rules (`ptype = "p"`) and role relations
//! (`ptype = "g"`) in a single rule table keyed by one integer id space.
//! `RuleId` is that id; `RelationId` is the same representation used at
//! API boundaries that only ever address `g` rows, so a relation id can
//! never accidentally be passed where a policy rule id belongs, and vice
//! versa, without an explicit conversion.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! integer_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }
    };
}

integer_id!(RuleId);
integer_id!(RelationId);
integer_id!(ModelVersionId);

impl From<RuleId> for RelationId {
    fn from(id: RuleId) -> Self {
        RelationId(id.0)
    }
}

impl From<RelationId> for RuleId {
    fn from(id: RelationId) -> Self {
        RuleId(id.0)
    }
}
