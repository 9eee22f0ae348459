//! The rule tuple (`spec.md` §3): the positional, persisted representation
//! shared by policy rules (`ptype = "p"`) and role-inheritance relations
//! (`ptype = "g"`). Administrative callers never see this shape directly —
//! they use the typed DTOs (`policies::dto`) and the semantic mapper
//! translates both ways.

use kernel::RuleId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PType {
    P,
    G,
}

#[derive(Debug, Error)]
#[error("ptype must be \"p\" or \"g\", got {0:?}")]
pub struct InvalidPType(pub String);

impl PType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PType::P => "p",
            PType::G => "g",
        }
    }
}

impl std::fmt::Display for PType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PType {
    type Err = InvalidPType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "p" => Ok(PType::P),
            "g" => Ok(PType::G),
            other => Err(InvalidPType(other.to_string())),
        }
    }
}

/// A persisted rule row: `(id, ptype, v0..v5)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTuple {
    pub id: RuleId,
    pub ptype: PType,
    pub v0: Option<String>,
    pub v1: Option<String>,
    pub v2: Option<String>,
    pub v3: Option<String>,
    pub v4: Option<String>,
    pub v5: Option<String>,
}

/// The same shape without an id, for inserts — the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRuleTuple {
    pub ptype: PType,
    pub v0: Option<String>,
    pub v1: Option<String>,
    pub v2: Option<String>,
    pub v3: Option<String>,
    pub v4: Option<String>,
    pub v5: Option<String>,
}

impl NewRuleTuple {
    pub fn with_id(self, id: RuleId) -> RuleTuple {
        RuleTuple { id, ptype: self.ptype, v0: self.v0, v1: self.v1, v2: self.v2, v3: self.v3, v4: self.v4, v5: self.v5 }
    }
}
