//! Referential-integrity policy for parent-entity deletion.
//!
//! The schema keeps its foreign keys as plain NO ACTION references; what
//! happens to dependent rows when a hotel or customer is deleted is an
//! explicit, process-wide configuration choice applied by the repositories.

use std::fmt;
use std::str::FromStr;

/// What to do with dependent rows when deleting a parent entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletePolicy {
    /// Refuse deletion while dependents exist.
    #[default]
    Restrict,
    /// Delete dependents (transitively) in the same transaction.
    Cascade,
    /// Detach dependents by nulling their foreign key.
    SetNull,
}

impl FromStr for DeletePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "restrict" => Ok(DeletePolicy::Restrict),
            "cascade" => Ok(DeletePolicy::Cascade),
            "set-null" | "set_null" | "setnull" => Ok(DeletePolicy::SetNull),
            other => Err(format!(
                "Unknown delete policy '{other}' (expected restrict, cascade, or set-null)"
            )),
        }
    }
}

impl fmt::Display for DeletePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeletePolicy::Restrict => "restrict",
            DeletePolicy::Cascade => "cascade",
            DeletePolicy::SetNull => "set-null",
        };
        f.write_str(s)
    }
}

/// Result of a policy-aware delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The row (and, under cascade, its dependents) was deleted.
    Deleted,
    /// No row with the given id exists.
    NotFound,
    /// The restrict policy refused the deletion; `dependents` rows still
    /// reference the entity.
    Restricted { dependents: i64 },
}
