//! Match validation report
//!
//! The validator never fails hard on bad input: every problem becomes an
//! entry in `errors` so a form can surface all of them at once.

use serde::{Deserialize, Serialize};

use super::TeamSide;

/// Outcome of validating one ordered sequence of set tokens.
///
/// Invariants: `errors` is empty iff `valid`; `winner` is `Some` only when
/// `valid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub valid: bool,
    pub errors: Vec<String>,
    pub winner: Option<TeamSide>,
}

impl MatchReport {
    /// Build a report from the accumulated error list and the clinching side.
    pub fn from_errors(errors: Vec<String>, winner: Option<TeamSide>) -> Self {
        let valid = errors.is_empty();
        Self { valid, errors, winner: if valid { winner } else { None } }
    }
}
