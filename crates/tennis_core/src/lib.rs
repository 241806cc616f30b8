//! # tennis_core - Tennis Match Score Validation Core
//!
//! This library decides whether an ordered sequence of tennis set scores
//! constitutes a complete, rules-consistent match, and if so who won. It is
//! the validation core of a match-tracking app; screens, forms and the
//! document store live outside and only exchange strings and reports with it.
//!
//! ## Features
//! - Pure, stateless validation (same input = same report, no I/O)
//! - Set token parsing with tiebreak sub-scores ("7-6(10-8)")
//! - Best-of-3 and best-of-5 formats with dead-rubber rejection
//! - Error accumulation: every problem in one report, nothing thrown
//! - JSON API for easy integration with a host app
//!
//! ## Example
//! ```
//! use tennis_core::{validate_match, MatchFormat, TeamSide};
//!
//! let report = validate_match(MatchFormat::BestOf3, &["6-4", "3-6", "7-6(10-8)"]);
//! assert!(report.valid);
//! assert_eq!(report.winner, Some(TeamSide::Home));
//! ```

pub mod api;
pub mod error;
pub mod models;
pub mod score;

// Re-export main API functions
pub use api::{get_winner_json, validate_match_json};
pub use error::{CoreError, Result};

// Re-export the validation core
pub use models::{MatchFormat, MatchReport, SetScore, TeamSide, TiebreakScore};
pub use score::{get_winner, validate_match, ParseSetError, SetRuleError, SetValidator};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
