pub mod match_format;
pub mod report;
pub mod set_score;

pub use match_format::{MatchFormat, TeamSide};
pub use report::MatchReport;
pub use set_score::{SetScore, TiebreakScore};
