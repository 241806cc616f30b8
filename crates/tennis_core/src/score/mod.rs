//! Score validation core: set parser, set rules, match validator.

pub mod match_validator;
pub mod parser;
pub mod rules;

pub use match_validator::{get_winner, validate_match};
pub use parser::ParseSetError;
pub use rules::{SetRuleError, SetValidator};
