//! JSON entry points
//!
//! String-in/string-out wrappers around the score validator for embedding in
//! a host app (the mobile form layer calls these on every change). Transport
//! problems (bad JSON, wrong schema version, unknown format) come back as
//! `Err`; score-level problems never do - they are part of the response body.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::models::{MatchFormat, TeamSide};
use crate::score::{get_winner, validate_match};
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct ValidateMatchRequest {
    pub schema_version: u8,
    /// Match format as a raw best-of count: 3 or 5.
    pub best_of: u8,
    pub sets: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ValidateMatchResponse {
    pub schema_version: u8,
    pub valid: bool,
    pub errors: Vec<String>,
    pub winner: Option<TeamSide>,
}

#[derive(Debug, Deserialize)]
pub struct GetWinnerRequest {
    pub schema_version: u8,
    pub sets: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct GetWinnerResponse {
    pub schema_version: u8,
    pub winner: Option<TeamSide>,
}

fn check_schema_version(found: u8) -> Result<()> {
    if found != SCHEMA_VERSION {
        log::warn!("schema version mismatch: expected {}, found {}", SCHEMA_VERSION, found);
        return Err(CoreError::SchemaVersionMismatch { expected: SCHEMA_VERSION, found });
    }
    Ok(())
}

/// Validate a full match score.
///
/// Request: `{"schema_version": 1, "best_of": 3, "sets": ["6-4", "6-3"]}`
/// Response: `{"schema_version": 1, "valid": true, "errors": [], "winner": "Home"}`
pub fn validate_match_json(request_json: &str) -> Result<String> {
    let request: ValidateMatchRequest = serde_json::from_str(request_json)?;
    check_schema_version(request.schema_version)?;

    let format = MatchFormat::from_best_of(request.best_of).ok_or_else(|| {
        CoreError::InvalidParameter(format!("best_of must be 3 or 5, got {}", request.best_of))
    })?;

    log::debug!("validate_match_json: best_of {} with {} sets", request.best_of, request.sets.len());

    let report = validate_match(format, &request.sets);
    let response = ValidateMatchResponse {
        schema_version: SCHEMA_VERSION,
        valid: report.valid,
        errors: report.errors,
        winner: report.winner,
    };
    Ok(serde_json::to_string(&response)?)
}

/// Infer the side currently ahead, for live form feedback.
///
/// Lenient by design: malformed entries are skipped, not reported.
pub fn get_winner_json(request_json: &str) -> Result<String> {
    let request: GetWinnerRequest = serde_json::from_str(request_json)?;
    check_schema_version(request.schema_version)?;

    let response =
        GetWinnerResponse { schema_version: SCHEMA_VERSION, winner: get_winner(&request.sets) };
    Ok(serde_json::to_string(&response)?)
}
