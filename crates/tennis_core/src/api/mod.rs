pub mod json_api;

pub use json_api::{
    get_winner_json, validate_match_json, GetWinnerRequest, GetWinnerResponse,
    ValidateMatchRequest, ValidateMatchResponse,
};
