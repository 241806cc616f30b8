//! Match-level validation
//!
//! A left-to-right scan over set tokens with three pieces of state: the two
//! running set-win tallies and the index at which one side first clinched.
//! All problems accumulate into the report; nothing short-circuits and
//! nothing panics, so a form can show every error at once.

use log::debug;

use crate::models::{MatchFormat, MatchReport, TeamSide};
use crate::score::SetValidator;

/// Validate an ordered sequence of set tokens for the given format.
///
/// A match is valid when every set parses and obeys the set rules, one side
/// reaches the required set wins, and the sequence stops exactly at the
/// clinching set (dead rubbers are rejected).
pub fn validate_match(format: MatchFormat, sets: &[impl AsRef<str>]) -> MatchReport {
    let mut errors: Vec<String> = Vec::new();

    if sets.is_empty() {
        errors.push("no sets given".to_string());
    }
    if sets.len() > format.max_sets() {
        errors.push(format!(
            "best-of-{} cannot contain {} sets",
            format.best_of(),
            sets.len()
        ));
    }

    let need = format.required_set_wins();
    let mut home_wins = 0usize;
    let mut guest_wins = 0usize;
    let mut decided_at: Option<usize> = None;

    for (i, token) in sets.iter().enumerate() {
        let parsed = match token.as_ref().parse() {
            Ok(parsed) => parsed,
            Err(err) => {
                errors.push(format!("set {}: {}", i + 1, err));
                continue;
            }
        };
        if let Err(err) = SetValidator::validate(&parsed) {
            errors.push(format!("set {}: {}", i + 1, err));
            continue;
        }

        // Draws were rejected above, so a validated set always has a winner.
        match parsed.winner() {
            Some(TeamSide::Home) => home_wins += 1,
            Some(TeamSide::Guest) => guest_wins += 1,
            None => continue,
        }
        if decided_at.is_none() && (home_wins == need || guest_wins == need) {
            decided_at = Some(i);
        }
    }

    if home_wins < need && guest_wins < need {
        errors.push("match unfinished".to_string());
    }
    if let Some(decided) = decided_at {
        if decided != sets.len() - 1 {
            errors.push(format!("extra sets after match decided at set {}", decided + 1));
        }
    }

    let winner = if home_wins >= need {
        Some(TeamSide::Home)
    } else if guest_wins >= need {
        Some(TeamSide::Guest)
    } else {
        None
    };

    debug!(
        "validated {} sets ({:?}): home {} guest {} errors {}",
        sets.len(),
        format,
        home_wins,
        guest_wins,
        errors.len()
    );

    MatchReport::from_errors(errors, winner)
}

/// Lenient "who's ahead" inference for live form feedback.
///
/// The needed win count is inferred from the sequence length (more than 3
/// sets implies best-of-5). Tokens that do not parse are skipped and no set
/// rules are applied; only full match validation decides legality.
pub fn get_winner(sets: &[impl AsRef<str>]) -> Option<TeamSide> {
    let need = if sets.len() > 3 { 3 } else { 2 };
    let mut home_wins = 0usize;
    let mut guest_wins = 0usize;

    for token in sets {
        let Ok(parsed) = token.as_ref().parse::<crate::models::SetScore>() else {
            continue;
        };
        match parsed.winner() {
            Some(TeamSide::Home) => home_wins += 1,
            Some(TeamSide::Guest) => guest_wins += 1,
            None => {}
        }
    }

    if home_wins >= need {
        Some(TeamSide::Home)
    } else if guest_wins >= need {
        Some(TeamSide::Guest)
    } else {
        None
    }
}
