//! Set rule validation
//!
//! Decides whether a parsed [`SetScore`] is a legal tennis set outcome. A set
//! is decided either by reaching 6 games with a 2-game lead, or by reaching 7
//! games via 7-5 or via 7-6 backed by a won tiebreak. No numeric shortcuts:
//! 8-6 and friends are rejected outright.

use thiserror::Error;

use crate::models::SetScore;

/// Rule violations for a single set, in the order they are checked.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetRuleError {
    #[error("games must be integers 0-7")]
    GamesOutOfRange,

    #[error("set cannot end in a draw")]
    Draw,

    #[error("invalid game score")]
    InvalidGameScore,

    #[error("tiebreak missing for 7-6")]
    TiebreakMissing,

    #[error("tiebreak supplied for non-tiebreak set")]
    TiebreakNotAllowed,

    #[error("tiebreak must reach ≥7 and lead by 2")]
    InvalidTiebreakScore,
}

/// Set rule checker
pub struct SetValidator;

impl SetValidator {
    /// Validate a parsed set against the full rule set.
    ///
    /// Rules apply in order and the first violation wins, so a nonsense line
    /// like 9-9 reports the range problem rather than the draw.
    pub fn validate(set: &SetScore) -> Result<(), SetRuleError> {
        Self::validate_games(set)?;
        Self::validate_tiebreak(set)?;
        Ok(())
    }

    /// Game-level rules: range, draw, and the legal (max, diff) combinations.
    fn validate_games(set: &SetScore) -> Result<(), SetRuleError> {
        if set.home > 7 || set.guest > 7 {
            return Err(SetRuleError::GamesOutOfRange);
        }
        if set.home == set.guest {
            return Err(SetRuleError::Draw);
        }

        let max = set.home.max(set.guest);
        let diff = set.home.abs_diff(set.guest);
        let ok = (max == 6 && diff >= 2) || (max == 7 && (diff == 1 || diff == 2));
        if !ok {
            return Err(SetRuleError::InvalidGameScore);
        }
        Ok(())
    }

    /// Tiebreak presence must match necessity (required exactly at 7-6), and
    /// a present tiebreak must itself be won: >= 7 points and a 2-point lead.
    fn validate_tiebreak(set: &SetScore) -> Result<(), SetRuleError> {
        let max = set.home.max(set.guest);
        let diff = set.home.abs_diff(set.guest);
        let needed = max == 7 && diff == 1;

        match (&set.tiebreak, needed) {
            (None, true) => Err(SetRuleError::TiebreakMissing),
            (Some(_), false) => Err(SetRuleError::TiebreakNotAllowed),
            (None, false) => Ok(()),
            (Some(tb), true) => {
                let tb_max = tb.home.max(tb.guest);
                let tb_diff = tb.home.abs_diff(tb.guest);
                if tb_max < 7 || tb_diff < 2 {
                    Err(SetRuleError::InvalidTiebreakScore)
                } else {
                    Ok(())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(home: u8, guest: u8) -> SetScore {
        SetScore::new(home, guest)
    }

    #[test]
    fn test_legal_plain_sets() {
        for (h, g) in [(6, 0), (6, 1), (6, 2), (6, 4), (0, 6), (4, 6), (7, 5), (5, 7)] {
            assert!(SetValidator::validate(&plain(h, g)).is_ok(), "{}-{} should be legal", h, g);
        }
    }

    #[test]
    fn test_games_out_of_range() {
        assert_eq!(SetValidator::validate(&plain(8, 6)), Err(SetRuleError::GamesOutOfRange));
        assert_eq!(SetValidator::validate(&plain(6, 9)), Err(SetRuleError::GamesOutOfRange));
        // Range is checked before the draw rule.
        assert_eq!(SetValidator::validate(&plain(9, 9)), Err(SetRuleError::GamesOutOfRange));
    }

    #[test]
    fn test_draw_rejected() {
        for g in 0..=7 {
            assert_eq!(SetValidator::validate(&plain(g, g)), Err(SetRuleError::Draw));
        }
    }

    #[test]
    fn test_invalid_game_scores() {
        for (h, g) in [(6, 5), (5, 6), (5, 3), (1, 0), (7, 0), (7, 4), (3, 0)] {
            assert_eq!(
                SetValidator::validate(&plain(h, g)),
                Err(SetRuleError::InvalidGameScore),
                "{}-{} should be an invalid game score",
                h,
                g
            );
        }
    }

    #[test]
    fn test_tiebreak_required_at_7_6() {
        assert_eq!(SetValidator::validate(&plain(7, 6)), Err(SetRuleError::TiebreakMissing));
        assert_eq!(SetValidator::validate(&plain(6, 7)), Err(SetRuleError::TiebreakMissing));
        assert!(SetValidator::validate(&SetScore::with_tiebreak(7, 6, 10, 8)).is_ok());
        assert!(SetValidator::validate(&SetScore::with_tiebreak(6, 7, 3, 7)).is_ok());
    }

    #[test]
    fn test_tiebreak_not_allowed_elsewhere() {
        assert_eq!(
            SetValidator::validate(&SetScore::with_tiebreak(6, 4, 7, 5)),
            Err(SetRuleError::TiebreakNotAllowed)
        );
        // 7-5 is decided in games; no tiebreak was played.
        assert_eq!(
            SetValidator::validate(&SetScore::with_tiebreak(7, 5, 7, 2)),
            Err(SetRuleError::TiebreakNotAllowed)
        );
    }

    #[test]
    fn test_tiebreak_score_rules() {
        // Must reach at least 7.
        assert_eq!(
            SetValidator::validate(&SetScore::with_tiebreak(7, 6, 6, 4)),
            Err(SetRuleError::InvalidTiebreakScore)
        );
        // Must lead by 2.
        assert_eq!(
            SetValidator::validate(&SetScore::with_tiebreak(7, 6, 8, 7)),
            Err(SetRuleError::InvalidTiebreakScore)
        );
        assert_eq!(
            SetValidator::validate(&SetScore::with_tiebreak(7, 6, 9, 8)),
            Err(SetRuleError::InvalidTiebreakScore)
        );
        // Extended tiebreaks are fine as long as the margin is there.
        assert!(SetValidator::validate(&SetScore::with_tiebreak(7, 6, 15, 13)).is_ok());
        assert!(SetValidator::validate(&SetScore::with_tiebreak(7, 6, 7, 0)).is_ok());
    }
}
