//! Structured set score
//!
//! A set token such as `"7-6(10-8)"` parses into a [`SetScore`]: games won by
//! each side plus the tiebreak sub-score when the set went to 7-6. Parsing
//! lives in [`crate::score::parser`]; rule checking in [`crate::score::rules`].

use serde::{Deserialize, Serialize};

use super::TeamSide;

/// Tiebreak points of a 7-6 set.
///
/// Both sides are always present together; a set without a tiebreak carries
/// `None` at the [`SetScore`] level rather than a half-filled pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TiebreakScore {
    pub home: u8,
    pub guest: u8,
}

/// Games won by each side in one set, plus the optional tiebreak.
///
/// Values here are parsed but not yet validated; the rule checker enforces
/// the 0-7 range and the legal (max, diff) combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetScore {
    pub home: u8,
    pub guest: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiebreak: Option<TiebreakScore>,
}

impl SetScore {
    pub const fn new(home: u8, guest: u8) -> Self {
        Self { home, guest, tiebreak: None }
    }

    pub const fn with_tiebreak(home: u8, guest: u8, tb_home: u8, tb_guest: u8) -> Self {
        Self { home, guest, tiebreak: Some(TiebreakScore { home: tb_home, guest: tb_guest }) }
    }

    /// Side with more games, or `None` for a drawn (and therefore illegal) line.
    pub fn winner(&self) -> Option<TeamSide> {
        match self.home.cmp(&self.guest) {
            std::cmp::Ordering::Greater => Some(TeamSide::Home),
            std::cmp::Ordering::Less => Some(TeamSide::Guest),
            std::cmp::Ordering::Equal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner() {
        assert_eq!(SetScore::new(6, 4).winner(), Some(TeamSide::Home));
        assert_eq!(SetScore::new(3, 6).winner(), Some(TeamSide::Guest));
        assert_eq!(SetScore::new(5, 5).winner(), None);
    }

    #[test]
    fn test_with_tiebreak() {
        let set = SetScore::with_tiebreak(7, 6, 10, 8);
        assert_eq!(set.tiebreak, Some(TiebreakScore { home: 10, guest: 8 }));
        assert_eq!(set.winner(), Some(TeamSide::Home));
    }
}
