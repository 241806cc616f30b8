//! Match format and team side types
//!
//! A match record names its two sides `home` and `guest`; the home side is
//! always the first number of a set token such as "6-4".

use serde::{Deserialize, Serialize};

/// One of the two sides of a match record (`players.home` / `players.guest`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamSide {
    Home,
    Guest,
}

impl TeamSide {
    /// The other side of the net.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            TeamSide::Home => TeamSide::Guest,
            TeamSide::Guest => TeamSide::Home,
        }
    }
}

/// Best-of-N match format.
///
/// Amateur club play is best-of-3; best-of-5 covers tournament formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MatchFormat {
    #[default]
    BestOf3,
    BestOf5,
}

impl MatchFormat {
    /// Total sets the format allows.
    #[inline]
    pub const fn best_of(self) -> usize {
        match self {
            MatchFormat::BestOf3 => 3,
            MatchFormat::BestOf5 => 5,
        }
    }

    /// Set wins needed to clinch the match: floor(N/2) + 1.
    #[inline]
    pub const fn required_set_wins(self) -> usize {
        self.best_of() / 2 + 1
    }

    /// Upper bound on the number of sets a complete match can contain.
    #[inline]
    pub const fn max_sets(self) -> usize {
        self.best_of()
    }

    /// Map a raw best-of count (from the JSON API) to a format.
    pub const fn from_best_of(best_of: u8) -> Option<Self> {
        match best_of {
            3 => Some(MatchFormat::BestOf3),
            5 => Some(MatchFormat::BestOf5),
            _ => None,
        }
    }
}
