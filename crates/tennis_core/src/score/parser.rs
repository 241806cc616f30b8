//! Set token parser
//!
//! Converts a textual set token into a [`SetScore`]:
//! `"6-4"` => 6 games to 4, `"7-6(10-8)"` => 7-6 with a 10-8 tiebreak.
//!
//! The accepted shape is `<home>-<guest>` optionally followed by
//! `(<tbHome>-<tbGuest>)`, all fields non-negative integers, with surrounding
//! whitespace trimmed. Anything else is a parse failure carrying the original
//! token for diagnostics; rule checking happens separately in
//! [`super::rules`].

use std::str::FromStr;

use thiserror::Error;

use crate::models::{SetScore, TiebreakScore};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseSetError {
    #[error("Malformed set \"{token}\"")]
    Malformed { token: String },
}

impl ParseSetError {
    fn malformed(token: &str) -> Self {
        ParseSetError::Malformed { token: token.to_string() }
    }
}

impl FromStr for SetScore {
    type Err = ParseSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();

        // Split off the optional "(tb-tb)" suffix before parsing the games.
        let (games, tiebreak_inner) = match token.find('(') {
            Some(idx) => {
                let inner = token[idx..]
                    .strip_prefix('(')
                    .and_then(|rest| rest.strip_suffix(')'))
                    .ok_or_else(|| ParseSetError::malformed(token))?;
                (&token[..idx], Some(inner))
            }
            None => (token, None),
        };

        let (home, guest) = parse_pair(games).ok_or_else(|| ParseSetError::malformed(token))?;

        let tiebreak = match tiebreak_inner {
            Some(inner) => {
                let (tb_home, tb_guest) =
                    parse_pair(inner).ok_or_else(|| ParseSetError::malformed(token))?;
                Some(TiebreakScore { home: tb_home, guest: tb_guest })
            }
            None => None,
        };

        Ok(SetScore { home, guest, tiebreak })
    }
}

/// Parse `"<a>-<b>"` into two numbers, rejecting any stray characters.
fn parse_pair(s: &str) -> Option<(u8, u8)> {
    let (a, b) = s.split_once('-')?;
    Some((parse_number(a)?, parse_number(b)?))
}

fn parse_number(s: &str) -> Option<u8> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // All-digit strings can still overflow u8; treat that as malformed too.
    s.parse().ok()
}
