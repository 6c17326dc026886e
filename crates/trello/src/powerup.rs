//! Board power-ups.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::TrelloError;

static POWER_UP_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(voting|cardAging|calendar|recap)$").unwrap());

/// Optional board feature that can be toggled per board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerUp {
    Voting,
    CardAging,
    Calendar,
    Recap,
}

impl PowerUp {
    /// Name used in API paths and bodies.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Voting => "voting",
            Self::CardAging => "cardAging",
            Self::Calendar => "calendar",
            Self::Recap => "recap",
        }
    }
}

impl std::fmt::Display for PowerUp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PowerUp {
    type Err = TrelloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !POWER_UP_NAME.is_match(s) {
            return Err(TrelloError::InvalidPowerUp(s.to_string()));
        }
        Ok(match s {
            "voting" => Self::Voting,
            "cardAging" => Self::CardAging,
            "calendar" => Self::Calendar,
            _ => Self::Recap,
        })
    }
}
