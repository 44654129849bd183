use super::Hand;
use serde::Deserialize;
use serde::Serialize;

/// Categorical result of a round, from the player's side.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Win,
    Lost,
    Draw,
    Unknown,
}

/// Result of a round together with the hand the server played.
///
/// The server hand is only revealed when the player's hand was recognized,
/// so [`Outcome::Unknown`] carries nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Win(Hand),
    Lost(Hand),
    Draw(Hand),
    Unknown,
}

impl Outcome {
    pub fn verdict(&self) -> Verdict {
        match self {
            Self::Win(_) => Verdict::Win,
            Self::Lost(_) => Verdict::Lost,
            Self::Draw(_) => Verdict::Draw,
            Self::Unknown => Verdict::Unknown,
        }
    }
    /// The opposing hand, absent exactly when the verdict is unknown.
    pub fn revealed(&self) -> Option<&Hand> {
        match self {
            Self::Win(hand) | Self::Lost(hand) | Self::Draw(hand) => Some(hand),
            Self::Unknown => None,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "WIN"),
            Self::Lost => write!(f, "LOST"),
            Self::Draw => write!(f, "DRAW"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.revealed() {
            Some(hand) => write!(f, "{} vs {}", self.verdict(), hand),
            None => write!(f, "{}", self.verdict()),
        }
    }
}
