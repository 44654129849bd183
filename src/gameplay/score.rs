use super::Outcome;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Mutex;
use std::sync::PoisonError;

/// Win/loss/draw tally, from the player's side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    #[serde(rename = "Wins")]
    pub wins: u64,
    #[serde(rename = "Losses")]
    pub losses: u64,
    #[serde(rename = "Draws")]
    pub draws: u64,
}

impl Score {
    pub fn total(&self) -> u64 {
        self.wins + self.losses + self.draws
    }
}

/// Process-wide [`Score`] shared by concurrent request handlers.
///
/// Every update happens under one lock, so the three counters are never
/// torn and increments are never lost. Unknown outcomes are not counted.
#[derive(Debug, Default)]
pub struct Scoreboard(Mutex<Score>);

impl Scoreboard {
    pub fn record(&self, outcome: &Outcome) {
        let mut score = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        match outcome {
            Outcome::Win(_) => score.wins += 1,
            Outcome::Lost(_) => score.losses += 1,
            Outcome::Draw(_) => score.draws += 1,
            Outcome::Unknown => {}
        }
    }
    pub fn score(&self) -> Score {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
