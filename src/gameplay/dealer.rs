use super::Hand;
use super::Rules;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::sync::Mutex;
use std::sync::PoisonError;

/// Picks the server's hand, uniformly over the accepted set.
///
/// The random source is seeded once, either from OS entropy or from a
/// fixed seed so that a sequence of deals can be replayed.
pub struct Dealer {
    rng: Mutex<SmallRng>,
}

impl Dealer {
    pub fn seeded(seed: u64) -> Self {
        Self::from(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Dealer {
    fn default() -> Self {
        Self::from(SmallRng::from_os_rng())
    }
}

impl From<SmallRng> for Dealer {
    fn from(rng: SmallRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl Dealer {
    pub fn pick(&self, rules: &Rules) -> Hand {
        let hands = rules.hands();
        let index = self
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .random_range(0..hands.len());
        hands[index].clone()
    }
}
