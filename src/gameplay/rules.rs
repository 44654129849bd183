use super::Hand;
use super::Outcome;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::collections::HashSet;

/// Who-beats-whom table over an ordered, odd-sized set of hands.
///
/// Generalizes Rock-Paper-Scissors by skipping in twos around the circle:
/// with `N` hands and `K = (N - 1) / 2`, the hand at index `i` defeats the
/// hands at `i + 2, i + 4, ..., i + 2K` (mod `N`). Because `N` is odd,
/// stepping by two visits every other index exactly once before wrapping,
/// so each pair of distinct hands is decided in exactly one direction.
///
/// ```text
/// ROCK     > SCISSORS, LIZARD
/// PAPER    > SPOCK, ROCK
/// SCISSORS > LIZARD, PAPER
/// SPOCK    > ROCK, SCISSORS
/// LIZARD   > PAPER, SPOCK
/// ```
///
/// The table is immutable once built and is shared across request workers
/// without synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    hands: Vec<Hand>,
    beats: HashMap<Hand, BTreeSet<Hand>>,
}

impl Rules {
    /// Accepted hands, in the order the table was built from.
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }
    /// Number of hands each hand defeats.
    pub fn reach(&self) -> usize {
        (self.hands.len() - 1) / 2
    }
    pub fn contains(&self, hand: &Hand) -> bool {
        self.beats.contains_key(hand)
    }
    /// Hands defeated by `hand`, or `None` if it is not accepted.
    pub fn beats(&self, hand: &Hand) -> Option<&BTreeSet<Hand>> {
        self.beats.get(hand)
    }
    pub fn defeats(&self, winner: &Hand, loser: &Hand) -> bool {
        self.beats(winner).is_some_and(|beaten| beaten.contains(loser))
    }

    /// Judges the player's hand against the server's.
    ///
    /// Recognition is checked first: an unaccepted player hand is
    /// [`Outcome::Unknown`] even if it happens to equal the server hand.
    pub fn evaluate(&self, player: &Hand, server: &Hand) -> Outcome {
        match self.beats(player) {
            None => Outcome::Unknown,
            Some(_) if player == server => Outcome::Draw(server.clone()),
            Some(beaten) if beaten.contains(server) => Outcome::Win(server.clone()),
            Some(_) => Outcome::Lost(server.clone()),
        }
    }

    /// The skip-by-two construction, without validation.
    /// An even number of hands yields an unbalanced table in which some
    /// pairs defeat each other and others are undecided.
    fn table(hands: &[Hand]) -> HashMap<Hand, BTreeSet<Hand>> {
        let n = hands.len();
        let k = n.saturating_sub(1) / 2;
        hands
            .iter()
            .enumerate()
            .map(|(i, hand)| {
                let beaten = (1..=k)
                    .map(|j| (i + 2 * j) % n)
                    .map(|index| hands[index].clone())
                    .collect::<BTreeSet<Hand>>();
                (hand.clone(), beaten)
            })
            .collect()
    }
}

impl TryFrom<Vec<Hand>> for Rules {
    type Error = anyhow::Error;
    fn try_from(hands: Vec<Hand>) -> Result<Self, Self::Error> {
        anyhow::ensure!(!hands.is_empty(), "at least one hand is required");
        anyhow::ensure!(
            hands.len() % 2 == 1,
            "an odd number of hands is required, got {}",
            hands.len()
        );
        let mut seen = HashSet::with_capacity(hands.len());
        for hand in hands.iter() {
            anyhow::ensure!(!hand.as_str().trim().is_empty(), "blank hand name");
            anyhow::ensure!(!hand.is_unknown(), "{} is a reserved hand name", hand);
            anyhow::ensure!(seen.insert(hand), "duplicate hand {}", hand);
        }
        let beats = Self::table(&hands);
        Ok(Self { hands, beats })
    }
}

impl Default for Rules {
    fn default() -> Self {
        let hands = crate::HANDS.into_iter().map(Hand::from).collect::<Vec<_>>();
        let beats = Self::table(&hands);
        Self { hands, beats }
    }
}

impl std::fmt::Display for Rules {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let width = self.hands.iter().map(|h| h.as_str().len()).max().unwrap_or(0);
        for (i, hand) in self.hands.iter().enumerate() {
            let n = self.hands.len();
            let beaten = (1..=self.reach())
                .map(|j| self.hands[(i + 2 * j) % n].to_string())
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "{:<width$} > {}", hand.as_str(), beaten, width = width)?;
        }
        Ok(())
    }
}
