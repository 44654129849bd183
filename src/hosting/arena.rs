use crate::config::Config;
use crate::gameplay::*;

/// One game instance shared by all request workers.
///
/// The rule table is read-only; the dealer and the scoreboard each hold
/// their own lock for the duration of a single draw or increment.
pub struct Arena {
    rules: Rules,
    dealer: Dealer,
    scoreboard: Option<Scoreboard>,
}

impl Arena {
    pub fn new(rules: Rules, dealer: Dealer) -> Self {
        Self {
            rules,
            dealer,
            scoreboard: Some(Scoreboard::default()),
        }
    }
    /// Drops the cumulative score; `/score` then answers 404.
    pub fn unscored(self) -> Self {
        Self {
            scoreboard: None,
            ..self
        }
    }

    /// Deals a server hand, judges the round, and tallies it.
    pub fn play(&self, hand: &Hand) -> Outcome {
        let server = self.dealer.pick(&self.rules);
        let outcome = self.rules.evaluate(hand, &server);
        if let Some(scoreboard) = self.scoreboard.as_ref() {
            scoreboard.record(&outcome);
        }
        log::debug!("{:?} played: {}", hand.as_str(), outcome);
        outcome
    }
    pub fn score(&self) -> Option<Score> {
        self.scoreboard.as_ref().map(Scoreboard::score)
    }
    pub fn rules(&self) -> &Rules {
        &self.rules
    }
}

impl TryFrom<&Config> for Arena {
    type Error = anyhow::Error;
    fn try_from(config: &Config) -> Result<Self, Self::Error> {
        let arena = Self::new(config.rules()?, config.dealer());
        if config.scoring() {
            Ok(arena)
        } else {
            Ok(arena.unscored())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_matches_replayed_dealer() {
        let arena = Arena::new(Rules::default(), Dealer::seeded(3));
        let replay = Dealer::seeded(3);
        let player = Hand::from("SPOCK");
        for _ in 0..20 {
            let server = replay.pick(arena.rules());
            assert_eq!(arena.play(&player), arena.rules().evaluate(&player, &server));
        }
        assert_eq!(arena.score().map(|s| s.total()), Some(20));
    }

    #[test]
    fn unknown_hands_are_not_scored() {
        let arena = Arena::new(Rules::default(), Dealer::seeded(3));
        assert_eq!(arena.play(&Hand::unknown()), Outcome::Unknown);
        assert_eq!(arena.play(&Hand::from("FIRE")), Outcome::Unknown);
        assert_eq!(arena.score(), Some(Score::default()));
    }

    #[test]
    fn multiline_hands_are_unknown() {
        let arena = Arena::new(Rules::default(), Dealer::seeded(3));
        assert_eq!(arena.play(&Hand::from("ROCK\nINFO forged line")), Outcome::Unknown);
        assert_eq!(arena.score(), Some(Score::default()));
    }

    #[test]
    fn unscored_arena_has_no_score() {
        let arena = Arena::new(Rules::default(), Dealer::default()).unscored();
        arena.play(&Hand::from("ROCK"));
        assert_eq!(arena.score(), None);
    }
}
