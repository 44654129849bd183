use crate::gameplay::Dealer;
use crate::gameplay::Hand;
use crate::gameplay::Rules;
use clap::Parser;
use std::path::PathBuf;

/// Upper bound on `--workers`.
const MAX_WORKERS: u64 = 256;

/// Startup options for the hosting server. Every flag except
/// `--no-score` can also be supplied through the environment.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[arg(
        long,
        env = "BIND_ADDR",
        default_value_t = format!("0.0.0.0:{}", crate::PORT),
        help = "Address to listen on"
    )]
    pub bind: String,
    #[arg(
        long,
        env = "RPSLS_HANDS",
        value_delimiter = ',',
        default_values_t = crate::HANDS.map(String::from),
        help = "Accepted hands in rule order, comma separated (odd count)"
    )]
    pub hands: Vec<String>,
    #[arg(long, env = "RPSLS_SEED", help = "Fixed seed for the server's hands")]
    pub seed: Option<u64>,
    #[arg(long, help = "Disable the cumulative score")]
    pub no_score: bool,
    #[arg(
        long,
        env = "RPSLS_WORKERS",
        default_value_t = 4,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..=MAX_WORKERS),
        help = "Number of HTTP worker threads"
    )]
    pub workers: usize,
    #[arg(long, env = "RPSLS_LOGS", default_value = "logs", help = "Directory for debug log files")]
    pub logs: PathBuf,
}

impl Config {
    pub fn rules(&self) -> anyhow::Result<Rules> {
        self.hands
            .iter()
            .map(|name| Hand::from(name.trim()))
            .collect::<Vec<_>>()
            .try_into()
    }
    pub fn dealer(&self) -> Dealer {
        match self.seed {
            Some(seed) => {
                log::info!("dealing with fixed seed {}", seed);
                Dealer::seeded(seed)
            }
            None => Dealer::default(),
        }
    }
    pub fn scoring(&self) -> bool {
        !self.no_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("hosting").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn hands_flag_is_comma_separated() {
        let config = parse(&["--hands", "ROCK, PAPER,SCISSORS"]);
        let rules = config.rules().unwrap();
        assert_eq!(rules.hands(), &["ROCK", "PAPER", "SCISSORS"].map(Hand::from));
    }

    #[test]
    fn even_hand_count_is_rejected() {
        assert!(parse(&["--hands", "ROCK,PAPER"]).rules().is_err());
    }

    #[test]
    fn no_score_disables_scoring() {
        assert!(!parse(&["--no-score"]).scoring());
    }

    #[test]
    fn seed_is_parsed() {
        assert_eq!(parse(&["--seed", "17"]).seed, Some(17));
    }

    #[test]
    fn rejects_bad_workers() {
        let args = ["hosting", "--workers", "many"];
        assert!(Config::try_parse_from(args).is_err());
        let args = ["hosting", "--workers", "0"];
        assert!(Config::try_parse_from(args).is_err());
        let args = ["hosting", "--workers", "257"];
        assert!(Config::try_parse_from(args).is_err());
    }

    #[test]
    fn workers_within_range() {
        assert_eq!(parse(&["--workers", "1"]).workers, 1);
        assert_eq!(parse(&["--workers", "256"]).workers, 256);
    }
}
