//! Game rules, independent of transport.
//!
//! - [`Hand`] — A named move from the accepted hand set
//! - [`Rules`] — Precomputed table of which hand defeats which
//! - [`Outcome`] / [`Verdict`] — Result of one round, with the revealed hand
//! - [`Dealer`] — Seedable source of server hands
//! - [`Scoreboard`] / [`Score`] — Cumulative win/loss/draw counters
pub mod dealer;
pub use dealer::*;

pub mod hand;
pub use hand::*;

pub mod outcome;
pub use outcome::*;

pub mod rules;
pub use rules::*;

pub mod score;
pub use score::*;
