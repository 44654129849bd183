//! Rock-Paper-Scissors-Lizard-Spock over HTTP.
//!
//! A client posts a hand, the server deals one of its own, and the
//! rule table decides who won. Any odd-sized hand set works; the
//! classic five-hand game is the default.
//!
//! ## Modules
//!
//! - [`gameplay`] — Hands, rule tables, outcomes, dealing and scoring
//! - [`dto`] — JSON request and response bodies
//! - [`hosting`] — actix-web server and request handlers (feature `server`)
//! - [`config`] — Command line and environment configuration (feature `server`)
pub mod dto;
pub mod gameplay;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod hosting;

/// Default listening port.
pub const PORT: u16 = 4567;
/// Accepted hands, in rule-table order.
pub const HANDS: [&str; 5] = ["ROCK", "PAPER", "SCISSORS", "SPOCK", "LIZARD"];
/// Player hand substituted for request bodies that cannot be decoded.
pub const UNKNOWN: &str = "UNKNOWN";

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates the log directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log(dir: &std::path::Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(dir.join(format!("{}.log", time)))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
