//! hosting Server Binary
//!
//! Runs the HTTP server that plays Rock-Paper-Scissors-Lizard-Spock
//! against its clients and keeps a running score.

use clap::Parser;
use rpsls::config::Config;
use rpsls::hosting::Arena;
use rpsls::hosting::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    rpsls::log(&config.logs)?;
    let arena = Arena::try_from(&config)?;
    log::info!("accepted hands:\n{}", arena.rules());
    Server::run(arena, &config.bind, config.workers).await?;
    Ok(())
}
