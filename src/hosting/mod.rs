//! HTTP hosting for the game.
//!
//! - [`Arena`] — The shared game instance handed to every worker
//! - [`Server`] — actix-web server wiring
//! - [`handlers`] — Route handlers for `/game`, `/score` and `/health`
mod arena;
mod server;

pub mod handlers;

pub use arena::*;
pub use server::*;
