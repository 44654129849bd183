//! JSON bodies for the game API.
//!
//! Bridges the transport-free [`crate::gameplay`] types to the wire format
//! clients already speak: `{"hand": ...}` in, `{"result", "computerHand"}` out.
mod request;
mod response;

pub use request::*;
pub use response::*;
