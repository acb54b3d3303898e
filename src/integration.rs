//! Integration layer
//!
//! Wires the pure Elm core to the command executor:
//! - Runtime owning the state and the message queues
//! - Replay of recorded grid sessions

pub mod replay;
pub mod runtime;

pub use runtime::{Runtime, RuntimeStats};
