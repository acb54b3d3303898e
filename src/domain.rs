//! Domain layer
//!
//! Pure value types shared by the state, message and infrastructure layers:
//! - Selection geometry and its transitions
//! - Grid column definitions
//! - Clipboard export requests and results

pub mod copy;
pub mod grid;
pub mod selection;
