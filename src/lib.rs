//! # gridclip
//!
//! Range selection and clipboard export engine for spreadsheet-style data
//! grids backed by a D-Tale style data service.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`): selection store, grid layout and copy surface
//! - **Message** (`core::msg`): selection transitions, copy results, layout changes
//! - **Update** (`core::update`): pure state transitions returning commands
//! - **Command** (`core::cmd`): side effects (copy builds, clipboard writes, logging)
//! - **Translator** (`core::translator`): pointer and keyboard input to messages
//!
//! ## Example Usage
//!
//! ```rust
//! use gridclip::{
//!     core::msg::selection::SelectionMsg,
//!     domain::{grid::ColumnDef, selection::SelectionKind},
//!     update, AppState, Cmd, Msg,
//! };
//!
//! let state = AppState::new("1", vec![ColumnDef::new("a"), ColumnDef::new("b")], 10);
//!
//! let (state, _) = update(
//!     Msg::Selection(SelectionMsg::BeginRange { kind: SelectionKind::Rows, index: 3 }),
//!     state,
//! );
//! let (state, commands) = update(
//!     Msg::Selection(SelectionMsg::CommitRange { kind: SelectionKind::Rows }),
//!     state,
//! );
//!
//! assert!(state.copy.is_loading());
//! assert!(matches!(commands.as_slice(), [Cmd::BuildCopy { .. }]));
//! ```
//!
//! ## Modules
//!
//! - [`core`] - Elm architecture core
//! - [`domain`] - Selection geometry, columns and copy requests
//! - [`infrastructure`] - HTTP data service, clipboard, config and CLI
//! - [`integration`] - Runtime driving the update loop
//! - [`utils`] - Logging, panic handling and paths

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod test_helpers;
pub mod utils;

pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};
pub use integration::runtime::{Runtime, RuntimeStats};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
