//! Terminal input module (engine-facing).
//!
//! Independent of any UI framework beyond `crossterm` event types. It turns
//! key events into normalized key identifiers and from there into
//! [`crate::types::GameAction`]s.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, key_identifier, should_quit};
