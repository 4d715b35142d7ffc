//! TUI Snake (workspace facade crate).
//!
//! Re-exports the member crates under `tui_snake::{core,input,term,types}` and
//! hosts the binary-side plumbing: env config, tracing setup and the tick
//! recorder.

pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_term as term;
pub use tui_snake_types as types;

pub mod config;
pub mod logging;
pub mod record;
