//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the snake rules, state management, and the fixed-step
//! simulation. It has **no dependencies** on terminal I/O or rendering, making it:
//!
//! - **Deterministic**: Same seed and inputs produce identical rounds
//! - **Testable**: Every rule has unit tests next to it
//! - **Portable**: Runs in a terminal, headless, or behind any other front end
//!
//! # Module Structure
//!
//! - [`grid`]: Square grid centred on the origin, bounds and view mapping
//! - [`snake`]: Ordered body cells, head first
//! - [`food`]: Food placement (random trials, then a row-major scan)
//! - [`input_buffer`]: Single-slot heading mailbox with reversal rejection
//! - [`step`]: The per-tick transition
//! - [`game_state`]: Round state, lifecycle and restart
//! - [`scheduler`]: Fixed-timestep accumulator with catch-up
//! - [`snapshot`]: Read-only view for renderers and recorders
//!
//! # Game Rules
//!
//! - The snake starts three cells long, head at (1, 0), heading east
//! - One buffered turn per tick; turning straight back is ignored
//! - Leaving the grid or touching the body ends the round
//! - Food grows the snake by one and scores one point
//! - Filling the whole grid ends the round as a win
//! - After the round ends only restart (`R`) does anything
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameConfig, GameState, TimestepScheduler};
//! use tui_snake_types::{Direction, GameAction};
//!
//! let mut game = GameState::new(GameConfig::default().with_seed(12345)).unwrap();
//! let mut scheduler = TimestepScheduler::default();
//!
//! game.apply_action(GameAction::Turn(Direction::North)).unwrap();
//!
//! // 16ms frames; a step runs once 130ms have been banked.
//! let mut steps = 0;
//! for _ in 0..9 {
//!     steps += scheduler.advance(&mut game, 16, |_, _| {});
//! }
//! assert_eq!(steps, 1);
//! assert_eq!(game.direction(), Direction::North);
//! ```

pub mod config;
pub mod error;
pub mod food;
pub mod game_state;
pub mod grid;
pub mod input_buffer;
pub mod rng;
pub mod scheduler;
pub mod snake;
pub mod snapshot;
pub mod step;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use error::GameError;
pub use food::FoodSpawner;
pub use game_state::GameState;
pub use grid::Grid;
pub use input_buffer::InputBuffer;
pub use rng::SimpleRng;
pub use scheduler::TimestepScheduler;
pub use snake::Snake;
pub use snapshot::GameSnapshot;
