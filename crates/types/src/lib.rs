//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behaviour beyond small conversions, so they
//! can be shared by the simulation core, the terminal view and the tick recorder.
//!
//! # Grid
//!
//! The playfield is a square of `GRID_CELLS x GRID_CELLS` cells centred on the
//! origin. With the default of 20 cells, valid coordinates are `-10..10` on both
//! axes. `gz` grows towards the north (away from the viewer).
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `STEP_INTERVAL_MS` | 130 | Fixed simulation step |
//! | `FRAME_MS` | 16 | Front-end frame budget (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, GameAction, GRID_CELLS};
//!
//! assert_eq!(Direction::East.delta(), (1, 0));
//! assert!(Direction::North.is_opposite(Direction::South));
//!
//! // Key identifiers are case-folded before lookup.
//! assert_eq!(GameAction::from_key("W"), Some(GameAction::Turn(Direction::North)));
//! assert_eq!(GameAction::from_key("ArrowLeft"), Some(GameAction::Turn(Direction::West)));
//! assert_eq!(GameAction::from_key("R"), Some(GameAction::Restart));
//! assert_eq!(GameAction::from_key("x"), None);
//!
//! assert_eq!(GRID_CELLS, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Cells per grid side (20 → coordinates in `-10..10`)
pub const GRID_CELLS: u16 = 20;

/// Fixed simulation step in milliseconds
pub const STEP_INTERVAL_MS: u32 = 130;

/// Front-end frame budget in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Snake length after start and after every restart
pub const START_LENGTH: usize = 3;

/// Head cell of a freshly started snake; the body trails west of it
pub const START_HEAD: Cell = Cell::new(1, 0);

/// Random trial cells before food placement falls back to a grid scan
pub const FOOD_MAX_ATTEMPTS: u32 = 200;

/// Smallest grid that still fits the starting snake
pub const MIN_GRID_CELLS: u16 = 4;

/// Largest supported grid; keeps the 2-column terminal view well inside `u16`
pub const MAX_GRID_CELLS: u16 = 200;


/// One discrete grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub gx: i32,
    pub gz: i32,
}

impl Cell {
    pub const fn new(gx: i32, gz: i32) -> Self {
        Self { gx, gz }
    }

    /// The neighbouring cell one step in `dir`
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dz) = dir.delta();
        Self {
            gx: self.gx + dx,
            gz: self.gz + dz,
        }
    }

    /// True when `other` shares an edge with this cell
    pub fn is_adjacent(self, other: Cell) -> bool {
        matches!(
            (self.gx.abs_diff(other.gx), self.gz.abs_diff(other.gz)),
            (0, 1) | (1, 0)
        )
    }
}

/// Snake heading
///
/// - **North**: `(0, +1)`, away from the viewer
/// - **South**: `(0, -1)`
/// - **East**: `(+1, 0)`
/// - **West**: `(-1, 0)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit step `(dx, dz)` for this heading
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// True when `other` is the exact negation of `self`
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// The head left the grid
    Wall,
    /// The head ran into the snake's own body
    SelfCollision,
    /// The snake covers every cell, so no food can be placed
    BoardFilled,
}

impl EndReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndReason::Wall => "wall",
            EndReason::SelfCollision => "self",
            EndReason::BoardFilled => "board_filled",
        }
    }
}

/// Coarse game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "phase", content = "reason")]
pub enum Phase {
    Running,
    Ended(EndReason),
}

impl Phase {
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Running)
    }

    pub fn is_ended(&self) -> bool {
        matches!(self, Phase::Ended(_))
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        match self {
            Phase::Running => None,
            Phase::Ended(reason) => Some(*reason),
        }
    }
}

/// Actions the player can issue between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Buffer a heading change for the next tick
    Turn(Direction),
    /// Start a new round (only honoured once the current one has ended)
    Restart,
}

impl GameAction {
    /// Look up a normalized key identifier
    ///
    /// The identifier is case-folded first, so `"W"`, `"w"`, `"ArrowUp"` and
    /// `"arrowup"` all resolve. Unknown keys return `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "arrowup" | "up" | "w" => Some(GameAction::Turn(Direction::North)),
            "arrowdown" | "down" | "s" => Some(GameAction::Turn(Direction::South)),
            "arrowleft" | "left" | "a" => Some(GameAction::Turn(Direction::West)),
            "arrowright" | "right" | "d" => Some(GameAction::Turn(Direction::East)),
            "r" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Turn(Direction::North) => "turnNorth",
            GameAction::Turn(Direction::South) => "turnSouth",
            GameAction::Turn(Direction::East) => "turnEast",
            GameAction::Turn(Direction::West) => "turnWest",
            GameAction::Restart => "restart",
        }
    }
}

/// Outcome of a single simulation tick
///
/// Emitted by the step simulator so the presentation layer and the recorder can
/// react without the core knowing about either of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum StepEvent {
    /// Tick while the round is over; nothing changed
    Idle,
    /// Head advanced, tail followed
    Moved { head: Cell },
    /// Head landed on food; the snake grew by one
    Ate { head: Cell, score: u32 },
    /// Head hit a wall or the body; the round is over
    Collided { reason: EndReason },
    /// Head ate the last free cell; the round is over
    BoardFilled { score: u32 },
}

impl StepEvent {
    pub fn is_terminal(&self) -> bool {
        matches!(self, StepEvent::Collided { .. } | StepEvent::BoardFilled { .. })
    }
}
