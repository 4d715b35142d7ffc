//! Game state module - owns everything one round needs
//!
//! Ties together the grid, the snake, the input mailbox, food placement and the
//! round lifecycle (Running → Ended → restart). The per-tick transition lives in
//! [`crate::step`].

use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::food::FoodSpawner;
use crate::grid::Grid;
use crate::input_buffer::InputBuffer;
use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) grid: Grid,
    pub(crate) snake: Snake,
    pub(crate) direction: Direction,
    pub(crate) input: InputBuffer,
    pub(crate) food: Option<Cell>,
    pub(crate) score: u32,
    pub(crate) phase: Phase,
    pub(crate) spawner: FoodSpawner,
    pub(crate) rng: SimpleRng,
    /// Monotonic round id (increments on restart).
    episode_id: u32,
    /// Ticks simulated in the current round.
    pub(crate) tick: u64,
}

impl GameState {
    /// Start a round with the canonical layout
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.grid_cells);
        let snake = Snake::straight(START_HEAD, Direction::East, START_LENGTH);
        let spawner = FoodSpawner::default();
        let mut rng = SimpleRng::new(config.seed);
        let food = spawner.respawn(&grid, &snake, &mut rng)?;

        Ok(Self {
            grid,
            snake,
            direction: Direction::East,
            input: InputBuffer::new(),
            food: Some(food),
            score: 0,
            phase: Phase::Running,
            spawner,
            rng,
            episode_id: 0,
            tick: 0,
        })
    }

    /// Start a round from an explicit layout
    ///
    /// Used for scripted scenarios and replays. The snake must lie inside the
    /// grid without repeating a cell and the food must be a free cell.
    pub fn with_layout(
        config: GameConfig,
        cells: &[Cell],
        heading: Direction,
        food: Cell,
    ) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.grid_cells);
        let snake = Snake::from_cells(cells)?;
        if let Some(out) = snake.cells().find(|&c| !grid.is_inside_bounds(c)) {
            return Err(GameError::InvalidLayout(format!(
                "cell ({}, {}) is outside the grid",
                out.gx, out.gz
            )));
        }
        if snake.contains(food) || !grid.is_inside_bounds(food) {
            return Err(GameError::InvalidFood(food));
        }

        Ok(Self {
            grid,
            snake,
            direction: heading,
            input: InputBuffer::new(),
            food: Some(food),
            score: 0,
            phase: Phase::Running,
            spawner: FoodSpawner::default(),
            rng: SimpleRng::new(config.seed),
            episode_id: 0,
            tick: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn buffered_direction(&self) -> Option<Direction> {
        self.input.pending()
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_ended(&self) -> bool {
        self.phase.is_ended()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Apply a game action
    ///
    /// While the round runs only turns have an effect; once it has ended only
    /// restart does. Returns whether anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> Result<bool> {
        let applied = match (self.phase, action) {
            (Phase::Running, GameAction::Turn(dir)) => {
                let accepted = self.input.offer(dir, self.direction);
                if !accepted {
                    tracing::trace!(
                        requested = dir.as_str(),
                        heading = self.direction.as_str(),
                        "turn rejected"
                    );
                }
                accepted
            }
            (Phase::Ended(_), GameAction::Restart) => self.restart()?,
            _ => false,
        };
        Ok(applied)
    }

    /// Map a normalized key identifier and apply it; unknown keys do nothing
    pub fn handle_key(&mut self, key: &str) -> Result<bool> {
        match GameAction::from_key(key) {
            Some(action) => self.apply_action(action),
            None => Ok(false),
        }
    }

    /// Reset to the canonical layout after a round has ended
    ///
    /// No-op while the round is still running. The food RNG continues its
    /// stream rather than being reseeded.
    ///
    /// Fails with [`GameError::EmptyGrid`] if food cannot be placed beside the
    /// fresh snake; the round then stays ended. A validated grid always has room.
    pub fn restart(&mut self) -> Result<bool> {
        if self.phase.is_running() {
            return Ok(false);
        }

        let snake = Snake::straight(START_HEAD, Direction::East, START_LENGTH);
        let food = self.spawner.respawn(&self.grid, &snake, &mut self.rng)?;

        self.snake = snake;
        self.direction = Direction::East;
        self.input.clear();
        self.food = Some(food);
        self.score = 0;
        self.phase = Phase::Running;
        self.tick = 0;
        self.episode_id = self.episode_id.wrapping_add(1);

        tracing::info!(episode = self.episode_id, "round restarted");
        Ok(true)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.snake.clear();
        out.snake.extend(self.snake.cells());
        out.food = self.food;
        out.score = self.score;
        out.ended = self.phase.is_ended();
        out.end_reason = self.phase.end_reason();
        out.heading = self.direction;
        out.pending = self.input.pending();
        out.grid_cells = self.grid.cells();
        out.episode_id = self.episode_id;
        out.tick = self.tick;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> GameState {
        GameState::new(GameConfig::default()).unwrap()
    }

    fn ended_state() -> GameState {
        let mut state = fresh();
        state.phase = Phase::Ended(EndReason::Wall);
        state.score = 7;
        state
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(GameConfig::default().with_seed(12345)).unwrap();

        assert_eq!(state.phase(), Phase::Running);
        assert_eq!(state.score(), 0);
        assert_eq!(state.direction(), Direction::East);
        assert_eq!(state.buffered_direction(), None);
        assert_eq!(state.episode_id(), 0);
        let cells: Vec<Cell> = state.snake().cells().collect();
        assert_eq!(cells, vec![Cell::new(1, 0), Cell::new(0, 0), Cell::new(-1, 0)]);

        let food = state.food().unwrap();
        assert!(state.grid().is_inside_bounds(food));
        assert!(!state.snake().contains(food));
    }

    #[test]
    fn test_invalid_grid_is_rejected() {
        let err = GameState::new(GameConfig::default().with_grid_cells(5)).unwrap_err();
        assert_eq!(err, GameError::InvalidGridSize(5));
    }

    #[test]
    fn test_layout_validation() {
        let cfg = GameConfig::default();
        assert!(matches!(
            GameState::with_layout(cfg, &[Cell::new(10, 0)], Direction::East, Cell::new(0, 0)),
            Err(GameError::InvalidLayout(_))
        ));
        assert_eq!(
            GameState::with_layout(cfg, &[Cell::new(0, 0)], Direction::East, Cell::new(0, 0))
                .unwrap_err(),
            GameError::InvalidFood(Cell::new(0, 0))
        );
    }

    #[test]
    fn test_turn_ignored_while_ended() {
        let mut state = ended_state();
        assert!(!state.apply_action(GameAction::Turn(Direction::North)).unwrap());
        assert_eq!(state.buffered_direction(), None);
    }

    #[test]
    fn test_restart_ignored_while_running() {
        let mut state = fresh();
        state.score = 3;
        assert!(!state.apply_action(GameAction::Restart).unwrap());
        assert!(!state.restart().unwrap());
        assert_eq!(state.score(), 3);
        assert_eq!(state.episode_id(), 0);
    }

    #[test]
    fn test_restart_resets_round_and_increments_episode_id() {
        let mut state = ended_state();
        state.input.offer(Direction::North, Direction::East);
        assert!(state.handle_key("R").unwrap());

        assert_eq!(state.phase(), Phase::Running);
        assert_eq!(state.score(), 0);
        assert_eq!(state.direction(), Direction::East);
        assert_eq!(state.buffered_direction(), None);
        assert_eq!(state.snake().len(), START_LENGTH);
        assert_eq!(state.snake().head(), START_HEAD);
        assert_eq!(state.episode_id(), 1);
        assert!(!state.snake().contains(state.food().unwrap()));
    }

    #[test]
    fn test_restart_without_room_for_food_is_an_error() {
        let mut state = ended_state();
        // No cells at all, so food placement has nowhere to go.
        state.grid = Grid::new(0);

        assert_eq!(state.restart(), Err(GameError::EmptyGrid));
        assert_eq!(
            state.apply_action(GameAction::Restart),
            Err(GameError::EmptyGrid)
        );
        assert_eq!(state.phase(), Phase::Ended(EndReason::Wall));
        assert_eq!(state.score(), 7);
        assert_eq!(state.episode_id(), 0);
    }

    #[test]
    fn test_unknown_key_has_no_effect() {
        let mut state = fresh();
        let before = state.snapshot();
        assert!(!state.handle_key("x").unwrap());
        assert!(!state.handle_key("Enter").unwrap());
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = fresh();
        state.handle_key("w").unwrap();
        let snap = state.snapshot();
        assert_eq!(snap.snake, state.snake().cells().collect::<Vec<_>>());
        assert_eq!(snap.food, state.food());
        assert_eq!(snap.pending, Some(Direction::North));
        assert!(!snap.ended);
        assert_eq!(snap.grid_cells, 20);
    }
}
