//! Fixed-timestep scheduler.
//!
//! Render frames arrive at whatever rate the host manages. The scheduler banks
//! their elapsed time and runs one simulation step per full interval, running
//! several steps in one call after a slow frame instead of dropping them.

use crate::game_state::GameState;
use crate::types::{StepEvent, STEP_INTERVAL_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestepScheduler {
    interval_ms: u32,
    accumulator_ms: u32,
}

impl Default for TimestepScheduler {
    fn default() -> Self {
        Self::new(STEP_INTERVAL_MS)
    }
}

impl TimestepScheduler {
    /// `interval_ms` is clamped to at least 1ms.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulator_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Banked time not yet consumed by a step
    pub fn accumulator_ms(&self) -> u32 {
        self.accumulator_ms
    }

    /// Bank `elapsed_ms` and run every step that is now due
    ///
    /// Time only accumulates while the round is running. Each step's event is
    /// handed to `on_event`. Returns the number of steps run.
    pub fn advance(
        &mut self,
        game: &mut GameState,
        elapsed_ms: u32,
        mut on_event: impl FnMut(&GameState, StepEvent),
    ) -> u32 {
        if game.is_ended() {
            return 0;
        }
        self.accumulator_ms = self.accumulator_ms.saturating_add(elapsed_ms);

        let mut ticks = 0;
        while self.accumulator_ms >= self.interval_ms {
            let event = game.step();
            on_event(game, event);
            self.accumulator_ms -= self.interval_ms;
            ticks += 1;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::types::{Cell, Direction};

    fn long_runway() -> GameState {
        GameState::with_layout(
            GameConfig::default(),
            &[Cell::new(-9, 0), Cell::new(-10, 0)],
            Direction::East,
            Cell::new(0, 5),
        )
        .unwrap()
    }

    #[test]
    fn short_frames_accumulate_into_one_step() {
        let mut game = long_runway();
        let mut sched = TimestepScheduler::new(130);

        let mut total = 0;
        for _ in 0..8 {
            total += sched.advance(&mut game, 16, |_, _| {});
        }
        assert_eq!(total, 0);
        assert_eq!(sched.accumulator_ms(), 128);

        total += sched.advance(&mut game, 16, |_, _| {});
        assert_eq!(total, 1);
        assert_eq!(sched.accumulator_ms(), 14);
        assert_eq!(game.snake().head(), Cell::new(-8, 0));
    }

    #[test]
    fn slow_frame_catches_up() {
        let mut game = long_runway();
        let mut sched = TimestepScheduler::new(130);
        let mut events = Vec::new();

        let ticks = sched.advance(&mut game, 400, |_, e| events.push(e));
        assert_eq!(ticks, 3);
        assert_eq!(events.len(), 3);
        assert_eq!(sched.accumulator_ms(), 10);
        assert_eq!(game.snake().head(), Cell::new(-6, 0));
    }

    #[test]
    fn steps_after_game_over_in_same_frame_are_idle() {
        let mut game = GameState::with_layout(
            GameConfig::default(),
            &[Cell::new(9, 0)],
            Direction::East,
            Cell::new(0, 5),
        )
        .unwrap();
        let mut sched = TimestepScheduler::new(130);
        let mut events = Vec::new();

        sched.advance(&mut game, 260, |_, e| events.push(e));
        assert!(events[0].is_terminal());
        assert_eq!(events[1], StepEvent::Idle);
        assert_eq!(sched.accumulator_ms(), 0);

        // Nothing accumulates while the round is over.
        assert_eq!(sched.advance(&mut game, 1000, |_, _| {}), 0);
        assert_eq!(sched.accumulator_ms(), 0);
    }
}
