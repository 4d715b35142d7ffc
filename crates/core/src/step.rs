//! Step simulator - one discrete tick
//!
//! Order per tick:
//!
//! 1. Commit the buffered heading (if any) and empty the mailbox
//! 2. Compute the new head from the current heading
//! 3. Outside the grid → round ends (wall)
//! 4. New head on any **pre-move** cell, tail included → round ends (self)
//! 5. Prepend the head; pop the tail unless food was eaten
//! 6. On food: score, keep the tail, place new food against the longer snake
//!
//! Step 4 runs before the tail is removed, so moving into the cell the tail is
//! about to vacate counts as a collision.

use crate::game_state::GameState;
use crate::types::{EndReason, Phase, StepEvent};

impl GameState {
    /// Advance the round by one tick
    ///
    /// Returns [`StepEvent::Idle`] without touching anything once the round has
    /// ended.
    pub fn step(&mut self) -> StepEvent {
        if self.phase.is_ended() {
            return StepEvent::Idle;
        }
        self.tick = self.tick.wrapping_add(1);

        if let Some(dir) = self.input.take() {
            self.direction = dir;
        }

        let new_head = self.snake.head().step(self.direction);

        if !self.grid.is_inside_bounds(new_head) {
            return self.end(EndReason::Wall);
        }

        if self.snake.contains(new_head) {
            return self.end(EndReason::SelfCollision);
        }

        let ate_food = self.food == Some(new_head);
        self.snake.push_head(new_head);

        if !ate_food {
            self.snake.pop_tail();
            return StepEvent::Moved { head: new_head };
        }

        self.score += 1;
        match self.spawner.respawn(&self.grid, &self.snake, &mut self.rng) {
            Ok(food) => {
                self.food = Some(food);
                tracing::debug!(score = self.score, len = self.snake.len(), "food eaten");
                StepEvent::Ate {
                    head: new_head,
                    score: self.score,
                }
            }
            // EmptyGrid: the snake covers every cell.
            Err(err) => {
                self.food = None;
                self.phase = Phase::Ended(EndReason::BoardFilled);
                tracing::info!(score = self.score, %err, "board filled");
                StepEvent::BoardFilled { score: self.score }
            }
        }
    }

    fn end(&mut self, reason: EndReason) -> StepEvent {
        self.phase = Phase::Ended(reason);
        tracing::info!(
            reason = reason.as_str(),
            score = self.score,
            ticks = self.tick,
            "round ended"
        );
        StepEvent::Collided { reason }
    }
}
