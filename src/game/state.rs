use super::direction::{change_direction, Direction};
use super::food;
use super::geometry::{Cell, Geometry};
use super::snake::Snake;
use crate::consts;
use log::debug;
use rand::Rng;

/// Everything there is to know about a game in progress
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameState {
    pub(super) snake: Snake,
    /// `None` only when there was nowhere to put the food
    pub(super) food: Option<Cell>,
    /// The direction the snake will move in on the next tick
    pub(super) direction: Direction,
    pub(super) score: u32,
    pub(super) high_score: u32,
    pub(super) phase: Phase,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Phase {
    Running,
    Paused,
    Over {
        /// Whether the final score beat the previous high score
        new_high_score: bool,
    },
}

/// What happened on a tick
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Tick {
    /// The game is not running or has no board to run on, so nothing changed
    Idle,
    Moved,
    Ate,
    /// The game just ended
    Over { score: u32, new_high_score: bool },
}

impl GameState {
    /// Set up a new game on a board of the given geometry
    pub(crate) fn new<R: Rng>(high_score: u32, geometry: Geometry, rng: &mut R) -> GameState {
        let snake = Snake::new(consts::START_CELL);
        let food = food::spawn(rng, snake.occupied(), geometry);
        GameState {
            snake,
            food,
            direction: consts::START_DIRECTION,
            score: 0,
            high_score,
            phase: Phase::Running,
        }
    }

    /// Throw away the current game and start a new one, carrying over the
    /// high score
    pub(crate) fn restart<R: Rng>(&mut self, geometry: Geometry, rng: &mut R) {
        *self = GameState::new(self.high_score, geometry, rng);
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn food(&self) -> Option<Cell> {
        self.food
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn high_score(&self) -> u32 {
        self.high_score
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over { .. })
    }

    /// Handle a request from the player to turn.  Requests that would
    /// reverse the snake into itself are ignored, as are requests made after
    /// the game has ended.
    pub(crate) fn request_direction(&mut self, requested: Direction) {
        if !self.is_over() {
            self.direction = change_direction(self.direction, requested, self.snake.len());
        }
    }

    /// Pause a running game or resume a paused one
    pub(crate) fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            over @ Phase::Over { .. } => over,
        };
    }

    /// Move the food somewhere reachable if the board has shrunk out from
    /// under it
    pub(crate) fn refit_food<R: Rng>(&mut self, geometry: Geometry, rng: &mut R) {
        if self.is_over() || !geometry.is_playable() {
            return;
        }
        if let Some(food) = self.food.filter(|&f| !geometry.contains(f)) {
            self.food = food::spawn(rng, self.snake.occupied(), geometry);
            debug!(
                "Food at ({}, {}) is off the board; moved to {:?}",
                food.x, food.y, self.food
            );
        }
    }

    /// Advance the game by one step
    pub(crate) fn tick<R: Rng>(&mut self, geometry: Geometry, rng: &mut R) -> Tick {
        if self.phase != Phase::Running || !geometry.is_playable() {
            return Tick::Idle;
        }
        let head = self.snake.peek_move(self.direction);
        // The tail still counts as occupied here even though it's about to
        // move out of the way.
        if !geometry.contains(head) || self.snake.occupies(head) {
            return self.end();
        }
        if self.food == Some(head) {
            self.snake.advance(head, true);
            self.score = self.score.saturating_add(consts::FOOD_POINTS);
            debug!(
                "Snake ate food at ({}, {}); score is now {}",
                head.x, head.y, self.score
            );
            self.food = food::spawn(rng, self.snake.occupied(), geometry);
            if self.food.is_none() {
                debug!("No room left on the board for more food");
                return self.end();
            }
            Tick::Ate
        } else {
            self.snake.advance(head, false);
            if self.food.is_none() {
                self.food = food::spawn(rng, self.snake.occupied(), geometry);
                if self.food.is_none() {
                    return self.end();
                }
            }
            Tick::Moved
        }
    }

    fn end(&mut self) -> Tick {
        let new_high_score = self.score > self.high_score;
        if new_high_score {
            self.high_score = self.score;
        }
        self.phase = Phase::Over { new_high_score };
        Tick::Over {
            score: self.score,
            new_high_score,
        }
    }
}
