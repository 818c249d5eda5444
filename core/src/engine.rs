use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::num::Saturating;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Lifecycle of a single game.
///
/// Valid transitions:
/// - Idle -> Running on `start`
/// - Running <-> Paused on `toggle_pause`
/// - Running -> Over on a colliding `tick`
/// - any state -> Running on `restart`
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    Idle,
    Running,
    Paused,
    Over,
}

impl GameStatus {
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    /// Indicates the game ended and only `restart` can revive it.
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Over)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Idle
    }
}

/// What the snake ran into when a game ended.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CollisionKind {
    Wall,
    Body,
}

/// Render projection handed to the presentation shell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub score: u32,
    /// Snake cells, head first.
    pub snake: Vec<Coord2>,
    pub food: Option<Coord2>,
}

/// Owns all game state and advances it one tick at a time.
///
/// The engine never schedules itself: the shell owns the timer, calls `tick`
/// at the configured period, and must serialize those calls. `restart` is a
/// pure state reset; cancelling a previously running timer before driving a
/// new game is the shell's job, otherwise two timers double-step the same
/// engine.
#[derive(Clone, Debug)]
pub struct GameEngine<G = RandomFoodGenerator> {
    config: GameConfig,
    body: VecDeque<Coord2>,
    // mirrors `body`; kept in sync by `start` and `tick`
    occupied: Array2<bool>,
    direction: Direction,
    pending: Direction,
    food: Option<Coord2>,
    score: Saturating<u32>,
    status: GameStatus,
    collision: Option<CollisionKind>,
    generator: G,
}

impl GameEngine {
    /// Engine with the default random food placement, reproducible per seed.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_generator(config, RandomFoodGenerator::new(seed))
    }
}

impl<G: FoodGenerator> GameEngine<G> {
    /// Engine in the idle state; call `start` to begin playing.
    pub fn with_generator(config: GameConfig, generator: G) -> Self {
        Self {
            config,
            body: VecDeque::new(),
            occupied: Array2::default(config.size.to_nd_index()),
            direction: Direction::Right,
            pending: Direction::Right,
            food: None,
            score: Saturating(0),
            status: Default::default(),
            collision: None,
            generator,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score.0
    }

    /// The direction committed at the last tick.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn food_cell(&self) -> Option<Coord2> {
        self.food
    }

    /// Set once a game ends; `None` while no collision has happened.
    pub fn collision(&self) -> Option<CollisionKind> {
        self.collision
    }

    pub fn head(&self) -> Option<Coord2> {
        self.body.front().copied()
    }

    pub fn snake_len(&self) -> CellCount {
        self.body.len().try_into().unwrap()
    }

    /// Snake cells, head first.
    pub fn snake_cells(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.body.iter().copied()
    }

    pub fn occupies(&self, cell: Coord2) -> bool {
        cell.0 < self.config.size.0
            && cell.1 < self.config.size.1
            && self.occupied[cell.to_nd_index()]
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            status: self.status,
            score: self.score.0,
            snake: self.body.iter().copied().collect(),
            food: self.food,
        }
    }

    /// Resets every field and begins a new game.
    pub fn start(&mut self) {
        let (head_x, head_y) = self.config.start_head();

        self.body.clear();
        self.occupied.fill(false);
        for i in 0..self.config.initial_len {
            let cell = (head_x - i, head_y);
            self.body.push_back(cell);
            self.occupied[cell.to_nd_index()] = true;
        }

        self.direction = Direction::Right;
        self.pending = Direction::Right;
        self.score = Saturating(0);
        self.collision = None;
        self.food = self.generator.place(&self.occupied);
        self.status = GameStatus::Running;

        log::debug!(
            "Game started: {:?} grid, snake length {}",
            self.config.size,
            self.config.initial_len
        );
    }

    /// Same as `start`; callable from any state, including mid-game.
    pub fn restart(&mut self) {
        self.start();
    }

    /// Flips Running <-> Paused; ignored while Idle or Over. No state besides
    /// the status changes, so resuming continues the exact same game.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            other => other,
        };
    }

    /// Queues a direction for the next tick.
    ///
    /// Dropped silently unless the game is running, and when `direction` is
    /// the exact opposite of the active one (the snake cannot reverse into
    /// its own neck). Between two ticks the last accepted request wins.
    pub fn request_direction(&mut self, direction: Direction) {
        if !self.status.is_running() {
            return;
        }
        if direction.is_opposite(self.direction) {
            return;
        }
        self.pending = direction;
    }

    /// Advances the game by one step.
    ///
    /// Returns `Skipped` unless the game is running. The collision check runs
    /// before the tail cell is vacated, so stepping onto the current tail
    /// counts as a self collision.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.status.is_running() {
            return TickOutcome::Skipped;
        }

        self.direction = self.pending;

        let head = *self.body.front().expect("running game has a snake");
        let candidate = match self.direction.step(head, self.config.size) {
            None => return self.end_game(CollisionKind::Wall),
            Some(cell) if self.occupied[cell.to_nd_index()] => {
                return self.end_game(CollisionKind::Body);
            }
            Some(cell) => cell,
        };

        self.body.push_front(candidate);
        self.occupied[candidate.to_nd_index()] = true;

        if self.food == Some(candidate) {
            self.score += self.config.food_reward;
            self.food = self.generator.place(&self.occupied);
            log::debug!("Ate food at {:?}, score {}", candidate, self.score.0);
            TickOutcome::Ate
        } else {
            let tail = self.body.pop_back().expect("snake keeps at least its head");
            self.occupied[tail.to_nd_index()] = false;
            TickOutcome::Moved
        }
    }

    fn end_game(&mut self, kind: CollisionKind) -> TickOutcome {
        self.collision = Some(kind);
        self.status = GameStatus::Over;
        log::debug!("Collision ({:?}), final score {}", kind, self.score.0);
        TickOutcome::Collided
    }
}
