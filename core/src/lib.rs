#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod types;

/// Settings fixed at construction time; nothing here mutates mid-game.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub initial_len: Coord,
    pub food_reward: u32,
    /// Timer period the shell should drive `tick` with; the engine itself
    /// never reads the clock.
    pub tick_interval_ms: u32,
}

impl GameConfig {
    pub const fn new_unchecked(
        size: Coord2,
        initial_len: Coord,
        food_reward: u32,
        tick_interval_ms: u32,
    ) -> Self {
        Self {
            size,
            initial_len,
            food_reward,
            tick_interval_ms,
        }
    }

    /// A 400-unit canvas split into 20-unit cells: 20x20 grid, three starting
    /// segments, 10 points per food, one step every 150 ms.
    pub const fn classic() -> Self {
        Self::new_unchecked((20, 20), 3, 10, 150)
    }

    /// Validated constructor; reward and tick period keep the classic values.
    pub fn new(size: Coord2, initial_len: Coord) -> Result<Self> {
        if initial_len == 0 || size.0 == 0 || size.1 == 0 {
            return Err(GameError::GridTooSmall);
        }

        let config = Self {
            size,
            initial_len,
            ..Self::classic()
        };

        // the starting body extends left from the head and must fit its row,
        // and at least one cell must stay free for food
        let (head_x, _) = config.start_head();
        if CellCount::from(head_x) + 1 < CellCount::from(initial_len)
            || config.total_cells() <= CellCount::from(initial_len)
        {
            return Err(GameError::GridTooSmall);
        }

        Ok(config)
    }

    /// Derives a square grid from a drawing surface, e.g. 400 / 20 -> 20x20.
    pub fn from_canvas(canvas_px: u16, cell_px: u16) -> Result<Self> {
        if cell_px == 0 || canvas_px % cell_px != 0 {
            return Err(GameError::CanvasNotDivisible);
        }

        let cells_per_axis: Coord = (canvas_px / cell_px)
            .try_into()
            .map_err(|_| GameError::GridTooLarge)?;
        Self::new((cells_per_axis, cells_per_axis), Self::classic().initial_len)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// Head of the canonical starting snake; the body extends to its left.
    pub(crate) const fn start_head(&self) -> Coord2 {
        (self.size.0 / 4, self.size.1 / 2)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

/// Outcome of a single `tick`, for the shell to react to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TickOutcome {
    /// The tick arrived while the game was not running; nothing changed.
    Skipped,
    Moved,
    Ate,
    Collided,
}

impl TickOutcome {
    /// Whether this outcome could have changed what the shell renders.
    pub const fn has_update(self) -> bool {
        use TickOutcome::*;
        match self {
            Skipped => false,
            Moved => true,
            Ate => true,
            Collided => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_config_matches_the_original_canvas() {
        assert_eq!(
            GameConfig::from_canvas(400, 20).unwrap(),
            GameConfig::classic()
        );
        assert_eq!(GameConfig::classic().total_cells(), 400);
        assert_eq!(GameConfig::default(), GameConfig::classic());
    }

    #[test]
    fn canvas_must_divide_into_whole_cells() {
        assert_eq!(
            GameConfig::from_canvas(410, 20),
            Err(GameError::CanvasNotDivisible)
        );
        assert_eq!(
            GameConfig::from_canvas(400, 0),
            Err(GameError::CanvasNotDivisible)
        );
    }

    #[test]
    fn oversized_canvas_is_rejected() {
        assert_eq!(
            GameConfig::from_canvas(5120, 2),
            Err(GameError::GridTooLarge)
        );
    }

    #[test]
    fn grids_too_small_for_the_starting_snake_are_rejected() {
        assert_eq!(GameConfig::new((4, 3), 3), Err(GameError::GridTooSmall));
        assert_eq!(GameConfig::new((20, 20), 0), Err(GameError::GridTooSmall));
        assert_eq!(GameConfig::new((0, 20), 1), Err(GameError::GridTooSmall));
        assert!(GameConfig::new((8, 1), 3).is_ok());
    }

    #[test]
    fn skipped_is_the_only_outcome_without_an_update() {
        assert!(!TickOutcome::Skipped.has_update());
        assert!(TickOutcome::Moved.has_update());
        assert!(TickOutcome::Ate.has_update());
        assert!(TickOutcome::Collided.has_update());
    }
}
