use ndarray::Array2;
use rand::prelude::*;

use crate::{Coord2, FoodGenerator, ToNdIndex};

/// Rejection sampling keeps placement uniform; the cap bounds the loop when
/// the snake covers most of the grid.
const MAX_SAMPLE_ATTEMPTS: u32 = 64;

/// Default placement strategy: uniform over free cells, reproducible per seed.
#[derive(Clone, Debug)]
pub struct RandomFoodGenerator {
    rng: SmallRng,
}

impl RandomFoodGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl FoodGenerator for RandomFoodGenerator {
    fn place(&mut self, occupied: &Array2<bool>) -> Option<Coord2> {
        let dim = occupied.dim();
        let size: Coord2 = (dim.0.try_into().unwrap(), dim.1.try_into().unwrap());

        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let cell = (
                self.rng.random_range(0..size.0),
                self.rng.random_range(0..size.1),
            );
            if !occupied[cell.to_nd_index()] {
                return Some(cell);
            }
        }

        // nearly full grid: pick uniformly among the remaining free cells
        let free = occupied.iter().filter(|&&cell| !cell).count();
        if free == 0 {
            log::warn!("No free cell left on the grid, food not placed");
            return None;
        }
        log::warn!(
            "Food sampling exhausted {} attempts, scanning {} free cells",
            MAX_SAMPLE_ATTEMPTS,
            free
        );

        let target = self.rng.random_range(0..free);
        occupied
            .indexed_iter()
            .filter(|(_, cell)| !**cell)
            .nth(target)
            .map(|((x, y), _)| (x.try_into().unwrap(), y.try_into().unwrap()))
    }
}
