use ndarray::Array2;

use crate::Coord2;

pub use random::*;

mod random;

/// Strategy for choosing where the next food appears.
pub trait FoodGenerator {
    /// Picks a free cell given the snake occupancy mask, or `None` when the
    /// grid has no free cell left.
    fn place(&mut self, occupied: &Array2<bool>) -> Option<Coord2>;
}
