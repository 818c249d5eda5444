use serde::{Deserialize, Serialize};

/// Single coordinate axis used for grid width, height, and positions.
pub type Coord = u8;

/// Count type used for cell totals and snake length.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`; y grows toward the bottom row.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// One of the four cardinal movement directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector `(dx, dy)`, y pointing down to match screen rows.
    pub const fn vector(self) -> (i8, i8) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    pub const fn is_opposite(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Up, Self::Down)
                | (Self::Down, Self::Up)
                | (Self::Left, Self::Right)
                | (Self::Right, Self::Left)
        )
    }

    /// One cell forward from `from`, or `None` when that leaves the grid.
    pub fn step(self, from: Coord2, bounds: Coord2) -> Option<Coord2> {
        let (dx, dy) = self.vector();
        let x = from.0.checked_add_signed(dx)?;
        let y = from.1.checked_add_signed(dy)?;
        (x < bounds.0 && y < bounds.1).then_some((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    #[test]
    fn exactly_the_reverse_direction_is_opposite() {
        assert!(Up.is_opposite(Down));
        assert!(Down.is_opposite(Up));
        assert!(Left.is_opposite(Right));
        assert!(Right.is_opposite(Left));

        assert!(!Up.is_opposite(Left));
        assert!(!Right.is_opposite(Down));
        assert!(!Left.is_opposite(Left));
    }

    #[test]
    fn step_moves_one_cell_with_y_down() {
        let bounds = (20, 20);
        assert_eq!(Up.step((5, 10), bounds), Some((5, 9)));
        assert_eq!(Down.step((5, 10), bounds), Some((5, 11)));
        assert_eq!(Left.step((5, 10), bounds), Some((4, 10)));
        assert_eq!(Right.step((5, 10), bounds), Some((6, 10)));
    }

    #[test]
    fn step_off_any_edge_is_none() {
        let bounds = (20, 20);
        assert_eq!(Up.step((0, 0), bounds), None);
        assert_eq!(Left.step((0, 0), bounds), None);
        assert_eq!(Down.step((19, 19), bounds), None);
        assert_eq!(Right.step((19, 19), bounds), None);
    }
}
