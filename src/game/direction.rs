use super::geometry::Cell;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Axis {
    Horizontal,
    Vertical,
}

impl Direction {
    pub(crate) fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }

    /// The unit offset `(dx, dy)` of one step in this direction.  `y` grows
    /// downwards.
    pub(crate) fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Return the cell one step away from `cell` in this direction.  The
    /// result is not checked against any bounds.
    pub(crate) fn step(self, cell: Cell) -> Cell {
        let (dx, dy) = self.delta();
        Cell::new(cell.x.saturating_add(dx), cell.y.saturating_add(dy))
    }
}

/// Decide which direction a snake of length `snake_len` currently heading in
/// `current` should head in after the player asks for `requested`.
///
/// A request along the same axis as the current heading is ignored, as it
/// would either do nothing or turn the head back into the neck.  A snake
/// consisting of only a head has no neck, so it may turn any way it likes.
pub(crate) fn change_direction(
    current: Direction,
    requested: Direction,
    snake_len: usize,
) -> Direction {
    if requested.axis() != current.axis() || snake_len == 1 {
        requested
    } else {
        current
    }
}
