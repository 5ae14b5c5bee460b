use super::direction::Direction;
use super::geometry::Cell;
use std::collections::{HashSet, VecDeque};

/// The cells covered by the snake, from head to tail.
///
/// The cells are kept head-first: the front of `cells` is the head and the
/// back is the tail.  `occupied` holds the same cells for membership tests.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    cells: VecDeque<Cell>,
    occupied: HashSet<Cell>,
}

impl Snake {
    /// Create a snake consisting of only a head at `head`
    pub(crate) fn new(head: Cell) -> Snake {
        Snake {
            cells: VecDeque::from([head]),
            occupied: HashSet::from([head]),
        }
    }

    /// Create a snake from a list of cells, head first.
    ///
    /// # Panics
    ///
    /// Panics if `cells` is empty or contains duplicates.
    #[cfg(test)]
    pub(crate) fn from_cells<I: IntoIterator<Item = Cell>>(cells: I) -> Snake {
        let cells = cells.into_iter().collect::<VecDeque<_>>();
        let occupied = cells.iter().copied().collect::<HashSet<_>>();
        assert!(!cells.is_empty(), "snake must have a head");
        assert_eq!(occupied.len(), cells.len(), "snake cells must be distinct");
        Snake { cells, occupied }
    }

    pub(crate) fn head(&self) -> Cell {
        self.cells
            .front()
            .copied()
            .expect("snake should always have a head")
    }

    /// Return the snake's cells, head first
    pub(crate) fn cells(&self) -> &VecDeque<Cell> {
        &self.cells
    }

    pub(crate) fn occupied(&self) -> &HashSet<Cell> {
        &self.occupied
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    pub(crate) fn occupies(&self, cell: Cell) -> bool {
        self.occupied.contains(&cell)
    }

    /// Return where the head would be after moving one step in `direction`.
    /// The snake itself is not changed.
    pub(crate) fn peek_move(&self, direction: Direction) -> Cell {
        direction.step(self.head())
    }

    /// Move the head to `head`.  Unless `grew` is true, the tail cell is
    /// vacated so that the snake keeps its length.
    ///
    /// Collision checking is up to the caller and must be done beforehand.
    pub(crate) fn advance(&mut self, head: Cell, grew: bool) {
        self.cells.push_front(head);
        self.occupied.insert(head);
        if !grew {
            if let Some(tail) = self.cells.pop_back() {
                if tail != head {
                    self.occupied.remove(&tail);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn three_long() -> Snake {
        Snake::from_cells([Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)])
    }

    #[test]
    fn new_snake() {
        let snake = Snake::new(Cell::new(10, 10));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(10, 10));
        assert!(snake.occupies(Cell::new(10, 10)));
        assert!(!snake.occupies(Cell::new(10, 11)));
    }

    #[test]
    fn peek_move_does_not_mutate() {
        let snake = three_long();
        assert_eq!(snake.peek_move(Direction::Up), Cell::new(5, 4));
        assert_eq!(snake.peek_move(Direction::Right), Cell::new(6, 5));
        assert_eq!(snake, three_long());
    }

    #[test]
    fn advance_without_growing() {
        let mut snake = three_long();
        snake.advance(Cell::new(6, 5), false);
        assert_eq!(snake.len(), 3);
        assert_eq!(
            snake.cells(),
            &VecDeque::from([Cell::new(6, 5), Cell::new(5, 5), Cell::new(4, 5)])
        );
        assert!(!snake.occupies(Cell::new(3, 5)));
        assert_eq!(snake.occupied().len(), 3);
    }

    #[test]
    fn advance_growing() {
        let mut snake = three_long();
        snake.advance(Cell::new(5, 6), true);
        assert_eq!(snake.len(), 4);
        assert_eq!(
            snake.cells(),
            &VecDeque::from([
                Cell::new(5, 6),
                Cell::new(5, 5),
                Cell::new(4, 5),
                Cell::new(3, 5)
            ])
        );
        assert!(snake.occupies(Cell::new(3, 5)));
        assert_eq!(snake.occupied().len(), 4);
    }

    #[test]
    fn single_cell_snake_moves() {
        let mut snake = Snake::new(Cell::new(0, 0));
        snake.advance(Cell::new(1, 0), false);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(1, 0));
        assert!(!snake.occupies(Cell::new(0, 0)));
    }
}
