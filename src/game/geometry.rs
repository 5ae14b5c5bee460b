use crate::consts;
use ratatui::layout::Size;
use std::ops::Range;

/// A position on the game grid, relative to the top-left corner.  Coordinates
/// are signed so that a move off the top or left edge can be represented
/// before it is rejected.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Cell {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Cell {
    pub(crate) const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }
}

/// The discrete dimensions of the board, derived from its size in "pixels".
///
/// On the terminal, a pixel is one row tall and two columns wide, so that
/// square grid cells look roughly square.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Geometry {
    /// Side length of a single grid cell, in pixels
    pub(crate) cell_size: u16,
    pub(crate) columns: u16,
    pub(crate) rows: u16,
}

impl Geometry {
    /// Divide a square board `board_size` pixels on a side into cells so that
    /// roughly `cells_per_side` of them fit along each edge.
    ///
    /// A board too small to hold `cells_per_side` pixels produces a geometry
    /// with no cells at all.
    pub(crate) fn new(board_size: u16, cells_per_side: u16) -> Geometry {
        let cell_size = board_size.checked_div(cells_per_side).unwrap_or(0);
        let side = board_size.checked_div(cell_size).unwrap_or(0);
        Geometry {
            cell_size,
            columns: side,
            rows: side,
        }
    }

    /// Compute the geometry of the largest square board that fits in a
    /// terminal of the given size, after reserving the score bar and the
    /// board's border.
    pub(crate) fn for_area(area: Size) -> Geometry {
        let width = area.width.saturating_sub(2) / 2;
        let height = area.height.saturating_sub(3);
        Geometry::new(width.min(height), consts::CELLS_PER_SIDE)
    }

    /// Returns `false` if the board has no cells to play on
    pub(crate) fn is_playable(self) -> bool {
        self.columns > 0 && self.rows > 0
    }

    pub(crate) fn contains(self, cell: Cell) -> bool {
        self.x_range().contains(&cell.x) && self.y_range().contains(&cell.y)
    }

    pub(crate) fn x_range(self) -> Range<i32> {
        0..i32::from(self.columns)
    }

    pub(crate) fn y_range(self) -> Range<i32> {
        0..i32::from(self.rows)
    }

    pub(crate) fn cell_count(self) -> usize {
        usize::from(self.columns) * usize::from(self.rows)
    }

    /// The size of the board on the terminal, including its border
    pub(crate) fn screen_size(self) -> Size {
        let cells_wide = self.columns.saturating_mul(self.cell_size);
        let cells_high = self.rows.saturating_mul(self.cell_size);
        Size {
            width: cells_wide.saturating_mul(2).saturating_add(2),
            height: cells_high.saturating_add(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(400, 20, 20, 20)]
    #[case(410, 20, 20, 20)]
    #[case(21, 20, 1, 21)]
    #[case(45, 20, 2, 22)]
    #[case(20, 20, 1, 20)]
    #[case(19, 20, 0, 0)]
    #[case(0, 20, 0, 0)]
    #[case(100, 0, 0, 0)]
    fn test_new(
        #[case] board_size: u16,
        #[case] cells_per_side: u16,
        #[case] cell_size: u16,
        #[case] side: u16,
    ) {
        let geom = Geometry::new(board_size, cells_per_side);
        assert_eq!(
            geom,
            Geometry {
                cell_size,
                columns: side,
                rows: side
            }
        );
        assert_eq!(geom.is_playable(), side > 0);
    }

    #[rstest]
    #[case(Size::new(80, 24), 1, 21)]
    #[case(Size::new(200, 60), 2, 28)]
    #[case(Size::new(40, 50), 0, 0)]
    #[case(Size::new(80, 22), 0, 0)]
    #[case(Size::new(0, 0), 0, 0)]
    fn test_for_area(#[case] area: Size, #[case] cell_size: u16, #[case] side: u16) {
        let geom = Geometry::for_area(area);
        assert_eq!(geom.cell_size, cell_size);
        assert_eq!(geom.columns, side);
        assert_eq!(geom.rows, side);
    }

    #[rstest]
    #[case(Cell::new(0, 0), true)]
    #[case(Cell::new(19, 19), true)]
    #[case(Cell::new(20, 5), false)]
    #[case(Cell::new(5, 20), false)]
    #[case(Cell::new(-1, 5), false)]
    #[case(Cell::new(5, -1), false)]
    fn test_contains(#[case] cell: Cell, #[case] inside: bool) {
        let geom = Geometry::new(400, 20);
        assert_eq!(geom.contains(cell), inside);
    }

    #[test]
    fn empty_geometry_contains_nothing() {
        let geom = Geometry::new(0, 20);
        assert!(!geom.contains(Cell::new(0, 0)));
        assert_eq!(geom.cell_count(), 0);
    }

    #[test]
    fn screen_size() {
        let geom = Geometry::new(45, 20);
        assert_eq!(geom.screen_size(), Size::new(90, 46));
    }
}
