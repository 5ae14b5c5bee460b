use super::geometry::{Cell, Geometry};
use super::state::GameState;
use crate::consts;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Position, Rect},
    style::Style,
    widgets::{Block, Widget},
};

/// A widget for drawing the board: the border, the snake, and the food
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Board<'a> {
    pub(super) state: &'a GameState,
    pub(super) geometry: Geometry,
}

impl Widget for Board<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block_area = center_rect(area, self.geometry.screen_size());
        Block::bordered().render(block_area, buf);
        let mut canvas = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            cell_size: self.geometry.cell_size,
            buf,
        };
        let snake = self.state.snake();
        for &cell in snake.cells().iter().skip(1) {
            canvas.fill(cell, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        if let Some(food) = self.state.food() {
            canvas.fill(food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        if self.state.is_over() {
            canvas.fill(
                snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            canvas.fill(
                snake.head(),
                consts::SNAKE_HEAD_SYMBOL,
                consts::SNAKE_HEAD_STYLE,
            );
        }
    }
}

/// The inside of the board's border, addressed in grid cells.  Each grid cell
/// covers `cell_size` rows and `2 * cell_size` columns of the terminal.
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    cell_size: u16,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Fill the terminal cells covered by grid cell `cell`.  Anything that
    /// falls outside of the board (say, after the terminal has shrunk) is
    /// not drawn.
    fn fill(&mut self, cell: Cell, symbol: char, style: Style) {
        let size = i32::from(self.cell_size);
        let left = i32::from(self.area.x) + cell.x * size * 2;
        let top = i32::from(self.area.y) + cell.y * size;
        for y in top..(top + size) {
            for x in left..(left + size * 2) {
                let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
                    continue;
                };
                if !self.area.contains(Position { x, y }) {
                    continue;
                }
                if let Some(c) = self.buf.cell_mut((x, y)) {
                    c.set_char(symbol);
                    c.set_style(Style::reset().patch(style));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::direction::Direction;
    use crate::game::snake::Snake;
    use crate::game::state::Phase;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    fn symbol_at(buf: &Buffer, x: u16, y: u16) -> &str {
        buf.cell((x, y)).map_or("", |c| c.symbol())
    }

    fn state() -> GameState {
        let mut rng = ChaCha12Rng::seed_from_u64(0);
        let mut state = GameState::new(0, Geometry::new(20, 20), &mut rng);
        state.snake = Snake::from_cells([Cell::new(2, 1), Cell::new(1, 1), Cell::new(0, 1)]);
        state.food = Some(Cell::new(3, 3));
        state.direction = Direction::Right;
        state
    }

    #[test]
    fn draws_cells_scaled() {
        let state = state();
        let geometry = Geometry {
            cell_size: 2,
            columns: 4,
            rows: 4,
        };
        let area = Rect::new(0, 0, 18, 10);
        let mut buffer = Buffer::empty(area);
        Board {
            state: &state,
            geometry,
        }
        .render(area, &mut buffer);
        let expected = Buffer::with_lines([
            "┌────────────────┐",
            "│                │",
            "│                │",
            "│▓▓▓▓▓▓▓▓████    │",
            "│▓▓▓▓▓▓▓▓████    │",
            "│                │",
            "│                │",
            "│            ●●●●│",
            "│            ●●●●│",
            "└────────────────┘",
        ]);
        for y in 0..10 {
            for x in 0..18 {
                assert_eq!(
                    symbol_at(&buffer, x, y),
                    symbol_at(&expected, x, y),
                    "mismatch at ({x}, {y})"
                );
            }
        }
        assert_eq!(buffer.cell((9, 3)).unwrap().fg, consts::SNAKE_HEAD_STYLE.fg.unwrap());
        assert_eq!(buffer.cell((1, 4)).unwrap().fg, consts::SNAKE_STYLE.fg.unwrap());
        assert_eq!(buffer.cell((16, 8)).unwrap().fg, consts::FOOD_STYLE.fg.unwrap());
    }

    #[test]
    fn crashed_head() {
        let mut state = state();
        state.phase = Phase::Over {
            new_high_score: false,
        };
        let geometry = Geometry {
            cell_size: 1,
            columns: 4,
            rows: 4,
        };
        let area = Rect::new(0, 0, 10, 6);
        let mut buffer = Buffer::empty(area);
        Board {
            state: &state,
            geometry,
        }
        .render(area, &mut buffer);
        assert_eq!(symbol_at(&buffer, 5, 2), "×");
        assert_eq!(symbol_at(&buffer, 6, 2), "×");
        assert_eq!(symbol_at(&buffer, 7, 2), " ");
    }

    #[test]
    fn cells_off_the_board_are_clipped() {
        let mut state = state();
        state.snake = Snake::from_cells([Cell::new(5, 0), Cell::new(4, 0), Cell::new(3, 0)]);
        state.food = None;
        let geometry = Geometry {
            cell_size: 1,
            columns: 4,
            rows: 4,
        };
        let area = Rect::new(0, 0, 10, 6);
        let mut buffer = Buffer::empty(area);
        Board {
            state: &state,
            geometry,
        }
        .render(area, &mut buffer);
        assert_eq!(symbol_at(&buffer, 7, 1), "▓");
        assert_eq!(symbol_at(&buffer, 8, 1), "▓");
        assert_eq!(symbol_at(&buffer, 9, 1), "│");
    }
}
