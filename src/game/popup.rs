use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// A pop-up drawn over the board while the game isn't running
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Popup {
    /*
     * ┌────── PAUSED ──────┐
     * │ Resume (space)     │
     * │ Restart (r)        │
     * │ Quit (q)           │
     * └────────────────────┘
     */
    Paused,

    /*
     * ┌──── GAME OVER ─────┐
     * │ Final score: 40    │
     * │ New high score!    │
     * │                    │
     * │ Restart (r)        │
     * │ Quit (q)           │
     * └────────────────────┘
     */
    GameOver {
        score: u32,
        high_score: u32,
        new_high_score: bool,
    },
}

impl Popup {
    /// The width that should be used for the `Rect` passed to
    /// `Popup::render()`
    pub(super) const WIDTH: u16 = 22;

    /// The height that should be used for the `Rect` passed to
    /// `Popup::render()`
    pub(super) fn height(self) -> u16 {
        match self {
            Popup::Paused => 5,
            Popup::GameOver { .. } => 7,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Popup::Paused => " PAUSED ",
            Popup::GameOver { .. } => " GAME OVER ",
        }
    }

    fn lines(self) -> Vec<Line<'static>> {
        match self {
            Popup::Paused => vec![
                key_line("Resume", "space"),
                key_line("Restart", "r"),
                key_line("Quit", "q"),
            ],
            Popup::GameOver {
                score,
                high_score,
                new_high_score,
            } => {
                let record = if new_high_score {
                    Line::styled("New high score!", consts::HIGH_SCORE_STYLE)
                } else {
                    Line::from(format!("High score: {high_score}"))
                };
                vec![
                    Line::from(format!("Final score: {score}")),
                    record,
                    Line::default(),
                    key_line("Restart", "r"),
                    key_line("Quit", "q"),
                ]
            }
        }
    }
}

/// Render a menu entry of the form "{label} ({key})"
fn key_line(label: &'static str, key: &'static str) -> Line<'static> {
    Line::from_iter([
        Span::raw(label),
        Span::raw(" ("),
        Span::styled(key, consts::KEY_STYLE),
        Span::raw(")"),
    ])
}

impl Widget for Popup {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::bordered()
            .title(self.title())
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        block.render(area, buf);
        for (line, row) in self.lines().into_iter().zip(inner.rows()) {
            line.render(row, buf);
        }
    }
}
