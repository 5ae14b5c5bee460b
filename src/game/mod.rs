mod board;
mod clock;
mod direction;
mod food;
mod geometry;
mod popup;
mod snake;
mod state;
pub(crate) use self::direction::Direction;
pub(crate) use self::geometry::{Cell, Geometry};
use self::board::Board;
use self::clock::Clock;
use self::popup::Popup;
use self::state::{GameState, Phase, Tick};
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::highscore::{HighScoreFile, HighScoreStore};
use crate::util::center_rect;
use crossterm::event::{poll, read, Event};
use log::{debug, info};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect, Size},
    text::Line,
    widgets::Widget,
    Frame,
};
use std::time::Instant;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng, S = HighScoreFile> {
    rng: R,
    store: S,
    state: GameState,
    geometry: Geometry,
    /// The tick schedule; `None` once the game is over
    clock: Option<Clock>,
}

impl Game<rand::rngs::ThreadRng, HighScoreFile> {
    pub(crate) fn new(store: HighScoreFile, area: Size) -> Self {
        Game::new_with_rng(store, area, rand::rng())
    }
}

impl<R: Rng, S: HighScoreStore> Game<R, S> {
    /// Start a game on a terminal of size `area`
    pub(crate) fn new_with_rng(mut store: S, area: Size, mut rng: R) -> Game<R, S> {
        let high_score = store.load_high_score();
        let geometry = Geometry::for_area(area);
        let state = GameState::new(high_score, geometry, &mut rng);
        info!(
            "Starting game on a {}x{} grid; high score is {high_score}",
            geometry.columns, geometry.rows
        );
        Game {
            rng,
            store,
            state,
            geometry,
            clock: Some(Clock::start(Instant::now(), consts::TICK_PERIOD)),
        }
    }

    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        if let Some(wait) = self.clock.map(|clock| clock.wait(Instant::now())) {
            if wait.is_zero() || !poll(wait)? {
                self.on_clock(Instant::now());
                return Ok(None);
            }
        }
        Ok(self.handle_event(read()?))
    }

    /// Run a tick if one is due at `now`
    fn on_clock(&mut self, now: Instant) {
        let Some(clock) = self.clock.as_mut() else {
            return;
        };
        if clock.is_due(now) {
            clock.fire(now);
            self.tick();
        }
    }

    fn tick(&mut self) {
        if let Tick::Over {
            score,
            new_high_score,
        } = self.state.tick(self.geometry, &mut self.rng)
        {
            self.clock = None;
            info!("Game over with a score of {score}");
            if new_high_score {
                info!("New high score: {score}");
                self.store.save_high_score(score);
            }
        }
    }

    /// Start a new game, replacing the current one along with its clock
    fn restart(&mut self) {
        self.state.restart(self.geometry, &mut self.rng);
        self.clock = Some(Clock::start(Instant::now(), consts::TICK_PERIOD));
        info!("Restarting game");
    }

    fn resize(&mut self, area: Size) {
        self.geometry = Geometry::for_area(area);
        self.state.refit_food(self.geometry, &mut self.rng);
        debug!(
            "Terminal resized to {}x{}; grid is now {}x{} with cell size {}",
            area.width,
            area.height,
            self.geometry.columns,
            self.geometry.rows,
            self.geometry.cell_size
        );
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match event {
            Event::Resize(width, height) => self.resize(Size { width, height }),
            Event::FocusLost => {
                if self.state.phase() == Phase::Running {
                    self.state.toggle_pause();
                }
            }
            _ => match Command::from_key_event(event.as_key_press_event()?)? {
                Command::Quit => return Some(Screen::Quit),
                Command::Up => self.state.request_direction(Direction::Up),
                Command::Down => self.state.request_direction(Direction::Down),
                Command::Left => self.state.request_direction(Direction::Left),
                Command::Right => self.state.request_direction(Direction::Right),
                Command::Pause => self.state.toggle_pause(),
                Command::Restart => {
                    if self.state.phase() != Phase::Running {
                        self.restart();
                    }
                }
            },
        }
        None
    }
}

impl<R, S> Game<R, S> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn popup(&self) -> Option<Popup> {
        match self.state.phase() {
            Phase::Running => None,
            Phase::Paused => Some(Popup::Paused),
            Phase::Over { new_high_score } => Some(Popup::GameOver {
                score: self.state.score(),
                high_score: self.state.high_score(),
                new_high_score,
            }),
        }
    }
}

impl<R, S> Widget for &Game<R, S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [score_area, board_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);
        Line::styled(
            format!(
                " Score: {}    High Score: {}",
                self.state.score(),
                self.state.high_score()
            ),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        if !self.geometry.is_playable() {
            Line::from("Terminal too small")
                .centered()
                .render(center_rect(board_area, Size::new(board_area.width, 1)), buf);
            return;
        }

        Board {
            state: &self.state,
            geometry: self.geometry,
        }
        .render(board_area, buf);

        if let Some(popup) = self.popup() {
            let popup_area = center_rect(
                board_area,
                Size {
                    width: Popup::WIDTH,
                    height: popup.height(),
                },
            );
            popup.render(popup_area, buf);
        }
    }
}
