use ratatui::layout::{Rect, Size};
use std::path::PathBuf;

/// Return a `Rect` of the given size centered within `area`.  If `size` is
/// larger than `area` in either dimension, it is clamped to `area`.
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let width = size.width.min(area.width);
    let height = size.height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Return the default path to the high score file
pub(crate) fn high_score_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join("gridsnake").join("highscore.json"))
}
