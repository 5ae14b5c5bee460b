use super::geometry::{Cell, Geometry};
use rand::Rng;
use std::collections::HashSet;

/// Pick a uniformly random cell of the grid that is not in `occupied`.
///
/// Returns `None` if the grid has no free cells, either because it is empty
/// or because `occupied` covers all of it.
pub(crate) fn spawn<R: Rng>(
    rng: &mut R,
    occupied: &HashSet<Cell>,
    geometry: Geometry,
) -> Option<Cell> {
    let taken = occupied.iter().filter(|&&c| geometry.contains(c)).count();
    if taken >= geometry.cell_count() {
        return None;
    }
    loop {
        let cell = Cell::new(
            rng.random_range(geometry.x_range()),
            rng.random_range(geometry.y_range()),
        );
        if !occupied.contains(&cell) {
            return Some(cell);
        }
    }
}
