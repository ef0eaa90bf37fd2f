use log::{debug, warn};

use crate::cell::{Cell, Coord};
use crate::error::Result;
use crate::grid::GridState;
use crate::selection::{PathTicket, SelectionController};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub painted: usize,
    pub skipped: Vec<Coord>,
}

/// Marks each coordinate of `path` as on the path. Coordinates are the grid
/// source's own and are translated to positions first. Start and end flags
/// are left alone; coordinates the grid does not have are skipped.
pub fn apply(grid: &mut GridState, path: &[Coord]) -> ApplyReport {
    let mut report = ApplyReport::default();
    for &coord in path {
        let Some(cell) = grid
            .locate(coord)
            .and_then(|(x, y)| grid.cell(x, y))
            .copied()
        else {
            warn!("path coordinate ({}, {}) is outside the maze", coord.x, coord.y);
            report.skipped.push(coord);
            continue;
        };
        let cell = Cell {
            on_path: true,
            ..cell
        };
        match grid.replace_cell(cell) {
            Ok(()) => report.painted += 1,
            Err(_) => report.skipped.push(coord),
        }
    }
    report
}

/// Applies a solver response only if its selection is still the current one.
pub fn apply_response(
    grid: &mut GridState,
    selection: &SelectionController,
    ticket: &PathTicket,
    path: &[Coord],
) -> Result<ApplyReport> {
    selection.check(ticket.epoch)?;
    let report = apply(grid, path);
    debug!(
        "path applied: {} painted, {} skipped",
        report.painted,
        report.skipped.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    fn grid(height: usize, width: usize) -> GridState {
        let cells = (0..height)
            .map(|y| (0..width).map(|x| Cell::new(x, y)).collect())
            .collect();
        let mut grid = GridState::new();
        grid.load(height, width, cells).unwrap();
        grid
    }

    #[test]
    fn keeps_start_and_end_flags() {
        let mut g = grid(2, 2);
        let mut sel = SelectionController::new();
        sel.click(&mut g, 0, 0).unwrap();
        let ticket = sel.click(&mut g, 1, 0).unwrap().unwrap();
        let path = [Coord { x: 0, y: 0 }, Coord { x: 1, y: 0 }];
        let report = apply_response(&mut g, &sel, &ticket, &path).unwrap();
        assert_eq!(report.painted, 2);

        let a = g.cell(0, 0).unwrap();
        let b = g.cell(1, 0).unwrap();
        assert!(a.on_path && a.is_start && !a.is_end);
        assert!(b.on_path && b.is_end && !b.is_start);
        assert!(!g.cell(0, 1).unwrap().on_path);
    }

    #[test]
    fn skips_out_of_bounds() {
        let mut g = grid(2, 2);
        let path = [
            Coord { x: 1, y: 1 },
            Coord { x: 2, y: 0 },
            Coord { x: -1, y: 0 },
        ];
        let report = apply(&mut g, &path);
        assert_eq!(report.painted, 1);
        assert_eq!(report.skipped, vec![Coord { x: 2, y: 0 }, Coord { x: -1, y: 0 }]);
        assert!(g.cell(1, 1).unwrap().on_path);
    }

    #[test]
    fn stale_response_mutates_nothing() {
        let mut g = grid(2, 2);
        let mut sel = SelectionController::new();
        sel.click(&mut g, 0, 0).unwrap();
        let ticket = sel.click(&mut g, 1, 1).unwrap().unwrap();
        sel.click(&mut g, 0, 1).unwrap();
        let rows = g.rows().to_vec();
        let before: Vec<Cell> = g.cells().copied().collect();

        let err = apply_response(&mut g, &sel, &ticket, &[Coord { x: 0, y: 0 }]).unwrap_err();
        assert!(err.is_stale());
        assert_eq!(before, g.cells().copied().collect::<Vec<_>>());
        assert!(rows.iter().zip(g.rows()).all(|(a, b)| Rc::ptr_eq(a, b)));
    }

    #[test]
    fn paints_transposed_path_on_non_square_grid() {
        // Source records number cells (row, column): two rows, three columns.
        let cells = (0..2)
            .map(|row| (0..3).map(|col| Cell::new(row, col)).collect())
            .collect();
        let mut g = GridState::new();
        g.load(2, 3, cells).unwrap();

        let path = [Coord { x: 0, y: 2 }, Coord { x: 1, y: 2 }];
        let report = apply(&mut g, &path);
        assert_eq!(report.painted, 2);
        assert!(report.skipped.is_empty());
        assert!(g.cell(2, 0).unwrap().on_path);
        assert!(g.cell(2, 1).unwrap().on_path);
        assert_eq!(g.cells().filter(|c| c.on_path).count(), 2);
    }
}
