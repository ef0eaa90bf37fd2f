use log::debug;

use crate::cell::Cell;
use crate::epoch::{Epoch, EpochCounter, Ticket};
use crate::error::{MazeError, Result};
use crate::grid::GridState;
use crate::protocol::PathRequest;

pub type PathTicket = Ticket<PathRequest>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    None,
    StartSet,
    PathRequested,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: Option<Cell>,
    pub end: Option<Cell>,
}

/// Three-click start/end picker. The selection epoch moves forward every
/// time the selection is thrown away, which invalidates any path request
/// still in flight.
#[derive(Clone, Debug, Default)]
pub struct SelectionController {
    phase: Phase,
    selection: Selection,
    epochs: EpochCounter,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn epoch(&self) -> Epoch {
        self.epochs.current()
    }

    pub fn check(&self, epoch: Epoch) -> Result<()> {
        self.epochs.check(epoch)
    }

    /// Forgets the selection without touching the grid, used when the grid
    /// itself is replaced.
    pub fn reset(&mut self) -> Epoch {
        self.phase = Phase::None;
        self.selection = Selection::default();
        self.epochs.advance()
    }

    /// Handles a click on the cell at `(x, y)`. Returns the path request to
    /// send when the click completes a start/end pair.
    pub fn click(
        &mut self,
        grid: &mut GridState,
        x: usize,
        y: usize,
    ) -> Result<Option<PathTicket>> {
        let current = |grid: &GridState| {
            grid.cell(x, y)
                .copied()
                .ok_or(MazeError::OutOfBoundsCoordinate {
                    x: x as i64,
                    y: y as i64,
                })
        };
        current(&*grid)?;

        // A click after a completed pair resets and is then handled again
        // from `None`, so this runs at most twice.
        loop {
            match self.phase {
                Phase::None => {
                    let cell = Cell {
                        is_start: true,
                        ..current(&*grid)?
                    };
                    grid.replace_cell(cell)?;
                    self.selection.start = Some(cell);
                    self.phase = Phase::StartSet;
                    debug!("start set at ({x}, {y})");
                    return Ok(None);
                }
                Phase::StartSet => {
                    let Some(start) = self.selection.start else {
                        self.phase = Phase::None;
                        continue;
                    };
                    let cell = Cell {
                        is_end: true,
                        ..current(&*grid)?
                    };
                    grid.replace_cell(cell)?;
                    self.selection.end = Some(cell);
                    self.phase = Phase::PathRequested;
                    let from = grid.source_coord(start.x, start.y);
                    let to = grid.source_coord(cell.x, cell.y);
                    let ticket = self.epochs.stamp(PathRequest {
                        x1: from.x,
                        y1: from.y,
                        x2: to.x,
                        y2: to.y,
                    });
                    debug!(
                        "end set at ({x}, {y}), requesting path in epoch {}",
                        ticket.epoch
                    );
                    return Ok(Some(ticket));
                }
                Phase::PathRequested => {
                    grid.reset_flags();
                    let epoch = self.reset();
                    debug!("selection cleared, epoch {epoch}");
                }
            }
        }
    }
}
