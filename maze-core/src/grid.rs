use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, trace, warn};

use crate::cell::{Cell, Coord};
use crate::error::{MazeError, Result};

pub const MIN_DIMENSION: usize = 1;
pub const MAX_DIMENSION: usize = 50;

/// Rows are immutable once published. A change to any cell swaps in a new
/// `Rc`, so holders of the previous row can detect it with `Rc::ptr_eq`.
pub type Row = Rc<[Cell]>;

/// Validates a requested size and converts it to grid units.
pub fn check_dimensions(height: i64, width: i64) -> Result<(usize, usize)> {
    let range = MIN_DIMENSION as i64..=MAX_DIMENSION as i64;
    if range.contains(&height) && range.contains(&width) {
        Ok((height as usize, width as usize))
    } else {
        Err(MazeError::InvalidDimensions { height, width })
    }
}

/// How the grid source numbers its cells, when that differs from the
/// position each cell is loaded at. Empty means the two agree.
#[derive(Clone, Debug, Default)]
struct SourceCoords {
    to_position: HashMap<Coord, (usize, usize)>,
    // row-major, indexed by position
    from_position: Vec<Coord>,
}

impl SourceCoords {
    fn build(reported: Vec<Coord>, width: usize) -> Self {
        let identity = reported
            .iter()
            .enumerate()
            .all(|(i, c)| c.x == (i % width) as i64 && c.y == (i / width) as i64);
        if identity {
            return SourceCoords::default();
        }
        let to_position: HashMap<Coord, (usize, usize)> = reported
            .iter()
            .enumerate()
            .map(|(i, c)| (*c, (i % width, i / width)))
            .collect();
        if to_position.len() != reported.len() {
            warn!("grid source reported duplicate coordinates, using positions instead");
            return SourceCoords::default();
        }
        debug!("grid source uses its own coordinates, translating");
        SourceCoords {
            to_position,
            from_position: reported,
        }
    }
}

/// Sole owner of the cell matrix. Everything else reads it freely but only
/// mutates it through [`GridState::replace_cell`] and
/// [`GridState::reset_flags`].
#[derive(Clone, Debug, Default)]
pub struct GridState {
    height: usize,
    width: usize,
    rows: Vec<Row>,
    source: SourceCoords,
}

impl GridState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole grid. Coordinates are assigned from each cell's
    /// position and overlay flags start cleared. The coordinates the source
    /// reported are remembered for [`GridState::locate`] and
    /// [`GridState::source_coord`].
    pub fn load(&mut self, height: usize, width: usize, cells: Vec<Vec<Cell>>) -> Result<()> {
        check_dimensions(height as i64, width as i64)?;
        if cells.len() != height || cells.iter().any(|row| row.len() != width) {
            let got_w = cells
                .iter()
                .map(Vec::len)
                .find(|w| *w != width)
                .unwrap_or(width);
            return Err(MazeError::InvalidDimensions {
                height: cells.len() as i64,
                width: got_w as i64,
            });
        }
        let mut reported = Vec::with_capacity(height * width);
        let rows: Vec<Row> = cells
            .into_iter()
            .enumerate()
            .map(|(y, row)| {
                let row: Vec<Cell> = row
                    .into_iter()
                    .enumerate()
                    .map(|(x, cell)| {
                        reported.push(Coord {
                            x: cell.x as i64,
                            y: cell.y as i64,
                        });
                        Cell { x, y, ..cell.cleared() }
                    })
                    .collect();
                Row::from(row)
            })
            .collect();
        self.source = SourceCoords::build(reported, width);
        self.height = height;
        self.width = width;
        self.rows = rows;
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        !self.rows.is_empty()
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.rows.get(y).and_then(|row| row.get(x))
    }

    pub fn cell_at(&self, coord: Coord) -> Option<&Cell> {
        let x = usize::try_from(coord.x).ok()?;
        let y = usize::try_from(coord.y).ok()?;
        self.cell(x, y)
    }

    /// Position of the cell the grid source calls `source`.
    pub fn locate(&self, source: Coord) -> Option<(usize, usize)> {
        if self.source.to_position.is_empty() {
            self.cell_at(source).map(|c| (c.x, c.y))
        } else {
            self.source.to_position.get(&source).copied()
        }
    }

    /// The grid source's name for the cell at `(x, y)`.
    pub fn source_coord(&self, x: usize, y: usize) -> Coord {
        self.source
            .from_position
            .get(y * self.width + x)
            .copied()
            .unwrap_or(Coord {
                x: x as i64,
                y: y as i64,
            })
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flat_map(|row| row.iter())
    }

    /// Substitutes `new_cell` at its own coordinates by building a fresh row
    /// and publishing it in place of the old one.
    pub fn replace_cell(&mut self, new_cell: Cell) -> Result<()> {
        let (x, y) = (new_cell.x, new_cell.y);
        let Some(old) = self.rows.get(y).filter(|row| x < row.len()) else {
            return Err(MazeError::OutOfBoundsCoordinate {
                x: x as i64,
                y: y as i64,
            });
        };
        let mut next = old.to_vec();
        next[x] = new_cell;
        self.publish(y, next);
        Ok(())
    }

    /// Clears every overlay flag. Every row is republished, changed or not.
    pub fn reset_flags(&mut self) {
        for y in 0..self.rows.len() {
            let next: Vec<Cell> = self.rows[y].iter().map(|c| c.cleared()).collect();
            self.publish(y, next);
        }
    }

    fn publish(&mut self, y: usize, row: Vec<Cell>) {
        trace!("republish row {y}");
        self.rows[y] = row.into();
    }
}
