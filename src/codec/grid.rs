//! Dense grid codec
//!
//! [`Grid`] is the client-side picture of what the server stores: a
//! rectangular, row-major buffer of nullable string cells. The dense wire
//! layout is dimensions first, then the cells flattened row by row:
//! `[rows, cols, v(0,0), v(0,1), ..., v(1,0), ...]`.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::protocol::WireValue;

/// A rectangular, unlabeled 2-D collection of nullable string cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major; `cells[r * cols + c]` is cell (r, c)
    cells: Vec<Option<String>>,
}

impl Grid {
    /// An all-null grid of the given shape
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Build from a flat row-major cell buffer
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<Option<String>>) -> Result<Self> {
        if cells.len() != rows * cols {
            return Err(GridError::ShapeMismatch {
                expected: rows * cols,
                actual: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Build from nested rows, which must all have the same width
    pub fn from_rows<R, C>(source: R) -> Result<Self>
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = Option<String>>,
    {
        let mut rows = 0;
        let mut cols = None;
        let mut cells = Vec::new();
        for row in source {
            let before = cells.len();
            cells.extend(row);
            let width = cells.len() - before;
            match cols {
                None => cols = Some(width),
                Some(expected) if expected != width => {
                    return Err(GridError::ShapeMismatch {
                        expected,
                        actual: width,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }
        Ok(Self {
            rows,
            cols: cols.unwrap_or(0),
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at (row, col); `None` when null or out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells[row * self.cols + col].as_deref()
    }

    /// Replace the cell at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: Option<String>) -> Result<()> {
        if row >= self.rows {
            return Err(GridError::IndexOutOfBounds {
                index: row,
                len: self.rows,
            });
        }
        if col >= self.cols {
            return Err(GridError::IndexOutOfBounds {
                index: col,
                len: self.cols,
            });
        }
        self.cells[row * self.cols + col] = value;
        Ok(())
    }

    /// The flat row-major cell buffer
    pub fn cells(&self) -> &[Option<String>] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<Option<String>> {
        self.cells
    }
}

// =============================================================================
// Dense Encoding/Decoding
// =============================================================================

/// Flatten a grid to the dense wire shape: dimensions, then row-major cells
pub fn encode_grid(grid: &Grid) -> Vec<WireValue> {
    let mut values = Vec::with_capacity(2 + grid.len());
    values.push(grid.rows().into());
    values.push(grid.cols().into());
    values.extend(grid.cells().iter().map(|c| c.clone().into()));
    values
}

/// Reconstruct a grid from a reply that embeds its own dimensions
///
/// The first two values are rows and cols; exactly `rows * cols` cells
/// must follow.
pub fn decode_grid(values: &[WireValue]) -> Result<Grid> {
    if values.len() < 2 {
        return Err(GridError::Protocol(format!(
            "grid reply too short: {} values",
            values.len()
        )));
    }
    let rows = shape_value(&values[0])?;
    let cols = shape_value(&values[1])?;
    decode_grid_with_shape(rows, cols, &values[2..])
}

/// Reconstruct a grid whose dimensions are known out-of-band
pub fn decode_grid_with_shape(rows: usize, cols: usize, values: &[WireValue]) -> Result<Grid> {
    if values.len() != rows * cols {
        return Err(GridError::ShapeMismatch {
            expected: rows * cols,
            actual: values.len(),
        });
    }
    let cells = values
        .iter()
        .map(|v| v.clone().into_cell_string())
        .collect::<Result<Vec<_>>>()?;
    Grid::from_cells(rows, cols, cells)
}

fn shape_value(value: &WireValue) -> Result<usize> {
    let n = value.as_i64()?;
    usize::try_from(n)
        .map_err(|_| GridError::Protocol(format!("negative dimension {n} in grid reply")))
}
