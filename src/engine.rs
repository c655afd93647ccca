//! Engine Module
//!
//! An in-memory implementation of the grid store's server semantics. It
//! backs the test suite as a drop-in [`Executor`] and doubles as a local
//! reference for what a conforming server does with each verb:
//!
//! - `GRID.DIM` creates or replaces a grid when cells are supplied, resizes
//!   in place when they are not (preserving the overlapping region and
//!   nulling everything outside it), and deletes the key at 0 x 0.
//! - `GRID.RANGE` / `GRID.SET` walk both axes in the requested direction,
//!   inclusive at both ends, row-major.
//! - Reads and writes against a missing key fail with the verbatim
//!   `Empty key` error.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::client::Executor;
use crate::codec::Grid;
use crate::error::{GridError, Result};
use crate::protocol::{Reply, WireValue};
use crate::range::{resolve_index, Span};

/// An in-memory grid store
///
/// Grids live behind a single RwLock; every operation takes `&self`, so the
/// engine can be shared freely between test clients.
#[derive(Default)]
pub struct GridEngine {
    grids: RwLock<HashMap<String, Grid>>,
}

impl GridEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn key_count(&self) -> usize {
        self.grids.read().len()
    }

    // =========================================================================
    // Verb Implementations
    // =========================================================================

    /// Create, replace, resize, or delete the grid at `key`
    pub fn dim(
        &self,
        key: &str,
        rows: usize,
        cols: usize,
        cells: Option<Vec<Option<String>>>,
    ) -> Result<()> {
        if let Some(cells) = &cells {
            if cells.len() != rows * cols {
                return Err(GridError::Server(
                    "Invalid number of values for grid".to_string(),
                ));
            }
        }

        let mut grids = self.grids.write();

        if rows * cols == 0 {
            tracing::debug!(key, "deleting grid");
            grids.remove(key);
            return Ok(());
        }

        let grid = match cells {
            Some(cells) => Grid::from_cells(rows, cols, cells)?,
            None => match grids.get(key) {
                Some(existing) => resize(existing, rows, cols),
                None => Grid::new(rows, cols),
            },
        };

        tracing::debug!(key, rows, cols, "storing grid");
        grids.insert(key.to_string(), grid);
        Ok(())
    }

    /// The (rows, cols) shape of the grid at `key`
    pub fn shape(&self, key: &str) -> Result<(usize, usize)> {
        let grids = self.grids.read();
        let grid = lookup(&grids, key)?;
        Ok((grid.rows(), grid.cols()))
    }

    /// Read a directional sub-range, row-major in the requested order
    pub fn range(
        &self,
        key: &str,
        row_start: i64,
        row_end: i64,
        col_start: i64,
        col_end: i64,
    ) -> Result<Vec<Option<String>>> {
        let grids = self.grids.read();
        let grid = lookup(&grids, key)?;
        let (row_span, col_span) =
            resolve_spans(grid, row_start, row_end, col_start, col_end)?;

        let mut out = Vec::with_capacity(row_span.len() * col_span.len());
        for r in row_span.indices() {
            for c in col_span.indices() {
                out.push(grid.get(r, c).map(str::to_string));
            }
        }
        Ok(out)
    }

    /// Write a directional sub-range, consuming `cells` in request order
    pub fn set(
        &self,
        key: &str,
        row_start: i64,
        row_end: i64,
        col_start: i64,
        col_end: i64,
        cells: Vec<Option<String>>,
    ) -> Result<()> {
        let mut grids = self.grids.write();
        let grid = match grids.get_mut(key) {
            Some(grid) => grid,
            None => return Err(GridError::Server("Empty key".to_string())),
        };
        let (row_span, col_span) =
            resolve_spans(grid, row_start, row_end, col_start, col_end)?;

        if cells.len() != row_span.len() * col_span.len() {
            return Err(GridError::Server("Invalid number of values".to_string()));
        }

        let mut source = cells.into_iter();
        for r in row_span.indices() {
            for c in col_span.indices() {
                // Span resolution bounds-checked both axes already.
                grid.set(r, c, source.next().unwrap_or(None))?;
            }
        }
        Ok(())
    }

    /// The whole grid at `key`, shape included
    pub fn dump(&self, key: &str) -> Result<Grid> {
        let grids = self.grids.read();
        lookup(&grids, key).cloned()
    }

    // =========================================================================
    // Wire Dispatch
    // =========================================================================

    /// Dispatch a raw wire command, folding failures into error replies
    pub fn dispatch(&self, command: &str, args: &[WireValue]) -> Reply {
        match self.try_dispatch(command, args) {
            Ok(reply) => reply,
            Err(error) => Reply::error(error.to_string()),
        }
    }

    fn try_dispatch(&self, command: &str, args: &[WireValue]) -> Result<Reply> {
        match command {
            "GRID.DIM" => {
                check_arity(command, args.len() >= 3)?;
                let key = args[0].as_str()?;
                let rows = dimension(&args[1], "Rows")?;
                let cols = dimension(&args[2], "Columns")?;
                let cells = if args.len() > 3 {
                    Some(cell_strings(&args[3..])?)
                } else {
                    None
                };
                self.dim(key, rows, cols, cells)?;
                Ok(Reply::ok())
            }
            "GRID.SHAPE" => {
                check_arity(command, args.len() == 1)?;
                let (rows, cols) = self.shape(args[0].as_str()?)?;
                Ok(Reply::Values(vec![rows.into(), cols.into()]))
            }
            "GRID.RANGE" => {
                check_arity(command, args.len() == 5)?;
                let cells = self.range(
                    args[0].as_str()?,
                    args[1].as_i64()?,
                    args[2].as_i64()?,
                    args[3].as_i64()?,
                    args[4].as_i64()?,
                )?;
                Ok(Reply::Values(
                    cells.into_iter().map(WireValue::from).collect(),
                ))
            }
            "GRID.SET" => {
                check_arity(command, args.len() >= 5)?;
                self.set(
                    args[0].as_str()?,
                    args[1].as_i64()?,
                    args[2].as_i64()?,
                    args[3].as_i64()?,
                    args[4].as_i64()?,
                    cell_strings(&args[5..])?,
                )?;
                Ok(Reply::ok())
            }
            "GRID.DUMP" => {
                check_arity(command, args.len() == 1)?;
                let grid = self.dump(args[0].as_str()?)?;
                let mut values = Vec::with_capacity(2 + grid.len());
                values.push(grid.rows().into());
                values.push(grid.cols().into());
                values.extend(grid.into_cells().into_iter().map(WireValue::from));
                Ok(Reply::Values(values))
            }
            _ => Err(GridError::Server(format!("unknown command '{command}'"))),
        }
    }
}

impl Executor for GridEngine {
    fn execute(&mut self, command: &str, args: &[WireValue]) -> Result<Reply> {
        Ok(self.dispatch(command, args))
    }
}

/// Shared engines stay usable as executors from multiple clients
impl Executor for &GridEngine {
    fn execute(&mut self, command: &str, args: &[WireValue]) -> Result<Reply> {
        Ok(self.dispatch(command, args))
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn lookup<'a>(grids: &'a HashMap<String, Grid>, key: &str) -> Result<&'a Grid> {
    grids
        .get(key)
        .ok_or_else(|| GridError::Server("Empty key".to_string()))
}

/// Resize preserving the overlapping region; everything else becomes null
fn resize(grid: &Grid, rows: usize, cols: usize) -> Grid {
    let mut resized = Grid::new(rows, cols);
    for r in 0..rows.min(grid.rows()) {
        for c in 0..cols.min(grid.cols()) {
            // Both indices are in bounds on both grids.
            let _ = resized.set(r, c, grid.get(r, c).map(str::to_string));
        }
    }
    resized
}

fn resolve_spans(
    grid: &Grid,
    row_start: i64,
    row_end: i64,
    col_start: i64,
    col_end: i64,
) -> Result<(Span, Span)> {
    let row_span = Span::new(
        resolve_bound(row_start, grid.rows(), "Start row")?,
        resolve_bound(row_end, grid.rows(), "End row")?,
    );
    let col_span = Span::new(
        resolve_bound(col_start, grid.cols(), "Start column")?,
        resolve_bound(col_end, grid.cols(), "End column")?,
    );
    Ok((row_span, col_span))
}

fn resolve_bound(value: i64, len: usize, what: &str) -> Result<usize> {
    resolve_index(value, len)
        .map_err(|_| GridError::Server(format!("{what} outside the bounds of the grid")))
}

fn check_arity(command: &str, ok: bool) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(GridError::Server(format!(
            "wrong number of arguments for '{}' command",
            command.to_ascii_lowercase()
        )))
    }
}

fn dimension(value: &WireValue, what: &str) -> Result<usize> {
    let n = value.as_i64()?;
    usize::try_from(n).map_err(|_| GridError::Server(format!("{what} must not be negative")))
}

fn cell_strings(values: &[WireValue]) -> Result<Vec<Option<String>>> {
    values
        .iter()
        .map(|v| v.clone().into_cell_string())
        .collect()
}
