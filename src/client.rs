//! Client Module
//!
//! The typed surface callers use against a grid store. The transport is an
//! external collaborator hidden behind [`Executor`]; the client validates
//! locally, encodes, executes, and decodes. No call retries, caches, or
//! holds state between operations.

use crate::codec::{
    decode_frame, decode_grid, decode_grid_with_shape, encode_frame, Grid,
};
use crate::config::CodecConfig;
use crate::data::DataFrame;
use crate::error::{GridError, Result};
use crate::protocol::{Command, Reply};
use crate::range::Span;

/// The opaque command transport
///
/// Implementations send one command with its flat argument list and return
/// the store's reply. Server-side errors are returned as [`Reply::Error`]
/// (not `Err`), so their messages reach the caller verbatim.
pub trait Executor {
    fn execute(&mut self, command: &str, args: &[crate::protocol::WireValue]) -> Result<Reply>;
}

/// A typed client over any [`Executor`]
pub struct GridClient<E> {
    executor: E,
    config: CodecConfig,
}

impl<E: Executor> GridClient<E> {
    /// Create a client with default codec configuration
    pub fn new(executor: E) -> Self {
        Self {
            executor,
            config: CodecConfig::default(),
        }
    }

    /// Create a client with explicit codec configuration
    pub fn with_config(executor: E, config: CodecConfig) -> Self {
        Self { executor, config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Give back the wrapped executor
    pub fn into_inner(self) -> E {
        self.executor
    }

    fn call(&mut self, command: Command) -> Result<Reply> {
        tracing::debug!(verb = command.name(), "executing");
        self.executor.execute(command.name(), &command.args())
    }

    // =========================================================================
    // Dense Grid Operations
    // =========================================================================

    /// Store a grid at `key`, replacing whatever was there
    pub fn dim(&mut self, key: &str, grid: &Grid) -> Result<()> {
        self.call(Command::Dim {
            key: key.to_string(),
            rows: grid.rows(),
            cols: grid.cols(),
            cells: grid.cells().to_vec(),
        })?
        .expect_ok()
    }

    /// Resize the grid at `key` in place
    ///
    /// Values in the overlapping region survive; cells outside it are null.
    /// A missing key gets a fresh all-null grid.
    pub fn resize(&mut self, key: &str, rows: usize, cols: usize) -> Result<()> {
        self.call(Command::Dim {
            key: key.to_string(),
            rows,
            cols,
            cells: Vec::new(),
        })?
        .expect_ok()
    }

    /// Delete the grid at `key` (a 0 x 0 dim)
    pub fn delete(&mut self, key: &str) -> Result<()> {
        self.resize(key, 0, 0)
    }

    /// The (rows, cols) shape of the grid at `key`
    pub fn shape(&mut self, key: &str) -> Result<(usize, usize)> {
        let values = self
            .call(Command::Shape {
                key: key.to_string(),
            })?
            .into_values()?;
        if values.len() != 2 {
            return Err(GridError::Protocol(format!(
                "shape reply has {} values",
                values.len()
            )));
        }
        let rows = usize::try_from(values[0].as_i64()?)
            .map_err(|_| GridError::Protocol("negative row count in shape".to_string()))?;
        let cols = usize::try_from(values[1].as_i64()?)
            .map_err(|_| GridError::Protocol("negative column count in shape".to_string()))?;
        Ok((rows, cols))
    }

    /// Read a sub-range as a flat, row-major cell list
    ///
    /// Endpoints may be negative (counted from the end of the axis); a start
    /// past its end yields that axis in descending order.
    pub fn range(
        &mut self,
        key: &str,
        row_start: i64,
        row_end: i64,
        col_start: i64,
        col_end: i64,
    ) -> Result<Vec<Option<String>>> {
        let values = self
            .call(Command::Range {
                key: key.to_string(),
                row_start,
                row_end,
                col_start,
                col_end,
            })?
            .into_values()?;
        values
            .into_iter()
            .map(|v| v.into_cell_string())
            .collect()
    }

    /// Read a sub-range shaped as a [`Grid`]
    ///
    /// Fetches the stored shape first so that negative endpoints resolve to
    /// concrete spans, then shapes the flat reply.
    pub fn range_shaped(
        &mut self,
        key: &str,
        row_start: i64,
        row_end: i64,
        col_start: i64,
        col_end: i64,
    ) -> Result<Grid> {
        let (rows, cols) = self.shape(key)?;
        let row_span = Span::resolve(row_start, row_end, rows)?;
        let col_span = Span::resolve(col_start, col_end, cols)?;

        let cells = self.range(key, row_start, row_end, col_start, col_end)?;
        let values: Vec<crate::protocol::WireValue> =
            cells.into_iter().map(Into::into).collect();
        decode_grid_with_shape(row_span.len(), col_span.len(), &values)
    }

    /// Write `grid` into the stored grid with its top-left at (row, col)
    pub fn set(&mut self, key: &str, row: usize, col: usize, grid: &Grid) -> Result<()> {
        if grid.is_empty() {
            return Err(GridError::ShapeMismatch {
                expected: 1,
                actual: 0,
            });
        }
        self.set_span(
            key,
            row as i64,
            (row + grid.rows() - 1) as i64,
            col as i64,
            (col + grid.cols() - 1) as i64,
            grid.cells().to_vec(),
        )
    }

    /// Write a flat, row-major cell list into a directional span
    ///
    /// The cell count must match the span size exactly. With non-negative
    /// endpoints the mismatch is rejected before anything goes over the
    /// wire; negative endpoints resolve server-side, so the server performs
    /// the check.
    pub fn set_span(
        &mut self,
        key: &str,
        row_start: i64,
        row_end: i64,
        col_start: i64,
        col_end: i64,
        cells: Vec<Option<String>>,
    ) -> Result<()> {
        if row_start >= 0 && row_end >= 0 && col_start >= 0 && col_end >= 0 {
            let expected =
                (1 + row_start.abs_diff(row_end)) * (1 + col_start.abs_diff(col_end));
            if cells.len() as u64 != expected {
                return Err(GridError::ShapeMismatch {
                    expected: expected as usize,
                    actual: cells.len(),
                });
            }
        }
        self.call(Command::Set {
            key: key.to_string(),
            row_start,
            row_end,
            col_start,
            col_end,
            cells,
        })?
        .expect_ok()
    }

    /// Fetch the whole grid at `key`
    pub fn dump(&mut self, key: &str) -> Result<Grid> {
        let values = self
            .call(Command::Dump {
                key: key.to_string(),
            })?
            .into_values()?;
        decode_grid(&values)
    }

    // =========================================================================
    // Frame Operations
    // =========================================================================

    /// Store a frame at `key` in the labeled grid layout
    pub fn save_frame(&mut self, key: &str, frame: &DataFrame) -> Result<()> {
        let grid = encode_frame(frame, &self.config)?;
        self.dim(key, &grid)
    }

    /// Load the frame stored at `key`
    pub fn load_frame(&mut self, key: &str) -> Result<DataFrame> {
        let grid = self.dump(key)?;
        decode_frame(&grid, &self.config)
    }
}
