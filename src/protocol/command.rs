//! Command definitions
//!
//! The five grid verbs and their wire argument lists. Every command is
//! addressed by a single key; shape metadata and flat cells follow it.

use crate::protocol::WireValue;

/// A grid command ready to hand to an executor
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Create, replace, resize, or (at 0 x 0) delete a grid
    Dim {
        key: String,
        rows: usize,
        cols: usize,
        /// Row-major cells; empty means resize-in-place
        cells: Vec<Option<String>>,
    },

    /// Fetch the (rows, cols) shape
    Shape { key: String },

    /// Read a directional sub-range, row-major
    Range {
        key: String,
        row_start: i64,
        row_end: i64,
        col_start: i64,
        col_end: i64,
    },

    /// Write a directional sub-range, row-major
    Set {
        key: String,
        row_start: i64,
        row_end: i64,
        col_start: i64,
        col_end: i64,
        cells: Vec<Option<String>>,
    },

    /// Fetch the whole grid with its shape prefixed
    Dump { key: String },
}

impl Command {
    /// The wire verb
    pub fn name(&self) -> &'static str {
        match self {
            Command::Dim { .. } => "GRID.DIM",
            Command::Shape { .. } => "GRID.SHAPE",
            Command::Range { .. } => "GRID.RANGE",
            Command::Set { .. } => "GRID.SET",
            Command::Dump { .. } => "GRID.DUMP",
        }
    }

    /// Build the flat wire argument list, key first
    pub fn args(&self) -> Vec<WireValue> {
        match self {
            Command::Dim {
                key,
                rows,
                cols,
                cells,
            } => {
                let mut args = Vec::with_capacity(3 + cells.len());
                args.push(key.as_str().into());
                args.push((*rows).into());
                args.push((*cols).into());
                args.extend(cells.iter().map(|c| c.clone().into()));
                args
            }
            Command::Shape { key } | Command::Dump { key } => vec![key.as_str().into()],
            Command::Range {
                key,
                row_start,
                row_end,
                col_start,
                col_end,
            } => vec![
                key.as_str().into(),
                (*row_start).into(),
                (*row_end).into(),
                (*col_start).into(),
                (*col_end).into(),
            ],
            Command::Set {
                key,
                row_start,
                row_end,
                col_start,
                col_end,
                cells,
            } => {
                let mut args = Vec::with_capacity(5 + cells.len());
                args.push(key.as_str().into());
                args.push((*row_start).into());
                args.push((*row_end).into());
                args.push((*col_start).into());
                args.push((*col_end).into());
                args.extend(cells.iter().map(|c| c.clone().into()));
                args
            }
        }
    }
}
