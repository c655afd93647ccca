//! Labeled grid codec
//!
//! A data frame travels as a grid with one row per column, schema first:
//! `[name_or_empty, dtype_tag, cell(0), cell(1), ...]`. This layout is
//! deliberately transposed relative to the dense grid format and must stay
//! that way; peers in other languages depend on it.
//!
//! Scalar cells serialize as strings: null becomes the empty string, strings
//! travel verbatim, datetimes use the configured fixed pattern, durations
//! are total seconds in decimal, and everything else uses its plain display
//! form. On decode, `nan` marks a null numeric or boolean cell and `nat` a
//! null datetime (the empty string an encoder writes for null is accepted
//! the same way). Strings have no null sentinel, and durations are always
//! parsed as a seconds count.

use crate::config::CodecConfig;
use crate::codec::Grid;
use crate::data::{Cell, DataFrame, Series};
use crate::dtype::ElementKind;
use crate::error::{GridError, Result};

/// Null sentinel for numeric and boolean cells
pub const NAN: &str = "nan";

/// Null sentinel for datetime cells
pub const NAT: &str = "nat";

// =============================================================================
// Frame Encoding
// =============================================================================

/// Encode a frame as a labeled grid
///
/// Output shape: `column_count` rows by `2 + row_count` columns. Columns
/// shorter than the frame's row count encode trailing nulls.
pub fn encode_frame(frame: &DataFrame, config: &CodecConfig) -> Result<Grid> {
    static NULL_CELL: Cell = Cell::Null;
    let row_count = frame.row_count();
    let mut cells = Vec::with_capacity(frame.column_count() * (2 + row_count));

    for column in frame.columns() {
        cells.push(Some(column.name().unwrap_or("").to_string()));
        cells.push(Some(column.kind().tag().to_string()));
        for r in 0..row_count {
            let cell = column.get(r).unwrap_or(&NULL_CELL);
            cells.push(Some(encode_cell(cell, config)?));
        }
    }

    Grid::from_cells(frame.column_count(), 2 + row_count, cells)
}

/// Decode a labeled grid back into a frame
///
/// Each grid row yields one column: name (empty means unnamed), dtype tag
/// (resolved by exact-then-prefix dispatch), then the cells. Unrecognized
/// tags fall back to plain strings.
pub fn decode_frame(grid: &Grid, config: &CodecConfig) -> Result<DataFrame> {
    if grid.cols() < 2 && grid.rows() > 0 {
        return Err(GridError::Protocol(format!(
            "labeled grid needs a name and dtype per row, got {} columns",
            grid.cols()
        )));
    }

    let mut frame = DataFrame::new();
    for r in 0..grid.rows() {
        let name = grid.get(r, 0).filter(|n| !n.is_empty()).map(str::to_string);
        let kind = ElementKind::from_tag(grid.get(r, 1).unwrap_or(""));

        let mut column = Series::new(kind).with_nullable(decoded_nullable(kind));
        column.set_name(name);
        for c in 2..grid.cols() {
            column.push(decode_cell(kind, grid.get(r, c), config)?)?;
        }
        frame.push_column(column);
    }
    Ok(frame)
}

/// Nullability of a decoded column
///
/// The wire carries no per-column nullability, so decode mirrors what the
/// store's peers reconstruct: everything nullable except bytes and
/// durations.
fn decoded_nullable(kind: ElementKind) -> bool {
    !matches!(kind, ElementKind::Byte | ElementKind::TimeDelta)
}

// =============================================================================
// Cell Encoding/Decoding
// =============================================================================

/// Serialize one cell to its wire string
pub fn encode_cell(cell: &Cell, config: &CodecConfig) -> Result<String> {
    Ok(match cell {
        Cell::Null => String::new(),
        Cell::Str(s) => s.clone(),
        Cell::DateTime(dt) => config.format_datetime(*dt)?,
        Cell::TimeDelta(d) => d.as_seconds_f64().to_string(),
        Cell::Bool(v) => v.to_string(),
        Cell::Byte(v) => v.to_string(),
        Cell::Int8(v) => v.to_string(),
        Cell::Int16(v) => v.to_string(),
        Cell::Int32(v) => v.to_string(),
        Cell::Int64(v) => v.to_string(),
        Cell::UInt16(v) => v.to_string(),
        Cell::UInt32(v) => v.to_string(),
        Cell::UInt64(v) => v.to_string(),
        Cell::Float32(v) => v.to_string(),
        Cell::Float64(v) => v.to_string(),
    })
}

/// Parse one wire cell into a typed cell
///
/// `raw` is `None` for a wire-level null (a cell the server never stored).
pub fn decode_cell(kind: ElementKind, raw: Option<&str>, config: &CodecConfig) -> Result<Cell> {
    let text = match raw {
        None => return Ok(Cell::Null),
        Some(text) => text,
    };

    match kind {
        ElementKind::Str => Ok(Cell::Str(text.to_string())),

        ElementKind::DateTime => {
            if text.is_empty() || text == NAT {
                Ok(Cell::Null)
            } else {
                Ok(Cell::DateTime(config.parse_datetime(text)?))
            }
        }

        ElementKind::TimeDelta => {
            let seconds: f64 = text.parse().map_err(|_| GridError::ValueParse {
                kind: "timedelta",
                value: text.to_string(),
            })?;
            Ok(Cell::TimeDelta(time::Duration::seconds_f64(seconds)))
        }

        ElementKind::Bool => {
            if text.is_empty() || text == NAN {
                return Ok(Cell::Null);
            }
            match text.to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(Cell::Bool(true)),
                "false" | "0" => Ok(Cell::Bool(false)),
                _ => Err(GridError::ValueParse {
                    kind: "bool",
                    value: text.to_string(),
                }),
            }
        }

        _ => {
            if text.is_empty() || text == NAN {
                return Ok(Cell::Null);
            }
            decode_numeric(kind, text)
        }
    }
}

fn decode_numeric(kind: ElementKind, text: &str) -> Result<Cell> {
    macro_rules! parse {
        ($variant:ident, $ty:ty) => {
            text.parse::<$ty>()
                .map(Cell::$variant)
                .map_err(|_| GridError::ValueParse {
                    kind: kind.name(),
                    value: text.to_string(),
                })
        };
    }

    match kind {
        ElementKind::Byte => parse!(Byte, u8),
        ElementKind::Int8 => parse!(Int8, i8),
        ElementKind::Int16 => parse!(Int16, i16),
        ElementKind::Int32 => parse!(Int32, i32),
        ElementKind::Int64 => parse!(Int64, i64),
        ElementKind::UInt16 => parse!(UInt16, u16),
        ElementKind::UInt32 => parse!(UInt32, u32),
        ElementKind::UInt64 => parse!(UInt64, u64),
        ElementKind::Float32 => parse!(Float32, f32),
        ElementKind::Float64 => parse!(Float64, f64),
        // Bool, DateTime, TimeDelta and Str are handled by the caller.
        _ => Err(GridError::UnsupportedKind(kind.name().to_string())),
    }
}
