//! Codec Module
//!
//! Translation between the typed in-memory model and the flat wire shape.
//!
//! Two layouts share the same wire primitives and must not be unified:
//! - **Dense**: dimensions first, cells flattened row-major
//!   (`[rows, cols, v(0,0), v(0,1), ...]`)
//! - **Labeled**: one grid row per frame column, schema first
//!   (`[name, dtype_tag, cell(0), ...]`) — transposed relative to dense
//!
//! All functions here are pure transforms over owned values; they are safe
//! to call on either side of a blocking or non-blocking executor.

mod frame;
mod grid;

pub use frame::{decode_cell, decode_frame, encode_cell, encode_frame, NAN, NAT};
pub use grid::{decode_grid, decode_grid_with_shape, encode_grid, Grid};
