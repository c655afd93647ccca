//! Protocol Module
//!
//! The flat wire surface between the typed client and the store.
//!
//! ## Command Surface
//!
//! | Verb         | Arguments                                        | Reply                      |
//! |--------------|--------------------------------------------------|----------------------------|
//! | `GRID.DIM`   | key, rows, cols, [cells...]                      | status `OK`                |
//! | `GRID.SHAPE` | key                                              | [rows, cols]               |
//! | `GRID.RANGE` | key, rowStart, rowEnd, colStart, colEnd          | flat cells, row-major      |
//! | `GRID.SET`   | key, rowStart, rowEnd, colStart, colEnd, cells…  | status `OK`                |
//! | `GRID.DUMP`  | key                                              | [rows, cols, cells...]     |
//!
//! `GRID.DIM key 0 0` deletes the grid. Range endpoints may be negative
//! (counted from the end of the axis) and a start past its end walks the
//! axis backwards.

mod command;
mod reply;

pub use command::Command;
pub use reply::{Reply, WireValue};
