//! Data Model Module
//!
//! The in-memory, strongly typed side of the codec.
//!
//! ## Responsibilities
//! - [`Cell`]: a tagged, possibly-null scalar value
//! - [`Series`]: an ordered, homogeneous, optionally-nullable column
//! - [`DataFrame`]: ordered columns sharing a row axis, with optional labels
//!
//! Everything here is a pure, owned value; nothing touches the wire.

mod cell;
mod frame;
mod series;

pub use cell::Cell;
pub use frame::{ColumnRef, DataFrame};
pub use series::Series;
