//! Cell values
//!
//! A [`Cell`] is one scalar slot in a column: either null or a value of one
//! of the closed element kinds. The enum replaces the original design's
//! reflection-built columns; the codec boundary is the only place a cell is
//! erased to its wire string form.

use serde::{Deserialize, Serialize};
use time::{Duration, PrimitiveDateTime};

use crate::dtype::ElementKind;

/// A single, possibly-null scalar value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Null,
    Bool(bool),
    Byte(u8),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    DateTime(PrimitiveDateTime),
    TimeDelta(Duration),
    Str(String),
}

impl Cell {
    /// The element kind of this cell, or `None` for null
    pub fn kind(&self) -> Option<ElementKind> {
        match self {
            Cell::Null => None,
            Cell::Bool(_) => Some(ElementKind::Bool),
            Cell::Byte(_) => Some(ElementKind::Byte),
            Cell::Int8(_) => Some(ElementKind::Int8),
            Cell::Int16(_) => Some(ElementKind::Int16),
            Cell::Int32(_) => Some(ElementKind::Int32),
            Cell::Int64(_) => Some(ElementKind::Int64),
            Cell::UInt16(_) => Some(ElementKind::UInt16),
            Cell::UInt32(_) => Some(ElementKind::UInt32),
            Cell::UInt64(_) => Some(ElementKind::UInt64),
            Cell::Float32(_) => Some(ElementKind::Float32),
            Cell::Float64(_) => Some(ElementKind::Float64),
            Cell::DateTime(_) => Some(ElementKind::DateTime),
            Cell::TimeDelta(_) => Some(ElementKind::TimeDelta),
            Cell::Str(_) => Some(ElementKind::Str),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// True when this cell may be stored in a column of the given kind
    pub fn matches(&self, kind: ElementKind) -> bool {
        match self.kind() {
            None => true,
            Some(k) => k == kind,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Cell::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Float32(v) => Some(f64::from(*v)),
            Cell::Float64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Cell::Byte(v) => Some(i64::from(*v)),
            Cell::Int8(v) => Some(i64::from(*v)),
            Cell::Int16(v) => Some(i64::from(*v)),
            Cell::Int32(v) => Some(i64::from(*v)),
            Cell::Int64(v) => Some(*v),
            Cell::UInt16(v) => Some(i64::from(*v)),
            Cell::UInt32(v) => Some(i64::from(*v)),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<PrimitiveDateTime> {
        match self {
            Cell::DateTime(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_timedelta(&self) -> Option<Duration> {
        match self {
            Cell::TimeDelta(v) => Some(*v),
            _ => None,
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

macro_rules! cell_from {
    ($($variant:ident: $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Cell {
                fn from(value: $ty) -> Self {
                    Cell::$variant(value)
                }
            }
        )*
    };
}

cell_from! {
    Bool: bool,
    Byte: u8,
    Int8: i8,
    Int16: i16,
    Int32: i32,
    Int64: i64,
    UInt16: u16,
    UInt32: u32,
    UInt64: u64,
    Float32: f32,
    Float64: f64,
    DateTime: PrimitiveDateTime,
    TimeDelta: Duration,
    Str: String,
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Str(value.to_string())
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Cell::Null,
        }
    }
}
