//! Element kind registry
//!
//! Canonical, bidirectional mapping between an element kind and the
//! wire-visible dtype tag string. The tags are load-bearing wire constants:
//! a labeled grid stores one per column and peers in other languages match
//! on them.
//!
//! Decoding dispatches on a prefix of the tag (`float*`, `int*`, `uint*`,
//! `datetime*`, `timedelta*`, `bool*`, `byte*`) because the wire may carry a
//! parameterized tag such as `datetime64[ns]` or a width the exact table
//! does not list. Unmatched tags fall back to [`ElementKind::Str`].

use serde::{Deserialize, Serialize};

/// The closed set of element kinds a column can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Bool,
    Byte,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    DateTime,
    TimeDelta,
    /// Generic/string/unknown
    Str,
}

/// Every kind, in tag-table order (useful for exhaustive tests)
pub const ALL_KINDS: [ElementKind; 14] = [
    ElementKind::Bool,
    ElementKind::Byte,
    ElementKind::Int8,
    ElementKind::Int16,
    ElementKind::Int32,
    ElementKind::Int64,
    ElementKind::UInt16,
    ElementKind::UInt32,
    ElementKind::UInt64,
    ElementKind::Float32,
    ElementKind::Float64,
    ElementKind::DateTime,
    ElementKind::TimeDelta,
    ElementKind::Str,
];

impl ElementKind {
    /// The wire dtype tag for this kind
    pub fn tag(self) -> &'static str {
        match self {
            ElementKind::Bool => "bool",
            ElementKind::Byte => "byte",
            ElementKind::Int8 => "int8",
            ElementKind::Int16 => "int16",
            ElementKind::Int32 => "int32",
            ElementKind::Int64 => "int64",
            ElementKind::UInt16 => "uint16",
            ElementKind::UInt32 => "uint32",
            ElementKind::UInt64 => "uint64",
            ElementKind::Float32 => "float32",
            ElementKind::Float64 => "float64",
            ElementKind::DateTime => "datetime64[ns]",
            ElementKind::TimeDelta => "timedelta64[ns]",
            ElementKind::Str => "object",
        }
    }

    /// Resolve a wire dtype tag to a kind
    ///
    /// Exact tags resolve first; otherwise the tag is matched by prefix so
    /// that parameterized forms (`datetime64[ns]`, `uint128`, ...) still
    /// land on a usable kind. Anything unrecognized is treated as `Str`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "bool" => return ElementKind::Bool,
            "byte" => return ElementKind::Byte,
            "int8" => return ElementKind::Int8,
            "int16" => return ElementKind::Int16,
            "int32" => return ElementKind::Int32,
            "int64" => return ElementKind::Int64,
            "uint16" => return ElementKind::UInt16,
            "uint32" => return ElementKind::UInt32,
            "uint64" => return ElementKind::UInt64,
            "float32" => return ElementKind::Float32,
            "float64" => return ElementKind::Float64,
            "object" => return ElementKind::Str,
            _ => {}
        }

        if tag.starts_with("float") {
            ElementKind::Float64
        } else if tag.starts_with("uint") {
            ElementKind::UInt64
        } else if tag.starts_with("int") {
            ElementKind::Int64
        } else if tag.starts_with("datetime") {
            ElementKind::DateTime
        } else if tag.starts_with("timedelta") {
            ElementKind::TimeDelta
        } else if tag.starts_with("bool") {
            ElementKind::Bool
        } else if tag.starts_with("byte") {
            ElementKind::Byte
        } else {
            ElementKind::Str
        }
    }

    /// Human-readable kind name (used in error messages)
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Bool => "bool",
            ElementKind::Byte => "byte",
            ElementKind::Int8 => "int8",
            ElementKind::Int16 => "int16",
            ElementKind::Int32 => "int32",
            ElementKind::Int64 => "int64",
            ElementKind::UInt16 => "uint16",
            ElementKind::UInt32 => "uint32",
            ElementKind::UInt64 => "uint64",
            ElementKind::Float32 => "float32",
            ElementKind::Float64 => "float64",
            ElementKind::DateTime => "datetime",
            ElementKind::TimeDelta => "timedelta",
            ElementKind::Str => "str",
        }
    }

    /// Default nullability for a freshly constructed column of this kind
    ///
    /// Reference-like kinds are nullable by default; everything else is not,
    /// unless the caller overrides it.
    pub fn default_nullable(self) -> bool {
        matches!(self, ElementKind::Str)
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
