//! Dtype Tests
//!
//! Tests verify:
//! - The tag table is bijective over every kind
//! - Prefix dispatch handles parameterized tags
//! - Unknown tags fall back to the string kind

use gridkv::dtype::{ElementKind, ALL_KINDS};

// =============================================================================
// Bijection Tests
// =============================================================================

#[test]
fn test_tag_round_trip_for_every_kind() {
    for kind in ALL_KINDS {
        assert_eq!(ElementKind::from_tag(kind.tag()), kind, "kind {kind:?}");
    }
}

#[test]
fn test_exact_tags() {
    assert_eq!(ElementKind::Bool.tag(), "bool");
    assert_eq!(ElementKind::Byte.tag(), "byte");
    assert_eq!(ElementKind::Int8.tag(), "int8");
    assert_eq!(ElementKind::Int16.tag(), "int16");
    assert_eq!(ElementKind::Int32.tag(), "int32");
    assert_eq!(ElementKind::Int64.tag(), "int64");
    assert_eq!(ElementKind::UInt16.tag(), "uint16");
    assert_eq!(ElementKind::UInt32.tag(), "uint32");
    assert_eq!(ElementKind::UInt64.tag(), "uint64");
    assert_eq!(ElementKind::Float32.tag(), "float32");
    assert_eq!(ElementKind::Float64.tag(), "float64");
    assert_eq!(ElementKind::DateTime.tag(), "datetime64[ns]");
    assert_eq!(ElementKind::Str.tag(), "object");
    assert!(ElementKind::TimeDelta.tag().starts_with("timedelta"));
}

// =============================================================================
// Prefix Dispatch Tests
// =============================================================================

#[test]
fn test_parameterized_tags_resolve_by_prefix() {
    assert_eq!(ElementKind::from_tag("datetime64[ns]"), ElementKind::DateTime);
    assert_eq!(ElementKind::from_tag("datetime64[ms]"), ElementKind::DateTime);
    assert_eq!(ElementKind::from_tag("timedelta64[ns]"), ElementKind::TimeDelta);
    assert_eq!(ElementKind::from_tag("float16"), ElementKind::Float64);
    assert_eq!(ElementKind::from_tag("int128"), ElementKind::Int64);
    assert_eq!(ElementKind::from_tag("uint128"), ElementKind::UInt64);
    assert_eq!(ElementKind::from_tag("bool8"), ElementKind::Bool);
}

#[test]
fn test_uint_does_not_match_int_prefix() {
    assert_eq!(ElementKind::from_tag("uint16"), ElementKind::UInt16);
    assert_eq!(ElementKind::from_tag("uint999"), ElementKind::UInt64);
}

// =============================================================================
// Fallback Tests
// =============================================================================

#[test]
fn test_unknown_tags_fall_back_to_str() {
    assert_eq!(ElementKind::from_tag("object"), ElementKind::Str);
    assert_eq!(ElementKind::from_tag("category"), ElementKind::Str);
    assert_eq!(ElementKind::from_tag("complex128"), ElementKind::Str);
    assert_eq!(ElementKind::from_tag(""), ElementKind::Str);
}

#[test]
fn test_default_nullability() {
    assert!(ElementKind::Str.default_nullable());
    assert!(!ElementKind::Float64.default_nullable());
    assert!(!ElementKind::Bool.default_nullable());
    assert!(!ElementKind::DateTime.default_nullable());
}
