//! Codec Tests
//!
//! Tests verify:
//! - Dense layout: dimensions first, cells row-major
//! - Labeled layout: one row per column, schema first (transposed)
//! - Scalar serialization and the nan/nat null sentinels
//! - Round trips for dense grids and mixed-kind frames

use time::macros::datetime;

use gridkv::codec::{
    decode_cell, decode_frame, decode_grid, decode_grid_with_shape, encode_cell, encode_frame,
    encode_grid, Grid,
};
use gridkv::protocol::WireValue;
use gridkv::{Cell, CodecConfig, DataFrame, ElementKind, GridError, Series};

fn ordinal_grid(rows: usize, cols: usize) -> Grid {
    let cells = (0..rows * cols).map(|i| Some(i.to_string())).collect();
    Grid::from_cells(rows, cols, cells).unwrap()
}

// =============================================================================
// Dense Grid Tests
// =============================================================================

#[test]
fn test_encode_grid_layout() {
    let grid = ordinal_grid(2, 3);
    let encoded = encode_grid(&grid);

    assert_eq!(encoded.len(), 2 + 6);
    assert_eq!(encoded[0], WireValue::Int(2));
    assert_eq!(encoded[1], WireValue::Int(3));
    // Row-major: (0,0) (0,1) (0,2) (1,0) ...
    assert_eq!(encoded[2], WireValue::from("0"));
    assert_eq!(encoded[4], WireValue::from("2"));
    assert_eq!(encoded[5], WireValue::from("3"));
}

#[test]
fn test_encode_null_cells_as_wire_null() {
    let grid = Grid::new(1, 2);
    let encoded = encode_grid(&grid);
    assert_eq!(encoded[2], WireValue::Null);
    assert_eq!(encoded[3], WireValue::Null);
}

#[test]
fn test_decode_grid_with_embedded_dims() {
    let grid = ordinal_grid(3, 2);
    let decoded = decode_grid(&encode_grid(&grid)).unwrap();
    assert_eq!(decoded, grid);
    assert_eq!(decoded.get(2, 1), Some("5"));
}

#[test]
fn test_decode_grid_with_external_shape() {
    let values = vec![
        WireValue::from("a"),
        WireValue::from("b"),
        WireValue::Null,
        WireValue::from("d"),
    ];
    let grid = decode_grid_with_shape(2, 2, &values).unwrap();
    assert_eq!(grid.get(0, 1), Some("b"));
    assert_eq!(grid.get(1, 0), None);
}

#[test]
fn test_decode_grid_cell_count_mismatch() {
    let values = vec![WireValue::Int(2), WireValue::Int(2), WireValue::from("x")];
    let err = decode_grid(&values).unwrap_err();
    assert!(matches!(err, GridError::ShapeMismatch { expected: 4, actual: 1 }));
}

#[test]
fn test_zero_sized_grid_round_trip() {
    let grid = Grid::new(0, 0);
    let decoded = decode_grid(&encode_grid(&grid)).unwrap();
    assert_eq!(decoded.rows(), 0);
    assert_eq!(decoded.cols(), 0);
}

#[test]
fn test_grid_from_rows_rejects_ragged_input() {
    let err = Grid::from_rows([
        vec![Some("a".to_string()), Some("b".to_string())],
        vec![Some("c".to_string())],
    ])
    .unwrap_err();
    assert!(matches!(err, GridError::ShapeMismatch { expected: 2, actual: 1 }));
}

// =============================================================================
// Cell Serialization Tests
// =============================================================================

#[test]
fn test_encode_cell_forms() {
    let config = CodecConfig::default();

    assert_eq!(encode_cell(&Cell::Null, &config).unwrap(), "");
    assert_eq!(encode_cell(&Cell::from("plain"), &config).unwrap(), "plain");
    assert_eq!(encode_cell(&Cell::Bool(true), &config).unwrap(), "true");
    assert_eq!(encode_cell(&Cell::Int32(-7), &config).unwrap(), "-7");
    assert_eq!(encode_cell(&Cell::Float64(1.83), &config).unwrap(), "1.83");
    assert_eq!(
        encode_cell(&Cell::DateTime(datetime!(2000-02-28 13:45:30.250)), &config).unwrap(),
        "2000-02-28T13:45:30.250"
    );
    assert_eq!(
        encode_cell(&Cell::TimeDelta(time::Duration::seconds(90)), &config).unwrap(),
        "90"
    );
}

#[test]
fn test_decode_numeric_null_sentinels() {
    let config = CodecConfig::default();
    assert_eq!(decode_cell(ElementKind::Float64, Some("nan"), &config).unwrap(), Cell::Null);
    assert_eq!(decode_cell(ElementKind::Float64, Some(""), &config).unwrap(), Cell::Null);
    assert_eq!(decode_cell(ElementKind::Int64, Some("nan"), &config).unwrap(), Cell::Null);
    assert_eq!(decode_cell(ElementKind::Bool, Some("nan"), &config).unwrap(), Cell::Null);
}

#[test]
fn test_decode_datetime_null_sentinel() {
    let config = CodecConfig::default();
    assert_eq!(decode_cell(ElementKind::DateTime, Some("nat"), &config).unwrap(), Cell::Null);
    assert_eq!(decode_cell(ElementKind::DateTime, Some(""), &config).unwrap(), Cell::Null);
}

#[test]
fn test_decode_string_has_no_null_sentinel() {
    let config = CodecConfig::default();
    assert_eq!(
        decode_cell(ElementKind::Str, Some(""), &config).unwrap(),
        Cell::from("")
    );
    assert_eq!(
        decode_cell(ElementKind::Str, Some("nan"), &config).unwrap(),
        Cell::from("nan")
    );
}

#[test]
fn test_decode_wire_null_is_null_for_any_kind() {
    let config = CodecConfig::default();
    assert_eq!(decode_cell(ElementKind::Str, None, &config).unwrap(), Cell::Null);
    assert_eq!(decode_cell(ElementKind::Int8, None, &config).unwrap(), Cell::Null);
}

#[test]
fn test_decode_datetime_without_subseconds() {
    let config = CodecConfig::default();
    assert_eq!(
        decode_cell(ElementKind::DateTime, Some("1989-12-31T08:15:00"), &config).unwrap(),
        Cell::DateTime(datetime!(1989-12-31 08:15:00))
    );
}

#[test]
fn test_decode_timedelta_is_never_null() {
    let config = CodecConfig::default();
    assert_eq!(
        decode_cell(ElementKind::TimeDelta, Some("90.5"), &config).unwrap(),
        Cell::TimeDelta(time::Duration::seconds_f64(90.5))
    );
    // No null sentinel for durations: an empty cell refuses to parse.
    assert!(decode_cell(ElementKind::TimeDelta, Some(""), &config).is_err());
}

#[test]
fn test_decode_bool_accepts_numeric_forms() {
    let config = CodecConfig::default();
    assert_eq!(decode_cell(ElementKind::Bool, Some("True"), &config).unwrap(), Cell::Bool(true));
    assert_eq!(decode_cell(ElementKind::Bool, Some("0"), &config).unwrap(), Cell::Bool(false));
    assert!(decode_cell(ElementKind::Bool, Some("yes"), &config).is_err());
}

#[test]
fn test_decode_parse_failure_reports_value() {
    let config = CodecConfig::default();
    let err = decode_cell(ElementKind::Int32, Some("abc"), &config).unwrap_err();
    assert!(matches!(err, GridError::ValueParse { kind: "int32", .. }));
}

// =============================================================================
// Labeled Grid Tests
// =============================================================================

#[test]
fn test_encode_frame_is_schema_first_and_transposed() {
    let config = CodecConfig::default();
    let frame = DataFrame::from_columns([
        Series::from_values("a", ElementKind::Int32, [1i32, 2]).unwrap(),
        Series::from_values("b", ElementKind::Str, ["x", "y"]).unwrap(),
    ]);

    let grid = encode_frame(&frame, &config).unwrap();

    // One grid row per column: [name, dtype, cells...]
    assert_eq!(grid.rows(), 2);
    assert_eq!(grid.cols(), 4);
    assert_eq!(grid.get(0, 0), Some("a"));
    assert_eq!(grid.get(0, 1), Some("int32"));
    assert_eq!(grid.get(0, 2), Some("1"));
    assert_eq!(grid.get(1, 1), Some("object"));
    assert_eq!(grid.get(1, 3), Some("y"));
}

#[test]
fn test_encode_frame_unnamed_column_writes_empty_name() {
    let config = CodecConfig::default();
    let mut column = Series::new(ElementKind::Int32);
    column.push(5i32).unwrap();
    let grid = encode_frame(&DataFrame::from_columns([column]), &config).unwrap();
    assert_eq!(grid.get(0, 0), Some(""));
}

#[test]
fn test_decode_frame_unknown_dtype_falls_back_to_str() {
    let config = CodecConfig::default();
    let grid = Grid::from_rows([vec![
        Some("weird".to_string()),
        Some("complex128".to_string()),
        Some("1+2j".to_string()),
    ]])
    .unwrap();

    let frame = decode_frame(&grid, &config).unwrap();
    let column = frame.column("weird").unwrap();
    assert_eq!(column.kind(), ElementKind::Str);
    assert_eq!(column.get(0), Some(&Cell::from("1+2j")));
}

#[test]
fn test_decoded_nullability_by_kind() {
    let config = CodecConfig::default();
    let grid = Grid::from_rows([
        vec![Some("f".to_string()), Some("float64".to_string()), Some("1.5".to_string())],
        vec![Some("b".to_string()), Some("byte".to_string()), Some("9".to_string())],
        vec![Some("d".to_string()), Some("timedelta64[ns]".to_string()), Some("3".to_string())],
    ])
    .unwrap();

    let frame = decode_frame(&grid, &config).unwrap();
    assert!(frame.column("f").unwrap().nullable());
    assert!(!frame.column("b").unwrap().nullable());
    assert!(!frame.column("d").unwrap().nullable());
}

// =============================================================================
// Round Trip Tests
// =============================================================================

#[test]
fn test_dense_round_trip() {
    for (rows, cols) in [(0, 0), (1, 1), (4, 5), (3, 1)] {
        let grid = ordinal_grid(rows, cols);
        assert_eq!(decode_grid(&encode_grid(&grid)).unwrap(), grid);
    }
}

#[test]
fn test_mixed_frame_round_trip() {
    let config = CodecConfig::default();
    let frame = DataFrame::from_columns([
        Series::from_values("Name", ElementKind::Str, ["Tom", "Dick", "Harry"]).unwrap(),
        Series::from_nullable_values(
            "DateOfBirth",
            ElementKind::DateTime,
            [
                Some(datetime!(1973-01-01 0:00)),
                None,
                Some(datetime!(2000-02-28 0:00)),
            ],
        )
        .unwrap(),
        Series::from_nullable_values("Height", ElementKind::Float64, [Some(1.83), Some(1.79), None])
            .unwrap(),
    ]);

    let decoded = decode_frame(&encode_frame(&frame, &config).unwrap(), &config).unwrap();

    assert_eq!(decoded.column_count(), frame.column_count());
    for (source, result) in frame.columns().iter().zip(decoded.columns()) {
        assert_eq!(source.name(), result.name());
        assert_eq!(source.kind(), result.kind());
        assert_eq!(source.nullable(), result.nullable());
        assert_eq!(source.cells(), result.cells());
    }
}
