//! Series
//!
//! An ordered, homogeneous, optionally-nullable column of cells with an
//! optional name. A series never stores a cell of the wrong kind, and a
//! non-nullable series never stores a null; both are rejected before any
//! mutation takes effect.

use serde::{Deserialize, Serialize};

use crate::data::Cell;
use crate::dtype::ElementKind;
use crate::error::{GridError, Result};

/// A strongly typed column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Optional column name
    name: Option<String>,

    /// The element kind every non-null cell must have
    kind: ElementKind,

    /// Whether null cells are permitted
    nullable: bool,

    /// The cells, in row order
    cells: Vec<Cell>,
}

impl Series {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Create an empty, unnamed series with the kind's default nullability
    pub fn new(kind: ElementKind) -> Self {
        Self {
            name: None,
            kind,
            nullable: kind.default_nullable(),
            cells: Vec::new(),
        }
    }

    /// Create an empty, named series with the kind's default nullability
    pub fn named(name: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            name: Some(name.into()),
            kind,
            nullable: kind.default_nullable(),
            cells: Vec::new(),
        }
    }

    /// Override the nullability flag
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Build a series from values of the column's kind
    ///
    /// Nullability defaults per kind; use [`Series::from_nullable_values`]
    /// when the input carries `Option`s.
    pub fn from_values<T>(
        name: impl Into<String>,
        kind: ElementKind,
        values: impl IntoIterator<Item = T>,
    ) -> Result<Self>
    where
        T: Into<Cell>,
    {
        let mut series = Series::named(name, kind);
        for value in values {
            series.push(value.into())?;
        }
        Ok(series)
    }

    /// Build a nullable series from optional values
    pub fn from_nullable_values<T>(
        name: impl Into<String>,
        kind: ElementKind,
        values: impl IntoIterator<Item = Option<T>>,
    ) -> Result<Self>
    where
        T: Into<Cell>,
    {
        let mut series = Series::named(name, kind).with_nullable(true);
        for value in values {
            series.push(Cell::from(value))?;
        }
        Ok(series)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at `index`, or `None` when out of bounds
    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Index of the first cell equal to `value`
    pub fn position(&self, value: &Cell) -> Option<usize> {
        self.cells.iter().position(|c| c == value)
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Replace the cell at `index`
    pub fn set(&mut self, index: usize, value: impl Into<Cell>) -> Result<()> {
        let cell = value.into();
        self.check_cell(&cell)?;
        let len = self.cells.len();
        match self.cells.get_mut(index) {
            Some(slot) => {
                *slot = cell;
                Ok(())
            }
            None => Err(GridError::IndexOutOfBounds { index, len }),
        }
    }

    /// Append a cell
    pub fn push(&mut self, value: impl Into<Cell>) -> Result<()> {
        let cell = value.into();
        self.check_cell(&cell)?;
        self.cells.push(cell);
        Ok(())
    }

    /// Insert a cell at `index`; inserting at `len()` is equivalent to push
    pub fn insert(&mut self, index: usize, value: impl Into<Cell>) -> Result<()> {
        let cell = value.into();
        self.check_cell(&cell)?;
        if index > self.cells.len() {
            return Err(GridError::IndexOutOfBounds {
                index,
                len: self.cells.len(),
            });
        }
        self.cells.insert(index, cell);
        Ok(())
    }

    /// Remove and return the cell at `index`
    pub fn remove(&mut self, index: usize) -> Result<Cell> {
        if index >= self.cells.len() {
            return Err(GridError::IndexOutOfBounds {
                index,
                len: self.cells.len(),
            });
        }
        Ok(self.cells.remove(index))
    }

    pub(crate) fn check_cell(&self, cell: &Cell) -> Result<()> {
        if cell.is_null() {
            if !self.nullable {
                return Err(GridError::NullNotAllowed);
            }
            return Ok(());
        }
        if !cell.matches(self.kind) {
            return Err(GridError::KindMismatch {
                expected: self.kind.name(),
                actual: cell.kind().map(ElementKind::name).unwrap_or("null"),
            });
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
