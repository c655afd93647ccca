//! Reply definitions
//!
//! Scalar wire values and the three reply shapes an executor can hand back.

use bytes::Bytes;

use crate::error::{GridError, Result};

/// One scalar on the wire: an integer, binary-safe data, or null
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireValue {
    Int(i64),
    Data(Bytes),
    Null,
}

impl WireValue {
    /// Borrow the value as UTF-8 text
    pub fn as_str(&self) -> Result<&str> {
        match self {
            WireValue::Data(data) => std::str::from_utf8(data)
                .map_err(|_| GridError::Protocol("non-UTF-8 wire data".to_string())),
            WireValue::Int(_) => Err(GridError::Protocol(
                "expected text, got integer".to_string(),
            )),
            WireValue::Null => Err(GridError::Protocol("expected text, got null".to_string())),
        }
    }

    /// Read the value as an integer, parsing textual data if needed
    pub fn as_i64(&self) -> Result<i64> {
        match self {
            WireValue::Int(value) => Ok(*value),
            WireValue::Data(_) => {
                let text = self.as_str()?;
                text.parse().map_err(|_| GridError::Protocol(format!(
                    "expected integer, got {text:?}"
                )))
            }
            WireValue::Null => Err(GridError::Protocol(
                "expected integer, got null".to_string(),
            )),
        }
    }

    /// Convert to an owned, nullable cell string
    ///
    /// Integers stringify; null stays null.
    pub fn into_cell_string(self) -> Result<Option<String>> {
        match self {
            WireValue::Null => Ok(None),
            WireValue::Int(value) => Ok(Some(value.to_string())),
            WireValue::Data(_) => Ok(Some(self.as_str()?.to_string())),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, WireValue::Null)
    }
}

impl From<i64> for WireValue {
    fn from(value: i64) -> Self {
        WireValue::Int(value)
    }
}

impl From<usize> for WireValue {
    fn from(value: usize) -> Self {
        WireValue::Int(value as i64)
    }
}

impl From<&str> for WireValue {
    fn from(value: &str) -> Self {
        WireValue::Data(Bytes::copy_from_slice(value.as_bytes()))
    }
}

impl From<String> for WireValue {
    fn from(value: String) -> Self {
        WireValue::Data(Bytes::from(value.into_bytes()))
    }
}

impl From<Option<String>> for WireValue {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(s) => s.into(),
            None => WireValue::Null,
        }
    }
}

/// A reply from the executor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A simple status line, e.g. `OK`
    Status(String),

    /// A server-side error; the message is surfaced to callers verbatim
    Error(String),

    /// An array of scalar values
    Values(Vec<WireValue>),
}

impl Reply {
    /// The canonical success status
    pub fn ok() -> Self {
        Reply::Status("OK".to_string())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Reply::Error(message.into())
    }

    /// Require an `OK` status reply
    pub fn expect_ok(self) -> Result<()> {
        match self {
            Reply::Status(status) if status == "OK" => Ok(()),
            Reply::Status(status) => Err(GridError::Protocol(format!(
                "unexpected status {status:?}"
            ))),
            Reply::Error(message) => Err(GridError::Server(message)),
            Reply::Values(_) => Err(GridError::Protocol(
                "expected status, got value array".to_string(),
            )),
        }
    }

    /// Require a value-array reply
    pub fn into_values(self) -> Result<Vec<WireValue>> {
        match self {
            Reply::Values(values) => Ok(values),
            Reply::Error(message) => Err(GridError::Server(message)),
            Reply::Status(status) => Err(GridError::Protocol(format!(
                "expected values, got status {status:?}"
            ))),
        }
    }
}
