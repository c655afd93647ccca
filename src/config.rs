//! Configuration for GridKV
//!
//! Formatting rules for the codec are explicit, passed-in configuration
//! rather than ambient locale state. The defaults match the wire format the
//! store has always used: datetimes as `yyyy-MM-ddTHH:mm:ss.fff`, durations
//! as total seconds in decimal.

use time::format_description::FormatItem;
use time::macros::format_description;
use time::PrimitiveDateTime;

use crate::error::{GridError, Result};

/// Encode pattern for datetime cells (millisecond precision)
pub const DATETIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]");

/// Parse fallback: datetimes written without a subsecond part
pub const DATETIME_FORMAT_NO_SUBSECOND: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

/// Formatting configuration for the codec
#[derive(Debug, Clone)]
pub struct CodecConfig {
    /// Pattern used when encoding datetime cells
    pub datetime_format: &'static [FormatItem<'static>],

    /// Patterns tried in order when decoding datetime cells
    pub datetime_parse_formats: Vec<&'static [FormatItem<'static>]>,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            datetime_format: DATETIME_FORMAT,
            datetime_parse_formats: vec![DATETIME_FORMAT, DATETIME_FORMAT_NO_SUBSECOND],
        }
    }
}

impl CodecConfig {
    /// Create a new config builder
    pub fn builder() -> CodecConfigBuilder {
        CodecConfigBuilder::default()
    }

    /// Format a datetime with the configured encode pattern
    pub fn format_datetime(&self, value: PrimitiveDateTime) -> Result<String> {
        Ok(value.format(self.datetime_format)?)
    }

    /// Parse a datetime, trying each configured pattern in order
    pub fn parse_datetime(&self, text: &str) -> Result<PrimitiveDateTime> {
        for format in &self.datetime_parse_formats {
            if let Ok(value) = PrimitiveDateTime::parse(text, *format) {
                return Ok(value);
            }
        }
        Err(GridError::ValueParse {
            kind: "datetime",
            value: text.to_string(),
        })
    }
}

/// Builder for CodecConfig
#[derive(Default)]
pub struct CodecConfigBuilder {
    config: CodecConfig,
}

impl CodecConfigBuilder {
    /// Set the datetime encode pattern
    pub fn datetime_format(mut self, format: &'static [FormatItem<'static>]) -> Self {
        self.config.datetime_format = format;
        self
    }

    /// Replace the list of datetime parse patterns
    pub fn datetime_parse_formats(
        mut self,
        formats: Vec<&'static [FormatItem<'static>]>,
    ) -> Self {
        self.config.datetime_parse_formats = formats;
        self
    }

    pub fn build(self) -> CodecConfig {
        self.config
    }
}
