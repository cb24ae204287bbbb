//! Column reader utilities for play log ingestion.
//!
//! `ColumnReader` wraps a DataFrame and hands out typed cell values so that
//! the play log builder never deals with `AnyValue` directly. Missing columns
//! and out-of-range rows read as null.

use polars::prelude::{AnyValue, Column, DataFrame};

use crate::polars_utils::{any_to_bool, any_to_i64, any_to_string_non_empty};

/// A reader for accessing DataFrame cells by column name.
#[derive(Debug)]
pub struct ColumnReader<'a> {
    df: &'a DataFrame,
}

impl<'a> ColumnReader<'a> {
    /// Create a new column reader for the given DataFrame.
    #[inline]
    pub fn new(df: &'a DataFrame) -> Self {
        Self { df }
    }

    /// Get the number of rows in the DataFrame.
    #[inline]
    pub fn height(&self) -> usize {
        self.df.height()
    }

    /// Get a column by name, returning None if not found.
    #[inline]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.df.column(name).ok()
    }

    /// Check if a column exists.
    #[inline]
    pub fn has_column(&self, name: &str) -> bool {
        self.df.column(name).is_ok()
    }

    /// Names from `required` that are not columns of the DataFrame.
    pub fn missing_columns<'n>(&self, required: impl IntoIterator<Item = &'n str>) -> Vec<String> {
        required
            .into_iter()
            .filter(|name| !self.has_column(name))
            .map(str::to_string)
            .collect()
    }

    fn value(&self, column: &str, row_idx: usize) -> AnyValue<'_> {
        self.column(column)
            .and_then(|series| series.get(row_idx).ok())
            .unwrap_or(AnyValue::Null)
    }

    /// Trimmed string value; None for null, empty or "NA".
    pub fn string(&self, column: &str, row_idx: usize) -> Option<String> {
        any_to_string_non_empty(self.value(column, row_idx))
    }

    /// Integer value; None for null or non-integer cells.
    pub fn int(&self, column: &str, row_idx: usize) -> Option<i64> {
        any_to_i64(self.value(column, row_idx))
    }

    /// Non-negative integer value that fits in `u32`.
    pub fn uint(&self, column: &str, row_idx: usize) -> Option<u32> {
        self.int(column, row_idx)
            .and_then(|value| u32::try_from(value).ok())
    }

    /// Boolean flag value.
    pub fn flag(&self, column: &str, row_idx: usize) -> Option<bool> {
        any_to_bool(self.value(column, row_idx))
    }

    /// First non-empty string in a column.
    pub fn first_non_empty(&self, column: &str) -> Option<String> {
        (0..self.height()).find_map(|idx| self.string(column, idx))
    }
}
