//! Result rows passed back from the external client.

use crate::error::{LiteError, LiteResult};
use crate::value::Value;

/// One result row: ordered column names with their values.
///
/// Rows are opaque to the statement builders — they are constructed by the
/// client implementation and passed through to the caller. The one place this
/// crate inspects a row itself is the soft-delete redirect, which reads the
/// deletion-timestamp column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: Vec<String>,
    values: Vec<Value>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from `(column, value)` pairs, preserving order.
    pub fn from_pairs<C, V, I>(pairs: I) -> Self
    where
        C: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (C, V)>,
    {
        let mut row = Self::new();
        for (column, value) in pairs {
            row.push(column, value);
        }
        row
    }

    /// Append one column to the row.
    pub fn push(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.columns.push(column.into());
        self.values.push(value.into());
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column names in order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    /// Value of the named column, or `None` if the row has no such column.
    ///
    /// When a column appears more than once the first occurrence wins.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| &self.values[i])
    }

    /// Value of the named column, or `NotFound` if the row has no such column.
    pub fn try_get(&self, column: &str) -> LiteResult<&Value> {
        self.get(column)
            .ok_or_else(|| LiteError::not_found(format!("column '{column}'")))
    }

    /// Iterate over `(column, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_by_column() {
        let row = Row::from_pairs([("id", Value::Integer(5)), ("name", Value::Text("a".into()))]);
        assert_eq!(row.get("id"), Some(&Value::Integer(5)));
        assert_eq!(row.get("missing"), None);
        assert!(row.try_get("missing").unwrap_err().is_not_found());
    }

    #[test]
    fn preserves_order() {
        let row = Row::from_pairs([("b", 1i64), ("a", 2i64)]);
        let cols: Vec<&str> = row.columns().collect();
        assert_eq!(cols, vec!["b", "a"]);
    }
}
