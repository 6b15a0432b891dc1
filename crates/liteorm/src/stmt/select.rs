//! SELECT statement builder.

use crate::error::{LiteError, LiteResult};
use crate::ident::Ident;
use crate::stmt::filter::FilterSet;
use crate::stmt::param::ParamList;
use crate::stmt::traits::Statement;
use crate::value::Value;

/// SELECT statement builder.
#[derive(Clone, Debug)]
pub struct SelectStmt {
    /// Table name
    table: String,
    /// Projection, comma-separated (default "*")
    fields: String,
    /// WHERE filters
    filters: FilterSet,
}

impl SelectStmt {
    /// Create a new SELECT builder for a table.
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            fields: "*".to_string(),
            filters: FilterSet::new(),
        }
    }

    /// Set the projected fields (comma-separated column list).
    pub fn fields(mut self, fields: &str) -> Self {
        self.fields = fields.to_string();
        self
    }

    /// Replace the WHERE filters.
    pub fn filters(mut self, filters: FilterSet) -> Self {
        self.filters = filters;
        self
    }

    /// Add WHERE: column = value
    pub fn eq(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.filters = self.filters.eq(column, value);
        self
    }

    /// Add WHERE: column IS NULL
    pub fn is_null(mut self, column: &str) -> Self {
        self.filters = self.filters.is_null(column);
        self
    }

    fn render(&self) -> (String, ParamList) {
        let mut params = ParamList::new();
        let mut sql = format!("SELECT {} FROM {}", self.fields, self.table);
        let where_sql = self.filters.render(&mut params);
        if !where_sql.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&where_sql);
        }
        (sql, params)
    }

    /// Get the built SQL string (for debugging).
    pub fn to_sql(&self) -> String {
        self.render().0
    }
}

impl Statement for SelectStmt {
    fn build(&self) -> (String, Vec<Value>) {
        let (sql, params) = self.render();
        (sql, params.into_values())
    }

    fn validate(&self) -> LiteResult<()> {
        Ident::parse(&self.table)?;
        self.filters.validate()?;
        if self.fields.trim().is_empty() {
            return Err(LiteError::invalid_argument("field list cannot be empty"));
        }
        for field in self.fields.split(',') {
            let field = field.trim();
            if field != "*" {
                Ident::parse(field)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_all() {
        let stmt = SelectStmt::new("users");
        assert_eq!(stmt.to_sql(), "SELECT * FROM users");
        assert!(stmt.validate().is_ok());
    }

    #[test]
    fn select_with_eq() {
        let stmt = SelectStmt::new("users").eq("id", 5);
        let (sql, values) = stmt.build();
        assert_eq!(sql, "SELECT * FROM users WHERE id = ?1");
        assert_eq!(values, vec![Value::Integer(5)]);
    }

    #[test]
    fn select_with_fields() {
        let stmt = SelectStmt::new("users").fields("id, name").eq("age", 44);
        assert_eq!(stmt.to_sql(), "SELECT id, name FROM users WHERE age = ?1");
        assert!(stmt.validate().is_ok());
    }

    #[test]
    fn select_null_filters_only() {
        // Regression: null-only filters must not render a stray leading AND.
        let stmt = SelectStmt::new("users").is_null("deleted_at");
        let (sql, values) = stmt.build();
        assert_eq!(sql, "SELECT * FROM users WHERE deleted_at IS NULL");
        assert!(values.is_empty());
    }

    #[test]
    fn select_mixed_filters() {
        let stmt = SelectStmt::new("users")
            .eq("status", "active")
            .is_null("deleted_at")
            .eq("age", 44);
        let (sql, values) = stmt.build();
        assert_eq!(
            sql,
            "SELECT * FROM users WHERE status = ?1 AND deleted_at IS NULL AND age = ?2"
        );
        assert_eq!(
            values,
            vec![Value::Text("active".into()), Value::Integer(44)]
        );
    }

    #[test]
    fn select_rejects_bad_table() {
        assert!(SelectStmt::new("").validate().unwrap_err().is_invalid_argument());
        assert!(SelectStmt::new("users; --").validate().is_err());
    }

    #[test]
    fn select_rejects_bad_fields() {
        assert!(SelectStmt::new("users").fields(" ").validate().is_err());
        assert!(SelectStmt::new("users").fields("id, 1bad").validate().is_err());
    }
}
