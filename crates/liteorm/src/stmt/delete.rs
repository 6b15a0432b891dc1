//! DELETE statement builder.

use crate::error::LiteResult;
use crate::ident::Ident;
use crate::stmt::filter::FilterSet;
use crate::stmt::param::ParamList;
use crate::stmt::traits::{Mutation, Statement};
use crate::value::Value;

/// DELETE statement builder.
///
/// WHERE conditions are equality-only. An empty filter set deletes every row
/// of the table; the caller owns that decision.
#[derive(Clone, Debug)]
pub struct DeleteStmt {
    /// Table name
    table: String,
    /// WHERE filters (equality-only)
    filters: FilterSet,
}

impl DeleteStmt {
    /// Create a new DELETE builder for a table.
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            filters: FilterSet::new(),
        }
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

    fn render(&self) -> (String, ParamList) {
        let mut params = ParamList::new();
        let mut sql = format!("DELETE FROM {}", self.table);
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

impl Statement for DeleteStmt {
    fn build(&self) -> (String, Vec<Value>) {
        let (sql, params) = self.render();
        (sql, params.into_values())
    }

    fn validate(&self) -> LiteResult<()> {
        Ident::parse(&self.table)?;
        self.filters.validate_eq_only("delete")
    }
}

impl Mutation for DeleteStmt {}
