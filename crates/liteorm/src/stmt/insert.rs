//! INSERT statement builder.

use crate::error::{LiteError, LiteResult};
use crate::ident::Ident;
use crate::stmt::entity::{Entity, SetValue};
use crate::stmt::param::ParamList;
use crate::stmt::traits::{Mutation, Statement};
use crate::value::Value;

/// INSERT statement builder.
///
/// Columns render in entity insertion order; the statement requests the
/// inserted row(s) back via `RETURNING`.
#[derive(Clone, Debug)]
pub struct InsertStmt {
    /// Table name
    table: String,
    /// Column assignments
    entity: Entity,
    /// RETURNING projection (default "*")
    returning: String,
}

impl InsertStmt {
    /// Create a new INSERT builder for a table.
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            entity: Entity::new(),
            returning: "*".to_string(),
        }
    }

    /// Replace the column assignments.
    pub fn entity(mut self, entity: Entity) -> Self {
        self.entity = entity;
        self
    }

    /// Assign a bound value to a column.
    pub fn set(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.entity = self.entity.set(column, value);
        self
    }

    /// Assign `CURRENT_TIMESTAMP` to a column.
    pub fn set_now(mut self, column: &str) -> Self {
        self.entity = self.entity.set_now(column);
        self
    }

    /// Set the RETURNING projection.
    pub fn returning(mut self, cols: &str) -> Self {
        self.returning = cols.to_string();
        self
    }

    fn render(&self) -> (String, ParamList) {
        let mut params = ParamList::new();
        let mut columns = Vec::with_capacity(self.entity.len());
        let mut values = Vec::with_capacity(self.entity.len());
        for (column, value) in self.entity.iter() {
            columns.push(column);
            values.push(match value {
                SetValue::Value(v) => params.placeholder(v.clone()),
                SetValue::CurrentTimestamp => "CURRENT_TIMESTAMP".to_string(),
            });
        }
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            self.table,
            columns.join(", "),
            values.join(", "),
            self.returning
        );
        (sql, params)
    }

    /// Get the built SQL string (for debugging).
    pub fn to_sql(&self) -> String {
        self.render().0
    }
}

impl Statement for InsertStmt {
    fn build(&self) -> (String, Vec<Value>) {
        let (sql, params) = self.render();
        (sql, params.into_values())
    }

    fn validate(&self) -> LiteResult<()> {
        Ident::parse(&self.table)?;
        if self.entity.is_empty() {
            return Err(LiteError::invalid_argument(
                "insert requires at least one column",
            ));
        }
        self.entity.validate()
    }
}

impl Mutation for InsertStmt {}
