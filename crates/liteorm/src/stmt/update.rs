//! UPDATE statement builder.

use crate::error::{LiteError, LiteResult};
use crate::ident::Ident;
use crate::stmt::entity::{Entity, SetValue};
use crate::stmt::filter::FilterSet;
use crate::stmt::param::ParamList;
use crate::stmt::traits::{Mutation, Statement};
use crate::value::Value;

/// UPDATE statement builder.
///
/// SET assignments and WHERE conditions share one placeholder counter:
/// numbering runs through the entity first, then continues into the
/// conditions. WHERE conditions are equality-only.
#[derive(Clone, Debug)]
pub struct UpdateStmt {
    /// Table name
    table: String,
    /// SET assignments
    entity: Entity,
    /// WHERE filters (equality-only)
    filters: FilterSet,
}

impl UpdateStmt {
    /// Create a new UPDATE builder for a table.
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            entity: Entity::new(),
            filters: FilterSet::new(),
        }
    }

    /// Replace the SET assignments.
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
        let set_parts: Vec<String> = self
            .entity
            .iter()
            .map(|(column, value)| match value {
                SetValue::Value(v) => {
                    format!("{column} = {}", params.placeholder(v.clone()))
                }
                SetValue::CurrentTimestamp => format!("{column} = CURRENT_TIMESTAMP"),
            })
            .collect();
        let mut sql = format!("UPDATE {} SET {}", self.table, set_parts.join(", "));
        // Same ParamList, so condition placeholders continue the counter.
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

impl Statement for UpdateStmt {
    fn build(&self) -> (String, Vec<Value>) {
        let (sql, params) = self.render();
        (sql, params.into_values())
    }

    fn validate(&self) -> LiteResult<()> {
        Ident::parse(&self.table)?;
        if self.entity.is_empty() {
            return Err(LiteError::invalid_argument(
                "update requires at least one SET column",
            ));
        }
        self.entity.validate()?;
        self.filters.validate_eq_only("update")
    }
}

impl Mutation for UpdateStmt {}
