//! The four-operation surface: fetch, create, update, remove.
//!
//! Thin wrappers over the statement builders that take a table name and plain
//! ordered mappings, delegate one statement to the client, and return its
//! result unchanged. `remove` additionally implements the soft-delete
//! redirect.

use crate::client::DbClient;
use crate::error::{LiteError, LiteResult};
use crate::row::Row;
use crate::stmt::{DeleteStmt, Entity, FilterSet, InsertStmt, Mutation, SelectStmt, Statement, UpdateStmt};
use crate::value::Value;

/// The deletion-timestamp column consulted and set by soft delete.
pub const DELETED_AT: &str = "deleted_at";

/// Fetch rows matching `filters`, optionally projected to `fields`.
///
/// An empty filter set fetches every row of the table.
pub async fn fetch(
    conn: &impl DbClient,
    table: &str,
    filters: FilterSet,
    fields: Option<&str>,
) -> LiteResult<Vec<Row>> {
    let mut stmt = SelectStmt::new(table).filters(filters);
    if let Some(fields) = fields {
        stmt = stmt.fields(fields);
    }
    stmt.query(conn).await
}

/// Insert one row and return the inserted row(s) as reported by the client.
///
/// The entity mapping must contain at least one column.
pub async fn create(conn: &impl DbClient, table: &str, entity: Entity) -> LiteResult<Vec<Row>> {
    InsertStmt::new(table).entity(entity).query(conn).await
}

/// Update rows matching `filters` (equality-only) and return the affected
/// row count.
///
/// An empty filter set updates every row of the table.
pub async fn update(
    conn: &impl DbClient,
    table: &str,
    entity: Entity,
    filters: FilterSet,
) -> LiteResult<u64> {
    UpdateStmt::new(table)
        .entity(entity)
        .filters(filters)
        .execute(conn)
        .await
}

/// Delete rows matching `filters` (equality-only) and return the affected
/// row count.
///
/// With `soft_remove`, the matching rows are fetched first: when exactly one
/// row matches and its [`DELETED_AT`] column is currently NULL, the delete is
/// rewritten as an update stamping `deleted_at = CURRENT_TIMESTAMP` under the
/// same conditions. In every other case — flag unset, zero matches, multiple
/// matches, the column already set, or the column absent — the row(s) are
/// deleted for real.
pub async fn remove(
    conn: &impl DbClient,
    table: &str,
    filters: FilterSet,
    soft_remove: bool,
) -> LiteResult<u64> {
    if filters.has_null_checks() {
        return Err(LiteError::invalid_argument(
            "remove conditions are equality-only, IS NULL is not supported here",
        ));
    }
    if soft_remove {
        let matches = SelectStmt::new(table)
            .filters(filters.clone())
            .query(conn)
            .await?;
        if let [row] = matches.as_slice() {
            if matches!(row.get(DELETED_AT), Some(Value::Null)) {
                tracing::debug!(target: "liteorm", table, "soft delete: stamping {DELETED_AT} instead of deleting");
                return update(conn, table, Entity::new().set_now(DELETED_AT), filters).await;
            }
        }
    }
    DeleteStmt::new(table).filters(filters).execute(conn).await
}
