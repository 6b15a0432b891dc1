//! Generic client trait for delegated statement execution.

use crate::error::{LiteError, LiteResult};
use crate::row::Row;
use crate::value::Value;

/// The execution capability this crate delegates to.
///
/// Implementations accept SQL text with positional `?1, ?2, …` placeholders
/// and an ordered slice of values to bind. The crate never opens connections
/// or manages pools; it only composes statements and hands them to a client.
///
/// Errors raised by the client propagate unchanged to the caller — no retries,
/// no translation.
pub trait DbClient: Send + Sync {
    /// Execute a statement and return all resulting rows.
    fn query(
        &self,
        sql: &str,
        params: &[Value],
    ) -> impl std::future::Future<Output = LiteResult<Vec<Row>>> + Send;

    /// Execute a statement and return the number of affected rows.
    fn execute(
        &self,
        sql: &str,
        params: &[Value],
    ) -> impl std::future::Future<Output = LiteResult<u64>> + Send;

    /// Execute a statement and return the first row, if any.
    ///
    /// Semantics:
    /// - 0 rows: returns `Ok(None)`
    /// - 1 row: returns `Ok(Some(row))`
    /// - multiple rows: returns `Ok(Some(first_row))` (does **not** error)
    fn query_opt(
        &self,
        sql: &str,
        params: &[Value],
    ) -> impl std::future::Future<Output = LiteResult<Option<Row>>> + Send {
        async move {
            let rows = self.query(sql, params).await?;
            Ok(rows.into_iter().next())
        }
    }

    /// Execute a statement and return the **first** row.
    ///
    /// Returns [`LiteError::NotFound`] if no rows are returned.
    fn query_one(
        &self,
        sql: &str,
        params: &[Value],
    ) -> impl std::future::Future<Output = LiteResult<Row>> + Send {
        async move {
            self.query_opt(sql, params)
                .await?
                .ok_or_else(|| LiteError::not_found("expected 1 row, got 0"))
        }
    }
}
