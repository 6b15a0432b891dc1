//! Trait definitions for statement builders.

use crate::client::DbClient;
use crate::error::LiteResult;
use crate::row::Row;
use crate::value::Value;

/// Base trait for all statement builders.
///
/// A builder renders to `(sql, bound_values)` and can execute itself against
/// any [`DbClient`]. Validation runs before rendering, so invalid input never
/// reaches the client.
pub trait Statement: Sync {
    /// Render the SQL text and its ordered bound values.
    fn build(&self) -> (String, Vec<Value>);

    /// Validate builder state before execution.
    fn validate(&self) -> LiteResult<()> {
        Ok(())
    }

    /// Debug helper for the SQL text alone.
    fn to_sql(&self) -> String {
        self.build().0
    }

    /// Execute and return all rows.
    fn query(
        &self,
        conn: &impl DbClient,
    ) -> impl std::future::Future<Output = LiteResult<Vec<Row>>> + Send {
        async move {
            self.validate()?;
            let (sql, values) = self.build();
            conn.query(&sql, &values).await
        }
    }

    /// Execute and return at most one row.
    fn query_opt(
        &self,
        conn: &impl DbClient,
    ) -> impl std::future::Future<Output = LiteResult<Option<Row>>> + Send {
        async move {
            self.validate()?;
            let (sql, values) = self.build();
            conn.query_opt(&sql, &values).await
        }
    }

    /// Execute and return the first row, erroring when there is none.
    fn query_one(
        &self,
        conn: &impl DbClient,
    ) -> impl std::future::Future<Output = LiteResult<Row>> + Send {
        async move {
            self.validate()?;
            let (sql, values) = self.build();
            conn.query_one(&sql, &values).await
        }
    }
}

/// Trait for mutation builders (INSERT/UPDATE/DELETE).
pub trait Mutation: Statement {
    /// Execute and return the affected row count.
    fn execute(
        &self,
        conn: &impl DbClient,
    ) -> impl std::future::Future<Output = LiteResult<u64>> + Send {
        async move {
            self.validate()?;
            let (sql, values) = self.build();
            conn.execute(&sql, &values).await
        }
    }
}
