//! Statement instrumentation for delegated execution.
//!
//! [`InstrumentedClient`] wraps any [`DbClient`], times each delegated call,
//! and emits `tracing` events with the statement kind, parameter count,
//! duration, and outcome. Queries past the configured threshold are logged at
//! WARN. Results pass through unchanged.

use crate::client::DbClient;
use crate::error::LiteResult;
use crate::row::Row;
use crate::value::Value;
use std::time::{Duration, Instant};

/// The kind of SQL statement being executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryType {
    Select,
    Insert,
    Update,
    Delete,
    Other,
}

impl QueryType {
    /// Detect the statement kind from SQL text, skipping leading comments.
    pub fn from_sql(sql: &str) -> Self {
        let head = strip_sql_prefix(sql)
            .split_whitespace()
            .next()
            .unwrap_or("");
        if head.eq_ignore_ascii_case("SELECT") {
            Self::Select
        } else if head.eq_ignore_ascii_case("INSERT") {
            Self::Insert
        } else if head.eq_ignore_ascii_case("UPDATE") {
            Self::Update
        } else if head.eq_ignore_ascii_case("DELETE") {
            Self::Delete
        } else {
            Self::Other
        }
    }

    /// Lowercase label for log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Other => "other",
        }
    }
}

/// Skip leading whitespace, `--` line comments, and `/* */` block comments.
fn strip_sql_prefix(sql: &str) -> &str {
    let mut s = sql;
    loop {
        s = s.trim_start();
        if let Some(rest) = s.strip_prefix("--") {
            match rest.find('\n') {
                Some(pos) => s = &rest[pos + 1..],
                None => return "",
            }
        } else if let Some(rest) = s.strip_prefix("/*") {
            match rest.find("*/") {
                Some(pos) => s = &rest[pos + 2..],
                None => return "",
            }
        } else {
            return s;
        }
    }
}

/// Truncate SQL for logging without splitting a UTF-8 character.
fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

/// Configuration for [`InstrumentedClient`].
#[derive(Clone, Debug)]
pub struct MonitorConfig {
    /// Duration past which a statement is logged at WARN.
    pub slow_query_threshold: Duration,
    /// Maximum SQL bytes included in a log event.
    pub max_sql_len: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            slow_query_threshold: Duration::from_secs(1),
            max_sql_len: 1024,
        }
    }
}

impl MonitorConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the slow-query threshold.
    pub fn with_slow_query_threshold(mut self, threshold: Duration) -> Self {
        self.slow_query_threshold = threshold;
        self
    }

    /// Override the logged SQL length cap.
    pub fn with_max_sql_len(mut self, max: usize) -> Self {
        self.max_sql_len = max;
        self
    }
}

/// A [`DbClient`] wrapper that logs every delegated statement via `tracing`.
#[derive(Clone, Debug)]
pub struct InstrumentedClient<C> {
    inner: C,
    config: MonitorConfig,
}

impl<C> InstrumentedClient<C> {
    /// Wrap a client with default configuration.
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            config: MonitorConfig::default(),
        }
    }

    /// Override the configuration.
    pub fn with_config(mut self, config: MonitorConfig) -> Self {
        self.config = config;
        self
    }

    /// Unwrap the inner client.
    pub fn into_inner(self) -> C {
        self.inner
    }

    fn observe(&self, sql: &str, params: usize, elapsed: Duration, rows: Option<u64>, ok: bool) {
        let query_type = QueryType::from_sql(sql).as_str();
        let sql = truncate_sql_bytes(sql, self.config.max_sql_len);
        let elapsed_ms = elapsed.as_millis() as u64;
        if elapsed >= self.config.slow_query_threshold {
            tracing::warn!(target: "liteorm::sql", query_type, params, elapsed_ms, sql, "slow query");
        } else {
            tracing::debug!(target: "liteorm::sql", query_type, params, rows, elapsed_ms, ok, sql, "statement executed");
        }
    }
}

impl<C: DbClient> DbClient for InstrumentedClient<C> {
    fn query(
        &self,
        sql: &str,
        params: &[Value],
    ) -> impl std::future::Future<Output = LiteResult<Vec<Row>>> + Send {
        async move {
            let started = Instant::now();
            let result = self.inner.query(sql, params).await;
            let rows = result.as_ref().ok().map(|r| r.len() as u64);
            self.observe(sql, params.len(), started.elapsed(), rows, result.is_ok());
            result
        }
    }

    fn execute(
        &self,
        sql: &str,
        params: &[Value],
    ) -> impl std::future::Future<Output = LiteResult<u64>> + Send {
        async move {
            let started = Instant::now();
            let result = self.inner.execute(sql, params).await;
            let rows = result.as_ref().ok().copied();
            self.observe(sql, params.len(), started.elapsed(), rows, result.is_ok());
            result
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LiteError;

    #[test]
    fn query_type_detection() {
        assert_eq!(QueryType::from_sql("SELECT * FROM t"), QueryType::Select);
        assert_eq!(QueryType::from_sql("  insert into t"), QueryType::Insert);
        assert_eq!(
            QueryType::from_sql("-- comment\nUPDATE t SET a = ?1"),
            QueryType::Update
        );
        assert_eq!(
            QueryType::from_sql("/* hint */ DELETE FROM t"),
            QueryType::Delete
        );
        assert_eq!(QueryType::from_sql("PRAGMA table_info(t)"), QueryType::Other);
        assert_eq!(QueryType::from_sql("-- only a comment"), QueryType::Other);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // Byte 10 falls inside the two-byte 'é'; truncation must back up.
        let sql = "SELECT 'héllo'";
        let truncated = truncate_sql_bytes(sql, 10);
        assert_eq!(truncated, "SELECT 'h");
        assert!(sql.starts_with(truncated));
    }

    struct StubClient;

    impl DbClient for StubClient {
        fn query(
            &self,
            _sql: &str,
            _params: &[Value],
        ) -> impl std::future::Future<Output = LiteResult<Vec<Row>>> + Send {
            async { Ok(vec![Row::from_pairs([("id", Value::Integer(1))])]) }
        }

        fn execute(
            &self,
            _sql: &str,
            _params: &[Value],
        ) -> impl std::future::Future<Output = LiteResult<u64>> + Send {
            async { Err(LiteError::not_found("nothing to do")) }
        }
    }

    #[tokio::test]
    async fn results_pass_through_unchanged() {
        let client = InstrumentedClient::new(StubClient);
        let rows = client.query("SELECT * FROM t", &[]).await.unwrap();
        assert_eq!(rows.len(), 1);
        let err = client.execute("DELETE FROM t", &[]).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
