//! # liteorm
//!
//! A minimal statement builder for SQLite-dialect databases.
//!
//! Converts plain ordered key/value mappings into parameterized SQL
//! statements (positional `?1, ?2, …` placeholders) for four operations —
//! fetch, create, update, remove — and delegates execution to an external
//! client behind the [`DbClient`] trait.
//!
//! ## Features
//!
//! - **Ordered by contract**: filters and entities are list-of-pairs types,
//!   so placeholder numbering always follows insertion order
//! - **Tagged values**: `IS NULL` and `CURRENT_TIMESTAMP` are enum variants,
//!   never magic sentinels that could be bound as data
//! - **Fail fast**: table and column names are validated before any statement
//!   is rendered; client errors pass through unchanged
//! - **Soft delete**: `remove` can rewrite a single-row delete into a
//!   `deleted_at = CURRENT_TIMESTAMP` update
//! - **Statement logging**: wrap any client in [`InstrumentedClient`] for
//!   `tracing`-based timing and slow-query warnings
//!
//! ## Usage
//!
//! ```ignore
//! use liteorm::{ops, Entity, FilterSet};
//!
//! // SELECT * FROM users WHERE id = ?1
//! let rows = ops::fetch(&client, "users", FilterSet::new().eq("id", 5), None).await?;
//!
//! // INSERT INTO users (name, age) VALUES (?1, ?2) RETURNING *
//! let created = ops::create(
//!     &client,
//!     "users",
//!     Entity::new().set("name", "john").set("age", 44),
//! )
//! .await?;
//!
//! // UPDATE users SET age = ?1 WHERE id = ?2
//! ops::update(
//!     &client,
//!     "users",
//!     Entity::new().set("age", 45),
//!     FilterSet::new().eq("id", 5),
//! )
//! .await?;
//!
//! // Soft delete: stamps deleted_at instead of deleting a single live row
//! ops::remove(&client, "users", FilterSet::new().eq("id", 5), true).await?;
//! ```

pub mod client;
pub mod error;
pub mod ident;
pub mod monitor;
pub mod ops;
pub mod row;
pub mod stmt;
pub mod value;

pub use client::DbClient;
pub use error::{LiteError, LiteResult};
pub use ident::Ident;
pub use monitor::{InstrumentedClient, MonitorConfig, QueryType};
pub use ops::{DELETED_AT, create, fetch, remove, update};
pub use row::Row;
pub use stmt::{
    DeleteStmt, Entity, Filter, FilterSet, InsertStmt, Mutation, ParamList, SelectStmt, SetValue,
    Statement, UpdateStmt,
};
pub use value::Value;
