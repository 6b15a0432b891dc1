//! Statement builders for the four supported operations.
//!
//! Each builder renders one SQL string with positional `?N` placeholders and a
//! matching ordered list of bound [`crate::Value`]s, then delegates execution
//! to a [`crate::DbClient`].
//!
//! # Features
//!
//! - **Ordered mappings**: filters and entity columns are list-of-pairs types,
//!   so placeholder numbering follows insertion order
//! - **No string replacement**: placeholder indices are computed at build
//!   time via [`ParamList`]
//! - **Tagged values**: `IS NULL` filters and `CURRENT_TIMESTAMP` assignments
//!   are enum variants, never overloaded sentinels
//!
//! # Usage
//!
//! ```ignore
//! use liteorm::stmt::{SelectStmt, InsertStmt, UpdateStmt, DeleteStmt};
//! use liteorm::{Mutation, Statement};
//!
//! let rows = SelectStmt::new("users")
//!     .eq("status", "active")
//!     .query(&client)
//!     .await?;
//!
//! let created = InsertStmt::new("users")
//!     .set("name", "john")
//!     .set("age", 44)
//!     .query(&client)
//!     .await?;
//!
//! let changed = UpdateStmt::new("users")
//!     .set("age", 45)
//!     .eq("id", 5)
//!     .execute(&client)
//!     .await?;
//!
//! let removed = DeleteStmt::new("users")
//!     .eq("id", 5)
//!     .execute(&client)
//!     .await?;
//! ```

mod delete;
mod entity;
mod filter;
mod insert;
mod param;
mod select;
mod traits;
mod update;

pub use delete::DeleteStmt;
pub use entity::{Entity, SetValue};
pub use filter::{Filter, FilterSet};
pub use insert::InsertStmt;
pub use param::ParamList;
pub use select::SelectStmt;
pub use traits::{Mutation, Statement};
pub use update::UpdateStmt;

#[cfg(test)]
mod tests;
