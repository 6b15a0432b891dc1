//! Column assignments for insert and update.

use crate::error::LiteResult;
use crate::ident::Ident;
use crate::value::Value;

/// A value assigned to a column.
///
/// `CurrentTimestamp` renders the unbound `CURRENT_TIMESTAMP` keyword and
/// never enters the bound-value list. Keeping it a variant (rather than a
/// magic string) means callers cannot accidentally bind the literal text as
/// data.
#[derive(Clone, Debug, PartialEq)]
pub enum SetValue {
    /// A bound scalar: `column = ?N`
    Value(Value),
    /// The database clock: `column = CURRENT_TIMESTAMP`
    CurrentTimestamp,
}

impl<T: Into<Value>> From<T> for SetValue {
    fn from(v: T) -> Self {
        SetValue::Value(v.into())
    }
}

/// An ordered mapping of column assignments for insert or update.
///
/// Insertion order determines both the rendered column order and placeholder
/// numbering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Entity {
    entries: Vec<(String, SetValue)>,
}

impl Entity {
    /// Create an empty entity mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a bound value to a column.
    pub fn set(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.entries
            .push((column.to_string(), SetValue::Value(value.into())));
        self
    }

    /// Assign the database's current-timestamp function to a column.
    pub fn set_now(mut self, column: &str) -> Self {
        self.entries
            .push((column.to_string(), SetValue::CurrentTimestamp));
        self
    }

    /// Append a prebuilt assignment.
    pub fn push(&mut self, column: impl Into<String>, value: SetValue) {
        self.entries.push((column.into(), value));
    }

    /// Number of assignments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no assignments.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(column, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SetValue)> {
        self.entries.iter().map(|(c, v)| (c.as_str(), v))
    }

    /// Check every column name.
    pub(crate) fn validate(&self) -> LiteResult<()> {
        for (column, _) in &self.entries {
            Ident::parse(column)?;
        }
        Ok(())
    }
}

impl<C: Into<String>, V: Into<SetValue>> FromIterator<(C, V)> for Entity {
    fn from_iter<I: IntoIterator<Item = (C, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(c, v)| (c.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let entity = Entity::new().set("name", "john").set("age", 44);
        let cols: Vec<&str> = entity.iter().map(|(c, _)| c).collect();
        assert_eq!(cols, vec!["name", "age"]);
    }

    #[test]
    fn set_now_is_not_a_value() {
        let entity = Entity::new().set_now("updated_at");
        let (_, v) = entity.iter().next().unwrap();
        assert_eq!(*v, SetValue::CurrentTimestamp);
    }

    #[test]
    fn from_iterator() {
        let entity: Entity = [("a", 1i64), ("b", 2i64)].into_iter().collect();
        assert_eq!(entity.len(), 2);
    }
}
