//! WHERE-clause filters.

use crate::error::{LiteError, LiteResult};
use crate::ident::Ident;
use crate::stmt::param::ParamList;
use crate::value::Value;

/// One condition applied to a column.
///
/// `Eq` binds its value as a positional parameter; `IsNull` renders the
/// unbound `IS NULL` predicate. Modeling the null check as its own variant
/// keeps `Value::Null` out of the condition path entirely — binding NULL to an
/// equality would silently match nothing.
#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
    /// `column = ?N`
    Eq(Value),
    /// `column IS NULL`
    IsNull,
}

/// An ordered set of column filters.
///
/// Insertion order is the contract: it determines both clause order and
/// placeholder numbering, so the backing store is a list of pairs rather than
/// a map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterSet {
    entries: Vec<(String, Filter)>,
}

impl FilterSet {
    /// Create an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an equality filter: `column = value`.
    pub fn eq(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.entries.push((column.to_string(), Filter::Eq(value.into())));
        self
    }

    /// Add a null check: `column IS NULL`.
    pub fn is_null(mut self, column: &str) -> Self {
        self.entries.push((column.to_string(), Filter::IsNull));
        self
    }

    /// Append a prebuilt filter.
    pub fn push(&mut self, column: impl Into<String>, filter: Filter) {
        self.entries.push((column.into(), filter));
    }

    /// Number of filters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no filters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(column, filter)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Filter)> {
        self.entries.iter().map(|(c, f)| (c.as_str(), f))
    }

    /// Whether any filter is a null check.
    pub fn has_null_checks(&self) -> bool {
        self.entries.iter().any(|(_, f)| matches!(f, Filter::IsNull))
    }

    /// Check every column name.
    pub(crate) fn validate(&self) -> LiteResult<()> {
        for (column, _) in &self.entries {
            Ident::parse(column)?;
        }
        Ok(())
    }

    /// Check column names and reject null checks (equality-only contexts).
    pub(crate) fn validate_eq_only(&self, context: &str) -> LiteResult<()> {
        self.validate()?;
        if self.has_null_checks() {
            return Err(LiteError::invalid_argument(format!(
                "{context} conditions are equality-only, IS NULL is not supported here"
            )));
        }
        Ok(())
    }

    /// Render the filters joined with ` AND `, pushing bound values onto
    /// `params` in insertion order.
    ///
    /// Returns an empty string for an empty set. Every WHERE clause in the
    /// crate goes through this one helper, so no combination of equality and
    /// null filters can produce a stray leading `AND`.
    pub(crate) fn render(&self, params: &mut ParamList) -> String {
        let clauses: Vec<String> = self
            .entries
            .iter()
            .map(|(column, filter)| match filter {
                Filter::Eq(value) => {
                    format!("{column} = {}", params.placeholder(value.clone()))
                }
                Filter::IsNull => format!("{column} IS NULL"),
            })
            .collect();
        clauses.join(" AND ")
    }
}

impl<C: Into<String>> FromIterator<(C, Filter)> for FilterSet {
    fn from_iter<I: IntoIterator<Item = (C, Filter)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(c, f)| (c.into(), f)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_equality_only() {
        let mut params = ParamList::new();
        let sql = FilterSet::new().eq("id", 5).eq("name", "john").render(&mut params);
        assert_eq!(sql, "id = ?1 AND name = ?2");
        assert_eq!(
            params.into_values(),
            vec![Value::Integer(5), Value::Text("john".into())]
        );
    }

    #[test]
    fn render_null_only_has_no_stray_and() {
        let mut params = ParamList::new();
        let sql = FilterSet::new().is_null("deleted_at").render(&mut params);
        assert_eq!(sql, "deleted_at IS NULL");
        assert!(params.is_empty());
    }

    #[test]
    fn render_mixed_preserves_insertion_order() {
        let mut params = ParamList::new();
        let sql = FilterSet::new()
            .is_null("deleted_at")
            .eq("id", 5)
            .is_null("parent_id")
            .render(&mut params);
        assert_eq!(sql, "deleted_at IS NULL AND id = ?1 AND parent_id IS NULL");
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn render_empty_is_empty() {
        let mut params = ParamList::new();
        assert_eq!(FilterSet::new().render(&mut params), "");
    }

    #[test]
    fn eq_only_validation() {
        let filters = FilterSet::new().eq("id", 1).is_null("deleted_at");
        let err = filters.validate_eq_only("update").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(FilterSet::new().eq("id", 1).validate_eq_only("update").is_ok());
    }
}
