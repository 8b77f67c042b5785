//! Leaf references to data source columns.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reference to a column of the data source, by qualified name.
///
/// The reference is usually `"table.column"`, but an unqualified column name is
/// accepted too. The special reference [`TableField::WILDCARD`] stands for "all
/// columns" and does not name any column in particular.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableField {
    full_name: String,
}

impl TableField {
    /// Reference meaning "no specific column".
    pub const WILDCARD: &'static str = "*";

    /// Creates a table field from its qualified reference.
    #[must_use]
    pub fn new(full_name: impl Into<String>) -> Self {
        TableField {
            full_name: full_name.into(),
        }
    }

    /// Creates the wildcard table field.
    #[must_use]
    pub fn wildcard() -> Self {
        TableField::new(Self::WILDCARD)
    }

    /// Returns the full reference, e.g. `"orders.amount"`.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns the table part of the reference, if it is qualified.
    #[must_use]
    pub fn table_name(&self) -> Option<&str> {
        self.full_name.split_once('.').map(|(table, _)| table)
    }

    /// Returns the column part of the reference.
    ///
    /// For an unqualified reference this is the whole reference.
    #[must_use]
    pub fn field_name(&self) -> &str {
        self.full_name
            .split_once('.')
            .map_or(self.full_name.as_str(), |(_, field)| field)
    }

    /// Returns true if this is the wildcard reference.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.full_name == Self::WILDCARD
    }
}

impl fmt::Display for TableField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_name_parts() {
        let field = TableField::new("orders.amount");
        assert_eq!(field.full_name(), "orders.amount");
        assert_eq!(field.table_name(), Some("orders"));
        assert_eq!(field.field_name(), "amount");
        assert!(!field.is_wildcard());
    }

    #[test]
    fn test_unqualified_name() {
        let field = TableField::new("amount");
        assert_eq!(field.table_name(), None);
        assert_eq!(field.field_name(), "amount");
    }

    #[test]
    fn test_wildcard() {
        assert!(TableField::wildcard().is_wildcard());
        assert!(TableField::new("*").is_wildcard());
        assert!(!TableField::new("orders.*").is_wildcard());
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(TableField::new("t.a"), TableField::new("t.a"));
        assert_ne!(TableField::new("t.a"), TableField::new("t.b"));
    }
}
