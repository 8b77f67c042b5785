//! Error types for dependency resolution.

use std::fmt;

use thiserror::Error;

/// Result type alias using [`DependencyError`].
pub type Result<T> = std::result::Result<T, DependencyError>;

/// The tree a rejected value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantKind {
    /// A [`Field`](crate::field::Field) node.
    Field,
    /// A [`ColumnSet`](crate::columnset::ColumnSet) node.
    ColumnSet,
}

impl VariantKind {
    /// Returns the display name of this kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            VariantKind::Field => "Field",
            VariantKind::ColumnSet => "ColumnSet",
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error types for dependency resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DependencyError {
    /// The resolver met a variant it has no rule for.
    ///
    /// This is a programming error: a new field or column set kind was plugged
    /// in without teaching the resolvers about it.
    #[error("{kind} with unknown type: class {type_name}")]
    UnrecognizedVariant {
        kind: VariantKind,
        type_name: String,
    },
}

impl DependencyError {
    /// Creates a [`DependencyError::UnrecognizedVariant`] error.
    #[must_use]
    pub fn unrecognized(kind: VariantKind, type_name: impl Into<String>) -> Self {
        DependencyError::UnrecognizedVariant {
            kind,
            type_name: type_name.into(),
        }
    }
}
