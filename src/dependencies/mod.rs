//! Dependency resolution.
//!
//! Given a field, a column set or a period, the resolvers list the base
//! [`TableField`]s that must be fetched from the data source to evaluate it.
//! They walk the tree in pre-order and append every non-wildcard column
//! reference they meet. Results are borrowed from the input and are not
//! deduplicated; callers that need a set deduplicate by
//! [`TableField::full_name`].

mod column_set;
mod field;

pub use column_set::{compute_column_set_dependencies, compute_period_dependencies};
pub use field::{compute_field_dependencies, compute_field_dependencies_into};

use crate::columnset::{ColumnSet, Period};
use crate::error::Result;
use crate::field::{Field, TableField};

/// A value whose base columns can be resolved.
pub trait Dependencies {
    /// Returns the table fields this value reads.
    ///
    /// # Errors
    ///
    /// Returns [`DependencyError::UnrecognizedVariant`](crate::DependencyError::UnrecognizedVariant)
    /// when the value contains a variant the resolvers cannot walk.
    fn dependencies(&self) -> Result<Vec<&TableField>>;

    /// Appends the table fields this value reads to `dependencies`.
    ///
    /// # Errors
    ///
    /// Same as [`Dependencies::dependencies`].
    fn dependencies_into<'f>(&'f self, dependencies: &mut Vec<&'f TableField>) -> Result<()> {
        dependencies.extend(self.dependencies()?);
        Ok(())
    }
}

impl Dependencies for Field {
    fn dependencies(&self) -> Result<Vec<&TableField>> {
        compute_field_dependencies(self)
    }

    fn dependencies_into<'f>(&'f self, dependencies: &mut Vec<&'f TableField>) -> Result<()> {
        compute_field_dependencies_into(self, dependencies)?;
        Ok(())
    }
}

impl Dependencies for ColumnSet {
    fn dependencies(&self) -> Result<Vec<&TableField>> {
        compute_column_set_dependencies(self)
    }
}

impl Dependencies for Period {
    fn dependencies(&self) -> Result<Vec<&TableField>> {
        compute_period_dependencies(self)
    }
}

/// Resolves several values into one collection, in input order.
///
/// # Errors
///
/// Stops at the first value that fails to resolve.
pub fn collect_dependencies<'f, T>(
    items: impl IntoIterator<Item = &'f T>,
) -> Result<Vec<&'f TableField>>
where
    T: Dependencies + ?Sized + 'f,
{
    let mut dependencies = Vec::new();
    for item in items {
        item.dependencies_into(&mut dependencies)?;
    }
    Ok(dependencies)
}
