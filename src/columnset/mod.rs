//! Column sets: derived groupings built on top of fields.

mod bucket;
mod period;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::types::short_type_name;

pub use bucket::BucketColumnSet;
pub use period::{Period, PeriodUnit};

/// A column set kind the dependency resolvers have no rule for.
pub trait ExtensionColumnSet: fmt::Debug + Send + Sync {
    /// Returns the concrete type name reported in errors.
    fn type_name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }
}

impl PartialEq for dyn ExtensionColumnSet {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(
            (self as *const dyn ExtensionColumnSet).cast::<u8>(),
            (other as *const dyn ExtensionColumnSet).cast::<u8>(),
        )
    }
}

/// Derived grouping of rows or columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ColumnSet {
    /// Values of one field partitioned into named buckets.
    Bucket(BucketColumnSet),
    /// Column set kind defined outside this crate.
    #[serde(skip)]
    Extension(Arc<dyn ExtensionColumnSet>),
}

impl ColumnSet {
    /// Wraps a column set kind defined outside this crate.
    #[must_use]
    pub fn extension(column_set: impl ExtensionColumnSet + 'static) -> Self {
        ColumnSet::Extension(Arc::new(column_set))
    }
}

impl From<BucketColumnSet> for ColumnSet {
    fn from(column_set: BucketColumnSet) -> Self {
        ColumnSet::Bucket(column_set)
    }
}
