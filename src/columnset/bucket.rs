//! Bucketing column set.

use serde::{Deserialize, Serialize};

use crate::field::{Field, TableField};

/// Partitions the values of a source field into named buckets.
///
/// The query produces a new column, `created_field`, holding the name of the
/// bucket each row falls into. Only `field` is read from the data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketColumnSet {
    created_field: TableField,
    field: Field,
    values: Vec<(String, Vec<String>)>,
}

impl BucketColumnSet {
    /// Creates a bucket column set with no buckets.
    #[must_use]
    pub fn new(created_field: TableField, field: impl Into<Field>) -> Self {
        BucketColumnSet {
            created_field,
            field: field.into(),
            values: Vec::new(),
        }
    }

    /// Adds a bucket and the values it groups.
    ///
    /// Buckets keep insertion order. Adding a name twice replaces the values of
    /// the earlier bucket in place.
    #[must_use]
    pub fn with_bucket(mut self, name: impl Into<String>, values: Vec<String>) -> Self {
        let name = name.into();
        if let Some(index) = self.values.iter().position(|(existing, _)| *existing == name) {
            self.values[index].1 = values;
        } else {
            self.values.push((name, values));
        }
        self
    }

    /// Returns the synthesized output column.
    #[must_use]
    pub fn created_field(&self) -> &TableField {
        &self.created_field
    }

    /// Returns the field whose values are partitioned.
    #[must_use]
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Returns the buckets in insertion order.
    #[must_use]
    pub fn buckets(&self) -> &[(String, Vec<String>)] {
        &self.values
    }

    /// Returns the values grouped under a bucket name.
    #[must_use]
    pub fn bucket(&self, name: &str) -> Option<&[String]> {
        self.values
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, values)| values.as_slice())
    }
}
