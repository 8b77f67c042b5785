//! Column set and period dependency resolution.

use tracing::{debug, warn};

use super::field::compute_field_dependencies_into;
use crate::columnset::{ColumnSet, Period};
use crate::error::{DependencyError, Result, VariantKind};
use crate::field::TableField;

/// Returns the table fields a column set reads.
///
/// A bucket column set reads its source field only; the created field and the
/// bucket values are not data source columns. Each call returns a new
/// collection.
///
/// # Errors
///
/// Returns [`DependencyError::UnrecognizedVariant`] for a
/// [`ColumnSet::Extension`], or when the source field cannot be resolved.
pub fn compute_column_set_dependencies(column_set: &ColumnSet) -> Result<Vec<&TableField>> {
    match column_set {
        ColumnSet::Bucket(bucket) => {
            let mut dependencies = Vec::new();
            compute_field_dependencies_into(bucket.field(), &mut dependencies)?;
            debug!(
                created_field = %bucket.created_field(),
                dependencies = dependencies.len(),
                "resolved bucket column set dependencies"
            );
            Ok(dependencies)
        }
        ColumnSet::Extension(extension) => {
            let type_name = extension.type_name();
            warn!(type_name = type_name, "no dependency rule for column set");
            Err(DependencyError::unrecognized(VariantKind::ColumnSet, type_name))
        }
    }
}

/// Returns the table fields a period reads.
///
/// Fields are resolved in [`Period::mapping`] order: the finest unit first,
/// then the year.
///
/// # Errors
///
/// Propagates errors from resolving the period's fields.
pub fn compute_period_dependencies(period: &Period) -> Result<Vec<&TableField>> {
    let mut dependencies = Vec::new();
    for (field, _) in period.mapping() {
        compute_field_dependencies_into(field, &mut dependencies)?;
    }
    debug!(
        units = period.units().len(),
        dependencies = dependencies.len(),
        "resolved period dependencies"
    );
    Ok(dependencies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columnset::{BucketColumnSet, ExtensionColumnSet};
    use crate::field::Field;

    #[derive(Debug)]
    struct UnknownBucketColumnSet;

    impl ExtensionColumnSet for UnknownBucketColumnSet {}

    #[test]
    fn test_bucket_column_set_reads_source_field() {
        let column_set: ColumnSet = BucketColumnSet::new(
            TableField::new("mockTable.createdField"),
            Field::table("mockTable.mockField"),
        )
        .with_bucket("low", vec!["0".into(), "10".into()])
        .into();
        let deps = compute_column_set_dependencies(&column_set).unwrap();
        assert_eq!(deps, vec![&TableField::new("mockTable.mockField")]);
    }

    #[test]
    fn test_bucket_over_computed_field() {
        let source = Field::table("t.price").multiply(Field::table("t.qty"));
        let column_set =
            ColumnSet::Bucket(BucketColumnSet::new(TableField::new("revenue_band"), source));
        let deps = compute_column_set_dependencies(&column_set).unwrap();
        let names: Vec<&str> = deps.iter().map(|f| f.full_name()).collect();
        assert_eq!(names, vec!["t.price", "t.qty"]);
    }

    #[test]
    fn test_unknown_column_set_type() {
        let column_set = ColumnSet::extension(UnknownBucketColumnSet);
        let err = compute_column_set_dependencies(&column_set).unwrap_err();
        assert_eq!(
            err.to_string(),
            "ColumnSet with unknown type: class UnknownBucketColumnSet"
        );
    }

    #[test]
    fn test_bucket_with_unknown_source_field() {
        #[derive(Debug)]
        struct UnknownField;
        impl crate::field::ExtensionField for UnknownField {}

        let column_set: ColumnSet =
            BucketColumnSet::new(TableField::new("group"), Field::extension(UnknownField)).into();
        let err = compute_column_set_dependencies(&column_set).unwrap_err();
        assert_eq!(err.to_string(), "Field with unknown type: class UnknownField");
    }

    #[test]
    fn test_period_dependencies() {
        let period = Period::quarter(Field::table("sales.quarter"), Field::table("sales.year"));
        let deps = compute_period_dependencies(&period).unwrap();
        let names: Vec<&str> = deps.iter().map(|f| f.full_name()).collect();
        assert_eq!(names, vec!["sales.quarter", "sales.year"]);
    }

    #[test]
    fn test_period_with_constant_year() {
        let period = Period::month(Field::table("sales.month"), Field::constant(2023));
        let deps = compute_period_dependencies(&period).unwrap();
        assert_eq!(deps, vec![&TableField::new("sales.month")]);
    }
}
