//! Field dependency resolution.

use tracing::{trace, warn};

use crate::error::{DependencyError, Result, VariantKind};
use crate::field::{Field, TableField};

/// Returns the table fields `field` reads, in pre-order.
///
/// Constants and the wildcard contribute nothing. The same column reached
/// through several paths appears once per path.
///
/// # Errors
///
/// Returns [`DependencyError::UnrecognizedVariant`] if the tree contains a
/// [`Field::Extension`].
pub fn compute_field_dependencies(field: &Field) -> Result<Vec<&TableField>> {
    let mut dependencies = Vec::new();
    compute_field_dependencies_into(field, &mut dependencies)?;
    Ok(dependencies)
}

/// Appends the table fields `field` reads to `dependencies`.
///
/// Existing entries are left in place and the new ones are appended after
/// them, so several fields can share one accumulator. The accumulator is
/// mutated in place and handed back for chaining.
///
/// # Errors
///
/// Returns [`DependencyError::UnrecognizedVariant`] if the tree contains a
/// [`Field::Extension`]. Entries appended before the extension was reached are
/// left in `dependencies`.
pub fn compute_field_dependencies_into<'f, 'a>(
    field: &'f Field,
    dependencies: &'a mut Vec<&'f TableField>,
) -> Result<&'a mut Vec<&'f TableField>> {
    collect_field_dependencies(field, dependencies)?;
    Ok(dependencies)
}

/// Recursively collects table field references from a field.
fn collect_field_dependencies<'f>(
    field: &'f Field,
    dependencies: &mut Vec<&'f TableField>,
) -> Result<()> {
    match field {
        Field::Table(table_field) => {
            if !table_field.is_wildcard() {
                trace!(field = %table_field, "collected table field dependency");
                dependencies.push(table_field);
            }
        }
        Field::Constant(_) => {
            // Constants don't read from the data source
        }
        Field::BinaryOperation(operation) => {
            collect_field_dependencies(&operation.left, dependencies)?;
            collect_field_dependencies(&operation.right, dependencies)?;
        }
        Field::Extension(extension) => {
            let type_name = extension.type_name();
            warn!(type_name = type_name, "no dependency rule for field");
            return Err(DependencyError::unrecognized(VariantKind::Field, type_name));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::ExtensionField;

    #[derive(Debug)]
    struct UnknownField;

    impl ExtensionField for UnknownField {}

    #[test]
    fn test_table_field() {
        let field = Field::table("tableName.fieldName");
        let deps = compute_field_dependencies(&field).unwrap();
        assert_eq!(deps, vec![&TableField::new("tableName.fieldName")]);
        assert!(std::ptr::eq(deps[0], field.as_table_field().unwrap()));
    }

    #[test]
    fn test_constant_field_has_no_dependencies() {
        let field = Field::constant(5);
        let deps = compute_field_dependencies(&field).unwrap();
        assert!(deps.is_empty());
    }

    #[test]
    fn test_wildcard_has_no_dependencies() {
        let field = Field::table("*");
        let deps = compute_field_dependencies(&field).unwrap();
        assert!(deps.is_empty());
    }

    #[test]
    fn test_nested_binary_operations_in_pre_order() {
        let field = Field::table("t1.a")
            .plus(Field::table("t2.b"))
            .minus(Field::table("t3.c"));
        let deps = compute_field_dependencies(&field).unwrap();
        let names: Vec<&str> = deps.iter().map(|f| f.full_name()).collect();
        assert_eq!(names, vec!["t1.a", "t2.b", "t3.c"]);
    }

    #[test]
    fn test_wildcard_operand_is_skipped() {
        let field = Field::table("*").multiply(Field::table("t.qty"));
        let deps = compute_field_dependencies(&field).unwrap();
        assert_eq!(deps, vec![&TableField::new("t.qty")]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let field = Field::table("t.a").plus(Field::table("t.a"));
        let deps = compute_field_dependencies(&field).unwrap();
        assert_eq!(deps.len(), 2);
    }

    #[test]
    fn test_into_appends_and_returns_same_accumulator() {
        let first = Field::table("t.a");
        let second = Field::table("t.b").divide(Field::constant(2));
        let mut acc = compute_field_dependencies(&first).unwrap();
        let acc_ptr: *const Vec<&TableField> = &acc;

        let returned = compute_field_dependencies_into(&second, &mut acc).unwrap();
        assert!(std::ptr::eq(returned, acc_ptr));

        let names: Vec<&str> = acc.iter().map(|f| f.full_name()).collect();
        assert_eq!(names, vec!["t.a", "t.b"]);
    }

    #[test]
    fn test_unknown_field_type() {
        let field = Field::extension(UnknownField);
        let err = compute_field_dependencies(&field).unwrap_err();
        assert_eq!(err.to_string(), "Field with unknown type: class UnknownField");
    }

    #[test]
    fn test_unknown_operand_fails_whole_tree() {
        let field = Field::table("t.a").plus(Field::extension(UnknownField));
        let mut acc = Vec::new();
        let err = compute_field_dependencies_into(&field, &mut acc).unwrap_err();
        assert_eq!(
            err,
            DependencyError::unrecognized(VariantKind::Field, "UnknownField")
        );
    }
}
