//! Field kinds defined outside this crate.

use std::fmt;

use crate::types::short_type_name;

/// A field kind the dependency resolvers have no rule for.
///
/// Implementors are carried in [`Field::Extension`](super::Field::Extension).
/// Resolving such a field fails with
/// [`DependencyError::UnrecognizedVariant`](crate::DependencyError::UnrecognizedVariant)
/// naming [`ExtensionField::type_name`].
pub trait ExtensionField: fmt::Debug + Send + Sync {
    /// Returns the concrete type name reported in errors.
    ///
    /// Defaults to the implementing type's name without its module path.
    fn type_name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }
}

// Extension fields have no structure to compare, so equality is identity.
impl PartialEq for dyn ExtensionField {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(
            (self as *const dyn ExtensionField).cast::<u8>(),
            (other as *const dyn ExtensionField).cast::<u8>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[derive(Debug)]
    struct RatioField;

    impl ExtensionField for RatioField {}

    #[test]
    fn test_default_type_name() {
        assert_eq!(RatioField.type_name(), "RatioField");
    }

    #[test]
    fn test_identity_equality() {
        let a: Arc<dyn ExtensionField> = Arc::new(RatioField);
        let b: Arc<dyn ExtensionField> = Arc::new(RatioField);
        assert!(*a == *a.clone());
        assert!(*a != *b);
    }
}
