//! Scalar types shared by the field model.

mod value;

pub use value::Value;

/// Strips the module path and generic arguments from a Rust type name.
///
/// `my_crate::fields::Ratio<f64>` becomes `Ratio`.
pub(crate) fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name("UnknownField"), "UnknownField");
        assert_eq!(short_type_name("a::b::UnknownField"), "UnknownField");
        assert_eq!(short_type_name("a::Wrapper<b::Inner>"), "Wrapper");
    }
}
