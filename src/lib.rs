//! squashql-deps - dependency resolution for the query DSL.
//!
//! Fields, column sets and periods built by the query DSL are expression trees
//! over data source columns. Before a query is sent to the execution service,
//! the compiler asks this crate which base columns each of them reads:
//!
//! ```
//! use squashql_deps::{compute_field_dependencies, Field};
//!
//! let margin = (Field::table("sales.price") - Field::table("sales.cost")) * Field::constant(100);
//! let deps = compute_field_dependencies(&margin).unwrap();
//! let names: Vec<&str> = deps.iter().map(|f| f.full_name()).collect();
//! assert_eq!(names, ["sales.price", "sales.cost"]);
//! ```

pub mod columnset;
pub mod dependencies;
pub mod error;
pub mod field;
pub mod types;

pub use columnset::{BucketColumnSet, ColumnSet, ExtensionColumnSet, Period, PeriodUnit};
pub use dependencies::{
    collect_dependencies, compute_column_set_dependencies, compute_field_dependencies,
    compute_field_dependencies_into, compute_period_dependencies, Dependencies,
};
pub use error::{DependencyError, Result, VariantKind};
pub use field::{
    BinaryOperationField, BinaryOperator, ConstantField, ExtensionField, Field, TableField,
};
pub use types::Value;
