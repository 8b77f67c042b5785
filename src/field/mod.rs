//! Field expression trees.
//!
//! A [`Field`] describes how to compute a single scalar value from the data
//! source. Leaves are column references ([`TableField`]) or literals
//! ([`ConstantField`]); interior nodes combine two fields arithmetically
//! ([`BinaryOperationField`]). Trees are built bottom-up and never mutated
//! afterwards, so they are always finite and acyclic.

mod extension;
mod operation;
mod table_field;

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::types::Value;

pub use extension::ExtensionField;
pub use operation::{BinaryOperationField, BinaryOperator};
pub use table_field::TableField;

/// Literal value that does not depend on the data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantField {
    pub value: Value,
}

impl ConstantField {
    /// Creates a constant field.
    #[must_use]
    pub fn new(value: impl Into<Value>) -> Self {
        ConstantField {
            value: value.into(),
        }
    }
}

/// Node of a field expression tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Field {
    /// Column of the data source, or the wildcard.
    Table(TableField),
    /// Literal constant.
    Constant(ConstantField),
    /// Arithmetic combination of two fields.
    BinaryOperation(BinaryOperationField),
    /// Field kind defined outside this crate.
    #[serde(skip)]
    Extension(Arc<dyn ExtensionField>),
}

impl Field {
    /// Creates a table field.
    #[must_use]
    pub fn table(full_name: impl Into<String>) -> Self {
        Field::Table(TableField::new(full_name))
    }

    /// Creates a constant field.
    #[must_use]
    pub fn constant(value: impl Into<Value>) -> Self {
        Field::Constant(ConstantField::new(value))
    }

    /// Creates a binary operation field.
    #[must_use]
    pub fn binary(operator: BinaryOperator, left: impl Into<Field>, right: impl Into<Field>) -> Self {
        Field::BinaryOperation(BinaryOperationField::new(operator, left, right))
    }

    /// Wraps a field kind defined outside this crate.
    #[must_use]
    pub fn extension(field: impl ExtensionField + 'static) -> Self {
        Field::Extension(Arc::new(field))
    }

    /// Returns `self + other`.
    #[must_use]
    pub fn plus(self, other: impl Into<Field>) -> Self {
        Field::binary(BinaryOperator::Plus, self, other)
    }

    /// Returns `self - other`.
    #[must_use]
    pub fn minus(self, other: impl Into<Field>) -> Self {
        Field::binary(BinaryOperator::Minus, self, other)
    }

    /// Returns `self * other`.
    #[must_use]
    pub fn multiply(self, other: impl Into<Field>) -> Self {
        Field::binary(BinaryOperator::Multiply, self, other)
    }

    /// Returns `self / other`.
    #[must_use]
    pub fn divide(self, other: impl Into<Field>) -> Self {
        Field::binary(BinaryOperator::Divide, self, other)
    }

    /// Returns the table field if this is a column reference.
    #[must_use]
    pub fn as_table_field(&self) -> Option<&TableField> {
        match self {
            Field::Table(field) => Some(field),
            _ => None,
        }
    }
}

impl From<TableField> for Field {
    fn from(field: TableField) -> Self {
        Field::Table(field)
    }
}

impl From<ConstantField> for Field {
    fn from(field: ConstantField) -> Self {
        Field::Constant(field)
    }
}

impl From<BinaryOperationField> for Field {
    fn from(field: BinaryOperationField) -> Self {
        Field::BinaryOperation(field)
    }
}

impl<T: Into<Field>> Add<T> for Field {
    type Output = Field;

    fn add(self, rhs: T) -> Field {
        self.plus(rhs)
    }
}

impl<T: Into<Field>> Sub<T> for Field {
    type Output = Field;

    fn sub(self, rhs: T) -> Field {
        self.minus(rhs)
    }
}

impl<T: Into<Field>> Mul<T> for Field {
    type Output = Field;

    fn mul(self, rhs: T) -> Field {
        self.multiply(rhs)
    }
}

impl<T: Into<Field>> Div<T> for Field {
    type Output = Field;

    fn div(self, rhs: T) -> Field {
        self.divide(rhs)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Table(field) => write!(f, "{field}"),
            Field::Constant(field) => write!(f, "{}", field.value),
            Field::BinaryOperation(op) => {
                write!(f, "({} {} {})", op.left, op.operator.as_str(), op.right)
            }
            Field::Extension(field) => write!(f, "<{}>", field.type_name()),
        }
    }
}
