//! Arithmetic combinations of fields.

use serde::{Deserialize, Serialize};

use super::Field;

/// Arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl BinaryOperator {
    /// Returns the string representation of this operator.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
        }
    }
}

/// Two fields combined with an arithmetic operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryOperationField {
    pub operator: BinaryOperator,
    pub left: Box<Field>,
    pub right: Box<Field>,
}

impl BinaryOperationField {
    /// Creates a binary operation field.
    #[must_use]
    pub fn new(operator: BinaryOperator, left: impl Into<Field>, right: impl Into<Field>) -> Self {
        BinaryOperationField {
            operator,
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        }
    }
}
