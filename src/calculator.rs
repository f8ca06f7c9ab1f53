// Arithmetic module: the five integer operations offered by the menu.
// Everything here is pure; the interaction loop in `ui` owns all I/O.

use std::fmt;
use thiserror::Error;

/// Operations selectable from the menu, in menu order (1..=5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
}

/// Failure of a single computation. Only division and remainder can fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("{}", zero_divisor_message(.0))]
    DivisionByZero(Operation),
}

fn zero_divisor_message(op: &Operation) -> &'static str {
    match op {
        Operation::Remainder => "Modulo by zero is not allowed",
        _ => "Division by zero is not allowed",
    }
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Remainder,
    ];

    /// Number shown next to this operation in the menu.
    pub fn menu_number(self) -> i64 {
        match self {
            Operation::Add => 1,
            Operation::Subtract => 2,
            Operation::Multiply => 3,
            Operation::Divide => 4,
            Operation::Remainder => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
            Operation::Divide => "Division",
            Operation::Remainder => "Remainder",
        }
    }

    /// Run the operation on `a` and `b`.
    pub fn apply(self, a: i64, b: i64) -> Result<i64, ArithmeticError> {
        match self {
            Operation::Add => Ok(add(a, b)),
            Operation::Subtract => Ok(sub(a, b)),
            Operation::Multiply => Ok(multiply(a, b)),
            Operation::Divide => divide(a, b),
            Operation::Remainder => remainder(a, b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Results outside the i64 range wrap around instead of panicking, so the
// non-dividing operations are total.

pub fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

pub fn sub(a: i64, b: i64) -> i64 {
    a.wrapping_sub(b)
}

pub fn multiply(a: i64, b: i64) -> i64 {
    a.wrapping_mul(b)
}

/// Truncating division (rounds toward zero). `i64::MIN / -1` wraps to
/// `i64::MIN`.
pub fn divide(a: i64, b: i64) -> Result<i64, ArithmeticError> {
    if b == 0 {
        return Err(ArithmeticError::DivisionByZero(Operation::Divide));
    }
    Ok(a.wrapping_div(b))
}

/// Remainder of truncating division; the sign follows the dividend.
pub fn remainder(a: i64, b: i64) -> Result<i64, ArithmeticError> {
    if b == 0 {
        return Err(ArithmeticError::DivisionByZero(Operation::Remainder));
    }
    Ok(a.wrapping_rem(b))
}
