//! Pure arithmetic behind the keypad
//!
//! Nothing here touches calculator state. The engine parses operands, calls
//! into this module, and decides what lands on the display.

use super::display::DisplayValue;
use super::errors::{CalcError, Result};
use super::keys::{Function, Operator};

/// `lhs op rhs` with IEEE semantics, except that dividing by zero is an error
pub fn apply_operator(lhs: f64, op: Operator, rhs: f64) -> Result<f64> {
    match op {
        Operator::Add => Ok(lhs + rhs),
        Operator::Subtract => Ok(lhs - rhs),
        Operator::Multiply => Ok(lhs * rhs),
        Operator::Divide => {
            if rhs == 0.0 {
                Err(CalcError::DivisionByZero)
            } else {
                Ok(lhs / rhs)
            }
        }
    }
}

/// `base ^ exponent`
pub fn power(base: f64, exponent: f64) -> Result<f64> {
    let result = base.powf(exponent);
    if result.is_nan() && !base.is_nan() && !exponent.is_nan() {
        // negative base with a fractional exponent
        return Err(CalcError::domain("x^y"));
    }
    if result.is_infinite() && base.is_finite() && exponent.is_finite() {
        // includes 0 ^ negative
        return Err(CalcError::overflow("x^y"));
    }
    Ok(result)
}

/// Apply an immediate scientific function to `x`.
///
/// The returned value already carries its formatting policy: `floor` and
/// `ceil` are integral, everything else is decimal. [`Function::Power`] has
/// no immediate result and is rejected here; the engine handles it as a
/// pending operation.
pub fn apply_function(function: Function, x: f64) -> Result<DisplayValue> {
    match function {
        Function::Sin => trig(x, f64::sin, "sin").map(DisplayValue::Decimal),
        Function::Cos => trig(x, f64::cos, "cos").map(DisplayValue::Decimal),
        Function::Sqrt => {
            if x < 0.0 {
                Err(CalcError::NegativeSquareRoot { operand: x })
            } else {
                Ok(DisplayValue::Decimal(x.sqrt()))
            }
        }
        Function::Percent => Ok(DisplayValue::Decimal(x / 100.0)),
        Function::Floor => integral(x, f64::floor, "floor"),
        Function::Ceil => integral(x, f64::ceil, "ceil"),
        Function::Power => Err(CalcError::domain("x^y without exponent")),
    }
}

fn trig(x: f64, f: fn(f64) -> f64, name: &str) -> Result<f64> {
    if x.is_infinite() {
        return Err(CalcError::domain(name));
    }
    Ok(f(x))
}

fn integral(x: f64, f: fn(f64) -> f64, name: &str) -> Result<DisplayValue> {
    if !x.is_finite() {
        return Err(CalcError::overflow(name));
    }
    Ok(DisplayValue::Integral(f(x)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operators() {
        assert_eq!(apply_operator(10.0, Operator::Add, 5.0).unwrap(), 15.0);
        assert_eq!(apply_operator(20.0, Operator::Subtract, 8.0).unwrap(), 12.0);
        assert_eq!(apply_operator(6.0, Operator::Multiply, 7.0).unwrap(), 42.0);
        assert_eq!(apply_operator(15.0, Operator::Divide, 3.0).unwrap(), 5.0);
        assert_eq!(apply_operator(1.0, Operator::Divide, 4.0).unwrap(), 0.25);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            apply_operator(10.0, Operator::Divide, 0.0),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            apply_operator(10.0, Operator::Divide, -0.0),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            apply_operator(0.0, Operator::Divide, 0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_power() {
        assert_eq!(power(2.0, 3.0).unwrap(), 8.0);
        assert_eq!(power(2.0, 10.0).unwrap(), 1024.0);
        assert_eq!(power(2.0, -1.0).unwrap(), 0.5);
        assert_eq!(power(0.0, 0.0).unwrap(), 1.0);
        assert!(matches!(power(-8.0, 1.0 / 3.0), Err(CalcError::Domain { .. })));
        assert!(matches!(power(0.0, -1.0), Err(CalcError::Overflow { .. })));
        assert!(matches!(power(10.0, 400.0), Err(CalcError::Overflow { .. })));
    }

    #[test]
    fn test_functions() {
        assert_eq!(
            apply_function(Function::Sin, 0.0).unwrap(),
            DisplayValue::Decimal(0.0)
        );
        assert_eq!(
            apply_function(Function::Cos, 0.0).unwrap(),
            DisplayValue::Decimal(1.0)
        );
        assert_eq!(
            apply_function(Function::Sqrt, 16.0).unwrap(),
            DisplayValue::Decimal(4.0)
        );
        assert_eq!(
            apply_function(Function::Percent, 50.0).unwrap(),
            DisplayValue::Decimal(0.5)
        );
        assert_eq!(
            apply_function(Function::Floor, 3.7).unwrap(),
            DisplayValue::Integral(3.0)
        );
        assert_eq!(
            apply_function(Function::Ceil, 3.2).unwrap(),
            DisplayValue::Integral(4.0)
        );
        assert_eq!(
            apply_function(Function::Floor, -3.2).unwrap(),
            DisplayValue::Integral(-4.0)
        );
    }

    #[test]
    fn test_function_errors() {
        assert_eq!(
            apply_function(Function::Sqrt, -4.0),
            Err(CalcError::NegativeSquareRoot { operand: -4.0 })
        );
        assert!(matches!(
            apply_function(Function::Sin, f64::INFINITY),
            Err(CalcError::Domain { .. })
        ));
        assert!(matches!(
            apply_function(Function::Floor, f64::NAN),
            Err(CalcError::Overflow { .. })
        ));
        assert!(apply_function(Function::Power, 2.0).is_err());
    }
}
