//! Arithmetic for the calculator engine.
//!
//! Pure functions over `f64`: applying binary and scientific operators,
//! parsing display text into operands, and formatting results for display.

use super::operator::{AngleMode, BinaryOp, ScientificOp};

/// Number of fractional digits kept in every result.
const RESULT_PRECISION: usize = 8;

/// Magnitude at which results switch to exponent notation.
const EXPONENT_THRESHOLD: f64 = 1e21;

/// A failed evaluation. The engine turns every variant into the error display.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("factorial is only defined for non-negative integers, got {0}")]
    InvalidFactorial(f64),
    #[error("result is not a finite number")]
    NonFinite,
    #[error("not a number: {0:?}")]
    InvalidNumber(String),
}

impl CalcError {
    /// Whether this is an arithmetic fault rather than a domain fault.
    pub fn is_arithmetic(&self) -> bool {
        matches!(self, Self::DivisionByZero)
    }
}

/// Parse the display text into an operand.
pub fn parse_operand(text: &str) -> Result<f64, CalcError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CalcError::InvalidNumber(text.to_string()))
}

/// Apply `lhs op rhs`.
pub fn apply_binary(op: BinaryOp, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
    let value = match op {
        BinaryOp::Add => lhs + rhs,
        BinaryOp::Subtract => lhs - rhs,
        BinaryOp::Multiply => lhs * rhs,
        BinaryOp::Divide => {
            if rhs == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            lhs / rhs
        }
        BinaryOp::Power => lhs.powf(rhs),
    };
    finite(value)
}

/// Apply a scientific function to `x`. Constants ignore `x`.
pub fn apply_scientific(op: ScientificOp, x: f64, angle: AngleMode) -> Result<f64, CalcError> {
    let input = if op.takes_angle() && angle == AngleMode::Degrees {
        x.to_radians()
    } else {
        x
    };

    let value = match op {
        ScientificOp::Sin => input.sin(),
        ScientificOp::Cos => input.cos(),
        ScientificOp::Tan => input.tan(),
        ScientificOp::Asin => input.asin(),
        ScientificOp::Acos => input.acos(),
        ScientificOp::Atan => input.atan(),
        ScientificOp::Sqrt => input.sqrt(),
        ScientificOp::Square => input.powi(2),
        ScientificOp::Cube => input.powi(3),
        ScientificOp::Log10 => input.log10(),
        ScientificOp::Ln => input.ln(),
        ScientificOp::Reciprocal => 1.0 / input,
        ScientificOp::Factorial => factorial(input)?,
        ScientificOp::Pi => std::f64::consts::PI,
        ScientificOp::E => std::f64::consts::E,
    };

    let value = if op.yields_angle() && angle == AngleMode::Degrees {
        value.to_degrees()
    } else {
        value
    };

    finite(value)
}

/// Factorial over floats; only non-negative integers are accepted.
pub fn factorial(n: f64) -> Result<f64, CalcError> {
    if n < 0.0 || n.fract() != 0.0 || !n.is_finite() {
        return Err(CalcError::InvalidFactorial(n));
    }

    let mut result = 1.0;
    let mut i = 2.0;
    while i <= n {
        result *= i;
        if result.is_infinite() {
            break;
        }
        i += 1.0;
    }
    Ok(result)
}

fn finite(value: f64) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NonFinite)
    }
}

/// Round to eight fractional digits and render the shortest form.
///
/// Trailing zeros and a trailing decimal point are dropped, negative zero
/// renders as `0`, and very large magnitudes use `1e+21` style notation.
pub fn format_result(value: f64) -> String {
    let rounded: f64 = format!("{:.*}", RESULT_PRECISION, value)
        .parse()
        .unwrap_or(value);
    format_number(rounded)
}

/// Render a number in its shortest decimal form without rounding.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    if value.abs() >= EXPONENT_THRESHOLD {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        };
    }

    format!("{}", value)
}
