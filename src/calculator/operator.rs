//! Operator kinds understood by the calculator.
//!
//! Button labels and keyboard symbols are parsed into these enums at the
//! input boundary; the engine only ever sees the tagged variants.

use std::fmt;
use std::str::FromStr;

/// A binary operator that waits for a second operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOp {
    /// Symbol shown in the equation line and history.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
        }
    }

    /// Map a keyboard character to an operator (`*` and `/` included).
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            '^' => Some(Self::Power),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for BinaryOp {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_key(c).ok_or_else(|| UnknownOperator(s.to_string())),
            _ if s == "xʸ" => Ok(Self::Power),
            _ => Err(UnknownOperator(s.to_string())),
        }
    }
}

/// A single-operand function or a constant from the scientific panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScientificOp {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sqrt,
    Square,
    Cube,
    Log10,
    Ln,
    Reciprocal,
    Factorial,
    Pi,
    E,
}

impl ScientificOp {
    pub const ALL: [ScientificOp; 15] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Asin,
        Self::Acos,
        Self::Atan,
        Self::Sqrt,
        Self::Square,
        Self::Cube,
        Self::Log10,
        Self::Ln,
        Self::Reciprocal,
        Self::Factorial,
        Self::Pi,
        Self::E,
    ];

    /// Canonical name, used in history entries.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sqrt => "sqrt",
            Self::Square => "square",
            Self::Cube => "cube",
            Self::Log10 => "log10",
            Self::Ln => "ln",
            Self::Reciprocal => "reciprocal",
            Self::Factorial => "factorial",
            Self::Pi => "pi",
            Self::E => "e",
        }
    }

    /// Constants ignore the current display value.
    pub fn is_constant(self) -> bool {
        matches!(self, Self::Pi | Self::E)
    }

    /// Trig functions whose input is an angle.
    pub fn takes_angle(self) -> bool {
        matches!(self, Self::Sin | Self::Cos | Self::Tan)
    }

    /// Inverse trig functions whose output is an angle.
    pub fn yields_angle(self) -> bool {
        matches!(self, Self::Asin | Self::Acos | Self::Atan)
    }
}

impl fmt::Display for ScientificOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScientificOp {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        if let Some(op) = Self::ALL.iter().find(|op| op.name() == lower) {
            return Ok(*op);
        }

        // Button labels
        match lower.as_str() {
            "sin⁻¹" => Ok(Self::Asin),
            "cos⁻¹" => Ok(Self::Acos),
            "tan⁻¹" => Ok(Self::Atan),
            "√" => Ok(Self::Sqrt),
            "x²" => Ok(Self::Square),
            "x³" => Ok(Self::Cube),
            "log" => Ok(Self::Log10),
            "1/x" => Ok(Self::Reciprocal),
            "fact" | "n!" => Ok(Self::Factorial),
            "π" => Ok(Self::Pi),
            _ => Err(UnknownOperator(s.to_string())),
        }
    }
}

/// Operations on the single memory register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryOp {
    Clear,
    Recall,
    Add,
    Subtract,
}

impl MemoryOp {
    pub fn label(self) -> &'static str {
        match self {
            Self::Clear => "MC",
            Self::Recall => "MR",
            Self::Add => "M+",
            Self::Subtract => "M-",
        }
    }
}

impl FromStr for MemoryOp {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MC" => Ok(Self::Clear),
            "MR" => Ok(Self::Recall),
            "M+" => Ok(Self::Add),
            "M-" => Ok(Self::Subtract),
            _ => Err(UnknownOperator(s.to_string())),
        }
    }
}

/// Unit used by trigonometric functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    #[default]
    Radians,
    Degrees,
}

impl AngleMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Radians => Self::Degrees,
            Self::Degrees => Self::Radians,
        }
    }

    /// Short label shown on the toggle button.
    pub fn label(self) -> &'static str {
        match self {
            Self::Radians => "RAD",
            Self::Degrees => "DEG",
        }
    }
}

/// A label that does not name any known operator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operator: {0}")]
pub struct UnknownOperator(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_from_keys() {
        assert_eq!(BinaryOp::from_key('*'), Some(BinaryOp::Multiply));
        assert_eq!(BinaryOp::from_key('/'), Some(BinaryOp::Divide));
        assert_eq!("÷".parse::<BinaryOp>(), Ok(BinaryOp::Divide));
        assert_eq!("xʸ".parse::<BinaryOp>(), Ok(BinaryOp::Power));
        assert!("++".parse::<BinaryOp>().is_err());
        assert_eq!(BinaryOp::from_key('='), None);
    }

    #[test]
    fn test_scientific_names_round_trip() {
        for op in ScientificOp::ALL {
            assert_eq!(op.name().parse::<ScientificOp>(), Ok(op));
        }
    }

    #[test]
    fn test_scientific_aliases() {
        assert_eq!("log".parse::<ScientificOp>(), Ok(ScientificOp::Log10));
        assert_eq!("1/x".parse::<ScientificOp>(), Ok(ScientificOp::Reciprocal));
        assert_eq!("n!".parse::<ScientificOp>(), Ok(ScientificOp::Factorial));
        assert_eq!("√".parse::<ScientificOp>(), Ok(ScientificOp::Sqrt));
        assert_eq!("SIN".parse::<ScientificOp>(), Ok(ScientificOp::Sin));
        assert!("tanh".parse::<ScientificOp>().is_err());
    }

    #[test]
    fn test_memory_labels() {
        assert_eq!("m+".parse::<MemoryOp>(), Ok(MemoryOp::Add));
        assert_eq!(MemoryOp::Recall.label(), "MR");
        assert!("M*".parse::<MemoryOp>().is_err());
    }

    #[test]
    fn test_angle_toggle() {
        assert_eq!(AngleMode::default(), AngleMode::Radians);
        assert_eq!(AngleMode::Radians.toggled(), AngleMode::Degrees);
        assert_eq!(AngleMode::Degrees.label(), "DEG");
    }
}
