//! Calculator engine state machine.
//!
//! The engine accumulates a left-to-right calculation with at most one
//! pending binary operator. Pressing an operator while another one is
//! pending and a second operand has been typed evaluates the pending
//! expression first; there is no operator precedence.

use tracing::debug;

use super::evaluation::{
    CalcError, apply_binary, apply_scientific, format_number, format_result, parse_operand,
};
use super::operator::{AngleMode, BinaryOp, MemoryOp, ScientificOp};

/// Text shown while the engine is in the error state.
pub const ERROR_DISPLAY: &str = "Error";

/// Where the engine is in the current calculation.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// No operator waiting for a second operand.
    Idle,
    /// An operator was chosen; `operand` is the display captured at that time.
    OperatorPending { operator: BinaryOp, operand: String },
    /// The last evaluation failed. Only a clear or a fresh digit leaves it.
    Error,
}

/// A completed calculation, ready to be recorded in history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculation {
    pub equation: String,
    pub result: String,
}

/// Result of feeding one event to the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The event was ignored.
    Unchanged,
    /// State changed without completing a calculation.
    Changed,
    /// A calculation completed successfully.
    Completed(Calculation),
    /// Evaluation failed and the engine is now in the error state.
    Faulted(CalcError),
}

impl Outcome {
    /// The completed calculation, if any.
    pub fn calculation(&self) -> Option<&Calculation> {
        match self {
            Self::Completed(calc) => Some(calc),
            _ => None,
        }
    }
}

/// The calculator's input and evaluation state.
#[derive(Debug, Clone)]
pub struct Calculator {
    display: String,
    phase: Phase,
    is_new_number: bool,
    angle_mode: AngleMode,
    memory: f64,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_angle_mode(AngleMode::default())
    }

    pub fn with_angle_mode(angle_mode: AngleMode) -> Self {
        Self {
            display: "0".to_string(),
            phase: Phase::Idle,
            is_new_number: true,
            angle_mode,
            memory: 0.0,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn has_error(&self) -> bool {
        self.phase == Phase::Error
    }

    pub fn is_new_number(&self) -> bool {
        self.is_new_number
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    /// The pending operator and its captured operand.
    pub fn pending(&self) -> Option<(BinaryOp, &str)> {
        match &self.phase {
            Phase::OperatorPending { operator, operand } => Some((*operator, operand)),
            _ => None,
        }
    }

    /// Line shown above the display while an operator is pending.
    pub fn equation(&self) -> String {
        self.pending()
            .map(|(operator, operand)| format!("{} {}", operand, operator))
            .unwrap_or_default()
    }

    /// Type a digit (0-9). Values above 9 are ignored.
    pub fn input_digit(&mut self, digit: u8) -> Outcome {
        let Some(c) = char::from_digit(u32::from(digit), 10) else {
            return Outcome::Unchanged;
        };

        if self.has_error() {
            self.display = c.to_string();
            self.phase = Phase::Idle;
        } else if self.is_new_number || self.display == "0" {
            self.display = c.to_string();
        } else {
            self.display.push(c);
        }

        self.is_new_number = false;
        Outcome::Changed
    }

    pub fn input_decimal(&mut self) -> Outcome {
        if self.has_error() {
            return Outcome::Unchanged;
        }

        if self.is_new_number {
            self.display = "0.".to_string();
            self.is_new_number = false;
        } else if self.display.contains('.') {
            return Outcome::Unchanged;
        } else {
            self.display.push('.');
        }

        Outcome::Changed
    }

    /// Choose a binary operator.
    ///
    /// If an operator is already pending and a second operand has been
    /// typed, that expression is evaluated first and its result becomes the
    /// new operand. The returned outcome carries that intermediate
    /// calculation.
    pub fn input_operator(&mut self, operator: BinaryOp) -> Outcome {
        if self.has_error() {
            return Outcome::Unchanged;
        }

        let mut outcome = Outcome::Changed;
        if self.pending().is_some() && !self.is_new_number {
            outcome = self.evaluate();
            if self.has_error() {
                return outcome;
            }
        }

        self.phase = Phase::OperatorPending {
            operator,
            operand: self.display.clone(),
        };
        self.is_new_number = true;

        match outcome {
            Outcome::Completed(_) => outcome,
            _ => Outcome::Changed,
        }
    }

    /// Apply the pending operator to the captured operand and the display.
    pub fn evaluate(&mut self) -> Outcome {
        let Some((operator, operand)) = self.pending().map(|(op, lhs)| (op, lhs.to_string()))
        else {
            return Outcome::Unchanged;
        };

        let value = parse_operand(&operand).and_then(|lhs| {
            let rhs = parse_operand(&self.display)?;
            apply_binary(operator, lhs, rhs)
        });

        match value {
            Ok(value) => {
                let result = format_result(value);
                let calculation = Calculation {
                    equation: format!("{} {} {}", operand, operator, self.display),
                    result: result.clone(),
                };
                self.display = result;
                self.phase = Phase::Idle;
                self.is_new_number = true;
                Outcome::Completed(calculation)
            }
            Err(err) => self.fault(err),
        }
    }

    /// Reset everything except memory and angle mode.
    pub fn clear_all(&mut self) -> Outcome {
        self.display = "0".to_string();
        self.phase = Phase::Idle;
        self.is_new_number = true;
        Outcome::Changed
    }

    /// Remove the last typed character.
    pub fn delete_last_char(&mut self) -> Outcome {
        if self.has_error() || self.is_new_number {
            return Outcome::Unchanged;
        }

        self.display.pop();
        if self.display.is_empty() || self.display == "-" {
            self.display = "0".to_string();
            self.is_new_number = true;
        }
        Outcome::Changed
    }

    /// Apply a scientific function or load a constant.
    pub fn scientific_op(&mut self, op: ScientificOp) -> Outcome {
        if self.has_error() {
            return Outcome::Unchanged;
        }

        let operand = match parse_operand(&self.display) {
            Ok(value) => value,
            Err(_) if op.is_constant() => 0.0,
            Err(err) => return self.fault(err),
        };

        match apply_scientific(op, operand, self.angle_mode) {
            Ok(value) => {
                let result = format_result(value);
                let calculation = Calculation {
                    equation: format!("{}({})", op, format_number(operand)),
                    result: result.clone(),
                };
                self.display = result;
                self.is_new_number = true;
                Outcome::Completed(calculation)
            }
            Err(err) => self.fault(err),
        }
    }

    pub fn memory_op(&mut self, op: MemoryOp) -> Outcome {
        match op {
            MemoryOp::Clear => {
                self.memory = 0.0;
            }
            MemoryOp::Recall => {
                if self.has_error() {
                    self.phase = Phase::Idle;
                }
                self.display = format_result(self.memory);
                self.is_new_number = true;
            }
            MemoryOp::Add | MemoryOp::Subtract => {
                if self.has_error() {
                    return Outcome::Unchanged;
                }
                let Ok(value) = parse_operand(&self.display) else {
                    return Outcome::Unchanged;
                };
                if op == MemoryOp::Add {
                    self.memory += value;
                } else {
                    self.memory -= value;
                }
                self.is_new_number = true;
            }
        }
        Outcome::Changed
    }

    pub fn toggle_angle_mode(&mut self) -> Outcome {
        self.angle_mode = self.angle_mode.toggled();
        Outcome::Changed
    }

    fn fault(&mut self, err: CalcError) -> Outcome {
        debug!(
            error = %err,
            arithmetic = err.is_arithmetic(),
            display = %self.display,
            "evaluation failed"
        );
        self.display = ERROR_DISPLAY.to_string();
        self.phase = Phase::Error;
        self.is_new_number = true;
        Outcome::Faulted(err)
    }
}
