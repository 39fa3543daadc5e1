//! Calculator module: the input/evaluation state machine.
//!
//! This module provides:
//! - Operator kinds parsed from keys and button labels
//! - Pure arithmetic and result formatting
//! - The engine that turns input events into display updates and
//!   completed calculations

mod engine;
mod evaluation;
mod operator;

pub use engine::{Calculation, Calculator, ERROR_DISPLAY, Outcome, Phase};
pub use evaluation::{CalcError, format_number, format_result};
pub use operator::{AngleMode, BinaryOp, MemoryOp, ScientificOp, UnknownOperator};
