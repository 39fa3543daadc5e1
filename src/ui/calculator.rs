//! Calculator view rendering.
//!
//! Draws a header with the current settings, the pending equation in muted
//! text, the display (or error) right-aligned beneath it, and the keypad.

use super::theme::Palette;
use crate::calculator::{Calculator, Phase};
use crate::theme::Theme;
use crate::view::Mode;

/// Width of the display area in characters.
const DISPLAY_WIDTH: usize = 28;

const BASIC_KEYPAD: &[&[&str]] = &[
    &["SCI", "C", "DEL", "÷"],
    &["7", "8", "9", "×"],
    &["4", "5", "6", "-"],
    &["1", "2", "3", "+"],
    &["0", ".", "="],
];

const SCIENTIFIC_KEYPAD: &[&[&str]] = &[
    &["RAD", "sin", "cos", "tan"],
    &["sin⁻¹", "cos⁻¹", "tan⁻¹", "√"],
    &["x²", "x³", "xʸ", "1/x"],
    &["log", "ln", "n!", "π"],
    &["MC", "MR", "M+", "M-"],
];

/// Render the calculator view.
pub fn render_calculator(
    calc: &Calculator,
    theme: Theme,
    mode: Mode,
    palette: &Palette,
) -> String {
    let mut out = String::new();

    out.push_str(&render_header(calc, theme, mode, palette));
    out.push('\n');

    let equation = format!("{:>width$}", calc.equation(), width = DISPLAY_WIDTH);
    out.push_str(&palette.muted.paint(equation).to_string());
    out.push('\n');

    let display = format!("{:>width$}", calc.display(), width = DISPLAY_WIDTH);
    let style = match calc.phase() {
        Phase::Error => palette.error,
        _ => palette.display,
    };
    out.push_str(&style.paint(display).to_string());
    out.push_str("\n\n");

    out.push_str(&render_keypad(BASIC_KEYPAD, mode, calc, palette));
    if mode == Mode::Scientific {
        out.push('\n');
        out.push_str(&render_keypad(SCIENTIFIC_KEYPAD, mode, calc, palette));
    }

    out
}

fn render_header(calc: &Calculator, theme: Theme, mode: Mode, palette: &Palette) -> String {
    let mut status = vec![theme.as_str().to_string(), mode.label().to_string()];
    if mode == Mode::Scientific {
        status.push(calc.angle_mode().label().to_string());
    }
    if calc.memory() != 0.0 {
        status.push("M".to_string());
    }

    format!(
        "{}  {}",
        palette.title.paint("CalcMaster"),
        palette.muted.paint(format!("[{}]", status.join(" · ")))
    )
}

fn render_keypad(rows: &[&[&str]], mode: Mode, calc: &Calculator, palette: &Palette) -> String {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|&label| {
                    let label = button_label(label, mode, calc);
                    let style = if is_operator(label) {
                        palette.operator
                    } else {
                        palette.button
                    };
                    style.paint(format!("[{:^5}]", label)).to_string()
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Toggle buttons show their current state.
fn button_label<'a>(label: &'a str, mode: Mode, calc: &Calculator) -> &'a str {
    match label {
        "SCI" if mode == Mode::Scientific => "BASIC",
        "RAD" => calc.angle_mode().label(),
        _ => label,
    }
}

fn is_operator(label: &str) -> bool {
    matches!(label, "÷" | "×" | "-" | "+" | "=" | "xʸ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{BinaryOp, ERROR_DISPLAY};

    #[test]
    fn test_renders_display_and_equation() {
        let mut calc = Calculator::new();
        calc.input_digit(1);
        calc.input_digit(2);
        calc.input_operator(BinaryOp::Add);
        calc.input_digit(3);

        let out = render_calculator(&calc, Theme::Dark, Mode::Basic, &Palette::plain());
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("CalcMaster"));
        assert!(lines[0].contains("[dark · Basic]"));
        assert_eq!(lines[1].trim(), "12 +");
        assert_eq!(lines[2].trim(), "3");
        assert_eq!(lines[2].chars().count(), DISPLAY_WIDTH);
        assert!(!out.contains("sin"));
    }

    #[test]
    fn test_scientific_panel_and_status() {
        let mut calc = Calculator::new();
        calc.toggle_angle_mode();
        calc.input_digit(4);
        calc.memory_op(crate::calculator::MemoryOp::Add);

        let out = render_calculator(&calc, Theme::Light, Mode::Scientific, &Palette::plain());
        assert!(out.contains("[light · Scientific · DEG · M]"));
        assert!(out.contains("[ sin ]"));
        assert!(out.contains("BASIC"));
    }

    #[test]
    fn test_error_display() {
        let mut calc = Calculator::new();
        calc.input_digit(1);
        calc.input_operator(BinaryOp::Divide);
        calc.input_digit(0);
        calc.evaluate();

        let out = render_calculator(&calc, Theme::Dark, Mode::Basic, &Palette::plain());
        assert!(out.lines().nth(2).unwrap().ends_with(ERROR_DISPLAY));
    }
}
