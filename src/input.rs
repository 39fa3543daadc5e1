//! Mapping from keyboard keys and button labels to actions.
//!
//! Keyboard handling mirrors the web keypad: `*` and `/` map to `×` and `÷`,
//! `Enter` evaluates, and both `Backspace` and `Escape` clear everything.
//! Single-character delete is only reachable through the `DEL` button.

use crate::app::Action;
use crate::calculator::{BinaryOp, MemoryOp, ScientificOp};
use crate::view::View;

/// A keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Escape,
}

impl Key {
    /// Parse a key name such as `Enter`, `Escape` or a single character.
    pub fn from_name(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(Key::Char(c));
        }

        match name.to_lowercase().as_str() {
            "enter" | "return" => Some(Key::Enter),
            "backspace" => Some(Key::Backspace),
            "escape" | "esc" => Some(Key::Escape),
            _ => None,
        }
    }
}

/// The action bound to a keyboard key, if any.
pub fn action_for_key(key: Key) -> Option<Action> {
    match key {
        Key::Char(c @ '0'..='9') => c.to_digit(10).map(|d| Action::Digit(d as u8)),
        Key::Char('.') => Some(Action::Decimal),
        Key::Char(c @ ('+' | '-' | '*' | '/')) => BinaryOp::from_key(c).map(Action::Operator),
        Key::Enter => Some(Action::Equals),
        Key::Backspace | Key::Escape => Some(Action::Clear),
        Key::Char(_) => None,
    }
}

/// A token that is neither a key nor a button label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized input: {0:?}")]
pub struct UnknownInput(pub String);

/// Turn one input token into the actions it stands for.
///
/// A token made only of digits and `.` expands into one key press per
/// character, so `12.5` types four keys.
pub fn parse_token(token: &str) -> Result<Vec<Action>, UnknownInput> {
    let token = token.trim();
    if token.is_empty() {
        return Ok(Vec::new());
    }

    if is_number_literal(token) {
        return Ok(token
            .chars()
            .filter_map(|c| action_for_key(Key::Char(c)))
            .collect());
    }

    if let Some(action) = Key::from_name(token).and_then(action_for_key) {
        return Ok(vec![action]);
    }

    button_action(token)
        .map(|action| vec![action])
        .ok_or_else(|| UnknownInput(token.to_string()))
}

/// Parse a whole line of whitespace-separated tokens.
pub fn parse_line(line: &str) -> Result<Vec<Action>, UnknownInput> {
    let mut actions = Vec::new();
    for token in line.split_whitespace() {
        actions.extend(parse_token(token)?);
    }
    Ok(actions)
}

fn is_number_literal(token: &str) -> bool {
    token.chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// Buttons that have no keyboard binding.
fn button_action(label: &str) -> Option<Action> {
    if label.starts_with('/') && label.len() > 1 {
        return View::from_path(label).map(Action::Navigate);
    }

    match label.to_uppercase().as_str() {
        "=" => return Some(Action::Equals),
        "C" | "AC" | "CLEAR" => return Some(Action::Clear),
        "DEL" | "⌫" => return Some(Action::Delete),
        "RAD" | "DEG" | "ANGLE" => return Some(Action::ToggleAngleMode),
        "SCI" | "SCIENTIFIC" | "BASIC" | "MODE" => return Some(Action::ToggleMode),
        "THEME" => return Some(Action::ToggleTheme),
        "HISTORY" => return Some(Action::Navigate(View::History)),
        "BACK" => return Some(Action::Navigate(View::Calculator)),
        "CLEAR-HISTORY" => return Some(Action::ClearHistory),
        _ => {}
    }

    if let Some(index) = label
        .strip_prefix("delete-history:")
        .and_then(|n| n.parse::<usize>().ok())
    {
        return Some(Action::DeleteHistoryEntry(index));
    }

    if let Ok(op) = label.parse::<BinaryOp>() {
        return Some(Action::Operator(op));
    }
    if let Ok(op) = label.parse::<MemoryOp>() {
        return Some(Action::Memory(op));
    }
    label.parse::<ScientificOp>().ok().map(Action::Scientific)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_keys() {
        assert_eq!(action_for_key(Key::Char('7')), Some(Action::Digit(7)));
        assert_eq!(action_for_key(Key::Char('.')), Some(Action::Decimal));
        assert_eq!(
            action_for_key(Key::Char('*')),
            Some(Action::Operator(BinaryOp::Multiply))
        );
        assert_eq!(
            action_for_key(Key::Char('/')),
            Some(Action::Operator(BinaryOp::Divide))
        );
        assert_eq!(action_for_key(Key::Enter), Some(Action::Equals));
        assert_eq!(action_for_key(Key::Char('x')), None);
    }

    #[test]
    fn test_backspace_clears() {
        assert_eq!(action_for_key(Key::Backspace), Some(Action::Clear));
        assert_eq!(action_for_key(Key::Escape), Some(Action::Clear));
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("Enter"), Some(Key::Enter));
        assert_eq!(Key::from_name("esc"), Some(Key::Escape));
        assert_eq!(Key::from_name("+"), Some(Key::Char('+')));
        assert_eq!(Key::from_name("Tab"), None);
    }

    #[test]
    fn test_number_literal_expands() {
        assert_eq!(
            parse_token("12.5").unwrap(),
            vec![
                Action::Digit(1),
                Action::Digit(2),
                Action::Decimal,
                Action::Digit(5),
            ]
        );
    }

    #[test]
    fn test_button_labels() {
        assert_eq!(parse_token("=").unwrap(), vec![Action::Equals]);
        assert_eq!(parse_token("C").unwrap(), vec![Action::Clear]);
        assert_eq!(parse_token("DEL").unwrap(), vec![Action::Delete]);
        assert_eq!(
            parse_token("×").unwrap(),
            vec![Action::Operator(BinaryOp::Multiply)]
        );
        assert_eq!(
            parse_token("xʸ").unwrap(),
            vec![Action::Operator(BinaryOp::Power)]
        );
        assert_eq!(
            parse_token("M-").unwrap(),
            vec![Action::Memory(MemoryOp::Subtract)]
        );
        assert_eq!(
            parse_token("n!").unwrap(),
            vec![Action::Scientific(ScientificOp::Factorial)]
        );
        assert_eq!(parse_token("deg").unwrap(), vec![Action::ToggleAngleMode]);
    }

    #[test]
    fn test_navigation_tokens() {
        assert_eq!(
            parse_token("/history").unwrap(),
            vec![Action::Navigate(View::History)]
        );
        assert_eq!(
            parse_token("back").unwrap(),
            vec![Action::Navigate(View::Calculator)]
        );
        assert_eq!(
            parse_token("delete-history:3").unwrap(),
            vec![Action::DeleteHistoryEntry(3)]
        );
        assert!(parse_token("/nowhere").is_err());
    }

    #[test]
    fn test_parse_line() {
        let actions = parse_line("1 + 2 Enter").unwrap();
        assert_eq!(
            actions,
            vec![
                Action::Digit(1),
                Action::Operator(BinaryOp::Add),
                Action::Digit(2),
                Action::Equals,
            ]
        );
        assert_eq!(parse_line("   ").unwrap(), Vec::new());
        assert_eq!(
            parse_line("1 + banana"),
            Err(UnknownInput("banana".to_string()))
        );
    }
}
