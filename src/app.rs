//! Application state container.
//!
//! Every input becomes an [`Action`] passed to [`App::dispatch`], which
//! updates the engine, records completed calculations, and writes theme and
//! history changes through the injected storage.

use crate::calculator::{AngleMode, BinaryOp, Calculator, MemoryOp, Outcome, ScientificOp};
use crate::history::{HistoryEntry, HistoryStore};
use crate::storage::{KeyValueStore, StorageError};
use crate::theme::Theme;
use crate::view::{Mode, View};
use tracing::{debug, trace};

/// A user input, from a key press or a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Digit(u8),
    Decimal,
    Operator(BinaryOp),
    Equals,
    Clear,
    Delete,
    Scientific(ScientificOp),
    Memory(MemoryOp),
    ToggleAngleMode,
    ToggleMode,
    ToggleTheme,
    Navigate(View),
    ClearHistory,
    DeleteHistoryEntry(usize),
}

impl Action {
    /// Actions whose buttons only exist on the scientific panel.
    pub fn needs_scientific_mode(self) -> bool {
        matches!(
            self,
            Self::Scientific(_)
                | Self::Memory(_)
                | Self::ToggleAngleMode
                | Self::Operator(BinaryOp::Power)
        )
    }
}

/// Startup options for [`App`].
#[derive(Debug, Clone, Copy)]
pub struct AppOptions {
    pub angle_mode: AngleMode,
    pub mode: Mode,
    pub history_limit: usize,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            angle_mode: AngleMode::Radians,
            mode: Mode::Basic,
            history_limit: crate::history::DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// The whole application state.
#[derive(Debug)]
pub struct App<S: KeyValueStore> {
    calculator: Calculator,
    history: HistoryStore<S>,
    theme: Theme,
    view: View,
    mode: Mode,
    storage: S,
}

impl<S: KeyValueStore> App<S> {
    /// Read the saved theme and history from `storage`.
    pub fn load(storage: S, options: AppOptions) -> Result<Self, StorageError> {
        let theme = Theme::load(&storage)?;
        let history = HistoryStore::load_with_limit(storage.clone(), options.history_limit)?;

        Ok(Self {
            calculator: Calculator::with_angle_mode(options.angle_mode),
            history,
            theme,
            view: View::default(),
            mode: options.mode,
            storage,
        })
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.history.list()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Handle one action to completion.
    pub fn dispatch(&mut self, action: Action) -> Result<(), StorageError> {
        trace!(?action, "dispatch");

        if action.needs_scientific_mode() && self.mode != Mode::Scientific {
            debug!(?action, "ignored outside scientific mode");
            return Ok(());
        }

        let outcome = match action {
            Action::Digit(d) => self.calculator.input_digit(d),
            Action::Decimal => self.calculator.input_decimal(),
            Action::Operator(op) => self.calculator.input_operator(op),
            Action::Equals => self.calculator.evaluate(),
            Action::Clear => self.calculator.clear_all(),
            Action::Delete => self.calculator.delete_last_char(),
            Action::Scientific(op) => self.calculator.scientific_op(op),
            Action::Memory(op) => self.calculator.memory_op(op),
            Action::ToggleAngleMode => self.calculator.toggle_angle_mode(),
            Action::ToggleMode => {
                self.mode = self.mode.toggled();
                return Ok(());
            }
            Action::ToggleTheme => {
                let theme = self.theme.toggled();
                theme.save(&mut self.storage)?;
                self.theme = theme;
                return Ok(());
            }
            Action::Navigate(view) => {
                self.view = view;
                return Ok(());
            }
            Action::ClearHistory => return self.history.clear(),
            Action::DeleteHistoryEntry(index) => {
                self.history.remove_at(index)?;
                return Ok(());
            }
        };

        if let Outcome::Completed(calculation) = outcome {
            self.history.append(HistoryEntry::from_calculation(calculation))?;
        }
        Ok(())
    }

    /// Dispatch a sequence of actions, stopping at the first storage error.
    pub fn dispatch_all<I>(&mut self, actions: I) -> Result<(), StorageError>
    where
        I: IntoIterator<Item = Action>,
    {
        for action in actions {
            self.dispatch(action)?;
        }
        Ok(())
    }
}
