//! CalcMaster: a basic and scientific calculator with persisted history.
//!
//! The [`calculator`] engine is a left-to-right state machine with a single
//! pending operator. [`app::App`] wraps it together with the [`history`]
//! store and the [`theme`] preference, persisting both through a
//! [`storage::KeyValueStore`].

pub mod app;
pub mod calculator;
pub mod cli;
pub mod config;
pub mod history;
pub mod input;
pub mod storage;
pub mod theme;
pub mod ui;
pub mod view;

pub use app::{Action, App, AppOptions};
pub use calculator::{Calculator, Outcome};
pub use history::{HistoryEntry, HistoryStore};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use theme::Theme;
