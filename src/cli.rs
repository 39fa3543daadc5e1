//! Command line interface.

use crate::app::{Action, App, AppOptions};
use crate::config::Config;
use crate::input::{parse_line, parse_token};
use crate::storage::{FileStore, KeyValueStore};
use crate::theme::Theme;
use crate::ui::{self, Palette};
use crate::view::Mode;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "calcmaster", version, about = "A basic and scientific calculator")]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for history and theme files
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Disable colors
    #[arg(long, global = true)]
    pub plain: bool,

    /// Start with the scientific panel open
    #[arg(long, global = true)]
    pub scientific: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read keys and buttons from stdin, one line at a time
    Repl,
    /// Press the given keys and buttons, then print the calculator
    Press {
        #[arg(required = true, allow_hyphen_values = true, trailing_var_arg = true)]
        tokens: Vec<String>,
    },
    /// Show or edit the calculation history
    History {
        #[command(subcommand)]
        action: Option<HistoryCommand>,
    },
    /// Show or change the theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeCommand>,
    },
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommand {
    /// List entries, newest first
    List,
    /// Remove every entry
    Clear,
    /// Remove the entry at INDEX (0 is the newest)
    Delete { index: usize },
}

#[derive(Subcommand, Debug)]
pub enum ThemeCommand {
    Show,
    Toggle,
    Set { theme: Theme },
}

/// Run the parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => config.resolved_data_dir()?,
    };
    let storage = FileStore::new(data_dir);
    info!(data_dir = %storage.dir().display(), "using data directory");

    let options = AppOptions {
        angle_mode: config.angle_mode,
        mode: if cli.scientific || config.scientific {
            Mode::Scientific
        } else {
            Mode::Basic
        },
        history_limit: config.history_limit,
    };
    let mut app = App::load(storage, options)
        .context("Failed to load saved calculator state")?;
    let color = config.color && !cli.plain;

    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => repl(&mut app, color),
        Command::Press { tokens } => {
            for token in &tokens {
                app.dispatch_all(parse_token(token)?)?;
            }
            println!("{}", ui::render(&app, &palette(&app, color)));
            Ok(())
        }
        Command::History { action } => history(&mut app, action, color),
        Command::Theme { action } => theme(&mut app, action),
    }
}

fn palette<S: KeyValueStore>(app: &App<S>, color: bool) -> Palette {
    if color {
        Palette::for_theme(app.theme())
    } else {
        Palette::plain()
    }
}

fn repl<S: KeyValueStore>(app: &mut App<S>, color: bool) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    run_lines(app, stdin.lock(), io::stdout(), interactive, color)
}

/// Apply each input line and redraw. Bad input and failed saves are reported
/// and the session continues.
fn run_lines<S, R, W>(
    app: &mut App<S>,
    mut input: R,
    mut output: W,
    interactive: bool,
    color: bool,
) -> Result<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", ui::render(app, &palette(app, color)))?;
    loop {
        if interactive {
            write!(output, "{}> ", app.view().path())?;
            output.flush()?;
        }

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        if matches!(line, "quit" | "exit" | "q") {
            break;
        }

        let actions = match parse_line(line) {
            Ok(actions) => actions,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };
        if let Err(e) = app.dispatch_all(actions) {
            warn!(error = %e, "failed to save calculator state");
            eprintln!("{}", e);
        }
        writeln!(output, "{}", ui::render(app, &palette(app, color)))?;
    }

    Ok(())
}

fn history<S: KeyValueStore>(
    app: &mut App<S>,
    action: Option<HistoryCommand>,
    color: bool,
) -> Result<()> {
    match action.unwrap_or(HistoryCommand::List) {
        HistoryCommand::List => {
            print!("{}", ui::render_history(app.history(), &palette(app, color)));
        }
        HistoryCommand::Clear => {
            app.dispatch(Action::ClearHistory)?;
            println!("History cleared");
        }
        HistoryCommand::Delete { index } => {
            let Some(entry) = app.history().get(index).cloned() else {
                anyhow::bail!("No history entry at index {}", index);
            };
            app.dispatch(Action::DeleteHistoryEntry(index))?;
            println!("Deleted {} = {}", entry.equation, entry.result);
        }
    }
    Ok(())
}

fn theme<S: KeyValueStore>(app: &mut App<S>, action: Option<ThemeCommand>) -> Result<()> {
    match action.unwrap_or(ThemeCommand::Show) {
        ThemeCommand::Show => {}
        ThemeCommand::Toggle => app.dispatch(Action::ToggleTheme)?,
        ThemeCommand::Set { theme } => {
            if app.theme() != theme {
                app.dispatch(Action::ToggleTheme)?;
            }
        }
    }
    println!("{}", app.theme());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, StorageError};

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_press_accepts_operator_tokens() {
        let cli = Cli::try_parse_from(["calcmaster", "press", "5", "-", "M-", "Enter"]).unwrap();
        match cli.command {
            Some(Command::Press { tokens }) => assert_eq!(tokens, vec!["5", "-", "M-", "Enter"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_theme_set_parses() {
        let cli = Cli::try_parse_from(["calcmaster", "theme", "set", "light"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Theme {
                action: Some(ThemeCommand::Set { theme: Theme::Light })
            })
        ));
    }

    #[test]
    fn test_run_press_against_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.toml");
        let data = dir.path().join("data");

        let cli = Cli::try_parse_from([
            "calcmaster",
            "--config",
            config.to_str().unwrap(),
            "--data-dir",
            data.to_str().unwrap(),
            "--plain",
            "press",
            "7",
            "*",
            "6",
            "Enter",
        ])
        .unwrap();
        run(cli).unwrap();

        let app = App::load(FileStore::new(&data), AppOptions::default()).unwrap();
        assert_eq!(app.history().len(), 1);
        assert_eq!(app.history()[0].equation, "7 × 6");
        assert_eq!(app.history()[0].result, "42");
    }

    /// Reads like a memory store, refuses every write.
    #[derive(Debug, Clone, Default)]
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get(key)
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io {
                path: PathBuf::from(key),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            })
        }

        fn remove(&mut self, key: &str) -> Result<(), StorageError> {
            self.set(key, "")
        }
    }

    #[test]
    fn test_repl_continues_after_failed_save() {
        let mut app = App::load(ReadOnlyStore::default(), AppOptions::default()).unwrap();
        let input = io::Cursor::new("2 + 3 Enter\nbanana\n* 4 Enter\nTHEME\nquit\n");
        let mut output = Vec::new();
        run_lines(&mut app, input, &mut output, false, false).unwrap();

        assert_eq!(app.calculator().display(), "20");
        assert!(app.history().is_empty());
        assert_eq!(app.theme(), Theme::Dark);
        assert!(String::from_utf8(output).unwrap().contains("20"));
    }
}
