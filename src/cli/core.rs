//! Core CLI dispatch and shell context helpers.

use std::{
    io,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use fintrack_config::{Config, ConfigError, ConfigManager};
use fintrack_core::{Clock, CoreError, Dashboard, FixedClock, SystemClock};

use crate::errors::FintrackError;
pub use crate::errors::CliError;

use super::commands;
use super::formatters::CliFormatters;
use super::io as cli_io;
use super::output::{self, OutputPreferences};
use super::registry::{CommandEntry, CommandRegistry};
pub use super::shell_context::{CliMode, ShellContext};

/// Pins the dashboard clock to an RFC 3339 instant, e.g. `2025-01-20T12:00:00Z`.
pub const CLOCK_OVERRIDE_ENV: &str = "FINTRACK_CLI_NOW";

const PROMPT: &str = "fintrack> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::from_env()?;
        let clock = clock_from_env()?;
        Self::with_parts(mode, config_manager, clock)
    }

    pub fn with_parts(
        mode: CliMode,
        config_manager: ConfigManager,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config = config_manager.load()?;
        output::set_preferences(OutputPreferences {
            color_enabled: config.ui_color_enabled,
        });
        let config = Arc::new(RwLock::new(config));
        info!(mode = ?mode, config = %config_manager.config_path().display(), "shell started");

        Ok(Self {
            mode,
            registry,
            dashboard: Dashboard::new(clock),
            formatters: CliFormatters::new(Arc::clone(&config)),
            config_manager,
            config,
            last_command: None,
            running: true,
        })
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub(crate) fn prompt(&self) -> String {
        PROMPT.to_string()
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn config_read(&self) -> RwLockReadGuard<'_, Config> {
        self.config.read().expect("Config lock poisoned")
    }

    pub(crate) fn config_write(&self) -> RwLockWriteGuard<'_, Config> {
        self.config.write().expect("Config lock poisoned")
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        let config = self.config_read();
        self.config_manager.save(&config)?;
        output::set_preferences(OutputPreferences {
            color_enabled: config.ui_color_enabled,
        });
        Ok(())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            debug!(command, args = args.len(), "dispatching command");
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                cli_io::print_warning(format!("Could not read `{}`: {}", line.trim(), err));
                return Ok(LoopControl::Continue);
            }
        };

        let Some(raw) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };
        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

        self.last_command = Some(line.trim().to_string());

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));
        if let Some(best) = self.registry.closest(input, 3) {
            cli_io::print_hint(format!("Did you mean `{}`?", best));
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(cli_io::confirm_action("Exit shell?")?)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(&message);
                cli_io::print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Io(err) => Err(CliError::from(err)),
            other => {
                cli_io::print_error(other.to_string());
                Ok(())
            }
        }
    }
}

fn clock_from_env() -> Result<Arc<dyn Clock>, CliError> {
    match std::env::var(CLOCK_OVERRIDE_ENV) {
        Ok(raw) => {
            let instant = DateTime::parse_from_rfc3339(raw.trim())
                .map_err(|err| {
                    CliError::Input(format!("{CLOCK_OVERRIDE_ENV} `{raw}` is not RFC 3339: {err}"))
                })?
                .with_timezone(&Utc);
            info!(%instant, "using pinned clock");
            Ok(Arc::new(FixedClock(instant)))
        }
        Err(_) => Ok(Arc::new(SystemClock)),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] FintrackError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        CommandError::Core(FintrackError::from(err))
    }
}

impl From<ConfigError> for CommandError {
    fn from(err: ConfigError) -> Self {
        CommandError::Core(FintrackError::from(err))
    }
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Core(inner) => CliError::Core(inner),
            CommandError::InvalidArguments(message) => CliError::Input(message),
            other => CliError::Command(other.to_string()),
        }
    }
}

#[cfg(test)]
pub(crate) fn process_script(lines: &[&str]) -> Result<ShellContext, CliError> {
    use chrono::TimeZone;

    let dir = tempfile::tempdir()?;
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf())?;
    let now = Utc
        .with_ymd_and_hms(2025, 1, 20, 12, 0, 0)
        .single()
        .ok_or_else(|| CliError::Input("invalid test clock".into()))?;
    let mut app = ShellContext::with_parts(CliMode::Script, manager, Arc::new(FixedClock(now)))?;
    for line in lines {
        match app.process_line(line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => app.report_error(err)?,
        }
    }
    Ok(app)
}
