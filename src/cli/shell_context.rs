//! Shared runtime state for CLI interactions and command execution.

use std::sync::{Arc, RwLock};

use fintrack_config::{Config, ConfigManager};
use fintrack_core::{Clock, Dashboard};

use super::{formatters::CliFormatters, registry::CommandRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub dashboard: Dashboard<Arc<dyn Clock>>,
    pub formatters: CliFormatters,
    pub config_manager: ConfigManager,
    pub config: Arc<RwLock<Config>>,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn status(&self) -> String {
        format!(
            "ShellContext {{ running: {}, last_command: {:?}, transactions: {} }}",
            self.running,
            self.last_command,
            self.dashboard.transactions().len()
        )
    }
}
