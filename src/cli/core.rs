//! Core CLI state, dispatch, and error types.

use std::{collections::VecDeque, env, io};

use strsim::levenshtein;
use thiserror::Error;

use crate::booking::{EchoLinkOpener, LinkOpener, SubmitOptions, SystemLinkOpener};
use crate::catalog::{load_from_source, CatalogLoad};
use crate::config::{Config, ConfigManager};
use crate::errors::{BookingError, ConfigError};

use super::commands::{self, CommandRegistry};
use super::output::{self, OutputPreferences};

/// Environment variable that switches the shell into line-by-line script mode.
pub const SCRIPT_ENV: &str = "CAR_RENTAL_CLI_SCRIPT";
/// Environment variable that prints handoff links instead of opening a browser.
pub const NO_BROWSER_ENV: &str = "CAR_RENTAL_NO_BROWSER";

const MAX_SUGGESTION_DISTANCE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Errors a single command can raise; reported without ending the session.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("Unknown command `{0}`")]
    UnknownCommand(String),
    #[error(transparent)]
    Booking(#[from] BookingError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors that end the shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Line editor error: {0}")]
    Editor(#[from] rustyline::error::ReadlineError),
}

pub type CommandResult = Result<(), CommandError>;

/// Shared shell runtime state.
pub struct ShellContext {
    pub(crate) mode: CliMode,
    pub(crate) registry: CommandRegistry,
    pub(crate) config_manager: ConfigManager,
    pub(crate) config: Config,
    pub(crate) script_lines: VecDeque<String>,
    pub(crate) running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::from_env()?;
        let config = config_manager.load()?;
        Ok(Self::with_config(mode, config_manager, config))
    }

    pub fn with_config(mode: CliMode, config_manager: ConfigManager, config: Config) -> Self {
        let context = Self {
            mode,
            registry: CommandRegistry::new(commands::all_definitions()),
            config_manager,
            config,
            script_lines: VecDeque::new(),
            running: true,
        };
        context.apply_output_preferences();
        context
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn apply_output_preferences(&self) {
        output::set_preferences(OutputPreferences {
            plain: self.mode == CliMode::Script || env::var_os("NO_COLOR").is_some(),
            theme: self.config.theme,
        });
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    /// Loads the configured catalog once, reporting degraded mode.
    pub(crate) fn load_catalog(&self) -> CatalogLoad {
        let load = load_from_source(&self.config.catalog);
        if let CatalogLoad::FallbackUsed { reason, .. } = &load {
            if !matches!(reason, crate::catalog::FallbackReason::NotConfigured) {
                output::warning(format!("Using bundled vehicle list ({reason})."));
            }
        }
        load
    }

    pub(crate) fn submit_options(&self) -> SubmitOptions<'_> {
        SubmitOptions {
            destination: &self.config.whatsapp_number,
            currency_symbol: &self.config.currency_symbol,
            fallback_rate: self.config.fallback_daily_rate,
        }
    }

    pub(crate) fn link_opener(&self) -> Box<dyn LinkOpener> {
        if self.mode == CliMode::Script || env::var_os(NO_BROWSER_ENV).is_some() {
            Box::new(EchoLinkOpener)
        } else {
            Box::new(SystemLinkOpener)
        }
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let command = if command == "quit" { "exit" } else { command };
        let Some(definition) = self.registry.get(command) else {
            return Err(CommandError::UnknownCommand(raw.to_string()));
        };
        let handler = definition.handler;
        handler(self, args)?;
        if self.running {
            Ok(LoopControl::Continue)
        } else {
            Ok(LoopControl::Exit)
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match &err {
            CommandError::UnknownCommand(name) => {
                output::error(&err);
                if let Some(suggestion) = self.suggest(name) {
                    output::info(format!("Did you mean `{suggestion}`?"));
                }
            }
            _ => output::error(&err),
        }
    }

    fn suggest(&self, name: &str) -> Option<&'static str> {
        let needle = name.to_ascii_lowercase();
        self.registry
            .names()
            .map(|candidate| (levenshtein(candidate, &needle), candidate))
            .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, candidate)| candidate)
    }

    pub(crate) fn prompt(&self) -> String {
        "car-rental> ".into()
    }
}
