use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use promptgenius_core::{Field, FormState};
use tracing::debug;

use crate::clipboard::{Clipboard, CommandClipboard, Osc52Clipboard};

/// How long the "Copied!" indicator stays up by default.
pub const DEFAULT_COPIED_MS: u64 = 2000;

/// How long the celebration banner stays up after a prompt is generated.
pub const DEFAULT_CELEBRATE_MS: u64 = 3000;

#[derive(Debug, Parser)]
#[command(
    name = "promptgenius",
    version,
    about = "Build a tailored AI prompt with a four-step wizard"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Copy by piping to this command (e.g. "wl-copy") instead of OSC 52
    #[arg(long, env = "PROMPTGENIUS_CLIPBOARD_CMD", global = true)]
    pub clipboard_command: Option<String>,

    /// Write logs here while the wizard owns the terminal
    #[arg(long, env = "PROMPTGENIUS_LOG_FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// How long the copied indicator stays up (milliseconds)
    #[arg(long, env = "PROMPTGENIUS_COPIED_MS", default_value_t = DEFAULT_COPIED_MS, global = true)]
    pub copied_ms: u64,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a prompt without the interactive wizard
    Generate(GenerateArgs),
    /// List the ids accepted for each selection
    Options,
    /// Print the about page
    About,
}

#[derive(Debug, Default, Args)]
pub struct GenerateArgs {
    /// JSON file with form fields; flags override its values
    #[arg(long)]
    pub form: Option<PathBuf>,

    #[arg(long)]
    pub output_type: Option<String>,

    #[arg(long)]
    pub goal: Option<String>,

    #[arg(long)]
    pub tone: Option<String>,

    #[arg(long)]
    pub audience: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Print the form and prompt as JSON
    #[arg(long)]
    pub json: bool,

    /// Also copy the prompt to the clipboard
    #[arg(long)]
    pub copy: bool,
}

impl GenerateArgs {
    /// Build the form from the optional file and the flags.
    pub fn resolve_form(&self) -> Result<FormState> {
        let mut form = match &self.form {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                FormState::from_json(&raw)
                    .with_context(|| format!("invalid form file {}", path.display()))?
            }
            None => FormState::default(),
        };

        let overrides = [
            (Field::OutputType, &self.output_type),
            (Field::Goal, &self.goal),
            (Field::Tone, &self.tone),
            (Field::Audience, &self.audience),
            (Field::Description, &self.description),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                form.set_by_id(field, value)?;
            }
        }
        Ok(form)
    }
}

/// Settings the interactive app needs.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub copied_for: Duration,
    pub celebrate_for: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            copied_for: Duration::from_millis(DEFAULT_COPIED_MS),
            celebrate_for: Duration::from_millis(DEFAULT_CELEBRATE_MS),
        }
    }
}

impl Cli {
    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            copied_for: Duration::from_millis(self.copied_ms),
            ..AppConfig::default()
        }
    }

    /// The configured clipboard backend. OSC 52 unless a command is set.
    pub fn clipboard(&self) -> Result<Box<dyn Clipboard>> {
        match self.clipboard_command.as_deref() {
            Some(cmd) => Ok(Box::new(
                CommandClipboard::parse(cmd).context("invalid --clipboard-command")?,
            )),
            None => Ok(Box::new(Osc52Clipboard::stdout())),
        }
    }

    /// Clipboard for the subcommands, whose stdout carries the output.
    /// OSC 52 goes to the controlling terminal, or stderr without one.
    pub fn subcommand_clipboard(&self) -> Result<Box<dyn Clipboard>> {
        if self.clipboard_command.is_some() {
            return self.clipboard();
        }
        match Osc52Clipboard::tty() {
            Ok(tty) => Ok(Box::new(tty)),
            Err(e) => {
                debug!("no controlling terminal ({e}), sending OSC 52 to stderr");
                Ok(Box::new(Osc52Clipboard::new(io::stderr())))
            }
        }
    }
}
