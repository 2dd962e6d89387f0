use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use super::{Clipboard, ClipboardError};

/// Pipes text into an external copy tool such as `wl-copy`, `pbcopy` or
/// `xclip -selection clipboard`.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    /// Split a command line on whitespace into program and arguments.
    pub fn parse(command_line: &str) -> Result<Self, ClipboardError> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or(ClipboardError::EmptyCommand)?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Clipboard for CommandClipboard {
    fn name(&self) -> &str {
        &self.program
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        debug!("piping {} bytes to {}", text.len(), self.program);
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ClipboardError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // The child is always reaped, even when the write fails
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        let status = child.wait()?;
        if !status.success() {
            return Err(ClipboardError::Exited {
                program: self.program.clone(),
                status,
            });
        }
        written?;
        Ok(())
    }
}
