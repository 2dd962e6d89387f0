pub mod command;
pub mod mock;
pub mod osc52;

use std::io;
use std::process::ExitStatus;

use thiserror::Error;

pub use command::CommandClipboard;
pub use mock::MockClipboard;
pub use osc52::Osc52Clipboard;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard write failed: {0}")]
    Io(#[from] io::Error),

    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with {status}")]
    Exited { program: String, status: ExitStatus },

    #[error("clipboard command is empty")]
    EmptyCommand,

    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Platform clipboard write capability.
///
/// A write is a single fallible call. Callers decide what a failure means;
/// nothing here retries.
pub trait Clipboard {
    fn name(&self) -> &str;

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}
