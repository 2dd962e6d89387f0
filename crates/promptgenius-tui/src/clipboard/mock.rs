use std::sync::{Arc, Mutex};

use super::{Clipboard, ClipboardError};

/// An in-memory clipboard for tests. Clones share the same record of
/// writes, so a test can keep one handle while the app owns another.
#[derive(Debug, Clone, Default)]
pub struct MockClipboard {
    writes: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Every text successfully written, oldest first.
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().map(|w| w.clone()).unwrap_or_default()
    }
}

impl Clipboard for MockClipboard {
    fn name(&self) -> &str {
        "mock"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Unavailable("mock clipboard failure".into()));
        }
        if let Ok(mut writes) = self.writes.lock() {
            writes.push(text.to_string());
        }
        Ok(())
    }
}
