//! System clipboard access for the snippet copy button.
//!
//! Uses `arboard`, which reaches the platform clipboard directly. The
//! handle is opened on first use and kept, so a headless session pays
//! nothing until someone actually copies.

use thiserror::Error;

/// Clipboard could not take the text.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard is reachable (headless session, missing display server)
    #[error("clipboard unavailable: {0}")]
    Unavailable(#[from] arboard::Error),
}

/// Where copied snippets go.
pub trait ClipboardSink {
    /// Replace the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The platform clipboard.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let handle = match self.handle.take() {
            Some(handle) => handle,
            None => arboard::Clipboard::new()?,
        };
        self.handle.insert(handle).set_text(text)?;
        Ok(())
    }
}
