use anyhow::{Context, Result, bail};
use arboard::Clipboard;

/// Largest payload accepted for the clipboard (10MB)
const MAX_CLIPBOARD_BYTES: usize = 10 * 1024 * 1024;

/// Destination for copied text
trait ClipboardSink {
    fn write(&mut self, text: &str) -> Result<()>;
}

struct SystemClipboard(Clipboard);

impl SystemClipboard {
    fn open() -> Result<Self> {
        Clipboard::new().map(Self).context("Failed to initialize clipboard")
    }
}

impl ClipboardSink for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        self.0.set_text(text).context("Failed to set clipboard contents")
    }
}

/// Reject payloads before touching the system clipboard
fn check_payload(text: &str) -> Result<()> {
    if text.is_empty() {
        bail!("Cannot copy empty text to clipboard");
    }
    if text.len() > MAX_CLIPBOARD_BYTES {
        bail!("Text too large for clipboard ({} bytes, max {})", text.len(), MAX_CLIPBOARD_BYTES);
    }
    Ok(())
}

impl<S: ClipboardSink + ?Sized> ClipboardSink for &mut S {
    fn write(&mut self, text: &str) -> Result<()> {
        (**self).write(text)
    }
}

/// Validate, then open the sink only for text that will actually be written
fn copy_into<S, F>(text: &str, open: F) -> Result<()>
where
    S: ClipboardSink,
    F: FnOnce() -> Result<S>,
{
    check_payload(text)?;
    open()?.write(text)
}

/// Copy a version string or thread message to the system clipboard
///
/// # Errors
/// Fails for empty or oversized text, and when no system clipboard is reachable
/// (headless sessions, denied access).
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    copy_into(text, SystemClipboard::open)
}
