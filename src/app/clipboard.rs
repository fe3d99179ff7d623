use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The OS clipboard, opened per call.
///
/// On Linux (X11 and Wayland) the selection is served by this process, so it
/// only outlives the run when a clipboard manager takes ownership of it before
/// exit. Without one the copied text is gone once `filecat` returns.
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut board =
            arboard::Clipboard::new().context("Failed to open the system clipboard")?;
        board
            .set_text(text)
            .context("Failed to write to the system clipboard")?;
        Ok(())
    }
}

/// Reads a finished output file back and places it on the clipboard.
pub fn copy_file_to_clipboard(path: &Path, clipboard: &mut dyn Clipboard) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} for clipboard", path.display()))?;
    clipboard.set_text(&content)
}
