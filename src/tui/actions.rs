//! Side effects outside the terminal: system clipboard and web browser
//!
//! Both can fail on a headless machine; callers turn errors into toasts.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard
///
/// The clipboard handle is created per call and dropped right after.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}

/// Open a URL in the default browser without waiting for it to exit
pub fn open_in_browser(url: &str) -> Result<()> {
    open::that_detached(url).with_context(|| format!("Failed to open {}", url))
}
