//! System clipboard access for copied colors and snippets.

use anyhow::Result;

/// Places `text` on the system clipboard.
///
/// # Errors
///
/// Returns an error if no clipboard is available or the build has the
/// `clipboard` feature disabled.
#[cfg(feature = "clipboard")]
pub fn copy_text(text: &str) -> Result<()> {
    arboard::Clipboard::new()
        .and_then(|mut clipboard| clipboard.set_text(text.to_string()))
        .map_err(|e| anyhow::anyhow!("Failed to copy to clipboard: {e}"))?;
    tracing::debug!(len = text.len(), "copied to clipboard");
    Ok(())
}

/// Places `text` on the system clipboard.
///
/// # Errors
///
/// Always fails: this build has no clipboard support.
#[cfg(not(feature = "clipboard"))]
pub fn copy_text(_text: &str) -> Result<()> {
    anyhow::bail!("Clipboard support is not enabled in this build")
}
