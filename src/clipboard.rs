//! Clipboard integration for copying color strings.

use std::process::{Command, Stdio};
use thiserror::Error;
use wl_clipboard_rs::copy::{MimeType, Options, Source};

/// Errors that can occur while writing to the clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard command failed: {0}")]
    Command(String),

    #[error("wl-clipboard-rs error: {0}")]
    Library(String),

    #[error("wl-copy failed: {command} ; wl-clipboard-rs failed: {library}")]
    Unavailable { command: String, library: String },
}

/// Destination for copied text.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Wayland clipboard.
///
/// Uses the `wl-copy` command first and falls back to wl-clipboard-rs if the
/// command is missing or fails.
#[derive(Debug, Default)]
pub struct WaylandClipboard;

impl ClipboardSink for WaylandClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        log::debug!("Attempting to copy '{}' to clipboard", text);

        match copy_via_command(text) {
            Ok(()) => {
                log::info!("Copied to clipboard via wl-copy command");
                Ok(())
            }
            Err(cmd_err) => {
                log::warn!(
                    "wl-copy command path failed ({}). Falling back to wl-clipboard-rs",
                    cmd_err
                );
                copy_via_library(text).map_err(|lib_err| ClipboardError::Unavailable {
                    command: cmd_err.to_string(),
                    library: lib_err.to_string(),
                })?;
                log::info!("Copied to clipboard via wl-clipboard-rs fallback");
                Ok(())
            }
        }
    }
}

/// Copy to clipboard using wl-clipboard-rs library.
fn copy_via_library(text: &str) -> Result<(), ClipboardError> {
    use wl_clipboard_rs::copy::ServeRequests;

    let mut opts = Options::new();

    // Keep serving after we exit until the text has been pasted once
    opts.serve_requests(ServeRequests::Only(1));

    opts.copy(
        Source::Bytes(text.as_bytes().into()),
        MimeType::Text,
    )
    .map_err(|e| ClipboardError::Library(e.to_string()))?;

    Ok(())
}

/// Copy to clipboard by shelling out to wl-copy command.
fn copy_via_command(text: &str) -> Result<(), ClipboardError> {
    use std::io::Write;

    let mut child = Command::new("wl-copy")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            ClipboardError::Command(format!("Failed to spawn wl-copy (is it installed?): {}", e))
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).map_err(|e| {
            ClipboardError::Command(format!("Failed to write to wl-copy stdin: {}", e))
        })?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| ClipboardError::Command(format!("Failed to wait for wl-copy: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ClipboardError::Command(stderr.trim().to_string()));
    }

    log::debug!("wl-copy command completed successfully");
    Ok(())
}

/// Check if clipboard functionality is available.
///
/// Tests if wl-copy command exists as a basic availability check.
pub fn is_clipboard_available() -> bool {
    Command::new("wl-copy")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}
