//! Clipboard helper for copying text to the system clipboard.

use std::io::{self, Write};
use std::process::{Command, Stdio};

/// Copy text to the system clipboard.
///
/// Uses `pbcopy` on macOS and `xclip` elsewhere.
pub fn copy_to_clipboard(text: &str) -> io::Result<()> {
    if cfg!(target_os = "macos") {
        pipe_to("pbcopy", &[], text)
    } else {
        pipe_to("xclip", &["-selection", "clipboard"], text)
    }
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> io::Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    // Dropping stdin closes the pipe so the child sees EOF.
    let written = child
        .stdin
        .take()
        .map_or(Ok(()), |mut stdin| stdin.write_all(text.as_bytes()));

    // Reap the child even when the write failed.
    let status = child.wait()?;
    written?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("{program} exited with {status}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_an_error() {
        let result = pipe_to("c2pa-explorer-no-such-clipboard-tool", &[], "text");
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_write_still_reaps_child() {
        // `true` exits without reading, so a large write hits a closed pipe.
        let text = "A".repeat(1 << 20);
        let result = pipe_to("true", &[], &text);
        assert!(result.is_err());
    }
}
