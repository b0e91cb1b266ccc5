//! Log output that stays out of the way of the alternate screen.
//!
//! While the explorer owns the terminal, formatted log lines are held in
//! memory; they are written to stderr once the terminal is restored.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

/// Upper bound on held log output; later lines are dropped.
const MAX_DEFERRED_BYTES: usize = 64 * 1024;

static TERMINAL_ACTIVE: AtomicBool = AtomicBool::new(false);
static DEFERRED: Mutex<Vec<u8>> = Mutex::new(Vec::new());

/// Whether the alternate screen is currently owned by the TUI.
pub fn terminal_active() -> bool {
    TERMINAL_ACTIVE.load(Ordering::Relaxed)
}

pub(crate) fn set_terminal_active(active: bool) {
    TERMINAL_ACTIVE.store(active, Ordering::Relaxed);
}

/// Writer handed to the log subscriber.
///
/// Goes to stderr normally and to the in-memory buffer while the TUI runs.
#[derive(Debug, Default)]
pub struct LogWriter;

impl LogWriter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if terminal_active() {
            defer(buf);
            Ok(buf.len())
        } else {
            io::stderr().write(buf)
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        if terminal_active() {
            Ok(())
        } else {
            io::stderr().flush()
        }
    }
}

fn defer(buf: &[u8]) {
    let mut held = DEFERRED.lock().unwrap_or_else(PoisonError::into_inner);
    let room = MAX_DEFERRED_BYTES.saturating_sub(held.len());
    held.extend_from_slice(&buf[..buf.len().min(room)]);
}

/// Take everything logged while the TUI was active.
pub(crate) fn take_deferred() -> Vec<u8> {
    std::mem::take(&mut *DEFERRED.lock().unwrap_or_else(PoisonError::into_inner))
}

/// Write the held log output to stderr.
pub(crate) fn flush_deferred() -> io::Result<()> {
    let held = take_deferred();
    if held.is_empty() {
        return Ok(());
    }
    let mut stderr = io::stderr().lock();
    stderr.write_all(&held)?;
    stderr.flush()
}
