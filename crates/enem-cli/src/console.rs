//! Terminal rendering of dashboard notifications.

use std::cell::Cell;

use enem_core::{LoadingHandle, Notifier};

/// Writes notifications to stderr so stdout stays machine-readable.
#[derive(Debug, Default)]
pub struct ConsoleNotifier {
    next_handle: Cell<u64>,
}

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        eprintln!("✔ {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("✖ {message}");
    }

    fn loading_start(&self, message: &str) -> LoadingHandle {
        let id = self.next_handle.get() + 1;
        self.next_handle.set(id);
        eprintln!("… {message}");
        LoadingHandle(id)
    }

    // A finished loading line needs no further output on a terminal.
    fn loading_dismiss(&self, _handle: LoadingHandle) {}
}
