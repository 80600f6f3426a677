//! Notification port.
//!
//! The store only triggers notifications; rendering them is up to the
//! surface that implements [`Notifier`].

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Opaque handle for an in-progress loading notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoadingHandle(pub u64);

pub trait Notifier {
    fn success(&self, message: &str);

    fn error(&self, message: &str);

    fn loading_start(&self, message: &str) -> LoadingHandle;

    fn loading_dismiss(&self, handle: LoadingHandle);
}

/// Discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn success(&self, _message: &str) {}

    fn error(&self, _message: &str) {}

    fn loading_start(&self, _message: &str) -> LoadingHandle {
        LoadingHandle(0)
    }

    fn loading_dismiss(&self, _handle: LoadingHandle) {}
}

/// A notification captured by [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
    LoadingStarted(LoadingHandle, String),
    LoadingDismissed(LoadingHandle),
}

/// Keeps every notification in order. Clones share the same buffer, so a
/// test can hand one clone to the store and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    inner: Rc<RefCell<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.inner.borrow().clone()
    }

    pub fn successes(&self) -> Vec<String> {
        self.inner
            .borrow()
            .iter()
            .filter_map(|n| match n {
                Notification::Success(m) => Some(m.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.inner
            .borrow()
            .iter()
            .filter_map(|n| match n {
                Notification::Error(m) => Some(m.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.inner.borrow_mut().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.inner
            .borrow_mut()
            .push(Notification::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.inner
            .borrow_mut()
            .push(Notification::Error(message.to_string()));
    }

    fn loading_start(&self, message: &str) -> LoadingHandle {
        let mut inner = self.inner.borrow_mut();
        let handle = LoadingHandle(inner.len() as u64 + 1);
        inner.push(Notification::LoadingStarted(handle, message.to_string()));
        handle
    }

    fn loading_dismiss(&self, handle: LoadingHandle) {
        self.inner
            .borrow_mut()
            .push(Notification::LoadingDismissed(handle));
    }
}
