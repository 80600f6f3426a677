//! # ENEM Coordinator Core Library
//!
//! This library provides the core logic for the exam-day coordinator
//! dashboard. It follows a CLI-first philosophy: every operation is
//! available through the standalone `enem` binary, which is a thin layer
//! over this crate.
//!
//! ## Architecture
//!
//! - **State Store**: [`Dashboard`] owns the coordinator profile, checklist
//!   completion sets, occurrences, notes and the activity log
//! - **Derived Time**: exam-day boundaries, stage label and countdown,
//!   recomputed on every clock tick
//! - **Alerts**: one-shot reminders ahead of gates and exam boundaries
//! - **Storage**: SQLite key/value entries and TOML configuration
//! - **Report**: plain-text final report export
//!
//! ## Key Components
//!
//! - [`Dashboard`]: state store and the operations that mutate it
//! - [`TimeSnapshot`]: derived-time values for one tick
//! - [`AlertEngine`]: reminder state machines
//! - [`Database`]: durable key/value storage
//! - [`Config`]: application configuration management
//! - [`Ticker`]: cancellable periodic tick

pub mod alerts;
pub mod checklist;
pub mod clock;
pub mod error;
pub mod events;
pub mod model;
pub mod notify;
pub mod report;
pub mod schedule;
pub mod storage;
pub mod store;
pub mod ticker;

pub use alerts::{AlertEngine, FiredReminder, ReminderId, ReminderLeads, ReminderState, ALERT_WINDOW_MINUTES};
pub use checklist::{ChecklistItem, ItemPhase};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use events::Event;
pub use model::{
    ChecklistList, CoordinatorProfile, DashboardState, ExamDay, LogCategory, LogEntry, LogStatus,
    Occurrence, Stats, Tab, Theme,
};
pub use notify::{LoadingHandle, Notification, Notifier, RecordingNotifier, SilentNotifier};
pub use schedule::{BoundaryTable, Stage, TimeSnapshot, NO_COUNTDOWN, NOT_CONFIGURED};
pub use storage::{Config, Database, KeyValueStore, MemoryStore};
pub use store::Dashboard;
pub use ticker::Ticker;
