use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::alerts::ReminderId;
use crate::model::{ChecklistList, ExamDay, Tab, Theme};
use crate::schedule::TimeSnapshot;

/// Every state change in the dashboard produces an Event.
/// The CLI prints them as JSON; the watch loop streams them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    CoordinatorInitialized {
        name: String,
        city: String,
        exam_day: ExamDay,
        at: NaiveDateTime,
    },
    ChecklistItemToggled {
        list: ChecklistList,
        item_id: String,
        completed: bool,
        at: NaiveDateTime,
    },
    NoteSet {
        key: String,
        at: NaiveDateTime,
    },
    OccurrenceAdded {
        occurrence_id: u64,
        kind: String,
        critical: bool,
        at: NaiveDateTime,
    },
    AttendanceRecorded {
        present: u32,
        absent: u32,
        at: NaiveDateTime,
    },
    ThemeChanged {
        theme: Theme,
        at: NaiveDateTime,
    },
    TabChanged {
        tab: Tab,
        at: NaiveDateTime,
    },
    ReminderFired {
        reminder: ReminderId,
        exam_day: ExamDay,
        message: String,
        at: NaiveDateTime,
    },
    ReportExported {
        path: String,
        at: NaiveDateTime,
    },
    StateReset {
        at: NaiveDateTime,
    },
    /// Derived-time values for one clock tick.
    Tick(TimeSnapshot),
}
