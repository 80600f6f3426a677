//! One-shot exam-day reminders.
//!
//! Each reminder is a two-state machine evaluated on every clock tick:
//!
//! ```text
//! Armed ──(minutes left within (lead − window, lead])──► Fired
//!   ▲                                                     │
//!   └──────────── exam day changes / reset ───────────────┘
//! ```
//!
//! Firing state lives only for the session; it is never persisted.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::model::ExamDay;
use crate::schedule::BoundaryTable;

/// Width of the firing window in minutes. Wide enough that a late 1-second
/// tick still lands inside it, narrow enough that a reminder is never
/// eligible on two separate minutes.
pub const ALERT_WINDOW_MINUTES: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReminderId {
    GatesOpen,
    GatesClose,
    ExamStart,
    ExamEnd,
}

impl ReminderId {
    pub const ALL: [ReminderId; 4] = [
        ReminderId::GatesOpen,
        ReminderId::GatesClose,
        ReminderId::ExamStart,
        ReminderId::ExamEnd,
    ];

    pub fn target(self, table: &BoundaryTable) -> NaiveTime {
        match self {
            ReminderId::GatesOpen => table.gates_open,
            ReminderId::GatesClose => table.gates_close,
            ReminderId::ExamStart => table.exam_start,
            ReminderId::ExamEnd => table.exam_end,
        }
    }

    pub fn message(self, lead_minutes: u32) -> String {
        let what = match self {
            ReminderId::GatesOpen => "abertura dos portões",
            ReminderId::GatesClose => "fechamento dos portões",
            ReminderId::ExamStart => "início das provas",
            ReminderId::ExamEnd => "término previsto das provas",
        };
        format!("Lembrete: {what} em {lead_minutes} minutos.")
    }
}

/// Lead time, in minutes, for each reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderLeads {
    pub gates_open: u32,
    pub gates_close: u32,
    pub exam_start: u32,
    pub exam_end: u32,
}

impl Default for ReminderLeads {
    fn default() -> Self {
        Self {
            gates_open: 10,
            gates_close: 10,
            exam_start: 5,
            exam_end: 15,
        }
    }
}

impl ReminderLeads {
    pub fn lead(&self, id: ReminderId) -> u32 {
        match id {
            ReminderId::GatesOpen => self.gates_open,
            ReminderId::GatesClose => self.gates_close,
            ReminderId::ExamStart => self.exam_start,
            ReminderId::ExamEnd => self.exam_end,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderState {
    Armed,
    Fired,
}

/// A reminder that transitioned to `Fired` on this tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiredReminder {
    pub id: ReminderId,
    pub day: ExamDay,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct AlertEngine {
    leads: ReminderLeads,
    day: Option<ExamDay>,
    states: [ReminderState; 4],
}

impl Default for AlertEngine {
    fn default() -> Self {
        Self::new(ReminderLeads::default())
    }
}

impl AlertEngine {
    pub fn new(leads: ReminderLeads) -> Self {
        Self {
            leads,
            day: None,
            states: [ReminderState::Armed; 4],
        }
    }

    pub fn state(&self, id: ReminderId) -> ReminderState {
        self.states[Self::slot(id)]
    }

    /// Returns every reminder to `Armed`.
    pub fn rearm(&mut self) {
        self.states = [ReminderState::Armed; 4];
    }

    /// Evaluate all reminders against `now`. `day` is `None` until setup.
    pub fn evaluate(&mut self, now: NaiveDateTime, day: Option<ExamDay>) -> Vec<FiredReminder> {
        let Some(day) = day else {
            return Vec::new();
        };
        if self.day != Some(day) {
            debug!(day = day.number(), "exam day changed, re-arming reminders");
            self.rearm();
            self.day = Some(day);
        }

        let table = BoundaryTable::for_day(day);
        let mut fired = Vec::new();
        for id in ReminderId::ALL {
            let slot = Self::slot(id);
            if self.states[slot] == ReminderState::Fired {
                continue;
            }

            let lead = self.leads.lead(id);
            let target = now.date().and_time(id.target(&table));
            let minutes_left = (target - now).num_milliseconds() as f64 / 60_000.0;
            if within_window(minutes_left, lead) {
                self.states[slot] = ReminderState::Fired;
                info!(reminder = ?id, day = day.number(), minutes_left, "reminder fired");
                fired.push(FiredReminder {
                    id,
                    day,
                    message: id.message(lead),
                });
            }
        }
        fired
    }

    fn slot(id: ReminderId) -> usize {
        match id {
            ReminderId::GatesOpen => 0,
            ReminderId::GatesClose => 1,
            ReminderId::ExamStart => 2,
            ReminderId::ExamEnd => 3,
        }
    }
}

fn within_window(minutes_left: f64, lead: u32) -> bool {
    let lead = f64::from(lead);
    minutes_left <= lead && minutes_left > lead - ALERT_WINDOW_MINUTES
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 11, 9)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn fires_gates_open_ten_minutes_before() {
        let mut engine = AlertEngine::default();
        assert!(engine.evaluate(at(11, 49, 0), Some(ExamDay::First)).is_empty());

        let fired = engine.evaluate(at(11, 50, 0), Some(ExamDay::First));
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].id, ReminderId::GatesOpen);
        assert_eq!(fired[0].message, "Lembrete: abertura dos portões em 10 minutos.");
        assert_eq!(engine.state(ReminderId::GatesOpen), ReminderState::Fired);
    }

    #[test]
    fn fires_once_across_consecutive_ticks() {
        let mut engine = AlertEngine::default();
        let mut now = at(11, 49, 50);
        let mut count = 0;
        for _ in 0..120 {
            count += engine
                .evaluate(now, Some(ExamDay::First))
                .iter()
                .filter(|f| f.id == ReminderId::GatesOpen)
                .count();
            now += Duration::seconds(1);
        }
        assert_eq!(count, 1);
    }

    #[test]
    fn late_tick_inside_window_still_fires() {
        let mut engine = AlertEngine::default();
        // 8.9 minutes before exam start is outside the 5-minute window,
        // 3.9 minutes before is inside (5 - 1.2, 5].
        assert!(engine.evaluate(at(13, 21, 6), Some(ExamDay::First)).is_empty());
        let fired = engine.evaluate(at(13, 26, 6), Some(ExamDay::First));
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].id, ReminderId::ExamStart);
    }

    #[test]
    fn missed_window_never_fires() {
        let mut engine = AlertEngine::default();
        assert!(engine.evaluate(at(11, 52, 0), Some(ExamDay::First)).is_empty());
        assert_eq!(engine.state(ReminderId::GatesOpen), ReminderState::Armed);
    }

    #[test]
    fn window_lower_edge_is_exclusive() {
        // 11:51:12 leaves exactly 10 - 1.2 = 8.8 minutes to gates-open.
        let mut engine = AlertEngine::default();
        assert!(engine.evaluate(at(11, 51, 12), Some(ExamDay::First)).is_empty());
        assert_eq!(engine.state(ReminderId::GatesOpen), ReminderState::Armed);

        let mut engine = AlertEngine::default();
        let fired = engine.evaluate(at(11, 51, 11), Some(ExamDay::First));
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].id, ReminderId::GatesOpen);
    }

    #[test]
    fn exam_end_uses_day_table() {
        let mut engine = AlertEngine::default();
        let fired = engine.evaluate(at(18, 15, 0), Some(ExamDay::Second));
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].id, ReminderId::ExamEnd);
        assert_eq!(fired[0].day, ExamDay::Second);
        assert!(engine.evaluate(at(18, 15, 0), Some(ExamDay::First)).is_empty());
    }

    #[test]
    fn changing_day_rearms() {
        let mut engine = AlertEngine::default();
        assert_eq!(engine.evaluate(at(11, 50, 0), Some(ExamDay::First)).len(), 1);
        assert!(engine.evaluate(at(11, 50, 10), Some(ExamDay::First)).is_empty());
        assert_eq!(engine.evaluate(at(11, 50, 20), Some(ExamDay::Second)).len(), 1);
    }

    #[test]
    fn nothing_fires_without_profile() {
        let mut engine = AlertEngine::default();
        assert!(engine.evaluate(at(11, 50, 0), None).is_empty());
    }

    #[test]
    fn custom_leads_are_respected() {
        let mut engine = AlertEngine::new(ReminderLeads {
            gates_close: 30,
            ..ReminderLeads::default()
        });
        let fired = engine.evaluate(at(12, 30, 0), Some(ExamDay::First));
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].message, "Lembrete: fechamento dos portões em 30 minutos.");
    }
}
