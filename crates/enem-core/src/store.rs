//! The dashboard state store.
//!
//! [`Dashboard`] is the single authoritative record of a coordinator's exam
//! day. It is only changed through the operations below; each one builds the
//! next [`DashboardState`] from a copy of the current one and swaps it in
//! whole, then writes it through to storage.
//!
//! Collaborators are injected:
//! - [`KeyValueStore`] for durable entries
//! - [`Notifier`] for user-facing messages
//! - [`Clock`] for the current local time

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::alerts::{AlertEngine, ReminderLeads};
use crate::checklist::{self, ChecklistItem, ItemPhase};
use crate::clock::{self, Clock};
use crate::error::{Result, ValidationError};
use crate::events::Event;
use crate::model::{
    ChecklistList, CoordinatorProfile, DashboardState, ExamDay, LogCategory, LogEntry, LogStatus,
    Occurrence, Stats, Tab, Theme,
};
use crate::notify::Notifier;
use crate::report;
use crate::schedule::TimeSnapshot;
use crate::storage::{KeyValueStore, STATE_ENTRY, TAB_ENTRY, THEME_ENTRY};

pub const MSG_STARTING: &str = "Iniciando sistema...";
pub const MSG_OCCURRENCE_INCOMPLETE: &str = "Preencha tipo e descrição da ocorrência.";
pub const MSG_OCCURRENCE_SAVED: &str = "Ocorrência registrada.";
pub const MSG_RESET: &str = "Sistema reiniciado.";
pub const MSG_REPORT_SAVED: &str = "Relatório TXT baixado com sucesso.";

pub struct Dashboard {
    state: DashboardState,
    theme: Theme,
    tab: Tab,
    store: Box<dyn KeyValueStore>,
    notifier: Box<dyn Notifier>,
    clock: Box<dyn Clock>,
    alerts: AlertEngine,
    alerts_enabled: bool,
    last_issued_id: u64,
}

impl Dashboard {
    /// Load the dashboard from `store`. Missing or unreadable entries start
    /// from their defaults.
    pub fn new(
        store: Box<dyn KeyValueStore>,
        notifier: Box<dyn Notifier>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let state = STATE_ENTRY.load(store.as_ref());
        let theme = THEME_ENTRY.load(store.as_ref());
        let tab = TAB_ENTRY.load(store.as_ref());
        let last_issued_id = state.last_issued_id();
        debug!(
            configured = state.coordinator.is_some(),
            occurrences = state.occurrences.len(),
            "dashboard loaded"
        );
        Self {
            state,
            theme,
            tab,
            store,
            notifier,
            clock,
            alerts: AlertEngine::default(),
            alerts_enabled: true,
            last_issued_id,
        }
    }

    /// Replace the reminder lead times and enable or disable reminders.
    pub fn with_reminders(mut self, leads: ReminderLeads, enabled: bool) -> Self {
        self.alerts = AlertEngine::new(leads);
        self.alerts_enabled = enabled;
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn coordinator(&self) -> Option<&CoordinatorProfile> {
        self.state.coordinator.as_ref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn active_tab(&self) -> Tab {
        self.tab
    }

    pub fn alerts(&self) -> &AlertEngine {
        &self.alerts
    }

    /// Reference items for a phase.
    pub fn items(&self, phase: ItemPhase) -> Vec<&'static ChecklistItem> {
        checklist::items(phase).collect()
    }

    /// `(completed, total)` against the reference list.
    pub fn completion(&self, list: ChecklistList) -> (usize, usize) {
        (self.state.completed(list).len(), checklist::total(list))
    }

    /// Critical reference items of `list` not yet completed.
    pub fn pending_critical(&self, list: ChecklistList) -> Vec<&'static ChecklistItem> {
        checklist::items(list.into())
            .filter(|item| item.critical && !self.state.is_completed(list, item.id))
            .collect()
    }

    /// Activity log, most recent first, optionally narrowed to a category.
    pub fn log_by_category(&self, category: Option<LogCategory>) -> Vec<&LogEntry> {
        self.state
            .log
            .iter()
            .filter(|e| category.map_or(true, |c| e.category == c))
            .collect()
    }

    pub fn note(&self, key: &str) -> Option<&str> {
        self.state.notes.get(key).map(String::as_str)
    }

    /// Derived-time values for the current instant.
    pub fn time_snapshot(&self) -> TimeSnapshot {
        TimeSnapshot::compute(self.clock.now(), self.exam_day())
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Set the coordinator profile. Does nothing when a required field is
    /// blank or a profile already exists.
    pub fn initialize_coordinator(&mut self, profile: CoordinatorProfile) -> Option<Event> {
        if let Some(field) = profile.missing_required_field() {
            debug!(field, "setup ignored, required field missing");
            return None;
        }
        if self.state.coordinator.is_some() {
            warn!("setup ignored, coordinator already configured");
            return None;
        }

        let handle = self.notifier.loading_start(MSG_STARTING);
        let event = Event::CoordinatorInitialized {
            name: profile.name.clone(),
            city: profile.city.clone(),
            exam_day: profile.exam_day,
            at: self.clock.now(),
        };
        let welcome = format!("Bem-vinda(o), {}! Sistema pronto para o ENEM.", profile.name);
        self.commit(|s| s.coordinator = Some(profile));
        self.notifier.loading_dismiss(handle);
        self.notifier.success(&welcome);
        info!("coordinator configured");
        Some(event)
    }

    /// Flip completion of `item_id` in `list`. Only completing an item is
    /// logged. Ids outside the list's reference data are ignored.
    pub fn toggle_checklist_item(&mut self, list: ChecklistList, item_id: &str) -> Option<Event> {
        let Some(item) = checklist::find(list, item_id) else {
            debug!(%list, item_id, "toggle ignored, unknown item");
            return None;
        };

        let now = self.clock.now();
        let completed = !self.state.is_completed(list, item.id);
        let entry = if completed {
            Some(self.log_entry(item.text, list.log_category(), LogStatus::Completed, now))
        } else {
            None
        };

        self.commit(|s| {
            let set = s.completed_mut(list);
            if completed {
                set.push(item.id.to_string());
            } else {
                set.retain(|id| id != item.id);
            }
            if let Some(entry) = entry {
                s.log.insert(0, entry);
            }
        });
        info!(%list, item_id, completed, "checklist item toggled");

        Some(Event::ChecklistItemToggled {
            list,
            item_id: item.id.to_string(),
            completed,
            at: now,
        })
    }

    pub fn set_note(&mut self, key: &str, text: &str) -> Event {
        let (key, text) = (key.to_string(), text.to_string());
        let event = Event::NoteSet {
            key: key.clone(),
            at: self.clock.now(),
        };
        self.commit(|s| {
            s.notes.insert(key, text);
        });
        event
    }

    /// Record an incident.
    ///
    /// # Errors
    /// Returns a validation error, leaving the state untouched, when the
    /// type or description is empty.
    pub fn add_occurrence(
        &mut self,
        kind: &str,
        description: &str,
        critical: bool,
    ) -> Result<Event, ValidationError> {
        let missing = if kind.is_empty() {
            Some("type")
        } else if description.is_empty() {
            Some("description")
        } else {
            None
        };
        if let Some(field) = missing {
            self.notifier.error(MSG_OCCURRENCE_INCOMPLETE);
            return Err(ValidationError::MissingField(field));
        }

        let now = self.clock.now();
        let occurrence = Occurrence {
            id: self.next_id(now),
            kind: kind.to_string(),
            description: description.to_string(),
            critical,
            timestamp: clock::format_date_time(now),
        };
        let status = if critical {
            LogStatus::Warning
        } else {
            LogStatus::Completed
        };
        let entry = self.log_entry(kind, LogCategory::Incidents, status, now);
        let event = Event::OccurrenceAdded {
            occurrence_id: occurrence.id,
            kind: occurrence.kind.clone(),
            critical,
            at: now,
        };

        self.commit(|s| {
            s.occurrences.push(occurrence);
            s.log.insert(0, entry);
        });
        info!(critical, "occurrence recorded");

        if critical {
            self.notifier
                .error(&format!("Ocorrência crítica registrada: {kind}"));
        } else {
            self.notifier.success(MSG_OCCURRENCE_SAVED);
        }
        Ok(event)
    }

    pub fn record_attendance(&mut self, present: u32, absent: u32) -> Event {
        self.commit(|s| s.stats = Stats { present, absent });
        Event::AttendanceRecorded {
            present,
            absent,
            at: self.clock.now(),
        }
    }

    pub fn toggle_theme(&mut self) -> Event {
        self.theme = self.theme.toggled();
        if let Err(err) = THEME_ENTRY.save(self.store.as_ref(), &self.theme) {
            warn!(error = %err, "failed to persist theme");
        }
        let name = match self.theme {
            Theme::Dark => "escuro",
            Theme::Light => "claro",
        };
        self.notifier.success(&format!("Tema {name} ativado."));
        Event::ThemeChanged {
            theme: self.theme,
            at: self.clock.now(),
        }
    }

    pub fn set_active_tab(&mut self, tab: Tab) -> Event {
        self.tab = tab;
        if let Err(err) = TAB_ENTRY.save(self.store.as_ref(), &tab) {
            warn!(error = %err, "failed to persist active tab");
        }
        Event::TabChanged {
            tab,
            at: self.clock.now(),
        }
    }

    /// Clear everything back to the initial empty state. The stored state
    /// and tab entries are removed; the theme is kept.
    pub fn reset_all(&mut self) -> Event {
        self.state = DashboardState::default();
        self.tab = Tab::default();
        self.alerts.rearm();
        for result in [
            STATE_ENTRY.clear(self.store.as_ref()),
            TAB_ENTRY.clear(self.store.as_ref()),
        ] {
            if let Err(err) = result {
                warn!(error = %err, "failed to clear stored entry");
            }
        }
        self.notifier.success(MSG_RESET);
        info!("dashboard reset");
        Event::StateReset {
            at: self.clock.now(),
        }
    }

    /// Advance the clock: recompute derived time and fire due reminders.
    ///
    /// The first event is always [`Event::Tick`].
    pub fn tick(&mut self) -> Vec<Event> {
        let now = self.clock.now();
        let day = self.exam_day();
        let mut events = vec![Event::Tick(TimeSnapshot::compute(now, day))];
        if !self.alerts_enabled {
            return events;
        }

        for fired in self.alerts.evaluate(now, day) {
            self.notifier.success(&fired.message);
            events.push(Event::ReminderFired {
                reminder: fired.id,
                exam_day: fired.day,
                message: fired.message,
                at: now,
            });
        }
        events
    }

    // ── Report ───────────────────────────────────────────────────────

    pub fn build_text_report(&self) -> String {
        let generated_at = clock::format_date_time(self.clock.now());
        report::build_text_report(&self.state, &generated_at)
    }

    pub fn report_file_name(&self) -> String {
        report::report_file_name(&self.state)
    }

    /// Write the report into `dir`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn export_text_report(&self, dir: &Path) -> Result<(PathBuf, Event)> {
        let text = self.build_text_report();
        match report::export(&self.state, &text, dir) {
            Ok(path) => {
                self.notifier.success(MSG_REPORT_SAVED);
                info!(path = %path.display(), "report exported");
                let event = Event::ReportExported {
                    path: path.display().to_string(),
                    at: self.clock.now(),
                };
                Ok((path, event))
            }
            Err(err) => {
                self.notifier.error(&err.to_string());
                Err(err)
            }
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn exam_day(&self) -> Option<ExamDay> {
        self.state.coordinator.as_ref().map(|c| c.exam_day)
    }

    /// Apply `change` to a copy of the state, swap it in and write it
    /// through. Write failures are logged and otherwise dropped.
    fn commit(&mut self, change: impl FnOnce(&mut DashboardState)) {
        let mut next = self.state.clone();
        change(&mut next);
        self.state = next;
        if let Err(err) = STATE_ENTRY.save(self.store.as_ref(), &self.state) {
            warn!(error = %err, "failed to persist dashboard state");
        }
    }

    /// Time-derived id, strictly greater than every id issued before.
    fn next_id(&mut self, now: chrono::NaiveDateTime) -> u64 {
        let id = clock::epoch_ms(now).max(self.last_issued_id + 1);
        self.last_issued_id = id;
        id
    }

    fn log_entry(
        &mut self,
        name: &str,
        category: LogCategory,
        status: LogStatus,
        now: chrono::NaiveDateTime,
    ) -> LogEntry {
        LogEntry {
            id: self.next_id(now),
            name: name.to_string(),
            category,
            status,
            timestamp: clock::format_time(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::notify::{Notification, RecordingNotifier};
    use crate::storage::entry::{STATE_KEY, TAB_KEY, THEME_KEY};
    use crate::storage::MemoryStore;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::rc::Rc;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 11, 9)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn profile() -> CoordinatorProfile {
        CoordinatorProfile {
            name: "Maria Cristina".into(),
            city: "Santos Dumont".into(),
            state: "MG".into(),
            location: "Centro de Ensino Paulo Freire".into(),
            classrooms: 30,
            participants: 748,
            exam_day: ExamDay::First,
            simulation_mode: false,
        }
    }

    struct Harness {
        dashboard: Dashboard,
        store: MemoryStore,
        notes: RecordingNotifier,
        clock: Rc<FixedClock>,
    }

    fn harness() -> Harness {
        let store = MemoryStore::new();
        let notes = RecordingNotifier::new();
        let clock = Rc::new(FixedClock::new(at(9, 0, 0)));
        let dashboard = Dashboard::new(
            Box::new(store.clone()),
            Box::new(notes.clone()),
            Box::new(clock.clone()),
        );
        Harness {
            dashboard,
            store,
            notes,
            clock,
        }
    }

    #[test]
    fn initialize_emits_loading_then_welcome() {
        let mut h = harness();
        assert!(h.dashboard.initialize_coordinator(profile()).is_some());
        let notes = h.notes.notifications();
        assert!(matches!(&notes[0], Notification::LoadingStarted(_, m) if m == MSG_STARTING));
        assert!(matches!(notes[1], Notification::LoadingDismissed(_)));
        assert_eq!(
            notes[2],
            Notification::Success("Bem-vinda(o), Maria Cristina! Sistema pronto para o ENEM.".into())
        );
        assert!(h.store.contains(STATE_KEY));
    }

    #[test]
    fn initialize_is_noop_with_missing_field() {
        let mut h = harness();
        let mut p = profile();
        p.location = String::new();
        assert!(h.dashboard.initialize_coordinator(p).is_none());
        assert!(h.dashboard.coordinator().is_none());
        assert!(h.notes.notifications().is_empty());
    }

    #[test]
    fn initialize_only_once() {
        let mut h = harness();
        h.dashboard.initialize_coordinator(profile());
        let mut other = profile();
        other.name = "Outra".into();
        assert!(h.dashboard.initialize_coordinator(other).is_none());
        assert_eq!(h.dashboard.coordinator().unwrap().name, "Maria Cristina");
    }

    #[test]
    fn toggle_logs_only_on_completion() {
        let mut h = harness();
        let event = h
            .dashboard
            .toggle_checklist_item(ChecklistList::Morning, "man-02")
            .unwrap();
        assert!(matches!(event, Event::ChecklistItemToggled { completed: true, .. }));
        assert_eq!(h.dashboard.state().morning, vec!["man-02".to_string()]);
        assert_eq!(h.dashboard.state().log.len(), 1);
        let entry = &h.dashboard.state().log[0];
        assert_eq!(entry.category, LogCategory::Operational);
        assert_eq!(entry.status, LogStatus::Completed);
        assert_eq!(entry.name, "Receber malotes de provas e conferir lacres");
        assert_eq!(entry.timestamp, "09:00:00");

        h.dashboard
            .toggle_checklist_item(ChecklistList::Morning, "man-02")
            .unwrap();
        assert!(h.dashboard.state().morning.is_empty());
        assert_eq!(h.dashboard.state().log.len(), 1);
    }

    #[test]
    fn toggle_ignores_ids_of_other_lists() {
        let mut h = harness();
        assert!(h
            .dashboard
            .toggle_checklist_item(ChecklistList::Preparation, "enc-10")
            .is_none());
        assert!(h
            .dashboard
            .toggle_checklist_item(ChecklistList::Closing, "missing")
            .is_none());
        assert_eq!(h.dashboard.state(), &DashboardState::default());
        assert!(!h.store.contains(STATE_KEY));
    }

    #[test]
    fn log_is_most_recent_first() {
        let mut h = harness();
        h.dashboard
            .toggle_checklist_item(ChecklistList::Preparation, "prep-01");
        h.clock.advance(chrono::Duration::seconds(5));
        h.dashboard
            .add_occurrence("Atraso", "Equipe atrasada", false)
            .unwrap();
        let log = &h.dashboard.state().log;
        assert_eq!(log[0].category, LogCategory::Incidents);
        assert_eq!(log[1].category, LogCategory::Preparation);
        assert!(log[0].id > log[1].id);
    }

    #[test]
    fn ids_strictly_increase_within_the_same_millisecond() {
        let mut h = harness();
        h.dashboard.add_occurrence("A", "a", false).unwrap();
        h.dashboard.add_occurrence("B", "b", false).unwrap();
        let occ = &h.dashboard.state().occurrences;
        assert!(occ[1].id > occ[0].id);
        let mut ids: Vec<u64> = h.dashboard.state().log.iter().map(|e| e.id).collect();
        ids.extend(occ.iter().map(|o| o.id));
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn add_occurrence_validates_and_notifies() {
        let mut h = harness();
        assert_eq!(
            h.dashboard.add_occurrence("", "x", false),
            Err(ValidationError::MissingField("type"))
        );
        assert_eq!(
            h.dashboard.add_occurrence("x", "", false),
            Err(ValidationError::MissingField("description"))
        );
        assert!(h.dashboard.state().occurrences.is_empty());
        assert_eq!(h.notes.errors().len(), 2);
        assert_eq!(h.notes.errors()[0], MSG_OCCURRENCE_INCOMPLETE);
    }

    #[test]
    fn add_occurrence_only_rejects_empty_text() {
        let mut h = harness();
        assert!(h.dashboard.add_occurrence(" ", " ", false).is_ok());
        assert_eq!(h.dashboard.state().occurrences.len(), 1);
        assert!(h.notes.errors().is_empty());
    }

    #[test]
    fn critical_occurrence_logs_warning() {
        let mut h = harness();
        h.clock.set(at(13, 2, 10));
        h.dashboard.add_occurrence("Falha", "desc", true).unwrap();
        let occ = &h.dashboard.state().occurrences[0];
        assert!(occ.critical);
        assert_eq!(occ.timestamp, "09/11/2025, 13:02:10");
        assert_eq!(h.dashboard.state().log[0].status, LogStatus::Warning);
        assert_eq!(
            h.notes.errors(),
            vec!["Ocorrência crítica registrada: Falha".to_string()]
        );

        h.dashboard.add_occurrence("Aviso", "desc", false).unwrap();
        assert_eq!(h.dashboard.state().log[0].status, LogStatus::Completed);
        assert_eq!(h.notes.successes(), vec![MSG_OCCURRENCE_SAVED.to_string()]);
    }

    #[test]
    fn notes_upsert() {
        let mut h = harness();
        h.dashboard.set_note("preparation:prep-01", "ok");
        h.dashboard.set_note("preparation:prep-01", "revisar");
        assert_eq!(h.dashboard.note("preparation:prep-01"), Some("revisar"));
        assert_eq!(h.dashboard.state().notes.len(), 1);
    }

    #[test]
    fn reset_clears_state_and_tab_but_keeps_theme() {
        let mut h = harness();
        h.dashboard.initialize_coordinator(profile());
        h.dashboard.toggle_checklist_item(ChecklistList::Closing, "enc-01");
        h.dashboard.set_active_tab(Tab::Report);
        h.dashboard.toggle_theme();
        h.dashboard.reset_all();

        assert_eq!(h.dashboard.state(), &DashboardState::default());
        assert_eq!(h.dashboard.active_tab(), Tab::Preparation);
        assert!(!h.store.contains(STATE_KEY));
        assert!(!h.store.contains(TAB_KEY));
        assert_eq!(h.store.raw(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(h.notes.successes().last().unwrap(), MSG_RESET);
    }

    #[test]
    fn state_survives_reload() {
        let mut h = harness();
        h.dashboard.initialize_coordinator(profile());
        h.dashboard.toggle_checklist_item(ChecklistList::Preparation, "prep-02");
        h.dashboard.record_attendance(700, 48);
        h.dashboard.set_active_tab(Tab::During);

        let reloaded = Dashboard::new(
            Box::new(h.store.clone()),
            Box::new(RecordingNotifier::new()),
            Box::new(h.clock.clone()),
        );
        assert_eq!(reloaded.state(), h.dashboard.state());
        assert_eq!(reloaded.active_tab(), Tab::During);
        assert_eq!(reloaded.state().stats, Stats { present: 700, absent: 48 });
    }

    #[test]
    fn theme_toggle_messages() {
        let mut h = harness();
        h.dashboard.toggle_theme();
        h.dashboard.toggle_theme();
        assert_eq!(
            h.notes.successes(),
            vec!["Tema escuro ativado.".to_string(), "Tema claro ativado.".to_string()]
        );
    }

    #[test]
    fn pending_critical_shrinks_as_items_complete() {
        let mut h = harness();
        let before = h.dashboard.pending_critical(ChecklistList::Preparation).len();
        assert!(before > 0);
        h.dashboard.toggle_checklist_item(ChecklistList::Preparation, "prep-01");
        assert_eq!(
            h.dashboard.pending_critical(ChecklistList::Preparation).len(),
            before - 1
        );
    }

    #[test]
    fn log_filter_by_category() {
        let mut h = harness();
        h.dashboard.toggle_checklist_item(ChecklistList::Closing, "enc-01");
        h.dashboard.add_occurrence("Falha", "desc", false).unwrap();
        assert_eq!(h.dashboard.log_by_category(None).len(), 2);
        assert_eq!(
            h.dashboard.log_by_category(Some(LogCategory::Closing)).len(),
            1
        );
        assert!(h
            .dashboard
            .log_by_category(Some(LogCategory::Operational))
            .is_empty());
    }

    #[test]
    fn tick_fires_reminder_once_and_notifies() {
        let mut h = harness();
        h.dashboard.initialize_coordinator(profile());
        h.notes.clear();

        h.clock.set(at(11, 50, 0));
        let events = h.dashboard.tick();
        assert!(matches!(events[0], Event::Tick(_)));
        assert_eq!(events.len(), 2);
        h.clock.advance(chrono::Duration::seconds(1));
        assert_eq!(h.dashboard.tick().len(), 1);
        assert_eq!(
            h.notes.successes(),
            vec!["Lembrete: abertura dos portões em 10 minutos.".to_string()]
        );
    }

    #[test]
    fn disabled_reminders_never_fire() {
        let store = MemoryStore::new();
        let clock = Rc::new(FixedClock::new(at(11, 50, 0)));
        let mut dashboard = Dashboard::new(
            Box::new(store),
            Box::new(RecordingNotifier::new()),
            Box::new(clock),
        )
        .with_reminders(ReminderLeads::default(), false);
        dashboard.initialize_coordinator(profile());
        assert_eq!(dashboard.tick().len(), 1);
    }

    #[test]
    fn tick_without_profile_reports_sentinels() {
        let mut h = harness();
        h.clock.set(at(11, 50, 0));
        let events = h.dashboard.tick();
        assert_eq!(events.len(), 1);
        match &events[0] {
            Event::Tick(snap) => {
                assert_eq!(snap.stage_label, "-");
                assert_eq!(snap.countdown, "--:--:--");
            }
            other => panic!("Expected Tick, got {other:?}"),
        }
    }

    #[test]
    fn export_report_notifies() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut h = harness();
        h.dashboard.initialize_coordinator(profile());
        let (path, _) = h.dashboard.export_text_report(dir.path()).unwrap();
        assert!(path.ends_with("relatorio_enem_Santos Dumont_dia1.txt"));
        assert_eq!(h.notes.successes().last().unwrap(), MSG_REPORT_SAVED);
    }
}
