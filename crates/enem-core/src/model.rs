//! Persisted dashboard records.
//!
//! Field names follow the durable layout of the state entry (camelCase
//! inside records) so that existing saved state keeps loading.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// One of the two fixed exam days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ExamDay {
    First,
    Second,
}

impl ExamDay {
    pub fn number(self) -> u8 {
        match self {
            ExamDay::First => 1,
            ExamDay::Second => 2,
        }
    }
}

impl TryFrom<u8> for ExamDay {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ExamDay::First),
            2 => Ok(ExamDay::Second),
            other => Err(ValidationError::InvalidValue {
                field: "examDay".into(),
                message: format!("expected 1 or 2, got {other}"),
            }),
        }
    }
}

impl From<ExamDay> for u8 {
    fn from(day: ExamDay) -> Self {
        day.number()
    }
}

impl fmt::Display for ExamDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Venue coordinator profile, captured once at setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatorProfile {
    pub name: String,
    pub city: String,
    pub state: String,
    pub location: String,
    pub classrooms: u32,
    pub participants: u32,
    pub exam_day: ExamDay,
    #[serde(default)]
    pub simulation_mode: bool,
}

impl CoordinatorProfile {
    /// Name of the first blank required field, if any.
    pub fn missing_required_field(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("city", &self.city),
            ("state", &self.state),
            ("location", &self.location),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}

/// Checklist lists that carry a completion set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecklistList {
    Preparation,
    Morning,
    Closing,
}

impl ChecklistList {
    pub const ALL: [ChecklistList; 3] = [
        ChecklistList::Preparation,
        ChecklistList::Morning,
        ChecklistList::Closing,
    ];

    /// Audit category recorded when an item of this list is completed.
    pub fn log_category(self) -> LogCategory {
        match self {
            ChecklistList::Preparation => LogCategory::Preparation,
            ChecklistList::Morning => LogCategory::Operational,
            ChecklistList::Closing => LogCategory::Closing,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChecklistList::Preparation => "preparation",
            ChecklistList::Morning => "morning",
            ChecklistList::Closing => "closing",
        }
    }
}

impl fmt::Display for ChecklistList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded incident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub critical: bool,
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogCategory {
    Preparation,
    Operational,
    Incidents,
    Closing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    Completed,
    Warning,
    Failed,
}

/// Audit trail record, kept most-recent-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u64,
    pub name: String,
    pub category: LogCategory,
    pub status: LogStatus,
    pub timestamp: String,
}

/// Attendance counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub present: u32,
    pub absent: u32,
}

/// Full dashboard state, persisted as a single JSON entry.
///
/// Every field defaults independently, whether missing or `null`, so a
/// partially written entry still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardState {
    #[serde(default)]
    pub coordinator: Option<CoordinatorProfile>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub preparation: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub morning: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub closing: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub occurrences: Vec<Occurrence>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: Stats,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub log: Vec<LogEntry>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl DashboardState {
    pub fn completed(&self, list: ChecklistList) -> &[String] {
        match list {
            ChecklistList::Preparation => &self.preparation,
            ChecklistList::Morning => &self.morning,
            ChecklistList::Closing => &self.closing,
        }
    }

    pub(crate) fn completed_mut(&mut self, list: ChecklistList) -> &mut Vec<String> {
        match list {
            ChecklistList::Preparation => &mut self.preparation,
            ChecklistList::Morning => &mut self.morning,
            ChecklistList::Closing => &mut self.closing,
        }
    }

    pub fn is_completed(&self, list: ChecklistList, item_id: &str) -> bool {
        self.completed(list).iter().any(|id| id == item_id)
    }

    pub fn critical_occurrences(&self) -> usize {
        self.occurrences.iter().filter(|o| o.critical).count()
    }

    /// Highest id issued so far across occurrences and log entries.
    pub(crate) fn last_issued_id(&self) -> u64 {
        let occurrences = self.occurrences.iter().map(|o| o.id);
        let log = self.log.iter().map(|e| e.id);
        occurrences.chain(log).max().unwrap_or(0)
    }
}

/// Appearance preference, stored as a plain string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything other than `dark` reads as light.
    pub fn parse_lenient(raw: &str) -> Self {
        if raw == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Workflow stage selected in the view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Preparation,
    Morning,
    During,
    Closing,
    Report,
}

impl Tab {
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Preparation => "preparation",
            Tab::Morning => "morning",
            Tab::During => "during",
            Tab::Closing => "closing",
            Tab::Report => "report",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "preparation" => Some(Tab::Preparation),
            "morning" => Some(Tab::Morning),
            "during" => Some(Tab::During),
            "closing" => Some(Tab::Closing),
            "report" => Some(Tab::Report),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn profile_serializes_with_camel_case_and_numeric_day() {
        let json = serde_json::to_value(profile()).unwrap();
        assert_eq!(json["examDay"], 1);
        assert_eq!(json["simulationMode"], false);
    }

    #[test]
    fn exam_day_rejects_out_of_range() {
        assert!(ExamDay::try_from(3).is_err());
        let parsed: Result<CoordinatorProfile, _> = serde_json::from_str(
            r#"{"name":"a","city":"b","state":"c","location":"d","classrooms":1,"participants":1,"examDay":7}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn missing_required_field_detects_blank_values() {
        let mut p = profile();
        assert_eq!(p.missing_required_field(), None);
        p.city = "   ".into();
        assert_eq!(p.missing_required_field(), Some("city"));
    }

    #[test]
    fn occurrence_uses_type_key() {
        let occ = Occurrence {
            id: 1,
            kind: "Falha".into(),
            description: "desc".into(),
            critical: true,
            timestamp: "19/10/2026, 13:05:00".into(),
        };
        let json = serde_json::to_value(&occ).unwrap();
        assert_eq!(json["type"], "Falha");
    }

    #[test]
    fn partial_state_fills_defaults() {
        let state: DashboardState = serde_json::from_str(r#"{"morning":["man-01"]}"#).unwrap();
        assert_eq!(state.morning, vec!["man-01".to_string()]);
        assert!(state.coordinator.is_none());
        assert_eq!(state.stats, Stats::default());
    }

    #[test]
    fn null_fields_fall_back_one_by_one() {
        let state: DashboardState =
            serde_json::from_str(r#"{"closing":["enc-01"],"stats":null,"log":null,"notes":null}"#)
                .unwrap();
        assert_eq!(state.closing, vec!["enc-01".to_string()]);
        assert_eq!(state.stats, Stats::default());
        assert!(state.log.is_empty());
        assert!(state.notes.is_empty());
    }

    #[test]
    fn theme_parsing_is_lenient() {
        assert_eq!(Theme::parse_lenient("dark"), Theme::Dark);
        assert_eq!(Theme::parse_lenient("purple"), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
