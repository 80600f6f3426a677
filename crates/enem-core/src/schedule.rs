//! Exam-day boundaries and the values derived from the current time.
//!
//! Recomputed on every clock tick:
//!
//! ```text
//! now ──► stage label      (hour-of-day thresholds)
//!     ──► boundary table   (exam day 1 or 2)
//!     ──► countdown        (exam end − now, only between 13:00 and exam end)
//! ```

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::model::ExamDay;

/// Countdown value shown outside the application window.
pub const NO_COUNTDOWN: &str = "--:--:--";

/// Stage label shown before setup.
pub const NOT_CONFIGURED: &str = "-";

/// Countdown only runs from this hour on.
const COUNTDOWN_FROM_HOUR: u32 = 13;

/// The four fixed clock times of an exam day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryTable {
    pub gates_open: NaiveTime,
    pub gates_close: NaiveTime,
    pub exam_start: NaiveTime,
    pub exam_end: NaiveTime,
}

fn hm(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap_or_default()
}

impl BoundaryTable {
    pub fn for_day(day: ExamDay) -> Self {
        match day {
            ExamDay::First => Self {
                gates_open: hm(12, 0),
                gates_close: hm(13, 0),
                exam_start: hm(13, 30),
                exam_end: hm(19, 0),
            },
            ExamDay::Second => Self {
                gates_open: hm(12, 0),
                gates_close: hm(13, 0),
                exam_start: hm(13, 30),
                exam_end: hm(18, 30),
            },
        }
    }
}

/// Workflow stage derived from the hour of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Preparation,
    MorningOfExam,
    DuringApplication,
    Closing,
}

impl Stage {
    pub fn at(now: NaiveDateTime) -> Self {
        match now.hour() {
            0..=7 => Stage::Preparation,
            8..=12 => Stage::MorningOfExam,
            13..=18 => Stage::DuringApplication,
            _ => Stage::Closing,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stage::Preparation => "Preparação",
            Stage::MorningOfExam => "Manhã do Exame",
            Stage::DuringApplication => "Durante a Aplicação",
            Stage::Closing => "Encerramento",
        }
    }
}

/// Seconds left until the exam ends, or `None` outside the countdown window.
pub fn remaining_secs(now: NaiveDateTime, table: &BoundaryTable) -> Option<i64> {
    let end = now.date().and_time(table.exam_end);
    if now >= end || now.hour() < COUNTDOWN_FROM_HOUR {
        return None;
    }
    Some((end - now).num_seconds())
}

/// Zero-padded `HH:MM:SS`.
pub fn format_hms(total_secs: i64) -> String {
    let total = total_secs.max(0);
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Values derived from the current time for one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSnapshot {
    pub now: NaiveDateTime,
    pub boundaries: Option<BoundaryTable>,
    pub stage: Option<Stage>,
    pub stage_label: String,
    pub countdown: String,
}

impl TimeSnapshot {
    /// `exam_day` is `None` until a coordinator profile exists.
    pub fn compute(now: NaiveDateTime, exam_day: Option<ExamDay>) -> Self {
        let Some(day) = exam_day else {
            return Self {
                now,
                boundaries: None,
                stage: None,
                stage_label: NOT_CONFIGURED.to_string(),
                countdown: NO_COUNTDOWN.to_string(),
            };
        };

        let table = BoundaryTable::for_day(day);
        let stage = Stage::at(now);
        let countdown = remaining_secs(now, &table)
            .map(format_hms)
            .unwrap_or_else(|| NO_COUNTDOWN.to_string());

        Self {
            now,
            boundaries: Some(table),
            stage: Some(stage),
            stage_label: stage.label().to_string(),
            countdown,
        }
    }
}
