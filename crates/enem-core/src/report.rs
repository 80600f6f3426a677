//! Plain-text final report.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use indoc::formatdoc;

use crate::checklist;
use crate::error::{CoreError, Result};
use crate::model::{ChecklistList, DashboardState};

/// Returned instead of a report before setup.
pub const NOT_CONFIGURED_MESSAGE: &str = "Configure o sistema antes de gerar o relatório.";

/// Build the report for `state`, stamped with `generated_at`.
///
/// The output depends only on its inputs, so the same state and timestamp
/// always render the same text.
pub fn build_text_report(state: &DashboardState, generated_at: &str) -> String {
    let Some(coord) = &state.coordinator else {
        return NOT_CONFIGURED_MESSAGE.to_string();
    };

    let simulation = if coord.simulation_mode {
        "MODO SIMULAÇÃO ATIVADO\n"
    } else {
        ""
    };
    let ratio = |list: ChecklistList| {
        format!("{}/{}", state.completed(list).len(), checklist::total(list))
    };

    let mut report = String::from("\n");
    report.push_str(&formatdoc! {"
        RELATÓRIO FINAL - ENEM 2025
        --------------------------

        Coordenador(a): {name}
        Local: {location}
        Cidade/Estado: {city} - {uf}
        Dia do Exame: {day}º dia
        Salas: {classrooms}
        Participantes: {participants}
        {simulation}

        Preparação: {preparation}
        Manhã: {morning}
        Encerramento: {closing}

        Ocorrências: {total} (Críticas: {critical})

        ",
        name = coord.name,
        location = coord.location,
        city = coord.city,
        uf = coord.state,
        day = coord.exam_day,
        classrooms = coord.classrooms,
        participants = coord.participants,
        preparation = ratio(ChecklistList::Preparation),
        morning = ratio(ChecklistList::Morning),
        closing = ratio(ChecklistList::Closing),
        total = state.occurrences.len(),
        critical = state.critical_occurrences(),
    });

    if !state.occurrences.is_empty() {
        report.push_str("Detalhamento das ocorrências:\n");
        for (idx, o) in state.occurrences.iter().enumerate() {
            let marker = if o.critical { "[CRÍTICA] " } else { "" };
            let _ = writeln!(report, "{}. {marker}{}", idx + 1, o.kind);
            let _ = writeln!(report, "   Horário: {}", o.timestamp);
            let _ = writeln!(report, "   Descrição: {}", o.description);
        }
    }

    let _ = writeln!(report, "\nRelatório gerado em: {generated_at}");
    report
}

/// `relatorio_enem_<city>_dia<day>.txt`; `local` and day 1 stand in before
/// setup. Path separators in the city are replaced.
pub fn report_file_name(state: &DashboardState) -> String {
    let (city, day) = match &state.coordinator {
        Some(c) if !c.city.is_empty() => (c.city.as_str(), c.exam_day.number()),
        Some(c) => ("local", c.exam_day.number()),
        None => ("local", 1),
    };
    let city: String = city
        .chars()
        .map(|ch| if ch == '/' || ch == '\\' { '_' } else { ch })
        .collect();
    format!("relatorio_enem_{city}_dia{day}.txt")
}

/// Write `text` as UTF-8 into `dir` under the report file name.
///
/// # Errors
/// Returns an error if the directory cannot be created or the file written.
pub fn export(state: &DashboardState, text: &str, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(report_file_name(state));
    std::fs::create_dir_all(dir)
        .and_then(|_| std::fs::write(&path, text.as_bytes()))
        .map_err(|source| CoreError::Report {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}
