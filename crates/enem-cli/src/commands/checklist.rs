use clap::{Subcommand, ValueEnum};
use enem_core::checklist;
use enem_core::{ChecklistItem, ChecklistList, ItemPhase};

use super::{open_dashboard, print_event, CmdResult};

/// Lists that carry completion state.
#[derive(Clone, Copy, ValueEnum)]
pub enum ListArg {
    Preparation,
    Morning,
    Closing,
}

impl From<ListArg> for ChecklistList {
    fn from(arg: ListArg) -> Self {
        match arg {
            ListArg::Preparation => ChecklistList::Preparation,
            ListArg::Morning => ChecklistList::Morning,
            ListArg::Closing => ChecklistList::Closing,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PhaseArg {
    Preparation,
    Morning,
    During,
    Closing,
}

impl From<PhaseArg> for ItemPhase {
    fn from(arg: PhaseArg) -> Self {
        match arg {
            PhaseArg::Preparation => ItemPhase::Preparation,
            PhaseArg::Morning => ItemPhase::Morning,
            PhaseArg::During => ItemPhase::During,
            PhaseArg::Closing => ItemPhase::Closing,
        }
    }
}

impl PhaseArg {
    fn list(self) -> Option<ChecklistList> {
        match self {
            PhaseArg::Preparation => Some(ChecklistList::Preparation),
            PhaseArg::Morning => Some(ChecklistList::Morning),
            PhaseArg::During => None,
            PhaseArg::Closing => Some(ChecklistList::Closing),
        }
    }
}

#[derive(Subcommand)]
pub enum ChecklistAction {
    /// List reference items of a phase with completion marks
    List {
        phase: PhaseArg,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Mark an item done, or undo it
    Toggle { list: ListArg, id: String },
    /// Critical items not yet completed
    Pending {
        list: ListArg,
        #[arg(long)]
        json: bool,
    },
    /// Show the manual reference for an item
    Info { id: String },
}

pub fn run(action: ChecklistAction) -> CmdResult {
    match action {
        ChecklistAction::List { phase, json } => {
            let dashboard = open_dashboard()?;
            let items = dashboard.items(phase.into());
            let done = |item: &ChecklistItem| {
                phase
                    .list()
                    .is_some_and(|list| dashboard.state().is_completed(list, item.id))
            };
            if json {
                let rows: Vec<_> = items
                    .iter()
                    .map(|item| serde_json::json!({ "item": item, "completed": done(item) }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
                return Ok(());
            }
            for item in &items {
                let mark = match phase.list() {
                    Some(_) if done(item) => "[x]",
                    Some(_) => "[ ]",
                    None => " - ",
                };
                let flag = if item.critical { " !" } else { "" };
                let time = item.suggested_time.unwrap_or("     ");
                println!("{mark} {:<8} {time}  {}{flag}", item.id, item.text);
            }
            if let Some(list) = phase.list() {
                let (done, total) = dashboard.completion(list);
                println!("{done}/{total} concluídos");
            }
        }
        ChecklistAction::Toggle { list, id } => {
            let list: ChecklistList = list.into();
            let mut dashboard = open_dashboard()?;
            match dashboard.toggle_checklist_item(list, &id) {
                Some(event) => print_event(&event)?,
                None => return Err(format!("unknown item '{id}' in {list}").into()),
            }
        }
        ChecklistAction::Pending { list, json } => {
            let dashboard = open_dashboard()?;
            let pending = dashboard.pending_critical(list.into());
            if json {
                println!("{}", serde_json::to_string_pretty(&pending)?);
            } else if pending.is_empty() {
                println!("Nenhum item crítico pendente.");
            } else {
                for item in pending {
                    println!("{:<8} {}", item.id, item.text);
                }
            }
        }
        ChecklistAction::Info { id } => {
            let item = checklist::find_any(&id).ok_or_else(|| format!("unknown item '{id}'"))?;
            match item.info {
                Some(info) => {
                    println!("{}", info.title);
                    println!("{}", info.body);
                    println!("Fonte: Manual do {}, p. {}", info.source.manual, info.source.page);
                }
                None => println!("{}: sem referência ao manual.", item.id),
            }
        }
    }
    Ok(())
}
