use clap::Subcommand;

use super::{open_dashboard, print_event, CmdResult};

#[derive(Subcommand)]
pub enum OccurrenceAction {
    /// Record an incident
    Add {
        /// Incident type
        #[arg(long = "type")]
        kind: String,
        #[arg(long)]
        description: String,
        /// Flag as critical
        #[arg(long)]
        critical: bool,
    },
    /// List incidents in the order they were recorded
    List {
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: OccurrenceAction) -> CmdResult {
    match action {
        OccurrenceAction::Add {
            kind,
            description,
            critical,
        } => {
            let mut dashboard = open_dashboard()?;
            let event = dashboard.add_occurrence(&kind, &description, critical)?;
            print_event(&event)?;
        }
        OccurrenceAction::List { json } => {
            let dashboard = open_dashboard()?;
            let occurrences = &dashboard.state().occurrences;
            if json {
                println!("{}", serde_json::to_string_pretty(occurrences)?);
                return Ok(());
            }
            if occurrences.is_empty() {
                println!("Nenhuma ocorrência registrada.");
            }
            for o in occurrences {
                let marker = if o.critical { "[CRÍTICA] " } else { "" };
                println!("{}  {marker}{}: {}", o.timestamp, o.kind, o.description);
            }
        }
    }
    Ok(())
}

pub fn attendance(present: u32, absent: u32) -> CmdResult {
    let mut dashboard = open_dashboard()?;
    print_event(&dashboard.record_attendance(present, absent))
}
