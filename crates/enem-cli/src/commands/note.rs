use clap::Subcommand;

use super::{open_dashboard, print_event, CmdResult};

#[derive(Subcommand)]
pub enum NoteAction {
    /// Set the note for a key, replacing any previous text
    Set { key: String, text: String },
    /// Show one note
    Get { key: String },
    /// List all notes
    List {
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: NoteAction) -> CmdResult {
    match action {
        NoteAction::Set { key, text } => {
            let mut dashboard = open_dashboard()?;
            print_event(&dashboard.set_note(&key, &text))?;
        }
        NoteAction::Get { key } => {
            let dashboard = open_dashboard()?;
            let text = dashboard
                .note(&key)
                .ok_or_else(|| format!("no note for '{key}'"))?;
            println!("{text}");
        }
        NoteAction::List { json } => {
            let dashboard = open_dashboard()?;
            let notes = &dashboard.state().notes;
            if json {
                println!("{}", serde_json::to_string_pretty(notes)?);
            } else {
                for (key, text) in notes {
                    println!("{key}: {text}");
                }
            }
        }
    }
    Ok(())
}
