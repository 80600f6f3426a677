pub mod checklist;
pub mod config;
pub mod log;
pub mod note;
pub mod occurrence;
pub mod report;
pub mod setup;
pub mod view;
pub mod watch;

use enem_core::{Config, Dashboard, Database, Event, SystemClock};

use crate::console::ConsoleNotifier;

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Open the dashboard over the on-disk store with reminder settings from
/// the config file.
pub fn open_dashboard() -> Result<Dashboard, Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let db = Database::open()?;
    Ok(Dashboard::new(
        Box::new(db),
        Box::new(ConsoleNotifier::default()),
        Box::new(SystemClock),
    )
    .with_reminders(config.alerts.leads(), config.alerts.enabled))
}

/// Emit an event as one line of JSON on stdout.
pub fn print_event(event: &Event) -> CmdResult {
    println!("{}", serde_json::to_string(event)?);
    Ok(())
}
