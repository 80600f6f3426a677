use clap::{Args, ValueEnum};
use enem_core::{LogCategory, LogStatus};

use super::{open_dashboard, CmdResult};

#[derive(Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    Preparation,
    Operational,
    Incidents,
    Closing,
}

impl From<CategoryArg> for LogCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Preparation => LogCategory::Preparation,
            CategoryArg::Operational => LogCategory::Operational,
            CategoryArg::Incidents => LogCategory::Incidents,
            CategoryArg::Closing => LogCategory::Closing,
        }
    }
}

#[derive(Args)]
pub struct LogArgs {
    /// Only entries of this category
    #[arg(long)]
    pub category: Option<CategoryArg>,
    /// Show at most this many entries
    #[arg(long)]
    pub limit: Option<usize>,
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: LogArgs) -> CmdResult {
    let dashboard = open_dashboard()?;
    let mut entries = dashboard.log_by_category(args.category.map(Into::into));
    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }
    for entry in entries {
        let status = match entry.status {
            LogStatus::Completed => "ok",
            LogStatus::Warning => "!!",
            LogStatus::Failed => "xx",
        };
        println!("{}  {status}  {}", entry.timestamp, entry.name);
    }
    Ok(())
}
