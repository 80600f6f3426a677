use std::path::PathBuf;

use clap::Subcommand;
use enem_core::Config;

use super::{open_dashboard, print_event, CmdResult};

#[derive(Subcommand)]
pub enum ReportAction {
    /// Print the final report
    Show,
    /// Write the report to a text file
    Export {
        /// Output directory (defaults to `report.output_dir`, then the
        /// current directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

pub fn run(action: ReportAction) -> CmdResult {
    let dashboard = open_dashboard()?;
    match action {
        ReportAction::Show => print!("{}", dashboard.build_text_report()),
        ReportAction::Export { dir } => {
            let dir = dir
                .or_else(|| Config::load_or_default().report.output_dir.map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("."));
            let (_, event) = dashboard.export_text_report(&dir)?;
            print_event(&event)?;
        }
    }
    Ok(())
}
