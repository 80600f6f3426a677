use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod console;

#[derive(Parser)]
#[command(name = "enem", version, about = "ENEM coordinator dashboard CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configure the coordinator profile
    Setup(commands::setup::SetupArgs),
    /// Checklist items per phase
    Checklist {
        #[command(subcommand)]
        action: commands::checklist::ChecklistAction,
    },
    /// Free-text notes attached to checklist items
    Note {
        #[command(subcommand)]
        action: commands::note::NoteAction,
    },
    /// Incident reports
    Occurrence {
        #[command(subcommand)]
        action: commands::occurrence::OccurrenceAction,
    },
    /// Record attendance counters
    Attendance {
        /// Participants present
        #[arg(long)]
        present: u32,
        /// Participants absent
        #[arg(long)]
        absent: u32,
    },
    /// Activity log, most recent first
    Log(commands::log::LogArgs),
    /// Current stage, boundaries and countdown
    Status,
    /// Tick every second, firing reminders, until interrupted
    Watch(commands::watch::WatchArgs),
    /// Final report
    Report {
        #[command(subcommand)]
        action: commands::report::ReportAction,
    },
    /// Appearance preference
    Theme {
        #[command(subcommand)]
        action: commands::view::ThemeAction,
    },
    /// Active workflow tab
    Tab {
        #[command(subcommand)]
        action: commands::view::TabAction,
    },
    /// Clear all dashboard data
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_tracing() {
    let directive = std::env::var("ENEM_LOG")
        .unwrap_or_else(|_| enem_core::Config::load_or_default().logging.filter);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let result = match cli.command {
        Commands::Setup(args) => commands::setup::run(args),
        Commands::Checklist { action } => commands::checklist::run(action),
        Commands::Note { action } => commands::note::run(action),
        Commands::Occurrence { action } => commands::occurrence::run(action),
        Commands::Attendance { present, absent } => commands::occurrence::attendance(present, absent),
        Commands::Log(args) => commands::log::run(args),
        Commands::Status => commands::watch::status(),
        Commands::Watch(args) => commands::watch::run(args),
        Commands::Report { action } => commands::report::run(action),
        Commands::Theme { action } => commands::view::theme(action),
        Commands::Tab { action } => commands::view::tab(action),
        Commands::Reset { yes } => commands::setup::reset(yes),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "enem", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
