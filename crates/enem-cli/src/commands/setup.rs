use clap::Args;
use enem_core::{CoordinatorProfile, ExamDay};

use super::{open_dashboard, print_event, CmdResult};

#[derive(Args)]
pub struct SetupArgs {
    /// Coordinator name
    #[arg(long)]
    pub name: String,
    /// City of the venue
    #[arg(long)]
    pub city: String,
    /// State abbreviation (UF)
    #[arg(long = "uf")]
    pub state: String,
    /// Venue name
    #[arg(long)]
    pub location: String,
    /// Number of classrooms
    #[arg(long, default_value_t = 0)]
    pub classrooms: u32,
    /// Number of enrolled participants
    #[arg(long, default_value_t = 0)]
    pub participants: u32,
    /// Exam day (1 or 2)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub day: u8,
    /// Rehearsal run
    #[arg(long)]
    pub simulation: bool,
}

pub fn run(args: SetupArgs) -> CmdResult {
    let profile = CoordinatorProfile {
        name: args.name,
        city: args.city,
        state: args.state,
        location: args.location,
        classrooms: args.classrooms,
        participants: args.participants,
        exam_day: ExamDay::try_from(args.day)?,
        simulation_mode: args.simulation,
    };
    if let Some(field) = profile.missing_required_field() {
        return Err(format!("{field} must not be blank").into());
    }

    let mut dashboard = open_dashboard()?;
    match dashboard.initialize_coordinator(profile) {
        Some(event) => print_event(&event),
        None => Err("coordinator already configured; run `enem reset --yes` first".into()),
    }
}

pub fn reset(confirmed: bool) -> CmdResult {
    if !confirmed {
        return Err("reset clears all dashboard data; pass --yes to confirm".into());
    }
    let mut dashboard = open_dashboard()?;
    print_event(&dashboard.reset_all())
}
