use clap::{Subcommand, ValueEnum};
use enem_core::Tab;

use super::{open_dashboard, print_event, CmdResult};

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Print the current theme
    Show,
    /// Switch between light and dark
    Toggle,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TabArg {
    Preparation,
    Morning,
    During,
    Closing,
    Report,
}

impl From<TabArg> for Tab {
    fn from(arg: TabArg) -> Self {
        match arg {
            TabArg::Preparation => Tab::Preparation,
            TabArg::Morning => Tab::Morning,
            TabArg::During => Tab::During,
            TabArg::Closing => Tab::Closing,
            TabArg::Report => Tab::Report,
        }
    }
}

#[derive(Subcommand)]
pub enum TabAction {
    /// Print the active tab
    Show,
    /// Select a tab
    Set { tab: TabArg },
}

pub fn theme(action: ThemeAction) -> CmdResult {
    let mut dashboard = open_dashboard()?;
    match action {
        ThemeAction::Show => println!("{}", dashboard.theme().as_str()),
        ThemeAction::Toggle => print_event(&dashboard.toggle_theme())?,
    }
    Ok(())
}

pub fn tab(action: TabAction) -> CmdResult {
    let mut dashboard = open_dashboard()?;
    match action {
        TabAction::Show => println!("{}", dashboard.active_tab().as_str()),
        TabAction::Set { tab } => print_event(&dashboard.set_active_tab(tab.into()))?,
    }
    Ok(())
}
