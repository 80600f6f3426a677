use std::time::Duration;

use clap::Args;
use enem_core::{ChecklistList, Config, Event, Ticker};
use tracing::info;

use super::{open_dashboard, print_event, CmdResult};

#[derive(Args)]
pub struct WatchArgs {
    /// Stop after this many ticks
    #[arg(long)]
    pub ticks: Option<u64>,
    /// Only print reminder events
    #[arg(long)]
    pub reminders_only: bool,
}

pub fn status() -> CmdResult {
    let dashboard = open_dashboard()?;
    let snapshot = dashboard.time_snapshot();
    let completion: serde_json::Map<_, _> = ChecklistList::ALL
        .into_iter()
        .map(|list| {
            let (done, total) = dashboard.completion(list);
            (list.as_str().to_string(), serde_json::json!({ "done": done, "total": total }))
        })
        .collect();
    let status = serde_json::json!({
        "configured": dashboard.coordinator().is_some(),
        "time": snapshot,
        "completion": completion,
        "occurrences": dashboard.state().occurrences.len(),
        "criticalOccurrences": dashboard.state().critical_occurrences(),
        "stats": dashboard.state().stats,
    });
    println!("{}", serde_json::to_string_pretty(&status)?);
    Ok(())
}

pub fn run(args: WatchArgs) -> CmdResult {
    let period = Duration::from_millis(Config::load_or_default().clock.tick_interval_ms.max(1));
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .enable_io()
        .build()?;
    runtime.block_on(watch_loop(period, args))
}

async fn watch_loop(period: Duration, args: WatchArgs) -> CmdResult {
    let mut dashboard = open_dashboard()?;
    let mut ticker = Ticker::start(period);
    info!(period_ms = period.as_millis() as u64, "watching");

    loop {
        tokio::select! {
            tick = ticker.tick() => {
                let Some(seq) = tick else { break };
                for event in dashboard.tick() {
                    if args.reminders_only && matches!(event, Event::Tick(_)) {
                        continue;
                    }
                    print_event(&event)?;
                }
                if args.ticks.is_some_and(|limit| seq >= limit) {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted");
                break;
            }
        }
    }
    ticker.cancel();
    Ok(())
}
