//! # Agent-DAO Runtime Entry Point
//!
//! Bootstraps the organization, replays the change log, then follows the
//! live change stream until interrupted.

use anyhow::Result;
use dao_bus::ChangeFilter;
use dao_runtime::{bootstrap, OrgConfig};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("===========================================");
    info!("  Agent-DAO Organization Runtime v0.1.0");
    info!("===========================================");

    // Load configuration and stand up the organization
    let config = OrgConfig::load();
    let org = bootstrap(&config)?;

    info!(
        "Deployment summary:\n{}",
        serde_json::to_string_pretty(&org.summary)?
    );

    // Replay what the bootstrap committed, then follow live changes. The
    // subscription starts after bootstrap, so the replay covers the gap.
    for record in org.core.log_since(0) {
        info!(
            sequence = record.sequence,
            actor = %record.actor,
            event = ?record.event,
            "Change (replayed)"
        );
    }

    let mut sub = org.bus.subscribe(ChangeFilter::all());
    info!("Organization is running. Press Ctrl+C to stop.");

    loop {
        tokio::select! {
            record = sub.recv() => {
                match record {
                    Some(record) => info!(
                        sequence = record.sequence,
                        actor = %record.actor,
                        event = ?record.event,
                        "Change"
                    ),
                    None => break,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    info!("Shutdown complete");
    Ok(())
}
