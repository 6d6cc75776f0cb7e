//! Headless mission runner.
use anyhow::Result;
use scout_sim::{SimConfig, Simulation};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SimConfig::from_env();
    tracing::info!("starting mission: {:?}", config);

    let report = Simulation::new(&config)?.run();

    tracing::info!(
        "mission over after {} turns: {}/{} scouts home, {} enemy contacts, {} rejected moves",
        report.turns,
        report.finished,
        report.scouts,
        report.enemy_contacts,
        report.rejected_moves
    );
    for (k, outpost) in report.outposts.iter().enumerate() {
        tracing::info!(
            "outpost {} at {}: {} safe, {} enemy locations, payload {:?}",
            k,
            outpost.location,
            outpost.safe.len(),
            outpost.enemy.len(),
            outpost.data
        );
    }

    Ok(())
}
