use std::sync::Arc;

use anyhow::Context;
use serde_json::json;

use pharmawatch_ai::CannedInsights;
use pharmawatch_infra::fixtures::{facility_name, sample_inventory};
use pharmawatch_infra::{Clock, HealthMonitor, InMemoryRecordStore, MonitorConfig, SnapshotScope, SystemClock};

fn main() -> anyhow::Result<()> {
    let config = MonitorConfig::from_env().context("loading configuration")?;
    pharmawatch_observability::init(config.log_format);

    let clock = SystemClock;
    let store = Arc::new(InMemoryRecordStore::with_items(sample_inventory(
        clock.now().date_naive(),
    )));
    tracing::info!(
        expiry_horizon_days = config.health.expiry_horizon_days,
        "seeded demo inventory"
    );

    let monitor = HealthMonitor::new(store, clock, config.health)
        .with_insights(CannedInsights::new(config.insight_seed));

    let overall = monitor.snapshot_all()?;
    let facilities: Vec<_> = monitor
        .snapshot_each_facility()?
        .into_iter()
        .map(|snapshot| {
            let name = match snapshot.scope {
                SnapshotScope::Facility(id) => facility_name(id),
                SnapshotScope::AllFacilities => None,
            };
            json!({ "name": name, "snapshot": snapshot })
        })
        .collect();

    let output = json!({ "overall": overall, "facilities": facilities });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
