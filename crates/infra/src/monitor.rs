//! Dashboard refresh service.
//!
//! Reads a snapshot from the Record Store, runs the health pipeline at the
//! clock's current time, and attaches insights. Every refresh is independent
//! and replaces the previous result; nothing here is cached.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use pharmawatch_ai::{
    AiError, AiResult, AiScheduler, FacilitySnapshot, Insight, InsightGenerator, InventoryInsightJob,
    LocalAiScheduler,
};
use pharmawatch_core::FacilityId;
use pharmawatch_inventory::{HealthConfig, HealthEvaluation, InventoryFilter, InventoryItem, evaluate};

use crate::clock::Clock;
use crate::record_store::{RecordStore, RecordStoreError};

#[derive(Debug, Error)]
pub enum MonitorError {
    #[error(transparent)]
    Store(#[from] RecordStoreError),

    #[error(transparent)]
    Ai(#[from] AiError),

    #[error("no insight generator configured")]
    NoInsightGenerator,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "facility", rename_all = "camelCase")]
pub enum SnapshotScope {
    AllFacilities,
    Facility(FacilityId),
}

/// Everything a dashboard view needs for one refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub scope: SnapshotScope,
    pub evaluated_at: DateTime<Utc>,
    pub evaluation: HealthEvaluation,
    pub insights: Vec<Insight>,
}

pub struct HealthMonitor<S, C> {
    store: S,
    clock: C,
    config: HealthConfig,
    insights: Option<Arc<dyn InsightGenerator>>,
}

impl<S, C> HealthMonitor<S, C>
where
    S: RecordStore,
    C: Clock,
{
    pub fn new(store: S, clock: C, config: HealthConfig) -> Self {
        Self {
            store,
            clock,
            config,
            insights: None,
        }
    }

    pub fn with_insights(mut self, generator: impl InsightGenerator + 'static) -> Self {
        self.insights = Some(Arc::new(generator));
        self
    }

    pub fn config(&self) -> &HealthConfig {
        &self.config
    }

    pub fn snapshot_all(&self) -> Result<DashboardSnapshot, MonitorError> {
        let items = self.store.list_all()?;
        Ok(self.build(SnapshotScope::AllFacilities, &items))
    }

    pub fn snapshot_facility(&self, facility: FacilityId) -> Result<DashboardSnapshot, MonitorError> {
        let items = self.store.list(facility)?;
        Ok(self.build(SnapshotScope::Facility(facility), &items))
    }

    /// Evaluate only the records matching `filter` (inventory table view).
    pub fn snapshot_filtered(&self, filter: &InventoryFilter) -> Result<DashboardSnapshot, MonitorError> {
        let (scope, items) = match filter.facility {
            Some(facility) => (SnapshotScope::Facility(facility), self.store.list(facility)?),
            None => (SnapshotScope::AllFacilities, self.store.list_all()?),
        };
        let matching: Vec<InventoryItem> = filter.apply(&items).into_iter().cloned().collect();
        Ok(self.build(scope, &matching))
    }

    /// One snapshot per facility currently holding records.
    pub fn snapshot_each_facility(&self) -> Result<Vec<DashboardSnapshot>, MonitorError> {
        self.store
            .facilities()?
            .into_iter()
            .map(|facility| self.snapshot_facility(facility))
            .collect()
    }

    /// Run the configured generator as a facility-scoped AI job and return its
    /// raw result (for persisting alongside other AI outputs).
    pub fn facility_insight_result(&self, facility: FacilityId) -> Result<AiResult, MonitorError> {
        let generator = self.insights.clone().ok_or(MonitorError::NoInsightGenerator)?;
        let snapshot = FacilitySnapshot::new(facility, self.store.list(facility)?);
        let job = InventoryInsightJob::new(facility, snapshot, generator);
        Ok(LocalAiScheduler::for_facility(facility).run(job)?)
    }

    fn build(&self, scope: SnapshotScope, items: &[InventoryItem]) -> DashboardSnapshot {
        let now = self.clock.now();
        let evaluation = evaluate(items, now, &self.config);

        if evaluation.has_faults() {
            warn!(
                scope = ?scope,
                faults = evaluation.faults.len(),
                "inventory snapshot contains malformed records"
            );
        }

        let insights = match &self.insights {
            Some(generator) => match generator.generate_insights(items) {
                Ok(insights) => insights,
                Err(err) => {
                    // Insight failures never block the dashboard.
                    warn!(scope = ?scope, generator = generator.name(), error = %err, "insight generation failed");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        info!(
            scope = ?scope,
            total = evaluation.report.total,
            critical = evaluation.report.counts.critical,
            low_stock = evaluation.report.counts.low_stock,
            alerts = evaluation.alerts.len(),
            insights = insights.len(),
            "dashboard snapshot refreshed"
        );

        DashboardSnapshot {
            scope,
            evaluated_at: now,
            evaluation,
            insights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::fixtures::{CENTRAL_HOSPITAL, NORTHSIDE_CLINIC, sample_inventory};
    use crate::record_store::InMemoryRecordStore;
    use chrono::TimeZone;
    use pharmawatch_ai::{CannedInsights, RuleBasedInsights};
    use pharmawatch_inventory::{AlertSeverity, Category, StatusBucket};

    struct Broken;

    impl InsightGenerator for Broken {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn generate_insights(&self, _items: &[InventoryItem]) -> Result<Vec<Insight>, AiError> {
            Err(AiError::Internal("boom".to_string()))
        }
    }

    struct DownStore;

    impl RecordStore for DownStore {
        fn get(
            &self,
            _facility: FacilityId,
            _id: pharmawatch_core::ItemId,
        ) -> Result<Option<InventoryItem>, RecordStoreError> {
            Err(RecordStoreError::Unavailable("offline".to_string()))
        }

        fn upsert(&self, _item: InventoryItem) -> Result<(), RecordStoreError> {
            Err(RecordStoreError::Unavailable("offline".to_string()))
        }

        fn list(&self, _facility: FacilityId) -> Result<Vec<InventoryItem>, RecordStoreError> {
            Err(RecordStoreError::Unavailable("offline".to_string()))
        }

        fn list_all(&self) -> Result<Vec<InventoryItem>, RecordStoreError> {
            Err(RecordStoreError::Unavailable("offline".to_string()))
        }

        fn remove(&self, _facility: FacilityId, _id: pharmawatch_core::ItemId) -> Result<bool, RecordStoreError> {
            Err(RecordStoreError::Unavailable("offline".to_string()))
        }

        fn facilities(&self) -> Result<Vec<FacilityId>, RecordStoreError> {
            Err(RecordStoreError::Unavailable("offline".to_string()))
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap()
    }

    fn monitor() -> HealthMonitor<Arc<InMemoryRecordStore>, FixedClock> {
        let store = Arc::new(InMemoryRecordStore::with_items(sample_inventory(now().date_naive())));
        HealthMonitor::new(store, FixedClock::new(now()), HealthConfig::default())
    }

    #[test]
    fn snapshot_all_evaluates_every_record() {
        let snapshot = monitor().snapshot_all().unwrap();
        assert_eq!(snapshot.scope, SnapshotScope::AllFacilities);
        assert_eq!(snapshot.evaluated_at, now());
        assert_eq!(snapshot.evaluation.report.total, 12);
        assert!(snapshot.insights.is_empty());
        assert!(snapshot.evaluation.alerts.iter().all(|a| a.generated_at == now()));
    }

    #[test]
    fn facility_snapshot_only_sees_its_records() {
        let snapshot = monitor().snapshot_facility(CENTRAL_HOSPITAL).unwrap();
        assert_eq!(snapshot.scope, SnapshotScope::Facility(CENTRAL_HOSPITAL));
        assert_eq!(snapshot.evaluation.report.total, 4);
        assert!(snapshot.evaluation.alerts.iter().all(|a| a.facility == CENTRAL_HOSPITAL));
    }

    #[test]
    fn each_facility_snapshot_partitions_the_store() {
        let monitor = monitor();
        let per_facility = monitor.snapshot_each_facility().unwrap();
        assert_eq!(per_facility.len(), 3);
        let total: u64 = per_facility.iter().map(|s| s.evaluation.report.total).sum();
        assert_eq!(total, monitor.snapshot_all().unwrap().evaluation.report.total);
    }

    #[test]
    fn filtered_snapshot_evaluates_matching_rows() {
        let filter = InventoryFilter::new()
            .facility(NORTHSIDE_CLINIC)
            .category(Category::Prescription);
        let snapshot = monitor().snapshot_filtered(&filter).unwrap();
        assert_eq!(snapshot.evaluation.report.total, 2);
        assert_eq!(snapshot.evaluation.report.count(StatusBucket::Critical), 1);

        let severities: Vec<_> = snapshot.evaluation.alerts.iter().map(|a| a.severity).collect();
        assert_eq!(severities, vec![AlertSeverity::Critical, AlertSeverity::Expiring]);
    }

    #[test]
    fn refresh_picks_up_store_changes() {
        let store = Arc::new(InMemoryRecordStore::with_items(sample_inventory(now().date_naive())));
        let monitor = HealthMonitor::new(store.clone(), FixedClock::new(now()), HealthConfig::default());
        let before = monitor.snapshot_all().unwrap();

        let mut restocked = store.list(NORTHSIDE_CLINIC).unwrap()[1].clone();
        assert_eq!(restocked.name, "Salbutamol inhaler");
        restocked.quantity = 100;
        store.upsert(restocked).unwrap();

        let after = monitor.snapshot_all().unwrap();
        assert_eq!(
            after.evaluation.report.counts.critical + 1,
            before.evaluation.report.counts.critical
        );
    }

    #[test]
    fn attaches_insights_and_isolates_failures() {
        let snapshot = monitor()
            .with_insights(CannedInsights::new(3))
            .snapshot_all()
            .unwrap();
        assert_eq!(snapshot.insights.len(), 3);

        let snapshot = monitor().with_insights(Broken).snapshot_all().unwrap();
        assert!(snapshot.insights.is_empty());
        assert_eq!(snapshot.evaluation.report.total, 12);
    }

    #[test]
    fn facility_insight_result_runs_scoped_job() {
        let result = monitor()
            .with_insights(RuleBasedInsights::new())
            .facility_insight_result(CENTRAL_HOSPITAL)
            .unwrap();
        assert!(result.score >= 1.0);
        assert_eq!(result.metadata["facility_id"], CENTRAL_HOSPITAL.to_string());

        let err = monitor().facility_insight_result(CENTRAL_HOSPITAL).unwrap_err();
        assert!(matches!(err, MonitorError::NoInsightGenerator));
    }

    #[test]
    fn store_errors_propagate() {
        let monitor = HealthMonitor::new(DownStore, FixedClock::new(now()), HealthConfig::default());
        assert!(matches!(
            monitor.snapshot_all(),
            Err(MonitorError::Store(RecordStoreError::Unavailable(_)))
        ));
    }
}
