//! # basin-store
//!
//! In-memory storage for Basin's monitoring state: zones, alerts, feedback
//! reports, and generated solutions.
//!
//! The store is strictly in-memory and dies with the process; there is no
//! persistence layer by design. Every process start rebuilds the same seeded
//! snapshot (12 zones, 3 alerts); alert, report, and solution ids are
//! monotonic integers assigned by the store.

pub mod error;
pub mod inputs;
pub mod seed;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use basin_core::entities::{Alert, FeedbackReport, Solution, Zone};
use basin_core::enums::ReportStatus;

use error::StoreError;
use inputs::{NewAlert, NewReport, NewSolution, ZoneUpdate};

/// Central in-memory store for all Basin monitoring state.
///
/// Shared across handlers behind an `Arc`; all methods take `&self` and
/// serialize access through one async `RwLock`.
pub struct MemStore {
    inner: RwLock<State>,
}

struct State {
    zones: HashMap<String, Zone>,
    alerts: HashMap<i64, Alert>,
    reports: HashMap<i64, FeedbackReport>,
    solutions: HashMap<i64, Solution>,
    next_alert_id: i64,
    next_report_id: i64,
    next_solution_id: i64,
}

impl MemStore {
    /// Create a store populated with the fixed seed snapshot.
    #[must_use]
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let zones = seed::seed_zones(now)
            .into_iter()
            .map(|z| (z.id.clone(), z))
            .collect();
        let alerts: HashMap<i64, Alert> = seed::seed_alerts(now)
            .into_iter()
            .map(|a| (a.id, a))
            .collect();
        let next_alert_id = i64::try_from(alerts.len()).unwrap_or(0) + 1;

        Self {
            inner: RwLock::new(State {
                zones,
                alerts,
                reports: HashMap::new(),
                solutions: HashMap::new(),
                next_alert_id,
                next_report_id: 1,
                next_solution_id: 1,
            }),
        }
    }

    /// Create an empty store (tests only need this when seed data would get
    /// in the way).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            inner: RwLock::new(State {
                zones: HashMap::new(),
                alerts: HashMap::new(),
                reports: HashMap::new(),
                solutions: HashMap::new(),
                next_alert_id: 1,
                next_report_id: 1,
                next_solution_id: 1,
            }),
        }
    }

    // -----------------------------------------------------------------------
    // Zones
    // -----------------------------------------------------------------------

    /// All zones, ordered by id.
    pub async fn zones(&self) -> Vec<Zone> {
        let state = self.inner.read().await;
        let mut zones: Vec<Zone> = state.zones.values().cloned().collect();
        zones.sort_by(|a, b| a.id.cmp(&b.id));
        zones
    }

    /// One zone by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown zone id.
    pub async fn zone(&self, id: &str) -> Result<Zone, StoreError> {
        self.inner
            .read()
            .await
            .zones
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("zone", id))
    }

    /// Apply a partial update to a zone and refresh its `last_updated`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown zone id.
    pub async fn update_zone(&self, id: &str, update: ZoneUpdate) -> Result<Zone, StoreError> {
        let mut state = self.inner.write().await;
        let zone = state
            .zones
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found("zone", id))?;

        if let Some(name) = update.name {
            zone.name = name;
        }
        if let Some(status) = update.status {
            zone.status = status;
        }
        if let Some(moisture) = update.soil_moisture {
            zone.soil_moisture = Some(moisture);
        }
        if let Some(temperature) = update.temperature {
            zone.temperature = Some(temperature);
        }
        if let Some(humidity) = update.humidity {
            zone.humidity = Some(humidity);
        }
        zone.last_updated = Utc::now();

        Ok(zone.clone())
    }

    // -----------------------------------------------------------------------
    // Alerts
    // -----------------------------------------------------------------------

    /// All unresolved alerts, newest first.
    pub async fn alerts(&self) -> Vec<Alert> {
        let state = self.inner.read().await;
        let mut alerts: Vec<Alert> = state
            .alerts
            .values()
            .filter(|a| !a.resolved)
            .cloned()
            .collect();
        alerts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        alerts
    }

    /// Unresolved alerts for one zone, newest first.
    pub async fn alerts_for_zone(&self, zone_id: &str) -> Vec<Alert> {
        let state = self.inner.read().await;
        let mut alerts: Vec<Alert> = state
            .alerts
            .values()
            .filter(|a| a.zone_id == zone_id && !a.resolved)
            .cloned()
            .collect();
        alerts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        alerts
    }

    /// Store a new alert.
    pub async fn create_alert(&self, new: NewAlert) -> Alert {
        let mut state = self.inner.write().await;
        let id = state.next_alert_id;
        state.next_alert_id += 1;

        let alert = Alert {
            id,
            zone_id: new.zone_id,
            kind: new.kind,
            criticality: new.criticality,
            title: new.title,
            description: new.description,
            emoji: new.emoji,
            resolved: false,
            created_at: Utc::now(),
        };
        state.alerts.insert(id, alert.clone());
        tracing::debug!(alert_id = id, zone_id = %alert.zone_id, "created alert");
        alert
    }

    /// Mark an alert resolved. Resolved alerts drop out of listings.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown alert id.
    pub async fn resolve_alert(&self, id: i64) -> Result<Alert, StoreError> {
        let mut state = self.inner.write().await;
        let alert = state
            .alerts
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("alert", id))?;
        alert.resolved = true;
        tracing::debug!(alert_id = id, "resolved alert");
        Ok(alert.clone())
    }

    // -----------------------------------------------------------------------
    // Feedback reports
    // -----------------------------------------------------------------------

    /// Store a new feedback report with status `pending`.
    pub async fn create_report(&self, new: NewReport) -> FeedbackReport {
        let mut state = self.inner.write().await;
        let id = state.next_report_id;
        state.next_report_id += 1;

        let report = FeedbackReport {
            id,
            zone_id: new.zone_id,
            issue_type: new.issue_type,
            criticality: new.criticality,
            description: new.description,
            desired_action: new.desired_action,
            urgency: new.urgency,
            status: ReportStatus::Pending,
            created_at: Utc::now(),
        };
        state.reports.insert(id, report.clone());
        tracing::debug!(report_id = id, zone_id = %report.zone_id, "created report");
        report
    }

    /// All reports, newest first.
    pub async fn reports(&self) -> Vec<FeedbackReport> {
        let state = self.inner.read().await;
        let mut reports: Vec<FeedbackReport> = state.reports.values().cloned().collect();
        reports.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        reports
    }

    /// One report by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown report id.
    pub async fn report(&self, id: i64) -> Result<FeedbackReport, StoreError> {
        self.inner
            .read()
            .await
            .reports
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("report", id))
    }

    /// Move a report through its status machine.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown report id, or
    /// `StoreError::InvalidTransition` if the move is not allowed from the
    /// report's current status.
    pub async fn update_report_status(
        &self,
        id: i64,
        status: ReportStatus,
    ) -> Result<FeedbackReport, StoreError> {
        let mut state = self.inner.write().await;
        let report = state
            .reports
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("report", id))?;

        if !report.status.can_transition_to(status) {
            return Err(StoreError::InvalidTransition {
                id,
                from: report.status,
                to: status,
            });
        }
        report.status = status;
        Ok(report.clone())
    }

    // -----------------------------------------------------------------------
    // Solutions
    // -----------------------------------------------------------------------

    /// Store a generated solution.
    pub async fn create_solution(&self, new: NewSolution) -> Solution {
        let mut state = self.inner.write().await;
        let id = state.next_solution_id;
        state.next_solution_id += 1;

        let solution = Solution {
            id,
            report_id: new.report_id,
            steps: new.steps,
            resources: new.resources,
            alternatives: new.alternatives,
            estimated_cost: new.estimated_cost,
            estimated_time: new.estimated_time,
            created_at: Utc::now(),
        };
        state.solutions.insert(id, solution.clone());
        solution
    }

    /// The solution generated for a report.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no solution exists for the report.
    pub async fn solution_for_report(&self, report_id: i64) -> Result<Solution, StoreError> {
        self.inner
            .read()
            .await
            .solutions
            .values()
            .find(|s| s.report_id == report_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("solution for report", report_id))
    }
}
