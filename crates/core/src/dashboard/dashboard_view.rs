use chrono::NaiveDateTime;
use log::{debug, warn};

use super::dashboard_model::{DashboardSnapshot, FetchOutcome, FetchStatus};
use crate::analytics::{derive_views, DerivedViews, FilterCriteria};
use crate::constants::LOAD_FAILED_MESSAGE;
use crate::errors::Result;
use crate::invoices::InvoiceRecord;
use crate::valuation::Holdings;

/// State owned by the revenue dashboard.
///
/// Records, criteria and holdings are always replaced as whole values.
/// Poll outcomes are only applied while the view is active and only when
/// they come from the generation it was activated with.
#[derive(Debug, Default)]
pub struct DashboardView {
    records: Vec<InvoiceRecord>,
    criteria: FilterCriteria,
    holdings: Holdings,
    status: FetchStatus,
    active_generation: Option<u64>,
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the view to a poller generation. An idle view starts loading;
    /// a view that already shows data or an error keeps its status until
    /// the first outcome arrives.
    pub fn activate(&mut self, generation: u64) {
        debug!("Dashboard activated for generation {}", generation);
        self.active_generation = Some(generation);
        if self.status == FetchStatus::Idle {
            self.status = FetchStatus::Loading;
        }
    }

    /// Detaches the view and clears the filter. Any outcome still in flight
    /// will be ignored.
    pub fn deactivate(&mut self) {
        self.active_generation = None;
        self.reset_criteria();
        if self.status.is_loading() {
            self.status = FetchStatus::Idle;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active_generation.is_some()
    }

    /// Applies a poll outcome. Returns `false` when the outcome is stale.
    pub fn apply(&mut self, outcome: FetchOutcome) -> bool {
        if self.active_generation != Some(outcome.generation) {
            debug!(
                "Discarding stale fetch outcome (generation {}, active {:?})",
                outcome.generation, self.active_generation
            );
            return false;
        }
        self.apply_result(outcome.result);
        true
    }

    /// Applies a fetch result directly. A failure keeps the records already
    /// on screen.
    pub fn apply_result(&mut self, result: Result<Vec<InvoiceRecord>>) {
        match result {
            Ok(records) => {
                debug!("Dashboard received {} invoices", records.len());
                self.records = records;
                self.status = FetchStatus::Success;
            }
            Err(e) => {
                warn!("Failed to load invoices: {}", e);
                self.status = FetchStatus::Error(LOAD_FAILED_MESSAGE.to_string());
            }
        }
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub fn reset_criteria(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    pub fn set_holdings(&mut self, holdings: Holdings) {
        self.holdings = holdings;
    }

    pub fn records(&self) -> &[InvoiceRecord] {
        &self.records
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn holdings(&self) -> &Holdings {
        &self.holdings
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn views(&self, now: NaiveDateTime) -> DerivedViews {
        derive_views(&self.records, &self.criteria, &self.holdings, now)
    }

    pub fn snapshot(&self, now: NaiveDateTime) -> DashboardSnapshot {
        DashboardSnapshot {
            status: self.status.clone(),
            record_count: self.records.len(),
            views: self.views(now),
        }
    }
}
