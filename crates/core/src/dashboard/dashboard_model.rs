use serde::{Deserialize, Serialize};

use crate::analytics::DerivedViews;
use crate::errors::Result;
use crate::invoices::InvoiceRecord;

/// Load state of the dashboard's record list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "message", rename_all = "camelCase")]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Result of one poll, tagged with the generation of the poller that
/// produced it.
#[derive(Debug)]
pub struct FetchOutcome {
    pub generation: u64,
    pub result: Result<Vec<InvoiceRecord>>,
}

/// Point-in-time rendering input for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub status: FetchStatus,
    pub record_count: usize,
    pub views: DerivedViews,
}
