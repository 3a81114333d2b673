//! Dashboard module - fetch status, view state and the record poller.

mod dashboard_model;
mod dashboard_view;
mod poller;

pub use dashboard_model::{DashboardSnapshot, FetchOutcome, FetchStatus};
pub use dashboard_view::DashboardView;
pub use poller::RecordPoller;

#[cfg(test)]
mod dashboard_tests;
