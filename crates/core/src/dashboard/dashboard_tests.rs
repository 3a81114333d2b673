use super::*;
use crate::analytics::{FilterCriteria, MetalFilter};
use crate::constants::LOAD_FAILED_MESSAGE;
use crate::errors::{Result, TransportError};
use crate::invoices::{InvoiceRecord, InvoiceRecordSource, RecordScope};
use crate::utils::time_utils::parse_invoice_date;
use async_trait::async_trait;
use rust_decimal_macros::dec;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;

// ============================================================================
// Mock Implementations
// ============================================================================

#[derive(Default)]
struct MockSource {
    records: Vec<InvoiceRecord>,
    fail: bool,
    delay: Option<Duration>,
    calls: AtomicUsize,
    scopes: Mutex<Vec<RecordScope>>,
}

#[async_trait]
impl InvoiceRecordSource for MockSource {
    async fn list_invoices(&self, scope: &RecordScope) -> Result<Vec<InvoiceRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.scopes.lock().unwrap().push(scope.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(TransportError::new(None, "connection refused").into());
        }
        Ok(self.records.clone())
    }
}

fn gold(id: &str, total: rust_decimal::Decimal) -> InvoiceRecord {
    InvoiceRecord {
        id: Some(id.to_string()),
        invoice_date: Some("2024-01-05".to_string()),
        metal_type: Some("GOLD24".to_string()),
        total_amount: Some(total),
        ..Default::default()
    }
}

fn now() -> chrono::NaiveDateTime {
    parse_invoice_date("2024-01-10").unwrap()
}

// ============================================================================
// View state
// ============================================================================

#[test]
fn activation_marks_view_loading() {
    let mut view = DashboardView::new();
    assert_eq!(view.status(), &FetchStatus::Idle);

    view.activate(1);

    assert!(view.is_active());
    assert!(view.status().is_loading());
}

#[test]
fn reactivation_keeps_previous_status() {
    let mut view = DashboardView::new();
    view.apply_result(Err(TransportError::new(None, "offline").into()));

    view.activate(4);

    assert_eq!(view.status().error_message(), Some(LOAD_FAILED_MESSAGE));
}

#[test]
fn outcome_from_active_generation_replaces_records() {
    let mut view = DashboardView::new();
    view.activate(3);

    let applied = view.apply(FetchOutcome {
        generation: 3,
        result: Ok(vec![gold("1", dec!(100))]),
    });

    assert!(applied);
    assert_eq!(view.status(), &FetchStatus::Success);
    assert_eq!(view.records().len(), 1);
}

#[test]
fn stale_outcome_is_discarded() {
    let mut view = DashboardView::new();
    view.activate(2);

    let applied = view.apply(FetchOutcome {
        generation: 1,
        result: Ok(vec![gold("old", dec!(1))]),
    });

    assert!(!applied);
    assert!(view.records().is_empty());
    assert!(view.status().is_loading());
}

#[test]
fn outcome_after_deactivation_is_discarded() {
    let mut view = DashboardView::new();
    view.activate(1);
    view.deactivate();

    let applied = view.apply(FetchOutcome {
        generation: 1,
        result: Ok(vec![gold("late", dec!(1))]),
    });

    assert!(!applied);
    assert!(view.records().is_empty());
    assert_eq!(view.status(), &FetchStatus::Idle);
}

#[test]
fn deactivation_clears_filter_criteria() {
    let mut view = DashboardView::new();
    view.activate(1);
    view.set_criteria(FilterCriteria::from_inputs(
        "2024-01-01",
        "2024-01-31",
        MetalFilter::Gold,
    ));

    view.deactivate();

    assert_eq!(view.criteria(), &FilterCriteria::default());
}

#[test]
fn failure_keeps_previous_records() {
    let mut view = DashboardView::new();
    view.apply_result(Ok(vec![gold("1", dec!(100)), gold("2", dec!(50))]));

    view.apply_result(Err(TransportError::new(Some(503), "Service Unavailable").into()));

    assert_eq!(view.records().len(), 2);
    assert_eq!(view.status().error_message(), Some(LOAD_FAILED_MESSAGE));
    assert_eq!(view.snapshot(now()).views.kpi.total_spend, dec!(150));
}

#[test]
fn initial_failure_leaves_view_empty() {
    let mut view = DashboardView::new();
    view.activate(1);

    view.apply(FetchOutcome {
        generation: 1,
        result: Err(TransportError::new(None, "timeout").into()),
    });

    let snapshot = view.snapshot(now());
    assert_eq!(snapshot.record_count, 0);
    assert_eq!(snapshot.views.kpi.count, 0);
    assert_eq!(snapshot.status, FetchStatus::Error(LOAD_FAILED_MESSAGE.to_string()));
}

#[test]
fn criteria_changes_recompute_views() {
    let mut view = DashboardView::new();
    let mut silver = gold("s", dec!(40));
    silver.metal_type = Some("SILVER24".to_string());
    view.apply_result(Ok(vec![gold("g", dec!(100)), silver]));

    view.set_criteria(FilterCriteria {
        metal_filter: MetalFilter::Silver,
        ..Default::default()
    });
    assert_eq!(view.views(now()).kpi.total_spend, dec!(40));

    view.reset_criteria();
    assert_eq!(view.views(now()).kpi.total_spend, dec!(140));
}

// ============================================================================
// Poller
// ============================================================================

#[tokio::test(start_paused = true)]
async fn poller_fetches_immediately_then_on_interval() {
    let source = Arc::new(MockSource {
        records: vec![gold("1", dec!(10))],
        ..Default::default()
    });
    let mut poller = RecordPoller::new(
        source.clone(),
        RecordScope::User("42".to_string()),
        Duration::from_secs(10),
    );
    let (tx, mut rx) = mpsc::unbounded_channel();

    let generation = poller.start(tx);

    for _ in 0..3 {
        let outcome = rx.recv().await.unwrap();
        assert_eq!(outcome.generation, generation);
        assert_eq!(outcome.result.unwrap().len(), 1);
    }
    assert_eq!(source.calls.load(Ordering::SeqCst), 3);
    assert_eq!(
        source.scopes.lock().unwrap()[0],
        RecordScope::User("42".to_string())
    );
    assert!(poller.is_running());
}

#[tokio::test(start_paused = true)]
async fn stopped_poller_delivers_nothing_more() {
    let source = Arc::new(MockSource::default());
    let mut poller = RecordPoller::new(source.clone(), RecordScope::All, Duration::from_secs(10));
    let (tx, mut rx) = mpsc::unbounded_channel();

    poller.start(tx);
    assert!(rx.recv().await.is_some());

    poller.stop();

    assert!(rx.recv().await.is_none());
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn in_flight_fetch_is_dropped_on_stop() {
    let source = Arc::new(MockSource {
        records: vec![gold("1", dec!(10))],
        delay: Some(Duration::from_secs(5)),
        ..Default::default()
    });
    let mut poller = RecordPoller::new(source.clone(), RecordScope::All, Duration::from_secs(10));
    let (tx, mut rx) = mpsc::unbounded_channel();

    poller.start(tx);
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);

    poller.stop();

    assert!(rx.recv().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn restart_supersedes_previous_generation() {
    let source = Arc::new(MockSource {
        records: vec![gold("1", dec!(10))],
        ..Default::default()
    });
    let mut poller = RecordPoller::new(source, RecordScope::All, Duration::from_secs(10));
    let mut view = DashboardView::new();

    let (first_tx, _first_rx) = mpsc::unbounded_channel();
    let first = poller.start(first_tx);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let second = poller.start(tx);
    assert!(second > first);

    view.activate(second);
    let outcome = rx.recv().await.unwrap();
    assert!(view.apply(outcome));
    assert!(!view.apply(FetchOutcome {
        generation: first,
        result: Ok(Vec::new()),
    }));
    assert_eq!(view.records().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn fetch_failures_are_forwarded_not_fatal() {
    let source = Arc::new(MockSource {
        fail: true,
        ..Default::default()
    });
    let mut poller = RecordPoller::new(source.clone(), RecordScope::All, Duration::from_secs(10));
    let (tx, mut rx) = mpsc::unbounded_channel();

    poller.start(tx);

    assert!(rx.recv().await.unwrap().result.is_err());
    assert!(rx.recv().await.unwrap().result.is_err());
    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
}
