//! Cancellable polling of the invoice record source.

use log::{debug, info};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::dashboard_model::FetchOutcome;
use crate::invoices::{InvoiceRecordSource, RecordScope};

/// Fetches records on a fixed interval and forwards each result, tagged
/// with the current generation, to a channel.
///
/// Every `start` and `stop` bumps the generation. A fetch that completes
/// after its generation has been superseded is dropped without being sent.
pub struct RecordPoller {
    source: Arc<dyn InvoiceRecordSource>,
    scope: RecordScope,
    interval: Duration,
    generation: Arc<AtomicU64>,
    handle: Option<JoinHandle<()>>,
}

impl RecordPoller {
    pub fn new(source: Arc<dyn InvoiceRecordSource>, scope: RecordScope, interval: Duration) -> Self {
        Self {
            source,
            scope,
            interval,
            generation: Arc::new(AtomicU64::new(0)),
            handle: None,
        }
    }

    /// Starts polling, replacing any running loop. The first fetch happens
    /// immediately. Returns the generation outcomes will carry.
    pub fn start(&mut self, tx: mpsc::UnboundedSender<FetchOutcome>) -> u64 {
        self.stop();

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let current = Arc::clone(&self.generation);
        let source = Arc::clone(&self.source);
        let scope = self.scope.clone();
        let period = self.interval;

        info!(
            "Starting invoice poller (generation {}, every {:?})",
            generation, period
        );

        self.handle = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if current.load(Ordering::SeqCst) != generation {
                    break;
                }

                let result = source.list_invoices(&scope).await;

                if current.load(Ordering::SeqCst) != generation {
                    debug!("Poller generation {} superseded, dropping result", generation);
                    break;
                }
                if tx.send(FetchOutcome { generation, result }).is_err() {
                    debug!("Dashboard channel closed, stopping poller");
                    break;
                }
            }
        }));

        generation
    }

    /// Cancels the loop. Results of a fetch in flight are never delivered.
    pub fn stop(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            debug!("Stopping invoice poller");
            handle.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}

impl Drop for RecordPoller {
    fn drop(&mut self) {
        self.stop();
    }
}
