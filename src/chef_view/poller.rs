//! Single-flight polling loop keeping the chef view fresh.
//!
//! The poller is one Tokio task that owns the snapshot. Refreshes run inline
//! in its select loop, so two can never be in flight at once; interval ticks
//! that would fire mid-refresh are skipped, and manual refresh requests that
//! arrive mid-refresh are drained afterwards rather than queued. A failed
//! refresh keeps the last good snapshot published, marked stale, and the
//! timer keeps running.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, watch};
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use crate::chef_view::projection::{project, ChefView};
use crate::clients::OrderClient;
use crate::config::ComandaConfig;
use crate::model::Order;
use crate::order_actor::OrderError;
use crate::urgency::{evaluate_expiration, Clock};

/// What the poller needs from the order store: a full listing, and the write
/// path for the automatic `Expired` transition.
///
/// [`OrderClient`] is the production implementation; tests substitute doubles
/// to script failures and delays.
#[async_trait]
pub trait OrderSource: Send + Sync + 'static {
    async fn fetch(&self) -> Result<Vec<Order>, OrderError>;
    async fn mark_expired(&self, id: String) -> Result<Order, OrderError>;
}

#[async_trait]
impl OrderSource for OrderClient {
    async fn fetch(&self) -> Result<Vec<Order>, OrderError> {
        self.list_orders().await
    }

    async fn mark_expired(&self, id: String) -> Result<Order, OrderError> {
        self.mark_order_expired(id).await
    }
}

/// The published chef view plus freshness metadata.
///
/// `stale` is set when the latest refresh attempt failed (or none has
/// succeeded yet); the embedded view is then the last good one, not the
/// current store state.
#[derive(Debug, Clone)]
pub struct ChefViewSnapshot {
    pub view: ChefView,
    pub refreshed_at: Option<DateTime<Utc>>,
    pub stale: bool,
    pub last_error: Option<String>,
}

impl Default for ChefViewSnapshot {
    fn default() -> Self {
        Self {
            view: ChefView::default(),
            refreshed_at: None,
            stale: true,
            last_error: None,
        }
    }
}

/// Handle to a running poller task.
///
/// Dropping the handle stops the loop; [`shutdown`](PollerHandle::shutdown)
/// stops it and waits for the task to finish. Either way no further refresh
/// is started, and a refresh already in flight has its result discarded.
pub struct PollerHandle {
    snapshot_rx: watch::Receiver<ChefViewSnapshot>,
    refresh_tx: mpsc::Sender<()>,
    shutdown_tx: watch::Sender<bool>,
    task: tokio::task::JoinHandle<()>,
}

impl PollerHandle {
    /// Current snapshot, cloned out of the watch channel.
    pub fn snapshot(&self) -> ChefViewSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// A receiver the presentation layer can await change notifications on.
    pub fn subscribe(&self) -> watch::Receiver<ChefViewSnapshot> {
        self.snapshot_rx.clone()
    }

    /// Requests a refresh outside the timer cadence.
    ///
    /// Single-flight still holds: if a refresh is already in flight or
    /// requested, this one is suppressed rather than queued.
    pub fn refresh_now(&self) {
        let _ = self.refresh_tx.try_send(());
    }

    /// Stops the loop and waits for the task to exit.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(true);
        let _ = self.task.await;
    }
}

/// Spawns the polling task and returns its handle.
pub fn spawn<S: OrderSource>(
    source: Arc<S>,
    clock: Arc<dyn Clock>,
    config: ComandaConfig,
) -> PollerHandle {
    let (snapshot_tx, snapshot_rx) = watch::channel(ChefViewSnapshot::default());
    let (refresh_tx, mut refresh_rx) = mpsc::channel::<()>(1);
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let task = tokio::spawn(async move {
        info!(interval_ms = config.poll_interval_ms, "Chef view poller started");
        let mut interval = tokio::time::interval(config.poll_interval());
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut last = ChefViewSnapshot::default();

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => break,
                request = refresh_rx.recv() => {
                    if request.is_none() {
                        break;
                    }
                }
                _ = interval.tick() => {}
            }

            let snapshot = refresh(source.as_ref(), clock.as_ref(), &config, &last).await;

            // The loop was canceled while this refresh was in flight; its
            // result must not be published.
            if *shutdown_rx.borrow() {
                break;
            }

            last = snapshot.clone();
            let _ = snapshot_tx.send(snapshot);

            // Manual requests that arrived during the refresh are duplicates
            // of work just done; suppress them.
            while refresh_rx.try_recv().is_ok() {}
        }

        info!("Chef view poller stopped");
    });

    PollerHandle {
        snapshot_rx,
        refresh_tx,
        shutdown_tx,
        task,
    }
}

/// One refresh: fetch, persist overdue expirations, project.
async fn refresh<S: OrderSource>(
    source: &S,
    clock: &dyn Clock,
    config: &ComandaConfig,
    last: &ChefViewSnapshot,
) -> ChefViewSnapshot {
    let now = clock.now();
    match source.fetch().await {
        Ok(mut orders) => {
            for order in orders.iter_mut() {
                if evaluate_expiration(order, now).is_some() {
                    match source.mark_expired(order.id.clone()).await {
                        Ok(updated) => *order = updated,
                        Err(e) => {
                            // The view still tags it expired; the persisted
                            // status catches up on a later sweep.
                            warn!(id = %order.id, error = %e, "Failed to persist expiration");
                        }
                    }
                }
            }
            ChefViewSnapshot {
                view: project(&orders, now, config),
                refreshed_at: Some(now),
                stale: false,
                last_error: None,
            }
        }
        Err(e) => {
            warn!(error = %e, "Refresh failed, keeping last snapshot");
            ChefViewSnapshot {
                stale: true,
                last_error: Some(e.to_string()),
                ..last.clone()
            }
        }
    }
}
