use std::sync::Arc;

use tracing::{error, info};

use crate::chef_view::{self, PollerHandle};
use crate::clients::OrderClient;
use crate::config::ComandaConfig;
use crate::urgency::{Clock, SystemClock};

/// The runtime orchestrator for the comanda subsystem.
///
/// `ComandaSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the store actor and the
///   chef view poller
/// - **Dependency Wiring**: handing the shared clock and configuration to the
///   client and the poller
///
/// # Architecture
///
/// Two tasks run under the system:
/// - **Order store actor**: owns the persisted orders, processes requests
///   sequentially
/// - **Chef view poller**: refreshes the display snapshot on the configured
///   cadence
///
/// # Example
///
/// ```ignore
/// let system = ComandaSystem::new(ComandaConfig::default());
///
/// let order = system.orders.create_order(new_order).await?;
/// let snapshot = system.chef_view.snapshot();
///
/// system.shutdown().await?;
/// ```
pub struct ComandaSystem {
    /// Client for the order store actor.
    pub orders: OrderClient,

    /// Handle to the chef view poller.
    pub chef_view: PollerHandle,

    /// Task handle for the store actor (used for graceful shutdown).
    store_handle: tokio::task::JoinHandle<()>,
}

impl ComandaSystem {
    /// Creates and starts the system against the system clock.
    pub fn new(config: ComandaConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates and starts the system with an injected clock.
    ///
    /// Tests pass a [`ManualClock`](crate::urgency::ManualClock) here to
    /// drive expiration deterministically.
    pub fn with_clock(config: ComandaConfig, clock: Arc<dyn Clock>) -> Self {
        let (store_actor, orders) = crate::order_actor::new(config.clone(), clock.clone());
        let store_handle = tokio::spawn(store_actor.run());

        let chef_view = chef_view::spawn(Arc::new(orders.clone()), clock, config);

        Self {
            orders,
            chef_view,
            store_handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Stops the poller first (its client clone is released when the task
    /// exits), then drops the remaining client so the store actor's channel
    /// closes and its loop drains.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if both tasks shut down cleanly
    /// - `Err(String)` if the store actor task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        self.chef_view.shutdown().await;
        drop(self.orders);

        if let Err(e) = self.store_handle.await {
            error!("Store actor task failed: {:?}", e);
            return Err(format!("Store actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
