use crate::clients::{OrderItemClient, ProductClient};
use crate::realtime::{Collection, RealtimeIngest};
use thiserror::Error;
use tracing::{error, info};

/// Mailbox size used by [`BoardSystem::new`].
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// An actor task ended abnormally during shutdown.
#[derive(Debug, Error)]
#[error("Actor task failed: {0}")]
pub struct ShutdownError(#[from] tokio::task::JoinError);

/// Runs the product and order item caches and hands out their clients.
///
/// # Architecture
///
/// - **Product Actor**: caches the catalog (`Context = ()`)
/// - **OrderItem Actor**: caches order items and performs status changes;
///   holds a `ProductClient` to inline product names (`Context = ProductClient`)
///
/// # Example
///
/// ```ignore
/// let system = BoardSystem::new();
/// let ingest = system.ingest(Collection::OrderItems);
/// ingest.apply_message(&frame).await?;
///
/// let board = system.order_item_client.board().await?;
///
/// drop(ingest);
/// system.shutdown().await?;
/// ```
pub struct BoardSystem {
    pub order_item_client: OrderItemClient,
    pub product_client: ProductClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl BoardSystem {
    /// Starts both actors. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Starts both actors with `capacity` slots in each mailbox; `0` is raised to `1`.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (product_actor, product_client) = crate::product_actor::new(capacity);
        let (item_actor, item_client) = crate::order_item_actor::new(capacity);

        let product_client = ProductClient::new(product_client);
        let product_handle = tokio::spawn(product_actor.run(()));
        let item_handle = tokio::spawn(item_actor.run(product_client.clone()));

        Self {
            order_item_client: OrderItemClient::new(item_client, product_client.clone()),
            product_client,
            handles: vec![item_handle, product_handle],
        }
    }

    /// A realtime ingest writing into this system's caches.
    ///
    /// The ingest holds client clones; drop it before [`shutdown`](Self::shutdown)
    /// or the actors will not see their channels close.
    pub fn ingest(&self, default_collection: Collection) -> RealtimeIngest {
        RealtimeIngest::new(
            self.order_item_client.clone(),
            self.product_client.clone(),
            default_collection,
        )
    }

    /// Drops the clients and waits for both actors to stop.
    ///
    /// The order item actor stops first and releases its `ProductClient`,
    /// which lets the product actor stop as well.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down board...");
        drop(self.order_item_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("Board shutdown complete.");
        Ok(())
    }
}

impl Default for BoardSystem {
    fn default() -> Self {
        Self::new()
    }
}
