use super::order::OrderRecord;
use crate::error::Result;
use async_trait::async_trait;

/// Persists accepted orders. A failed save aborts the order.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn save(&self, record: OrderRecord) -> Result<()>;
    async fn all(&self) -> Result<Vec<OrderRecord>>;
}

/// Delivers the confirmation message to the customer.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()>;
}

/// Append-only sink for the one-line order summaries.
#[async_trait]
pub trait OrderLog: Send + Sync {
    async fn append(&self, line: &str) -> Result<()>;
}

pub type OrderStoreBox = Box<dyn OrderStore>;
pub type NotifierBox = Box<dyn Notifier>;
pub type OrderLogBox = Box<dyn OrderLog>;
