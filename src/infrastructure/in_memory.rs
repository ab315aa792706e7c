use crate::domain::notification::ConfirmationEmail;
use crate::domain::order::OrderRecord;
use crate::domain::ports::{Notifier, OrderLog, OrderStore};
use crate::error::{OrderError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for accepted orders.
///
/// Uses `Arc<RwLock<Vec<OrderRecord>>>` so clones share the same orders, which lets
/// a test keep a handle while the processor owns a boxed copy.
#[derive(Default, Clone)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<Vec<OrderRecord>>>,
    fail_next: Arc<RwLock<bool>>,
}

impl InMemoryOrderStore {
    /// Creates a new, empty in-memory order store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `save` fail without storing anything.
    pub async fn fail_next(&self) {
        *self.fail_next.write().await = true;
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn save(&self, record: OrderRecord) -> Result<()> {
        let mut fail_next = self.fail_next.write().await;
        if *fail_next {
            *fail_next = false;
            return Err(OrderError::Persistence("order store unavailable".to_string()));
        }

        self.orders.write().await.push(record);
        Ok(())
    }

    async fn all(&self) -> Result<Vec<OrderRecord>> {
        Ok(self.orders.read().await.clone())
    }
}

/// Records every message instead of delivering it.
#[derive(Default, Clone)]
pub struct InMemoryNotifier {
    sent: Arc<RwLock<Vec<ConfirmationEmail>>>,
    fail_next: Arc<RwLock<bool>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `send` fail without recording the message.
    pub async fn fail_next(&self) {
        *self.fail_next.write().await = true;
    }

    pub async fn sent(&self) -> Vec<ConfirmationEmail> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl Notifier for InMemoryNotifier {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        let mut fail_next = self.fail_next.write().await;
        if *fail_next {
            *fail_next = false;
            return Err(OrderError::Notification("mail server unavailable".to_string()));
        }

        self.sent.write().await.push(ConfirmationEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}

/// Keeps order log lines in memory.
#[derive(Default, Clone)]
pub struct InMemoryOrderLog {
    lines: Arc<RwLock<Vec<String>>>,
    fail_next: Arc<RwLock<bool>>,
}

impl InMemoryOrderLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn fail_next(&self) {
        *self.fail_next.write().await = true;
    }

    pub async fn lines(&self) -> Vec<String> {
        self.lines.read().await.clone()
    }
}

#[async_trait]
impl OrderLog for InMemoryOrderLog {
    async fn append(&self, line: &str) -> Result<()> {
        let mut fail_next = self.fail_next.write().await;
        if *fail_next {
            *fail_next = false;
            return Err(OrderError::Log(std::io::Error::other("log sink unavailable")));
        }

        self.lines.write().await.push(line.to_string());
        Ok(())
    }
}
