use crate::domain::order::OrderRecord;
use crate::domain::ports::OrderStore;
use crate::error::{OrderError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, IteratorMode, Options};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Column Family for storing accepted orders.
pub const CF_ORDERS: &str = "orders";

/// A persistent order store backed by RocksDB.
///
/// Orders are kept in their own Column Family as JSON values under big-endian
/// sequence keys, so iteration returns them in the order they were saved.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDbOrderStore {
    db: Arc<DB>,
    next_key: Arc<AtomicU64>,
}

impl RocksDbOrderStore {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Sequence numbering resumes after the last order already in the database.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_orders = ColumnFamilyDescriptor::new(CF_ORDERS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_orders])?;

        let next_key = {
            let cf = db.cf_handle(CF_ORDERS).ok_or_else(missing_cf)?;
            match db.iterator_cf(&cf, IteratorMode::End).next() {
                Some(item) => {
                    let (key, _value) = item?;
                    decode_key(&key)? + 1
                }
                None => 0,
            }
        };

        Ok(Self {
            db: Arc::new(db),
            next_key: Arc::new(AtomicU64::new(next_key)),
        })
    }
}

fn missing_cf() -> OrderError {
    OrderError::InternalError(Box::new(std::io::Error::other(
        "Orders column family not found",
    )))
}

fn decode_key(key: &[u8]) -> Result<u64> {
    let bytes: [u8; 8] = key.try_into().map_err(|_| {
        OrderError::InternalError(Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Unexpected order key length: {}", key.len()),
        )))
    })?;
    Ok(u64::from_be_bytes(bytes))
}

#[async_trait]
impl OrderStore for RocksDbOrderStore {
    async fn save(&self, record: OrderRecord) -> Result<()> {
        let cf = self.db.cf_handle(CF_ORDERS).ok_or_else(missing_cf)?;

        let value = serde_json::to_vec(&record)?;
        let key = self.next_key.fetch_add(1, Ordering::SeqCst).to_be_bytes();
        self.db.put_cf(&cf, key, value)?;

        Ok(())
    }

    async fn all(&self) -> Result<Vec<OrderRecord>> {
        let cf = self.db.cf_handle(CF_ORDERS).ok_or_else(missing_cf)?;

        let mut orders = Vec::new();
        for item in self.db.iterator_cf(&cf, IteratorMode::Start) {
            let (_key, value) = item?;
            orders.push(serde_json::from_slice(&value)?);
        }

        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{OrderItem, OrderRequest, calculate_order_totals};
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    fn record(name: &str) -> OrderRecord {
        let request = OrderRequest {
            customer_name: name.to_string(),
            customer_email: "cliente@test.com".to_string(),
            is_vip_customer: true,
            items: vec![OrderItem::new("Prodotto", dec!(100), 1)],
        };
        OrderRecord::pending(&request, calculate_order_totals(&request.items, true))
    }

    #[tokio::test]
    async fn test_rocksdb_open_cf() {
        let dir = tempdir().unwrap();
        let store = RocksDbOrderStore::open(dir.path()).expect("Failed to open RocksDB");
        assert!(store.db.cf_handle(CF_ORDERS).is_some());
    }

    #[tokio::test]
    async fn test_rocksdb_order_store() {
        let dir = tempdir().unwrap();
        let store = RocksDbOrderStore::open(dir.path()).unwrap();

        store.save(record("Mario")).await.unwrap();
        store.save(record("Luigi")).await.unwrap();

        let all = store.all().await.unwrap();
        assert_eq!(all, vec![record("Mario"), record("Luigi")]);
    }

    #[tokio::test]
    async fn test_rocksdb_reopen_keeps_sequence() {
        let dir = tempdir().unwrap();
        {
            let store = RocksDbOrderStore::open(dir.path()).unwrap();
            store.save(record("Mario")).await.unwrap();
        }

        let store = RocksDbOrderStore::open(dir.path()).unwrap();
        store.save(record("Luigi")).await.unwrap();

        let names: Vec<String> = store
            .all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.customer_name)
            .collect();
        assert_eq!(names, vec!["Mario".to_string(), "Luigi".to_string()]);
    }
}
