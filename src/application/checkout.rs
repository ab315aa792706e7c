use crate::domain::notification::{ConfirmationEmail, order_log_line};
use crate::domain::order::{OrderRecord, OrderRequest, calculate_order_totals, validate_order};
use crate::domain::ports::{NotifierBox, OrderLogBox, OrderStoreBox};
use crate::error::{OrderError, Result};
use tracing::{error, info, warn};

/// Takes an order request through validation, pricing, storage, confirmation and logging.
///
/// `OrderProcessor` owns its collaborators and awaits each of them in turn, so a
/// later stage never starts before the previous one has finished.
pub struct OrderProcessor {
    store: OrderStoreBox,
    notifier: NotifierBox,
    order_log: OrderLogBox,
}

impl OrderProcessor {
    /// Creates a new `OrderProcessor`.
    ///
    /// # Arguments
    ///
    /// * `store` - Where accepted orders are persisted.
    /// * `notifier` - Sends the confirmation to the customer.
    /// * `order_log` - Receives one summary line per accepted order.
    pub fn new(store: OrderStoreBox, notifier: NotifierBox, order_log: OrderLogBox) -> Self {
        Self {
            store,
            notifier,
            order_log,
        }
    }

    /// Processes one order request.
    ///
    /// Returns the stored record, or the reason no order was produced. Only a
    /// validation or a storage failure is an error; a failed confirmation or log
    /// write is reported as a warning and the order stays accepted.
    pub async fn process(&self, request: OrderRequest) -> Result<OrderRecord> {
        if let Err(e) = validate_order(&request) {
            error!(error = %e, "Order rejected");
            return Err(e.into());
        }

        let totals = calculate_order_totals(&request.items, request.is_vip_customer);
        info!(
            subtotal = %totals.subtotal,
            tax = %totals.tax,
            total = %totals.total,
            vip = request.is_vip_customer,
            "Totals computed"
        );

        let record = OrderRecord::pending(&request, totals);
        if let Err(e) = self.store.save(record.clone()).await {
            error!(error = %e, "Order could not be saved");
            return Err(match e {
                OrderError::Persistence(reason) => OrderError::Persistence(reason),
                other => OrderError::Persistence(other.to_string()),
            });
        }
        info!(customer = %record.customer_name, "Order saved");

        self.send_confirmation(&record).await;
        self.append_to_log(&record).await;

        Ok(record)
    }

    async fn send_confirmation(&self, record: &OrderRecord) {
        let email = ConfirmationEmail::for_order(record);
        match self
            .notifier
            .send(&email.to, &email.subject, &email.body)
            .await
        {
            Ok(()) => info!(to = %email.to, "Confirmation sent"),
            Err(e) => warn!(to = %email.to, error = %e, "Confirmation could not be sent"),
        }
    }

    async fn append_to_log(&self, record: &OrderRecord) {
        match self.order_log.append(&order_log_line(record)).await {
            Ok(()) => info!("Order logged"),
            Err(e) => warn!(error = %e, "Order could not be logged"),
        }
    }

    /// Consumes the processor and returns every order held by its store.
    pub async fn into_orders(self) -> Result<Vec<OrderRecord>> {
        self.store.all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Money;
    use crate::domain::order::{OrderItem, OrderStatus};
    use crate::domain::ports::OrderStore;
    use crate::error::ValidationError;
    use crate::infrastructure::in_memory::{InMemoryNotifier, InMemoryOrderLog, InMemoryOrderStore};
    use rust_decimal_macros::dec;

    struct Harness {
        store: InMemoryOrderStore,
        notifier: InMemoryNotifier,
        order_log: InMemoryOrderLog,
        processor: OrderProcessor,
    }

    fn harness() -> Harness {
        let store = InMemoryOrderStore::new();
        let notifier = InMemoryNotifier::new();
        let order_log = InMemoryOrderLog::new();
        let processor = OrderProcessor::new(
            Box::new(store.clone()),
            Box::new(notifier.clone()),
            Box::new(order_log.clone()),
        );
        Harness {
            store,
            notifier,
            order_log,
            processor,
        }
    }

    fn order(vip: bool, items: Vec<OrderItem>) -> OrderRequest {
        OrderRequest {
            customer_name: "Mario".to_string(),
            customer_email: "mario@test.com".to_string(),
            is_vip_customer: vip,
            items,
        }
    }

    async fn assert_no_side_effects(h: &Harness) {
        assert!(h.store.all().await.unwrap().is_empty());
        assert!(h.notifier.sent().await.is_empty());
        assert!(h.order_log.lines().await.is_empty());
    }

    #[tokio::test]
    async fn test_accepted_order_runs_every_stage() {
        let h = harness();
        let record = h
            .processor
            .process(order(false, vec![OrderItem::new("Prodotto", dec!(50), 1)]))
            .await
            .unwrap();

        assert_eq!(record.total, Money::new(dec!(61)));
        assert_eq!(record.status, OrderStatus::Pending);
        assert_eq!(h.store.all().await.unwrap(), vec![record.clone()]);

        let sent = h.notifier.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Ordine confermato - €61.00");

        assert_eq!(
            h.order_log.lines().await,
            vec!["[ORDINE] Mario - €61.00 - VIP: false\n".to_string()]
        );
    }

    #[tokio::test]
    async fn test_rejections_have_no_side_effects() {
        let cases = vec![
            (order(false, vec![]), ValidationError::EmptyOrder),
            (
                OrderRequest {
                    customer_email: String::new(),
                    ..order(false, vec![OrderItem::new("Prodotto", dec!(10), 1)])
                },
                ValidationError::MissingEmail,
            ),
            (
                OrderRequest {
                    customer_name: String::new(),
                    ..order(false, vec![OrderItem::new("Prodotto", dec!(10), 1)])
                },
                ValidationError::MissingName,
            ),
            (
                order(false, vec![OrderItem::new("Gratis", dec!(0), 1)]),
                ValidationError::InvalidPrice("Gratis".to_string()),
            ),
            (
                order(false, vec![OrderItem::new("Niente", dec!(10), 0)]),
                ValidationError::InvalidQuantity("Niente".to_string()),
            ),
        ];

        for (request, expected) in cases {
            let h = harness();
            let result = h.processor.process(request).await;
            match result {
                Err(OrderError::Validation(actual)) => assert_eq!(actual, expected),
                other => panic!("expected validation error, got {:?}", other),
            }
            assert_no_side_effects(&h).await;
        }
    }

    #[tokio::test]
    async fn test_vip_order_totals() {
        let h = harness();
        let record = h
            .processor
            .process(order(true, vec![OrderItem::new("Prodotto", dec!(100), 1)]))
            .await
            .unwrap();

        assert!(record.vip);
        assert_eq!(record.subtotal, Money::new(dec!(85)));
        assert_eq!(record.tax, Money::new(dec!(18.7)));
        assert_eq!(record.total, Money::new(dec!(103.7)));
    }

    #[tokio::test]
    async fn test_large_order_totals() {
        let h = harness();
        let record = h
            .processor
            .process(order(false, vec![OrderItem::new("Prodotto Caro", dec!(600), 1)]))
            .await
            .unwrap();

        assert_eq!(record.subtotal, Money::new(dec!(540)));
        assert_eq!(record.tax, Money::new(dec!(118.8)));
        assert_eq!(record.total, Money::new(dec!(658.8)));
    }

    #[tokio::test]
    async fn test_store_failure_aborts_before_notification() {
        let h = harness();
        h.store.fail_next().await;

        let result = h
            .processor
            .process(order(false, vec![OrderItem::new("Prodotto", dec!(50), 1)]))
            .await;

        assert!(matches!(result, Err(OrderError::Persistence(_))));
        assert_no_side_effects(&h).await;
    }

    #[tokio::test]
    async fn test_notification_failure_is_not_fatal() {
        let h = harness();
        h.notifier.fail_next().await;

        let record = h
            .processor
            .process(order(false, vec![OrderItem::new("Prodotto", dec!(50), 1)]))
            .await
            .unwrap();

        assert!(h.notifier.sent().await.is_empty());
        assert_eq!(h.store.all().await.unwrap(), vec![record]);
        assert_eq!(h.order_log.lines().await.len(), 1);
    }

    #[tokio::test]
    async fn test_log_failure_is_not_fatal() {
        let h = harness();
        h.order_log.fail_next().await;

        let record = h
            .processor
            .process(order(true, vec![OrderItem::new("Prodotto", dec!(100), 1)]))
            .await;

        assert!(record.is_ok());
        assert_eq!(h.notifier.sent().await.len(), 1);
        assert!(h.order_log.lines().await.is_empty());
    }

    #[tokio::test]
    async fn test_into_orders_returns_every_accepted_order() {
        let h = harness();
        for price in [dec!(10), dec!(20), dec!(30)] {
            h.processor
                .process(order(false, vec![OrderItem::new("Prodotto", price, 1)]))
                .await
                .unwrap();
        }
        h.processor
            .process(order(false, vec![]))
            .await
            .unwrap_err();

        let orders = h.processor.into_orders().await.unwrap();
        assert_eq!(orders.len(), 3);
    }
}
