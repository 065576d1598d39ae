//! Product event publisher
//!
//! Translates persisted product mutations into domain events on the
//! message bus. Publishing is fire-and-forget: a failed publish is logged
//! and never affects the outcome of the use case that triggered it.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::messaging::{MessageBus, MessageBusExt};
use crate::domain::product::{
    Product, ProductCreated, ProductUpdated, PRODUCT_CREATED_TOPIC, PRODUCT_UPDATED_TOPIC,
};

/// Publishes product domain events to a message bus
#[derive(Debug, Clone)]
pub struct ProductEventPublisher {
    bus: Arc<dyn MessageBus>,
}

impl ProductEventPublisher {
    /// Create a new publisher over the given bus
    pub fn new(bus: Arc<dyn MessageBus>) -> Self {
        Self { bus }
    }

    /// Publish a `product.created` event for an already-persisted product
    pub async fn product_created(&self, product: &Product) {
        let event = ProductCreated::new(product);

        match self.bus.publish_json(PRODUCT_CREATED_TOPIC, &event).await {
            Ok(()) => {
                debug!(product_id = %event.product_id, "Published product.created event");
            }
            Err(e) => {
                warn!(
                    product_id = %event.product_id,
                    error = %e,
                    "Failed to publish product.created event"
                );
            }
        }
    }

    /// Publish a `product.updated` event for an already-persisted product
    pub async fn product_updated(&self, product: &Product) {
        let event = ProductUpdated::new(product);

        match self.bus.publish_json(PRODUCT_UPDATED_TOPIC, &event).await {
            Ok(()) => {
                debug!(product_id = %event.product_id, "Published product.updated event");
            }
            Err(e) => {
                warn!(
                    product_id = %event.product_id,
                    error = %e,
                    "Failed to publish product.updated event"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::{Price, ProductId};
    use crate::infrastructure::messaging::InMemoryMessageBus;
    use std::sync::Mutex;
    use std::time::Duration;

    fn widget() -> Product {
        Product::create(
            ProductId::new("p-1").unwrap(),
            "Widget",
            Price::new(9.99).unwrap(),
            "cat-1",
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_created_event_reaches_subscriber() {
        let bus = Arc::new(InMemoryMessageBus::new());
        let received = Arc::new(Mutex::new(Vec::new()));

        let sink = received.clone();
        bus.subscribe(
            PRODUCT_CREATED_TOPIC,
            Arc::new(move |payload| {
                let sink = sink.clone();
                Box::pin(async move {
                    sink.lock().unwrap().push(payload);
                })
            }),
        )
        .await
        .unwrap();

        let publisher = ProductEventPublisher::new(bus);
        publisher.product_created(&widget()).await;

        // Handler delivery is asynchronous
        tokio::time::sleep(Duration::from_millis(50)).await;

        let payloads = received.lock().unwrap();
        assert_eq!(payloads.len(), 1);
        let event: ProductCreated = serde_json::from_str(&payloads[0]).unwrap();
        assert_eq!(event.product_id, "p-1");
        assert_eq!(event.price, 9.99);
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_does_not_fail() {
        let bus = Arc::new(InMemoryMessageBus::new());
        let publisher = ProductEventPublisher::new(bus);

        // No panic, no error surfaced
        publisher.product_updated(&widget()).await;
    }
}
