//! In-process message bus implementation
//!
//! Stand-in for the external message-bus collaborator. One broadcast
//! channel per topic; each subscription runs its handler on a spawned
//! task, so delivery is asynchronous and decoupled from the publisher.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{broadcast, RwLock};
use tracing::warn;

use crate::domain::messaging::{MessageBus, MessageHandler};
use crate::domain::DomainError;

const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// In-memory topic-based message bus
#[derive(Debug)]
pub struct InMemoryMessageBus {
    topics: Arc<RwLock<HashMap<String, broadcast::Sender<String>>>>,
    capacity: usize,
}

impl InMemoryMessageBus {
    /// Create a new bus with the default per-topic capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Create a new bus with the given per-topic channel capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            topics: Arc::new(RwLock::new(HashMap::new())),
            capacity,
        }
    }

    async fn sender_for(&self, topic: &str) -> broadcast::Sender<String> {
        let mut topics = self.topics.write().await;
        topics
            .entry(topic.to_string())
            .or_insert_with(|| broadcast::channel(self.capacity).0)
            .clone()
    }
}

impl Default for InMemoryMessageBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageBus for InMemoryMessageBus {
    async fn publish(&self, topic: &str, payload: &str) -> Result<(), DomainError> {
        let sender = self.sender_for(topic).await;

        // A topic with no live subscribers is not an error; the message is
        // simply not observed by anyone.
        let _ = sender.send(payload.to_string());

        Ok(())
    }

    async fn subscribe(&self, topic: &str, handler: MessageHandler) -> Result<(), DomainError> {
        let sender = self.sender_for(topic).await;
        let mut receiver = sender.subscribe();
        let topic = topic.to_string();

        tokio::spawn(async move {
            loop {
                match receiver.recv().await {
                    Ok(payload) => handler(payload).await,
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!(topic = %topic, skipped, "Subscriber lagged, messages dropped");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    fn collecting_handler() -> (MessageHandler, Arc<Mutex<Vec<String>>>) {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = received.clone();
        let handler: MessageHandler = Arc::new(move |payload| {
            let sink = sink.clone();
            Box::pin(async move {
                sink.lock().unwrap().push(payload);
            })
        });
        (handler, received)
    }

    #[tokio::test]
    async fn test_subscriber_receives_published_message() {
        let bus = InMemoryMessageBus::new();
        let (handler, received) = collecting_handler();

        bus.subscribe("orders", handler).await.unwrap();
        bus.publish("orders", "hello").await.unwrap();

        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(*received.lock().unwrap(), vec!["hello".to_string()]);
    }

    #[tokio::test]
    async fn test_multiple_subscribers_all_receive() {
        let bus = InMemoryMessageBus::new();
        let (first_handler, first) = collecting_handler();
        let (second_handler, second) = collecting_handler();

        bus.subscribe("orders", first_handler).await.unwrap();
        bus.subscribe("orders", second_handler).await.unwrap();
        bus.publish("orders", "fan-out").await.unwrap();

        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(first.lock().unwrap().len(), 1);
        assert_eq!(second.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_topics_are_isolated() {
        let bus = InMemoryMessageBus::new();
        let (handler, received) = collecting_handler();

        bus.subscribe("orders", handler).await.unwrap();
        bus.publish("shipments", "elsewhere").await.unwrap();

        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(received.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_succeeds() {
        let bus = InMemoryMessageBus::new();
        assert!(bus.publish("orders", "unobserved").await.is_ok());
    }
}
