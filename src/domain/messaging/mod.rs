//! Message bus trait definition
//!
//! Boundary to the external message bus. Publishing is decoupled from
//! handler invocation: a subscriber observes a message asynchronously,
//! with no ordering guarantee relative to the persistence call that
//! triggered the publish.

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use serde::Serialize;

use crate::domain::DomainError;

/// Handler invoked for each message delivered on a subscribed topic
pub type MessageHandler = Arc<dyn Fn(String) -> BoxFuture<'static, ()> + Send + Sync>;

/// Message bus trait for topic-based publish/subscribe
///
/// Payloads are raw strings to keep the trait dyn-compatible; use the
/// `MessageBusExt` helpers for typed publishing.
#[async_trait]
pub trait MessageBus: Send + Sync + Debug {
    /// Publishes a message to a topic
    async fn publish(&self, topic: &str, payload: &str) -> Result<(), DomainError>;

    /// Subscribes a handler to a topic
    ///
    /// The handler runs asynchronously for every message published to the
    /// topic after subscription.
    async fn subscribe(&self, topic: &str, handler: MessageHandler) -> Result<(), DomainError>;
}

/// Extension trait providing typed publish operations
pub trait MessageBusExt: MessageBus {
    /// Serializes a message to JSON and publishes it
    fn publish_json<'a, M>(
        &'a self,
        topic: &'a str,
        message: &'a M,
    ) -> impl std::future::Future<Output = Result<(), DomainError>> + Send
    where
        M: Serialize + Send + Sync,
    {
        async move {
            let payload = serde_json::to_string(message).map_err(|e| {
                DomainError::publish(format!("Failed to serialize message: {}", e))
            })?;
            self.publish(topic, &payload).await
        }
    }
}

// Blanket implementation for all types implementing MessageBus
impl<T: MessageBus + ?Sized> MessageBusExt for T {}
