//! # Change Notifications
//!
//! The actor publishes a [`RegistryEvent`] after every successful mutation. Observers hold a
//! [`Subscription`]; dropping it is the only way to unsubscribe, so a subscription can never
//! leak or be released twice.

use crate::model::Resource;
use tokio::sync::broadcast;
use tracing::warn;

/// Something that changed in the registry.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryEvent {
    ResourceCreated(Resource),
}

/// Scoped handle to the registry's event stream.
#[derive(Debug)]
pub struct Subscription {
    receiver: broadcast::Receiver<RegistryEvent>,
}

impl Subscription {
    pub(crate) fn new(receiver: broadcast::Receiver<RegistryEvent>) -> Self {
        Self { receiver }
    }

    /// Waits for the next event. Returns `None` once every publisher is gone.
    ///
    /// A subscriber that falls behind skips the events it missed.
    pub async fn next(&mut self) -> Option<RegistryEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Subscriber lagged");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Returns an already published event without waiting.
    pub fn try_next(&mut self) -> Option<RegistryEvent> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => return Some(event),
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    warn!(skipped, "Subscriber lagged");
                }
                Err(_) => return None,
            }
        }
    }
}
