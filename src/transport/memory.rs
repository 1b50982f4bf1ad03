//! In-memory transport that records every delivered action.
//!
//! Used by tests to inspect what the dispatcher sent back for each event.

use crate::error::Result;
use crate::transport::protocol::{EventId, OutboundAction};
use crate::transport::Transport;
use async_trait::async_trait;
use parking_lot::Mutex;

#[derive(Debug, Default)]
pub struct MemoryTransport {
    delivered: Mutex<Vec<(EventId, OutboundAction)>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything delivered so far, in delivery order.
    pub fn delivered(&self) -> Vec<(EventId, OutboundAction)> {
        self.delivered.lock().clone()
    }

    /// Actions delivered for one event, in delivery order.
    pub fn actions_for(&self, event_id: EventId) -> Vec<OutboundAction> {
        self.delivered
            .lock()
            .iter()
            .filter(|(id, _)| *id == event_id)
            .map(|(_, action)| action.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.delivered.lock().clear();
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn deliver(&self, event_id: EventId, action: OutboundAction) -> Result<()> {
        self.delivered.lock().push((event_id, action));
        Ok(())
    }
}
