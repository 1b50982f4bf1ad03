//! Application orchestration layer
//!
//! Receives inbound events from a channel and runs one independent handler task per event.
//! Handlers share only the read-only dispatcher and the transport; a failing handler or a
//! failed delivery never affects other events.

pub mod dispatcher;
pub mod runtime;

pub use dispatcher::{Dispatcher, DEFAULT_GREETING};
pub use runtime::spawn_event_reader;

use crate::transport::{EventId, InboundEvent, Transport};
use std::sync::Arc;
use tokio::sync::mpsc::Receiver;
use tokio::task::JoinSet;

/// Application orchestrator - wires the dispatcher to a transport
pub struct Application {
    dispatcher: Arc<Dispatcher>,
    transport: Arc<dyn Transport>,
}

impl Application {
    pub fn new(dispatcher: Dispatcher, transport: Arc<dyn Transport>) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            transport,
        }
    }

    /// Handle events until the channel closes, then wait for in-flight handlers.
    ///
    /// Returns the number of events handled.
    pub async fn run(&self, mut events: Receiver<(EventId, InboundEvent)>) -> u64 {
        let mut handlers = JoinSet::new();
        let mut handled = 0;

        while let Some((event_id, event)) = events.recv().await {
            handled += 1;
            handlers.spawn(handle_event(
                Arc::clone(&self.dispatcher),
                Arc::clone(&self.transport),
                event_id,
                event,
            ));

            // Reap finished handlers so the set does not grow with the session
            while let Some(result) = handlers.try_join_next() {
                report_join(result);
            }
        }

        while let Some(result) = handlers.join_next().await {
            report_join(result);
        }

        log::info!("Event stream closed after {} events", handled);
        handled
    }
}

/// Dispatch one event and deliver its actions in order.
pub async fn handle_event(
    dispatcher: Arc<Dispatcher>,
    transport: Arc<dyn Transport>,
    event_id: EventId,
    event: InboundEvent,
) {
    log::debug!("Event #{}: {:?}", event_id, event);
    for action in dispatcher.dispatch(&event) {
        if let Err(err) = transport.deliver(event_id, action).await {
            log::warn!("Delivery for event #{} failed: {}", event_id, err);
        }
    }
}

fn report_join(result: Result<(), tokio::task::JoinError>) {
    if let Err(err) = result {
        log::error!("Event handler task failed: {}", err);
    }
}
