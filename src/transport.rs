//! Transport boundary.
//!
//! The messaging transport is an external collaborator: it delivers inbound events and
//! carries outbound actions back to the user. This module defines the shared protocol
//! types, the [`Transport`] trait, and two implementations: a line-oriented console
//! transport for interactive use and an in-memory transport for tests.

pub mod console;
pub mod memory;
pub mod protocol;

pub use console::{parse_line, render_action, ConsoleTransport};
pub use memory::MemoryTransport;
pub use protocol::{EventId, InboundEvent, InlineArticle, OutboundAction};

use crate::error::Result;
use async_trait::async_trait;

/// Outbound half of a messaging transport.
///
/// Implementations must be thread-safe; handlers for different events deliver
/// concurrently.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Deliver one action produced while handling event `event_id`.
    async fn deliver(&self, event_id: EventId, action: OutboundAction) -> Result<()>;
}
