//! `EventSink` — the trait every actor publishes through: default no-op
//! methods so implementors only override what they use, and a single
//! channel-backed sink implementation (no CSV/SQLite/Parquet backends —
//! persistence is out of scope here).

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::event::Event;

/// Receives [`Event`]s published by the simulation's actors.
///
/// Implementations must be cheap to call from inside an actor's mailbox
/// loop — never block, never await.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: Event);
}

/// An [`EventSink`] shared across every actor, handed out once at
/// construction time.
pub type SharedSink = Arc<dyn EventSink>;

/// An `EventSink` that discards every event. Used in tests and demos that
/// don't care about the observable stream.
pub struct NoopSink;

impl EventSink for NoopSink {
    fn emit(&self, _event: Event) {}
}

/// An `EventSink` backed by an unbounded channel — the shape the test suite
/// and `demos/loader`'s log drain both use.
///
/// Unbounded because actors must never block publishing an event; a slow or
/// absent consumer only grows memory, it never stalls the simulation.
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<Event>,
}

impl ChannelSink {
    /// Create a sink/receiver pair.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Event>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl EventSink for ChannelSink {
    fn emit(&self, event: Event) {
        // The receiver may have been dropped (consumer shut down); that is
        // not the publishing actor's problem.
        let _ = self.tx.send(event);
    }
}
