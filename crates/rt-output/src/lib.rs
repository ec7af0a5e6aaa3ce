//! The observable event stream: `Event`, the `EventSink` trait, and a
//! channel-backed sink.
//!
//! | module  | contents                                    |
//! |---------|-----------------------------------------------|
//! | [`event`] | `Event`, `EventKind`                          |
//! | [`sink`]  | `EventSink`, `SharedSink`, `NoopSink`, `ChannelSink` |

pub mod event;
pub mod sink;

pub use event::{Event, EventKind};
pub use sink::{ChannelSink, EventSink, NoopSink, SharedSink};

#[cfg(test)]
mod tests;
