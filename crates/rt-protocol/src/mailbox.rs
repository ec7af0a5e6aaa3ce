//! Mailbox type alias and the client-side request helper every Vehicle and
//! RepairVehicle calls against a Location (or a failing Train's inbox).
//!
//! The sender half is handed out to callers while the receiver stays owned
//! by the spawned actor task, generalized here to a synchronous
//! request/reply shape via a paired `oneshot`.

use rt_core::VehicleId;
use thiserror::Error;
use tokio::sync::mpsc;

use crate::request::{Request, RequestKind};

/// The sending half of an actor's request mailbox. Cheaply `Clone`able;
/// every holder can issue requests concurrently, though each Location
/// actor still serializes its own mailbox receive loop.
pub type Mailbox = mpsc::Sender<Request>;

/// The receiving half, owned exclusively by the actor task.
pub type MailboxReceiver = mpsc::Receiver<Request>;

/// Construct a fresh mailbox pair. Unbuffered (capacity 1) to enforce a
/// synchronous request/reply rhythm — tokio's mpsc has no true
/// zero-capacity, so 1 is the closest equivalent that still forces the
/// sender to wait for the receiver to be ready.
pub fn new_mailbox() -> (Mailbox, MailboxReceiver) {
    mpsc::channel(1)
}

#[derive(Debug, Error)]
pub enum MailboxError {
    #[error("actor mailbox is closed")]
    Closed,
}

/// Issue a request and await its boolean reply.
///
/// There are no per-request timeouts: this call waits until the target
/// actor answers, or returns [`MailboxError::Closed`] if the actor has
/// already shut down — callers must ensure actors outlive every holder of
/// a channel to them.
pub async fn send_request(
    mailbox: &Mailbox,
    kind: RequestKind,
    sender: VehicleId,
) -> Result<bool, MailboxError> {
    let (request, reply_rx) = Request::new(kind, sender);
    mailbox.send(request).await.map_err(|_| MailboxError::Closed)?;
    reply_rx.await.map_err(|_| MailboxError::Closed)
}
