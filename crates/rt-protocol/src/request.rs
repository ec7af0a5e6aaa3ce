//! The request/reply message sent to a Location or to a failing Train's
//! mailbox.

use rt_core::VehicleId;
use tokio::sync::oneshot;

/// The seven request kinds a Location (or a failing Train, for
/// RepairStart/RepairDone) accepts.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RequestKind {
    Take,
    Free,
    Reserve,
    Release,
    RepairStart,
    RepairDone,
    Check,
}

/// A single request: its kind, the sender's identity, and a one-shot reply
/// channel the receiving actor answers exactly once.
pub struct Request {
    pub kind: RequestKind,
    pub sender: VehicleId,
    pub reply: oneshot::Sender<bool>,
}

impl Request {
    pub fn new(kind: RequestKind, sender: VehicleId) -> (Request, oneshot::Receiver<bool>) {
        let (reply, rx) = oneshot::channel();
        (Request { kind, sender, reply }, rx)
    }

    /// Answer this request. Errors only if the caller has already dropped
    /// the receiving half (it gave up waiting) — ignored by the actor, which
    /// has no further action to take.
    pub fn respond(self, accepted: bool) {
        let _ = self.reply.send(accepted);
    }
}
