//! Wire types for the actor request/reply protocol.
//!
//! | module       | contents                                            |
//! |--------------|------------------------------------------------------|
//! | [`request`]  | `Request`, `RequestKind`                             |
//! | [`mailbox`]  | `Mailbox`, `MailboxReceiver`, `send_request`         |
//! | [`emergency`]| `Emergency`, `EmergencyTarget`, `Report`              |

pub mod emergency;
pub mod mailbox;
pub mod request;

pub use emergency::{Emergency, EmergencyTarget, Report};
pub use mailbox::{new_mailbox, send_request, Mailbox, MailboxError, MailboxReceiver};
pub use request::{Request, RequestKind};
