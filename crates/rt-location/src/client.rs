//! Thin, named wrappers over [`rt_protocol::send_request`] — the vocabulary
//! every Vehicle and RepairVehicle uses against a Location's (or a failing
//! Train's) mailbox.
//!
//! A closed mailbox (the target actor died) is treated as a rejection
//! rather than propagated as an error: actors are expected to outlive every
//! holder of a channel to them, so this can only happen on a structural
//! bug, and a vehicle that gets refused everywhere simply keeps retrying
//! rather than crashing the simulation.

use rt_core::VehicleId;
use rt_protocol::{send_request, Mailbox, RequestKind};

pub async fn take(mailbox: &Mailbox, who: VehicleId) -> bool {
    send_request(mailbox, RequestKind::Take, who).await.unwrap_or(false)
}

pub async fn free(mailbox: &Mailbox, who: VehicleId) -> bool {
    send_request(mailbox, RequestKind::Free, who).await.unwrap_or(false)
}

pub async fn reserve(mailbox: &Mailbox, who: VehicleId) -> bool {
    send_request(mailbox, RequestKind::Reserve, who).await.unwrap_or(false)
}

pub async fn release(mailbox: &Mailbox, who: VehicleId) -> bool {
    send_request(mailbox, RequestKind::Release, who).await.unwrap_or(false)
}

pub async fn repair_start(mailbox: &Mailbox, who: VehicleId) -> bool {
    send_request(mailbox, RequestKind::RepairStart, who).await.unwrap_or(false)
}

pub async fn repair_done(mailbox: &Mailbox, who: VehicleId) -> bool {
    send_request(mailbox, RequestKind::RepairDone, who).await.unwrap_or(false)
}

pub async fn check(mailbox: &Mailbox, who: VehicleId) -> bool {
    send_request(mailbox, RequestKind::Check, who).await.unwrap_or(false)
}
