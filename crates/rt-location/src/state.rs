//! The Location actor's private state and the request transition table.
//! Mutation only ever happens from inside the owning task.

use rt_core::VehicleId;
use rt_protocol::RequestKind;

#[derive(Default)]
pub struct LocationState {
    pub occupant: Option<VehicleId>,
    pub reservation: Option<VehicleId>,
    pub failing: bool,
    pub repair_started: bool,
    pub request_counter: u64,
}

impl LocationState {
    /// Apply one request, returning the boolean accept/reject reply.
    ///
    /// This is the entire public contract table for a Location: every
    /// precondition/effect pair below is implemented exactly as stated,
    /// nothing more.
    pub fn apply(&mut self, kind: RequestKind, sender: VehicleId) -> bool {
        match kind {
            RequestKind::Take => {
                let not_failing_or_reserved_by_sender =
                    !self.failing || self.reservation == Some(sender);
                let occupant_ok = matches!(self.occupant, None) || self.occupant == Some(sender);
                let reservation_ok =
                    matches!(self.reservation, None) || self.reservation == Some(sender);
                if not_failing_or_reserved_by_sender && occupant_ok && reservation_ok {
                    self.occupant = Some(sender);
                    true
                } else {
                    false
                }
            }
            RequestKind::Free => {
                if !self.failing && self.occupant == Some(sender) {
                    self.occupant = None;
                    true
                } else {
                    false
                }
            }
            RequestKind::Reserve => {
                if self.reservation.is_none() {
                    self.reservation = Some(sender);
                    true
                } else {
                    false
                }
            }
            RequestKind::Release => {
                if self.reservation == Some(sender) {
                    self.reservation = None;
                    true
                } else {
                    false
                }
            }
            RequestKind::RepairStart => {
                if !self.repair_started {
                    self.repair_started = true;
                    true
                } else {
                    false
                }
            }
            RequestKind::RepairDone => {
                if self.repair_started {
                    self.failing = false;
                    self.repair_started = false;
                    true
                } else {
                    false
                }
            }
            RequestKind::Check => !self.failing,
        }
    }
}
