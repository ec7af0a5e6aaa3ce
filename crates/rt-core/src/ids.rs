//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and `Vec`
//! indices without ceremony. `LocationId`/`StationId` carry a `pub` inner
//! integer so callers may index directly into arena `Vec`s via `id.index()`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a Location (junction or track) in the `Topology` arena.
    pub struct LocationId(u32);
}

typed_id! {
    /// Index of a Station in the `Topology`'s station list. Stations are not
    /// Locations, so they get their own namespace.
    pub struct StationId(u32);
}

/// Identity of a vehicle, tagged by kind.
///
/// Unlike `LocationId`/`StationId`, vehicles are polymorphic (Train vs.
/// RepairVehicle), so a plain integer isn't enough to render the
/// `"Train #N"` keys emergency reports need.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleId {
    Train(u32),
    Repair(u32),
}

impl VehicleId {
    /// The bare numeric id, irrespective of kind.
    #[inline]
    pub fn raw(self) -> u32 {
        match self {
            VehicleId::Train(n) | VehicleId::Repair(n) => n,
        }
    }

    /// The key used in emergency/stats reports for this vehicle, e.g.
    /// `"Train #1"`.
    pub fn report_key(self) -> String {
        match self {
            VehicleId::Train(n) => format!("Train #{n}"),
            VehicleId::Repair(n) => format!("RepairVehicle #{n}"),
        }
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.report_key())
    }
}
