use super::error::BuildError;
use super::types::{Driver, DriverKind, Owner};
use smallvec::SmallVec;

/// A wire segment.
///
/// A net carries at most two drivers. Its logical state is the OR of the
/// drivers' asserting flags; there is no notion of drive strength or
/// contention. The two-slot limit is what makes the "tell the other side"
/// notification in [Circuit::set](super::Circuit) well defined.
#[derive(Debug, Default)]
pub(crate) struct Net {
    drivers: SmallVec<[Driver; 2]>,
}

impl Net {
    pub fn new() -> Net {
        Net {
            drivers: SmallVec::new(),
        }
    }

    /// Adds a driver slot for `kind`, de-asserted.
    ///
    /// Rejects a third driver, a second driver for the same owner, and any
    /// attachment to a net that is already energized (splicing onto a live
    /// net would power a circuit mid-construction).
    pub fn attach(&mut self, kind: DriverKind) -> Result<(), BuildError> {
        if self.drivers.len() == 2 {
            return Err(BuildError::NetCapacityExceeded);
        }
        if self.drivers.iter().any(|d| d.kind.owner() == kind.owner()) {
            return Err(BuildError::DuplicateDriver);
        }
        if self.energized() {
            return Err(BuildError::EnergizedSplice);
        }
        self.drivers.push(Driver::new(kind));
        Ok(())
    }

    pub fn energized(&self) -> bool {
        self.drivers.iter().any(|d| d.asserting)
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    /// Slot index of the driver owned by `owner`.
    pub fn slot(&self, owner: Owner) -> Option<usize> {
        self.drivers.iter().position(|d| d.kind.owner() == owner)
    }

    pub fn driver(&self, slot: usize) -> Driver {
        self.drivers[slot]
    }

    pub fn set_slot(&mut self, slot: usize, asserting: bool) {
        self.drivers[slot].asserting = asserting;
    }

    /// The driver on this net that is *not* owned by `owner`, if any.
    ///
    /// This is the "opposing driver" accessor bridges use to count external
    /// energy sources; a net that only carries the bridge's own driver has
    /// no opposing side.
    pub fn foreign(&self, owner: Owner) -> Option<Driver> {
        self.drivers
            .iter()
            .copied()
            .find(|d| d.kind.owner() != owner)
    }

    pub fn drivers(&self) -> impl Iterator<Item = Driver> + '_ {
        self.drivers.iter().copied()
    }
}
