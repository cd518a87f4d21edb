use super::circuit::Circuit;
use super::error::BuildError;
use super::types::{DriverKind, NetIndex, Owner, RailIndex};

/// Power rail: the asserting source for every net registered against it.
///
/// De-energized during netlist construction; [Circuit::energize] flips it
/// exactly once and asserts every rail driver, cascading power through the
/// network. After that the netlist is structurally frozen.
#[derive(Debug, Default)]
pub(crate) struct Rail {
    pub(crate) nets: Vec<NetIndex>,
    pub(crate) energized: bool,
}

impl Circuit {
    /// Returns the [RailIndex] of a new de-energized rail.
    pub fn rail(&mut self) -> RailIndex {
        let idx = RailIndex::new(self.rails.len());
        self.rails.push(Rail {
            nets: Vec::new(),
            energized: false,
        });
        idx
    }

    pub fn rail_energized(&self, rail: RailIndex) -> bool {
        self.rails[rail.idx].energized
    }

    /// Guard cell constructors call before touching the arena.
    pub fn ensure_buildable(&self, rail: RailIndex) -> Result<(), BuildError> {
        if self.rails[rail.idx].energized {
            Err(BuildError::RailEnergized)
        } else {
            Ok(())
        }
    }

    /// Attaches a rail driver to each of `nets`.
    pub fn rail_register(&mut self, rail: RailIndex, nets: &[NetIndex]) -> Result<(), BuildError> {
        self.ensure_buildable(rail)?;
        for &net in nets {
            self.attach(net, DriverKind::Rail(rail))?;
            self.rails[rail.idx].nets.push(net);
        }
        Ok(())
    }

    /// Energizes `rail`: flips its flag, then asserts every registered rail
    /// driver in registration order. Each assertion propagates to quiescence
    /// before the next one starts.
    pub fn energize(&mut self, rail: RailIndex) {
        self.rails[rail.idx].energized = true;
        let nets = self.rails[rail.idx].nets.clone();
        for net in nets {
            self.set(net, Owner::Rail(rail), true);
        }
    }
}
