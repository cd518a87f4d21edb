use super::circuit::Circuit;
use super::types::{DriverKind, FetIndex, NetIndex, Owner};

/// A p-type FET: three nets, three drivers owned by the device.
///
/// Source and gate are inputs (their hooks react to aggregate flips), drain
/// is the output (its hook is a no-op). With the gate de-asserted the drain
/// mirrors the source net; asserting the gate releases the drain. Pull-down
/// is implicit: an undriven drain reads as de-energized under the
/// OR-of-drivers model, so all logic here is built from p-type devices
/// alone.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fet {
    pub source: NetIndex,
    pub drain: NetIndex,
    pub gate: NetIndex,
}

/// Terminal handle of a p-type FET created by [Circuit::pfet].
#[derive(Debug, Clone, Copy)]
pub struct PFet {
    pub source: NetIndex,
    pub drain: NetIndex,
    pub gate: NetIndex,
}

impl Circuit {
    /// Returns the terminals of a new p-type FET on three fresh nets.
    pub fn pfet(&mut self) -> PFet {
        let source = self.net();
        let drain = self.net();
        let gate = self.net();
        let idx = FetIndex::new(self.fets.len());
        self.fets.push(Fet {
            source,
            drain,
            gate,
        });
        // Fresh nets cannot reject their first driver.
        self.attach(source, DriverKind::FetSource(idx)).unwrap();
        self.attach(drain, DriverKind::FetDrain(idx)).unwrap();
        self.attach(gate, DriverKind::FetGate(idx)).unwrap();
        PFet {
            source,
            drain,
            gate,
        }
    }

    /// Source hook: restate the drain when conducting.
    pub(crate) fn fet_source_changed(&mut self, f: FetIndex, aggregate_changed: bool) {
        if !aggregate_changed {
            return;
        }
        let Fet {
            source,
            drain,
            gate,
        } = self.fets[f.idx];
        if self.energized(gate) {
            return;
        }
        let s = self.energized(source);
        self.set(drain, Owner::Fet(f), s);
    }

    /// Gate hook: falling gate connects drain to source, rising gate
    /// releases the drain.
    pub(crate) fn fet_gate_changed(&mut self, f: FetIndex, aggregate_changed: bool) {
        if !aggregate_changed {
            return;
        }
        let Fet {
            source,
            drain,
            gate,
        } = self.fets[f.idx];
        if !self.energized(gate) {
            let s = self.energized(source);
            self.set(drain, Owner::Fet(f), s);
        } else {
            self.set(drain, Owner::Fet(f), false);
        }
    }
}
