use super::circuit::Circuit;
use super::error::BuildError;
use super::types::{BridgeIndex, DriverKind, NetIndex, Owner};
use smallvec::SmallVec;

/// Purely conductive tie between two or more nets.
///
/// The bridge owns one driver per tied net. `num_energized` remembers how
/// many tied nets were asserted by *foreign* drivers after the last
/// transition; comparing it to the fresh count tells the propagation rule
/// which way the energy flow changed.
#[derive(Debug)]
pub(crate) struct Bridge {
    pub(crate) nets: SmallVec<[NetIndex; 2]>,
    pub(crate) num_energized: usize,
}

impl Circuit {
    /// Ties `a` and `b` together (a 2-net binding).
    ///
    /// Energy arriving at either net from a foreign driver is re-driven onto
    /// the other; the asserting side itself is never re-driven, which is what
    /// keeps a bridge and a transistor sharing a net from feeding back
    /// forever.
    pub fn bind(&mut self, a: NetIndex, b: NetIndex) -> Result<BridgeIndex, BuildError> {
        self.bridge(&[a, b])
    }

    /// Ties all `nets` together (an N-net interconnect). Used to fan one
    /// signal out to several consumers.
    pub fn interconnect(&mut self, nets: &[NetIndex]) -> Result<BridgeIndex, BuildError> {
        self.bridge(nets)
    }

    /// Pairwise bindings between two equal-length groups.
    pub fn bind_parallel(&mut self, a: &[NetIndex], b: &[NetIndex]) -> Result<(), BuildError> {
        assert_eq!(a.len(), b.len(), "groups must be of the same length");
        for (&a, &b) in a.iter().zip(b) {
            self.bind(a, b)?;
        }
        Ok(())
    }

    /// Columnwise interconnects across equal-length groups: one interconnect
    /// tying `groups[0][i], groups[1][i], …` for each column `i`.
    pub fn interconnect_parallel(&mut self, groups: &[&[NetIndex]]) -> Result<(), BuildError> {
        let len = match groups.first() {
            Some(g) => g.len(),
            None => return Ok(()),
        };
        assert!(
            groups.iter().all(|g| g.len() == len),
            "groups must be of the same length"
        );
        let mut column = Vec::with_capacity(groups.len());
        for i in 0..len {
            column.clear();
            column.extend(groups.iter().map(|g| g[i]));
            self.interconnect(&column)?;
        }
        Ok(())
    }

    fn bridge(&mut self, nets: &[NetIndex]) -> Result<BridgeIndex, BuildError> {
        let idx = BridgeIndex::new(self.bridges.len());
        for &net in nets {
            self.attach(net, DriverKind::Bridge(idx))?;
        }
        self.bridges.push(Bridge {
            nets: SmallVec::from_slice(nets),
            num_energized: 0,
        });
        Ok(idx)
    }

    /// True iff `net` is asserted by a driver not owned by bridge `b`.
    fn foreign_asserting(&self, net: NetIndex, b: BridgeIndex) -> bool {
        self.nets[net.idx]
            .foreign(Owner::Bridge(b))
            .map(|d| d.asserting)
            .unwrap_or(false)
    }

    /// Change hook for bridge `b`, fired when a tied net's aggregate flips.
    ///
    /// Recounts the tied nets asserted from outside the bridge and restates
    /// the bridge's own drivers:
    /// - 0 → 1: `origin` became the sole source; drive every other net.
    /// - 1 → 2: the other external source must now also receive bridge power
    ///   (it stopped being the sole provider).
    /// - 2 → 1: the remaining external source must stop receiving bridge
    ///   power, or it would be driven by its own energy.
    /// - → 0: release everything.
    ///
    /// The stored count is updated only after the restatements, matching the
    /// order the rest of the engine was built against.
    pub(crate) fn bridge_changed(&mut self, b: BridgeIndex, origin: NetIndex) {
        let nets = self.bridges[b.idx].nets.clone();
        let prev = self.bridges[b.idx].num_energized;
        let now = nets
            .iter()
            .filter(|&&n| self.foreign_asserting(n, b))
            .count();
        let owner = Owner::Bridge(b);

        if now > 1 {
            if prev <= 1 {
                for &net in &nets {
                    if net != origin && self.foreign_asserting(net, b) {
                        self.set(net, owner, true);
                        break;
                    }
                }
            }
        } else if now == 1 {
            if prev > 1 {
                for &net in &nets {
                    if self.foreign_asserting(net, b) {
                        self.set(net, owner, false);
                        break;
                    }
                }
            } else {
                for &net in &nets {
                    if net != origin {
                        self.set(net, owner, true);
                    }
                }
            }
        } else {
            for &net in &nets {
                self.set(net, owner, false);
            }
        }

        self.bridges[b.idx].num_energized = now;
    }
}
