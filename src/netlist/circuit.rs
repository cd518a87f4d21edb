use super::bridge::Bridge;
use super::error::BuildError;
use super::fet::Fet;
use super::net::Net;
use super::rail::Rail;
use super::types::{DriverKind, NetIndex, Owner};
use indexmap::IndexMap;

/// Arena that owns every net, bridge, FET and rail of one netlist, and the
/// synchronous propagation engine that runs over them.
///
/// All cross-references between elements are stable indices into the arena's
/// tables, so the bidirectional net ↔ element graph needs no reference
/// cycles. Construction happens while the rail is de-energized; after
/// [energize](Circuit::energize) the structure is frozen and only driver
/// states change.
///
/// # Examples
/// ```
/// use fetsim::{Circuit, Nor2};
///
/// let mut c = Circuit::new();
/// let vdd = c.rail();
/// let nor = Nor2::new(&mut c, vdd).unwrap();
/// c.attach_load(nor.i[0]).unwrap();
/// c.attach_load(nor.i[1]).unwrap();
/// c.attach_load(nor.o).unwrap();
/// c.energize(vdd);
///
/// assert!(c.energized(nor.o));
/// c.set_load(nor.i[0], true);
/// assert!(!c.energized(nor.o));
/// ```
#[derive(Debug, Default)]
pub struct Circuit {
    pub(crate) nets: Vec<Net>,
    pub(crate) bridges: Vec<Bridge>,
    pub(crate) fets: Vec<Fet>,
    pub(crate) rails: Vec<Rail>,
}

impl Circuit {
    pub fn new() -> Circuit {
        Circuit {
            nets: Vec::new(),
            bridges: Vec::new(),
            fets: Vec::new(),
            rails: Vec::new(),
        }
    }

    /// Returns the [NetIndex] of a new floating net.
    pub fn net(&mut self) -> NetIndex {
        let idx = NetIndex::new(self.nets.len());
        self.nets.push(Net::new());
        idx
    }

    /// True iff any driver on `net` is asserting.
    pub fn energized(&self, net: NetIndex) -> bool {
        self.nets[net.idx].energized()
    }

    /// Attaches the default passive load (tag 0) to `net`.
    ///
    /// Loads are the "resting" driver of externally visible terminals: they
    /// give outside callers a driver identity to target with
    /// [set_load](Circuit::set_load), and their change hook is a no-op.
    pub fn attach_load(&mut self, net: NetIndex) -> Result<(), BuildError> {
        self.attach(net, DriverKind::Load(0))
    }

    /// Attaches a passive load with an explicit tag, allowing two loads to
    /// share one net (BUF1's aliased terminal is read through one load and
    /// written through another).
    pub fn attach_load_tagged(&mut self, net: NetIndex, tag: u32) -> Result<(), BuildError> {
        self.attach(net, DriverKind::Load(tag))
    }

    /// Sets the default load driver on `net`.
    ///
    /// # Panics
    ///
    /// Will panic if no load with tag 0 is attached to `net`.
    pub fn set_load(&mut self, net: NetIndex, asserting: bool) {
        self.set(net, Owner::Load(0), asserting);
    }

    /// Sets the load driver with tag `tag` on `net`.
    ///
    /// # Panics
    ///
    /// Will panic if no load with that tag is attached to `net`.
    pub fn set_load_tagged(&mut self, net: NetIndex, tag: u32, asserting: bool) {
        self.set(net, Owner::Load(tag), asserting);
    }

    pub(crate) fn attach(&mut self, net: NetIndex, kind: DriverKind) -> Result<(), BuildError> {
        self.nets[net.idx].attach(kind)
    }

    /// Changes the state of the driver owned by `owner` on `net` and
    /// propagates the consequences until the network settles.
    ///
    /// If the driver state actually changes and the net has a second driver,
    /// that peer's change hook is invoked with `aggregate_changed` true iff
    /// the net's total energization flipped: it just lit up from fully dark,
    /// or just went fully dark. Only the peer is told; the caller's own side
    /// already knows. Everything happens by direct recursion on the current
    /// stack, so when this returns the netlist is quiescent.
    ///
    /// # Panics
    ///
    /// Will panic if `owner` has no driver on `net`, if a rail driver is
    /// de-asserted, or if a rail driver is asserted while its rail is
    /// de-energized.
    pub(crate) fn set(&mut self, net: NetIndex, owner: Owner, asserting: bool) {
        let n = &self.nets[net.idx];
        let slot = n
            .slot(owner)
            .unwrap_or_else(|| panic!("net {} has no driver owned by {:?}", net, owner));
        let me = n.driver(slot);

        if let DriverKind::Rail(r) = me.kind {
            assert!(asserting, "cannot de-energize a power rail driver");
            assert!(
                self.rails[r.idx].energized,
                "power rail driver asserted while the rail is de-energized"
            );
        }

        if me.asserting == asserting {
            return;
        }

        if n.len() < 2 {
            // No peer to notify.
            self.nets[net.idx].set_slot(slot, asserting);
            return;
        }

        let peer = n.driver(1 - slot);
        let was_dark = !(me.asserting || peer.asserting);
        self.nets[net.idx].set_slot(slot, asserting);
        let aggregate_changed = was_dark || !(asserting || peer.asserting);
        self.notify(peer.kind, net, aggregate_changed);
    }

    /// Hook dispatch: a switch on the driver tag, not a callback pointer.
    fn notify(&mut self, kind: DriverKind, net: NetIndex, aggregate_changed: bool) {
        match kind {
            DriverKind::Load(_) | DriverKind::Rail(_) | DriverKind::FetDrain(_) => {}
            DriverKind::FetSource(f) => self.fet_source_changed(f, aggregate_changed),
            DriverKind::FetGate(f) => self.fet_gate_changed(f, aggregate_changed),
            DriverKind::Bridge(b) => self.bridge_changed(b, net),
        }
    }

    /// Number of nets in the arena.
    pub fn num_nets(&self) -> usize {
        self.nets.len()
    }

    /// Number of p-type FETs in the arena.
    pub fn num_fets(&self) -> usize {
        self.fets.len()
    }

    /// Number of bridges (bindings and interconnects) in the arena.
    pub fn num_bridges(&self) -> usize {
        self.bridges.len()
    }

    /// Number of power rails in the arena.
    pub fn num_rails(&self) -> usize {
        self.rails.len()
    }

    /// Dumps the net/element graph in
    /// [dot](https://en.wikipedia.org/wiki/DOT_(graph_description_language))
    /// format to `filename`. Nets become nodes labeled with their drivers;
    /// FETs contribute source→drain and gate→drain edges, bridges a chain
    /// through their tied nets.
    pub fn dump_dot(&self, filename: &str) -> std::io::Result<()> {
        use petgraph::dot::{Config, Dot};
        use std::io::Write;

        let mut graph = petgraph::Graph::<String, &str>::new();
        let mut index = IndexMap::new();
        for (i, net) in self.nets.iter().enumerate() {
            let drivers: Vec<String> = net.drivers().map(|d| d.kind.to_string()).collect();
            let label = format!("n{} [{}]", i, drivers.join(" "));
            index.insert(i, graph.add_node(label));
        }
        for fet in &self.fets {
            graph.add_edge(index[&fet.source.idx], index[&fet.drain.idx], "sd");
            graph.add_edge(index[&fet.gate.idx], index[&fet.drain.idx], "g");
        }
        for bridge in &self.bridges {
            for pair in bridge.nets.windows(2) {
                graph.add_edge(index[&pair[0].idx], index[&pair[1].idx], "=");
            }
        }

        let mut f = std::fs::File::create(filename)?;
        write!(f, "{:?}", Dot::with_config(&graph, &[Config::EdgeNoLabel]))
    }
}
