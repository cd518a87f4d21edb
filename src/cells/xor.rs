use crate::netlist::{BuildError, Circuit, NetIndex, RailIndex};

/// 2-input XOR, transmission-style: a NOR-like series stack detects the
/// both-low case, two parallel devices detect the both-high case through
/// their gates, and the output device conducts only when neither detector
/// fires.
pub struct Xor2 {
    pub i: [NetIndex; 2],
    pub o: NetIndex,
}

impl Xor2 {
    pub fn new(c: &mut Circuit, vdd: RailIndex) -> Result<Xor2, BuildError> {
        c.ensure_buildable(vdd)?;

        let p0 = c.pfet();
        let p1 = c.pfet();
        let p2 = c.pfet();
        let p3 = c.pfet();
        let p4 = c.pfet();
        c.rail_register(vdd, &[p0.source, p2.source, p3.source])?;

        let i0 = c.net();
        let i1 = c.net();
        c.bind(p0.drain, p1.source)?;
        c.bind(p1.drain, p4.gate)?;
        c.interconnect(&[i0, p0.gate, p2.gate])?;
        c.interconnect(&[i1, p1.gate, p3.gate])?;
        c.interconnect(&[p2.drain, p3.drain, p4.source])?;

        Ok(Xor2 {
            i: [i0, i1],
            o: p4.drain,
        })
    }
}

/// 2-input XNOR: the same detector stacks steering an inverting output
/// device.
pub struct Xnor2 {
    pub i: [NetIndex; 2],
    pub o: NetIndex,
}

impl Xnor2 {
    pub fn new(c: &mut Circuit, vdd: RailIndex) -> Result<Xnor2, BuildError> {
        c.ensure_buildable(vdd)?;

        let p0 = c.pfet();
        let p1 = c.pfet();
        let p2 = c.pfet();
        let p3 = c.pfet();
        let p4 = c.pfet();
        c.rail_register(vdd, &[p0.source, p1.source, p2.source, p4.source])?;

        let i0 = c.net();
        let i1 = c.net();
        let o = c.net();
        c.bind(p2.drain, p3.source)?;
        c.interconnect(&[p0.drain, p1.drain, p4.gate])?;
        c.interconnect(&[o, p4.drain, p3.drain])?;
        c.interconnect(&[i0, p0.gate, p2.gate])?;
        c.interconnect(&[i1, p1.gate, p3.gate])?;

        Ok(Xnor2 { i: [i0, i1], o })
    }
}
