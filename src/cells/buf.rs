use crate::netlist::{BuildError, Circuit, NetIndex, RailIndex};

/// 1-bit buffer. A pure wire: `i` and `o` are the same net, so a read after
/// a write observes the input directly. No device sits between them.
pub struct Buf1 {
    pub i: NetIndex,
    pub o: NetIndex,
}

impl Buf1 {
    pub fn new(c: &mut Circuit, vdd: RailIndex) -> Result<Buf1, BuildError> {
        c.ensure_buildable(vdd)?;

        let wire = c.net();
        Ok(Buf1 { i: wire, o: wire })
    }
}

/// 2-bit buffer: two independent wires.
pub struct Buf2 {
    pub i: [NetIndex; 2],
    pub o: [NetIndex; 2],
}

impl Buf2 {
    pub fn new(c: &mut Circuit, vdd: RailIndex) -> Result<Buf2, BuildError> {
        c.ensure_buildable(vdd)?;

        let wires = [c.net(), c.net()];
        Ok(Buf2 { i: wires, o: wires })
    }
}
