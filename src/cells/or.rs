use crate::netlist::{BuildError, Circuit, NetIndex, RailIndex};

/// 2-input NOR: two p-FETs in series from the rail, either gate cuts the
/// pull-up path.
pub struct Nor2 {
    pub i: [NetIndex; 2],
    pub o: NetIndex,
}

impl Nor2 {
    pub fn new(c: &mut Circuit, vdd: RailIndex) -> Result<Nor2, BuildError> {
        c.ensure_buildable(vdd)?;

        let p0 = c.pfet();
        let p1 = c.pfet();
        c.rail_register(vdd, &[p0.source])?;
        c.bind(p0.drain, p1.source)?;

        Ok(Nor2 {
            i: [p0.gate, p1.gate],
            o: p1.drain,
        })
    }
}

/// 2-input OR: a NOR stack inverted by a third device.
pub struct Or2 {
    pub i: [NetIndex; 2],
    pub o: NetIndex,
}

impl Or2 {
    pub fn new(c: &mut Circuit, vdd: RailIndex) -> Result<Or2, BuildError> {
        c.ensure_buildable(vdd)?;

        let p0 = c.pfet();
        let p1 = c.pfet();
        let p2 = c.pfet();
        c.rail_register(vdd, &[p0.source, p2.source])?;
        c.bind(p0.drain, p1.source)?;
        c.bind(p1.drain, p2.gate)?;

        Ok(Or2 {
            i: [p0.gate, p1.gate],
            o: p2.drain,
        })
    }
}

/// 3-input OR from two cascaded [Or2] cells.
pub struct Or3 {
    pub i: [NetIndex; 3],
    pub o: NetIndex,
}

impl Or3 {
    pub fn new(c: &mut Circuit, vdd: RailIndex) -> Result<Or3, BuildError> {
        c.ensure_buildable(vdd)?;

        let or2_0 = Or2::new(c, vdd)?;
        let or2_1 = Or2::new(c, vdd)?;
        c.bind(or2_1.i[0], or2_0.o)?;

        Ok(Or3 {
            i: [or2_0.i[0], or2_0.i[1], or2_1.i[1]],
            o: or2_1.o,
        })
    }
}
