use super::and::And2;
use super::or::Or3;
use super::xor::Xor2;
use crate::netlist::{BuildError, Circuit, NetIndex, RailIndex};

/// A (propagate, generate) net pair, the unit the prefix network merges.
#[derive(Debug, Clone, Copy)]
pub struct PgPair {
    pub p: NetIndex,
    pub g: NetIndex,
}

/// Bitwise propagate/generate stage: `p = a ⊕ b`, `g = a ∧ b`.
pub struct Pg {
    pub i: [NetIndex; 2],
    pub o: PgPair,
}

impl Pg {
    pub fn new(c: &mut Circuit, vdd: RailIndex) -> Result<Pg, BuildError> {
        c.ensure_buildable(vdd)?;

        let and2 = And2::new(c, vdd)?;
        let xor2 = Xor2::new(c, vdd)?;

        let i0 = c.net();
        let i1 = c.net();
        c.interconnect(&[i0, and2.i[0], xor2.i[0]])?;
        c.interconnect(&[i1, and2.i[1], xor2.i[1]])?;

        Ok(Pg {
            i: [i0, i1],
            o: PgPair {
                p: xor2.o,
                g: and2.o,
            },
        })
    }
}

/// Bit-0 propagate/generate stage with the carry-in absorbed into the
/// generate: `p = a ⊕ b`, `g = (a ∧ cin) ∨ (b ∧ cin) ∨ (a ∧ b)`.
pub struct PgCin {
    pub i: [NetIndex; 2],
    pub cin: NetIndex,
    pub o: PgPair,
}

impl PgCin {
    pub fn new(c: &mut Circuit, vdd: RailIndex) -> Result<PgCin, BuildError> {
        c.ensure_buildable(vdd)?;

        let and2_ga = And2::new(c, vdd)?;
        let and2_gb = And2::new(c, vdd)?;
        let and2_gc = And2::new(c, vdd)?;
        let or3 = Or3::new(c, vdd)?;
        let xor2 = Xor2::new(c, vdd)?;

        let i0 = c.net();
        let i1 = c.net();
        let cin = c.net();
        c.interconnect(&[i0, and2_ga.i[0], and2_gc.i[0], xor2.i[0]])?;
        c.interconnect(&[i1, and2_gb.i[0], and2_gc.i[1], xor2.i[1]])?;
        c.interconnect(&[cin, and2_ga.i[1], and2_gb.i[1]])?;
        c.bind_parallel(&or3.i, &[and2_ga.o, and2_gb.o, and2_gc.o])?;

        Ok(PgCin {
            i: [i0, i1],
            cin,
            o: PgPair {
                p: xor2.o,
                g: or3.o,
            },
        })
    }
}
