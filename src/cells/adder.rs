use super::and::And2;
use super::or::Or2;
use super::xor::Xor2;
use crate::netlist::{BuildError, Circuit, NetIndex, RailIndex};

/// Half adder: `s = a ⊕ b`, `c = a ∧ b`, with the inputs fanned out to both
/// sub-cells through interconnects.
pub struct HalfAdder {
    pub i: [NetIndex; 2],
    pub s: NetIndex,
    pub c: NetIndex,
}

impl HalfAdder {
    pub fn new(c: &mut Circuit, vdd: RailIndex) -> Result<HalfAdder, BuildError> {
        c.ensure_buildable(vdd)?;

        let x = Xor2::new(c, vdd)?;
        let a = And2::new(c, vdd)?;

        let i0 = c.net();
        let i1 = c.net();
        c.interconnect(&[i0, x.i[0], a.i[0]])?;
        c.interconnect(&[i1, x.i[1], a.i[1]])?;

        Ok(HalfAdder {
            i: [i0, i1],
            s: x.o,
            c: a.o,
        })
    }
}

/// Full adder from two half adders and a carry-merge OR.
pub struct FullAdder {
    pub i: [NetIndex; 2],
    pub cin: NetIndex,
    pub s: NetIndex,
    pub cout: NetIndex,
}

impl FullAdder {
    pub fn new(c: &mut Circuit, vdd: RailIndex) -> Result<FullAdder, BuildError> {
        c.ensure_buildable(vdd)?;

        let h0 = HalfAdder::new(c, vdd)?;
        let h1 = HalfAdder::new(c, vdd)?;
        let or2 = Or2::new(c, vdd)?;

        c.bind(h0.s, h1.i[0])?;
        c.bind(h0.c, or2.i[0])?;
        c.bind(h1.c, or2.i[1])?;

        Ok(FullAdder {
            i: h0.i,
            cin: h1.i[1],
            s: h1.s,
            cout: or2.o,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn half_adder() -> (Circuit, HalfAdder) {
        let mut c = Circuit::new();
        let vdd = c.rail();
        let cell = HalfAdder::new(&mut c, vdd).unwrap();
        c.attach_load(cell.i[0]).unwrap();
        c.attach_load(cell.i[1]).unwrap();
        c.attach_load(cell.s).unwrap();
        c.attach_load(cell.c).unwrap();
        c.energize(vdd);
        (c, cell)
    }

    fn full_adder() -> (Circuit, FullAdder) {
        let mut c = Circuit::new();
        let vdd = c.rail();
        let cell = FullAdder::new(&mut c, vdd).unwrap();
        c.attach_load(cell.i[0]).unwrap();
        c.attach_load(cell.i[1]).unwrap();
        c.attach_load(cell.cin).unwrap();
        c.attach_load(cell.s).unwrap();
        c.attach_load(cell.cout).unwrap();
        c.energize(vdd);
        (c, cell)
    }

    #[test]
    fn test_half_adder_truth_table() {
        for bits in 0..4u8 {
            let (a, b) = (bits & 1 != 0, bits & 2 != 0);
            let (mut c, cell) = half_adder();
            c.set_load(cell.i[0], a);
            c.set_load(cell.i[1], b);
            assert_eq!(c.energized(cell.s), a ^ b, "a={} b={}", a, b);
            assert_eq!(c.energized(cell.c), a & b, "a={} b={}", a, b);
        }
    }

    #[test]
    fn test_half_adder_transitions() {
        let (mut c, cell) = half_adder();
        for bits in 0..4u8 {
            let (a, b) = (bits & 1 != 0, bits & 2 != 0);
            c.set_load(cell.i[0], a);
            c.set_load(cell.i[1], b);
            assert_eq!(c.energized(cell.s), a ^ b, "a={} b={}", a, b);
            assert_eq!(c.energized(cell.c), a & b, "a={} b={}", a, b);
        }
    }

    #[test]
    fn test_full_adder_truth_table() {
        for bits in 0..8u8 {
            let (a, b, cin) = (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0);
            let (mut c, cell) = full_adder();
            c.set_load(cell.i[0], a);
            c.set_load(cell.i[1], b);
            c.set_load(cell.cin, cin);
            let s = a ^ b ^ cin;
            let cout = (a & b) | (cin & (a ^ b));
            assert_eq!(c.energized(cell.s), s, "bits={:03b}", bits);
            assert_eq!(c.energized(cell.cout), cout, "bits={:03b}", bits);
        }
    }

    #[test]
    fn test_full_adder_transitions() {
        let (mut c, cell) = full_adder();
        for bits in 0..8u8 {
            let (a, b, cin) = (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0);
            c.set_load(cell.i[0], a);
            c.set_load(cell.i[1], b);
            c.set_load(cell.cin, cin);
            let s = a ^ b ^ cin;
            let cout = (a & b) | (cin & (a ^ b));
            assert_eq!(c.energized(cell.s), s, "bits={:03b}", bits);
            assert_eq!(c.energized(cell.cout), cout, "bits={:03b}", bits);
        }
    }

    #[test]
    fn test_full_adder_input_order_independent() {
        for bits in 0..8u8 {
            let (a, b, cin) = (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0);
            let (mut c, cell) = full_adder();
            c.set_load(cell.cin, cin);
            c.set_load(cell.i[1], b);
            c.set_load(cell.i[0], a);
            let s = a ^ b ^ cin;
            let cout = (a & b) | (cin & (a ^ b));
            assert_eq!(c.energized(cell.s), s, "bits={:03b}", bits);
            assert_eq!(c.energized(cell.cout), cout, "bits={:03b}", bits);
        }
    }
}
