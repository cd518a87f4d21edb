use crate::netlist::{BuildError, Circuit, NetIndex, RailIndex};

/// 2-input NAND: two parallel pull-up devices merged onto one output net.
pub struct Nand2 {
    pub i: [NetIndex; 2],
    pub o: NetIndex,
}

impl Nand2 {
    pub fn new(c: &mut Circuit, vdd: RailIndex) -> Result<Nand2, BuildError> {
        c.ensure_buildable(vdd)?;

        let p0 = c.pfet();
        let p1 = c.pfet();
        c.rail_register(vdd, &[p0.source, p1.source])?;

        let o = c.net();
        c.interconnect(&[p0.drain, p1.drain, o])?;

        Ok(Nand2 {
            i: [p0.gate, p1.gate],
            o,
        })
    }
}

/// 2-input AND: the NAND pair gating a third pull-up.
pub struct And2 {
    pub i: [NetIndex; 2],
    pub o: NetIndex,
}

impl And2 {
    pub fn new(c: &mut Circuit, vdd: RailIndex) -> Result<And2, BuildError> {
        c.ensure_buildable(vdd)?;

        let p0 = c.pfet();
        let p1 = c.pfet();
        let p2 = c.pfet();
        c.rail_register(vdd, &[p0.source, p1.source, p2.source])?;
        c.interconnect(&[p0.drain, p1.drain, p2.gate])?;

        Ok(And2 {
            i: [p0.gate, p1.gate],
            o: p2.drain,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IN2: [(bool, bool); 4] = [(false, false), (false, true), (true, false), (true, true)];

    fn nand2_cell() -> (Circuit, Nand2) {
        let mut c = Circuit::new();
        let vdd = c.rail();
        let cell = Nand2::new(&mut c, vdd).unwrap();
        c.attach_load(cell.i[0]).unwrap();
        c.attach_load(cell.i[1]).unwrap();
        c.attach_load(cell.o).unwrap();
        c.energize(vdd);
        (c, cell)
    }

    fn and2_cell() -> (Circuit, And2) {
        let mut c = Circuit::new();
        let vdd = c.rail();
        let cell = And2::new(&mut c, vdd).unwrap();
        c.attach_load(cell.i[0]).unwrap();
        c.attach_load(cell.i[1]).unwrap();
        c.attach_load(cell.o).unwrap();
        c.energize(vdd);
        (c, cell)
    }

    #[test]
    fn test_nand2_truth_table() {
        for &(a, b) in &IN2 {
            let (mut c, cell) = nand2_cell();
            c.set_load(cell.i[0], a);
            c.set_load(cell.i[1], b);
            assert_eq!(c.energized(cell.o), !(a & b), "a={} b={}", a, b);
        }
    }

    #[test]
    fn test_nand2_transitions() {
        let (mut c, cell) = nand2_cell();
        for &(a, b) in &IN2 {
            c.set_load(cell.i[0], a);
            c.set_load(cell.i[1], b);
            assert_eq!(c.energized(cell.o), !(a & b), "a={} b={}", a, b);
        }
        for &(a, b) in IN2.iter().rev() {
            c.set_load(cell.i[0], a);
            c.set_load(cell.i[1], b);
            assert_eq!(c.energized(cell.o), !(a & b), "a={} b={}", a, b);
        }
    }

    #[test]
    fn test_and2_truth_table() {
        for &(a, b) in &IN2 {
            let (mut c, cell) = and2_cell();
            c.set_load(cell.i[0], a);
            c.set_load(cell.i[1], b);
            assert_eq!(c.energized(cell.o), a & b, "a={} b={}", a, b);
        }
    }

    #[test]
    fn test_and2_transitions() {
        let (mut c, cell) = and2_cell();
        for &(a, b) in &IN2 {
            c.set_load(cell.i[0], a);
            c.set_load(cell.i[1], b);
            assert_eq!(c.energized(cell.o), a & b, "a={} b={}", a, b);
        }
        for &(a, b) in IN2.iter().rev() {
            c.set_load(cell.i[0], a);
            c.set_load(cell.i[1], b);
            assert_eq!(c.energized(cell.o), a & b, "a={} b={}", a, b);
        }
    }
}
