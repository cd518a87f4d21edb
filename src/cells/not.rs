use crate::netlist::{BuildError, Circuit, NetIndex, RailIndex};

/// Inverter: a single p-type FET pulling the output up while the input is
/// low.
pub struct Not {
    pub i: NetIndex,
    pub o: NetIndex,
}

impl Not {
    pub fn new(c: &mut Circuit, vdd: RailIndex) -> Result<Not, BuildError> {
        c.ensure_buildable(vdd)?;

        let p0 = c.pfet();
        c.rail_register(vdd, &[p0.source])?;

        Ok(Not {
            i: p0.gate,
            o: p0.drain,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_cell() -> (Circuit, Not) {
        let mut c = Circuit::new();
        let vdd = c.rail();
        let cell = Not::new(&mut c, vdd).unwrap();
        c.attach_load(cell.i).unwrap();
        c.attach_load(cell.o).unwrap();
        c.energize(vdd);
        (c, cell)
    }

    #[test]
    fn test_not_truth_table() {
        for &i in &[false, true] {
            let (mut c, cell) = not_cell();
            c.set_load(cell.i, i);
            assert_eq!(c.energized(cell.o), !i);
        }
    }

    #[test]
    fn test_not_transitions() {
        let (mut c, cell) = not_cell();
        for &i in &[false, true, false, true, true, false] {
            c.set_load(cell.i, i);
            assert_eq!(c.energized(cell.o), !i);
        }
    }

    #[test]
    fn test_not_rejects_energized_rail() {
        let mut c = Circuit::new();
        let vdd = c.rail();
        c.energize(vdd);
        assert!(matches!(
            Not::new(&mut c, vdd),
            Err(BuildError::RailEnergized)
        ));
    }
}
