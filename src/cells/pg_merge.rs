use super::and::And2;
use super::or::Or2;
use super::pg::PgPair;
use crate::netlist::{BuildError, Circuit, NetIndex, RailIndex};

/// Radix-2 prefix merge: combines `(p, g)[i:k]` (`i0`) with
/// `(p, g)[k-1:j]` (`i1`) into `(p, g)[i:j]`:
///
/// `p = p_ik ∧ p_kj`, `g = g_ik ∨ (p_ik ∧ g_kj)`.
pub struct PgMergeR2 {
    pub i0: PgPair,
    pub i1: PgPair,
    pub o: PgPair,
}

impl PgMergeR2 {
    pub fn new(c: &mut Circuit, vdd: RailIndex) -> Result<PgMergeR2, BuildError> {
        c.ensure_buildable(vdd)?;

        let and2_0 = And2::new(c, vdd)?;
        let and2_1 = And2::new(c, vdd)?;
        let or2 = Or2::new(c, vdd)?;

        let p_ik = c.net();
        c.bind(and2_1.o, or2.i[0])?;
        c.interconnect(&[p_ik, and2_0.i[1], and2_1.i[1]])?;

        Ok(PgMergeR2 {
            i0: PgPair {
                p: p_ik,
                g: or2.i[1],
            },
            i1: PgPair {
                p: and2_0.i[0],
                g: and2_1.i[0],
            },
            o: PgPair {
                p: and2_0.o,
                g: or2.o,
            },
        })
    }
}

/// Degenerate merge for ranges touching bit 0, where the combined propagate
/// is never consumed: `g = g_ik ∨ (p_ik ∧ g_kj)` only.
pub struct PgHalfMergeR2 {
    pub i0: PgPair,
    pub i1: NetIndex,
    pub o: NetIndex,
}

impl PgHalfMergeR2 {
    pub fn new(c: &mut Circuit, vdd: RailIndex) -> Result<PgHalfMergeR2, BuildError> {
        c.ensure_buildable(vdd)?;

        let and2 = And2::new(c, vdd)?;
        let or2 = Or2::new(c, vdd)?;
        c.bind(and2.o, or2.i[0])?;

        Ok(PgHalfMergeR2 {
            i0: PgPair {
                p: and2.i[1],
                g: or2.i[1],
            },
            i1: and2.i[0],
            o: or2.o,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merge_cell() -> (Circuit, PgMergeR2) {
        let mut c = Circuit::new();
        let vdd = c.rail();
        let cell = PgMergeR2::new(&mut c, vdd).unwrap();
        for &n in &[cell.i0.p, cell.i0.g, cell.i1.p, cell.i1.g, cell.o.p, cell.o.g] {
            c.attach_load(n).unwrap();
        }
        c.energize(vdd);
        (c, cell)
    }

    fn half_merge_cell() -> (Circuit, PgHalfMergeR2) {
        let mut c = Circuit::new();
        let vdd = c.rail();
        let cell = PgHalfMergeR2::new(&mut c, vdd).unwrap();
        for &n in &[cell.i0.p, cell.i0.g, cell.i1, cell.o] {
            c.attach_load(n).unwrap();
        }
        c.energize(vdd);
        (c, cell)
    }

    #[test]
    fn test_pg_merge_truth_table() {
        for bits in 0..16u8 {
            let (p0, g0, p1, g1) = (
                bits & 1 != 0,
                bits & 2 != 0,
                bits & 4 != 0,
                bits & 8 != 0,
            );
            let (mut c, cell) = merge_cell();
            c.set_load(cell.i0.p, p0);
            c.set_load(cell.i0.g, g0);
            c.set_load(cell.i1.p, p1);
            c.set_load(cell.i1.g, g1);
            assert_eq!(c.energized(cell.o.p), p0 & p1, "bits={:04b}", bits);
            assert_eq!(c.energized(cell.o.g), g0 | (p0 & g1), "bits={:04b}", bits);
        }
    }

    #[test]
    fn test_pg_merge_transitions() {
        let (mut c, cell) = merge_cell();
        for bits in 0..16u8 {
            let (p0, g0, p1, g1) = (
                bits & 1 != 0,
                bits & 2 != 0,
                bits & 4 != 0,
                bits & 8 != 0,
            );
            c.set_load(cell.i0.p, p0);
            c.set_load(cell.i0.g, g0);
            c.set_load(cell.i1.p, p1);
            c.set_load(cell.i1.g, g1);
            assert_eq!(c.energized(cell.o.p), p0 & p1, "bits={:04b}", bits);
            assert_eq!(c.energized(cell.o.g), g0 | (p0 & g1), "bits={:04b}", bits);
        }
    }

    #[test]
    fn test_pg_half_merge_truth_table() {
        for bits in 0..8u8 {
            let (p0, g0, g1) = (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0);
            let (mut c, cell) = half_merge_cell();
            c.set_load(cell.i0.p, p0);
            c.set_load(cell.i0.g, g0);
            c.set_load(cell.i1, g1);
            assert_eq!(c.energized(cell.o), g0 | (p0 & g1), "bits={:03b}", bits);
        }
    }

    #[test]
    fn test_pg_half_merge_transitions() {
        let (mut c, cell) = half_merge_cell();
        for bits in 0..8u8 {
            let (p0, g0, g1) = (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0);
            c.set_load(cell.i0.p, p0);
            c.set_load(cell.i0.g, g0);
            c.set_load(cell.i1, g1);
            assert_eq!(c.energized(cell.o), g0 | (p0 & g1), "bits={:03b}", bits);
        }
    }
}
