use super::buf::Buf1;
use super::pg::{Pg, PgCin, PgPair};
use super::pg_merge::{PgHalfMergeR2, PgMergeR2};
use super::xor::Xor2;
use crate::netlist::{BuildError, Circuit, NetIndex, RailIndex};
use strum_macros::Display as StrumDisplay;

/// Kind tag for one cell position in the adder's layer table, displayed as
/// its diagram glyph.
#[derive(Debug, Clone, Copy, Eq, PartialEq, StrumDisplay)]
pub(crate) enum CellKind {
    #[strum(serialize = "G")]
    Pg,
    #[strum(serialize = "<")]
    PgCin,
    #[strum(serialize = "X")]
    PgMerge,
    #[strum(serialize = "Y")]
    PgHalfMerge,
    #[strum(serialize = "|")]
    Buf,
    #[strum(serialize = "S")]
    Sum,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum LayerOut {
    Pair(PgPair),
    Single(NetIndex),
}

/// One cell of the layer table kept for diagram rendering.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LayerCell {
    pub kind: CellKind,
    pub out: LayerOut,
}

/// Radix-2 Kogge-Stone adder with carry-in, width `2^height`.
///
/// Layer 0 computes per-bit (p, g) pairs, with bit 0's generate absorbing
/// the carry-in ([PgCin]). Each of the `height` merge layers doubles the
/// span of the prefix ranges using [PgMergeR2] for ranges that keep
/// merging, [PgHalfMergeR2] for ranges anchored at bit 0, and [Buf1] wires
/// carrying finished generates forward. A final rank of XOR cells forms
/// `sum[i] = p[i] ⊕ carry_into_i`.
///
/// `i0`, `i1` and `o` are LSB first; `cout` is the final cumulative
/// generate.
pub struct Ksa {
    pub i0: Vec<NetIndex>,
    pub i1: Vec<NetIndex>,
    pub cin: NetIndex,
    pub o: Vec<NetIndex>,
    pub cout: NetIndex,
    pub(crate) layers: Vec<Vec<LayerCell>>,
    height: u32,
}

/// 16-bit [Ksa].
pub fn ksa16(c: &mut Circuit, vdd: RailIndex) -> Result<Ksa, BuildError> {
    Ksa::new(c, vdd, 4)
}

/// 32-bit [Ksa].
pub fn ksa32(c: &mut Circuit, vdd: RailIndex) -> Result<Ksa, BuildError> {
    Ksa::new(c, vdd, 5)
}

/// 64-bit [Ksa].
pub fn ksa64(c: &mut Circuit, vdd: RailIndex) -> Result<Ksa, BuildError> {
    Ksa::new(c, vdd, 6)
}

impl Ksa {
    /// Builds an adder of width `2^height` bits. `height` must be at least 1.
    pub fn new(c: &mut Circuit, vdd: RailIndex, height: u32) -> Result<Ksa, BuildError> {
        assert!(height >= 1, "the prefix tree needs at least one layer");
        c.ensure_buildable(vdd)?;
        let width = 1usize << height;

        // GENERATE: bit 0 absorbs the carry-in, bits 1.. are plain PG.
        let pg0 = PgCin::new(c, vdd)?;
        let mut pgs = Vec::with_capacity(width - 1);
        for _ in 1..width {
            pgs.push(Pg::new(c, vdd)?);
        }

        let mut layers: Vec<Vec<LayerCell>> = Vec::with_capacity(height as usize + 2);
        let mut gen_layer = Vec::with_capacity(width);
        gen_layer.push(LayerCell {
            kind: CellKind::PgCin,
            out: LayerOut::Pair(pg0.o),
        });
        gen_layer.extend(pgs.iter().map(|pg| LayerCell {
            kind: CellKind::Pg,
            out: LayerOut::Pair(pg.o),
        }));
        layers.push(gen_layer);

        // Every p except bit 0's is consumed twice: once by the sum rank
        // (p_orig) and once by the merge tree (pgos), so it fans out
        // through a three-net interconnect.
        let mut p_orig = Vec::with_capacity(width);
        p_orig.push(pg0.o.p);
        let mut pgos: Vec<PgPair> = Vec::with_capacity(width - 1);
        for pg in &pgs {
            p_orig.push(c.net());
            pgos.push(PgPair {
                p: c.net(),
                g: pg.o.g,
            });
        }
        let pg_ps: Vec<NetIndex> = pgs.iter().map(|pg| pg.o.p).collect();
        let fan_ps: Vec<NetIndex> = pgos.iter().map(|pair| pair.p).collect();
        c.interconnect_parallel(&[&p_orig[1..], &pg_ps, &fan_ps])?;
        let mut gos = vec![pg0.o.g];

        // PREFIX MERGE: at layer l the stride is 2^l; pgos[i] holds the
        // still-merging (p, g) range ending at bit i + offset of the
        // previous layer, gos[i] the finished generate g[i:0].
        for layer in 0..height {
            let half = 1usize << layer;
            let full_count = width - half * 2;
            let last = layer == height - 1;

            let mut fulls = Vec::with_capacity(full_count);
            for _ in 0..full_count {
                fulls.push(PgMergeR2::new(c, vdd)?);
            }
            let mut halves = Vec::with_capacity(half);
            let mut bufs = Vec::with_capacity(half);
            for _ in 0..half {
                halves.push(PgHalfMergeR2::new(c, vdd)?);
                bufs.push(Buf1::new(c, vdd)?);
            }

            // A full merge takes its upper range from position i + half.
            // That position's output also feeds the i1 of the full merge
            // sitting there, so the two consumers share an interconnect.
            for (i, cell) in fulls.iter().enumerate() {
                let j = i + half;
                if j < full_count {
                    c.interconnect(&[pgos[j].p, cell.i0.p, fulls[j].i1.p])?;
                    c.interconnect(&[pgos[j].g, cell.i0.g, fulls[j].i1.g])?;
                } else {
                    c.bind(pgos[j].p, cell.i0.p)?;
                    c.bind(pgos[j].g, cell.i0.g)?;
                }
            }

            // Half merges anchor at bit 0; on the last layer there is no
            // full merge left to share their input with.
            for (i, cell) in halves.iter().enumerate() {
                if !last {
                    c.interconnect(&[pgos[i].p, cell.i0.p, fulls[i].i1.p])?;
                    c.interconnect(&[pgos[i].g, cell.i0.g, fulls[i].i1.g])?;
                } else {
                    c.interconnect(&[pgos[i].p, cell.i0.p])?;
                    c.interconnect(&[pgos[i].g, cell.i0.g])?;
                }
            }

            // Buffers carry the finished generates across the layer; the
            // same net also seeds the half merge at this position.
            for (i, buf) in bufs.iter().enumerate() {
                c.interconnect(&[gos[i], buf.i, halves[i].i1])?;
            }

            pgos = fulls.iter().map(|f| f.o).collect();
            gos = bufs
                .iter()
                .map(|b| b.o)
                .chain(halves.iter().map(|h| h.o))
                .collect();

            let mut row = Vec::with_capacity(full_count + 2 * half);
            row.extend(bufs.iter().map(|b| LayerCell {
                kind: CellKind::Buf,
                out: LayerOut::Single(b.o),
            }));
            row.extend(halves.iter().map(|h| LayerCell {
                kind: CellKind::PgHalfMerge,
                out: LayerOut::Single(h.o),
            }));
            row.extend(fulls.iter().map(|f| LayerCell {
                kind: CellKind::PgMerge,
                out: LayerOut::Pair(f.o),
            }));
            layers.push(row);
        }

        // SUM: sum[i] = p_orig[i] xor carry-into-i. Bit 0's carry is the
        // external cin, shared with the PgCin stage through an
        // interconnect; bit i's carry is the cumulative generate g[i-1:0].
        let cin = c.net();
        let mut o = Vec::with_capacity(width);
        let mut sum_layer = Vec::with_capacity(width);
        for (i, &p) in p_orig.iter().enumerate() {
            let x = Xor2::new(c, vdd)?;
            c.bind(x.i[0], p)?;
            if i == 0 {
                c.interconnect(&[x.i[1], cin, pg0.cin])?;
            } else {
                c.bind(x.i[1], gos[i - 1])?;
            }
            o.push(x.o);
            sum_layer.push(LayerCell {
                kind: CellKind::Sum,
                out: LayerOut::Single(x.o),
            });
        }
        layers.push(sum_layer);

        let cout = gos[width - 1];

        let mut i0 = Vec::with_capacity(width);
        let mut i1 = Vec::with_capacity(width);
        i0.push(pg0.i[0]);
        i1.push(pg0.i[1]);
        for pg in &pgs {
            i0.push(pg.i[0]);
            i1.push(pg.i[1]);
        }

        Ok(Ksa {
            i0,
            i1,
            cin,
            o,
            cout,
            layers,
            height,
        })
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn width(&self) -> usize {
        1 << self.height
    }
}
