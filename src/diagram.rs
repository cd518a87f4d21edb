//! ASCII and coloured renderings of the adder's prefix tree.

use crate::cells::{Ksa, LayerCell, LayerOut};
use crate::netlist::Circuit;
use colour::{blue, cyan, green, grey, red};

impl Ksa {
    /// Plain-text structure diagram: one row per layer, columns MSB first,
    /// one glyph per cell (`<` PG+cin, `G` PG, `X` full merge, `Y` half
    /// merge, `|` buffer, `S` sum XOR).
    pub fn diagram(&self) -> String {
        let width = self.width();
        let mut rows = Vec::with_capacity(self.layers.len() + 1);
        rows.push(
            (0..width)
                .rev()
                .map(|i| format!("{:<2}", i))
                .collect::<Vec<_>>()
                .join(" "),
        );
        for layer in &self.layers {
            rows.push(
                layer
                    .iter()
                    .rev()
                    .map(|cell| format!("{:<2}", cell.kind))
                    .collect::<Vec<_>>()
                    .join(" "),
            );
        }
        rows.join("\n")
    }

    /// Prints the structure diagram with each cell's live output bits:
    /// grey glyphs, red propagate, blue generate, green single outputs,
    /// cyan carry-in/out.
    pub fn print_state_diagram(&self, c: &Circuit) {
        let width = self.width() as i64;
        let header = (-1..=width)
            .rev()
            .map(|i| format!("{:<3}", i))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{}", header);

        let last = self.layers.len() - 1;
        for (row, layer) in self.layers.iter().enumerate() {
            if row == last {
                grey!("Co");
                cyan!("{} ", c.energized(self.cout) as u8);
            } else {
                print!("    ");
            }
            for cell in layer.iter().rev() {
                print_cell(c, cell);
                print!(" ");
            }
            if row == 0 {
                grey!("Ci");
                cyan!("{}", c.energized(self.cin) as u8);
            }
            println!();
        }
    }
}

fn print_cell(c: &Circuit, cell: &LayerCell) {
    grey!("{}", cell.kind);
    match cell.out {
        LayerOut::Pair(pair) => {
            red!("{}", c.energized(pair.p) as u8);
            blue!("{}", c.energized(pair.g) as u8);
        }
        LayerOut::Single(net) => {
            green!("{} ", c.energized(net) as u8);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cells::Ksa;
    use crate::netlist::Circuit;

    #[test]
    fn test_diagram_shape() {
        let mut c = Circuit::new();
        let vdd = c.rail();
        let ksa = Ksa::new(&mut c, vdd, 4).unwrap();

        let diagram = ksa.diagram();
        let rows: Vec<&str> = diagram.lines().collect();
        // header + generate + 4 merge layers + sum rank
        assert_eq!(rows.len(), 1 + 1 + 4 + 1);

        // Generate layer: PGCin at bit 0 (rightmost), PG elsewhere.
        let generate = rows[1];
        assert!(generate.trim_end().ends_with('<'));
        assert!(generate.starts_with('G'));

        // Sum rank is all XOR cells.
        let sum = rows.last().unwrap();
        assert_eq!(sum.matches('S').count(), 16);
    }

    #[test]
    fn test_diagram_layer_widths() {
        let mut c = Circuit::new();
        let vdd = c.rail();
        let ksa = Ksa::new(&mut c, vdd, 3).unwrap();
        // Every layer spans the full word: bufs + halves + fulls == width.
        for layer in &ksa.layers {
            assert_eq!(layer.len(), 8);
        }
    }
}
