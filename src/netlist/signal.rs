use super::circuit::Circuit;
use super::error::BuildError;
use super::types::NetIndex;
use bitvec::prelude::*;

/// Binds an ordered, LSB-first group of nets to an unsigned integer.
///
/// Construction attaches the default passive load to every net, so the
/// group can be written from outside the netlist and read back after
/// propagation settles.
///
/// # Examples
/// ```
/// use fetsim::{Circuit, Signal};
///
/// let mut c = Circuit::new();
/// let nets: Vec<_> = (0..8).map(|_| c.net()).collect();
/// let sig = Signal::new(&mut c, &nets).unwrap();
///
/// sig.set(&mut c, 0b1010_0110);
/// assert_eq!(sig.get(&c), 0b1010_0110);
/// ```
#[derive(Debug, Clone)]
pub struct Signal {
    nets: Vec<NetIndex>,
}

impl Signal {
    /// Wraps `nets` (first element is bit 0) and attaches one load per net.
    pub fn new(c: &mut Circuit, nets: &[NetIndex]) -> Result<Signal, BuildError> {
        for &net in nets {
            c.attach_load(net)?;
        }
        Ok(Signal {
            nets: nets.to_vec(),
        })
    }

    /// Drives each net's load from the matching bit of `value`.
    pub fn set(&self, c: &mut Circuit, value: u64) {
        let bits = value.view_bits::<Lsb0>();
        for (i, &net) in self.nets.iter().enumerate() {
            c.set_load(net, bits[i]);
        }
    }

    /// Reads the group back as an integer: bit i is net i's energization.
    pub fn get(&self, c: &Circuit) -> u64 {
        let mut value = 0u64;
        for (i, &net) in self.nets.iter().enumerate() {
            if c.energized(net) {
                value |= 1 << i;
            }
        }
        value
    }

    pub fn width(&self) -> usize {
        self.nets.len()
    }
}
