//! Transistor-level digital logic simulation.
//!
//! fetsim models the electrical network itself rather than Boolean
//! expressions: nets (wires), p-type FET switches, power rails and passive
//! loads, tied together by purely conductive bridges. A net is energized
//! iff any driver on it asserts; every state change propagates
//! synchronously through driver hooks until the network settles. Standard
//! cells compose FETs and bridges into gates, gates into adders, and
//! adders into a radix-2 [Kogge-Stone](Ksa) prefix adder of 16, 32 or 64
//! bits with carry-in.
//!
//! Netlists are built while the power rail is de-energized, loads are
//! attached to every externally driven or observed terminal, and the rail
//! is energized last. After that only inputs move:
//!
//! ```
//! use fetsim::{ksa16, Circuit, Signal};
//!
//! let mut c = Circuit::new();
//! let vdd = c.rail();
//! let ksa = ksa16(&mut c, vdd).unwrap();
//! c.attach_load(ksa.cin).unwrap();
//! c.attach_load(ksa.cout).unwrap();
//! let a = Signal::new(&mut c, &ksa.i0).unwrap();
//! let b = Signal::new(&mut c, &ksa.i1).unwrap();
//! let sum = Signal::new(&mut c, &ksa.o).unwrap();
//! c.energize(vdd);
//!
//! a.set(&mut c, 0xFFFF);
//! b.set(&mut c, 0x0001);
//! assert_eq!(sum.get(&c), 0x0000);
//! assert!(c.energized(ksa.cout));
//! ```

pub mod cells;
mod diagram;
pub mod netlist;

pub use cells::{
    ksa16, ksa32, ksa64, And2, Buf1, Buf2, FullAdder, HalfAdder, Ksa, Nand2, Nor2, Not, Or2, Or3,
    Pg, PgCin, PgHalfMergeR2, PgMergeR2, PgPair, Xnor2, Xor2,
};
pub use netlist::{
    BridgeIndex, BuildError, Circuit, DriverKind, FetIndex, NetIndex, Owner, PFet, RailIndex,
    Signal,
};
