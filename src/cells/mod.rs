mod adder;
mod and;
mod buf;
mod ksa;
mod not;
mod or;
mod pg;
mod pg_merge;
mod xor;

pub use adder::*;
pub use and::*;
pub use buf::*;
pub use ksa::{ksa16, ksa32, ksa64, Ksa};
pub use not::*;
pub use or::*;
pub use pg::*;
pub use pg_merge::*;
pub use xor::*;

pub(crate) use ksa::{LayerCell, LayerOut};
