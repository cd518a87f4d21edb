mod bridge;
mod circuit;
mod error;
mod fet;
mod net;
mod rail;
mod signal;
mod types;

pub use circuit::Circuit;
pub use error::BuildError;
pub use fet::PFet;
pub use signal::Signal;
pub use types::{BridgeIndex, DriverKind, FetIndex, NetIndex, Owner, RailIndex};
