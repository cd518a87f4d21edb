use thiserror::Error;

/// Construction-time misuse of the netlist API.
///
/// These are programmer errors, not runtime conditions: once a circuit is
/// built and energized, hook dispatch has no error path. Rail-driver misuse
/// after energization (de-asserting a rail driver, asserting one while the
/// rail is down) panics instead, see the [rail](crate::Circuit::energize)
/// documentation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    #[error("cannot create a component using an energized power rail")]
    RailEnergized,
    #[error("net already has two drivers attached")]
    NetCapacityExceeded,
    #[error("the owning element already has a driver on this net")]
    DuplicateDriver,
    #[error("cannot attach to a net that is already energized")]
    EnergizedSplice,
}
