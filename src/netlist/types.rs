use std::fmt::{self, Display, Formatter};
use strum_macros::Display as StrumDisplay;

/// Declares a `#[repr(transparent)]` index newtype for one arena table.
macro_rules! define_index {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {$(
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
        pub struct $name {
            pub(crate) idx: usize,
        }
        impl $name {
            pub(crate) const fn new(idx: usize) -> $name {
                $name { idx }
            }
        }
        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.idx)
            }
        }
    )+};
}

define_index!(
    /// Stable handle to a net in a [Circuit](super::Circuit).
    ///
    /// Cells expose their terminal nets as `NetIndex` values; the index stays
    /// valid for the lifetime of the circuit (nets are never removed).
    NetIndex,
    /// Stable handle to a bridge (binding or interconnect).
    BridgeIndex,
    /// Stable handle to a p-type FET.
    FetIndex,
    /// Stable handle to a power rail.
    RailIndex,
);

/// Identity of the element that owns a driver.
///
/// A net holds at most one driver per owner; `set` calls address drivers by
/// this identity. A FET owns up to three drivers but they sit on three
/// different nets, so the per-net lookup stays unambiguous.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum Owner {
    /// A passive load. The tag distinguishes loads sharing one net; the
    /// default load (the one the signal interface drives) has tag 0.
    Load(u32),
    Rail(RailIndex),
    Bridge(BridgeIndex),
    Fet(FetIndex),
}

/// Driver variant tag. Doubles as the owner identity (see [Owner]) and as
/// the dispatch key for the change hook: when a net's aggregate state flips,
/// the peer driver's hook is selected by matching on this tag.
#[derive(Clone, Copy, Eq, PartialEq, Debug, StrumDisplay)]
pub enum DriverKind {
    #[strum(serialize = "load")]
    Load(u32),
    #[strum(serialize = "rail")]
    Rail(RailIndex),
    #[strum(serialize = "bridge")]
    Bridge(BridgeIndex),
    #[strum(serialize = "fet.s")]
    FetSource(FetIndex),
    #[strum(serialize = "fet.d")]
    FetDrain(FetIndex),
    #[strum(serialize = "fet.g")]
    FetGate(FetIndex),
}

impl DriverKind {
    pub fn owner(self) -> Owner {
        match self {
            DriverKind::Load(tag) => Owner::Load(tag),
            DriverKind::Rail(r) => Owner::Rail(r),
            DriverKind::Bridge(b) => Owner::Bridge(b),
            DriverKind::FetSource(f) | DriverKind::FetDrain(f) | DriverKind::FetGate(f) => {
                Owner::Fet(f)
            }
        }
    }
}

/// One driver slot on a net: the variant tag plus the asserting flag.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Driver {
    pub kind: DriverKind,
    pub asserting: bool,
}

impl Driver {
    pub fn new(kind: DriverKind) -> Driver {
        Driver {
            kind,
            asserting: false,
        }
    }
}
