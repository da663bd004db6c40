//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` so
//! loaders can construct IDs straight from raw columns.
//!
//! Only [`AgentId`] indexes storage.  The other IDs are domain identities
//! carried by components and messages; their zero value is meaningful
//! (`PartId::NONE`, `GroupId::ANY`) so they default to zero rather than to a
//! max sentinel.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize`.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a component record in SoA storage.
    pub struct AgentId(u32);
}

typed_id! {
    /// Part-number identity.  Several physical parts share one `PartId`.
    pub struct PartId(u16);
}

typed_id! {
    /// Serial-number identity of one physical part.
    pub struct SerialId(u32);
}

typed_id! {
    /// Packed grid position (`x = id mod 1000`, `y = id div 1000`).
    /// See [`LocationId::grid_point`](crate::LocationId::grid_point).
    pub struct LocationId(u32);
}

typed_id! {
    /// Interchangeability group.  [`GroupId::ANY`] fits every group.
    pub struct GroupId(u16);
}

impl AgentId {
    /// Sentinel meaning "no valid agent", equivalent to `u32::MAX`.
    pub const INVALID: AgentId = AgentId(u32::MAX);
}

impl Default for AgentId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl PartId {
    /// "No part": written to `best_replacement` when a search finds nothing.
    pub const NONE: PartId = PartId(0);

    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

impl Default for PartId {
    #[inline(always)]
    fn default() -> Self {
        Self::NONE
    }
}

impl Default for SerialId {
    #[inline(always)]
    fn default() -> Self {
        SerialId(0)
    }
}

impl Default for LocationId {
    #[inline(always)]
    fn default() -> Self {
        LocationId(0)
    }
}

impl GroupId {
    /// Universal compatibility: a candidate in group 0 fits any requester.
    pub const ANY: GroupId = GroupId(0);

    /// `true` if a candidate in `candidate` may replace a part in `self`.
    #[inline]
    pub fn accepts(self, candidate: GroupId) -> bool {
        self == candidate || candidate == Self::ANY
    }
}

impl Default for GroupId {
    #[inline(always)]
    fn default() -> Self {
        Self::ANY
    }
}
