//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  Aircraft and runways are referenced
//! everywhere by these identifiers, never by live references.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID": the inner type's `MAX`.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
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
    /// Identity of one aircraft in the fleet.  Assigned sequentially and never
    /// reused, so removed aircraft leave gaps.
    pub struct AircraftId(u32);
}

typed_id! {
    /// Identity of a runway resource.  The airport has exactly three.
    pub struct RunwayId(u8);
}

typed_id! {
    /// Airspace Violation Notice id.  Monotonically increasing from 1.
    pub struct AvnId(u64);
}

impl RunwayId {
    /// RWY-A, aligned North-South.  Preferred by arrivals.
    pub const RWY_A: RunwayId = RunwayId(0);
    /// RWY-B, aligned East-West.  Preferred by departures.
    pub const RWY_B: RunwayId = RunwayId(1);
    /// RWY-C, flexible.  Emergency and cargo overflow.
    pub const RWY_C: RunwayId = RunwayId(2);

    /// Every runway, in table order.
    pub const ALL: [RunwayId; 3] = [Self::RWY_A, Self::RWY_B, Self::RWY_C];

    /// Published runway designator, or `"none"` for an id outside the table.
    pub fn name(self) -> &'static str {
        match self.0 {
            0 => "RWY-A",
            1 => "RWY-B",
            2 => "RWY-C",
            _ => "none",
        }
    }
}
