//! Runway records.

use atc_core::{AircraftId, RunwayId};

/// Physical alignment of a runway.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    NorthSouth,
    EastWest,
    /// Backup strip usable by any direction (emergency / cargo overflow).
    Flexible,
}

/// One exclusive runway resource.
///
/// `holder` is private: only [`RunwayManager`][crate::RunwayManager] may
/// change it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Runway {
    pub id:        RunwayId,
    pub name:      &'static str,
    pub alignment: Alignment,
    pub(crate) holder: Option<AircraftId>,
}

impl Runway {
    pub(crate) fn new(id: RunwayId, alignment: Alignment) -> Self {
        Self { id, name: id.name(), alignment, holder: None }
    }

    /// The aircraft currently holding this runway, if any.
    #[inline]
    pub fn holder(&self) -> Option<AircraftId> {
        self.holder
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.holder.is_some()
    }
}
