//! Cultural sites that tours grant access to.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::AttractionRecord;

/// A cultural site with an associated cultural value.
///
/// Attractions are immutable once loaded. Tours hold copies keyed by
/// [`Attraction::id`]; identity is the identifier, not the value.
///
/// # Examples
/// ```
/// use cicerone_core::Attraction;
///
/// let colosseum = Attraction::new("colosseum", 9);
/// assert_eq!(colosseum.id, "colosseum");
/// assert_eq!(colosseum.cultural_value, 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Attraction {
    /// Stable identifier, unique within a catalog.
    pub id: String,
    /// Cultural score contributed once per package that covers the site.
    pub cultural_value: u32,
}

impl Attraction {
    /// Construct an attraction from its identifier and cultural value.
    pub fn new(id: impl Into<String>, cultural_value: u32) -> Self {
        Self {
            id: id.into(),
            cultural_value,
        }
    }
}

impl From<AttractionRecord> for Attraction {
    fn from(record: AttractionRecord) -> Self {
        Self {
            id: record.id,
            cultural_value: record.cultural_value,
        }
    }
}
