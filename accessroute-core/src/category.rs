//! Categories describing what kind of place a point of interest is.
//!
//! # Examples
//! ```
//! use accessroute_core::PoiCategory;
//!
//! assert_eq!(PoiCategory::HistoricalSite.as_str(), "historical-site");
//! assert_eq!("museum".parse(), Ok(PoiCategory::Museum));
//! ```

use thiserror::Error;

/// Broad category of a point of interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum PoiCategory {
    /// Castles, ruins and other historic places.
    HistoricalSite,
    /// Museums and galleries.
    Museum,
    /// Statues and memorials.
    Monument,
    /// Panoramic lookouts.
    Viewpoint,
    /// Public squares and piazzas.
    Square,
    /// Piers, canals and seafronts.
    Waterfront,
}

impl PoiCategory {
    /// Every category in declaration order.
    pub const ALL: [Self; 6] = [
        Self::HistoricalSite,
        Self::Museum,
        Self::Monument,
        Self::Viewpoint,
        Self::Square,
        Self::Waterfront,
    ];

    /// Return the category as a kebab-case `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HistoricalSite => "historical-site",
            Self::Museum => "museum",
            Self::Monument => "monument",
            Self::Viewpoint => "viewpoint",
            Self::Square => "square",
            Self::Waterfront => "waterfront",
        }
    }
}

impl std::fmt::Display for PoiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognised category name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown point of interest category '{0}'")]
pub struct UnknownCategory(pub String);

impl std::str::FromStr for PoiCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalised)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn display_matches_as_str() {
        assert_eq!(PoiCategory::Waterfront.to_string(), PoiCategory::Waterfront.as_str());
    }

    #[test]
    fn parsing_round_trips_every_category() {
        for category in PoiCategory::ALL {
            assert_eq!(PoiCategory::from_str(category.as_str()), Ok(category));
        }
    }

    #[test]
    fn parsing_rejects_unknown() {
        let err = PoiCategory::from_str("casino").unwrap_err();
        assert!(err.to_string().contains("unknown point of interest category"));
    }
}
