//! Read-only catalogues of points of interest.
//!
//! The [`PoiCatalog`] trait exposes a fixed, ordered list of POIs and
//! derives profile-specific orderings from it. [`StaticCatalog`] holds the
//! list in memory and ships the Trieste reference dataset.

use std::collections::HashSet;

use geo::Coord;
use thiserror::Error;

use crate::{
    AccessibilityProfile, FeatureKind, PoiCategory, PoiError, PointOfInterest, ProfileRatings,
};

/// Read-only access to a fixed set of points of interest.
///
/// Implementations must return POIs in a stable insertion order; the
/// provided methods rely on it for deterministic tie-breaking.
///
/// # Examples
///
/// ```rust
/// use accessroute_core::{AccessibilityProfile, PoiCatalog, StaticCatalog};
///
/// let catalog = StaticCatalog::trieste();
/// let rated = catalog.rated_points_of_interest(AccessibilityProfile::Wheelchair);
/// assert_eq!(rated.first().map(|poi| poi.name.as_str()), Some("Piazza Unità d'Italia"));
/// ```
pub trait PoiCatalog: Send + Sync {
    /// Return every point of interest in insertion order.
    fn points_of_interest(&self) -> &[PointOfInterest];

    /// Return the points sorted by descending rating for `profile`.
    ///
    /// Equal ratings keep their insertion order.
    fn rated_points_of_interest(&self, profile: AccessibilityProfile) -> Vec<PointOfInterest> {
        let mut pois = self.points_of_interest().to_vec();
        // `sort_by` is stable, so ties keep catalogue order.
        pois.sort_by(|a, b| b.rating(profile).total_cmp(&a.rating(profile)));
        pois
    }

    /// Look up a point by identifier.
    fn find(&self, id: u64) -> Option<&PointOfInterest> {
        self.points_of_interest().iter().find(|poi| poi.id == id)
    }

    /// Look up a point by name, ignoring case and surrounding whitespace.
    fn find_by_name(&self, name: &str) -> Option<&PointOfInterest> {
        let wanted = name.trim().to_lowercase();
        self.points_of_interest()
            .iter()
            .find(|poi| poi.name.trim().to_lowercase() == wanted)
    }
}

/// Errors raised while building a [`StaticCatalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No points of interest were supplied.
    #[error("catalogue must contain at least one point of interest")]
    Empty,
    /// Two points shared an identifier.
    #[error("duplicate point of interest id {id}")]
    DuplicateId {
        /// The repeated identifier.
        id: u64,
    },
    /// A point failed validation.
    #[error(transparent)]
    InvalidPoi(#[from] PoiError),
    /// The JSON payload could not be decoded.
    #[cfg(feature = "serde")]
    #[error("failed to parse catalogue JSON")]
    Parse {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

/// In-memory catalogue with a fixed insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticCatalog {
    pois: Vec<PointOfInterest>,
}

impl StaticCatalog {
    /// Validate and construct a catalogue.
    ///
    /// # Errors
    /// Returns [`CatalogError`] when `points` is empty, contains duplicate
    /// identifiers or contains an invalid point.
    pub fn new<I>(points: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = PointOfInterest>,
    {
        let pois: Vec<PointOfInterest> = points.into_iter().collect();
        if pois.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::with_capacity(pois.len());
        for poi in &pois {
            poi.validate()?;
            if !seen.insert(poi.id) {
                return Err(CatalogError::DuplicateId { id: poi.id });
            }
        }
        Ok(Self { pois })
    }

    /// Decode and validate a catalogue from a JSON array of points.
    ///
    /// # Errors
    /// Returns [`CatalogError::Parse`] for malformed JSON and the errors of
    /// [`StaticCatalog::new`] for invalid content.
    #[cfg(feature = "serde")]
    #[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let pois: Vec<PointOfInterest> =
            serde_json::from_str(json).map_err(|source| CatalogError::Parse { source })?;
        Self::new(pois)
    }

    /// The six-point reference dataset for central Trieste.
    #[must_use]
    pub fn trieste() -> Self {
        use crate::FeatureKind::{
            AccessibleToilet, AudioGuide, Elevator, RestArea, SmoothSurface, TactilePaving,
            VisualSignage, WidePath,
        };

        let pois = vec![
            fixture_poi(
                1,
                "Piazza Unità d'Italia",
                "The largest sea-facing square in Europe, surrounded by elegant buildings.",
                (45.6467, 13.7628),
                PoiCategory::Square,
                [0.95, 0.95, 0.85, 0.90],
                &[SmoothSurface, WidePath, RestArea, AccessibleToilet, VisualSignage],
            ),
            fixture_poi(
                2,
                "Castello di San Giusto",
                "Historic castle and fortress with panoramic views of Trieste.",
                (45.6478, 13.7700),
                PoiCategory::HistoricalSite,
                [0.40, 0.45, 0.60, 0.80],
                &[AudioGuide, RestArea, VisualSignage],
            ),
            fixture_poi(
                3,
                "Teatro Romano",
                "Ancient Roman theater dating back to the 1st century AD.",
                (45.6485, 13.7656),
                PoiCategory::HistoricalSite,
                [0.50, 0.55, 0.70, 0.85],
                &[VisualSignage, AudioGuide],
            ),
            fixture_poi(
                4,
                "Molo Audace",
                "Historic pier extending into the Adriatic Sea, perfect for walks.",
                (45.6478, 13.7640),
                PoiCategory::Waterfront,
                [0.90, 0.90, 0.75, 0.95],
                &[SmoothSurface, WidePath, RestArea, TactilePaving],
            ),
            fixture_poi(
                5,
                "Canal Grande",
                "Picturesque canal in the heart of Trieste's historic center.",
                (45.6495, 13.7655),
                PoiCategory::Waterfront,
                [0.85, 0.85, 0.80, 0.90],
                &[SmoothSurface, WidePath, VisualSignage, TactilePaving],
            ),
            fixture_poi(
                6,
                "Museo Revoltella",
                "Modern art gallery housed in a 19th-century palace.",
                (45.6482, 13.7625),
                PoiCategory::Museum,
                [0.75, 0.70, 0.80, 0.85],
                &[Elevator, AccessibleToilet, AudioGuide, VisualSignage, RestArea],
            ),
        ];
        Self { pois }
    }

    /// Number of points in the catalogue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pois.len()
    }

    /// Always `false`: catalogues are validated to be non-empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pois.is_empty()
    }
}

impl PoiCatalog for StaticCatalog {
    fn points_of_interest(&self) -> &[PointOfInterest] {
        &self.pois
    }
}

/// Build a fixture point; `ratings` are ordered as [`AccessibilityProfile::ALL`].
fn fixture_poi(
    id: u64,
    name: &str,
    description: &str,
    (lat, lon): (f64, f64),
    category: PoiCategory,
    ratings: [f32; 4],
    features: &[FeatureKind],
) -> PointOfInterest {
    let profile_ratings = AccessibilityProfile::ALL.into_iter().zip(ratings).fold(
        ProfileRatings::new(),
        |acc, (profile, rating)| acc.with_rating(profile, rating),
    );
    PointOfInterest {
        id,
        name: name.to_owned(),
        description: description.to_owned(),
        location: Coord { x: lon, y: lat },
        category,
        ratings: profile_ratings,
        features: features.iter().copied().collect(),
    }
}
