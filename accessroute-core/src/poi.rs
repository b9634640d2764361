use std::collections::BTreeSet;

use geo::Coord;
use thiserror::Error;

use crate::{AccessibilityProfile, FeatureKind, PoiCategory, ProfileRatings, RatingError};

/// A place a tourist may want to walk to or from.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use accessroute_core::{AccessibilityProfile, PoiCategory, PointOfInterest, ProfileRatings};
///
/// let poi = PointOfInterest::new(
///     1,
///     "Molo Audace",
///     Coord { x: 13.7640, y: 45.6478 },
///     PoiCategory::Waterfront,
/// )?
/// .with_ratings(ProfileRatings::new().with_rating(AccessibilityProfile::Wheelchair, 0.9));
///
/// assert_eq!(poi.rating(AccessibilityProfile::Wheelchair), 0.9);
/// assert_eq!(poi.rating(AccessibilityProfile::Stroller), 0.5);
/// # Ok::<(), accessroute_core::PoiError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointOfInterest {
    /// Unique identifier within a catalogue.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Free-text description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// What kind of place this is.
    pub category: PoiCategory,
    /// Suitability per accessibility profile.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ratings: ProfileRatings,
    /// Accessibility features generally present at the site.
    #[cfg_attr(feature = "serde", serde(default))]
    pub features: BTreeSet<FeatureKind>,
}

/// Errors returned by [`PointOfInterest::new`] and [`PointOfInterest::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PoiError {
    /// The name was empty or whitespace.
    #[error("point of interest {id} must have a name")]
    BlankName {
        /// Identifier of the rejected point.
        id: u64,
    },
    /// The coordinate was non-finite or outside WGS84 bounds.
    #[error("point of interest {id} has invalid location ({lon}, {lat})")]
    InvalidLocation {
        /// Identifier of the rejected point.
        id: u64,
        /// Longitude in degrees.
        lon: f64,
        /// Latitude in degrees.
        lat: f64,
    },
    /// A rating was non-finite or outside `0.0..=1.0`.
    #[error("point of interest {id} has rating {rating} for {profile}; expected 0.0 to 1.0")]
    InvalidRating {
        /// Identifier of the rejected point.
        id: u64,
        /// Profile the rating belongs to.
        profile: AccessibilityProfile,
        /// Rejected value.
        rating: f32,
    },
}

impl PointOfInterest {
    /// Validate and construct a point of interest without ratings or features.
    ///
    /// # Errors
    /// Returns [`PoiError`] when the name is blank or the location lies
    /// outside WGS84 bounds.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        location: Coord<f64>,
        category: PoiCategory,
    ) -> Result<Self, PoiError> {
        let poi = Self {
            id,
            name: name.into(),
            description: String::new(),
            location,
            category,
            ratings: ProfileRatings::new(),
            features: BTreeSet::new(),
        };
        poi.validate()?;
        Ok(poi)
    }

    /// Check the invariants enforced by [`PointOfInterest::new`].
    ///
    /// Deserialised points bypass the constructor, so catalogues call this
    /// when loading. Explicit ratings must also lie within `0.0..=1.0`.
    ///
    /// # Errors
    /// See [`PointOfInterest::new`]. Also returns
    /// [`PoiError::InvalidRating`] for an out-of-range rating.
    pub fn validate(&self) -> Result<(), PoiError> {
        if self.name.trim().is_empty() {
            return Err(PoiError::BlankName { id: self.id });
        }
        let Coord { x: lon, y: lat } = self.location;
        let valid = lon.is_finite()
            && lat.is_finite()
            && (-180.0..=180.0).contains(&lon)
            && (-90.0..=90.0).contains(&lat);
        if !valid {
            return Err(PoiError::InvalidLocation { id: self.id, lon, lat });
        }
        self.ratings
            .validate()
            .map_err(|RatingError::OutOfRange { profile, rating }| PoiError::InvalidRating {
                id: self.id,
                profile,
                rating,
            })
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replace the per-profile ratings.
    #[must_use]
    pub fn with_ratings(mut self, ratings: ProfileRatings) -> Self {
        self.ratings = ratings;
        self
    }

    /// Replace the set of features present at the site.
    #[must_use]
    pub fn with_features<I>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = FeatureKind>,
    {
        self.features = features.into_iter().collect();
        self
    }

    /// Return the rating for `profile`, defaulting to the neutral `0.5`.
    #[must_use]
    pub fn rating(&self, profile: AccessibilityProfile) -> f32 {
        self.ratings.rating(profile)
    }

    /// Report whether the site offers `feature`.
    #[must_use]
    pub fn has_feature(&self, feature: FeatureKind) -> bool {
        self.features.contains(&feature)
    }
}
