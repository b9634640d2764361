//! Accessibility features that make a route easier to use.

use geo::Coord;

use crate::{AccessibilityProfile, ProfileSet};

/// The kind of help a feature provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum FeatureKind {
    /// Step-free ramp.
    Ramp,
    /// Passenger lift.
    Elevator,
    /// Textured paving detectable underfoot or by cane.
    TactilePaving,
    /// Recorded or live audio description.
    AudioGuide,
    /// Path wide enough for wheelchairs and strollers.
    WidePath,
    /// Benches or shaded seating.
    RestArea,
    /// Toilet usable by wheelchair users.
    AccessibleToilet,
    /// Clear directional signage.
    VisualSignage,
    /// Even, well-maintained surface.
    SmoothSurface,
}

impl FeatureKind {
    /// Return the kind as a kebab-case `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ramp => "ramp",
            Self::Elevator => "elevator",
            Self::TactilePaving => "tactile-paving",
            Self::AudioGuide => "audio-guide",
            Self::WidePath => "wide-path",
            Self::RestArea => "rest-area",
            Self::AccessibleToilet => "accessible-toilet",
            Self::VisualSignage => "visual-signage",
            Self::SmoothSurface => "smooth-surface",
        }
    }
}

impl std::fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A helpful feature located along a route.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use accessroute_core::{AccessibilityFeature, AccessibilityProfile, FeatureKind};
///
/// let bench = AccessibilityFeature::new(
///     1,
///     FeatureKind::RestArea,
///     Coord { x: 13.76, y: 45.64 },
///     "Benches with shade",
///     AccessibilityProfile::all(),
/// );
/// assert!(bench.benefits_profile(AccessibilityProfile::Stroller));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessibilityFeature {
    /// Identifier, unique within its route.
    pub id: u64,
    /// What kind of help this is.
    pub kind: FeatureKind,
    /// Where the feature is.
    pub location: Coord<f64>,
    /// Free-text description.
    pub description: String,
    /// Profiles helped by the feature.
    pub benefits: ProfileSet,
}

impl AccessibilityFeature {
    /// Construct a feature.
    #[must_use]
    pub fn new(
        id: u64,
        kind: FeatureKind,
        location: Coord<f64>,
        description: impl Into<String>,
        benefits: ProfileSet,
    ) -> Self {
        Self {
            id,
            kind,
            location,
            description: description.into(),
            benefits,
        }
    }

    /// Report whether the feature helps `profile`.
    #[must_use]
    pub fn benefits_profile(&self, profile: AccessibilityProfile) -> bool {
        self.benefits.contains(&profile)
    }
}
