//! Human-readable text for domain values.
//!
//! Domain enums carry only stable identifiers; everything a presentation
//! layer shows to travellers is looked up here.

use crate::{AccessibilityProfile, ColorBand, FeatureKind, ObstacleKind, PoiCategory, Severity};

/// Display name for a profile.
#[must_use]
pub const fn profile_name(profile: AccessibilityProfile) -> &'static str {
    match profile {
        AccessibilityProfile::Wheelchair => "Wheelchair User",
        AccessibilityProfile::Stroller => "Stroller",
        AccessibilityProfile::VisualImpairment => "Visual Impairment",
        AccessibilityProfile::HearingImpairment => "Hearing Impairment",
    }
}

/// Summary of what routes for `profile` take into account.
#[must_use]
pub const fn profile_description(profile: AccessibilityProfile) -> &'static str {
    match profile {
        AccessibilityProfile::Wheelchair => {
            "Routes without stairs, with ramps and elevators. Wide paths suitable for wheelchair access."
        }
        AccessibilityProfile::Stroller => {
            "Step-free routes with smooth surfaces. Accessible paths for parents with strollers."
        }
        AccessibilityProfile::VisualImpairment => {
            "Routes with tactile paving, audio guides, and clear signage. Safe pedestrian crossings."
        }
        AccessibilityProfile::HearingImpairment => {
            "Visual information displays, clear signage, and accessible communication points."
        }
    }
}

/// Display name for a category.
#[must_use]
pub const fn category_name(category: PoiCategory) -> &'static str {
    match category {
        PoiCategory::HistoricalSite => "Historical Site",
        PoiCategory::Museum => "Museum",
        PoiCategory::Monument => "Monument",
        PoiCategory::Viewpoint => "Viewpoint",
        PoiCategory::Square => "Square",
        PoiCategory::Waterfront => "Waterfront",
    }
}

/// Display name for an obstacle kind.
#[must_use]
pub const fn obstacle_name(kind: ObstacleKind) -> &'static str {
    match kind {
        ObstacleKind::Stairs => "Stairs",
        ObstacleKind::NarrowPath => "Narrow Path",
        ObstacleKind::UnevenSurface => "Uneven Surface",
        ObstacleKind::SteepSlope => "Steep Slope",
        ObstacleKind::Construction => "Construction",
        ObstacleKind::NoCrosswalk => "No Crosswalk",
        ObstacleKind::CrowdedArea => "Crowded Area",
    }
}

/// Display name for a severity.
#[must_use]
pub const fn severity_name(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "Low",
        Severity::Medium => "Medium",
        Severity::High => "High",
        Severity::Blocking => "Blocking",
    }
}

/// Display name for a feature kind.
#[must_use]
pub const fn feature_name(kind: FeatureKind) -> &'static str {
    match kind {
        FeatureKind::Ramp => "Ramp",
        FeatureKind::Elevator => "Elevator",
        FeatureKind::TactilePaving => "Tactile Paving",
        FeatureKind::AudioGuide => "Audio Guide",
        FeatureKind::WidePath => "Wide Path",
        FeatureKind::RestArea => "Rest Area",
        FeatureKind::AccessibleToilet => "Accessible Toilet",
        FeatureKind::VisualSignage => "Visual Signage",
        FeatureKind::SmoothSurface => "Smooth Surface",
    }
}

/// Colour name associated with a profile.
#[must_use]
pub const fn profile_color(profile: AccessibilityProfile) -> &'static str {
    match profile {
        AccessibilityProfile::Wheelchair => "blue",
        AccessibilityProfile::Stroller => "green",
        AccessibilityProfile::VisualImpairment => "purple",
        AccessibilityProfile::HearingImpairment => "orange",
    }
}

/// Colour name used to flag an obstacle of the given severity.
#[must_use]
pub const fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "yellow",
        Severity::Medium => "orange",
        Severity::High | Severity::Blocking => "red",
    }
}

/// Colour name used to draw a route in the given band.
#[must_use]
pub const fn band_color(band: ColorBand) -> &'static str {
    match band {
        ColorBand::Accessible => "green",
        ColorBand::Caution => "yellow",
        ColorBand::Poor => "red",
    }
}

/// Format a walking distance for display.
///
/// Distances of a kilometre or more are shown in kilometres with one
/// decimal place; shorter ones in whole metres.
///
/// # Examples
/// ```
/// use accessroute_core::labels::format_distance;
///
/// assert_eq!(format_distance(1_234.0), "1.2 km");
/// assert_eq!(format_distance(999.4), "999 m");
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "converting metres to kilometres"
)]
pub fn format_distance(meters: f64) -> String {
    if meters >= 1_000.0 {
        format!("{:.1} km", meters / 1_000.0)
    } else {
        format!("{meters:.0} m")
    }
}
