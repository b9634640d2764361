//! Facade crate for the AccessRoute engine.
//!
//! This crate re-exports the core domain types and services. Test helpers are
//! exposed behind the `test-support` feature.

#![forbid(unsafe_code)]

pub use accessroute_core::{
    ACCESSIBLE_THRESHOLD, AccessibilityFeature, AccessibilityProfile, ArchetypeSynthesizer,
    AssignedScore, CAUTION_THRESHOLD, CatalogError, ColorBand, DEFAULT_RATING, FeatureKind,
    NavigationSession, Obstacle, ObstacleAwareScorer, ObstacleKind, PoiCatalog, PoiCategory,
    PoiError, PointOfInterest, ProfileRatings, ProfileSet, RatingError, Route, RouteArchetype,
    RouteError, RouteParts, RouteRequest, RouteScorer, RouteSynthesizer, Selection, SessionError,
    Severity, SeverityPenalties, StaticCatalog, TapOutcome, UnknownCategory, UnknownProfile,
    color_band, geometry, labels, rank, rank_by, suitability, suitable_routes,
};

#[cfg(feature = "test-support")]
pub use accessroute_core::test_support;
