//! Core domain types and services for the AccessRoute engine.
//!
//! The crate models accessibility profiles, points of interest and
//! annotated walking routes, synthesises candidate routes between two
//! points, ranks them and tracks a traveller's selections in a
//! [`NavigationSession`]. Constructors return `Result` so invalid data is
//! rejected before it reaches ranking or presentation.
//!
//! # Examples
//!
//! ```rust
//! use accessroute_core::{AccessibilityProfile, NavigationSession, PoiCatalog, StaticCatalog};
//!
//! let catalog = StaticCatalog::trieste();
//! let origin = catalog.find_by_name("Piazza Unità d'Italia").cloned();
//! let destination = catalog.find_by_name("Castello di San Giusto").cloned();
//!
//! let mut session = NavigationSession::new();
//! if let (Some(origin), Some(destination)) = (origin, destination) {
//!     let routes =
//!         session.compute_routes(origin, destination, AccessibilityProfile::Wheelchair)?;
//!     assert_eq!(routes[0].name(), "Most Accessible Route");
//! }
//! # Ok::<(), accessroute_core::SessionError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod catalog;
mod category;
mod feature;
pub mod geometry;
pub mod labels;
mod obstacle;
mod poi;
mod profile;
mod ranking;
mod route;
mod scorer;
mod session;
mod synthesis;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use catalog::{CatalogError, PoiCatalog, StaticCatalog};
pub use category::{PoiCategory, UnknownCategory};
pub use feature::{AccessibilityFeature, FeatureKind};
pub use obstacle::{Obstacle, ObstacleKind, Severity};
pub use poi::{PoiError, PointOfInterest};
pub use profile::{
    AccessibilityProfile, DEFAULT_RATING, ProfileRatings, ProfileSet, RatingError, UnknownProfile,
};
pub use ranking::{
    ACCESSIBLE_THRESHOLD, CAUTION_THRESHOLD, ColorBand, color_band, rank, rank_by, suitability,
    suitable_routes,
};
pub use route::{Route, RouteError, RouteParts};
pub use scorer::{AssignedScore, ObstacleAwareScorer, RouteScorer, SeverityPenalties};
pub use session::{NavigationSession, SessionError, Selection, TapOutcome};
pub use synthesis::{ArchetypeSynthesizer, RouteArchetype, RouteRequest, RouteSynthesizer};
