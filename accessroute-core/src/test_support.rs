//! Test helpers shared by unit, integration and downstream crate tests.

use std::time::Duration;

use crate::{
    AccessibilityProfile, PointOfInterest, ProfileSet, Route, RouteError, RouteParts,
    RouteRequest, RouteSynthesizer,
};

/// `RouteSynthesizer` returning a preset list of routes for every request.
///
/// The request is ignored, so the routes need not be anchored at its
/// endpoints.
#[derive(Debug, Clone, Default)]
pub struct FixedSynthesizer {
    routes: Vec<Route>,
}

impl FixedSynthesizer {
    /// Create a synthesizer returning `routes` verbatim.
    #[must_use]
    pub const fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }
}

impl RouteSynthesizer for FixedSynthesizer {
    fn synthesize(&self, _request: &RouteRequest) -> Result<Vec<Route>, RouteError> {
        Ok(self.routes.clone())
    }
}

/// `RouteSynthesizer` that always fails with [`RouteError::NoWaypoints`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingSynthesizer;

impl RouteSynthesizer for FailingSynthesizer {
    fn synthesize(&self, _request: &RouteRequest) -> Result<Vec<Route>, RouteError> {
        Err(RouteError::NoWaypoints)
    }
}

/// Build a straight route between two points with the given score.
///
/// The route is recommended for every profile.
///
/// # Panics
/// Panics when `score` lies outside `0.0..=1.0`.
#[must_use]
#[expect(clippy::expect_used, reason = "helper is only used from tests")]
pub fn route_between(
    id: u64,
    origin: &PointOfInterest,
    destination: &PointOfInterest,
    score: f32,
) -> Route {
    Route::new(RouteParts {
        id,
        name: format!("Route {id}"),
        origin: origin.clone(),
        destination: destination.clone(),
        waypoints: vec![origin.location, destination.location],
        distance_meters: crate::geometry::segment_distance_meters(
            origin.location,
            destination.location,
        ),
        estimated_duration: Duration::from_secs(600),
        accessibility_score: score,
        obstacles: Vec::new(),
        features: Vec::new(),
        recommended_for: AccessibilityProfile::all(),
        not_recommended_for: ProfileSet::new(),
    })
    .expect("score must lie within 0.0..=1.0")
}
