//! Candidate route synthesis between two points of interest.
//!
//! [`RouteSynthesizer`] is the seam a real routing backend would implement.
//! [`ArchetypeSynthesizer`] is the built-in implementation: it lays three
//! fixed route archetypes over the straight line between the endpoints.

use std::time::Duration;

use geo::Coord;
use log::debug;

use crate::geometry::{midpoint, offset, path_distance_meters};
use crate::{
    AccessibilityFeature, AccessibilityProfile, FeatureKind, Obstacle, ObstacleKind,
    PointOfInterest, ProfileSet, Route, RouteError, RouteParts, Severity,
};

use crate::AccessibilityProfile::{HearingImpairment, Stroller, VisualImpairment, Wheelchair};

/// Longitude bias applied to the accessible route's midpoint, in degrees.
const ACCESSIBLE_LON_BIAS: f64 = 0.002;
/// Spread of the scenic route's two midpoints, in degrees.
const SCENIC_SPREAD: f64 = 0.001;
/// Factor modelling the scenic route's longer walk.
const SCENIC_DISTANCE_FACTOR: f64 = 1.15;

/// Parameters for a synthesis request.
///
/// # Examples
/// ```rust
/// use accessroute_core::{AccessibilityProfile, PoiCatalog, RouteRequest, StaticCatalog};
///
/// let catalog = StaticCatalog::trieste();
/// let pois = catalog.points_of_interest();
/// let request = RouteRequest {
///     origin: pois[0].clone(),
///     destination: pois[1].clone(),
///     profile: AccessibilityProfile::Stroller,
/// };
/// assert_eq!(request.profile, AccessibilityProfile::Stroller);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteRequest {
    /// Where the walk starts.
    pub origin: PointOfInterest,
    /// Where the walk ends.
    pub destination: PointOfInterest,
    /// The traveller's accessibility profile.
    pub profile: AccessibilityProfile,
}

/// Produce candidate routes for a request.
///
/// Implementations must anchor every route's waypoints at the request's
/// origin and destination, and must be deterministic for identical input.
/// Synthesizers are `Send + Sync` so a session can be driven from any thread.
pub trait RouteSynthesizer: Send + Sync {
    /// Build candidate routes, in no particular order.
    ///
    /// # Errors
    /// Returns [`RouteError`] when a candidate fails validation.
    fn synthesize(&self, request: &RouteRequest) -> Result<Vec<Route>, RouteError>;
}

impl<S> RouteSynthesizer for Box<S>
where
    S: RouteSynthesizer + ?Sized,
{
    fn synthesize(&self, request: &RouteRequest) -> Result<Vec<Route>, RouteError> {
        (**self).synthesize(request)
    }
}

/// The three fixed route shapes produced by [`ArchetypeSynthesizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteArchetype {
    /// Detour along main roads with ramps and rest areas.
    MostAccessible,
    /// Longer path with manageable obstacles and good signage.
    Scenic,
    /// Shortest line through the historic centre, with stairs.
    DirectHistoric,
}

impl RouteArchetype {
    /// Every archetype in synthesis order.
    pub const ALL: [Self; 3] = [Self::MostAccessible, Self::Scenic, Self::DirectHistoric];

    /// Stable identifier given to routes of this archetype.
    #[must_use]
    pub const fn id(self) -> u64 {
        match self {
            Self::MostAccessible => 1,
            Self::Scenic => 2,
            Self::DirectHistoric => 3,
        }
    }

    /// Display name given to routes of this archetype.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MostAccessible => "Most Accessible Route",
            Self::Scenic => "Scenic Route",
            Self::DirectHistoric => "Direct Historic Route",
        }
    }

    /// Fixed accessibility score.
    #[must_use]
    pub const fn score(self) -> f32 {
        match self {
            Self::MostAccessible => 0.92,
            Self::Scenic => 0.68,
            Self::DirectHistoric => 0.35,
        }
    }

    /// Fixed walking time.
    #[must_use]
    pub const fn duration(self) -> Duration {
        let minutes = match self {
            Self::MostAccessible => 18,
            Self::Scenic => 15,
            Self::DirectHistoric => 12,
        };
        Duration::from_secs(minutes * 60)
    }
}

/// Deterministic synthesizer producing one route per [`RouteArchetype`].
///
/// The output depends only on the endpoints; the requested profile is left
/// to ranking and suitability checks downstream.
///
/// # Examples
/// ```rust
/// use accessroute_core::{
///     AccessibilityProfile, ArchetypeSynthesizer, PoiCatalog, RouteRequest, RouteSynthesizer,
///     StaticCatalog,
/// };
///
/// let catalog = StaticCatalog::trieste();
/// let pois = catalog.points_of_interest();
/// let request = RouteRequest {
///     origin: pois[0].clone(),
///     destination: pois[1].clone(),
///     profile: AccessibilityProfile::Wheelchair,
/// };
/// let routes = ArchetypeSynthesizer.synthesize(&request)?;
/// assert_eq!(routes.len(), 3);
/// # Ok::<(), accessroute_core::RouteError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ArchetypeSynthesizer;

impl RouteSynthesizer for ArchetypeSynthesizer {
    fn synthesize(&self, request: &RouteRequest) -> Result<Vec<Route>, RouteError> {
        let routes = RouteArchetype::ALL
            .into_iter()
            .map(|archetype| build_archetype(archetype, &request.origin, &request.destination))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(
            "synthesised {} routes from '{}' to '{}' for {}",
            routes.len(),
            request.origin.name,
            request.destination.name,
            request.profile
        );
        Ok(routes)
    }
}

/// Geometry and annotations for one archetype, before validation.
struct Layout {
    waypoints: Vec<Coord<f64>>,
    distance_meters: f64,
    obstacles: Vec<Obstacle>,
    features: Vec<AccessibilityFeature>,
    recommended_for: ProfileSet,
    not_recommended_for: ProfileSet,
}

fn build_archetype(
    archetype: RouteArchetype,
    origin: &PointOfInterest,
    destination: &PointOfInterest,
) -> Result<Route, RouteError> {
    let (from, to) = (origin.location, destination.location);
    let layout = match archetype {
        RouteArchetype::MostAccessible => most_accessible_layout(from, to),
        RouteArchetype::Scenic => scenic_layout(from, to),
        RouteArchetype::DirectHistoric => direct_layout(from, to),
    };
    Route::new(RouteParts {
        id: archetype.id(),
        name: archetype.name().to_owned(),
        origin: origin.clone(),
        destination: destination.clone(),
        waypoints: layout.waypoints,
        distance_meters: layout.distance_meters,
        estimated_duration: archetype.duration(),
        accessibility_score: archetype.score(),
        obstacles: layout.obstacles,
        features: layout.features,
        recommended_for: layout.recommended_for,
        not_recommended_for: layout.not_recommended_for,
    })
}

fn most_accessible_layout(from: Coord<f64>, to: Coord<f64>) -> Layout {
    let mid = offset(midpoint(from, to), 0.0, ACCESSIBLE_LON_BIAS);
    let waypoints = vec![from, mid, to];
    let obstacles = vec![
        Obstacle::new(
            1,
            ObstacleKind::CrowdedArea,
            offset(mid, 0.0, -0.001),
            "Busy pedestrian area near shops. May be crowded during peak hours.",
            Severity::Low,
            ProfileSet::from([Wheelchair, VisualImpairment]),
        )
        .with_alternative("Wait for less busy times or use parallel street"),
    ];
    let features = vec![
        AccessibilityFeature::new(
            1,
            FeatureKind::Ramp,
            offset(mid, 0.0005, 0.0),
            "Modern ramp with handrails, compliant with accessibility standards.",
            ProfileSet::from([Wheelchair, Stroller]),
        ),
        AccessibilityFeature::new(
            2,
            FeatureKind::TactilePaving,
            offset(mid, -0.0005, 0.0003),
            "Tactile paving at crosswalk with audio signal.",
            ProfileSet::from([VisualImpairment]),
        ),
        AccessibilityFeature::new(
            3,
            FeatureKind::RestArea,
            offset(mid, 0.0, 0.0005),
            "Benches and rest area with shade.",
            AccessibilityProfile::all(),
        ),
        AccessibilityFeature::new(
            4,
            FeatureKind::SmoothSurface,
            offset(mid, 0.0003, -0.0002),
            "Well-maintained sidewalk with smooth surface.",
            ProfileSet::from([Wheelchair, Stroller, VisualImpairment]),
        ),
    ];
    Layout {
        distance_meters: path_distance_meters(&waypoints),
        waypoints,
        obstacles,
        features,
        recommended_for: AccessibilityProfile::all(),
        not_recommended_for: ProfileSet::new(),
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "the scenic detour scales the geometric distance"
)]
fn scenic_layout(from: Coord<f64>, to: Coord<f64>) -> Layout {
    let mid = midpoint(from, to);
    let first = offset(mid, -SCENIC_SPREAD, 0.0);
    let second = offset(mid, SCENIC_SPREAD, SCENIC_SPREAD);
    let waypoints = vec![from, first, second, to];
    let obstacles = vec![
        Obstacle::new(
            1,
            ObstacleKind::UnevenSurface,
            first,
            "Cobblestone street section approximately 50 meters long.",
            Severity::Medium,
            ProfileSet::from([Wheelchair, Stroller, VisualImpairment]),
        )
        .with_alternative("Alternative paved route available via Via Roma (adds 3 minutes)"),
        Obstacle::new(
            2,
            ObstacleKind::NarrowPath,
            second,
            "Narrow sidewalk (1.2m width) between buildings.",
            Severity::Medium,
            ProfileSet::from([Wheelchair, Stroller]),
        )
        .with_alternative("Proceed slowly during off-peak hours"),
    ];
    let features = vec![
        AccessibilityFeature::new(
            1,
            FeatureKind::VisualSignage,
            offset(first, 0.0002, 0.0),
            "Clear directional signage with icons and multiple languages.",
            ProfileSet::from([VisualImpairment, HearingImpairment]),
        ),
        AccessibilityFeature::new(
            2,
            FeatureKind::WidePath,
            offset(second, -0.0003, 0.0),
            "Wide pedestrian area for most of the route.",
            ProfileSet::from([Wheelchair, Stroller]),
        ),
    ];
    Layout {
        distance_meters: path_distance_meters(&waypoints) * SCENIC_DISTANCE_FACTOR,
        waypoints,
        obstacles,
        features,
        recommended_for: ProfileSet::from([HearingImpairment, VisualImpairment]),
        not_recommended_for: ProfileSet::new(),
    }
}

fn direct_layout(from: Coord<f64>, to: Coord<f64>) -> Layout {
    let waypoints = vec![from, to];
    let mid = midpoint(from, to);
    let obstacles = vec![
        Obstacle::new(
            1,
            ObstacleKind::Stairs,
            mid,
            "Stone staircase with 45 steps, no handrail. Historic section.",
            Severity::Blocking,
            ProfileSet::from([Wheelchair, Stroller]),
        )
        .with_alternative(
            "Use elevator at nearby building (Palazzo Comunale) or take accessible route",
        ),
        Obstacle::new(
            2,
            ObstacleKind::SteepSlope,
            offset(mid, 0.0003, 0.0002),
            "Steep uphill section (15% grade) for 80 meters.",
            Severity::High,
            ProfileSet::from([Wheelchair, Stroller]),
        )
        .with_alternative("Take longer route via Via San Nicolò with gentle slope"),
        Obstacle::new(
            3,
            ObstacleKind::UnevenSurface,
            offset(mid, -0.0002, -0.0001),
            "Historic cobblestone section, uneven and potentially slippery.",
            Severity::High,
            ProfileSet::from([Wheelchair, Stroller, VisualImpairment]),
        )
        .with_alternative("Modern paved alternate route available"),
    ];
    let features = vec![AccessibilityFeature::new(
        1,
        FeatureKind::AudioGuide,
        offset(mid, 0.0, 0.0005),
        "Audio guide available describing historic route.",
        ProfileSet::from([VisualImpairment]),
    )];
    Layout {
        distance_meters: path_distance_meters(&waypoints),
        waypoints,
        obstacles,
        features,
        recommended_for: ProfileSet::new(),
        not_recommended_for: ProfileSet::from([Wheelchair, Stroller]),
    }
}
