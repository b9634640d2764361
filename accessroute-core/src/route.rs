//! Candidate walking routes between two points of interest.
//!
//! A [`Route`] bundles geometry, the obstacles and features found along it,
//! a fixed accessibility score and the profiles it is (not) recommended for.
//! Construction goes through [`Route::new`], which rejects inconsistent data.

use std::time::Duration;

use geo::Coord;
use thiserror::Error;

use crate::{AccessibilityFeature, AccessibilityProfile, Obstacle, PointOfInterest, ProfileSet};

/// Raw inputs for [`Route::new`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct RouteParts {
    /// Identifier, unique within a synthesis result.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Where the route starts.
    pub origin: PointOfInterest,
    /// Where the route ends.
    pub destination: PointOfInterest,
    /// Ordered path, anchored at both endpoints.
    pub waypoints: Vec<Coord<f64>>,
    /// Walking distance in metres.
    pub distance_meters: f64,
    /// Estimated walking time.
    pub estimated_duration: Duration,
    /// Accessibility score in `0.0..=1.0`.
    pub accessibility_score: f32,
    /// Obstacles in path order.
    pub obstacles: Vec<Obstacle>,
    /// Features in path order.
    pub features: Vec<AccessibilityFeature>,
    /// Profiles the route suits.
    pub recommended_for: ProfileSet,
    /// Profiles that should avoid the route.
    pub not_recommended_for: ProfileSet,
}

/// Errors returned by [`Route::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// The route had no waypoints.
    #[error("route must contain at least one waypoint")]
    NoWaypoints,
    /// The path did not start at the origin or end at the destination.
    #[error("route waypoints must start at the origin and end at the destination")]
    DetachedEndpoints,
    /// The distance was negative or non-finite.
    #[error("route distance {0} must be a finite, non-negative number of metres")]
    InvalidDistance(f64),
    /// The score was outside `0.0..=1.0`.
    #[error("accessibility score {0} must be between 0.0 and 1.0")]
    ScoreOutOfRange(f32),
    /// A profile was both recommended and not recommended.
    #[error("{profile} cannot be both recommended and not recommended")]
    ContradictoryRecommendation {
        /// The profile listed in both sets.
        profile: AccessibilityProfile,
    },
}

/// A candidate walking route annotated for accessibility.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RouteParts")
)]
pub struct Route {
    id: u64,
    name: String,
    origin: PointOfInterest,
    destination: PointOfInterest,
    waypoints: Vec<Coord<f64>>,
    distance_meters: f64,
    estimated_duration: Duration,
    accessibility_score: f32,
    obstacles: Vec<Obstacle>,
    features: Vec<AccessibilityFeature>,
    recommended_for: ProfileSet,
    not_recommended_for: ProfileSet,
}

impl Route {
    /// Validate and construct a route.
    ///
    /// # Errors
    /// Returns [`RouteError`] when the waypoints are empty or detached from
    /// the endpoints, the distance or score is out of range, or a profile
    /// appears in both recommendation sets.
    ///
    /// # Examples
    /// ```
    /// use std::time::Duration;
    /// use geo::Coord;
    /// use accessroute_core::{
    ///     AccessibilityProfile, PoiCategory, PointOfInterest, ProfileSet, Route, RouteParts,
    /// };
    ///
    /// let a = PointOfInterest::new(1, "A", Coord { x: 0.0, y: 0.0 }, PoiCategory::Square)?;
    /// let b = PointOfInterest::new(2, "B", Coord { x: 0.0, y: 0.001 }, PoiCategory::Museum)?;
    /// let route = Route::new(RouteParts {
    ///     id: 1,
    ///     name: "Short hop".into(),
    ///     waypoints: vec![a.location, b.location],
    ///     origin: a,
    ///     destination: b,
    ///     distance_meters: 111.0,
    ///     estimated_duration: Duration::from_secs(120),
    ///     accessibility_score: 0.9,
    ///     obstacles: Vec::new(),
    ///     features: Vec::new(),
    ///     recommended_for: AccessibilityProfile::all(),
    ///     not_recommended_for: ProfileSet::new(),
    /// })?;
    /// assert!(route.is_suitable_for(AccessibilityProfile::Wheelchair));
    /// assert_eq!(route.estimated_minutes(), 2);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(parts: RouteParts) -> Result<Self, RouteError> {
        let (Some(first), Some(last)) = (parts.waypoints.first(), parts.waypoints.last()) else {
            return Err(RouteError::NoWaypoints);
        };
        if *first != parts.origin.location || *last != parts.destination.location {
            return Err(RouteError::DetachedEndpoints);
        }
        if !parts.distance_meters.is_finite() || parts.distance_meters < 0.0 {
            return Err(RouteError::InvalidDistance(parts.distance_meters));
        }
        if !(0.0..=1.0).contains(&parts.accessibility_score) {
            return Err(RouteError::ScoreOutOfRange(parts.accessibility_score));
        }
        if let Some(profile) = parts
            .recommended_for
            .intersection(&parts.not_recommended_for)
            .next()
        {
            return Err(RouteError::ContradictoryRecommendation { profile: *profile });
        }
        Ok(Self {
            id: parts.id,
            name: parts.name,
            origin: parts.origin,
            destination: parts.destination,
            waypoints: parts.waypoints,
            distance_meters: parts.distance_meters,
            estimated_duration: parts.estimated_duration,
            accessibility_score: parts.accessibility_score,
            obstacles: parts.obstacles,
            features: parts.features,
            recommended_for: parts.recommended_for,
            not_recommended_for: parts.not_recommended_for,
        })
    }

    /// Identifier, unique within a synthesis result.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the route starts.
    #[must_use]
    pub const fn origin(&self) -> &PointOfInterest {
        &self.origin
    }

    /// Where the route ends.
    #[must_use]
    pub const fn destination(&self) -> &PointOfInterest {
        &self.destination
    }

    /// Ordered path from origin to destination.
    #[must_use]
    pub fn waypoints(&self) -> &[Coord<f64>] {
        &self.waypoints
    }

    /// Walking distance in metres.
    #[must_use]
    pub const fn distance_meters(&self) -> f64 {
        self.distance_meters
    }

    /// Estimated walking time.
    #[must_use]
    pub const fn estimated_duration(&self) -> Duration {
        self.estimated_duration
    }

    /// Estimated walking time in whole minutes.
    #[expect(
        clippy::integer_division,
        reason = "durations are truncated to whole minutes"
    )]
    #[must_use]
    pub const fn estimated_minutes(&self) -> u64 {
        self.estimated_duration.as_secs() / 60
    }

    /// Accessibility score in `0.0..=1.0`.
    #[must_use]
    pub const fn accessibility_score(&self) -> f32 {
        self.accessibility_score
    }

    /// Obstacles in path order.
    #[must_use]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Features in path order.
    #[must_use]
    pub fn features(&self) -> &[AccessibilityFeature] {
        &self.features
    }

    /// Profiles the route suits.
    #[must_use]
    pub const fn recommended_for(&self) -> &ProfileSet {
        &self.recommended_for
    }

    /// Profiles that should avoid the route.
    #[must_use]
    pub const fn not_recommended_for(&self) -> &ProfileSet {
        &self.not_recommended_for
    }

    /// Report whether the route is suitable for `profile`.
    ///
    /// A route is suitable when it is recommended for the profile and not
    /// flagged as unsuitable for it.
    #[must_use]
    pub fn is_suitable_for(&self, profile: AccessibilityProfile) -> bool {
        self.recommended_for.contains(&profile) && !self.not_recommended_for.contains(&profile)
    }

    /// Obstacles that hinder `profile`, in path order.
    pub fn obstacles_affecting(
        &self,
        profile: AccessibilityProfile,
    ) -> impl Iterator<Item = &Obstacle> + '_ {
        self.obstacles
            .iter()
            .filter(move |obstacle| obstacle.affects_profile(profile))
    }

    /// Features that help `profile`, in path order.
    pub fn features_benefiting(
        &self,
        profile: AccessibilityProfile,
    ) -> impl Iterator<Item = &AccessibilityFeature> + '_ {
        self.features
            .iter()
            .filter(move |feature| feature.benefits_profile(profile))
    }
}

impl TryFrom<RouteParts> for Route {
    type Error = RouteError;

    fn try_from(parts: RouteParts) -> Result<Self, Self::Error> {
        Self::new(parts)
    }
}
