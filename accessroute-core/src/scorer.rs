//! Score routes for an accessibility profile.
//!
//! The `RouteScorer` trait assigns a suitability score to a
//! [`Route`](crate::Route) given a traveller's
//! [`AccessibilityProfile`](crate::AccessibilityProfile). The default
//! [`AssignedScore`] returns the score fixed at synthesis time;
//! [`ObstacleAwareScorer`] derives one from the route's annotations.

use crate::{AccessibilityProfile, Route, Severity};

/// Calculate an accessibility score for a route.
///
/// Higher scores indicate a better match between the route and the
/// traveller's needs. Implementations must be thread-safe (`Send` + `Sync`).
/// The method is infallible.
///
/// Implementations must:
/// - Produce finite (`f32::is_finite`) scores.
/// - Normalise results to the range `0.0..=1.0`.
///
/// Use [`RouteScorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use accessroute_core::{AccessibilityProfile, Route, RouteScorer};
///
/// struct FlatScorer;
///
/// impl RouteScorer for FlatScorer {
///     fn score(&self, _route: &Route, _profile: AccessibilityProfile) -> f32 {
///         0.5
///     }
/// }
///
/// assert_eq!(FlatScorer::sanitise(f32::NAN), 0.0);
/// ```
pub trait RouteScorer: Send + Sync {
    /// Return a score for `route` according to `profile`.
    fn score(&self, route: &Route, profile: AccessibilityProfile) -> f32;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
    fn sanitise(score: f32) -> f32
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, 1.0)
    }
}

/// Scorer returning the score assigned when the route was synthesised.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssignedScore;

impl RouteScorer for AssignedScore {
    fn score(&self, route: &Route, _profile: AccessibilityProfile) -> f32 {
        Self::sanitise(route.accessibility_score())
    }
}

/// Penalty subtracted per obstacle of each severity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityPenalties {
    /// Penalty for [`Severity::Low`].
    pub low: f32,
    /// Penalty for [`Severity::Medium`].
    pub medium: f32,
    /// Penalty for [`Severity::High`].
    pub high: f32,
    /// Penalty for [`Severity::Blocking`].
    pub blocking: f32,
}

impl SeverityPenalties {
    /// Return the penalty for `severity`.
    #[must_use]
    pub const fn for_severity(&self, severity: Severity) -> f32 {
        match severity {
            Severity::Low => self.low,
            Severity::Medium => self.medium,
            Severity::High => self.high,
            Severity::Blocking => self.blocking,
        }
    }
}

impl Default for SeverityPenalties {
    fn default() -> Self {
        Self {
            low: 0.05_f32,
            medium: 0.15_f32,
            high: 0.3_f32,
            blocking: 0.6_f32,
        }
    }
}

/// Scorer deriving a per-profile score from obstacles and features.
///
/// Starts at `1.0`, subtracts a severity penalty for every obstacle that
/// affects the profile and adds a bonus for every feature that helps it,
/// with the total bonus capped.
///
/// # Examples
/// ```rust
/// use accessroute_core::{
///     AccessibilityProfile, ArchetypeSynthesizer, ObstacleAwareScorer, PoiCatalog, RouteRequest,
///     RouteScorer, RouteSynthesizer, StaticCatalog,
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
/// let direct = &routes[2];
/// let scorer = ObstacleAwareScorer::default();
/// assert!(
///     scorer.score(direct, AccessibilityProfile::Wheelchair)
///         < scorer.score(direct, AccessibilityProfile::HearingImpairment)
/// );
/// # Ok::<(), accessroute_core::RouteError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleAwareScorer {
    /// Per-severity obstacle penalties.
    pub penalties: SeverityPenalties,
    /// Bonus per helpful feature.
    pub feature_bonus: f32,
    /// Upper bound on the summed feature bonus.
    pub max_feature_bonus: f32,
}

impl Default for ObstacleAwareScorer {
    fn default() -> Self {
        Self {
            penalties: SeverityPenalties::default(),
            feature_bonus: 0.05_f32,
            max_feature_bonus: 0.2_f32,
        }
    }
}

impl RouteScorer for ObstacleAwareScorer {
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "scores combine floating-point penalties and bounded feature counts"
    )]
    fn score(&self, route: &Route, profile: AccessibilityProfile) -> f32 {
        let penalty: f32 = route
            .obstacles_affecting(profile)
            .map(|obstacle| self.penalties.for_severity(obstacle.severity))
            .sum();
        let helpful = route.features_benefiting(profile).count() as f32;
        let bonus = (helpful * self.feature_bonus).min(self.max_feature_bonus);
        Self::sanitise(1.0_f32 - penalty + bonus)
    }
}
