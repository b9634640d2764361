//! Order routes and judge their suitability.
//!
//! Ranking is a stable sort: routes with equal scores keep the order they
//! were supplied in, so results stay deterministic.

use log::debug;

use crate::{AccessibilityProfile, Route, RouteScorer};

/// Score at or above which a route counts as accessible.
pub const ACCESSIBLE_THRESHOLD: f32 = 0.8;
/// Score at or above which a route needs caution rather than avoidance.
pub const CAUTION_THRESHOLD: f32 = 0.5;

/// Coarse banding of an accessibility score, used to colour routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ColorBand {
    /// Score of at least [`ACCESSIBLE_THRESHOLD`].
    Accessible,
    /// Score of at least [`CAUTION_THRESHOLD`].
    Caution,
    /// Anything lower, including non-finite scores.
    Poor,
}

/// Band a score.
///
/// # Examples
/// ```
/// use accessroute_core::{ColorBand, color_band};
///
/// assert_eq!(color_band(0.8), ColorBand::Accessible);
/// assert_eq!(color_band(0.5), ColorBand::Caution);
/// assert_eq!(color_band(0.49), ColorBand::Poor);
/// ```
#[must_use]
pub fn color_band(score: f32) -> ColorBand {
    if score >= ACCESSIBLE_THRESHOLD {
        ColorBand::Accessible
    } else if score >= CAUTION_THRESHOLD {
        ColorBand::Caution
    } else {
        ColorBand::Poor
    }
}

/// Report whether `route` suits `profile`.
#[must_use]
pub fn suitability(route: &Route, profile: AccessibilityProfile) -> bool {
    route.is_suitable_for(profile)
}

/// Sort routes by descending accessibility score.
///
/// Routes with equal scores keep their input order.
#[must_use]
pub fn rank(mut routes: Vec<Route>) -> Vec<Route> {
    routes.sort_by(|a, b| b.accessibility_score().total_cmp(&a.accessibility_score()));
    debug!("ranked {} routes by assigned score", routes.len());
    routes
}

/// Sort routes by descending score from `scorer` for `profile`.
///
/// Routes with equal scores keep their input order.
#[must_use]
pub fn rank_by<C>(routes: Vec<Route>, profile: AccessibilityProfile, scorer: &C) -> Vec<Route>
where
    C: RouteScorer + ?Sized,
{
    let mut scored: Vec<(f32, Route)> = routes
        .into_iter()
        .map(|route| (scorer.score(&route, profile), route))
        .collect();
    scored.sort_by(|(a, _), (b, _)| b.total_cmp(a));
    debug!("ranked {} routes for {profile}", scored.len());
    scored.into_iter().map(|(_, route)| route).collect()
}

/// Keep only the routes suitable for `profile`, preserving order.
pub fn suitable_routes(
    routes: &[Route],
    profile: AccessibilityProfile,
) -> impl Iterator<Item = &Route> + '_ {
    routes
        .iter()
        .filter(move |route| route.is_suitable_for(profile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ArchetypeSynthesizer, ObstacleAwareScorer, PoiCatalog, RouteRequest, RouteSynthesizer,
        StaticCatalog,
    };
    use rstest::{fixture, rstest};

    /// Piazza Unità d'Italia to Castello di San Giusto, in archetype order.
    #[fixture]
    fn trieste_routes() -> Vec<Route> {
        let catalog = StaticCatalog::trieste();
        let request = RouteRequest {
            origin: catalog.find(1).cloned().unwrap(),
            destination: catalog.find(2).cloned().unwrap(),
            profile: AccessibilityProfile::Wheelchair,
        };
        ArchetypeSynthesizer.synthesize(&request).unwrap()
    }

    fn ids(routes: &[Route]) -> Vec<u64> {
        routes.iter().map(Route::id).collect()
    }

    #[rstest]
    #[case(1.0, ColorBand::Accessible)]
    #[case(0.92, ColorBand::Accessible)]
    #[case(0.8, ColorBand::Accessible)]
    #[case(0.79, ColorBand::Caution)]
    #[case(0.68, ColorBand::Caution)]
    #[case(0.5, ColorBand::Caution)]
    #[case(0.35, ColorBand::Poor)]
    #[case(0.0, ColorBand::Poor)]
    #[case(f32::NAN, ColorBand::Poor)]
    fn bands_scores(#[case] score: f32, #[case] expected: ColorBand) {
        assert_eq!(color_band(score), expected);
    }

    #[rstest]
    #[case(1, AccessibilityProfile::Wheelchair, true)]
    #[case(3, AccessibilityProfile::Wheelchair, false)]
    #[case(2, AccessibilityProfile::Stroller, false)]
    #[case(2, AccessibilityProfile::HearingImpairment, true)]
    fn suitability_follows_recommendations(
        trieste_routes: Vec<Route>,
        #[case] id: u64,
        #[case] profile: AccessibilityProfile,
        #[case] expected: bool,
    ) {
        let route = trieste_routes.iter().find(|route| route.id() == id).unwrap();
        assert_eq!(suitability(route, profile), expected);
    }

    #[rstest]
    fn rank_by_obstacles_puts_the_detour_first_for_wheelchairs(trieste_routes: Vec<Route>) {
        let reversed: Vec<Route> = trieste_routes.into_iter().rev().collect();
        let ranked = rank_by(
            reversed,
            AccessibilityProfile::Wheelchair,
            &ObstacleAwareScorer::default(),
        );
        assert_eq!(ids(&ranked), vec![1, 2, 3]);
    }

    #[rstest]
    fn rank_by_keeps_input_order_on_ties(trieste_routes: Vec<Route>) {
        // Every archetype saturates at 1.0 for hearing impairment.
        let reversed: Vec<Route> = trieste_routes.into_iter().rev().collect();
        let ranked = rank_by(
            reversed,
            AccessibilityProfile::HearingImpairment,
            &ObstacleAwareScorer::default(),
        );
        assert_eq!(ids(&ranked), vec![3, 2, 1]);
    }

    #[rstest]
    fn suitable_routes_filters_in_order(trieste_routes: Vec<Route>) {
        let suitable: Vec<u64> =
            suitable_routes(&trieste_routes, AccessibilityProfile::VisualImpairment)
                .map(Route::id)
                .collect();
        assert_eq!(suitable, vec![1, 2]);
    }
}
