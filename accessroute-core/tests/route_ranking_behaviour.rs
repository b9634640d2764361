//! Behavioural tests for route ranking and obstacle-aware scoring.

use std::cell::RefCell;
use std::time::Duration;

use accessroute_core::{
    AccessibilityProfile, ArchetypeSynthesizer, ObstacleAwareScorer, PoiCatalog, PoiCategory,
    PointOfInterest, ProfileSet, Route, RouteArchetype, RouteParts, RouteRequest, RouteScorer,
    RouteSynthesizer, StaticCatalog, rank,
};
use geo::Coord;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Debug, Default)]
struct RankingWorld {
    routes: RefCell<Vec<Route>>,
    ranked: RefCell<Vec<Route>>,
    scores: RefCell<Vec<(AccessibilityProfile, f32)>>,
}

#[fixture]
fn world() -> RankingWorld {
    RankingWorld::default()
}

fn scored_route(id: u64, score: f32) -> Route {
    let origin = PointOfInterest::new(1, "Start", Coord { x: 0.0, y: 0.0 }, PoiCategory::Square)
        .expect("valid origin");
    let destination =
        PointOfInterest::new(2, "End", Coord { x: 0.0, y: 0.001 }, PoiCategory::Viewpoint)
            .expect("valid destination");
    Route::new(RouteParts {
        id,
        name: format!("Route {id}"),
        waypoints: vec![origin.location, destination.location],
        origin,
        destination,
        distance_meters: 111.0,
        estimated_duration: Duration::from_secs(90),
        accessibility_score: score,
        obstacles: Vec::new(),
        features: Vec::new(),
        recommended_for: ProfileSet::new(),
        not_recommended_for: ProfileSet::new(),
    })
    .expect("valid route")
}

#[given("routes scored 0.35, 0.92 and 0.68")]
fn three_routes(world: &RankingWorld) {
    world.routes.replace(vec![
        scored_route(1, 0.35),
        scored_route(2, 0.92),
        scored_route(3, 0.68),
    ]);
}

#[given("two routes both scored 0.5")]
fn tied_routes(world: &RankingWorld) {
    world
        .routes
        .replace(vec![scored_route(7, 0.5), scored_route(8, 0.5)]);
}

#[given("the direct historic route between Piazza Unità d'Italia and Castello di San Giusto")]
fn direct_route(world: &RankingWorld) {
    let catalog = StaticCatalog::trieste();
    let request = RouteRequest {
        origin: catalog.find(1).cloned().expect("piazza present"),
        destination: catalog.find(2).cloned().expect("castello present"),
        profile: AccessibilityProfile::Wheelchair,
    };
    let direct: Vec<Route> = ArchetypeSynthesizer
        .synthesize(&request)
        .expect("synthesis succeeds")
        .into_iter()
        .filter(|route| route.id() == RouteArchetype::DirectHistoric.id())
        .collect();
    world.routes.replace(direct);
}

#[when("the routes are ranked")]
fn rank_routes(world: &RankingWorld) {
    let routes = world.routes.take();
    world.ranked.replace(rank(routes));
}

#[when("the route is scored for wheelchair and hearing-impairment travellers")]
fn score_route(world: &RankingWorld) {
    let scorer = ObstacleAwareScorer::default();
    let routes = world.routes.borrow();
    let route = routes.first().expect("a route was prepared");
    let scores = [
        AccessibilityProfile::Wheelchair,
        AccessibilityProfile::HearingImpairment,
    ]
    .into_iter()
    .map(|profile| (profile, scorer.score(route, profile)))
    .collect();
    world.scores.replace(scores);
}

#[then("the scores read 0.92, 0.68 and 0.35")]
fn scores_descend(world: &RankingWorld) {
    let scores: Vec<f32> = world
        .ranked
        .borrow()
        .iter()
        .map(Route::accessibility_score)
        .collect();
    assert_eq!(scores, vec![0.92, 0.68, 0.35]);
}

#[then("the first supplied route stays first")]
fn ties_stable(world: &RankingWorld) {
    let ids: Vec<u64> = world.ranked.borrow().iter().map(Route::id).collect();
    assert_eq!(ids, vec![7, 8]);
}

#[then("the hearing-impairment score is higher")]
fn hearing_higher(world: &RankingWorld) {
    let scores = world.scores.borrow();
    let score_for = |wanted: AccessibilityProfile| {
        scores
            .iter()
            .find(|(profile, _)| *profile == wanted)
            .map(|(_, score)| *score)
            .expect("score recorded")
    };
    assert!(
        score_for(AccessibilityProfile::HearingImpairment)
            > score_for(AccessibilityProfile::Wheelchair)
    );
}

#[scenario(path = "tests/features/route_ranking.feature", index = 0)]
fn ordered_by_score(world: RankingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/route_ranking.feature", index = 1)]
fn ties_keep_order(world: RankingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/route_ranking.feature", index = 2)]
fn obstacle_aware_scoring(world: RankingWorld) {
    let _ = world;
}
