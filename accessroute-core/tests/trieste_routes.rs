//! End-to-end checks against the bundled Trieste catalogue.

use accessroute_core::{
    AccessibilityProfile, ArchetypeSynthesizer, ColorBand, NavigationSession, PoiCatalog,
    PointOfInterest, StaticCatalog, color_band, suitable_routes,
};
use rstest::{fixture, rstest};

#[fixture]
fn catalog() -> StaticCatalog {
    StaticCatalog::trieste()
}

fn named(catalog: &StaticCatalog, name: &str) -> PointOfInterest {
    catalog
        .find_by_name(name)
        .cloned()
        .unwrap_or_else(|| panic!("{name} is in the Trieste catalogue"))
}

#[rstest]
#[case(AccessibilityProfile::Wheelchair, vec![1, 4, 5, 6, 3, 2])]
#[case(AccessibilityProfile::Stroller, vec![1, 4, 5, 6, 3, 2])]
#[case(AccessibilityProfile::VisualImpairment, vec![1, 5, 6, 4, 3, 2])]
#[case(AccessibilityProfile::HearingImpairment, vec![4, 1, 5, 3, 6, 2])]
fn catalogue_orders_points_by_rating(
    catalog: StaticCatalog,
    #[case] profile: AccessibilityProfile,
    #[case] expected: Vec<u64>,
) {
    let ids: Vec<u64> = catalog
        .rated_points_of_interest(profile)
        .iter()
        .map(|poi| poi.id)
        .collect();
    assert_eq!(ids, expected);
}

#[rstest]
fn wheelchair_walk_from_piazza_to_castello(catalog: StaticCatalog) {
    let origin = named(&catalog, "Piazza Unità d'Italia");
    let destination = named(&catalog, "Castello di San Giusto");
    let mut session = NavigationSession::new();

    let routes = session
        .compute_routes(origin, destination, AccessibilityProfile::Wheelchair)
        .expect("routes are synthesised");

    let names: Vec<&str> = routes.iter().map(|route| route.name()).collect();
    assert_eq!(
        names,
        vec!["Most Accessible Route", "Scenic Route", "Direct Historic Route"]
    );
    let bands: Vec<ColorBand> = routes
        .iter()
        .map(|route| color_band(route.accessibility_score()))
        .collect();
    assert_eq!(
        bands,
        vec![ColorBand::Accessible, ColorBand::Caution, ColorBand::Poor]
    );

    let suitable: Vec<u64> = suitable_routes(routes, AccessibilityProfile::Wheelchair)
        .map(|route| route.id())
        .collect();
    assert_eq!(suitable, vec![1]);

    let direct = routes
        .iter()
        .find(|route| route.name() == "Direct Historic Route")
        .expect("direct route present");
    assert!((direct.distance_meters() - 808.47).abs() < 1.0);
    assert_eq!(direct.estimated_minutes(), 12);
    assert!(routes[0].distance_meters() > direct.distance_meters());
}

#[rstest]
fn hearing_profile_may_take_the_scenic_route(catalog: StaticCatalog) {
    let mut session = NavigationSession::new();
    session.select_profile(AccessibilityProfile::HearingImpairment);
    session.select_origin(named(&catalog, "Molo Audace"));
    session.select_destination(named(&catalog, "Teatro Romano"));

    let routes = session.request_routes().expect("selections are complete");
    let suitable: Vec<&str> = suitable_routes(routes, AccessibilityProfile::HearingImpairment)
        .map(|route| route.name())
        .collect();
    assert_eq!(suitable, vec!["Most Accessible Route", "Scenic Route"]);
}

#[rstest]
fn default_session_uses_archetypes() {
    let session: NavigationSession<ArchetypeSynthesizer> = NavigationSession::default();
    assert!(session.routes().is_empty());
}
