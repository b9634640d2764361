//! Behavioural tests for `NavigationSession` selections and route requests.

use std::cell::RefCell;

use accessroute_core::{
    AccessibilityProfile, NavigationSession, PoiCatalog, PointOfInterest, Selection,
    SessionError, StaticCatalog, TapOutcome,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

struct SessionWorld {
    catalog: StaticCatalog,
    session: RefCell<NavigationSession>,
    outcome: RefCell<Option<Result<usize, SessionError>>>,
    tap: RefCell<Option<TapOutcome>>,
}

impl SessionWorld {
    fn poi(&self, name: &str) -> PointOfInterest {
        self.catalog
            .find_by_name(name)
            .cloned()
            .unwrap_or_else(|| panic!("{name} should be in the catalogue"))
    }

    fn request(&self) {
        let result = self
            .session
            .borrow_mut()
            .request_routes()
            .map(<[_]>::len);
        self.outcome.replace(Some(result));
    }
}

#[fixture]
fn world() -> SessionWorld {
    SessionWorld {
        catalog: StaticCatalog::trieste(),
        session: RefCell::new(NavigationSession::new()),
        outcome: RefCell::new(None),
        tap: RefCell::new(None),
    }
}

#[given("a wheelchair traveller going from Piazza Unità d'Italia to Castello di San Giusto")]
fn full_selection(world: &SessionWorld) {
    let origin = world.poi("Piazza Unità d'Italia");
    let destination = world.poi("Castello di San Giusto");
    let mut session = world.session.borrow_mut();
    session.select_profile(AccessibilityProfile::Wheelchair);
    session.select_origin(origin);
    session.select_destination(destination);
}

#[given("a wheelchair traveller starting at Piazza Unità d'Italia")]
fn origin_only(world: &SessionWorld) {
    let origin = world.poi("Piazza Unità d'Italia");
    let mut session = world.session.borrow_mut();
    session.select_profile(AccessibilityProfile::Wheelchair);
    session.select_origin(origin);
}

#[given("the traveller has requested routes")]
fn already_requested(world: &SessionWorld) {
    world.request();
}

#[when("the traveller requests routes")]
fn request_routes(world: &SessionWorld) {
    world.request();
}

#[when("the traveller taps Molo Audace")]
fn tap_molo(world: &SessionWorld) {
    let poi = world.poi("Molo Audace");
    let outcome = world.session.borrow_mut().tap_point(poi);
    world.tap.replace(Some(outcome));
}

#[then("three routes are listed best first")]
fn three_routes(world: &SessionWorld) {
    let session = world.session.borrow();
    let scores: Vec<f32> = session
        .routes()
        .iter()
        .map(|route| route.accessibility_score())
        .collect();
    assert_eq!(scores.len(), 3);
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[then("only the most accessible route suits the traveller")]
fn only_accessible_suits(world: &SessionWorld) {
    let session = world.session.borrow();
    let suitable: Vec<&str> = session
        .routes()
        .iter()
        .filter(|route| route.is_suitable_for(AccessibilityProfile::Wheelchair))
        .map(|route| route.name())
        .collect();
    assert_eq!(suitable, vec!["Most Accessible Route"]);
}

#[then("the request is rejected for a missing destination")]
fn rejected_for_destination(world: &SessionWorld) {
    let outcome = world.outcome.borrow();
    match outcome.as_ref().expect("a request was made") {
        Err(SessionError::InvalidSelection { missing }) => {
            assert_eq!(*missing, Selection::Destination);
        }
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[then("no routes are listed")]
fn no_routes(world: &SessionWorld) {
    assert!(world.session.borrow().routes().is_empty());
}

#[then("Molo Audace becomes the origin")]
fn molo_is_origin(world: &SessionWorld) {
    assert_eq!(*world.tap.borrow(), Some(TapOutcome::Restarted));
    let session = world.session.borrow();
    assert_eq!(session.origin().map(|poi| poi.name.as_str()), Some("Molo Audace"));
}

#[then("no destination is selected")]
fn no_destination(world: &SessionWorld) {
    assert!(world.session.borrow().destination().is_none());
}

#[scenario(path = "tests/features/navigation_session.feature", index = 0)]
fn complete_selection(world: SessionWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/navigation_session.feature", index = 1)]
fn missing_destination(world: SessionWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/navigation_session.feature", index = 2)]
fn tap_restarts_selection(world: SessionWorld) {
    let _ = world;
}
