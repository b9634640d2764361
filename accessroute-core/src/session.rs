//! Navigation session state shared with the presentation layer.
//!
//! A [`NavigationSession`] records the traveller's selections and the last
//! ranked route set. Sessions are plain values: create one per user
//! interaction flow and pass it by reference.

use log::{debug, warn};
use thiserror::Error;

use crate::ranking::rank;
use crate::{
    AccessibilityProfile, ArchetypeSynthesizer, PointOfInterest, Route, RouteError, RouteRequest,
    RouteSynthesizer,
};

/// A selection the session needs before it can compute routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The accessibility profile.
    Profile,
    /// The starting point.
    Origin,
    /// The end point.
    Destination,
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Profile => "profile",
            Self::Origin => "origin",
            Self::Destination => "destination",
        })
    }
}

/// Errors returned by [`NavigationSession`] route requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// Routes were requested before every selection was made.
    #[error("cannot compute routes without a selected {missing}")]
    InvalidSelection {
        /// The first selection still unset.
        missing: Selection,
    },
    /// The synthesizer produced an invalid route.
    #[error("route synthesis failed: {0}")]
    Synthesis(#[from] RouteError),
}

/// What a map tap did to the session's selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The tapped point became the origin.
    OriginSelected,
    /// The tapped point became the destination.
    DestinationSelected,
    /// Selections were cleared and the tapped point became the new origin.
    Restarted,
}

/// Holds the traveller's selections and the last computed routes.
///
/// # Examples
/// ```rust
/// use accessroute_core::{AccessibilityProfile, NavigationSession, PoiCatalog, StaticCatalog};
///
/// let catalog = StaticCatalog::trieste();
/// let mut session = NavigationSession::new();
/// session.select_profile(AccessibilityProfile::Wheelchair);
/// session.select_origin(catalog.points_of_interest()[0].clone());
/// session.select_destination(catalog.points_of_interest()[1].clone());
///
/// let routes = session.request_routes()?;
/// assert_eq!(routes.len(), 3);
/// assert!(routes[0].is_suitable_for(AccessibilityProfile::Wheelchair));
/// # Ok::<(), accessroute_core::SessionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct NavigationSession<S = ArchetypeSynthesizer>
where
    S: RouteSynthesizer,
{
    synthesizer: S,
    profile: Option<AccessibilityProfile>,
    origin: Option<PointOfInterest>,
    destination: Option<PointOfInterest>,
    routes: Vec<Route>,
}

impl NavigationSession<ArchetypeSynthesizer> {
    /// Construct an empty session backed by [`ArchetypeSynthesizer`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_synthesizer(ArchetypeSynthesizer)
    }
}

impl Default for NavigationSession<ArchetypeSynthesizer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> NavigationSession<S>
where
    S: RouteSynthesizer,
{
    /// Construct an empty session using a custom synthesizer.
    #[must_use]
    pub const fn with_synthesizer(synthesizer: S) -> Self {
        Self {
            synthesizer,
            profile: None,
            origin: None,
            destination: None,
            routes: Vec::new(),
        }
    }

    /// The selected profile, if any.
    #[must_use]
    pub const fn profile(&self) -> Option<AccessibilityProfile> {
        self.profile
    }

    /// The selected origin, if any.
    #[must_use]
    pub const fn origin(&self) -> Option<&PointOfInterest> {
        self.origin.as_ref()
    }

    /// The selected destination, if any.
    #[must_use]
    pub const fn destination(&self) -> Option<&PointOfInterest> {
        self.destination.as_ref()
    }

    /// The last computed routes, best first. Empty until routes are computed.
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Report whether every selection needed for a route request is set.
    #[must_use]
    pub const fn ready(&self) -> bool {
        self.profile.is_some() && self.origin.is_some() && self.destination.is_some()
    }

    /// Select the traveller's profile.
    pub const fn select_profile(&mut self, profile: AccessibilityProfile) {
        self.profile = Some(profile);
    }

    /// Select the starting point.
    pub fn select_origin(&mut self, origin: PointOfInterest) {
        self.origin = Some(origin);
    }

    /// Select the end point.
    pub fn select_destination(&mut self, destination: PointOfInterest) {
        self.destination = Some(destination);
    }

    /// Apply a map tap on `poi`.
    ///
    /// The first tap picks the origin, a tap on a different point picks the
    /// destination, and any further tap starts over with the tapped point as
    /// the new origin. Starting over also discards computed routes.
    pub fn tap_point(&mut self, poi: PointOfInterest) -> TapOutcome {
        match (&self.origin, &self.destination) {
            (None, _) => {
                self.origin = Some(poi);
                TapOutcome::OriginSelected
            }
            (Some(origin), None) if origin.id != poi.id => {
                self.destination = Some(poi);
                TapOutcome::DestinationSelected
            }
            _ => {
                self.origin = Some(poi);
                self.destination = None;
                self.routes.clear();
                TapOutcome::Restarted
            }
        }
    }

    /// Compute routes for the current selections.
    ///
    /// # Errors
    /// Returns [`SessionError::InvalidSelection`] naming the first unset
    /// selection (profile, then origin, then destination), or
    /// [`SessionError::Synthesis`] when synthesis fails. State is left
    /// untouched on error.
    pub fn request_routes(&mut self) -> Result<&[Route], SessionError> {
        let profile = self.profile.ok_or_else(|| missing(Selection::Profile))?;
        let origin = self
            .origin
            .clone()
            .ok_or_else(|| missing(Selection::Origin))?;
        let destination = self
            .destination
            .clone()
            .ok_or_else(|| missing(Selection::Destination))?;
        self.compute_routes(origin, destination, profile)
    }

    /// Select all three inputs and compute ranked routes for them.
    ///
    /// On success the selections and routes are replaced together; on
    /// failure the session keeps its previous state.
    ///
    /// # Errors
    /// Returns [`SessionError::Synthesis`] when the synthesizer fails.
    pub fn compute_routes(
        &mut self,
        origin: PointOfInterest,
        destination: PointOfInterest,
        profile: AccessibilityProfile,
    ) -> Result<&[Route], SessionError> {
        let request = RouteRequest {
            origin,
            destination,
            profile,
        };
        let candidates = self.synthesizer.synthesize(&request)?;
        let ranked = rank(candidates);
        debug!(
            "session computed {} routes from '{}' to '{}' for {profile}",
            ranked.len(),
            request.origin.name,
            request.destination.name
        );
        self.profile = Some(request.profile);
        self.origin = Some(request.origin);
        self.destination = Some(request.destination);
        self.routes = ranked;
        Ok(&self.routes)
    }

    /// Clear every selection and the computed routes.
    pub fn reset(&mut self) {
        self.profile = None;
        self.origin = None;
        self.destination = None;
        self.routes.clear();
    }
}

fn missing(selection: Selection) -> SessionError {
    warn!("route request rejected: no {selection} selected");
    SessionError::InvalidSelection { missing: selection }
}
