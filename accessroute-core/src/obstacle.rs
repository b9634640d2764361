//! Obstacles found along a route and how severe they are.

use geo::Coord;

use crate::{AccessibilityProfile, ProfileSet};

/// The kind of barrier an obstacle presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ObstacleKind {
    /// Steps with no step-free bypass.
    Stairs,
    /// Pavement too narrow for comfortable passage.
    NarrowPath,
    /// Cobbles, broken paving and similar.
    UnevenSurface,
    /// Gradients that are hard to climb or descend.
    SteepSlope,
    /// Temporary works blocking part of the way.
    Construction,
    /// A road crossing without a marked crosswalk.
    NoCrosswalk,
    /// Busy pedestrian areas.
    CrowdedArea,
}

impl ObstacleKind {
    /// Return the kind as a kebab-case `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stairs => "stairs",
            Self::NarrowPath => "narrow-path",
            Self::UnevenSurface => "uneven-surface",
            Self::SteepSlope => "steep-slope",
            Self::Construction => "construction",
            Self::NoCrosswalk => "no-crosswalk",
            Self::CrowdedArea => "crowded-area",
        }
    }
}

impl std::fmt::Display for ObstacleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much an obstacle hinders travellers it affects.
///
/// Variants are ordered from least to most severe.
///
/// # Examples
/// ```
/// use accessroute_core::Severity;
///
/// assert!(Severity::Low < Severity::Medium);
/// assert!(Severity::High < Severity::Blocking);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Severity {
    /// A minor inconvenience.
    Low,
    /// Passable with care.
    Medium,
    /// Difficult or unsafe for affected travellers.
    High,
    /// Impassable for affected travellers.
    Blocking,
}

impl Severity {
    /// Return the severity as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Blocking => "blocking",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A barrier located somewhere along a route.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use accessroute_core::{AccessibilityProfile, Obstacle, ObstacleKind, Severity};
///
/// let stairs = Obstacle::new(
///     1,
///     ObstacleKind::Stairs,
///     Coord { x: 13.76, y: 45.64 },
///     "Stone staircase",
///     Severity::Blocking,
///     [AccessibilityProfile::Wheelchair].into(),
/// )
/// .with_alternative("Use the lift at the town hall");
///
/// assert!(stairs.affects_profile(AccessibilityProfile::Wheelchair));
/// assert!(!stairs.affects_profile(AccessibilityProfile::HearingImpairment));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    /// Identifier, unique within its route.
    pub id: u64,
    /// What kind of barrier this is.
    pub kind: ObstacleKind,
    /// Where the obstacle is.
    pub location: Coord<f64>,
    /// Free-text description.
    pub description: String,
    /// How severe the obstacle is.
    pub severity: Severity,
    /// Profiles hindered by the obstacle.
    pub affects: ProfileSet,
    /// Suggested way around the obstacle.
    pub alternative: Option<String>,
}

impl Obstacle {
    /// Construct an obstacle without an alternative.
    #[must_use]
    pub fn new(
        id: u64,
        kind: ObstacleKind,
        location: Coord<f64>,
        description: impl Into<String>,
        severity: Severity,
        affects: ProfileSet,
    ) -> Self {
        Self {
            id,
            kind,
            location,
            description: description.into(),
            severity,
            affects,
            alternative: None,
        }
    }

    /// Attach a mitigation suggestion.
    #[must_use]
    pub fn with_alternative(mut self, alternative: impl Into<String>) -> Self {
        self.alternative = Some(alternative.into());
        self
    }

    /// Report whether the obstacle hinders `profile`.
    #[must_use]
    pub fn affects_profile(&self, profile: AccessibilityProfile) -> bool {
        self.affects.contains(&profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severities_are_ordered() {
        let mut severities = vec![
            Severity::Blocking,
            Severity::Low,
            Severity::High,
            Severity::Medium,
        ];
        severities.sort();
        assert_eq!(
            severities,
            vec![
                Severity::Low,
                Severity::Medium,
                Severity::High,
                Severity::Blocking
            ]
        );
    }

    #[test]
    fn obstacle_without_alternative() {
        let obstacle = Obstacle::new(
            1,
            ObstacleKind::Construction,
            Coord { x: 0.0, y: 0.0 },
            "Scaffolding",
            Severity::Medium,
            ProfileSet::new(),
        );
        assert!(obstacle.alternative.is_none());
        assert!(!obstacle.affects_profile(AccessibilityProfile::Stroller));
    }
}
