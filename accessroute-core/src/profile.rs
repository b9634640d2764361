//! Accessibility profiles and per-profile ratings in `[0.0, 1.0]`.
//!
//! A profile names the kind of need a traveller has. Ratings attach a
//! suitability value per profile; lookups never fail and fall back to the
//! neutral [`DEFAULT_RATING`].

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

/// Rating reported for profiles that have no explicit entry.
///
/// This is a neutral "unknown" value, not zero.
pub const DEFAULT_RATING: f32 = 0.5;

/// An ordered set of profiles, e.g. those an obstacle affects.
pub type ProfileSet = BTreeSet<AccessibilityProfile>;

/// The kind of accessibility need a traveller has.
///
/// # Examples
/// ```
/// use accessroute_core::AccessibilityProfile;
///
/// assert_eq!(AccessibilityProfile::Wheelchair.as_str(), "wheelchair");
/// assert_eq!(
///     "Visual_Impairment".parse::<AccessibilityProfile>(),
///     Ok(AccessibilityProfile::VisualImpairment)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum AccessibilityProfile {
    /// Wheelchair users.
    Wheelchair,
    /// Parents pushing a stroller.
    Stroller,
    /// Blind or partially sighted travellers.
    VisualImpairment,
    /// Deaf or hard-of-hearing travellers.
    HearingImpairment,
}

impl AccessibilityProfile {
    /// Every profile in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Wheelchair,
        Self::Stroller,
        Self::VisualImpairment,
        Self::HearingImpairment,
    ];

    /// Return a set containing every profile.
    #[must_use]
    pub fn all() -> ProfileSet {
        Self::ALL.into_iter().collect()
    }

    /// Return the profile as a kebab-case `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wheelchair => "wheelchair",
            Self::Stroller => "stroller",
            Self::VisualImpairment => "visual-impairment",
            Self::HearingImpairment => "hearing-impairment",
        }
    }
}

impl std::fmt::Display for AccessibilityProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognised profile name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown accessibility profile '{0}'")]
pub struct UnknownProfile(pub String);

impl std::str::FromStr for AccessibilityProfile {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|profile| profile.as_str() == normalised)
            .ok_or_else(|| UnknownProfile(s.to_owned()))
    }
}

/// Errors returned by [`ProfileRatings::try_set_rating`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RatingError {
    /// The rating was non-finite or outside `0.0..=1.0`.
    #[error("rating {rating} for {profile} must be between 0.0 and 1.0")]
    OutOfRange {
        /// Profile the rating was meant for.
        profile: AccessibilityProfile,
        /// Rejected value.
        rating: f32,
    },
}

/// Suitability ratings keyed by accessibility profile.
///
/// # Examples
/// ```
/// use accessroute_core::{AccessibilityProfile, ProfileRatings};
///
/// let ratings = ProfileRatings::new().with_rating(AccessibilityProfile::Stroller, 0.9);
/// assert_eq!(ratings.rating(AccessibilityProfile::Stroller), 0.9);
/// assert_eq!(ratings.rating(AccessibilityProfile::Wheelchair), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ProfileRatings {
    ratings: BTreeMap<AccessibilityProfile, f32>,
}

impl ProfileRatings {
    /// Construct an empty set of ratings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the rating for `profile`, or [`DEFAULT_RATING`] when absent.
    #[must_use]
    pub fn rating(&self, profile: AccessibilityProfile) -> f32 {
        self.ratings
            .get(&profile)
            .copied()
            .unwrap_or(DEFAULT_RATING)
    }

    /// Return the explicitly stored rating for `profile`, if any.
    #[must_use]
    pub fn explicit(&self, profile: AccessibilityProfile) -> Option<f32> {
        self.ratings.get(&profile).copied()
    }

    /// Insert or update a rating.
    ///
    /// Values are clamped into `0.0..=1.0`; non-finite values store the
    /// default rating.
    pub fn set_rating(&mut self, profile: AccessibilityProfile, rating: f32) {
        let sanitised = if rating.is_finite() {
            rating.clamp(0.0, 1.0)
        } else {
            DEFAULT_RATING
        };
        self.ratings.insert(profile, sanitised);
    }

    /// Insert a rating, rejecting values outside `0.0..=1.0`.
    ///
    /// # Errors
    /// Returns [`RatingError::OutOfRange`] when `rating` is non-finite or out
    /// of range. The stored ratings are left unchanged.
    pub fn try_set_rating(
        &mut self,
        profile: AccessibilityProfile,
        rating: f32,
    ) -> Result<(), RatingError> {
        check_rating(profile, rating)?;
        self.ratings.insert(profile, rating);
        Ok(())
    }

    /// Check every explicit rating lies within `0.0..=1.0`.
    ///
    /// Deserialised ratings bypass the setters, so loaders call this.
    ///
    /// # Errors
    /// Returns [`RatingError::OutOfRange`] for the first offending profile.
    pub fn validate(&self) -> Result<(), RatingError> {
        self.ratings
            .iter()
            .try_for_each(|(&profile, &rating)| check_rating(profile, rating))
    }

    /// Add a rating while returning `self` for chaining.
    #[must_use]
    pub fn with_rating(mut self, profile: AccessibilityProfile, rating: f32) -> Self {
        self.set_rating(profile, rating);
        self
    }
}

fn check_rating(profile: AccessibilityProfile, rating: f32) -> Result<(), RatingError> {
    if (0.0..=1.0).contains(&rating) {
        Ok(())
    } else {
        Err(RatingError::OutOfRange { profile, rating })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("wheelchair", AccessibilityProfile::Wheelchair)]
    #[case("STROLLER", AccessibilityProfile::Stroller)]
    #[case("visual_impairment", AccessibilityProfile::VisualImpairment)]
    #[case(" hearing-impairment ", AccessibilityProfile::HearingImpairment)]
    fn parses_profile_names(#[case] raw: &str, #[case] expected: AccessibilityProfile) {
        assert_eq!(AccessibilityProfile::from_str(raw), Ok(expected));
    }

    #[test]
    fn parsing_rejects_unknown() {
        let err = AccessibilityProfile::from_str("jetpack").unwrap_err();
        assert!(err.to_string().contains("jetpack"));
    }

    #[test]
    fn display_matches_as_str() {
        for profile in AccessibilityProfile::ALL {
            assert_eq!(profile.to_string(), profile.as_str());
        }
    }

    #[test]
    fn missing_rating_is_neutral() {
        let ratings = ProfileRatings::new();
        assert_eq!(ratings.rating(AccessibilityProfile::Wheelchair), DEFAULT_RATING);
        assert!(ratings.explicit(AccessibilityProfile::Wheelchair).is_none());
    }

    #[rstest]
    #[case(1.4, 1.0)]
    #[case(-0.3, 0.0)]
    #[case(f32::NAN, DEFAULT_RATING)]
    #[case(0.25, 0.25)]
    fn set_rating_sanitises(#[case] raw: f32, #[case] stored: f32) {
        let mut ratings = ProfileRatings::new();
        ratings.set_rating(AccessibilityProfile::Stroller, raw);
        assert_eq!(ratings.rating(AccessibilityProfile::Stroller), stored);
    }

    #[rstest]
    #[case(1.01)]
    #[case(-0.01)]
    #[case(f32::INFINITY)]
    fn try_set_rating_rejects_out_of_range(#[case] raw: f32) {
        let mut ratings = ProfileRatings::new();
        let err = ratings
            .try_set_rating(AccessibilityProfile::Wheelchair, raw)
            .expect_err("out-of-range rating");
        assert!(matches!(err, RatingError::OutOfRange { .. }));
        assert!(ratings.explicit(AccessibilityProfile::Wheelchair).is_none());
    }

    #[rstest]
    fn validate_reports_first_bad_profile() {
        let mut ratings = ProfileRatings::new().with_rating(AccessibilityProfile::Wheelchair, 0.9);
        ratings
            .ratings
            .insert(AccessibilityProfile::HearingImpairment, 3.0);
        ratings.ratings.insert(AccessibilityProfile::Stroller, -1.0);
        assert_eq!(
            ratings.validate(),
            Err(RatingError::OutOfRange {
                profile: AccessibilityProfile::Stroller,
                rating: -1.0,
            })
        );
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn ratings_serialise_in_profile_order() {
        let ratings = ProfileRatings::new()
            .with_rating(AccessibilityProfile::HearingImpairment, 0.25)
            .with_rating(AccessibilityProfile::Wheelchair, 0.75);
        let json = serde_json::to_string(&ratings).expect("ratings serialise");
        assert_eq!(json, r#"{"wheelchair":0.75,"hearing-impairment":0.25}"#);
    }
}
