//! Planar distance helpers for short walking paths.
//!
//! Distances treat longitude and latitude degrees as a flat grid and scale by
//! a fixed [`METERS_PER_DEGREE`]. This is not a great-circle computation: it
//! ignores the narrowing of longitude degrees away from the equator and is
//! only meaningful over the few hundred metres between neighbouring sights.
//! Route outputs depend on the exact figures, so the approximation is kept.

use geo::Coord;

/// Metres per degree used to scale planar degree distances.
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// Planar distance in metres between two coordinates.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use accessroute_core::geometry::segment_distance_meters;
///
/// let a = Coord { x: 0.0, y: 0.0 };
/// let b = Coord { x: 0.003, y: 0.004 };
/// assert!((segment_distance_meters(a, b) - 555.0).abs() < 1e-6);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "distance approximation is floating-point by nature"
)]
#[must_use]
pub fn segment_distance_meters(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let lat_diff = to.y - from.y;
    let lon_diff = to.x - from.x;
    (lat_diff * lat_diff + lon_diff * lon_diff).sqrt() * METERS_PER_DEGREE
}

/// Total planar length in metres of a path through `waypoints`.
///
/// Paths with fewer than two points have zero length.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use accessroute_core::geometry::path_distance_meters;
///
/// let p = Coord { x: 13.7628, y: 45.6467 };
/// assert_eq!(path_distance_meters(&[p, p]), 0.0);
/// assert_eq!(path_distance_meters(&[p]), 0.0);
/// ```
#[must_use]
pub fn path_distance_meters(waypoints: &[Coord<f64>]) -> f64 {
    waypoints
        .windows(2)
        .filter_map(|pair| match pair {
            [from, to] => Some(segment_distance_meters(*from, *to)),
            _ => None,
        })
        .sum()
}

/// Midpoint between two coordinates in degree space.
#[expect(
    clippy::float_arithmetic,
    reason = "midpoint averages floating-point coordinates"
)]
#[must_use]
pub fn midpoint(a: Coord<f64>, b: Coord<f64>) -> Coord<f64> {
    Coord {
        x: (a.x + b.x) / 2.0,
        y: (a.y + b.y) / 2.0,
    }
}

/// Shift a coordinate by the given latitude and longitude deltas in degrees.
#[expect(
    clippy::float_arithmetic,
    reason = "offsets are floating-point degree deltas"
)]
#[must_use]
pub fn offset(coord: Coord<f64>, d_lat: f64, d_lon: f64) -> Coord<f64> {
    Coord {
        x: coord.x + d_lon,
        y: coord.y + d_lat,
    }
}
