//! Planar geometry helpers.

use geo::algorithm::euclidean_distance::EuclideanDistance;
use geo::Point;

#[doc(hidden)]
pub use geo::Coordinate;

/// Node position in the plane. `x`/`y` are in the same units as whatever the caller uses to
/// express distances, e.g. projected meters.
pub type Position = Coordinate<f64>;

pub fn position(x: f64, y: f64) -> Position {
  Coordinate { x, y }
}

pub fn euclidean_distance(from: &Position, to: &Position) -> f64 {
  Point::from(*from).euclidean_distance(&Point::from(*to))
}
