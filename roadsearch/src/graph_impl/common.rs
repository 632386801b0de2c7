use crate::spatial::Position;
use rstar::{PointDistance, RTreeObject, AABB};

// Dense node index
pub type Idx = u32;

/// Spatial index entry pointing back at a dense node index.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
  pub idx: Idx,
  pub point: [f64; 2],
}

impl Entry {
  pub fn new(idx: Idx, position: &Position) -> Self {
    Self {
      idx,
      point: [position.x, position.y],
    }
  }
}

impl RTreeObject for Entry {
  type Envelope = AABB<[f64; 2]>;
  fn envelope(&self) -> Self::Envelope {
    AABB::from_point(self.point)
  }
}

impl PointDistance for Entry {
  fn distance_2(&self, point: &[f64; 2]) -> f64 {
    let dx = self.point[0] - point[0];
    let dy = self.point[1] - point[1];
    dx * dx + dy * dy
  }
}
