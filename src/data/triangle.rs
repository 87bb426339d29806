#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Edge, Point, PointLocation};
use crate::{AlphaScalar, Orientation};

/// Triangle as produced by a triangulator. Vertex order is not significant
/// for the edges it defines.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<T>(pub [Point<T>; 3]);

impl<T: AlphaScalar> Triangle<T> {
  pub fn new(pts: [Point<T>; 3]) -> Triangle<T> {
    Triangle(pts)
  }

  pub fn vertices(&self) -> &[Point<T>; 3] {
    &self.0
  }

  pub fn orientation(&self) -> Orientation {
    let [a, b, c] = &self.0;
    a.orientation(b, c)
  }

  pub fn is_degenerate(&self) -> bool {
    self.orientation().is_colinear()
  }

  /// Adjacent vertex pairs, including the wraparound pair.
  pub fn sides(&self) -> [(&Point<T>, &Point<T>); 3] {
    let [a, b, c] = &self.0;
    [(a, b), (b, c), (c, a)]
  }

  /// The three undirected edges. Coincident vertices yield no edge.
  pub fn edges(&self) -> impl Iterator<Item = Edge<T>> + '_ {
    self
      .sides()
      .into_iter()
      .filter_map(|(p, q)| Edge::new(*p, *q).ok())
  }

  // O(1)
  pub fn locate(&self, pt: &Point<T>) -> PointLocation {
    use Orientation::*;
    let [a, b, c] = &self.0;
    let (a, b, c) = match self.orientation() {
      ClockWise => (a, c, b),
      _ => (a, b, c),
    };
    let ab = a.orientation(b, pt);
    let bc = b.orientation(c, pt);
    let ca = c.orientation(a, pt);
    if ab == ClockWise || bc == ClockWise || ca == ClockWise {
      PointLocation::Outside
    } else if ab == CoLinear || bc == CoLinear || ca == CoLinear {
      PointLocation::OnBoundary
    } else {
      PointLocation::Inside
    }
  }
}
