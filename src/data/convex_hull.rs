#[cfg(feature = "serde")]
use serde::Serialize;

use super::{Edge, Point, PointLocation};
use crate::{AlphaScalar, Error, Orientation};

/// Counter-clockwise convex polygon. The closing edge from the last vertex
/// back to the first is implicit.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexHull<T> {
  vertices: Vec<Point<T>>,
}

impl<T: AlphaScalar> ConvexHull<T> {
  /// $O(1)$ Assume the vertices form a counter-clockwise convex polygon.
  pub fn new_unchecked(vertices: Vec<Point<T>>) -> ConvexHull<T> {
    let hull = ConvexHull { vertices };
    debug_assert!(hull.validate().is_ok());
    hull
  }

  pub fn vertices(&self) -> &[Point<T>] {
    &self.vertices
  }

  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  /// Consecutive vertex pairs, including the closing pair.
  pub fn sides(&self) -> impl Iterator<Item = (&Point<T>, &Point<T>)> + '_ {
    let n = self.vertices.len();
    (0..n).map(move |i| (&self.vertices[i], &self.vertices[(i + 1) % n]))
  }

  pub fn edges(&self) -> Vec<Edge<T>> {
    self
      .sides()
      .filter_map(|(p, q)| Edge::new(*p, *q).ok())
      .collect()
  }

  /// $O(n)$
  pub fn locate(&self, pt: &Point<T>) -> PointLocation {
    let mut on_boundary = false;
    for (p, q) in self.sides() {
      match p.orientation(q, pt) {
        Orientation::ClockWise => return PointLocation::Outside,
        Orientation::CoLinear => on_boundary = true,
        Orientation::CounterClockWise => {}
      }
    }
    if on_boundary {
      PointLocation::OnBoundary
    } else {
      PointLocation::Inside
    }
  }

  /// Drop vertices that lie on the segment between their neighbours.
  pub fn strictly_convex(&self) -> ConvexHull<T> {
    let n = self.vertices.len();
    let vertices = (0..n)
      .filter(|&i| {
        let prev = &self.vertices[(i + n - 1) % n];
        let next = &self.vertices[(i + 1) % n];
        !prev.orientation(&self.vertices[i], next).is_colinear()
      })
      .map(|i| self.vertices[i])
      .collect();
    ConvexHull { vertices }
  }

  /// $O(n)$ No clockwise turns and at least one counter-clockwise turn.
  pub fn validate(&self) -> Result<(), Error> {
    let n = self.vertices.len();
    if n < 3 {
      return Err(Error::InsufficientPoints);
    }
    let mut turns_left = false;
    for i in 0..n {
      let [a, b, c] = [i, (i + 1) % n, (i + 2) % n].map(|j| &self.vertices[j]);
      match a.orientation(b, c) {
        Orientation::ClockWise => return Err(Error::DegenerateInput),
        Orientation::CounterClockWise => turns_left = true,
        Orientation::CoLinear => {}
      }
    }
    if turns_left {
      Ok(())
    } else {
      Err(Error::DegenerateInput)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use claims::assert_ok;

  fn square_with_side_point() -> ConvexHull<f64> {
    ConvexHull::new_unchecked(vec![
      Point::new([0.0, 0.0]),
      Point::new([10.0, 0.0]),
      Point::new([10.0, 10.0]),
      Point::new([0.0, 10.0]),
      Point::new([0.0, 5.0]),
    ])
  }

  #[test]
  fn locate() {
    let hull = square_with_side_point();
    assert_ok!(hull.validate());
    assert_eq!(hull.locate(&Point::new([5.0, 5.0])), PointLocation::Inside);
    assert_eq!(hull.locate(&Point::new([0.0, 7.0])), PointLocation::OnBoundary);
    assert_eq!(hull.locate(&Point::new([10.0, 10.0])), PointLocation::OnBoundary);
    assert_eq!(hull.locate(&Point::new([11.0, 5.0])), PointLocation::Outside);
  }

  #[test]
  fn strictly_convex_drops_side_point() {
    let hull = square_with_side_point().strictly_convex();
    assert_eq!(hull.len(), 4);
    assert!(!hull.vertices().contains(&Point::new([0.0, 5.0])));
    assert_eq!(hull.edges().len(), 4);
  }

  #[test]
  fn clockwise_is_invalid() {
    let hull = ConvexHull {
      vertices: vec![
        Point::new([0.0, 0.0]),
        Point::new([0.0, 10.0]),
        Point::new([10.0, 0.0]),
      ],
    };
    assert_eq!(hull.validate(), Err(Error::DegenerateInput));
  }
}
