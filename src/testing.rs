// Strategies and fixtures for tests.
//
// Coordinates are drawn from an integer grid so that exact predicates and
// hand-computed expectations agree.
use proptest::prelude::*;

use crate::data::{Point, Triangle};
use crate::Orientation;

pub fn any_grid() -> impl Strategy<Value = [f64; 2]> {
  (-1000i32..=1000, -1000i32..=1000).prop_map(|(x, y)| [f64::from(x), f64::from(y)])
}

pub fn any_point() -> impl Strategy<Value = Point<f64>> {
  any_grid().prop_map(Point::new)
}

pub fn square_points(side: f64) -> Vec<Point<f64>> {
  vec![
    Point::new([0.0, 0.0]),
    Point::new([side, 0.0]),
    Point::new([side, side]),
    Point::new([0.0, side]),
  ]
}

// Vertices in counter-clockwise order.
pub fn ccw(tri: &Triangle<f64>) -> [[f64; 2]; 3] {
  let [a, b, c] = tri.vertices();
  match a.orientation(b, c) {
    Orientation::ClockWise => [a.array, c.array, b.array],
    _ => [a.array, b.array, c.array],
  }
}
