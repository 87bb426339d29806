use std::cmp::Ordering;

use crate::AlphaScalar;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// This is the sign of the cross product `(p2 - p1) x (p3 - p1)`, evaluated
  /// with exact arithmetic so nearly colinear triples are never misreported.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use alpha_shapes::data::Point;
  /// # use alpha_shapes::Orientation;
  /// let p1 = Point::new([ 0.0, 0.0 ]);
  /// let p2 = Point::new([ 0.0, 1.0 ]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 0.0, 2.0 ])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ -1.0, 2.0 ])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 1.0, 2.0 ])).is_cw());
  /// ```
  pub fn new<T>(p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> Orientation
  where
    T: AlphaScalar,
  {
    match T::cmp_slope(p1, p2, p3) {
      Ordering::Less => Orientation::ClockWise,
      Ordering::Equal => Orientation::CoLinear,
      Ordering::Greater => Orientation::CounterClockWise,
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn then(self, other: Orientation) -> Orientation {
    match self {
      Orientation::CoLinear => other,
      _ => self,
    }
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use Orientation::*;
  use crate::testing::*;

  use test_strategy::proptest;

  #[proptest]
  fn orientation_reverse(
    #[strategy(any_grid())] p1: [f64; 2],
    #[strategy(any_grid())] p2: [f64; 2],
    #[strategy(any_grid())] p3: [f64; 2],
  ) {
    let abc = Orientation::new(&p1, &p2, &p3);
    let cba = Orientation::new(&p3, &p2, &p1);
    assert_eq!(abc, cba.reverse())
  }

  #[test]
  fn exact_near_colinear() {
    // r is one ulp above the line through p and q.
    let p = [0.5, 0.5];
    let q = [12.0, 12.0];
    let r = [24.0, 24.000000000000004];
    assert_eq!(Orientation::new(&p, &q, &r), CounterClockWise);
  }

  #[test]
  fn then_breaks_ties() {
    assert_eq!(CoLinear.then(ClockWise), ClockWise);
    assert_eq!(CounterClockWise.then(ClockWise), CounterClockWise);
  }
}
