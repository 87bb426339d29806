#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Planar alpha shapes.
//!
//! For `alpha == 0` the alpha shape is the convex hull, built with a Graham
//! scan. For any other `alpha` the shape is the subset of the nearest-site
//! (`alpha < 0`) or furthest-site (`alpha > 0`) Delaunay triangulation whose
//! edges admit a generalized disk of radius `1/|alpha|`.
//!
//! ```rust
//! # use alpha_shapes::algorithms::alpha_shape;
//! # use alpha_shapes::config::AlphaConfig;
//! # use alpha_shapes::data::Point;
//! let pts = vec![
//!   Point::new([0.0, 0.0]),
//!   Point::new([10.0, 0.0]),
//!   Point::new([5.0, 10.0]),
//! ];
//! let shape = alpha_shape(&pts, &AlphaConfig::hull()).unwrap();
//! assert_eq!(shape.edges().len(), 3);
//! ```
use num_traits::Float;
use std::cmp::Ordering;
use std::fmt::Debug;
use std::iter::Sum;

pub mod algorithms;
pub mod config;
pub mod data;
mod orientation;

pub use orientation::Orientation;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  /// Too few distinct points for the requested computation.
  #[error("Insufficient points")]
  InsufficientPoints,
  /// All points are colinear or no non-degenerate triangle exists.
  #[error("Degenerate input: points are colinear and no valid solution exists")]
  DegenerateInput,
  #[error("Degenerate edge: endpoints coincide")]
  DegenerateEdge,
  #[error("Coordinates must be finite")]
  NonFiniteCoordinate,
  #[error("Invalid configuration: {0}")]
  InvalidConfig(&'static str),
  #[error("Triangulation failed: {0}")]
  Triangulation(String),
}

// Floating point coordinates. Orientation and in-circle tests are exact, the
// metric parts (distances, disk centers) are not.
pub trait AlphaScalar: Float + Debug + Sum + Send + Sync + 'static {
  /// Sign of `(q - p) x (r - p)`.
  fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
  /// `Greater` if `d` lies inside the circle through the counter-clockwise
  /// triangle `a, b, c`, `Less` if outside and `Equal` on the circle.
  fn cmp_incircle(a: &[Self; 2], b: &[Self; 2], c: &[Self; 2], d: &[Self; 2]) -> Ordering;
  fn to_f64_lossless(self) -> f64;
  fn from_f64_lossy(val: f64) -> Self;
}

fn sign_to_ordering(val: f64) -> Ordering {
  if val > 0.0 {
    Ordering::Greater
  } else if val < 0.0 {
    Ordering::Less
  } else {
    Ordering::Equal
  }
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl AlphaScalar for $ty {
        // Adaptive exact arithmetic from `geometry_predicates`. Both f32 and
        // f64 widen to f64 without loss.
        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          sign_to_ordering(geometry_predicates::predicates::orient2d(
            [f64::from(p[0]), f64::from(p[1])],
            [f64::from(q[0]), f64::from(q[1])],
            [f64::from(r[0]), f64::from(r[1])],
          ))
        }

        fn cmp_incircle(a: &[Self; 2], b: &[Self; 2], c: &[Self; 2], d: &[Self; 2]) -> Ordering {
          sign_to_ordering(geometry_predicates::predicates::incircle(
            [f64::from(a[0]), f64::from(a[1])],
            [f64::from(b[0]), f64::from(b[1])],
            [f64::from(c[0]), f64::from(c[1])],
            [f64::from(d[0]), f64::from(d[1])],
          ))
        }

        fn to_f64_lossless(self) -> f64 {
          f64::from(self)
        }

        fn from_f64_lossy(val: f64) -> Self {
          val as $ty
        }
      }
    )*
  };
}

floating_precision!(f32, f64);

#[cfg(test)]
pub mod testing;
