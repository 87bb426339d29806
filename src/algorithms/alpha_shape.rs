use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::algorithms::convex_hull;
use crate::algorithms::triangulation::{DelaunayTriangulator, Site, Triangulator};
use crate::config::AlphaConfig;
use crate::data::{ConvexHull, Edge, Point, Triangle};
use crate::{AlphaScalar, Error};

mod disks;
mod edges;

pub use disks::{classify_edges, CandidateDisk, Classification};
pub use edges::unique_edges;

/// Fewer distinct points than this yield an empty convex hull.
pub const MIN_HULL_POINTS: usize = 3;
/// Fewer distinct points than this yield an empty alpha shape for non-zero
/// alpha.
pub const MIN_ALPHA_POINTS: usize = 4;

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind<T> {
  /// Too few points to compute anything.
  Empty,
  /// `alpha == 0`.
  Hull(ConvexHull<T>),
  /// `alpha != 0`. May be empty if the radius is too small for every edge.
  Edges(Vec<Edge<T>>),
}

/// Result of one alpha shape computation.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct AlphaShape<T> {
  pub alpha: T,
  pub kind: ShapeKind<T>,
  /// Present if requested and a triangulation was built.
  pub triangulation: Option<Vec<Triangle<T>>>,
  /// Present if requested and a triangulation was built.
  pub disks: Option<Vec<CandidateDisk<T>>>,
}

impl<T: AlphaScalar> AlphaShape<T> {
  fn empty(alpha: T) -> AlphaShape<T> {
    AlphaShape {
      alpha,
      kind: ShapeKind::Empty,
      triangulation: None,
      disks: None,
    }
  }

  /// The edges of the shape. For the convex hull these are its sides.
  pub fn edges(&self) -> Vec<Edge<T>> {
    match &self.kind {
      ShapeKind::Empty => Vec::new(),
      ShapeKind::Hull(hull) => hull.edges(),
      ShapeKind::Edges(edges) => edges.clone(),
    }
  }

  pub fn hull(&self) -> Option<&ConvexHull<T>> {
    match &self.kind {
      ShapeKind::Hull(hull) => Some(hull),
      _ => None,
    }
  }

  pub fn is_empty(&self) -> bool {
    match &self.kind {
      ShapeKind::Empty => true,
      ShapeKind::Hull(hull) => hull.is_empty(),
      ShapeKind::Edges(edges) => edges.is_empty(),
    }
  }
}

/// Computes alpha shapes with a configurable triangulation source.
///
/// ```rust
/// # use alpha_shapes::algorithms::AlphaShapeBuilder;
/// # use alpha_shapes::config::AlphaConfig;
/// # use alpha_shapes::data::Point;
/// let pts: Vec<Point<f64>> = [[0., 0.], [10., 0.], [10., 10.], [0., 10.], [4., 5.]]
///   .into_iter()
///   .map(Point::new)
///   .collect();
/// let shape = AlphaShapeBuilder::new()
///   .build(&pts, &AlphaConfig::new(-0.001))
///   .unwrap();
/// assert_eq!(shape.edges().len(), 4);
/// ```
#[derive(Debug, Default, Clone)]
pub struct AlphaShapeBuilder<Tri = DelaunayTriangulator> {
  triangulator: Tri,
}

impl AlphaShapeBuilder<DelaunayTriangulator> {
  pub fn new() -> Self {
    AlphaShapeBuilder {
      triangulator: DelaunayTriangulator,
    }
  }
}

impl<Tri> AlphaShapeBuilder<Tri> {
  pub fn with_triangulator(triangulator: Tri) -> Self {
    AlphaShapeBuilder { triangulator }
  }

  /// $O(n^2)$ for non-zero alpha, $O(n \log n)$ for the convex hull.
  ///
  /// Point sets with fewer than [`MIN_HULL_POINTS`] (alpha zero) or
  /// [`MIN_ALPHA_POINTS`] (alpha non-zero) distinct points produce
  /// [`ShapeKind::Empty`].
  ///
  /// # Errors
  /// * [`Error::InvalidConfig`] if the configuration does not validate.
  /// * [`Error::NonFiniteCoordinate`] for NaN or infinite coordinates.
  /// * [`Error::DegenerateInput`] if all points are colinear or the
  ///   triangulator returns no usable triangles.
  pub fn build<T>(&self, points: &[Point<T>], config: &AlphaConfig<T>) -> Result<AlphaShape<T>, Error>
  where
    T: AlphaScalar,
    Tri: Triangulator<T>,
  {
    config.validate()?;
    if points.iter().any(|pt| !pt.is_finite()) {
      return Err(Error::NonFiniteCoordinate);
    }
    let points = distinct(points);
    let alpha = config.alpha;
    tracing::debug!(points = points.len(), alpha = ?alpha, "computing alpha shape");

    let site = match Site::for_alpha(alpha) {
      Some(site) => site,
      None => {
        if points.len() < MIN_HULL_POINTS {
          tracing::debug!("too few points for a convex hull");
          return Ok(AlphaShape::empty(alpha));
        }
        let hull = convex_hull(&points)?;
        tracing::debug!(vertices = hull.len(), "convex hull");
        return Ok(AlphaShape {
          alpha,
          kind: ShapeKind::Hull(hull),
          triangulation: None,
          disks: None,
        });
      }
    };

    if points.len() < MIN_ALPHA_POINTS {
      tracing::debug!("too few points for an alpha shape");
      return Ok(AlphaShape::empty(alpha));
    }
    let triangles = self.triangulator.triangulate(&points, site)?;
    if triangles.is_empty() || triangles.iter().any(Triangle::is_degenerate) {
      return Err(Error::DegenerateInput);
    }
    let edges = unique_edges(&triangles);
    tracing::debug!(
      site = ?site,
      triangles = triangles.len(),
      edges = edges.len(),
      "triangulated"
    );
    let tolerance = config.absolute_tolerance(&points);
    let classification = classify_edges(&edges, &points, alpha, tolerance)?;
    tracing::debug!(edges = classification.edges.len(), "alpha shape");
    Ok(AlphaShape {
      alpha,
      kind: ShapeKind::Edges(classification.edges),
      triangulation: config.include_triangulation.then_some(triangles),
      disks: config.include_disks.then_some(classification.candidates),
    })
  }
}

/// Alpha shape using the default Delaunay triangulator.
///
/// See [`AlphaShapeBuilder::build`].
pub fn alpha_shape<T>(points: &[Point<T>], config: &AlphaConfig<T>) -> Result<AlphaShape<T>, Error>
where
  T: AlphaScalar,
{
  AlphaShapeBuilder::new().build(points, config)
}

// Points with equal coordinates are indistinguishable. Keeps first
// occurrences in input order.
fn distinct<T: AlphaScalar>(points: &[Point<T>]) -> Vec<Point<T>> {
  let mut order: Vec<usize> = (0..points.len()).collect();
  order.sort_by(|&a, &b| points[a].total_cmp(&points[b]).then(a.cmp(&b)));
  order.dedup_by(|a, b| points[*a].total_cmp(&points[*b]) == Ordering::Equal);
  order.sort_unstable();
  order.into_iter().map(|idx| points[idx]).collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;

  use claims::{assert_err, assert_ok};
  use proptest::collection::*;
  use proptest::prelude::*;

  fn sorted_keys(edges: &[Edge<f64>]) -> Vec<crate::data::EdgeKey> {
    let mut keys: Vec<_> = edges.iter().map(Edge::key).collect();
    keys.sort();
    keys
  }

  #[test]
  fn distinct_keeps_first_occurrence() {
    let pts = [[1.0, 1.0], [0.0, 0.0], [1.0, 1.0], [2.0, 0.0], [0.0, 0.0]].map(Point::new);
    assert_eq!(
      distinct(&pts),
      vec![[1.0, 1.0], [0.0, 0.0], [2.0, 0.0]]
        .into_iter()
        .map(Point::new)
        .collect::<Vec<_>>()
    );
  }

  #[test]
  fn minimum_point_counts() {
    let tri = vec![
      Point::new([0.0, 0.0]),
      Point::new([10.0, 0.0]),
      Point::new([5.0, 10.0]),
    ];
    let shape = assert_ok!(alpha_shape(&tri[..2], &AlphaConfig::hull()));
    assert_eq!(shape.kind, ShapeKind::Empty);
    let shape = assert_ok!(alpha_shape(&tri, &AlphaConfig::hull()));
    assert_eq!(shape.edges().len(), 3);
    let shape = assert_ok!(alpha_shape(&tri, &AlphaConfig::new(0.01)));
    assert_eq!(shape.kind, ShapeKind::Empty);
    assert!(shape.is_empty());
    // Duplicates do not count.
    let mut dups = tri.clone();
    dups.push(tri[0]);
    let shape = assert_ok!(alpha_shape(&dups, &AlphaConfig::new(-0.01)));
    assert_eq!(shape.kind, ShapeKind::Empty);
  }

  #[test]
  fn colinear_is_degenerate() {
    let pts: Vec<Point<f64>> = (0..6).map(|i| Point::new([i as f64, 3.0])).collect();
    assert_eq!(
      assert_err!(alpha_shape(&pts, &AlphaConfig::hull())),
      Error::DegenerateInput
    );
    assert_eq!(
      assert_err!(alpha_shape(&pts, &AlphaConfig::new(-0.1))),
      Error::DegenerateInput
    );
    assert_eq!(
      assert_err!(alpha_shape(&pts, &AlphaConfig::new(0.1))),
      Error::DegenerateInput
    );
  }

  #[test]
  fn invalid_input() {
    let mut pts = square_points(1.0);
    assert_err!(alpha_shape(&pts, &AlphaConfig::new(f64::NAN)));
    pts.push(Point::new([f64::INFINITY, 0.0]));
    assert_eq!(
      assert_err!(alpha_shape(&pts, &AlphaConfig::hull())),
      Error::NonFiniteCoordinate
    );
  }

  #[test]
  fn overlays() {
    let pts = square_points(10.0);
    let config = AlphaConfig::new(-0.01);
    let shape = assert_ok!(alpha_shape(&pts, &config));
    assert_eq!(shape.triangulation, None);
    assert_eq!(shape.disks, None);
    let config = config.with_triangulation(true).with_disks(true);
    let shape = assert_ok!(alpha_shape(&pts, &config));
    assert_eq!(shape.triangulation.as_ref().map(Vec::len), Some(2));
    // Four sides and one diagonal, two disks each.
    assert_eq!(shape.disks.as_ref().map(Vec::len), Some(10));
    let valid = shape.disks.unwrap().iter().filter(|c| c.valid).count();
    assert_eq!(valid, 4);
  }

  #[test]
  fn radius_too_small_is_empty() {
    let pts = square_points(10.0);
    let shape = assert_ok!(alpha_shape(&pts, &AlphaConfig::new(-1.0)));
    assert_eq!(shape.kind, ShapeKind::Edges(Vec::new()));
    assert!(shape.is_empty());
  }

  #[test]
  fn custom_triangulator() {
    let pts = square_points(10.0);
    let calls = std::cell::Cell::new(0);
    let counting = |pts: &[Point<f64>], site: Site| {
      calls.set(calls.get() + 1);
      DelaunayTriangulator.triangulate(pts, site)
    };
    let builder = AlphaShapeBuilder::with_triangulator(counting);
    assert_ok!(builder.build(&pts, &AlphaConfig::new(0.01)));
    assert_ok!(builder.build(&pts, &AlphaConfig::hull()));
    assert_eq!(calls.get(), 1);
  }

  #[test]
  fn degenerate_triangles_rejected() {
    let pts = square_points(10.0);
    let flat = |pts: &[Point<f64>], _site: Site| -> Result<Vec<Triangle<f64>>, Error> {
      Ok(vec![Triangle::new([pts[0], pts[0], pts[1]])])
    };
    let builder = AlphaShapeBuilder::with_triangulator(flat);
    assert_eq!(
      assert_err!(builder.build(&pts, &AlphaConfig::new(0.01))),
      Error::DegenerateInput
    );
  }

  proptest! {
    #[test]
    fn edges_use_input_points(pts in vec(any_point(), 4..30), alpha in -0.05..0.05f64) {
      if let Ok(shape) = alpha_shape(&pts, &AlphaConfig::new(alpha)) {
        for edge in shape.edges() {
          prop_assert!(pts.contains(edge.src()));
          prop_assert!(pts.contains(edge.dst()));
        }
      }
    }

    #[test]
    fn order_independent(pts in vec(any_point(), 4..30), alpha in -0.05..0.05f64) {
      let mut rev = pts.clone();
      rev.reverse();
      let config = AlphaConfig::new(alpha);
      match (alpha_shape(&pts, &config), alpha_shape(&rev, &config)) {
        (Ok(a), Ok(b)) => prop_assert_eq!(sorted_keys(&a.edges()), sorted_keys(&b.edges())),
        (a, b) => prop_assert_eq!(a.err(), b.err()),
      }
    }
  }
}
