use crate::data::{Point, Triangle};
use crate::{AlphaScalar, Error};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod delaunay;
pub mod furthest_site;

/// Which Delaunay triangulation to build.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
  /// Circumcircles contain no input point.
  Nearest,
  /// Circumcircles contain every input point.
  Furthest,
}

impl Site {
  /// Furthest-site for positive alpha, nearest-site for negative alpha and
  /// `None` for zero (or NaN).
  pub fn for_alpha<T: AlphaScalar>(alpha: T) -> Option<Site> {
    if alpha > T::zero() {
      Some(Site::Furthest)
    } else if alpha < T::zero() {
      Some(Site::Nearest)
    } else {
      None
    }
  }
}

/// Source of triangulations for the alpha shape.
///
/// Implementations must return non-degenerate triangles whose vertices are
/// taken from `points`.
pub trait Triangulator<T> {
  fn triangulate(&self, points: &[Point<T>], site: Site) -> Result<Vec<Triangle<T>>, Error>;
}

impl<T, F> Triangulator<T> for F
where
  F: Fn(&[Point<T>], Site) -> Result<Vec<Triangle<T>>, Error>,
{
  fn triangulate(&self, points: &[Point<T>], site: Site) -> Result<Vec<Triangle<T>>, Error> {
    self(points, site)
  }
}

/// Nearest-site triangulations are delegated to `spade`, furthest-site
/// triangulations are built from the convex hull.
#[derive(Debug, Default, Clone, Copy)]
pub struct DelaunayTriangulator;

impl<T: AlphaScalar> Triangulator<T> for DelaunayTriangulator {
  fn triangulate(&self, points: &[Point<T>], site: Site) -> Result<Vec<Triangle<T>>, Error> {
    match site {
      Site::Nearest => delaunay::nearest_site(points),
      Site::Furthest => furthest_site::furthest_site(points),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn site_for_alpha() {
    assert_eq!(Site::for_alpha(0.5), Some(Site::Furthest));
    assert_eq!(Site::for_alpha(-0.5), Some(Site::Nearest));
    assert_eq!(Site::for_alpha(0.0), None);
    assert_eq!(Site::for_alpha(f64::NAN), None);
  }

  #[test]
  fn closure_triangulator() {
    let single = |pts: &[Point<f64>], _site: Site| -> Result<Vec<Triangle<f64>>, Error> {
      Ok(vec![Triangle::new([pts[0], pts[1], pts[2]])])
    };
    let pts = [
      Point::new([0.0, 0.0]),
      Point::new([1.0, 0.0]),
      Point::new([0.0, 1.0]),
    ];
    assert_eq!(single.triangulate(&pts, Site::Nearest).unwrap().len(), 1);
  }
}
