use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::data::{ChordDisk, Disk, Edge, EdgeKey, Point};
use crate::{AlphaScalar, Error};

/// A disk through both endpoints of `edge` together with its verdict.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateDisk<T> {
  pub edge: Edge<T>,
  pub disk: Disk<T>,
  /// The disk is a generalized disk: full for positive alpha, empty for
  /// negative alpha.
  pub valid: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Classification<T> {
  /// Edges with at least one valid candidate disk, in input order.
  pub edges: Vec<Edge<T>>,
  pub candidates: Vec<CandidateDisk<T>>,
}

/// $O(e \cdot n)$ Select the edges whose endpoints are alpha neighbours.
///
/// For each edge the (at most two) disks of radius `1/|alpha|` through its
/// endpoints are tested against every point. With positive alpha a disk must
/// cover all points, with negative alpha no point may lie strictly inside.
/// Both disks are always evaluated, except when the endpoints are exactly a
/// diameter apart and the two coincide. Edges longer than the diameter have no
/// candidate disks and are never selected. Repeated edges, in either
/// direction, are classified once.
///
/// `tolerance` is absolute, in the units of the coordinates.
///
/// # Errors
/// [`Error::InvalidConfig`] if `alpha` is zero or not finite.
pub fn classify_edges<T>(
  edges: &[Edge<T>],
  points: &[Point<T>],
  alpha: T,
  tolerance: T,
) -> Result<Classification<T>, Error>
where
  T: AlphaScalar,
{
  if alpha == T::zero() || !alpha.is_finite() {
    return Err(Error::InvalidConfig("alpha must be non-zero and finite"));
  }
  let radius = alpha.abs().recip();
  let mut seen: BTreeSet<EdgeKey> = BTreeSet::new();
  let mut result = Classification {
    edges: Vec::new(),
    candidates: Vec::new(),
  };
  for edge in edges {
    if !seen.insert(edge.key()) {
      continue;
    }
    let disks = match ChordDisk::pair(edge, radius) {
      Some(disks) => disks,
      None => continue,
    };
    let count = if disks[0].is_diametral() { 1 } else { 2 };
    let mut alpha_neighbours = false;
    for disk in &disks[..count] {
      let valid = if alpha > T::zero() {
        disk.is_full(points, tolerance)
      } else {
        disk.is_empty(points, tolerance)
      };
      alpha_neighbours |= valid;
      result.candidates.push(CandidateDisk {
        edge: *edge,
        disk: disk.disk(),
        valid,
      });
    }
    if alpha_neighbours {
      result.edges.push(*edge);
    }
  }
  tracing::trace!(
    edges = edges.len(),
    candidates = result.candidates.len(),
    selected = result.edges.len(),
    "classified edges"
  );
  Ok(result)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;
  use claims::{assert_err, assert_ok};

  const TOL: f64 = 1e-9;

  fn edge(p: [f64; 2], q: [f64; 2]) -> Edge<f64> {
    Edge::new(Point::new(p), Point::new(q)).unwrap()
  }

  #[test]
  fn side_vs_diagonal_negative() {
    let pts = square_points(10.0);
    let side = edge([0.0, 0.0], [10.0, 0.0]);
    let diagonal = edge([0.0, 0.0], [10.0, 10.0]);
    // Radius 100: one disk per side bulges away from the square.
    let result = assert_ok!(classify_edges(&[side, diagonal], &pts, -0.01, TOL));
    assert_eq!(result.edges, vec![side]);
    assert_eq!(result.candidates.len(), 4);
    assert_eq!(result.candidates.iter().filter(|c| c.valid).count(), 1);
  }

  #[test]
  fn side_vs_diagonal_positive() {
    let pts = square_points(10.0);
    let side = edge([0.0, 0.0], [10.0, 0.0]);
    let diagonal = edge([0.0, 0.0], [10.0, 10.0]);
    let result = assert_ok!(classify_edges(&[diagonal, side], &pts, 0.01, TOL));
    assert_eq!(result.edges, vec![side]);
  }

  #[test]
  fn radius_too_small() {
    let pts = square_points(10.0);
    let side = edge([0.0, 0.0], [10.0, 0.0]);
    // Radius 4 cannot span a side of length 10.
    let result = assert_ok!(classify_edges(&[side], &pts, -0.25, TOL));
    assert!(result.edges.is_empty());
    assert!(result.candidates.is_empty());
  }

  #[test]
  fn coincident_centers_counted_once() {
    let pts = square_points(8.0);
    let side = edge([0.0, 0.0], [8.0, 0.0]);
    // Radius 4: both centers are the midpoint of the side.
    let result = assert_ok!(classify_edges(&[side], &pts, 0.25, TOL));
    assert_eq!(result.candidates.len(), 1);
  }

  #[test]
  fn duplicate_edges() {
    let pts = square_points(10.0);
    let side = edge([0.0, 0.0], [10.0, 0.0]);
    let rev = edge([10.0, 0.0], [0.0, 0.0]);
    let result = assert_ok!(classify_edges(&[side, rev], &pts, -0.01, TOL));
    assert_eq!(result.edges.len(), 1);
    assert_eq!(result.candidates.len(), 2);
  }

  #[test]
  fn vanishing_alpha_selects_hull_sides() {
    let mut pts = square_points(10.0);
    pts.push(Point::new([4.0, 5.0]));
    pts.push(Point::new([6.0, 3.0]));
    let side = edge([0.0, 0.0], [10.0, 0.0]);
    let inner = edge([0.0, 0.0], [4.0, 5.0]);
    for alpha in [-1e-17, -1e-18, -1e-300, 1e-17, 1e-300] {
      let result = assert_ok!(classify_edges(&[side, inner], &pts, alpha, TOL));
      assert_eq!(result.edges, vec![side]);
    }
  }

  #[test]
  fn zero_alpha() {
    let pts = square_points(10.0);
    assert_err!(classify_edges(&[], &pts, 0.0, TOL));
  }
}
