use std::cmp::Ordering;

use crate::algorithms::convex_hull;
use crate::data::{Point, Triangle};
use crate::{AlphaScalar, Error};

/// $O(n \log n + h^3)$ Furthest-site Delaunay triangulation.
///
/// Only vertices of the convex hull take part. Every triangle's circumcircle
/// contains all input points. The hull polygon is split along chords: for a
/// chord the apex is the sub-chain vertex with the smallest inscribed angle,
/// whose circle therefore encloses the rest of the sub-chain.
///
/// # Errors
/// Same as [`convex_hull`].
pub fn furthest_site<T>(pts: &[Point<T>]) -> Result<Vec<Triangle<T>>, Error>
where
  T: AlphaScalar,
{
  let hull = convex_hull(pts)?.strictly_convex();
  let vertices = hull.vertices();
  if vertices.len() < 3 {
    return Err(Error::DegenerateInput);
  }
  let mut triangles = Vec::with_capacity(vertices.len() - 2);
  let mut chords = vec![(0, vertices.len() - 1)];
  while let Some((from, to)) = chords.pop() {
    if to - from < 2 {
      continue;
    }
    let mut apex = from + 1;
    for candidate in from + 2..to {
      let outside = T::cmp_incircle(
        &vertices[from],
        &vertices[apex],
        &vertices[to],
        &vertices[candidate],
      ) == Ordering::Less;
      if outside {
        apex = candidate;
      }
    }
    triangles.push(Triangle::new([vertices[from], vertices[apex], vertices[to]]));
    chords.push((from, apex));
    chords.push((apex, to));
  }
  tracing::trace!(
    hull = vertices.len(),
    triangles = triangles.len(),
    "furthest-site triangulation"
  );
  Ok(triangles)
}
