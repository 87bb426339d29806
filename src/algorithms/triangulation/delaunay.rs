use spade::{DelaunayTriangulation, Point2, Triangulation};

use crate::data::{Point, Triangle};
use crate::{AlphaScalar, Error};

/// $O(n \log n)$ expected. Nearest-site Delaunay triangulation.
///
/// Duplicate points are merged. Fails with [`Error::DegenerateInput`] when
/// the points span no triangle.
pub fn nearest_site<T>(pts: &[Point<T>]) -> Result<Vec<Triangle<T>>, Error>
where
  T: AlphaScalar,
{
  let mut net: DelaunayTriangulation<Point2<f64>> = DelaunayTriangulation::new();
  // Indexed by spade's vertex index.
  let mut vertices: Vec<Point<T>> = Vec::with_capacity(pts.len());
  for pt in pts {
    let position = Point2::new(pt[0].to_f64_lossless(), pt[1].to_f64_lossless());
    let handle = net
      .insert(position)
      .map_err(|err| Error::Triangulation(format!("{:?}", err)))?;
    if handle.index() == vertices.len() {
      vertices.push(*pt);
    }
  }
  let triangles: Vec<Triangle<T>> = net
    .inner_faces()
    .map(|face| Triangle::new(face.vertices().map(|v| vertices[v.fix().index()])))
    .collect();
  tracing::trace!(
    vertices = vertices.len(),
    triangles = triangles.len(),
    "nearest-site triangulation"
  );
  if triangles.is_empty() {
    return Err(Error::DegenerateInput);
  }
  Ok(triangles)
}
