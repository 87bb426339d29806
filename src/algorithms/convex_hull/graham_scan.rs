use ordered_float::OrderedFloat;
use std::cmp::Ordering;

use crate::data::{ConvexHull, Point};
use crate::{AlphaScalar, Error, Orientation};

// https://en.wikipedia.org/wiki/Graham_scan

// Properties:
//    No panics.
//    All Ok results are valid convex polygons.
//    No points are outside the resulting convex polygon.
//    The result does not depend on the order of the input.
/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Graham scan][wiki] algorithm for finding the smallest convex polygon which
/// contains all the given points. The polygon is counter-clockwise and starts
/// at the lowest point (leftmost among the lowest).
///
/// Points are swept by angle around the start point. Points sharing a ray
/// from the start point are visited farthest first (by horizontal, then
/// vertical, distance). Consequently colinear points on the first ray are
/// dropped while a colinear point on the last ray stays on the hull as a
/// vertex of the closing edge.
///
/// # Errors
/// Will return [`Error::InsufficientPoints`] if the input set contains less
/// than three distinct points, [`Error::DegenerateInput`] if all points are
/// colinear and [`Error::NonFiniteCoordinate`] for NaN or infinite input.
///
/// # Properties
/// * No points from the input set will be outside the returned convex polygon.
/// * All vertices in the convex polygon are from the input set.
///
/// # Examples
///
/// ```rust
/// # use alpha_shapes::algorithms::convex_hull;
/// # use alpha_shapes::data::Point;
/// # use alpha_shapes::Error;
/// let dups = vec![Point::new([0.0, 0.0])].repeat(3);
/// assert_eq!(convex_hull(&dups).err(), Some(Error::InsufficientPoints));
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull<T>(pts: &[Point<T>]) -> Result<ConvexHull<T>, Error>
where
  T: AlphaScalar,
{
  if pts.iter().any(|pt| !pt.is_finite()) {
    return Err(Error::NonFiniteCoordinate);
  }
  let mut pts = pts.to_vec();
  pts.sort_unstable_by(Point::total_cmp);
  pts.dedup_by(|a, b| a.total_cmp(b).is_eq());
  if pts.len() < 3 {
    return Err(Error::InsufficientPoints);
  }

  let origin = pts.swap_remove(smallest_point(&pts));
  pts.sort_unstable_by(|a, b| cmp_around(&origin, a, b));
  if pts
    .iter()
    .all(|pt| origin.orientation(&pts[0], pt).is_colinear())
  {
    return Err(Error::DegenerateInput);
  }
  pts.insert(0, origin);

  let mut hull = vec![pts[0], pts[1]];
  let mut read_idx = 2;
  // Revisit the origin at the end so the closing edge is checked as well.
  while read_idx <= pts.len() {
    let candidate = &pts[read_idx % pts.len()];
    let p2 = &hull[hull.len() - 1];
    let p1 = &hull[hull.len() - 2];
    match p1.orientation(p2, candidate) {
      Orientation::ClockWise if hull.len() > 2 => {
        hull.pop();
      }
      Orientation::CounterClockWise => {
        hull.push(*candidate);
        read_idx += 1;
      }
      // Colinear candidates lie on the current edge and add nothing.
      Orientation::ClockWise | Orientation::CoLinear => {
        read_idx += 1;
      }
    }
  }
  if hull.len() > 3 && hull.last() == Some(&origin) {
    hull.pop();
  }
  tracing::trace!(points = pts.len(), vertices = hull.len(), "graham scan");
  Ok(ConvexHull::new_unchecked(hull))
}

// Counter-clockwise order around `origin`. Every point must lie above
// `origin` or to its right on the same horizontal line.
fn cmp_around<T>(origin: &Point<T>, a: &Point<T>, b: &Point<T>) -> Ordering
where
  T: AlphaScalar,
{
  match origin.orientation(a, b) {
    Orientation::CounterClockWise => Ordering::Less,
    Orientation::ClockWise => Ordering::Greater,
    Orientation::CoLinear => {
      let dist = |pt: &Point<T>| {
        (
          OrderedFloat((pt[0] - origin[0]).abs().to_f64_lossless()),
          OrderedFloat((pt[1] - origin[1]).abs().to_f64_lossless()),
        )
      };
      dist(b).cmp(&dist(a))
    }
  }
}

// Index of the point with the smallest y-coordinate, ties broken by the
// smallest x-coordinate.
// O(n)
fn smallest_point<T>(pts: &[Point<T>]) -> usize
where
  T: AlphaScalar,
{
  pts
    .iter()
    .enumerate()
    .min_by_key(|(_, pt)| {
      let [x, y] = pt.key();
      (y, x)
    })
    .map(|(idx, _)| idx)
    .unwrap_or(0)
}
