#[cfg(feature = "serde")]
use serde::Serialize;

use super::{Edge, Point};
use crate::AlphaScalar;

/// Closed disk.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disk<T> {
  pub center: Point<T>,
  pub radius: T,
}

impl<T: AlphaScalar> Disk<T> {
  pub fn new(center: Point<T>, radius: T) -> Disk<T> {
    Disk { center, radius }
  }

  /// The two disks of the given radius whose boundaries pass through both
  /// endpoints of `edge`. Returns `None` if the endpoints are more than a
  /// diameter apart.
  ///
  /// The first disk has its center to the right of `edge.src() -> edge.dst()`.
  /// When the endpoints are exactly a diameter apart both disks coincide.
  pub fn through(edge: &Edge<T>, radius: T) -> Option<[Disk<T>; 2]> {
    ChordDisk::pair(edge, radius).map(|[right, left]| [right.disk(), left.disk()])
  }
}

/// Which side of `src -> dst` a disk center lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
  Right,
  Left,
}

/// A disk of given radius whose boundary passes through both endpoints of an
/// edge.
///
/// Membership is decided by the power of a point with respect to the disk,
/// divided by the diameter. That quantity is a length, is exactly zero at the
/// endpoints, and is computed without forming the center. As the radius grows
/// it tends to the signed distance from the line through the edge, so
/// arbitrarily large radii (including infinity) stay well conditioned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChordDisk<T> {
  pub edge: Edge<T>,
  pub radius: T,
  pub side: Side,
}

impl<T: AlphaScalar> ChordDisk<T> {
  /// Both disks through `edge`, right side first. `None` if the endpoints are
  /// more than a diameter apart.
  pub fn pair(edge: &Edge<T>, radius: T) -> Option<[ChordDisk<T>; 2]> {
    let half_dist = edge.src().half_vector(edge.dst()).norm();
    if !(half_dist <= radius) || half_dist == T::zero() {
      return None;
    }
    let disk = |side| ChordDisk {
      edge: *edge,
      radius,
      side,
    };
    Some([disk(Side::Right), disk(Side::Left)])
  }

  // sqrt(1 - (h/r)^2): distance from the chord to the center, over the radius.
  fn lift(&self) -> T {
    let half_dist = self.edge.src().half_vector(self.edge.dst()).norm();
    let ratio = half_dist / self.radius;
    (T::one() - ratio * ratio).max(T::zero()).sqrt()
  }

  /// The endpoints are a diameter apart, so both sides name the same disk.
  pub fn is_diametral(&self) -> bool {
    self.lift() == T::zero()
  }

  /// `(|pt - center|^2 - radius^2) / (2 * radius)`. Negative inside, zero on
  /// the boundary.
  pub fn scaled_power(&self, pt: &Point<T>) -> T {
    let (src, dst) = (self.edge.src(), self.edge.dst());
    let chord = dst - src;
    let to_src = pt - src;
    let to_dst = pt - dst;
    let two = T::one() + T::one();
    let bulge = self.radius.recip() / two * to_src.dot(&to_dst);
    let offset = self.lift() * chord.cross(&to_src) / chord.norm();
    match self.side {
      Side::Right => bulge + offset,
      Side::Left => bulge - offset,
    }
  }

  /// `pt` is inside the disk or within `tolerance` of its boundary.
  pub fn covers(&self, pt: &Point<T>, tolerance: T) -> bool {
    self.scaled_power(pt) <= tolerance
  }

  /// `pt` is inside the disk by more than `tolerance`.
  pub fn strictly_contains(&self, pt: &Point<T>, tolerance: T) -> bool {
    self.scaled_power(pt) < -tolerance
  }

  /// Every point is covered by the disk.
  pub fn is_full(&self, points: &[Point<T>], tolerance: T) -> bool {
    points.iter().all(|pt| self.covers(pt, tolerance))
  }

  /// No point lies strictly inside the disk.
  pub fn is_empty(&self, points: &[Point<T>], tolerance: T) -> bool {
    !points.iter().any(|pt| self.strictly_contains(pt, tolerance))
  }

  /// Center and radius. The center is infinitely far away for an infinite
  /// radius.
  pub fn disk(&self) -> Disk<T> {
    let (src, dst) = (self.edge.src(), self.edge.dst());
    let half = src.half_vector(dst);
    let half_dist = half.norm();
    let mid = src + &half;
    let radius = self.radius;
    let squared = radius * radius - half_dist * half_dist;
    let center_dist = if squared.is_finite() {
      squared.max(T::zero()).sqrt()
    } else {
      radius * self.lift()
    };
    let offset = (half.perp() / half_dist) * center_dist;
    let center = match self.side {
      Side::Right => &mid + &offset,
      Side::Left => &mid - &offset,
    };
    Disk::new(center, radius)
  }
}
