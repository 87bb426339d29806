mod convex_hull;
mod disk;
mod edge;
pub(crate) mod point;
mod triangle;
mod vector;

pub use convex_hull::ConvexHull;
pub use disk::{ChordDisk, Disk, Side};
pub use edge::Edge;
pub(crate) use edge::EdgeKey;
pub use point::Point;
pub use triangle::Triangle;
pub use vector::Vector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
