pub mod alpha_shape;
pub mod convex_hull;
pub mod triangulation;

#[doc(inline)]
pub use alpha_shape::{alpha_shape, AlphaShape, AlphaShapeBuilder, ShapeKind};

#[doc(inline)]
pub use convex_hull::graham_scan::convex_hull;
