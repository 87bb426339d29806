use ordered_float::OrderedFloat;
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::Serialize;

use super::Point;
use crate::{AlphaScalar, Error};

///////////////////////////////////////////////////////////////////////////////
// Edge

/// Undirected edge between two distinct points.
///
/// Stored with the lexicographically smaller endpoint first, so `(p, q)` and
/// `(q, p)` compare equal.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<T> {
  src: Point<T>,
  dst: Point<T>,
}

pub(crate) type EdgeKey = [OrderedFloat<f64>; 4];

impl<T: AlphaScalar> Edge<T> {
  pub fn new(p: Point<T>, q: Point<T>) -> Result<Edge<T>, Error> {
    match p.total_cmp(&q) {
      Ordering::Less => Ok(Edge { src: p, dst: q }),
      Ordering::Greater => Ok(Edge { src: q, dst: p }),
      Ordering::Equal => Err(Error::DegenerateEdge),
    }
  }

  pub fn src(&self) -> &Point<T> {
    &self.src
  }

  pub fn dst(&self) -> &Point<T> {
    &self.dst
  }

  pub fn has_endpoint(&self, pt: &Point<T>) -> bool {
    self.src.total_cmp(pt).is_eq() || self.dst.total_cmp(pt).is_eq()
  }

  pub(crate) fn key(&self) -> EdgeKey {
    let [a, b] = self.src.key();
    let [c, d] = self.dst.key();
    [a, b, c, d]
  }
}
