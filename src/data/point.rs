use array_init::array_init;
use num_traits::Float;
use ordered_float::OrderedFloat;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::ops::Deref;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Vector;
use crate::{AlphaScalar, Orientation};

#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Point<T, const N: usize = 2> {
  pub array: [T; N],
}

// Planar points serialize as `[x, y]`.
#[cfg(feature = "serde")]
impl<T: Serialize> Serialize for Point<T, 2> {
  fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    self.array.serialize(serializer)
  }
}

#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Point<T, 2> {
  fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    <[T; 2]>::deserialize(deserializer).map(Point::new)
  }
}

// Random sampling.
impl<T, const N: usize> Distribution<Point<T, N>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T, N> {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

// Methods on N-dimensional points.
impl<T, const N: usize> Point<T, N> {
  pub const fn new(array: [T; N]) -> Point<T, N> {
    Point { array }
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U, N>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: array_init(|i| f(self.array[i].clone())),
    }
  }
}

impl<T: Float, const N: usize> Point<T, N> {
  pub fn squared_euclidean_distance(&self, rhs: &Point<T, N>) -> T {
    self
      .array
      .iter()
      .zip(rhs.array.iter())
      .fold(T::zero(), |acc, (&a, &b)| {
        let diff = a - b;
        acc + diff * diff
      })
  }

  /// Euclidean distance. Never NaN for finite inputs, no matter how close the
  /// points are.
  pub fn distance(&self, rhs: &Point<T, N>) -> T {
    self.squared_euclidean_distance(rhs).max(T::zero()).sqrt()
  }

  pub fn is_finite(&self) -> bool {
    self.array.iter().all(|v| v.is_finite())
  }
}

impl<T: AlphaScalar, const N: usize> Point<T, N> {
  /// Total lexicographic order on the coordinates.
  pub fn total_cmp(&self, other: &Point<T, N>) -> Ordering {
    self.key().cmp(&other.key())
  }

  // Widening to f64 is exact, so the order is that of `T`.
  pub(crate) fn key(&self) -> [OrderedFloat<f64>; N] {
    array_init(|i| OrderedFloat(self.array[i].to_f64_lossless()))
  }
}

impl<T, const N: usize> Index<usize> for Point<T, N> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

// Methods on two-dimensional points.
impl<T: AlphaScalar> Point<T, 2> {
  pub fn orientation(&self, q: &Point<T, 2>, r: &Point<T, 2>) -> Orientation {
    Orientation::new(&self.array, &q.array, &r.array)
  }

  pub fn midpoint(&self, other: &Point<T, 2>) -> Point<T, 2> {
    self + &self.half_vector(other)
  }

  /// `(other - self) / 2`
  pub fn half_vector(&self, other: &Point<T, 2>) -> Vector<T, 2> {
    (other - self) / (T::one() + T::one())
  }
}

impl<T, const N: usize> Deref for Point<T, N> {
  type Target = [T; N];
  fn deref(&self) -> &[T; N] {
    &self.array
  }
}

mod add;
mod sub;
