use array_init::array_init;
use std::ops::Sub;

use super::Point;
use super::Vector;

// &point - &point = vector
impl<'a, 'b, T, const N: usize> Sub<&'a Point<T, N>> for &'b Point<T, N>
where
  T: Sub<T, Output = T> + Copy,
{
  type Output = Vector<T, N>;

  fn sub(self: &'b Point<T, N>, other: &'a Point<T, N>) -> Self::Output {
    Vector(array_init(|i| self.array[i] - other.array[i]))
  }
}

// point - point = vector
impl<T, const N: usize> Sub<Point<T, N>> for Point<T, N>
where
  T: Sub<T, Output = T> + Copy,
{
  type Output = Vector<T, N>;

  fn sub(self: Point<T, N>, other: Point<T, N>) -> Self::Output {
    Sub::sub(&self, &other)
  }
}

// &point - &vector = point
impl<'a, 'b, T, const N: usize> Sub<&'a Vector<T, N>> for &'b Point<T, N>
where
  T: Sub<T, Output = T> + Copy,
{
  type Output = Point<T, N>;

  fn sub(self: &'b Point<T, N>, other: &'a Vector<T, N>) -> Self::Output {
    Point {
      array: array_init(|i| self.array[i] - other.0[i]),
    }
  }
}
