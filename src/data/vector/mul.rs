use array_init::array_init;
use std::ops::Mul;

use super::Vector;

impl<T, const N: usize> Mul<T> for Vector<T, N>
where
  T: Mul<T, Output = T> + Copy,
{
  type Output = Vector<T, N>;

  fn mul(self: Vector<T, N>, other: T) -> Self::Output {
    Vector(array_init(|i| self.0[i] * other))
  }
}

impl<T, const N: usize> Mul<T> for &Vector<T, N>
where
  T: Mul<T, Output = T> + Copy,
{
  type Output = Vector<T, N>;

  fn mul(self, other: T) -> Vector<T, N> {
    Vector(array_init(|i| self.0[i] * other))
  }
}
