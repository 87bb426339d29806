use array_init::array_init;
use std::ops::Div;

use super::Vector;

impl<T, const N: usize> Div<T> for Vector<T, N>
where
  T: Div<T, Output = T> + Copy,
{
  type Output = Vector<T, N>;

  fn div(self: Vector<T, N>, other: T) -> Self::Output {
    Vector(array_init(|i| self.0[i] / other))
  }
}
