use array_init::array_init;
use num_traits::Float;
use std::ops::Index;
use std::ops::Neg;

#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub [T; N]);

impl<T: Float, const N: usize> Vector<T, N> {
  pub fn squared_magnitude(&self) -> T {
    self.0.iter().fold(T::zero(), |acc, &elt| acc + elt * elt)
  }

  pub fn norm(&self) -> T {
    self.squared_magnitude().max(T::zero()).sqrt()
  }

  pub fn dot(&self, other: &Vector<T, N>) -> T {
    (0..N).fold(T::zero(), |acc, i| acc + self.0[i] * other.0[i])
  }
}

impl<T: Float> Vector<T, 2> {
  /// Rotate 90 degrees clockwise: `(x, y)` becomes `(y, -x)`.
  pub fn perp(&self) -> Vector<T, 2> {
    let [x, y] = self.0;
    Vector([y, -x])
  }

  /// 2D cross product `self x other`.
  pub fn cross(&self, other: &Vector<T, 2>) -> T {
    self.0[0] * other.0[1] - self.0[1] * other.0[0]
  }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
  type Output = T;
  fn index(&self, index: usize) -> &T {
    self.0.index(index)
  }
}

impl<T, const N: usize> Neg for Vector<T, N>
where
  T: Neg<Output = T> + Copy,
{
  type Output = Self;
  fn neg(self) -> Self {
    Vector(array_init(|i| -self.0[i]))
  }
}

mod add;
mod div;
mod mul;
