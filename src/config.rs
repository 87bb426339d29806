//! Per-request configuration.
//!
//! The core keeps no state between calls; everything a computation depends on
//! besides the point set travels in an [`AlphaConfig`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::algorithms::triangulation::Site;
use crate::data::Point;
use crate::{AlphaScalar, Error};

/// Preset negative alpha (nearest-site regime), in pixel-scale coordinates.
pub const NEGATIVE_ALPHA: f64 = -0.02;
/// Preset positive alpha (furthest-site regime), in pixel-scale coordinates.
pub const POSITIVE_ALPHA: f64 = 0.005;
/// Increment used by [`AlphaConfig::step_up`] and [`AlphaConfig::step_down`].
pub const ALPHA_STEP: f64 = 0.001;

/// Parameters of one alpha shape computation.
///
/// # Example
///
/// ```rust
/// use alpha_shapes::config::AlphaConfig;
///
/// let config = AlphaConfig::new(-0.5)
///   .with_tolerance(1e-6)
///   .with_triangulation(true);
/// assert_eq!(config.radius(), Some(2.0));
/// assert!(config.validate().is_ok());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
  feature = "serde",
  serde(default, bound(deserialize = "T: AlphaScalar + Deserialize<'de>"))
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaConfig<T> {
  /// Zero selects the convex hull. Otherwise the generalized disks have
  /// radius `1/|alpha|`, and the sign selects the triangulation.
  pub alpha: T,

  /// Slack for disk membership, relative to the extent of the point set. A
  /// point within `tolerance * extent` of a disk boundary counts as lying on
  /// it, where the extent is the larger side of the bounding box.
  ///
  /// Defaults to `sqrt(T::epsilon())`, about `1.5e-8` for `f64`.
  pub tolerance: T,

  /// Return the triangulation the shape was extracted from.
  pub include_triangulation: bool,

  /// Return every candidate disk along with its verdict.
  pub include_disks: bool,
}

impl<T: AlphaScalar> AlphaConfig<T> {
  pub fn new(alpha: T) -> AlphaConfig<T> {
    AlphaConfig {
      alpha,
      tolerance: Self::default_tolerance(),
      include_triangulation: false,
      include_disks: false,
    }
  }

  /// Convex hull mode (`alpha == 0`).
  pub fn hull() -> AlphaConfig<T> {
    Self::new(T::zero())
  }

  pub fn negative_preset() -> AlphaConfig<T> {
    Self::new(T::from_f64_lossy(NEGATIVE_ALPHA))
  }

  pub fn positive_preset() -> AlphaConfig<T> {
    Self::new(T::from_f64_lossy(POSITIVE_ALPHA))
  }

  pub fn default_tolerance() -> T {
    T::epsilon().sqrt()
  }

  #[must_use]
  pub fn with_tolerance(mut self, tolerance: T) -> Self {
    self.tolerance = tolerance;
    self
  }

  #[must_use]
  pub fn with_triangulation(mut self, include: bool) -> Self {
    self.include_triangulation = include;
    self
  }

  #[must_use]
  pub fn with_disks(mut self, include: bool) -> Self {
    self.include_disks = include;
    self
  }

  /// Increase alpha by [`ALPHA_STEP`].
  pub fn step_up(&mut self) {
    self.step(T::from_f64_lossy(ALPHA_STEP));
  }

  /// Decrease alpha by [`ALPHA_STEP`].
  pub fn step_down(&mut self) {
    self.step(-T::from_f64_lossy(ALPHA_STEP));
  }

  // Accumulated rounding must not leave alpha a hair away from zero, which
  // would select a triangulation with an astronomically large radius.
  fn step(&mut self, delta: T) {
    let alpha = self.alpha + delta;
    let half_step = T::from_f64_lossy(ALPHA_STEP / 2.0);
    self.alpha = if alpha.abs() < half_step { T::zero() } else { alpha };
  }

  /// `1/|alpha|`, or `None` in convex hull mode.
  pub fn radius(&self) -> Option<T> {
    if self.alpha == T::zero() {
      None
    } else {
      Some(self.alpha.abs().recip())
    }
  }

  /// [`tolerance`](Self::tolerance) in the units of `points`.
  pub fn absolute_tolerance(&self, points: &[Point<T>]) -> T {
    let mut iter = points.iter();
    let first = match iter.next() {
      Some(pt) => pt,
      None => return self.tolerance,
    };
    let (min, max) = iter.fold((**first, **first), |(min, max), pt| {
      (
        [min[0].min(pt[0]), min[1].min(pt[1])],
        [max[0].max(pt[0]), max[1].max(pt[1])],
      )
    });
    let extent = (max[0] - min[0]).max(max[1] - min[1]);
    if extent > T::zero() {
      self.tolerance * extent
    } else {
      self.tolerance
    }
  }

  pub fn site(&self) -> Option<Site> {
    Site::for_alpha(self.alpha)
  }

  pub fn validate(&self) -> Result<(), Error> {
    if !self.alpha.is_finite() {
      return Err(Error::InvalidConfig("alpha must be finite"));
    }
    if !self.tolerance.is_finite() || self.tolerance < T::zero() {
      return Err(Error::InvalidConfig(
        "tolerance must be finite and non-negative",
      ));
    }
    Ok(())
  }
}

impl<T: AlphaScalar> Default for AlphaConfig<T> {
  fn default() -> Self {
    AlphaConfig::hull()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use claims::{assert_err, assert_ok};

  #[test]
  fn defaults() {
    let config: AlphaConfig<f64> = AlphaConfig::default();
    assert_eq!(config.alpha, 0.0);
    assert_eq!(config.radius(), None);
    assert_eq!(config.site(), None);
    assert!(config.tolerance > 0.0 && config.tolerance < 1e-7);
    assert!(!config.include_triangulation);
    assert!(!config.include_disks);
    assert_ok!(config.validate());
  }

  #[test]
  fn presets() {
    let neg: AlphaConfig<f64> = AlphaConfig::negative_preset();
    assert_eq!(neg.site(), Some(Site::Nearest));
    assert_eq!(neg.radius(), Some(50.0));
    let pos: AlphaConfig<f32> = AlphaConfig::positive_preset();
    assert_eq!(pos.site(), Some(Site::Furthest));
    assert!((pos.radius().unwrap() - 200.0).abs() < 1e-3);
  }

  #[test]
  fn stepping_returns_to_zero() {
    let mut config: AlphaConfig<f64> = AlphaConfig::positive_preset();
    for _ in 0..5 {
      config.step_down();
    }
    assert_eq!(config.alpha, 0.0);
    config.step_down();
    assert!((config.alpha + ALPHA_STEP).abs() < 1e-12);
    config.step_up();
    config.step_up();
    assert!((config.alpha - ALPHA_STEP).abs() < 1e-12);
  }

  #[test]
  fn tolerance_follows_extent() {
    let config: AlphaConfig<f64> = AlphaConfig::new(-0.5).with_tolerance(1e-6);
    let pts = [
      Point::new([100.0, 5.0]),
      Point::new([900.0, 405.0]),
      Point::new([300.0, 205.0]),
    ];
    assert!((config.absolute_tolerance(&pts) - 8e-4).abs() < 1e-12);
    assert_eq!(config.absolute_tolerance(&pts[..1]), 1e-6);
    assert_eq!(config.absolute_tolerance(&[]), 1e-6);
  }

  #[test]
  fn invalid() {
    assert_err!(AlphaConfig::new(f64::NAN).validate());
    assert_err!(AlphaConfig::new(f64::INFINITY).validate());
    assert_err!(AlphaConfig::new(1.0).with_tolerance(-1.0).validate());
    assert_ok!(AlphaConfig::new(1.0).with_tolerance(0.0).validate());
  }
}
