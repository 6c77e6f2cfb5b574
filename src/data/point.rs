use ordered_float::OrderedFloat;
use std::fmt;

use crate::{Axis, Error, Orientation};

/// A point in the plane.
///
/// Equality, hashing and ordering are by value. The order is lexicographic on
/// `(x, y)`, and `-0.0` equals `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
  array: [OrderedFloat<f64>; 2],
}

impl Point {
  /// Largest accepted coordinate magnitude. Differences and cross products of points
  /// within this range cannot overflow `f64`.
  pub const MAX_COORD: f64 = 1e150;

  pub const fn new(x: f64, y: f64) -> Point {
    Point {
      array: [OrderedFloat(x), OrderedFloat(y)],
    }
  }

  /// # Errors
  ///
  /// Fails with [`Error::InvalidInput`] if either coordinate is NaN or infinite, and
  /// with [`Error::OutOfRange`] if it exceeds [`Point::MAX_COORD`] in magnitude.
  pub fn try_new(x: f64, y: f64) -> Result<Point, Error> {
    let pt = Point::new(x, y);
    pt.validate()?;
    Ok(pt)
  }

  pub fn x_coord(&self) -> f64 {
    self.array[0].into_inner()
  }

  pub fn y_coord(&self) -> f64 {
    self.array[1].into_inner()
  }

  pub fn is_finite(&self) -> bool {
    self.x_coord().is_finite() && self.y_coord().is_finite()
  }

  /// Check that both coordinates are finite and within [`Point::MAX_COORD`]. The error
  /// names the first bad axis.
  pub fn validate(&self) -> Result<(), Error> {
    let (x, y) = (self.x_coord(), self.y_coord());
    if !x.is_finite() {
      return Err(Error::InvalidInput { x, y, axis: Axis::X });
    }
    if !y.is_finite() {
      return Err(Error::InvalidInput { x, y, axis: Axis::Y });
    }
    if x.abs() > Point::MAX_COORD {
      return Err(Error::OutOfRange { x, y, axis: Axis::X });
    }
    if y.abs() > Point::MAX_COORD {
      return Err(Error::OutOfRange { x, y, axis: Axis::Y });
    }
    Ok(())
  }

  pub fn orientation(&self, q: &Point, r: &Point) -> Orientation {
    Orientation::new(self, q, r)
  }

  pub fn distance(&self, rhs: &Point) -> f64 {
    (self.x_coord() - rhs.x_coord()).hypot(self.y_coord() - rhs.y_coord())
  }
}

impl From<(f64, f64)> for Point {
  fn from(point: (f64, f64)) -> Point {
    Point::new(point.0, point.1)
  }
}

impl From<[f64; 2]> for Point {
  fn from(array: [f64; 2]) -> Point {
    Point::new(array[0], array[1])
  }
}

impl From<Point> for (f64, f64) {
  fn from(point: Point) -> (f64, f64) {
    (point.x_coord(), point.y_coord())
  }
}

impl fmt::Display for Point {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.x_coord(), self.y_coord())
  }
}
