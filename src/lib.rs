// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Planar convex hulls.
//!
//! The crate is built around two operations:
//!
//! * [`orientation`]: classify the turn `a -> b -> c` as left, right or straight.
//! * [`algorithms::convex_hull`]: the counter-clockwise hull of a [`PointSet`](data::PointSet).
//!
//! ```rust
//! # use rhull::algorithms::convex_hull;
//! # use rhull::data::{Point, PointSet};
//! let pts: PointSet = vec![
//!   Point::new(0., 0.),
//!   Point::new(1., 0.),
//!   Point::new(1., 1.),
//!   Point::new(0., 1.),
//!   Point::new(0.5, 0.5),
//! ]
//! .into();
//! let hull = convex_hull(&pts).unwrap();
//! assert_eq!(hull.len(), 4);
//! assert_eq!(hull[0], Point::new(0., 0.));
//! ```

pub mod algorithms;
pub mod data;
mod orientation;

pub use orientation::{orientation, Orientation, Predicate};

/// Coordinate axis, used to point at the offending half of a bad point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis {
  X,
  Y,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
  /// A coordinate is NaN or infinite.
  InvalidInput { x: f64, y: f64, axis: Axis },
  /// A coordinate is finite but larger in magnitude than [`Point::MAX_COORD`](data::Point::MAX_COORD).
  OutOfRange { x: f64, y: f64, axis: Axis },
  /// Line `line` (1-based) of a point listing could not be read.
  Parse { line: usize },
  /// The same vertex appears twice.
  DuplicatePoints,
  /// Three consecutive vertices make a clockwise turn.
  ConvexViolation,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InvalidInput { x, y, axis } => {
        let value = match axis {
          Axis::X => x,
          Axis::Y => y,
        };
        write!(
          f,
          "Invalid input: point ({}, {}) has a non-finite {} coordinate ({})",
          x,
          y,
          match axis {
            Axis::X => "x",
            Axis::Y => "y",
          },
          value
        )
      }
      Error::OutOfRange { x, y, axis } => {
        let (name, value) = match axis {
          Axis::X => ("x", x),
          Axis::Y => ("y", y),
        };
        write!(
          f,
          "Out of range: point ({}, {}) has {} coordinate {} beyond +/-{:e}",
          x,
          y,
          name,
          value,
          data::Point::MAX_COORD
        )
      }
      Error::Parse { line } => write!(f, "Cannot parse point on line {}", line),
      Error::DuplicatePoints => write!(f, "Duplicate points"),
      Error::ConvexViolation => write!(f, "Convex violation"),
    }
  }
}

impl std::error::Error for Error {}

#[cfg(test)]
pub mod testing;
