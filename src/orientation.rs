use crate::data::Point;

/// Direction of the turn at `b` when walking `a -> b -> c`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
pub enum Orientation {
  /// Counter-clockwise turn.
  Left,
  /// Clockwise turn.
  Right,
  /// The three points are collinear (or coincide).
  Straight,
}
use Orientation::*;

/// Arithmetic used to evaluate an orientation.
///
/// [`Predicate::Exact`] uses Shewchuk's adaptive-precision `orient2d` and returns the
/// exact sign for every point that passes [`Point::validate`]. It costs little more
/// than plain arithmetic when the floating-point filter already decides the sign.
///
/// [`Predicate::Fast`] computes the cross product in plain `f64`. Its sign is reliable
/// for small integer coordinates and for well-separated points, but near-collinear
/// triples may come back as [`Orientation::Straight`] or with the wrong sign. Rounded
/// signs are not consistent under rotation of the triple either, so a hull built this
/// way can fail [`Polygon::validate`](crate::data::Polygon::validate) on such input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Predicate {
  Fast,
  #[default]
  Exact,
}

impl Predicate {
  pub fn orient(self, a: &Point, b: &Point, c: &Point) -> Orientation {
    match self {
      Predicate::Fast => Orientation::from_cross(cross(a, b, c)),
      Predicate::Exact => Orientation::from_cross(geometry_predicates::predicates::orient2d(
        [a.x_coord(), a.y_coord()],
        [b.x_coord(), b.y_coord()],
        [c.x_coord(), c.y_coord()],
      )),
    }
  }
}

// (b - a) x (c - b). Same sign as (b - a) x (c - a).
fn cross(a: &Point, b: &Point, c: &Point) -> f64 {
  (b.x_coord() - a.x_coord()) * (c.y_coord() - b.y_coord())
    - (b.y_coord() - a.y_coord()) * (c.x_coord() - b.x_coord())
}

/// Determine the direction you have to turn if you walk from `a` to `b` to `c`.
///
/// Evaluated with [`Predicate::Fast`]. Total: coincident points are
/// [`Orientation::Straight`]. Coordinates are expected to stay within
/// [`Point::MAX_COORD`]; beyond that the cross product can overflow and the result is
/// meaningless. Use [`Orientation::exact`] when the sign must be right.
///
/// # Examples
///
/// ```rust
/// # use rhull::data::Point;
/// # use rhull::{orientation, Orientation};
/// let a = Point::new(0., 0.);
/// let b = Point::new(0., 1.); // One unit above a.
/// assert_eq!(orientation(&a, &b, &Point::new(0., 2.)), Orientation::Straight);
/// assert_eq!(orientation(&a, &b, &Point::new(-1., 2.)), Orientation::Left);
/// assert_eq!(orientation(&a, &b, &Point::new(1., 2.)), Orientation::Right);
/// ```
pub fn orientation(a: &Point, b: &Point, c: &Point) -> Orientation {
  Orientation::new(a, b, c)
}

impl Orientation {
  pub fn new(a: &Point, b: &Point, c: &Point) -> Orientation {
    Predicate::Fast.orient(a, b, c)
  }

  /// Like [`Orientation::new`] but with exact arithmetic.
  pub fn exact(a: &Point, b: &Point, c: &Point) -> Orientation {
    Predicate::Exact.orient(a, b, c)
  }

  // NaN never compares, so it lands on Straight.
  fn from_cross(cross: f64) -> Orientation {
    if cross > 0.0 {
      Left
    } else if cross < 0.0 {
      Right
    } else {
      Straight
    }
  }

  pub fn is_left(self) -> bool {
    matches!(self, Left)
  }

  pub fn is_right(self) -> bool {
    matches!(self, Right)
  }

  pub fn is_straight(self) -> bool {
    matches!(self, Straight)
  }

  #[must_use]
  pub fn then(self, other: Orientation) -> Orientation {
    match self {
      Straight => other,
      _ => self,
    }
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Left => Right,
      Right => Left,
      Straight => Straight,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use crate::testing::*;
  use proptest::prelude::*;
  use test_strategy::proptest;

  fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
  }

  #[test]
  fn test_turns() {
    assert_eq!(orientation(&pt(0., 0.), &pt(1., 1.), &pt(2., 2.)), Straight);
    assert_eq!(orientation(&pt(0., 0.), &pt(0., 1.), &pt(2., 2.)), Right);
    assert_eq!(orientation(&pt(0., 0.), &pt(0., 1.), &pt(-2., 2.)), Left);
    assert_eq!(orientation(&pt(0., 0.), &pt(0., 0.), &pt(0., 0.)), Straight);
  }

  #[test]
  fn vertical_and_horizontal() {
    // Zero run on the first segment.
    assert_eq!(orientation(&pt(1., 0.), &pt(1., 5.), &pt(0., 6.)), Left);
    assert_eq!(orientation(&pt(1., 0.), &pt(1., 5.), &pt(2., 6.)), Right);
    // Zero run on the second segment.
    assert_eq!(orientation(&pt(0., 0.), &pt(3., 1.), &pt(3., 4.)), Left);
    assert_eq!(orientation(&pt(0., 0.), &pt(3., 1.), &pt(3., -4.)), Right);
    // Backtracking along a horizontal line.
    assert_eq!(orientation(&pt(0., 2.), &pt(5., 2.), &pt(1., 2.)), Straight);
  }

  #[test]
  fn coincident_points() {
    assert_eq!(orientation(&pt(1., 0.), &pt(1., 0.), &pt(3., 7.)), Straight);
    assert_eq!(orientation(&pt(1., 0.), &pt(3., 7.), &pt(3., 7.)), Straight);
    assert_eq!(orientation(&pt(3., 7.), &pt(1., 0.), &pt(3., 7.)), Straight);
  }

  #[test]
  fn exact_resolves_near_collinear() {
    // One ulp above the diagonal through (12,12) and (24,24).
    let a = pt(0.5, 0.5 + f64::EPSILON / 2.0);
    let b = pt(12., 12.);
    let c = pt(24., 24.);
    assert_eq!(Orientation::new(&a, &b, &c), Straight);
    assert_eq!(Orientation::exact(&a, &b, &c), Left);
    assert_eq!(Orientation::exact(&c, &b, &a), Right);
  }

  #[test]
  fn fast_sign_depends_on_rotation() {
    let a = pt(3.4932442390102665, 73.39421467714308);
    let b = pt(47.094482539872594, -6.014264143141752);
    let c = pt(62.21529423459236, -33.55294657505614);
    assert_eq!(Orientation::new(&a, &b, &c), Left);
    assert_eq!(Orientation::new(&b, &c, &a), Right);
    for (p, q, r) in [(&a, &b, &c), (&b, &c, &a), (&c, &a, &b)] {
      assert_eq!(Orientation::exact(p, q, r), Right);
    }
  }

  #[test]
  fn largest_coordinates_do_not_overflow() {
    let max = Point::MAX_COORD;
    let a = pt(-max, -max);
    let b = pt(max, max);
    let c = pt(0., -max / 2.);
    assert_eq!(Orientation::new(&a, &b, &c), Right);
    assert_eq!(Orientation::exact(&a, &b, &c), Right);
    assert_eq!(Orientation::exact(&a, &c, &b), Left);
  }

  #[test]
  fn nan_is_straight() {
    assert_eq!(orientation(&pt(f64::NAN, 0.), &pt(1., 0.), &pt(1., 1.)), Straight);
  }

  #[test]
  fn then_and_reverse() {
    assert_eq!(Straight.then(Left), Left);
    assert_eq!(Right.then(Left), Right);
    assert_eq!(Left.reverse(), Right);
    assert_eq!(Straight.reverse(), Straight);
    assert!(Left.is_left() && Right.is_right() && Straight.is_straight());
  }

  #[proptest]
  fn orientation_reverse(
    #[strategy(any_grid_point())] a: Point,
    #[strategy(any_grid_point())] b: Point,
    #[strategy(any_grid_point())] c: Point,
  ) {
    prop_assert_eq!(orientation(&a, &b, &c), orientation(&c, &b, &a).reverse());
  }

  #[proptest]
  fn orientation_rotate(
    #[strategy(any_grid_point())] a: Point,
    #[strategy(any_grid_point())] b: Point,
    #[strategy(any_grid_point())] c: Point,
  ) {
    let abc = orientation(&a, &b, &c);
    prop_assert_eq!(abc, orientation(&b, &c, &a));
    prop_assert_eq!(abc, orientation(&c, &a, &b));
  }

  // Small integers are exact in f64, so both predicates must agree.
  #[proptest]
  fn exact_matches_fast_on_grid(
    #[strategy(any_grid_point())] a: Point,
    #[strategy(any_grid_point())] b: Point,
    #[strategy(any_grid_point())] c: Point,
  ) {
    prop_assert_eq!(Orientation::new(&a, &b, &c), Orientation::exact(&a, &b, &c));
  }

  #[proptest]
  fn exact_reverse(
    #[strategy(any_point())] a: Point,
    #[strategy(any_point())] b: Point,
    #[strategy(any_point())] c: Point,
  ) {
    prop_assert_eq!(
      Orientation::exact(&a, &b, &c),
      Orientation::exact(&c, &b, &a).reverse()
    );
  }
}
