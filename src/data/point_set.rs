use std::collections::hash_set;
use std::collections::HashSet;
use std::str::FromStr;

use crate::data::Point;
use crate::Error;

/// An unordered set of points. Duplicates collapse to a single entry.
///
/// Iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointSet {
  points: HashSet<Point>,
}

impl PointSet {
  pub fn new() -> PointSet {
    PointSet::default()
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn contains(&self, pt: &Point) -> bool {
    self.points.contains(pt)
  }

  pub fn iter(&self) -> hash_set::Iter<'_, Point> {
    self.points.iter()
  }

  /// $O(n)$ Check every point with [`Point::validate`].
  ///
  /// When several points are bad, the smallest one is reported so that the error does
  /// not depend on hashing order.
  pub fn validate(&self) -> Result<(), Error> {
    match self.points.iter().filter(|pt| pt.validate().is_err()).min() {
      Some(pt) => pt.validate(),
      None => Ok(()),
    }
  }
}

impl From<Vec<Point>> for PointSet {
  fn from(points: Vec<Point>) -> PointSet {
    points.into_iter().collect()
  }
}

impl From<&[Point]> for PointSet {
  fn from(points: &[Point]) -> PointSet {
    points.iter().copied().collect()
  }
}

impl FromIterator<Point> for PointSet {
  fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> PointSet {
    PointSet {
      points: iter.into_iter().collect(),
    }
  }
}

impl<'a> IntoIterator for &'a PointSet {
  type Item = &'a Point;
  type IntoIter = hash_set::Iter<'a, Point>;
  fn into_iter(self) -> Self::IntoIter {
    self.points.iter()
  }
}

impl IntoIterator for PointSet {
  type Item = Point;
  type IntoIter = hash_set::IntoIter<Point>;
  fn into_iter(self) -> Self::IntoIter {
    self.points.into_iter()
  }
}

/// One point per line, `x y` or `x,y`. Blank lines and lines starting with `#` are
/// skipped.
///
/// Non-finite values such as `nan` parse fine here and are rejected later by the hull
/// builder, which can then name the offending coordinate.
///
/// ```rust
/// # use rhull::data::{Point, PointSet};
/// let pts: PointSet = "# corners\n0 0\n1, 0\n0,1\n".parse().unwrap();
/// assert_eq!(pts.len(), 3);
/// assert!(pts.contains(&Point::new(1., 0.)));
/// ```
impl FromStr for PointSet {
  type Err = Error;

  fn from_str(s: &str) -> Result<PointSet, Error> {
    let mut points = HashSet::new();
    for (idx, raw) in s.lines().enumerate() {
      let line = raw.trim();
      if line.is_empty() || line.starts_with('#') {
        continue;
      }
      points.insert(parse_point(line).ok_or(Error::Parse { line: idx + 1 })?);
    }
    Ok(PointSet { points })
  }
}

fn parse_point(line: &str) -> Option<Point> {
  let mut fields = line
    .split(|c: char| c == ',' || c.is_whitespace())
    .filter(|field| !field.is_empty());
  let x = fields.next()?.parse::<f64>().ok()?;
  let y = fields.next()?.parse::<f64>().ok()?;
  if fields.next().is_some() {
    return None;
  }
  Some(Point::new(x, y))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Axis;

  use claims::{assert_matches, assert_ok};

  #[test]
  fn duplicates_collapse() {
    let pts = PointSet::from(vec![
      Point::new(1., 2.),
      Point::new(1., 2.),
      Point::new(2., 1.),
    ]);
    assert_eq!(pts.len(), 2);
  }

  #[test]
  fn insertion_order_is_irrelevant() {
    let a: PointSet = vec![Point::new(0., 0.), Point::new(1., 1.)].into();
    let b: PointSet = vec![Point::new(1., 1.), Point::new(0., 0.)].into();
    assert_eq!(a, b);
  }

  #[test]
  fn parse_separators_and_comments() {
    let pts: PointSet = "\n# header\n  1 2\n3,4\n5 ,\t6\n-7.5e1 8\n".parse().unwrap();
    assert_eq!(pts.len(), 4);
    for pt in [(1., 2.), (3., 4.), (5., 6.), (-75., 8.)] {
      assert!(pts.contains(&Point::from(pt)), "missing {:?}", pt);
    }
  }

  #[test]
  fn parse_reports_line() {
    assert_eq!("0 0\n1\n".parse::<PointSet>(), Err(Error::Parse { line: 2 }));
    assert_eq!("0 0 0".parse::<PointSet>(), Err(Error::Parse { line: 1 }));
    assert_eq!(
      "# x y\n\n0 zero".parse::<PointSet>(),
      Err(Error::Parse { line: 3 })
    );
  }

  #[test]
  fn parse_empty() {
    let pts: PointSet = assert_ok!("".parse());
    assert!(pts.is_empty());
  }

  #[test]
  fn validate_reports_smallest_bad_point() {
    let pts = PointSet::from(vec![
      Point::new(0., 0.),
      Point::new(5., f64::INFINITY),
      Point::new(2., f64::NAN),
    ]);
    assert_matches!(
      pts.validate(),
      Err(Error::InvalidInput {
        x,
        axis: Axis::Y,
        ..
      }) if x == 2.
    );
  }

  #[test]
  fn validate_accepts_finite() {
    let max = Point::MAX_COORD;
    let pts = PointSet::from(vec![Point::new(0., 0.), Point::new(-max, max)]);
    assert_ok!(pts.validate());
  }

  #[test]
  fn validate_rejects_huge() {
    let pts = PointSet::from(vec![Point::new(0., 0.), Point::new(-1e300, 1e300)]);
    assert_eq!(
      pts.validate(),
      Err(Error::OutOfRange {
        x: -1e300,
        y: 1e300,
        axis: Axis::X
      })
    );
  }
}
