use claims::debug_assert_ok;
use std::collections::HashSet;
use std::ops::Index;

use crate::data::Point;
use crate::data::PointLocation;
use crate::Error;
use crate::{Orientation, Predicate};

mod iter;
pub use iter::*;

/// Ordered vertices of a polygon, counter-clockwise by convention.
///
/// The closing edge from the last vertex back to the first is implied, not stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Polygon {
  vertices: Vec<Point>,
}

impl Polygon {
  /// $O(n)$ Assume the vertices form a convex, counter-clockwise polygon when its
  /// turns are decided by `predicate`.
  ///
  /// Degenerate polygons (fewer than three vertices, or a single straight run) are
  /// accepted. Checked in debug builds. Only [`Predicate::Exact`] turns are consistent
  /// enough to check convexity; [`Predicate::Fast`] polygons are checked for distinct
  /// vertices only.
  pub(crate) fn new_unchecked(vertices: Vec<Point>, predicate: Predicate) -> Polygon {
    let poly = Polygon { vertices };
    match predicate {
      Predicate::Exact => {
        debug_assert_ok!(poly.validate());
      }
      Predicate::Fast => {
        debug_assert_ok!(poly.validate_distinct());
      }
    }
    poly
  }

  /// $O(n)$ Validate that the polygon has no duplicate vertices and never turns right.
  ///
  /// Turns are evaluated with [`Orientation::exact`] and include the wrap-around at the
  /// closing edge.
  pub fn validate(&self) -> Result<(), Error> {
    self.validate_distinct()?;
    if self.vertices.len() >= 3 && self.iter_turns().any(Orientation::is_right) {
      return Err(Error::ConvexViolation);
    }
    Ok(())
  }

  fn validate_distinct(&self) -> Result<(), Error> {
    let mut seen = HashSet::with_capacity(self.vertices.len());
    for pt in self.iter() {
      if !seen.insert(pt) {
        return Err(Error::DuplicatePoints);
      }
    }
    Ok(())
  }

  pub fn points(&self) -> &[Point] {
    &self.vertices
  }

  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  pub fn first(&self) -> Option<&Point> {
    self.vertices.first()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point> {
    self.vertices.iter()
  }

  pub fn iter_edges(&self) -> EdgeIter<'_> {
    EdgeIter {
      vertices: &self.vertices,
      index: 0,
    }
  }

  /// Orientation at every vertex, walking cyclically. Vertex `i` is the middle point.
  pub fn iter_turns(&self) -> impl Iterator<Item = Orientation> + '_ {
    let n = self.vertices.len();
    (0..n).map(move |i| {
      let prev = &self.vertices[(i + n - 1) % n];
      let next = &self.vertices[(i + 1) % n];
      Orientation::exact(prev, &self.vertices[i], next)
    })
  }

  /// Twice the signed area. Positive for counter-clockwise polygons, zero for
  /// degenerate ones.
  pub fn signed_area_2x(&self) -> f64 {
    self
      .iter_edges()
      .map(|edge| {
        let p = edge.src;
        let q = edge.dst;
        p.x_coord() * q.y_coord() - q.x_coord() * p.y_coord()
      })
      .sum()
  }

  pub fn signed_area(&self) -> f64 {
    self.signed_area_2x() / 2.0
  }

  /// Length of the closed boundary walk. A two-vertex polygon counts its segment twice.
  pub fn perimeter(&self) -> f64 {
    self.iter_edges().map(|edge| edge.src.distance(edge.dst)).sum()
  }

  /// $O(n)$ Locate a point relative to a convex, counter-clockwise polygon.
  ///
  /// Works for degenerate polygons too: a single vertex or a segment has no inside.
  pub fn locate(&self, pt: &Point) -> PointLocation {
    match self.vertices.as_slice() {
      [] => return PointLocation::Outside,
      [single] if single == pt => return PointLocation::OnBoundary,
      [_] => return PointLocation::Outside,
      _ => {}
    }
    let mut all_left = true;
    for edge in self.iter_edges() {
      match Orientation::exact(edge.src, edge.dst, pt) {
        Orientation::Right => return PointLocation::Outside,
        Orientation::Straight if edge.contains(pt) => return PointLocation::OnBoundary,
        Orientation::Straight => all_left = false,
        Orientation::Left => {}
      }
    }
    if all_left {
      PointLocation::Inside
    } else {
      PointLocation::Outside
    }
  }
}

///////////////////////////////////////////////////////////////////////////////
// Trait Implementations

impl Index<usize> for Polygon {
  type Output = Point;
  fn index(&self, idx: usize) -> &Point {
    &self.vertices[idx]
  }
}

impl AsRef<[Point]> for Polygon {
  fn as_ref(&self) -> &[Point] {
    &self.vertices
  }
}

impl From<Polygon> for Vec<Point> {
  fn from(poly: Polygon) -> Vec<Point> {
    poly.vertices
  }
}

impl<'a> IntoIterator for &'a Polygon {
  type Item = &'a Point;
  type IntoIter = std::slice::Iter<'a, Point>;
  fn into_iter(self) -> Self::IntoIter {
    self.vertices.iter()
  }
}

impl IntoIterator for Polygon {
  type Item = Point;
  type IntoIter = std::vec::IntoIter<Point>;
  fn into_iter(self) -> Self::IntoIter {
    self.vertices.into_iter()
  }
}
