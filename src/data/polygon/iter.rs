use crate::data::Point;

/// Directed edge between two consecutive vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<'a> {
  pub src: &'a Point,
  pub dst: &'a Point,
}

impl Edge<'_> {
  /// Does `pt` lie on the closed segment from `src` to `dst`?
  ///
  /// Exact, see [`Orientation::exact`](crate::Orientation::exact).
  pub fn contains(&self, pt: &Point) -> bool {
    crate::Orientation::exact(self.src, self.dst, pt).is_straight()
      && within(self.src.x_coord(), self.dst.x_coord(), pt.x_coord())
      && within(self.src.y_coord(), self.dst.y_coord(), pt.y_coord())
  }
}

fn within(a: f64, b: f64, v: f64) -> bool {
  a.min(b) <= v && v <= a.max(b)
}

/// Edges of a polygon, including the closing edge from the last vertex to the first.
pub struct EdgeIter<'a> {
  pub(crate) vertices: &'a [Point],
  pub(crate) index: usize,
}

impl<'a> Iterator for EdgeIter<'a> {
  type Item = Edge<'a>;
  fn next(&mut self) -> Option<Self::Item> {
    let n = self.vertices.len();
    if n < 2 || self.index >= n {
      return None;
    }
    let edge = Edge {
      src: &self.vertices[self.index],
      dst: &self.vertices[(self.index + 1) % n],
    };
    self.index += 1;
    Some(edge)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.len(), Some(self.len()))
  }
}

impl ExactSizeIterator for EdgeIter<'_> {
  fn len(&self) -> usize {
    let n = self.vertices.len();
    if n < 2 {
      0
    } else {
      n.saturating_sub(self.index)
    }
  }
}
