use crate::data::{Point, PointSet, Polygon};
use crate::{Error, Orientation, Predicate};

// https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain

#[cfg(feature = "parallel")]
const PARALLEL_SORT_THRESHOLD: usize = 1 << 14;

/// What to do with points that lie on a hull edge without being a corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Collinear {
  /// Drop them. Every hull vertex is a strict left turn.
  #[default]
  Exclude,
  /// Keep them. Hull vertices may be straight turns, never right turns.
  Include,
}

/// Configurable monotone chain hull builder.
///
/// ```rust
/// # use rhull::algorithms::convex_hull::{Collinear, MonotoneChain};
/// # use rhull::data::{Point, PointSet};
/// # use rhull::Predicate;
/// let pts: PointSet = vec![
///   Point::new(0., 0.),
///   Point::new(1., 0.),
///   Point::new(2., 0.),
///   Point::new(1., 1.),
/// ]
/// .into();
/// let strict = MonotoneChain::new().hull(&pts).unwrap();
/// assert_eq!(strict.len(), 3);
///
/// // Small integers are exact in f64, so plain arithmetic is safe here.
/// let keep = MonotoneChain::new()
///   .with_collinear(Collinear::Include)
///   .with_predicate(Predicate::Fast)
///   .hull(&pts)
///   .unwrap();
/// assert_eq!(keep.points()[1], Point::new(1., 0.));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MonotoneChain {
  predicate: Predicate,
  collinear: Collinear,
}

impl MonotoneChain {
  pub fn new() -> MonotoneChain {
    MonotoneChain::default()
  }

  #[must_use]
  pub fn with_predicate(mut self, predicate: Predicate) -> MonotoneChain {
    self.predicate = predicate;
    self
  }

  #[must_use]
  pub fn with_collinear(mut self, collinear: Collinear) -> MonotoneChain {
    self.collinear = collinear;
    self
  }

  pub fn predicate(&self) -> Predicate {
    self.predicate
  }

  pub fn collinear(&self) -> Collinear {
    self.collinear
  }

  /// $O(n \log n)$ Convex hull of a point set.
  ///
  /// Vertices are counter-clockwise, starting from the lexicographically smallest
  /// `(x, y)`. Fewer than three points, or all points on one line, give a degenerate
  /// polygon: empty, a single point, or the segment endpoints (all points along the
  /// segment with [`Collinear::Include`]).
  ///
  /// # Errors
  /// Will return [`Error::InvalidInput`] if a coordinate is NaN or infinite, and
  /// [`Error::OutOfRange`] if it exceeds [`Point::MAX_COORD`] in magnitude. Nothing is
  /// sorted or built in either case.
  pub fn hull(&self, pts: &PointSet) -> Result<Polygon, Error> {
    pts.validate()?;
    let mut sorted: Vec<Point> = pts.iter().copied().collect();
    sort_points(&mut sorted);
    let vertices = self.hull_sorted(&sorted);
    tracing::debug!(
      points = sorted.len(),
      vertices = vertices.len(),
      predicate = ?self.predicate,
      collinear = ?self.collinear,
      "convex hull"
    );
    Ok(Polygon::new_unchecked(vertices, self.predicate))
  }

  // Input must be sorted and free of duplicates.
  fn hull_sorted(&self, pts: &[Point]) -> Vec<Point> {
    if pts.len() < 3 {
      return pts.to_vec();
    }
    let mut lower = self.chain(pts.iter());
    let mut upper = self.chain(pts.iter().rev());
    tracing::trace!(lower = lower.len(), upper = upper.len(), "chains");
    // Every point sits on both chains only if they are all on one line. Walk the
    // segment once instead of there and back.
    if lower.len() == pts.len() && upper.len() == pts.len() {
      return lower;
    }
    // The last point of each chain is the first point of the other.
    lower.pop();
    upper.pop();
    lower.append(&mut upper);
    lower
  }

  // Each point is pushed once and popped at most once.
  fn chain<'a, I>(&self, pts: I) -> Vec<Point>
  where
    I: Iterator<Item = &'a Point>,
  {
    let mut chain: Vec<Point> = Vec::new();
    for pt in pts {
      while chain.len() >= 2 {
        let n = chain.len();
        if self.keeps(self.predicate.orient(&chain[n - 2], &chain[n - 1], pt)) {
          break;
        }
        chain.pop();
      }
      chain.push(*pt);
    }
    chain
  }

  fn keeps(&self, turn: Orientation) -> bool {
    match turn {
      Orientation::Left => true,
      Orientation::Straight => self.collinear == Collinear::Include,
      Orientation::Right => false,
    }
  }
}

fn sort_points(pts: &mut [Point]) {
  #[cfg(feature = "parallel")]
  {
    if pts.len() >= PARALLEL_SORT_THRESHOLD {
      use rayon::slice::ParallelSliceMut;
      pts.par_sort_unstable();
      return;
    }
  }
  pts.sort_unstable();
}

// Properties:
//    No panics.
//    No points are outside the resulting polygon.
//    Vertices are a subset of the input.
/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Monotone chain][wiki] algorithm for finding the smallest convex polygon which
/// contains all the given points. Uses [`Predicate::Exact`] and drops collinear
/// boundary points; see [`MonotoneChain`] to change either.
///
/// # Errors
/// Will return [`Error::InvalidInput`] if a coordinate is NaN or infinite, and
/// [`Error::OutOfRange`] if one exceeds [`Point::MAX_COORD`] in magnitude.
///
/// # Properties
/// * No points from the input set will be outside the returned polygon.
/// * All vertices in the polygon are from the input set.
/// * Vertices are counter-clockwise and start at the smallest `(x, y)`.
///
/// # Examples
///
/// ```rust
/// # use rhull::algorithms::convex_hull;
/// # use rhull::data::{Point, PointSet};
/// let empty_set = PointSet::new();
/// assert!(convex_hull(&empty_set).unwrap().is_empty());
///
/// let line: PointSet = vec![Point::new(0., 0.), Point::new(1., 0.), Point::new(2., 0.)].into();
/// assert_eq!(
///   convex_hull(&line).unwrap().points(),
///   &[Point::new(0., 0.), Point::new(2., 0.)]
/// );
/// ```
///
/// [wiki]: https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain
pub fn convex_hull(pts: &PointSet) -> Result<Polygon, Error> {
  MonotoneChain::new().hull(pts)
}
