use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

use crate::data::{Point, PointSet};

/// Uniform random point sets inside a box.
///
/// Coordinates are whole numbers drawn from `[margin, width - margin)` and
/// `[margin, height - margin)`. Integer coordinates make collinear and duplicate
/// points common enough to matter, which is what the hull builder needs to be
/// exercised against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sampler {
  pub width: u32,
  pub height: u32,
  pub margin: u32,
}

impl Default for Sampler {
  fn default() -> Self {
    Sampler {
      width: 900,
      height: 500,
      margin: 10,
    }
  }
}

impl Sampler {
  /// Draw `n` points. Duplicates collapse, so the set may hold fewer than `n`.
  ///
  /// An empty box (`2 * margin >= width` or `2 * margin >= height`) yields an empty
  /// set.
  pub fn sample<R>(&self, n: usize, rng: &mut R) -> PointSet
  where
    R: Rng + ?Sized,
  {
    let xs = self.margin..self.width.saturating_sub(self.margin);
    let ys = self.margin..self.height.saturating_sub(self.margin);
    if xs.is_empty() || ys.is_empty() {
      tracing::warn!(sampler = ?self, "empty sampling box");
      return PointSet::new();
    }
    let points: PointSet = (0..n)
      .map(|_| {
        Point::new(
          f64::from(rng.gen_range(xs.clone())),
          f64::from(rng.gen_range(ys.clone())),
        )
      })
      .collect();
    tracing::trace!(requested = n, distinct = points.len(), "sampled points");
    points
  }

  /// Reproducible variant of [`Sampler::sample`]: the same `(n, seed)` always yields the
  /// same set.
  ///
  /// ```rust
  /// # use rhull::data::Sampler;
  /// let sampler = Sampler::default();
  /// assert_eq!(sampler.seeded(50, 42), sampler.seeded(50, 42));
  /// ```
  pub fn seeded(&self, n: usize, seed: u64) -> PointSet {
    let mut rng = SmallRng::seed_from_u64(seed);
    self.sample(n, &mut rng)
  }
}
