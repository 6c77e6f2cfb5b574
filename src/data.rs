pub(crate) mod point;
mod point_set;
pub mod polygon;
mod sampler;

#[doc(inline)]
pub use crate::data::polygon::{Edge, EdgeIter, Polygon};
pub use point::Point;
pub use point_set::PointSet;
pub use sampler::Sampler;

/// Where a point lies relative to a [`Polygon`], see [`Polygon::locate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
