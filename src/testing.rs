// This module contains strategies for:
//  * points
//  * point sets
// A Strategy is a way to generate a shrinkable value.
use crate::data::{Point, PointSet};

use core::ops::Range;
use proptest::collection::*;
use proptest::prelude::*;

///////////////////////////////////////////////////////////////////////////////
// Points

// Large enough to spread out, small enough that cross products stay far from
// overflow and subnormals.
const SPAN: f64 = 1e6;

// Coordinates on a small integer grid. Products of differences are exact in f64, and
// the grid is dense enough to produce plenty of collinear triples and duplicates.
const GRID: i32 = 20;

pub fn any_point() -> impl Strategy<Value = Point> {
  (-SPAN..SPAN, -SPAN..SPAN).prop_map(|(x, y)| Point::new(x, y))
}

pub fn any_grid_point() -> impl Strategy<Value = Point> {
  (-GRID..=GRID, -GRID..=GRID).prop_map(|(x, y)| Point::new(f64::from(x), f64::from(y)))
}

///////////////////////////////////////////////////////////////////////////////
// Point sets

pub fn any_point_set(size: Range<usize>) -> impl Strategy<Value = PointSet> {
  vec(any_point(), size).prop_map(PointSet::from)
}

pub fn vec_of_grid_points(size: Range<usize>) -> impl Strategy<Value = Vec<Point>> {
  vec(any_grid_point(), size)
}

pub fn any_grid_set(size: Range<usize>) -> impl Strategy<Value = PointSet> {
  vec_of_grid_points(size).prop_map(PointSet::from)
}
