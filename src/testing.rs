// This module contains strategies for:
//  * points
//  * vertex rings
//  * polygons
// A Strategy is a way to generate a shrinkable value.
use crate::data::{Point, Polygon};

use core::ops::Range;
use num_bigint::BigInt;
use ordered_float::NotNan;
use proptest::arbitrary::*;
use proptest::collection::*;
use proptest::prelude::*;
use proptest::strategy::*;
use std::convert::TryInto;
use std::fmt::Debug;

type Mapped<I, O> = Map<StrategyFor<I>, fn(_: I) -> O>;

///////////////////////////////////////////////////////////////////////////////
// Arbitrary point

impl<T: Arbitrary, const N: usize> Arbitrary for Point<T, N>
where
  T::Strategy: Clone,
  T::Parameters: Clone,
  T: Clone + Debug,
{
  type Strategy = Mapped<Vec<T>, Point<T, N>>;
  type Parameters = T::Parameters;
  fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
    vec(any_with::<T>(params), N).prop_map(|vec: Vec<T>| Point {
      array: vec.try_into().unwrap(),
    })
  }
}

///////////////////////////////////////////////////////////////////////////////
// Arbitrary polygons

// Polygons never have fewer than one vertex, so the range start is clamped to 1.
// An empty size range means 1..50.
impl<T> Arbitrary for Polygon<T>
where
  T: Arbitrary + Clone + Debug,
  T::Strategy: Clone,
  T::Parameters: Clone,
{
  type Strategy = Map<VecStrategy<StrategyFor<Point<T, 2>>>, fn(Vec<Point<T, 2>>) -> Polygon<T>>;
  type Parameters = (Range<usize>, T::Parameters);
  fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
    let (size_range, t_params) = params;
    let size_range = if size_range.is_empty() {
      1..50
    } else {
      size_range.start.max(1)..size_range.end.max(2)
    };
    vec(any_with::<Point<T, 2>>(t_params), size_range)
      .prop_map(|pts| Polygon::from_points(pts).unwrap())
  }
}

///////////////////////////////////////////////////////////////////////////////
// Convenience functions

// Points in clockwise order, ready for `Polygon::from_points`.
pub fn any_ring(size: Range<usize>) -> impl Strategy<Value = Vec<Point<i8, 2>>> {
  vec(any::<Point<i8, 2>>(), size)
}

// Arbitrary isn't defined for NotNan.
pub fn any_nn<const N: usize>() -> impl Strategy<Value = Point<NotNan<f64>, N>> {
  any::<Point<f64, N>>().prop_filter_map("Check for NaN", |pt| pt.try_into().ok())
}

// Arbitrary isn't defined for BigInt.
pub fn any_r<const N: usize>() -> impl Strategy<Value = Point<BigInt, N>> {
  any::<Point<isize, N>>().prop_map(|pt| pt.cast(BigInt::from))
}
