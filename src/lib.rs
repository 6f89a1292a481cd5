#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Polygons stored as circular vertex rings with a movable cursor, and a
//! single-pass scan that selects the extremal vertex under any total order.
//!
//! ```rust
//! # pub fn main() {
//! # use polyring::algorithms::{least_vertex, left_to_right};
//! # use polyring::data::{Point, Polygon};
//! let mut poly = Polygon::from_points(vec![
//!   Point::new([-1, 3]),
//!   Point::new([4, 3]),
//!   Point::new([4, -3]),
//!   Point::new([-1, -3]),
//! ])
//! .unwrap();
//! let best = least_vertex(&mut poly, left_to_right);
//! assert_eq!(poly.point(best), &Point::new([-1, -3]));
//! assert_eq!(poly.target(), best);
//! # }
//! ```
use std::cmp::Ordering;

pub mod algorithms;
pub mod data;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// A polygon needs at least one vertex for its cursor to point at.
  InsufficientVertices,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
    }
  }
}

impl std::error::Error for Error {}

/// Total order over scalars, including those (like floats) that only
/// implement `PartialOrd`.
pub trait TotalOrd {
  fn total_cmp(&self, other: &Self) -> Ordering;

  fn total_min(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::min_by(self, other, TotalOrd::total_cmp)
  }

  fn total_max(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::max_by(self, other, TotalOrd::total_cmp)
  }
}

impl<A: TotalOrd> TotalOrd for &A {
  fn total_cmp(&self, other: &Self) -> Ordering {
    (*self).total_cmp(*other)
  }
}

impl<A: TotalOrd, B: TotalOrd> TotalOrd for (A, B) {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self
      .0
      .total_cmp(&other.0)
      .then_with(|| self.1.total_cmp(&other.1))
  }
}

impl<A: TotalOrd, const N: usize> TotalOrd for [A; N] {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self
      .iter()
      .zip(other.iter())
      .map(|(a, b)| a.total_cmp(b))
      .find(|ord| *ord != Ordering::Equal)
      .unwrap_or(Ordering::Equal)
  }
}

macro_rules! ord_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }
    )*
  };
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          <$ty>::total_cmp(self, other)
        }
      }
    )*
  };
}

ord_precision!(i8, i16, i32, i64, i128, isize);
ord_precision!(u8, u16, u32, u64, u128, usize);
ord_precision!(num_bigint::BigInt, num_rational::BigRational);
ord_precision!(
  ordered_float::OrderedFloat<f32>,
  ordered_float::OrderedFloat<f64>,
  ordered_float::NotNan<f32>,
  ordered_float::NotNan<f64>
);
floating_precision!(f32, f64);

#[cfg(feature = "rug")]
impl TotalOrd for rug::Integer {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self.cmp(other)
  }
}

#[cfg(test)]
pub mod testing;
