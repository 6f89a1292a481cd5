use std::cmp::Ordering;

use crate::data::{Point, Polygon, Rotation, VertexId};
use crate::TotalOrd;

// Properties:
//    Exactly size()-1 comparator calls.
//    No vertex in the polygon is strictly less than the result.
//    The cursor is left on the result.
/// Select the least vertex of a polygon under `cmp`.
///
/// Scans the ring once, clockwise, starting at the polygon's cursor. A vertex
/// replaces the current best only when `cmp(vertex, best)` is
/// [`Ordering::Less`], so among equal candidates the first one met in scan
/// order wins. The cursor is moved to the winner before it is returned.
///
/// Passing the comparator with its arguments swapped (see [`right_to_left`])
/// turns the minimum search into a maximum search.
///
/// # Time complexity
/// $O(n)$
///
/// # Examples
///
/// ```rust
/// # pub fn main() {
/// # use polyring::algorithms::{least_vertex, left_to_right, right_to_left};
/// # use polyring::data::{Point, Polygon};
/// let mut poly = Polygon::from_points(vec![
///   Point::new([0, 0]),
///   Point::new([2, 1]),
///   Point::new([1, 2]),
/// ])
/// .unwrap();
/// let min = least_vertex(&mut poly, left_to_right);
/// assert_eq!(poly.point(min), &Point::new([0, 0]));
/// let max = least_vertex(&mut poly, right_to_left);
/// assert_eq!(poly.point(max), &Point::new([2, 1]));
/// # }
/// ```
pub fn least_vertex<T, F>(polygon: &mut Polygon<T>, cmp: F) -> VertexId
where
  F: Fn(&Point<T, 2>, &Point<T, 2>) -> Ordering,
{
  let mut best = polygon.target();
  polygon.advance(Rotation::ClockWise);

  for _ in 1..polygon.size() {
    let candidate = polygon.target();
    if cmp(polygon.point(candidate), polygon.point(best)) == Ordering::Less {
      tracing::trace!(?candidate, replaced = ?best, "new best vertex");
      best = candidate;
    }
    polygon.advance(Rotation::ClockWise);
  }

  polygon.set_target(best);
  tracing::debug!(?best, size = polygon.size(), "selected least vertex");
  best
}

/// Lexicographic order: smaller `x` first, then smaller `y`.
pub fn left_to_right<T: TotalOrd>(a: &Point<T, 2>, b: &Point<T, 2>) -> Ordering {
  a.total_cmp(b)
}

/// [`left_to_right`] with its arguments swapped.
pub fn right_to_left<T: TotalOrd>(a: &Point<T, 2>, b: &Point<T, 2>) -> Ordering {
  left_to_right(b, a)
}

pub fn leftmost_vertex<T: TotalOrd>(polygon: &mut Polygon<T>) -> VertexId {
  least_vertex(polygon, left_to_right)
}

pub fn rightmost_vertex<T: TotalOrd>(polygon: &mut Polygon<T>) -> VertexId {
  least_vertex(polygon, right_to_left)
}
