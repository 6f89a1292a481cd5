use crate::data::{Point, Rotation, VertexId, VertexRing};
use crate::Error;

mod iter;
pub use iter::*;

/// A polygon boundary with a cursor.
///
/// The polygon owns its [`VertexRing`]. The cursor (the *target* vertex) is
/// always a live member of that ring, so a polygon never has zero vertices.
#[derive(Debug, Clone)]
pub struct Polygon<T> {
  pub(crate) ring: VertexRing<T>,
  pub(crate) size: usize,
  pub(crate) target: VertexId,
}

impl<T> Polygon<T> {
  /// Adopt the ring reachable from `start` and put the cursor on `start`.
  ///
  /// The size is counted once by walking the ring.
  pub fn new(ring: VertexRing<T>, start: VertexId) -> Polygon<T> {
    let size = ring.count_from(start);
    Polygon {
      ring,
      size,
      target: start,
    }
  }

  /// Build a polygon whose clockwise order matches `points`. The cursor starts
  /// on the first point.
  pub fn from_points(points: Vec<Point<T, 2>>) -> Result<Polygon<T>, Error> {
    let mut iter = points.into_iter();
    let first = iter.next().ok_or(Error::InsufficientVertices)?;
    let (mut ring, start) = VertexRing::singleton(first);
    let mut at = start;
    for pt in iter {
      at = ring.insert(at, pt);
    }
    Ok(Polygon::new(ring, start))
  }

  pub fn size(&self) -> usize {
    self.size
  }

  pub fn ring(&self) -> &VertexRing<T> {
    &self.ring
  }

  pub fn target(&self) -> VertexId {
    self.target
  }

  pub fn target_point(&self) -> &Point<T, 2> {
    self.ring.point(self.target)
  }

  pub fn point(&self, id: VertexId) -> &Point<T, 2> {
    self.ring.point(id)
  }

  /// Move the cursor to `id`, which must be a vertex of this polygon.
  pub fn set_target(&mut self, id: VertexId) {
    debug_assert!(self.ring.contains(id), "Vertex isn't part of polygon: {:?}", id);
    self.target = id;
  }

  pub fn neighbor(&self, rotation: Rotation) -> VertexId {
    self.ring.neighbor(self.target, rotation)
  }

  pub fn cw(&self) -> VertexId {
    self.neighbor(Rotation::ClockWise)
  }

  pub fn ccw(&self) -> VertexId {
    self.neighbor(Rotation::CounterClockWise)
  }

  /// Step the cursor to its neighbour. The ring itself is untouched.
  pub fn advance(&mut self, rotation: Rotation) -> VertexId {
    self.target = self.neighbor(rotation);
    self.target
  }

  /// Insert `point` clockwise of the cursor and move the cursor onto it.
  pub fn insert(&mut self, point: Point<T, 2>) -> VertexId {
    self.target = self.ring.insert(self.target, point);
    self.size += 1;
    tracing::trace!(cursor = ?self.target, size = self.size, "inserted vertex");
    self.target
  }

  /// Remove the cursor vertex. The cursor moves to its counterclockwise
  /// neighbour.
  ///
  /// # Errors
  /// Will return `Error::InsufficientVertices` if this is the last vertex.
  pub fn remove(&mut self) -> Result<Point<T, 2>, Error> {
    if self.size <= 1 {
      return Err(Error::InsufficientVertices);
    }
    let removed = self.target;
    self.target = self.ccw();
    self.size -= 1;
    tracing::trace!(?removed, cursor = ?self.target, size = self.size, "removed vertex");
    Ok(self.ring.remove(removed))
  }

  /// Clockwise walk over every vertex, starting at the cursor.
  pub fn iter(&self) -> Iter<'_, T> {
    Iter {
      ring: &self.ring,
      head: self.target,
      remaining: self.size,
    }
  }
}
