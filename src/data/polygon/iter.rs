use crate::data::{Point, VertexId, VertexRing};

/// Clockwise iterator over `(VertexId, &Point)` pairs.
pub struct Iter<'a, T: 'a> {
  pub(crate) ring: &'a VertexRing<T>,
  pub(crate) head: VertexId,
  pub(crate) remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
  fn clone(&self) -> Self {
    Iter {
      ring: self.ring,
      head: self.head,
      remaining: self.remaining,
    }
  }
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = (VertexId, &'a Point<T, 2>);

  fn next(&mut self) -> Option<Self::Item> {
    if self.remaining == 0 {
      None
    } else {
      let out = self.head;
      self.head = self.ring.next(out);
      self.remaining -= 1;
      Some((out, self.ring.point(out)))
    }
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
