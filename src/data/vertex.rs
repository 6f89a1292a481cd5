use crate::data::Point;

/// Handle to a vertex stored in a [`VertexRing`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

/// Direction of travel along a ring.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Rotation {
  /// Follow `next` links.
  ClockWise,
  /// Follow `prev` links.
  CounterClockWise,
}

#[derive(Copy, Clone, Debug)]
struct Link {
  prev: VertexId,
  next: VertexId,
}

#[derive(Clone, Debug)]
struct Node<T> {
  point: Point<T, 2>,
  link: Link,
}

/// Circular doubly-linked list of polygon vertices.
///
/// Nodes live in an arena and refer to each other by [`VertexId`]. Removed
/// nodes leave a dead slot behind so that every other id stays valid.
#[derive(Clone, Debug)]
pub struct VertexRing<T> {
  nodes: Vec<Option<Node<T>>>,
  live: usize,
}

impl<T> VertexRing<T> {
  /// A ring holding a single vertex linked to itself in both directions.
  pub fn singleton(point: Point<T, 2>) -> (VertexRing<T>, VertexId) {
    let id = VertexId(0);
    let ring = VertexRing {
      nodes: vec![Some(Node {
        point,
        link: Link { prev: id, next: id },
      })],
      live: 1,
    };
    (ring, id)
  }

  /// Number of live vertices.
  pub fn len(&self) -> usize {
    self.live
  }

  pub fn is_empty(&self) -> bool {
    self.live == 0
  }

  pub fn contains(&self, id: VertexId) -> bool {
    matches!(self.nodes.get(id.0), Some(Some(_)))
  }

  pub fn point(&self, id: VertexId) -> &Point<T, 2> {
    &self.node(id).point
  }

  /// Clockwise neighbour.
  pub fn next(&self, id: VertexId) -> VertexId {
    self.node(id).link.next
  }

  /// Counterclockwise neighbour.
  pub fn prev(&self, id: VertexId) -> VertexId {
    self.node(id).link.prev
  }

  pub fn cw(&self, id: VertexId) -> VertexId {
    self.next(id)
  }

  pub fn ccw(&self, id: VertexId) -> VertexId {
    self.prev(id)
  }

  pub fn neighbor(&self, id: VertexId, rotation: Rotation) -> VertexId {
    match rotation {
      Rotation::ClockWise => self.next(id),
      Rotation::CounterClockWise => self.prev(id),
    }
  }

  /// Splice a new vertex in as the clockwise neighbour of `at`.
  //
  // at -> next
  //
  // Into:
  //
  // at -> new -> next
  pub fn insert(&mut self, at: VertexId, point: Point<T, 2>) -> VertexId {
    let next = self.next(at);
    let id = VertexId(self.nodes.len());
    self.nodes.push(Some(Node {
      point,
      link: Link { prev: at, next },
    }));
    self.live += 1;
    self.connect(at, id);
    self.connect(id, next);
    self.validate();
    id
  }

  /// Unlink `id` from the ring, joining its two neighbours.
  ///
  /// # Panics
  ///
  /// Panics if `id` was already removed.
  pub fn remove(&mut self, id: VertexId) -> Point<T, 2> {
    let node = match self.nodes.get_mut(id.0).and_then(Option::take) {
      Some(node) => node,
      None => panic!("Vertex isn't part of ring: {:?}", id),
    };
    let Link { prev, next } = node.link;
    self.live -= 1;
    if prev != id {
      self.connect(prev, next);
    }
    self.validate();
    node.point
  }

  /// Vertex ids in clockwise order, starting at `start`, visiting every live
  /// vertex once.
  pub fn iter_from(&self, start: VertexId) -> impl Iterator<Item = VertexId> + '_ {
    let mut at = start;
    std::iter::from_fn(move || {
      let this = at;
      at = self.next(at);
      Some(this)
    })
    .take(self.live)
  }

  /// Walk `next` links from `start` until the ring closes.
  pub fn count_from(&self, start: VertexId) -> usize {
    let mut n = 1;
    let mut at = self.next(start);
    while at != start {
      at = self.next(at);
      n += 1;
    }
    n
  }

  fn node(&self, id: VertexId) -> &Node<T> {
    match self.nodes.get(id.0) {
      Some(Some(node)) => node,
      _ => panic!("Vertex isn't part of ring: {:?}", id),
    }
  }

  fn link_mut(&mut self, id: VertexId) -> &mut Link {
    match self.nodes.get_mut(id.0) {
      Some(Some(node)) => &mut node.link,
      _ => panic!("Vertex isn't part of ring: {:?}", id),
    }
  }

  fn connect(&mut self, a: VertexId, b: VertexId) {
    self.link_mut(a).next = b;
    self.link_mut(b).prev = a;
  }

  fn validate(&self) {
    for (nth, node) in self.nodes.iter().enumerate() {
      if let Some(node) = node {
        debug_assert_eq!(self.node(node.link.next).link.prev, VertexId(nth));
        debug_assert_eq!(self.node(node.link.prev).link.next, VertexId(nth));
      }
    }
  }
}
