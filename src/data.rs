pub(crate) mod point;
pub mod polygon;
pub mod vertex;

#[doc(inline)]
pub use crate::data::polygon::{Iter, Polygon};
pub use point::Point;
pub use vertex::{Rotation, VertexId, VertexRing};
