pub mod least_vertex;

#[doc(inline)]
pub use least_vertex::{least_vertex, left_to_right, leftmost_vertex, right_to_left, rightmost_vertex};
