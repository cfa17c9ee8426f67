pub mod convex_hull;

#[doc(inline)]
pub use convex_hull::brute_force::{candidates, hull_edges, hull_vertices, is_hull_edge};
