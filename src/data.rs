mod edge;
pub(crate) mod point;

pub use edge::Edge;
pub use point::Point;
