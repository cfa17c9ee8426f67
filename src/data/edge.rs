use super::Point;

///////////////////////////////////////////////////////////////////////////////
// Edge

/// Unordered pair of points.
///
/// Equality ignores the order of the endpoints: `(a, b) == (b, a)`. The stored
/// order is the order the endpoints were taken from the point set, which keeps
/// rendering deterministic.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<T> {
  pub a: Point<T>,
  pub b: Point<T>,
}

impl<T> Edge<T> {
  pub const fn new(a: Point<T>, b: Point<T>) -> Edge<T> {
    Edge { a, b }
  }

  pub fn endpoints(&self) -> [&Point<T>; 2] {
    [&self.a, &self.b]
  }

  #[must_use]
  pub fn reversed(self) -> Edge<T> {
    Edge {
      a: self.b,
      b: self.a,
    }
  }

  /// True iff `pt` is equal to one of the endpoints.
  pub fn has_endpoint(&self, pt: &Point<T>) -> bool
  where
    T: PartialEq,
  {
    &self.a == pt || &self.b == pt
  }

  /// Both endpoints are the same point. Only happens when the point set
  /// contains duplicates.
  pub fn is_degenerate(&self) -> bool
  where
    T: PartialEq,
  {
    self.a == self.b
  }
}

impl<T: PartialEq> PartialEq for Edge<T> {
  fn eq(&self, other: &Edge<T>) -> bool {
    (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
  }
}

impl<T: Eq> Eq for Edge<T> {}

impl<T> From<(Point<T>, Point<T>)> for Edge<T> {
  fn from((a, b): (Point<T>, Point<T>)) -> Edge<T> {
    Edge::new(a, b)
  }
}
