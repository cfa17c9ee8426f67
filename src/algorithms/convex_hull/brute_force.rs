use itertools::Itertools;

use crate::data::{Edge, Point};
use crate::{HullScalar, Orientation};

// Properties:
//    No panics.
//    Pure and deterministic.
//    Symmetric in the endpoints of `edge`.
/// $O(n)$ Test whether `edge` is an edge of the convex hull of `points`.
///
/// Every point that isn't equal to one of the endpoints is checked against
/// the line through the edge:
///
/// * Points on the line that fall inside the bounding box of the edge
///   disqualify it.
/// * Points off the line must all be on the same side.
///
/// Points equal to `edge.a` or `edge.b` are skipped by value, so duplicates of
/// an endpoint never disqualify an edge. In particular a pair of duplicate
/// points is reported as a hull edge.
///
/// # Examples
///
/// ```rust
/// # use hullstep::algorithms::is_hull_edge;
/// # use hullstep::data::{Edge, Point};
/// let square = [
///   Point::new([0, 0]),
///   Point::new([4, 0]),
///   Point::new([4, 4]),
///   Point::new([0, 4]),
/// ];
/// assert!(is_hull_edge(&Edge::new(square[0], square[1]), &square));
/// // Diagonals have points on both sides.
/// assert!(!is_hull_edge(&Edge::new(square[0], square[2]), &square));
/// ```
pub fn is_hull_edge<T>(edge: &Edge<T>, points: &[Point<T>]) -> bool
where
  T: HullScalar,
{
  let (a, b) = (&edge.a, &edge.b);
  let mut side: Option<Orientation> = None;
  for p in points {
    if p == a || p == b {
      continue;
    }
    match Point::orient(a, b, p) {
      Orientation::CoLinear => {
        // Colinear, so the bounding box test is an on-segment test.
        if p.in_bounding_box(a, b) {
          return false;
        }
      }
      turn => match side {
        None => side = Some(turn),
        Some(first) if first != turn => return false,
        Some(_) => {}
      },
    }
  }
  true
}

/// All unordered pairs of `points`, lexicographic by index:
/// `(0,1), (0,2), …, (0,n-1), (1,2), …`.
///
/// Pairs are taken by position, so duplicate points give degenerate edges.
pub fn candidates<T>(points: &[Point<T>]) -> Vec<Edge<T>>
where
  T: Clone,
{
  points
    .iter()
    .tuple_combinations()
    .map(|(a, b)| Edge::new(a.clone(), b.clone()))
    .collect()
}

/// $O(n^3)$ Every candidate that passes [`is_hull_edge`], in candidate order.
pub fn hull_edges<T>(points: &[Point<T>]) -> Vec<Edge<T>>
where
  T: HullScalar,
{
  candidates(points)
    .into_iter()
    .filter(|edge| is_hull_edge(edge, points))
    .collect()
}

/// Distinct endpoints of `edges` in the order they first appear.
pub fn hull_vertices<T>(edges: &[Edge<T>]) -> Vec<&Point<T>>
where
  T: PartialEq,
{
  let mut vertices: Vec<&Point<T>> = Vec::new();
  for pt in edges.iter().flat_map(|edge| edge.endpoints()) {
    if !vertices.contains(&pt) {
      vertices.push(pt);
    }
  }
  vertices
}
