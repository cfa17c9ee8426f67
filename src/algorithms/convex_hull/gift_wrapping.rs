use std::cmp::Ordering;

use crate::data::{Edge, Point};
use crate::{Error, HullScalar, Orientation};

// https://en.wikipedia.org/wiki/Gift_wrapping_algorithm

// Properties:
//    No panics.
//    No colinear vertices in the result.
//    No points are outside the resulting polygon.
/// Convex hull of a set of points.
///
/// [Gift Wrapping][wiki] algorithm for finding the smallest convex polygon which
/// contains all the given points. Used as the reference the brute-force hull is
/// checked against.
///
/// The vertices are returned in counter-clockwise order, starting from the
/// lowest point.
///
/// # Errors
/// Will return an error iff the input set contains less than three distinct,
/// non-colinear points.
///
/// # Time complexity
/// $O(nh)$ as h is the size of the points on convex hull
///
/// # Examples
///
/// ```rust
/// # use hullstep::algorithms::convex_hull::gift_wrapping::convex_hull;
/// # use hullstep::data::Point;
/// # use hullstep::Error;
/// let empty_set: Vec<Point<i32>> = vec![];
/// assert_eq!(
///   convex_hull(empty_set).err(),
///   Some(Error::InsufficientVertices))
/// ```
///
/// ```rust
/// # use hullstep::algorithms::convex_hull::gift_wrapping::convex_hull;
/// # use hullstep::data::Point;
/// # use hullstep::Error;
/// let dups = vec![Point::new([0,0])].repeat(3);
/// assert_eq!(
///   convex_hull(dups).err(),
///   Some(Error::InsufficientVertices))
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Gift_wrapping_algorithm
pub fn convex_hull<T>(pts: Vec<Point<T>>) -> Result<Vec<Point<T>>, Error>
where
  T: HullScalar,
{
  let n = pts.len();
  if n < 3 {
    return Err(Error::InsufficientVertices);
  }
  let start = lowest_point_index(&pts)?;

  let mut hull: Vec<Point<T>> = Vec::with_capacity(n);
  let mut p = start;

  loop {
    hull.push(pts[p].clone());
    let mut q = (p + 1) % n;

    for i in 0..n {
      let orientation = Point::orient(&pts[p], &pts[i], &pts[q]);
      // Prefer the farthest of colinear candidates so that no colinear points
      // end up on the hull.
      if orientation == Orientation::CounterClockWise
        || (orientation == Orientation::CoLinear
          && pts[p].cmp_distance_to(&pts[i], &pts[q]) == Ordering::Greater)
      {
        q = i;
      }
    }

    p = q;
    // Compare by value: duplicates of the start point close the hull too.
    if pts[p] == pts[start] {
      break;
    }
  }

  if hull.len() < 3 {
    return Err(Error::InsufficientVertices);
  }

  Ok(hull)
}

/// Edges of the closed polygon through `vertices`.
pub fn cycle_edges<T>(vertices: &[Point<T>]) -> Vec<Edge<T>>
where
  T: Clone,
{
  vertices
    .iter()
    .zip(vertices.iter().cycle().skip(1))
    .map(|(a, b)| Edge::new(a.clone(), b.clone()))
    .collect()
}

// Finds the index of the lowest point, breaking ties by x.
// O(n)
fn lowest_point_index<T>(pts: &[Point<T>]) -> Result<usize, Error>
where
  T: HullScalar,
{
  pts
    .iter()
    .enumerate()
    .min_by(|(_, a), (_, b)| {
      (a.y_coord(), a.x_coord())
        .partial_cmp(&(b.y_coord(), b.x_coord()))
        .unwrap_or(Ordering::Equal)
    })
    .map(|(index, _)| index)
    .ok_or(Error::InsufficientVertices)
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use crate::testing::*;

  use claims::{assert_err_eq, assert_ok};
  use num_bigint::BigInt;

  use proptest::collection::*;
  use proptest::prelude::*;
  use test_strategy::proptest;

  fn is_convex<T: HullScalar>(hull: &[Point<T>]) -> bool {
    let n = hull.len();
    (0..n).all(|i| Point::orient(&hull[i], &hull[(i + 1) % n], &hull[(i + 2) % n]).is_ccw())
  }

  fn contains<T: HullScalar>(hull: &[Point<T>], pt: &Point<T>) -> bool {
    let n = hull.len();
    (0..n).all(|i| !Point::orient(&hull[i], &hull[(i + 1) % n], pt).is_cw())
  }

  #[test]
  fn convex_hull_colinear() {
    let points = vec![
      Point::new([0, 0]),
      Point::new([1, 0]),
      Point::new([2, 0]),
      Point::new([3, 0]),
      Point::new([4, 0]),
      Point::new([1, 1]),
    ];
    let hull = assert_ok!(convex_hull(points));
    assert_eq!(
      hull,
      vec![Point::new([0, 0]), Point::new([4, 0]), Point::new([1, 1])]
    );
  }

  #[test]
  fn convex_hull_colinear_rev() {
    let points = vec![
      Point::new([0, 0]),
      Point::new([1, 0]),
      Point::new([0, 9]),
      Point::new([0, 8]),
      Point::new([0, 7]),
      Point::new([0, 6]),
    ];
    let hull = assert_ok!(convex_hull(points));
    assert_eq!(hull.len(), 3);
    assert!(is_convex(&hull));
  }

  #[test]
  fn convex_hull_dups() {
    let points = vec![
      Point::new([0, 0]),
      Point::new([1, 0]),
      Point::new([0, 0]),
      Point::new([1, 0]),
      Point::new([2, 2]),
      Point::new([2, 2]),
      Point::new([5, 1]),
      Point::new([5, 1]),
    ];
    let hull = assert_ok!(convex_hull(points));
    assert!(is_convex(&hull));
  }

  #[test]
  fn convex_hull_insufficient_dups() {
    let points = vec![
      Point::new([0, 0]),
      Point::new([0, 0]),
      Point::new([2, 2]),
      Point::new([2, 2]),
      Point::new([0, 0]),
      Point::new([2, 2]),
    ];
    assert_err_eq!(convex_hull(points), Error::InsufficientVertices);
  }

  #[test]
  fn convex_hull_bigint() {
    let points: Vec<Point<BigInt>> = vec![
      Point::new([0, 0]).into(),
      Point::new([-1, 1]).into(),
      Point::new([0, 1]).into(),
      Point::new([-717193444810564826, 1]).into(),
    ];
    let hull = assert_ok!(convex_hull(points));
    assert!(is_convex(&hull));
  }

  #[test]
  fn unit_i8() {
    let points: Vec<Point<i8>> = vec![
      Point::new([0, 0]),
      Point::new([0, -10]),
      Point::new([-13, 0]),
    ];
    let hull = assert_ok!(convex_hull(points));
    assert!(is_convex(&hull));
  }

  #[test]
  fn cycle() {
    let square = vec![
      Point::new([0, 0]),
      Point::new([4, 0]),
      Point::new([4, 4]),
      Point::new([0, 4]),
    ];
    let edges = cycle_edges(&square);
    assert_eq!(edges.len(), 4);
    assert_eq!(edges[3], Edge::new(Point::new([0, 4]), Point::new([0, 0])));
  }

  #[proptest]
  fn convex_hull_prop(#[strategy(vec(any_r(), 0..50))] pts: Vec<Point<BigInt>>) {
    if let Ok(hull) = convex_hull(pts.clone()) {
      // Prop #1: Results are convex.
      prop_assert!(is_convex(&hull));
      // Prop #2: No points from the input set are outside the polygon.
      for pt in pts.iter() {
        prop_assert!(contains(&hull, pt))
      }
      // Prop #3: All vertices are in the input set.
      for pt in hull.iter() {
        prop_assert!(pts.contains(pt))
      }
    }
  }

  #[proptest]
  fn convex_hull_prop_i8(#[strategy(vec(any::<Point<i8>>(), 0..50))] pts: Vec<Point<i8>>) {
    if let Ok(hull) = convex_hull(pts.clone()) {
      prop_assert!(is_convex(&hull));
      for pt in pts.iter() {
        prop_assert!(contains(&hull, pt))
      }
      for pt in hull.iter() {
        prop_assert!(pts.contains(pt))
      }
    }
  }
}
