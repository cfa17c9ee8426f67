// Strategies and helpers shared by the unit tests:
//  * arbitrary points
//  * point sets, small grids and sets in general position
//  * edge-set comparison
use crate::data::{Edge, Point};
use crate::HullScalar;

use core::ops::Range;
use num_bigint::BigInt;
use proptest::arbitrary::*;
use proptest::collection::*;
use proptest::prelude::*;
use proptest::strategy::*;
use std::convert::TryInto;
use std::fmt::Debug;

type Mapped<I, O> = Map<StrategyFor<I>, fn(_: I) -> O>;

///////////////////////////////////////////////////////////////////////////////
// Arbitrary point

impl<T: Arbitrary> Arbitrary for Point<T>
where
  T::Strategy: Clone,
  T::Parameters: Clone,
  T: Clone + Debug,
{
  type Strategy = Mapped<Vec<T>, Point<T>>;
  type Parameters = T::Parameters;
  fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
    vec(any_with::<T>(params), 2).prop_map(|vec: Vec<T>| Point {
      array: vec.try_into().unwrap(),
    })
  }
}

pub fn any_r() -> impl Strategy<Value = Point<BigInt>> {
  any::<Point<i64>>().prop_map(|pt| pt.cast())
}

///////////////////////////////////////////////////////////////////////////////
// Point sets

// Coordinates in a tiny grid so that colinear triples and duplicates are common.
pub fn small_points(size: Range<usize>) -> impl Strategy<Value = Vec<Point<i8>>> {
  vec((-4_i8..=4, -4_i8..=4).prop_map(Point::from), size)
}

// Distinct points, no three of them colinear.
pub fn general_position(size: Range<usize>) -> impl Strategy<Value = Vec<Point<i32>>> {
  vec((-1000..=1000, -1000..=1000).prop_map(Point::from), size)
    .prop_filter("general position", |pts| is_general_position(pts))
}

pub fn is_general_position<T: HullScalar>(pts: &[Point<T>]) -> bool {
  let n = pts.len();
  for i in 0..n {
    for j in i + 1..n {
      if pts[i] == pts[j] {
        return false;
      }
      for k in j + 1..n {
        if Point::orient(&pts[i], &pts[j], &pts[k]).is_colinear() {
          return false;
        }
      }
    }
  }
  true
}

///////////////////////////////////////////////////////////////////////////////
// Edge sets

// Same edges, ignoring order of the list and of the endpoints.
pub fn same_edges<T: PartialEq>(lhs: &[Edge<T>], rhs: &[Edge<T>]) -> bool {
  lhs.len() == rhs.len()
    && lhs.iter().all(|edge| rhs.contains(edge))
    && rhs.iter().all(|edge| lhs.contains(edge))
}
