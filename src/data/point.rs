use array_init::array_init;
use num_bigint::BigInt;
use num_traits::{Float, ToPrimitive};
use ordered_float::{FloatIsNan, NotNan};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::ops::Deref;
use std::ops::Index;

use crate::{HullScalar, Orientation};

/// A point in the plane. Two points are the same point iff their coordinates
/// are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Point<T> {
  pub array: [T; 2],
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  /// # Panics
  ///
  /// Panics if any of the inputs are NaN.
  pub fn new_nn(array: [T; 2]) -> Point<NotNan<T>>
  where
    T: Float + ordered_float::FloatCore,
  {
    Point::new(array_init(|i| NotNan::new(array[i]).unwrap()))
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  pub fn cast<U>(&self) -> Point<U>
  where
    T: Clone + Into<U>,
  {
    Point {
      array: array_init(|i| self.array[i].clone().into()),
    }
  }

  /// Coordinates as `f64`, for renderers. `None` if a coordinate cannot be
  /// represented.
  pub fn to_f64(&self) -> Option<[f64; 2]>
  where
    T: ToPrimitive,
  {
    Some([self.array[0].to_f64()?, self.array[1].to_f64()?])
  }

  /// True iff `self` lies in the axis-aligned bounding box spanned by `a` and
  /// `b`. Both bounds are inclusive and each axis is checked on its own.
  pub fn in_bounding_box(&self, a: &Point<T>, b: &Point<T>) -> bool
  where
    T: PartialOrd,
  {
    fn between<T: PartialOrd>(v: &T, a: &T, b: &T) -> bool {
      (a <= v && v <= b) || (b <= v && v <= a)
    }
    between(self.x_coord(), a.x_coord(), b.x_coord())
      && between(self.y_coord(), a.y_coord(), b.y_coord())
  }
}

impl<T: HullScalar> Point<T> {
  /// Direction of the turn `p -> q -> r`.
  pub fn orient(p: &Point<T>, q: &Point<T>, r: &Point<T>) -> Orientation {
    Orientation::new(&p.array, &q.array, &r.array)
  }

  pub fn orientation(&self, q: &Point<T>, r: &Point<T>) -> Orientation {
    Orientation::new(&self.array, &q.array, &r.array)
  }

  /// Compare the distances from `self` to `p` and from `self` to `q`.
  pub fn cmp_distance_to(&self, p: &Point<T>, q: &Point<T>) -> Ordering {
    T::cmp_dist(&self.array, &p.array, &q.array)
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.array
  }
}

impl TryFrom<Point<f64>> for Point<NotNan<f64>> {
  type Error = FloatIsNan;
  fn try_from(point: Point<f64>) -> Result<Point<NotNan<f64>>, FloatIsNan> {
    Ok(Point {
      array: [NotNan::new(point.array[0])?, NotNan::new(point.array[1])?],
    })
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<[T; 2]> for Point<T> {
  fn from(array: [T; 2]) -> Point<T> {
    Point { array }
  }
}

impl From<Point<i64>> for Point<BigInt> {
  fn from(point: Point<i64>) -> Point<BigInt> {
    point.cast()
  }
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
pub mod tests {
  use super::*;

  use claims::{assert_none, assert_ok, assert_some_eq};
  use ordered_float::OrderedFloat;
  use proptest::prelude::*;
  use rand::SeedableRng;
  use test_strategy::proptest;

  #[test]
  fn bounding_box_is_inclusive() {
    let a = Point::new([0, 0]);
    let b = Point::new([4, 2]);
    assert!(Point::new([0, 0]).in_bounding_box(&a, &b));
    assert!(Point::new([4, 2]).in_bounding_box(&a, &b));
    assert!(Point::new([2, 1]).in_bounding_box(&a, &b));
    assert!(Point::new([4, 0]).in_bounding_box(&a, &b));
    assert!(!Point::new([5, 1]).in_bounding_box(&a, &b));
    assert!(!Point::new([2, -1]).in_bounding_box(&a, &b));
  }

  #[test]
  fn bounding_box_degenerate_axis() {
    let a = Point::new([0, 0]);
    let b = Point::new([2, 0]);
    assert!(Point::new([1, 0]).in_bounding_box(&a, &b));
    assert!(!Point::new([4, 0]).in_bounding_box(&a, &b));
    assert!(!Point::new([1, 1]).in_bounding_box(&a, &b));
  }

  #[proptest]
  fn bounding_box_symmetric(p: Point<i8>, a: Point<i8>, b: Point<i8>) {
    prop_assert_eq!(p.in_bounding_box(&a, &b), p.in_bounding_box(&b, &a));
  }

  #[proptest]
  fn endpoints_inside_own_box(a: Point<i16>, b: Point<i16>) {
    prop_assert!(a.in_bounding_box(&a, &b));
    prop_assert!(b.in_bounding_box(&a, &b));
  }

  #[test]
  fn cmp_distance() {
    let origin = Point::new([0_i8, 0]);
    assert_eq!(
      origin.cmp_distance_to(&Point::new([1, 1]), &Point::new([0, 2])),
      Ordering::Less
    );
    assert_eq!(
      origin.cmp_distance_to(&Point::new([-3, 0]), &Point::new([0, 3])),
      Ordering::Equal
    );
    assert_eq!(
      Point::new([i8::MIN, i8::MIN]).cmp_distance_to(
        &Point::new([i8::MAX, i8::MAX]),
        &Point::new([i8::MAX, i8::MIN])
      ),
      Ordering::Greater
    );
  }

  #[test]
  fn conversions() {
    assert_some_eq!(Point::new([3_i32, -4]).to_f64(), [3.0, -4.0]);
    assert_some_eq!(
      Point::new([OrderedFloat(0.5), OrderedFloat(1.5)]).to_f64(),
      [0.5, 1.5]
    );
    assert_eq!(
      Point::<BigInt>::from(Point::new([7_i64, -9])),
      Point::new([BigInt::from(7), BigInt::from(-9)])
    );
    assert_eq!(Point::from((1, 2)), Point::new([1, 2]));
    assert_ok!(Point::<NotNan<f64>>::try_from(Point::new([1.0, 2.0])));
    assert_none!(Point::<NotNan<f64>>::try_from(Point::new([f64::NAN, 2.0])).ok());
  }

  #[test]
  fn random_points_are_reproducible() {
    let mut rng1 = rand::rngs::SmallRng::seed_from_u64(7);
    let mut rng2 = rand::rngs::SmallRng::seed_from_u64(7);
    let a: Point<i32> = rng1.gen();
    let b: Point<i32> = rng2.gen();
    assert_eq!(a, b);
  }
}
