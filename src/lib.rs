#![doc(test(no_crate_inject))]
//! Brute-force convex hull, one candidate edge at a time.
//!
//! Every unordered pair of input points is a candidate edge. A pair is an edge
//! of the convex hull iff all other points lie strictly on one side of the line
//! through it (or on that line but outside the segment). Checking every pair
//! against every point is $O(n^3)$, which makes the algorithm a good teaching
//! aid and a poor production tool.
//!
//! [`StepDriver`] owns the point set and walks through the candidates one per
//! [`StepDriver::step`], so a renderer can show the current candidate and the
//! hull edges found so far.
//!
//! ```rust
//! # use hullstep::data::Point;
//! # use hullstep::StepDriver;
//! let mut driver = StepDriver::new();
//! for pt in [[0, 0], [4, 0], [4, 4], [0, 4]] {
//!   driver.add_point(Point::new(pt));
//! }
//! driver.begin_evaluation();
//! assert_eq!(driver.total_candidates(), 6);
//! driver.finish();
//! assert_eq!(driver.hull_edges().len(), 4);
//! ```
use num_traits::ToPrimitive;
use std::cmp::Ordering;

pub mod algorithms;
pub mod data;
mod orientation;
pub mod stepper;

pub use orientation::Orientation;
pub use stepper::{Event, Frame, Mode, Progress, Step, StepDriver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  InsufficientVertices,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
    }
  }
}

impl std::error::Error for Error {}

/// Coordinate types the hull predicates work with.
///
/// Implementations compute signs exactly: fixed-width integers never overflow,
/// `BigInt` is exact by construction and floats go through adaptive-precision
/// predicates.
pub trait HullScalar: std::fmt::Debug + Clone + PartialOrd + ToPrimitive {
  /// Sign of the cross product `(q - p) × (r - p)`.
  ///
  /// `Greater` when `r` is to the left of the directed line `p -> q`.
  fn cmp_cross(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;

  /// Compare the squared distance `|p - q|²` with `|p - r|²`.
  fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
}

macro_rules! fixed_precision {
  ( $ty:ty, $uty:ty, $ulong: ty ) => {
    impl HullScalar for $ty {
      fn cmp_cross(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
        // Absolute difference along with its sign.
        // diff(0, 10) => (10, true)
        // diff(10, 0) => (10, false)
        // diff(i8::MIN,i8:MAX) => (255_u16, true)
        fn diff(a: $ty, b: $ty) -> ($ulong, bool) {
          if b > a {
            (b.wrapping_sub(a) as $uty as $ulong, true)
          } else {
            (a.wrapping_sub(b) as $uty as $ulong, false)
          }
        }
        // cross = ux*vy - uy*vx
        let (ux, ux_neg) = diff(q[0], p[0]);
        let (vy, vy_neg) = diff(r[1], p[1]);
        let ux_vy_neg = (ux_neg ^ vy_neg) && ux != 0 && vy != 0;
        let (uy, uy_neg) = diff(q[1], p[1]);
        let (vx, vx_neg) = diff(r[0], p[0]);
        let uy_vx_neg = (uy_neg ^ vx_neg) && uy != 0 && vx != 0;
        match (ux_vy_neg, uy_vx_neg) {
          (true, false) => Ordering::Less,
          (false, true) => Ordering::Greater,
          (true, true) => (uy * vx).cmp(&(ux * vy)),
          (false, false) => (ux * vy).cmp(&(uy * vx)),
        }
      }

      fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
        fn diff(a: $ty, b: $ty) -> $ulong {
          if b > a {
            b.wrapping_sub(a) as $uty as $ulong
          } else {
            a.wrapping_sub(b) as $uty as $ulong
          }
        }
        let pq_x = diff(p[0], q[0]);
        let pq_y = diff(p[1], q[1]);
        let (pq_dist_squared, pq_overflow) = (pq_x * pq_x).overflowing_add(pq_y * pq_y);
        let pr_x = diff(p[0], r[0]);
        let pr_y = diff(p[1], r[1]);
        let (pr_dist_squared, pr_overflow) = (pr_x * pr_x).overflowing_add(pr_y * pr_y);
        match (pq_overflow, pr_overflow) {
          (true, false) => Ordering::Greater,
          (false, true) => Ordering::Less,
          _ => pq_dist_squared.cmp(&pr_dist_squared),
        }
      }
    }
  };
}

macro_rules! arbitrary_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl HullScalar for $ty {
        fn cmp_cross(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let lhs = (&q[0] - &p[0]) * (&r[1] - &p[1]);
          let rhs = (&q[1] - &p[1]) * (&r[0] - &p[0]);
          lhs.cmp(&rhs)
        }

        fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let pq_x = &p[0] - &q[0];
          let pq_y = &p[1] - &q[1];
          let pq_dist_squared: Self = &pq_x * &pq_x + &pq_y * &pq_y;
          let pr_x = &p[0] - &r[0];
          let pr_y = &p[1] - &r[1];
          let pr_dist_squared: Self = &pr_x * &pr_x + &pr_y * &pr_y;
          pq_dist_squared.cmp(&pr_dist_squared)
        }
      }
    )*
  };
}

fn orient2d(p: [f64; 2], q: [f64; 2], r: [f64; 2]) -> Ordering {
  // Adaptive precision: the sign is exact for all finite inputs.
  let orient = geometry_predicates::predicates::orient2d(p, q, r);
  if orient > 0.0 {
    Ordering::Greater
  } else if orient < 0.0 {
    Ordering::Less
  } else {
    Ordering::Equal
  }
}

// Inexact. Only the reference hull compares distances.
fn float_cmp_dist(p: [f64; 2], q: [f64; 2], r: [f64; 2]) -> Ordering {
  let pq = (p[0] - q[0]).powi(2) + (p[1] - q[1]).powi(2);
  let pr = (p[0] - r[0]).powi(2) + (p[1] - r[1]).powi(2);
  pq.partial_cmp(&pr).unwrap_or(Ordering::Equal)
}

macro_rules! wrapped_floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl HullScalar for $ty {
        fn cmp_cross(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          orient2d(
            [f64::from(p[0].into_inner()), f64::from(p[1].into_inner())],
            [f64::from(q[0].into_inner()), f64::from(q[1].into_inner())],
            [f64::from(r[0].into_inner()), f64::from(r[1].into_inner())],
          )
        }

        fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          float_cmp_dist(
            [f64::from(p[0].into_inner()), f64::from(p[1].into_inner())],
            [f64::from(q[0].into_inner()), f64::from(q[1].into_inner())],
            [f64::from(r[0].into_inner()), f64::from(r[1].into_inner())],
          )
        }
      }
    )*
  };
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl HullScalar for $ty {
        fn cmp_cross(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          orient2d(
            [f64::from(p[0]), f64::from(p[1])],
            [f64::from(q[0]), f64::from(q[1])],
            [f64::from(r[0]), f64::from(r[1])],
          )
        }

        fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          float_cmp_dist(
            [f64::from(p[0]), f64::from(p[1])],
            [f64::from(q[0]), f64::from(q[1])],
            [f64::from(r[0]), f64::from(r[1])],
          )
        }
      }
    )*
  };
}

fixed_precision!(i8, u8, u16);
fixed_precision!(i16, u16, u32);
fixed_precision!(i32, u32, u64);
fixed_precision!(i64, u64, u128);
fixed_precision!(isize, usize, u128);
arbitrary_precision!(num_bigint::BigInt);
wrapped_floating_precision!(ordered_float::OrderedFloat<f32>);
wrapped_floating_precision!(ordered_float::OrderedFloat<f64>);
wrapped_floating_precision!(ordered_float::NotNan<f32>);
wrapped_floating_precision!(ordered_float::NotNan<f64>);
floating_precision!(f32);
floating_precision!(f64);

#[cfg(test)]
pub mod testing;
