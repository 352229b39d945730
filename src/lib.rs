#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Step-by-step convex hulls in the plane.
//!
//! Two classical algorithms are provided, [monotone chain] and [gift wrapping].
//! Each can be run in batch mode, returning only the final [`Hull`](data::Hull),
//! or as a lazy stream of [`Step`]s that exposes every push, pop and wrap
//! decision. The stream always ends with exactly one [`Step::Finished`] whose
//! hull is identical to the batch result.
//!
//! ```rust
//! # use rhull::data::Point;
//! let points = vec![
//!   Point::new([0., 0.]),
//!   Point::new([1., 1.]),
//!   Point::new([2., 0.]),
//!   Point::new([1., -1.]),
//!   Point::new([1., 0.]),
//! ];
//! let hull = rhull::convex_hull(&points).unwrap();
//! assert_eq!(
//!   hull.as_slice(),
//!   &[
//!     Point::new([0., 0.]),
//!     Point::new([1., -1.]),
//!     Point::new([2., 0.]),
//!     Point::new([1., 1.]),
//!   ]
//! );
//! ```
//!
//! [monotone chain]: algorithms::convex_hull::monotone_chain
//! [gift wrapping]: algorithms::convex_hull::gift_wrapping
use num_traits::Float;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;

pub mod algorithms;
pub mod data;
pub mod io;
mod orientation;
pub mod progress;

pub use orientation::Orientation;

#[doc(inline)]
pub use algorithms::convex_hull::monotone_chain::convex_hull;
#[doc(inline)]
pub use algorithms::convex_hull::{Algorithm, Chain, ChainEvent, Step, Steps};

/// Absolute tolerance for the orientation predicate. Cross products with a
/// magnitude below this value are treated as colinear.
pub const TOLERANCE: f64 = 1e-12;

/// Number of decimal places kept when deciding whether two points coincide.
pub const PRECISION: i32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// The point at `index` has a NaN or infinite coordinate.
  InvalidInput { index: usize },
  /// The computation was cancelled before it finished.
  Cancelled,
  /// Two consecutive hull edges are either colinear or oriented clockwise.
  ConvexViolation,
  /// Malformed point file. Lines are numbered from 1.
  Parse { line: usize },
  Io(std::io::ErrorKind),
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InvalidInput { index } => write!(f, "Non-finite coordinate in point {}", index),
      Error::Cancelled => write!(f, "Cancelled"),
      Error::ConvexViolation => write!(f, "Convex violation"),
      Error::Parse { line } => write!(f, "Malformed point data on line {}", line),
      Error::Io(kind) => write!(f, "I/O error: {}", kind),
    }
  }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
  fn from(err: std::io::Error) -> Error {
    Error::Io(err.kind())
  }
}

/// Coordinate types the hull algorithms can work with.
pub trait HullScalar: Float + std::fmt::Debug {
  /// [`TOLERANCE`] expressed in this type.
  fn tolerance() -> Self;
  /// Exact total order, used for sorting.
  fn cmp_exact(&self, other: &Self) -> Ordering;
  /// Round to [`PRECISION`] decimal places. Two coordinates are considered
  /// identical iff their keys are equal.
  fn quantize(self) -> OrderedFloat<f64>;
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl HullScalar for $ty {
        fn tolerance() -> Self {
          TOLERANCE as $ty
        }

        fn cmp_exact(&self, other: &Self) -> Ordering {
          <$ty>::total_cmp(self, other)
        }

        fn quantize(self) -> OrderedFloat<f64> {
          let value = f64::from(self);
          let scaled = value * 10f64.powi(PRECISION);
          // Huge coordinates have no fractional digits left to round.
          if scaled.is_finite() {
            OrderedFloat(scaled.round())
          } else {
            OrderedFloat(value)
          }
        }
      }
    )*
  };
}

floating_precision!(f32, f64);

#[cfg(test)]
pub mod testing;
