use ordered_float::OrderedFloat;
use std::collections::BTreeSet;

use crate::data::Point;
use crate::{Error, HullScalar};

/// Remove points that coincide with an earlier point.
///
/// Two points coincide when both coordinates agree after rounding to
/// [`PRECISION`](crate::PRECISION) decimal places. The first occurrence is kept
/// and the relative order of the survivors is unchanged. Inputs with fewer than
/// two points are returned as-is.
///
/// # Examples
///
/// ```rust
/// # use rhull::algorithms::normalize;
/// # use rhull::data::Point;
/// let pts = vec![
///   Point::new([1., 1.]),
///   Point::new([0., 0.]),
///   Point::new([1. + 1e-14, 1.]),
///   Point::new([0., 0.]),
/// ];
/// assert_eq!(normalize(&pts), vec![Point::new([1., 1.]), Point::new([0., 0.])]);
/// ```
pub fn normalize<T>(points: &[Point<T>]) -> Vec<Point<T>>
where
  T: HullScalar,
{
  if points.len() <= 1 {
    return points.to_vec();
  }
  let mut seen: BTreeSet<[OrderedFloat<f64>; 2]> = BTreeSet::new();
  points
    .iter()
    .filter(|pt| seen.insert(pt.key()))
    .copied()
    .collect()
}

/// Reject point sets containing NaN or infinite coordinates.
///
/// # Errors
/// [`Error::InvalidInput`] with the index of the first offending point.
pub fn validate_points<T>(points: &[Point<T>]) -> Result<(), Error>
where
  T: HullScalar,
{
  match points.iter().position(|pt| !pt.is_finite()) {
    Some(index) => Err(Error::InvalidInput { index }),
    None => Ok(()),
  }
}
