use crate::HullScalar;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// The turn is the sign of the cross product of `p2-p1` and `p3-p1`.
  /// Magnitudes below [`TOLERANCE`](crate::TOLERANCE) are reported as
  /// [`CoLinear`](Orientation::CoLinear). A counter-clockwise turn means `p3`
  /// lies to the left of the directed line `p1->p2`.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use rhull::Orientation;
  /// let p1 = [0., 0.];
  /// let p2 = [0., 1.]; // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &[0., 2.]).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &[-1., 2.]).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &[1., 2.]).is_cw());
  /// // Floating point noise is absorbed by the tolerance.
  /// assert!(Orientation::new(&p1, &p2, &[1e-13, 2.]).is_colinear());
  /// ```
  pub fn new<T>(p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> Orientation
  where
    T: HullScalar,
  {
    let cross = (p2[0] - p1[0]) * (p3[1] - p1[1]) - (p2[1] - p1[1]) * (p3[0] - p1[0]);
    if cross.abs() < T::tolerance() {
      Orientation::CoLinear
    } else if cross > T::zero() {
      Orientation::CounterClockWise
    } else {
      Orientation::ClockWise
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}
