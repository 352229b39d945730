use log::{debug, trace};
use std::mem;

use super::{Chain, ChainEvent, Step};
use crate::algorithms::normalize::{normalize, validate_points};
use crate::data::{Hull, Point};
use crate::{Error, HullScalar};

// https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain

// Properties:
//    No panics.
//    All Ok results are valid convex hulls.
//    No points are outside the resulting convex hull.
/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Monotone chain][wiki] algorithm (Andrew's algorithm) for finding the
/// smallest convex polygon which contains all the given points.
///
/// Points closer than the normalization precision are merged first. Colinear
/// points on the boundary are not part of the hull. Sets with fewer than two
/// distinct points are returned unchanged.
///
/// # Errors
/// Will return an error iff a coordinate is NaN or infinite.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All vertices in the hull are from the input set.
/// * The hull starts at the point with the lowest x coordinate (lowest y on ties).
///
/// # Examples
///
/// ```rust
/// # use rhull::algorithms::convex_hull;
/// # use rhull::data::Point;
/// let line = vec![
///   Point::new([0., 0.]),
///   Point::new([1., 0.]),
///   Point::new([2., 0.]),
///   Point::new([3., 0.]),
/// ];
/// assert_eq!(
///   convex_hull(&line).unwrap().as_slice(),
///   &[Point::new([0., 0.]), Point::new([3., 0.])]
/// );
/// ```
///
/// [wiki]: https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain
pub fn convex_hull<T>(points: &[Point<T>]) -> Result<Hull<T>, Error>
where
  T: HullScalar,
{
  Ok(MonotoneChain::new(points)?.into_hull())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
  // Index of the next point to feed into the lower chain.
  Lower(usize),
  // Number of points not yet fed into the upper chain, counted from the left.
  Upper(usize),
  Finish,
  Done,
}

enum Advance<T> {
  Mutated(Chain, ChainEvent<T>),
  Finished(Hull<T>),
}

/// Monotone chain construction as a lazy sequence of [`Step`]s.
///
/// A [`Step::Chains`] is emitted after every push and every pop, followed by a
/// single [`Step::Finished`].
///
/// ```rust
/// # use rhull::algorithms::convex_hull::monotone_chain::MonotoneChain;
/// # use rhull::data::Point;
/// # use rhull::{ChainEvent, Step};
/// let pts = vec![Point::new([0., 0.]), Point::new([1., 0.]), Point::new([2., 0.])];
/// let pops = MonotoneChain::new(&pts)
///   .unwrap()
///   .filter(|step| matches!(step, Step::Chains { event: ChainEvent::Pop(_), .. }))
///   .count();
/// // (1,0) is colinear and gets popped once from each chain.
/// assert_eq!(pops, 2);
/// ```
#[derive(Debug, Clone)]
pub struct MonotoneChain<T> {
  points: Vec<Point<T>>,
  lower: Vec<Point<T>>,
  upper: Vec<Point<T>>,
  phase: Phase,
}

impl<T> MonotoneChain<T>
where
  T: HullScalar,
{
  /// # Errors
  /// Will return an error iff a coordinate is NaN or infinite.
  pub fn new(points: &[Point<T>]) -> Result<MonotoneChain<T>, Error> {
    validate_points(points)?;
    let mut points = normalize(points);
    points.sort_unstable_by(Point::cmp_xy);
    debug!("monotone chain: {} distinct points", points.len());
    let phase = if points.len() <= 1 {
      Phase::Finish
    } else {
      Phase::Lower(0)
    };
    Ok(MonotoneChain {
      lower: Vec::with_capacity(points.len()),
      upper: Vec::with_capacity(points.len()),
      points,
      phase,
    })
  }

  pub fn lower(&self) -> &[Point<T>] {
    &self.lower
  }

  pub fn upper(&self) -> &[Point<T>] {
    &self.upper
  }

  /// Run the remaining computation without producing snapshots.
  pub fn into_hull(mut self) -> Hull<T> {
    while let Some(advance) = self.advance() {
      if let Advance::Finished(hull) = advance {
        return hull;
      }
    }
    Hull::empty()
  }

  // Apply exactly one mutation, or finish.
  fn advance(&mut self) -> Option<Advance<T>> {
    loop {
      match self.phase {
        Phase::Lower(i) if i < self.points.len() => {
          let event = extend(&mut self.lower, self.points[i]);
          if let ChainEvent::Push(_) = event {
            self.phase = Phase::Lower(i + 1);
          }
          return Some(Advance::Mutated(Chain::Lower, event));
        }
        Phase::Lower(_) => self.phase = Phase::Upper(self.points.len()),
        Phase::Upper(i) if i > 0 => {
          let event = extend(&mut self.upper, self.points[i - 1]);
          if let ChainEvent::Push(_) = event {
            self.phase = Phase::Upper(i - 1);
          }
          return Some(Advance::Mutated(Chain::Upper, event));
        }
        Phase::Upper(_) => self.phase = Phase::Finish,
        Phase::Finish => {
          self.phase = Phase::Done;
          let hull = self.join();
          debug!("monotone chain: {} hull vertices", hull.len());
          return Some(Advance::Finished(hull));
        }
        Phase::Done => return None,
      }
    }
  }

  fn join(&mut self) -> Hull<T> {
    if self.points.len() <= 1 {
      return Hull::new_unchecked(mem::take(&mut self.points));
    }
    // The last point of each chain is the first point of the other. The turns
    // at those two points were never checked while building the chains.
    let mut walk = mem::take(&mut self.lower);
    let mut upper = mem::take(&mut self.upper);
    walk.pop();
    upper.pop();
    walk.append(&mut upper);
    Hull::from_walk(&self.points, walk)
  }
}

// Pop the last point if `candidate` doesn't make a strict left turn with the
// last two points of the chain. Otherwise push `candidate`.
fn extend<T>(chain: &mut Vec<Point<T>>, candidate: Point<T>) -> ChainEvent<T>
where
  T: HullScalar,
{
  let turns_left = match chain.as_slice() {
    [.., a, b] => Point::orient(a, b, &candidate).is_ccw(),
    _ => true,
  };
  if !turns_left {
    if let Some(popped) = chain.pop() {
      return ChainEvent::Pop(popped);
    }
  }
  chain.push(candidate);
  ChainEvent::Push(candidate)
}

impl<T> Iterator for MonotoneChain<T>
where
  T: HullScalar,
{
  type Item = Step<T>;

  fn next(&mut self) -> Option<Step<T>> {
    let step = match self.advance()? {
      Advance::Mutated(chain, event) => Step::Chains {
        chain,
        event,
        lower: self.lower.clone(),
        upper: self.upper.clone(),
      },
      Advance::Finished(hull) => Step::Finished(hull),
    };
    trace!("monotone chain step: {:?}", step);
    Some(step)
  }
}

impl<T: HullScalar> std::iter::FusedIterator for MonotoneChain<T> {}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use crate::testing::*;

  use claims::assert_ok;
  use proptest::prelude::*;
  use test_strategy::proptest;

  fn points(coords: &[(f64, f64)]) -> Vec<Point<f64>> {
    coords.iter().copied().map(Point::from).collect()
  }

  #[test]
  fn convex_hull_colinear() {
    let pts = points(&[(0., 0.), (1., 0.), (2., 0.), (3., 0.), (4., 0.), (1., 1.)]);
    let hull = convex_hull(&pts).unwrap();
    assert_ok!(hull.validate());
    assert_eq!(hull.into_vec(), points(&[(0., 0.), (4., 0.), (1., 1.)]));
  }

  #[test]
  fn convex_hull_colinear_rev() {
    let pts = points(&[(0., 0.), (1., 0.), (0., 9.), (0., 8.), (0., 7.), (0., 6.)]);
    let hull = convex_hull(&pts).unwrap();
    assert_eq!(hull.into_vec(), points(&[(0., 0.), (1., 0.), (0., 9.)]));
  }

  #[test]
  fn convex_hull_dups() {
    let pts = points(&[
      (0., 0.),
      (1., 0.),
      (0., 0.),
      (1., 0.),
      (2., 2.),
      (2., 2.),
      (5., 1.),
      (5., 1.),
    ]);
    let hull = convex_hull(&pts).unwrap();
    assert_ok!(hull.validate());
    assert_eq!(hull.into_vec(), points(&[(0., 0.), (1., 0.), (5., 1.), (2., 2.)]));
  }

  #[test]
  fn shared_x_ordered_by_y() {
    let pts = points(&[(0., 3.), (0., -3.), (0., 0.), (2., 0.)]);
    let hull = convex_hull(&pts).unwrap();
    assert_eq!(hull.into_vec(), points(&[(0., -3.), (2., 0.), (0., 3.)]));
  }

  #[test]
  fn near_colinear_is_popped() {
    // (1, 1e-13) is within tolerance of the segment (0,0)-(2,0).
    let pts = points(&[(0., 0.), (1., 1e-13), (2., 0.), (1., 1.)]);
    let hull = convex_hull(&pts).unwrap();
    assert_eq!(hull.into_vec(), points(&[(0., 0.), (2., 0.), (1., 1.)]));
  }

  // Both chains are convex on their own, but the turns where they meet are
  // within tolerance of zero.
  #[test]
  fn chain_junctions_are_checked() {
    let pts = points(&[
      (7.570490395661576e-6, 3.4109271704264857e-6),
      (8.365602248671948e-6, 9.781110827066852e-6),
      (8.536130927852455e-6, 6.567973262174161e-6),
      (7.65979607236799e-6, 5.525477737558215e-6),
      (8.451766807995003e-6, 3.967920220081794e-6),
    ]);
    let hull = convex_hull(&pts).unwrap();
    assert_ok!(hull.validate());
    assert_eq!(hull.first(), pts.iter().min_by(|a, b| a.cmp_xy(b)));
    for pt in hull.iter() {
      assert!(pts.contains(pt));
    }
  }

  #[test]
  fn diamond_step_sequence() {
    let pts = points(&[(0., 0.), (1., 1.), (2., 0.), (1., -1.), (1., 0.)]);
    let steps: Vec<Step<f64>> = MonotoneChain::new(&pts).unwrap().collect();
    let events: Vec<(Chain, ChainEvent<f64>)> = steps
      .iter()
      .filter_map(|step| match step {
        Step::Chains { chain, event, .. } => Some((*chain, *event)),
        _ => None,
      })
      .collect();
    let push = |x, y| ChainEvent::Push(Point::new([x, y]));
    let pop = |x, y| ChainEvent::Pop(Point::new([x, y]));
    use Chain::*;
    assert_eq!(
      events,
      vec![
        (Lower, push(0., 0.)),
        (Lower, push(1., -1.)),
        (Lower, push(1., 0.)),
        (Lower, pop(1., 0.)),
        (Lower, push(1., 1.)),
        (Lower, pop(1., 1.)),
        (Lower, push(2., 0.)),
        (Upper, push(2., 0.)),
        (Upper, push(1., 1.)),
        (Upper, push(1., 0.)),
        (Upper, pop(1., 0.)),
        (Upper, push(1., -1.)),
        (Upper, pop(1., -1.)),
        (Upper, push(0., 0.)),
      ]
    );
    let pops: Vec<Point<f64>> = events
      .iter()
      .filter(|(_, event)| matches!(event, ChainEvent::Pop(_)))
      .map(|(_, event)| event.point())
      .collect();
    assert_eq!(pops, points(&[(1., 0.), (1., 1.), (1., 0.), (1., -1.)]));
    match steps.last() {
      Some(Step::Finished(hull)) => {
        assert_eq!(hull.as_slice(), points(&[(0., 0.), (1., -1.), (2., 0.), (1., 1.)]))
      }
      other => panic!("expected terminal step, got {:?}", other),
    }
  }

  #[test]
  fn upper_empty_while_building_lower() {
    let pts = points(&[(0., 0.), (1., 2.), (2., 0.)]);
    for step in MonotoneChain::new(&pts).unwrap() {
      if let Step::Chains {
        chain: Chain::Lower,
        upper,
        ..
      } = step
      {
        assert!(upper.is_empty());
      }
    }
  }

  #[test]
  fn snapshots_are_independent() {
    let pts = points(&[(0., 0.), (1., 2.), (2., 0.), (1., 1.)]);
    let mut chain = MonotoneChain::new(&pts).unwrap();
    let first = chain.next();
    let rest: Vec<_> = chain.by_ref().collect();
    assert!(!rest.is_empty());
    assert!(chain.lower().is_empty());
    assert_eq!(
      first,
      Some(Step::Chains {
        chain: Chain::Lower,
        event: ChainEvent::Push(Point::new([0., 0.])),
        lower: points(&[(0., 0.)]),
        upper: vec![],
      })
    );
    assert_eq!(chain.next(), None);
  }

  #[proptest]
  fn every_step_is_one_mutation(#[strategy(grid_points(40))] pts: Vec<Point<f64>>) {
    let mut prev: (usize, usize) = (0, 0);
    for step in MonotoneChain::new(&pts).unwrap() {
      if let Step::Chains {
        chain,
        event,
        lower,
        upper,
      } = step
      {
        let (len, prev_len) = match chain {
          Chain::Lower => (lower.len(), prev.0),
          Chain::Upper => (upper.len(), prev.1),
        };
        match event {
          ChainEvent::Push(pt) => {
            prop_assert_eq!(len, prev_len + 1);
            let last = match chain {
              Chain::Lower => lower.last(),
              Chain::Upper => upper.last(),
            };
            prop_assert_eq!(last, Some(&pt));
          }
          ChainEvent::Pop(_) => {
            prop_assert_eq!(len + 1, prev_len);
          }
        }
        prev = (lower.len(), upper.len());
      }
    }
  }

  #[proptest]
  fn chains_stay_convex(#[strategy(grid_points(40))] pts: Vec<Point<f64>>) {
    for step in MonotoneChain::new(&pts).unwrap() {
      if let Step::Chains { lower, upper, .. } = step {
        for chain in [lower, upper] {
          for w in chain.windows(3) {
            prop_assert!(Point::orient(&w[0], &w[1], &w[2]).is_ccw());
          }
        }
      }
    }
  }
}
