use log::{debug, trace, warn};
use std::cmp::Ordering;
use std::mem;

use super::Step;
use crate::algorithms::normalize::{normalize, validate_points};
use crate::data::{Hull, Point};
use crate::{Error, HullScalar, Orientation};

// https://en.wikipedia.org/wiki/Gift_wrapping_algorithm

// Properties:
//    No panics.
//    All Ok results are valid convex hulls.
//    No points are outside the resulting convex hull.
/// Convex hull of a set of points.
///
/// [Gift Wrapping][wiki] algorithm for finding the smallest convex polygon which
/// contains all the given points.
///
/// Produces exactly the same hull as the
/// [monotone chain](super::monotone_chain::convex_hull) algorithm: counter-clockwise,
/// starting at the lowest x coordinate, colinear boundary points excluded.
///
/// # Errors
/// Will return an error iff a coordinate is NaN or infinite.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All vertices in the hull are from the input set.
///
/// # Time complexity
/// $O(nh)$ where h is the number of vertices on the hull.
///
/// # Examples
///
/// ```rust
/// # use rhull::algorithms::convex_hull::gift_wrapping::convex_hull;
/// # use rhull::data::Point;
/// let dups = vec![Point::new([1., 2.])].repeat(3);
/// assert_eq!(convex_hull(&dups).unwrap().as_slice(), &[Point::new([1., 2.])]);
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Gift_wrapping_algorithm
pub fn convex_hull<T>(points: &[Point<T>]) -> Result<Hull<T>, Error>
where
  T: HullScalar,
{
  Ok(GiftWrapping::new(points)?.into_hull())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
  Start,
  Walk,
  Finish,
  Done,
}

enum Advance<T> {
  Selected(Point<T>),
  Finished(Hull<T>),
}

/// Gift wrapping as a lazy sequence of [`Step`]s.
///
/// One [`Step::Wrap`] is emitted for the start vertex and one for every
/// subsequent vertex selected, followed by a single [`Step::Finished`].
/// A vertex is never selected twice, so the walk takes at most as many steps
/// as there are distinct points.
#[derive(Debug, Clone)]
pub struct GiftWrapping<T> {
  points: Vec<Point<T>>,
  selected: Vec<bool>,
  hull: Vec<Point<T>>,
  start: usize,
  current: usize,
  phase: Phase,
}

impl<T> GiftWrapping<T>
where
  T: HullScalar,
{
  /// # Errors
  /// Will return an error iff a coordinate is NaN or infinite.
  pub fn new(points: &[Point<T>]) -> Result<GiftWrapping<T>, Error> {
    validate_points(points)?;
    let points = normalize(points);
    debug!("gift wrapping: {} distinct points", points.len());
    let (start, phase) = match leftmost_point_index(&points) {
      Some(start) if points.len() > 1 => (start, Phase::Start),
      _ => (0, Phase::Finish),
    };
    Ok(GiftWrapping {
      selected: vec![false; points.len()],
      hull: Vec::new(),
      points,
      start,
      current: start,
      phase,
    })
  }

  /// Vertices selected so far.
  pub fn partial_hull(&self) -> &[Point<T>] {
    &self.hull
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

  // Select exactly one vertex, or finish.
  fn advance(&mut self) -> Option<Advance<T>> {
    loop {
      match self.phase {
        Phase::Start => {
          self.phase = Phase::Walk;
          return Some(Advance::Selected(self.select(self.start)));
        }
        Phase::Walk => {
          let next = self.next_vertex(self.current);
          if next == self.start {
            self.phase = Phase::Finish;
          } else {
            return Some(Advance::Selected(self.select(next)));
          }
        }
        Phase::Finish => {
          self.phase = Phase::Done;
          let hull = if self.points.len() <= 1 {
            Hull::new_unchecked(mem::take(&mut self.points))
          } else {
            let walk = mem::take(&mut self.hull);
            let walked = walk.len();
            let hull = Hull::from_walk(&self.points, walk);
            if hull.len() < walked {
              // Orientations within tolerance of zero are not transitive.
              warn!(
                "gift wrapping: walk of {} vertices was not convex, kept {}",
                walked,
                hull.len()
              );
            }
            hull
          };
          debug!("gift wrapping: {} hull vertices", hull.len());
          return Some(Advance::Finished(hull));
        }
        Phase::Done => return None,
      }
    }
  }

  fn select(&mut self, index: usize) -> Point<T> {
    let vertex = self.points[index];
    self.selected[index] = true;
    self.hull.push(vertex);
    self.current = index;
    vertex
  }

  // The start closes the walk. Every other vertex can be selected once.
  fn is_candidate(&self, index: usize) -> bool {
    index == self.start || !self.selected[index]
  }

  // Index of the point q such that no point lies strictly right of p->q.
  // Colinear candidates ahead of p are resolved in favour of the one farthest
  // from p.
  fn next_vertex(&self, p: usize) -> usize {
    let n = self.points.len();
    let pts = &self.points;
    let mut q = (1..n)
      .map(|k| (p + k) % n)
      .find(|&i| self.is_candidate(i))
      .unwrap_or(self.start);
    for r in 0..n {
      if r == p || r == q || !self.is_candidate(r) {
        continue;
      }
      let replace = match Point::orient(&pts[p], &pts[q], &pts[r]) {
        Orientation::ClockWise => true,
        Orientation::CoLinear => {
          is_ahead(&pts[p], &pts[q], &pts[r])
            && pts[p].cmp_distance_to(&pts[r], &pts[q]) == Ordering::Greater
        }
        Orientation::CounterClockWise => false,
      };
      if replace {
        q = r;
      }
    }
    q
  }
}

// `r` lies on the same side of `p` as `q`.
fn is_ahead<T: HullScalar>(p: &Point<T>, q: &Point<T>, r: &Point<T>) -> bool {
  let dot = (q[0] - p[0]) * (r[0] - p[0]) + (q[1] - p[1]) * (r[1] - p[1]);
  dot > T::zero()
}

impl<T> Iterator for GiftWrapping<T>
where
  T: HullScalar,
{
  type Item = Step<T>;

  fn next(&mut self) -> Option<Step<T>> {
    let step = match self.advance()? {
      Advance::Selected(vertex) => Step::Wrap {
        vertex,
        hull: self.hull.clone(),
      },
      Advance::Finished(hull) => Step::Finished(hull),
    };
    trace!("gift wrapping step: {:?}", step);
    Some(step)
  }
}

impl<T: HullScalar> std::iter::FusedIterator for GiftWrapping<T> {}

// Smallest x, ties broken by smallest y.
// O(n)
fn leftmost_point_index<T>(pts: &[Point<T>]) -> Option<usize>
where
  T: HullScalar,
{
  pts
    .iter()
    .enumerate()
    .min_by(|(_, a), (_, b)| a.cmp_xy(b))
    .map(|(index, _)| index)
}
