//! Convex hull construction, observable one mutation at a time.
//!
//! Both algorithms are exposed as iterators over [`Step`]s. Every step is an
//! independent copy of the algorithm's state at that moment and may be kept
//! after the iterator has moved on. The last item of every stream is a single
//! [`Step::Finished`] carrying the final hull.
use std::fmt;
use std::str::FromStr;

use crate::data::{Hull, Point};
use crate::{Error, HullScalar};

pub mod gift_wrapping;
pub mod monotone_chain;

use gift_wrapping::GiftWrapping;
use monotone_chain::MonotoneChain;

/// The two chains built by the monotone chain algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chain {
  Lower,
  Upper,
}

/// A single mutation of a chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChainEvent<T> {
  /// The point was appended to the chain.
  Push(Point<T>),
  /// The point was removed from the end of the chain because it broke convexity.
  Pop(Point<T>),
}

impl<T: Copy> ChainEvent<T> {
  pub fn point(&self) -> Point<T> {
    match self {
      ChainEvent::Push(pt) | ChainEvent::Pop(pt) => *pt,
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Step<T> {
  /// Monotone chain: `event` was just applied to `chain`. Both chains are
  /// snapshots taken after the mutation. The upper chain is empty while the
  /// lower chain is being built.
  Chains {
    chain: Chain,
    event: ChainEvent<T>,
    lower: Vec<Point<T>>,
    upper: Vec<Point<T>>,
  },
  /// Gift wrapping: `vertex` was selected as the next hull vertex. `hull` is
  /// the partial hull including `vertex`.
  Wrap {
    vertex: Point<T>,
    hull: Vec<Point<T>>,
  },
  /// Terminal step.
  Finished(Hull<T>),
}

impl<T> Step<T> {
  pub fn is_finished(&self) -> bool {
    matches!(self, Step::Finished(_))
  }

  pub fn into_hull(self) -> Option<Hull<T>> {
    match self {
      Step::Finished(hull) => Some(hull),
      _ => None,
    }
  }

  /// Payload in the `(lower, upper)` shape expected by progress sinks.
  /// Partial and final hulls are reported as a lower chain with an empty
  /// upper chain.
  pub fn into_chains(self) -> (Vec<Point<T>>, Vec<Point<T>>) {
    match self {
      Step::Chains { lower, upper, .. } => (lower, upper),
      Step::Wrap { hull, .. } => (hull, Vec::new()),
      Step::Finished(hull) => (hull.into_vec(), Vec::new()),
    }
  }
}

/// Consume a step stream and return the hull carried by its terminal step.
pub fn finish<T, I>(mut steps: I) -> Hull<T>
where
  I: Iterator<Item = Step<T>>,
{
  steps.find_map(Step::into_hull).unwrap_or_else(Hull::empty)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
  /// Andrew's monotone chain. $O(n \log n)$
  #[default]
  MonotoneChain,
  /// Jarvis march. $O(nh)$
  GiftWrapping,
}

impl Algorithm {
  pub const ALL: [Algorithm; 2] = [Algorithm::MonotoneChain, Algorithm::GiftWrapping];

  pub fn name(self) -> &'static str {
    match self {
      Algorithm::MonotoneChain => "monotone-chain",
      Algorithm::GiftWrapping => "gift-wrapping",
    }
  }

  /// Batch mode. Skips the step snapshots entirely.
  ///
  /// # Errors
  /// [`Error::InvalidInput`] if a coordinate is NaN or infinite.
  pub fn convex_hull<T>(self, points: &[Point<T>]) -> Result<Hull<T>, Error>
  where
    T: HullScalar,
  {
    match self {
      Algorithm::MonotoneChain => monotone_chain::convex_hull(points),
      Algorithm::GiftWrapping => gift_wrapping::convex_hull(points),
    }
  }

  /// Streaming mode.
  ///
  /// # Errors
  /// [`Error::InvalidInput`] if a coordinate is NaN or infinite.
  pub fn steps<T>(self, points: &[Point<T>]) -> Result<Steps<T>, Error>
  where
    T: HullScalar,
  {
    Ok(match self {
      Algorithm::MonotoneChain => Steps::MonotoneChain(MonotoneChain::new(points)?),
      Algorithm::GiftWrapping => Steps::GiftWrapping(GiftWrapping::new(points)?),
    })
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Unknown convex hull algorithm: {:?}", self.0)
  }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
  type Err = UnknownAlgorithm;
  fn from_str(s: &str) -> Result<Algorithm, UnknownAlgorithm> {
    match s.trim().to_ascii_lowercase().as_str() {
      "monotone-chain" | "monotone_chain" | "andrew" => Ok(Algorithm::MonotoneChain),
      "gift-wrapping" | "gift_wrapping" | "jarvis" => Ok(Algorithm::GiftWrapping),
      _ => Err(UnknownAlgorithm(s.to_string())),
    }
  }
}

/// Step stream of either algorithm.
#[derive(Debug, Clone)]
pub enum Steps<T> {
  MonotoneChain(MonotoneChain<T>),
  GiftWrapping(GiftWrapping<T>),
}

impl<T: HullScalar> Steps<T> {
  /// Run the remaining computation without producing snapshots.
  pub fn into_hull(self) -> Hull<T> {
    match self {
      Steps::MonotoneChain(chain) => chain.into_hull(),
      Steps::GiftWrapping(walk) => walk.into_hull(),
    }
  }
}

impl<T: HullScalar> Iterator for Steps<T> {
  type Item = Step<T>;
  fn next(&mut self) -> Option<Step<T>> {
    match self {
      Steps::MonotoneChain(chain) => chain.next(),
      Steps::GiftWrapping(walk) => walk.next(),
    }
  }
}

impl<T: HullScalar> std::iter::FusedIterator for Steps<T> {}
