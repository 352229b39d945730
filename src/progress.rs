//! Delivering steps to observers.
//!
//! A [`ProgressSink`] is owned by the caller, typically an animation front-end
//! or a benchmark harness. [`Runner`] pulls steps from an algorithm and feeds
//! them to a sink, honouring a [`CancelFlag`] between steps.
//!
//! ```rust
//! # use rhull::data::{Hull, Point};
//! # use rhull::progress::{ProgressSink, Runner};
//! # use rhull::Algorithm;
//! #[derive(Default)]
//! struct Counter {
//!   updates: usize,
//!   hull: Option<Hull<f64>>,
//! }
//!
//! impl ProgressSink<f64> for Counter {
//!   fn on_chains_updated(&mut self, _lower: Vec<Point<f64>>, _upper: Vec<Point<f64>>) {
//!     self.updates += 1;
//!   }
//!   fn on_finished(&mut self, hull: Hull<f64>) {
//!     self.hull = Some(hull);
//!   }
//! }
//!
//! let pts = vec![Point::new([0., 0.]), Point::new([2., 0.]), Point::new([1., 1.])];
//! let mut sink = Counter::default();
//! let hull = Runner::new(Algorithm::GiftWrapping).run(&pts, &mut sink).unwrap();
//! assert_eq!(sink.updates, 3);
//! assert_eq!(sink.hull, Some(hull));
//! ```
use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::data::{Hull, Point};
use crate::{Algorithm, Error, HullScalar, Step};

/// Receiver of algorithm progress.
///
/// `on_chains_updated` is called once for every non-terminal step with copies
/// of the current chains. Gift wrapping reports its partial hull as `lower`
/// and an empty `upper`. `on_finished` is called exactly once per run, with an
/// empty hull if the run was aborted.
pub trait ProgressSink<T> {
  fn on_chains_updated(&mut self, lower: Vec<Point<T>>, upper: Vec<Point<T>>);
  fn on_finished(&mut self, hull: Hull<T>);
}

impl<T, S> ProgressSink<T> for &mut S
where
  S: ProgressSink<T> + ?Sized,
{
  fn on_chains_updated(&mut self, lower: Vec<Point<T>>, upper: Vec<Point<T>>) {
    (**self).on_chains_updated(lower, upper)
  }

  fn on_finished(&mut self, hull: Hull<T>) {
    (**self).on_finished(hull)
  }
}

/// Message sent by a [`ChannelSink`].
#[derive(Debug, Clone, PartialEq)]
pub enum Progress<T> {
  Chains {
    lower: Vec<Point<T>>,
    upper: Vec<Point<T>>,
  },
  Finished(Hull<T>),
}

/// Forwards progress to another thread.
///
/// A disconnected receiver is not an error: the algorithm keeps running and
/// the messages are dropped.
#[derive(Debug, Clone)]
pub struct ChannelSink<T> {
  sender: Sender<Progress<T>>,
}

impl<T> ChannelSink<T> {
  pub fn new(sender: Sender<Progress<T>>) -> ChannelSink<T> {
    ChannelSink { sender }
  }

  pub fn channel() -> (ChannelSink<T>, Receiver<Progress<T>>) {
    let (sender, receiver) = mpsc::channel();
    (ChannelSink::new(sender), receiver)
  }

  fn send(&self, msg: Progress<T>) {
    if self.sender.send(msg).is_err() {
      debug!("progress receiver disconnected");
    }
  }
}

impl<T> ProgressSink<T> for ChannelSink<T> {
  fn on_chains_updated(&mut self, lower: Vec<Point<T>>, upper: Vec<Point<T>>) {
    self.send(Progress::Chains { lower, upper })
  }

  fn on_finished(&mut self, hull: Hull<T>) {
    self.send(Progress::Finished(hull))
  }
}

/// Cancellation request shared between the caller and a running computation.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
  pub fn new() -> CancelFlag {
    CancelFlag::default()
  }

  pub fn cancel(&self) {
    self.0.store(true, Ordering::SeqCst)
  }

  pub fn is_cancelled(&self) -> bool {
    self.0.load(Ordering::SeqCst)
  }
}

/// Runs an algorithm and reports every step to a sink.
#[derive(Debug, Clone, Default)]
pub struct Runner {
  algorithm: Algorithm,
  step_delay: Option<Duration>,
  cancel: CancelFlag,
}

impl Runner {
  pub fn new(algorithm: Algorithm) -> Runner {
    Runner {
      algorithm,
      ..Runner::default()
    }
  }

  /// Pause after every delivered step. Used to pace animations. The delay
  /// never changes the result.
  #[must_use]
  pub fn with_step_delay(mut self, delay: Duration) -> Runner {
    self.step_delay = Some(delay);
    self
  }

  #[must_use]
  pub fn with_cancel_flag(mut self, cancel: CancelFlag) -> Runner {
    self.cancel = cancel;
    self
  }

  pub fn algorithm(&self) -> Algorithm {
    self.algorithm
  }

  /// Handle for cancelling runs started by this runner.
  pub fn cancel_flag(&self) -> CancelFlag {
    self.cancel.clone()
  }

  /// Compute the hull of `points`, reporting progress to `sink`.
  ///
  /// # Errors
  /// * [`Error::InvalidInput`] if a coordinate is NaN or infinite.
  /// * [`Error::Cancelled`] if the cancel flag was raised before the hull was complete.
  ///
  /// In both cases the sink receives an empty hull.
  pub fn run<T, S>(&self, points: &[Point<T>], mut sink: S) -> Result<Hull<T>, Error>
  where
    T: HullScalar,
    S: ProgressSink<T>,
  {
    debug!("running {} on {} points", self.algorithm, points.len());
    match self.algorithm.steps(points) {
      Ok(steps) => drive(steps, sink, &self.cancel, self.step_delay),
      Err(err) => {
        sink.on_finished(Hull::empty());
        Err(err)
      }
    }
  }
}

/// Feed `steps` into `sink` until the terminal step.
///
/// The cancel flag is checked once before every step.
///
/// # Errors
/// [`Error::Cancelled`] if the flag was raised.
pub fn drive<T, I, S>(
  steps: I,
  mut sink: S,
  cancel: &CancelFlag,
  step_delay: Option<Duration>,
) -> Result<Hull<T>, Error>
where
  T: Clone,
  I: IntoIterator<Item = Step<T>>,
  S: ProgressSink<T>,
{
  let mut steps = steps.into_iter();
  loop {
    if cancel.is_cancelled() {
      debug!("cancelled");
      sink.on_finished(Hull::empty());
      return Err(Error::Cancelled);
    }
    match steps.next() {
      Some(Step::Finished(hull)) => {
        sink.on_finished(hull.clone());
        return Ok(hull);
      }
      Some(step) => {
        let (lower, upper) = step.into_chains();
        sink.on_chains_updated(lower, upper);
        if let Some(delay) = step_delay {
          thread::sleep(delay);
        }
      }
      // Streams always end with a terminal step. Treat a truncated stream as aborted.
      None => {
        sink.on_finished(Hull::empty());
        return Err(Error::Cancelled);
      }
    }
  }
}
