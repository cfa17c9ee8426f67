//! Incremental evaluation of the brute-force hull.
//!
//! The driver is in one of two modes. In [`Mode::Setup`] it collects points.
//! [`StepDriver::begin_evaluation`] freezes the points, generates every
//! candidate pair and switches to [`Mode::Evaluating`], where each call to
//! [`StepDriver::step`] checks exactly one candidate. [`StepDriver::reset`]
//! throws everything away.
//!
//! Requests that don't make sense in the current mode are ignored.
use log::{debug, trace};

use crate::algorithms::convex_hull::brute_force::{candidates, hull_vertices, is_hull_edge};
use crate::data::{Edge, Point};
use crate::HullScalar;

mod event;
mod frame;

pub use event::Event;
pub use frame::Frame;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
  /// Accepting points.
  Setup,
  /// Walking through the candidate edges.
  Evaluating,
}

/// How many candidates have been checked, out of how many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress {
  pub evaluated: usize,
  pub total: usize,
}

impl Progress {
  pub fn is_complete(&self) -> bool {
    self.evaluated == self.total
  }

  pub fn remaining(&self) -> usize {
    self.total - self.evaluated
  }
}

/// Outcome of a single [`StepDriver::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<T> {
  /// Nothing was evaluated: not evaluating, or every candidate is done.
  Idle,
  /// The candidate is a hull edge.
  Accepted(Edge<T>),
  /// The candidate is not a hull edge.
  Rejected(Edge<T>),
}

impl<T> Step<T> {
  pub fn is_idle(&self) -> bool {
    matches!(self, Step::Idle)
  }

  pub fn edge(&self) -> Option<&Edge<T>> {
    match self {
      Step::Idle => None,
      Step::Accepted(edge) | Step::Rejected(edge) => Some(edge),
    }
  }
}

#[derive(Debug, Clone)]
enum State<T> {
  Setup,
  Evaluating(Evaluation<T>),
}

#[derive(Debug, Clone)]
struct Evaluation<T> {
  // Never modified after creation.
  candidates: Vec<Edge<T>>,
  // Subset of `candidates`, in the order they were confirmed.
  hull: Vec<Edge<T>>,
  // 0 <= cursor <= candidates.len()
  cursor: usize,
}

impl<T> Evaluation<T> {
  fn current(&self) -> Option<&Edge<T>> {
    self.candidates.get(self.cursor)
  }
}

/// Owns the point set and the evaluation state.
#[derive(Debug, Clone)]
pub struct StepDriver<T> {
  points: Vec<Point<T>>,
  state: State<T>,
}

impl<T> Default for StepDriver<T> {
  fn default() -> Self {
    StepDriver {
      points: Vec::new(),
      state: State::Setup,
    }
  }
}

impl<T> FromIterator<Point<T>> for StepDriver<T> {
  fn from_iter<I: IntoIterator<Item = Point<T>>>(iter: I) -> Self {
    StepDriver {
      points: iter.into_iter().collect(),
      state: State::Setup,
    }
  }
}

// Read-only state.
impl<T> StepDriver<T> {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn mode(&self) -> Mode {
    match self.state {
      State::Setup => Mode::Setup,
      State::Evaluating(_) => Mode::Evaluating,
    }
  }

  /// Points in insertion order, duplicates included.
  pub fn points(&self) -> &[Point<T>] {
    &self.points
  }

  /// Every candidate pair. Empty in [`Mode::Setup`].
  pub fn candidates(&self) -> &[Edge<T>] {
    match &self.state {
      State::Setup => &[],
      State::Evaluating(eval) => &eval.candidates,
    }
  }

  /// The candidate the next [`step`](StepDriver::step) will check.
  pub fn current_edge(&self) -> Option<&Edge<T>> {
    match &self.state {
      State::Setup => None,
      State::Evaluating(eval) => eval.current(),
    }
  }

  /// Confirmed hull edges, in the order they were found.
  pub fn hull_edges(&self) -> &[Edge<T>] {
    match &self.state {
      State::Setup => &[],
      State::Evaluating(eval) => &eval.hull,
    }
  }

  pub fn cursor(&self) -> usize {
    match &self.state {
      State::Setup => 0,
      State::Evaluating(eval) => eval.cursor,
    }
  }

  pub fn total_candidates(&self) -> usize {
    self.candidates().len()
  }

  pub fn progress(&self) -> Progress {
    Progress {
      evaluated: self.cursor(),
      total: self.total_candidates(),
    }
  }

  /// Endpoints of the confirmed hull edges, without repeats.
  pub fn hull_vertices(&self) -> Vec<&Point<T>>
  where
    T: PartialEq,
  {
    hull_vertices(self.hull_edges())
  }

  /// Everything a renderer needs for one frame.
  pub fn frame(&self) -> Frame<'_, T>
  where
    T: PartialEq,
  {
    Frame {
      mode: self.mode(),
      points: self.points(),
      current_edge: self.current_edge(),
      hull_edges: self.hull_edges(),
      hull_vertices: self.hull_vertices(),
      progress: self.progress(),
    }
  }
}

// Transitions.
impl<T: HullScalar> StepDriver<T> {
  /// Append a point. Ignored while evaluating.
  pub fn add_point(&mut self, pt: Point<T>) {
    match self.state {
      State::Setup => {
        trace!("add point {:?}", pt);
        self.points.push(pt);
      }
      State::Evaluating(_) => trace!("ignoring point {:?} while evaluating", pt),
    }
  }

  /// Freeze the points and generate the candidates.
  ///
  /// Ignored while evaluating or when there are fewer than two points.
  pub fn begin_evaluation(&mut self) {
    match self.state {
      State::Evaluating(_) => trace!("already evaluating"),
      State::Setup if self.points.len() < 2 => {
        trace!("need two points to evaluate, have {}", self.points.len())
      }
      State::Setup => {
        let candidates = candidates(&self.points);
        debug!(
          "evaluating {} candidates from {} points",
          candidates.len(),
          self.points.len()
        );
        self.state = State::Evaluating(Evaluation {
          candidates,
          hull: Vec::new(),
          cursor: 0,
        });
      }
    }
  }

  /// Check the current candidate and advance past it.
  ///
  /// Exactly one candidate is checked per call. Returns [`Step::Idle`] in
  /// [`Mode::Setup`] and once every candidate has been checked.
  pub fn step(&mut self) -> Step<T> {
    let eval = match &mut self.state {
      State::Setup => return Step::Idle,
      State::Evaluating(eval) => eval,
    };
    let edge = match eval.current() {
      Some(edge) => edge.clone(),
      None => return Step::Idle,
    };
    let accepted = is_hull_edge(&edge, &self.points);
    eval.cursor += 1;
    trace!(
      "candidate {}/{} {:?}: {}",
      eval.cursor,
      eval.candidates.len(),
      edge,
      if accepted { "hull edge" } else { "rejected" }
    );
    if eval.cursor == eval.candidates.len() {
      debug!(
        "evaluation complete: {} hull edges out of {} candidates",
        eval.hull.len() + usize::from(accepted),
        eval.candidates.len()
      );
    }
    if accepted {
      eval.hull.push(edge.clone());
      Step::Accepted(edge)
    } else {
      Step::Rejected(edge)
    }
  }

  /// Step until every candidate has been checked. Returns the number of
  /// candidates checked by this call.
  pub fn finish(&mut self) -> usize {
    let mut steps = 0;
    while !self.step().is_idle() {
      steps += 1;
    }
    steps
  }

  /// Discard the points and any evaluation.
  pub fn reset(&mut self) {
    debug!("reset, dropping {} points", self.points.len());
    self.points.clear();
    self.state = State::Setup;
  }

  /// Apply an input event.
  ///
  /// [`Event::AdvanceRequested`] starts the evaluation in [`Mode::Setup`] and
  /// steps in [`Mode::Evaluating`].
  pub fn handle(&mut self, event: Event<T>) -> Step<T> {
    match event {
      Event::PointAdded(pt) => self.add_point(pt),
      Event::AdvanceRequested => match self.state {
        State::Setup => self.begin_evaluation(),
        State::Evaluating(_) => return self.step(),
      },
      Event::ResetRequested => self.reset(),
    }
    Step::Idle
  }
}
