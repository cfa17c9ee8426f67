use super::{Mode, Progress};
use crate::data::{Edge, Point};

/// Borrowed view of a [`StepDriver`](super::StepDriver), pulled once per
/// rendered frame.
#[derive(Debug, Clone)]
pub struct Frame<'a, T> {
  pub mode: Mode,
  pub points: &'a [Point<T>],
  /// Candidate under consideration. `None` in setup and after the last step.
  pub current_edge: Option<&'a Edge<T>>,
  pub hull_edges: &'a [Edge<T>],
  pub hull_vertices: Vec<&'a Point<T>>,
  pub progress: Progress,
}

impl<T> Frame<'_, T> {
  /// Status line in the style of the classic demo: 1-based index of the
  /// candidate being shown.
  pub fn status(&self) -> String {
    match self.mode {
      Mode::Setup => format!("Setup: {} points", self.points.len()),
      Mode::Evaluating if self.progress.is_complete() => format!(
        "Done: {} hull edges out of {} candidates",
        self.hull_edges.len(),
        self.progress.total
      ),
      Mode::Evaluating => format!(
        "Step {}/{}",
        self.progress.evaluated + 1,
        self.progress.total
      ),
    }
  }
}
