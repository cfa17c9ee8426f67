use crate::data::Point;

/// Input from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<T> {
  /// A point was placed, e.g. by a mouse click.
  PointAdded(Point<T>),
  /// Start the evaluation, or check the next candidate if already started.
  AdvanceRequested,
  /// Drop all points and start over.
  ResetRequested,
}

impl<T> From<Point<T>> for Event<T> {
  fn from(pt: Point<T>) -> Event<T> {
    Event::PointAdded(pt)
  }
}
