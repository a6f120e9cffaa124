use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data via props (struct fields), borrowed from `App`
/// for the duration of one frame, and render to a `Frame` within a given
/// `Rect`.
///
/// `render` takes `&mut self` so stateful widgets (list selection) can be
/// driven from inside the component.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
