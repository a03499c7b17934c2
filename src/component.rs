use crate::{event::InputEvent, pixmap::Pixmap};

/// A piece of the UI driven once per frame by the app loop.
///
/// Each frame the loop calls `handle_events` with every event gathered since
/// the previous frame, then `update`, then `draw`.
pub trait Component {
    fn update(&mut self, dt: f32);
    fn draw(&self, frame: &mut Pixmap);
    fn handle_events(&mut self, events: &[InputEvent]);
}
