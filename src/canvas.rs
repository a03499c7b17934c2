use log::{debug, trace};

use crate::{
    component::Component,
    event::{InputEvent, MouseButton, Position},
    pixmap::{Pixmap, Rgb},
    settings::SharedSettings,
};

/// The paintable surface and where it currently sits on screen.
///
/// Holding the left button stamps one pen-sized circle per update at the
/// cursor; holding the right button drags the surface around.
pub struct Canvas {
    surface: Pixmap,
    offset: Position,
    cursor: Position,
    last_pan_pos: Position,
    left_held: bool,
    right_held: bool,
    settings: SharedSettings,
}

impl Canvas {
    const BACKGROUND: Rgb = Rgb::WHITE;

    #[must_use]
    pub fn new(offset: Position, width: u32, height: u32, settings: SharedSettings) -> Self {
        Self {
            surface: Pixmap::new(width, height, Self::BACKGROUND),
            offset,
            cursor: Position::default(),
            last_pan_pos: Position::default(),
            left_held: false,
            right_held: false,
            settings,
        }
    }

    #[must_use]
    pub const fn surface(&self) -> &Pixmap {
        &self.surface
    }

    #[must_use]
    pub const fn offset(&self) -> Position {
        self.offset
    }

    /// Cursor position relative to the surface origin, if it lies on the surface.
    fn cursor_on_surface(&self) -> Option<Position> {
        let local = self.cursor - self.offset;
        let inside = (0..self.surface.width() as i32).contains(&local.x)
            && (0..self.surface.height() as i32).contains(&local.y);
        inside.then_some(local)
    }

    fn stamp(&mut self) {
        let Some(at) = self.cursor_on_surface() else {
            return;
        };
        let settings = self.settings.get();
        trace!("stamp r={} at ({}, {})", settings.pen_radius, at.x, at.y);
        self.surface
            .fill_circle(at.x, at.y, settings.pen_radius, settings.color());
    }

    fn pan(&mut self) {
        let delta = self.cursor - self.last_pan_pos;
        self.offset.x += delta.x;
        self.offset.y += delta.y;
        self.last_pan_pos = self.cursor;
    }
}

impl Component for Canvas {
    fn update(&mut self, _dt: f32) {
        if self.left_held {
            self.stamp();
        } else if self.right_held {
            self.pan();
        }
    }

    fn draw(&self, frame: &mut Pixmap) {
        frame.blit(&self.surface, self.offset.x, self.offset.y);
    }

    fn handle_events(&mut self, events: &[InputEvent]) {
        for event in events {
            match *event {
                InputEvent::CursorMoved(pos) => self.cursor = pos,
                InputEvent::MouseDown(MouseButton::Left) => self.left_held = true,
                InputEvent::MouseUp(MouseButton::Left) => self.left_held = false,
                InputEvent::MouseDown(MouseButton::Right) => {
                    debug!("pan started at ({}, {})", self.cursor.x, self.cursor.y);
                    self.right_held = true;
                    self.last_pan_pos = self.cursor;
                }
                InputEvent::MouseUp(MouseButton::Right) => {
                    debug!("pan ended, offset ({}, {})", self.offset.x, self.offset.y);
                    self.right_held = false;
                }
                // Middle button is reserved for zoom, which is not implemented.
                _ => {}
            }
        }
    }
}
