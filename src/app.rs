use std::time::Instant;

use log::info;

use crate::{
    canvas::Canvas,
    clock::FrameClock,
    component::Component,
    config::Config,
    event::{InputEvent, Position},
    panel::SettingsPanel,
    pixmap::{Pixmap, Rgb},
    settings::{Settings, SharedSettings},
};

/// What the loop should do after a frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns the frame clock and the components, and drives them frame by frame.
///
/// Components are drawn in order, so the settings panel lands on top of the
/// canvas.
pub struct App {
    bg_color: Rgb,
    clock: FrameClock,
    settings: SharedSettings,
    components: Vec<Box<dyn Component>>,
    quit_requested: bool,
}

impl App {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let settings = Settings::default().shared();
        let components: Vec<Box<dyn Component>> = vec![
            Box::new(Canvas::new(
                Position::default(),
                config.canvas_size.width,
                config.canvas_size.height,
                settings.clone(),
            )),
            Box::new(SettingsPanel::new(settings.clone())),
        ];
        info!("canvas {} at {} fps", config.canvas_size, config.fps);
        Self {
            bg_color: config.bg_color,
            clock: FrameClock::new(config.fps),
            settings,
            components,
            quit_requested: false,
        }
    }

    /// Current pen settings.
    #[must_use]
    pub fn settings(&self) -> Settings {
        self.settings.get()
    }

    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        self.clock.is_due(now)
    }

    /// When the next frame should run.
    #[must_use]
    pub fn next_frame_at(&self, now: Instant) -> Instant {
        self.clock.next_deadline().unwrap_or(now)
    }

    /// Run one frame: dispatch `events`, update, then draw into `frame`.
    ///
    /// A quit event stops the frame before any component sees the batch.
    pub fn run_frame(&mut self, events: &[InputEvent], now: Instant, frame: &mut Pixmap) -> Flow {
        self.handle_events(events);
        if self.quit_requested {
            return Flow::Quit;
        }
        let dt = self.clock.tick(now);
        self.update(dt);
        self.draw(frame);
        Flow::Continue
    }
}

impl Component for App {
    fn update(&mut self, dt: f32) {
        for component in &mut self.components {
            component.update(dt);
        }
    }

    fn draw(&self, frame: &mut Pixmap) {
        frame.fill(self.bg_color);
        for component in &self.components {
            component.draw(frame);
        }
    }

    fn handle_events(&mut self, events: &[InputEvent]) {
        if events.contains(&InputEvent::Quit) {
            self.quit_requested = true;
            return;
        }
        for component in &mut self.components {
            component.handle_events(events);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{
        config::Size,
        event::{Key, MouseButton},
    };

    fn small_app() -> (App, Pixmap) {
        let config = Config {
            bg_color: Rgb::new(1, 2, 3),
            canvas_size: Size::new(100, 100),
            window_size: Size::new(300, 300),
            ..Config::default()
        };
        let frame = Pixmap::new(
            config.window_size.width,
            config.window_size.height,
            config.bg_color,
        );
        (App::new(&config), frame)
    }

    #[test]
    fn quit_stops_before_dispatch() {
        let (mut app, mut frame) = small_app();
        let flow = app.run_frame(
            &[InputEvent::KeyDown(Key::S), InputEvent::Quit],
            Instant::now(),
            &mut frame,
        );
        assert_eq!(flow, Flow::Quit);
        assert_eq!(frame.pixel(150, 150), Some(Rgb::new(1, 2, 3)));
    }

    #[test]
    fn frame_layers_background_canvas_and_marker() {
        let (mut app, mut frame) = small_app();
        let flow = app.run_frame(&[], Instant::now(), &mut frame);
        assert_eq!(flow, Flow::Continue);
        assert_eq!(frame.pixel(0, 0), Some(Rgb::WHITE));
        assert_eq!(frame.pixel(1, 1), Some(Rgb::BLACK));
        assert_eq!(frame.pixel(50, 50), Some(Rgb::WHITE));
        assert_eq!(frame.pixel(150, 150), Some(Rgb::new(1, 2, 3)));
    }

    #[test]
    fn panel_edits_reach_the_canvas() {
        let (mut app, mut frame) = small_app();
        let mut now = Instant::now();
        let mut step = |app: &mut App, events: &[InputEvent], frame: &mut Pixmap| {
            let flow = app.run_frame(events, now, frame);
            now += Duration::from_millis(40);
            flow
        };

        step(
            &mut app,
            &[
                InputEvent::KeyDown(Key::S),
                InputEvent::KeyDown(Key::Down),
                InputEvent::KeyDown(Key::Right),
            ],
            &mut frame,
        );
        step(&mut app, &[], &mut frame);
        step(
            &mut app,
            &[InputEvent::KeyUp(Key::Right), InputEvent::KeyDown(Key::S)],
            &mut frame,
        );
        assert_eq!(app.settings().red, 2);

        step(
            &mut app,
            &[
                InputEvent::CursorMoved(Position::new(50, 50)),
                InputEvent::MouseDown(MouseButton::Left),
            ],
            &mut frame,
        );
        assert_eq!(frame.pixel(50, 50), Some(Rgb::new(2, 0, 0)));
    }

    #[test]
    fn paces_frames() {
        let (mut app, mut frame) = small_app();
        let start = Instant::now();
        assert!(app.is_due(start));
        assert_eq!(app.next_frame_at(start), start);
        app.run_frame(&[], start, &mut frame);
        assert!(!app.is_due(start));
        assert!(app.next_frame_at(start) > start);
    }
}
