use log::debug;

use crate::{
    component::Component,
    event::{InputEvent, Key},
    pixmap::{Pixmap, Rgb},
    settings::{SettingField, SharedSettings},
};

/// Toggleable overlay for editing the pen radius and color.
///
/// `S` opens and closes it. While open, Up/Down move the selection and a
/// held Left/Right changes the selected value by one every update.
pub struct SettingsPanel {
    settings: SharedSettings,
    is_active: bool,
    selected: SettingField,
    left_held: bool,
    right_held: bool,
}

impl SettingsPanel {
    const WIDTH: u32 = 200;
    const SWATCH_HEIGHT: u32 = 100;
    const MARKER_WIDTH: u32 = 10;
    const MARKER_HEIGHT: u32 = 15;
    const FIELD_X: i32 = 10;
    const FIELD_TOP: i32 = 50;
    const FIELD_SPACING: i32 = 100;
    const FIELD_SCALE: u32 = 4;

    const BACKGROUND: Rgb = Rgb::BLACK;
    const TEXT: Rgb = Rgb::WHITE;
    const TEXT_SELECTED: Rgb = Rgb::CYAN;

    #[must_use]
    pub const fn new(settings: SharedSettings) -> Self {
        Self {
            settings,
            is_active: false,
            selected: SettingField::PenRadius,
            left_held: false,
            right_held: false,
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    #[must_use]
    pub const fn selected(&self) -> SettingField {
        self.selected
    }

    fn draw_marker(frame: &mut Pixmap) {
        frame.fill_rect(0, 0, Self::MARKER_WIDTH, Self::MARKER_HEIGHT, Self::BACKGROUND);
        frame.stroke_rect(0, 0, Self::MARKER_WIDTH, Self::MARKER_HEIGHT, Self::TEXT);
        frame.draw_text("S", 3, 4, 1, Self::TEXT);
    }

    fn draw_panel(&self, frame: &mut Pixmap) {
        let settings = self.settings.get();
        let height = frame.height();
        frame.fill_rect(0, 0, Self::WIDTH, height, Self::BACKGROUND);
        frame.fill_rect(
            0,
            height as i32 - Self::SWATCH_HEIGHT as i32,
            Self::WIDTH,
            Self::SWATCH_HEIGHT,
            settings.color(),
        );
        frame.stroke_rect(0, 0, Self::WIDTH, height, Self::TEXT);

        for field in SettingField::ALL {
            let color = if field == self.selected {
                Self::TEXT_SELECTED
            } else {
                Self::TEXT
            };
            let text = format!("{}: {}", field.label(), settings.get(field));
            let y = Self::FIELD_TOP + field.index() as i32 * Self::FIELD_SPACING;
            frame.draw_text(&text, Self::FIELD_X, y, Self::FIELD_SCALE, color);
        }
    }
}

impl Component for SettingsPanel {
    fn update(&mut self, _dt: f32) {
        if !self.is_active {
            return;
        }
        let mut settings = self.settings.get();
        if self.right_held {
            settings.increment(self.selected);
        } else if self.left_held {
            settings.decrement(self.selected);
        } else {
            return;
        }
        self.settings.set(settings);
    }

    fn draw(&self, frame: &mut Pixmap) {
        if self.is_active {
            self.draw_panel(frame);
        } else {
            Self::draw_marker(frame);
        }
    }

    fn handle_events(&mut self, events: &[InputEvent]) {
        for event in events {
            match *event {
                InputEvent::KeyDown(key) => {
                    if key == Key::S {
                        self.is_active = !self.is_active;
                        debug!("settings panel active: {}", self.is_active);
                    }
                    // A closed panel ignores the rest of the batch.
                    if !self.is_active {
                        break;
                    }
                    match key {
                        Key::Up => self.selected = self.selected.previous(),
                        Key::Down => self.selected = self.selected.next(),
                        Key::Right => self.right_held = true,
                        Key::Left => self.left_held = true,
                        Key::S => {}
                    }
                }
                InputEvent::KeyUp(Key::Right) => self.right_held = false,
                InputEvent::KeyUp(Key::Left) => self.left_held = false,
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    fn down(key: Key) -> InputEvent {
        InputEvent::KeyDown(key)
    }

    fn up(key: Key) -> InputEvent {
        InputEvent::KeyUp(key)
    }

    fn tick(panel: &mut SettingsPanel, times: usize) {
        for _ in 0..times {
            panel.update(1.0 / 30.0);
        }
    }

    #[test]
    fn toggles_with_s() {
        let mut panel = SettingsPanel::new(Settings::default().shared());
        assert!(!panel.is_active());
        panel.handle_events(&[down(Key::S)]);
        assert!(panel.is_active());
        panel.handle_events(&[up(Key::S), down(Key::S)]);
        assert!(!panel.is_active());
    }

    #[test]
    fn inactive_panel_ignores_adjustment() {
        let settings = Settings::default().shared();
        let mut panel = SettingsPanel::new(settings.clone());
        for _ in 0..5 {
            panel.handle_events(&[down(Key::Right)]);
            tick(&mut panel, 1);
            panel.handle_events(&[up(Key::Right)]);
        }
        assert_eq!(settings.get(), Settings::default());
        assert_eq!(panel.selected(), SettingField::PenRadius);
    }

    #[test]
    fn held_right_raises_selected_channel_once_per_tick() {
        let settings = Settings::default().shared();
        let mut panel = SettingsPanel::new(settings.clone());
        panel.handle_events(&[down(Key::S), down(Key::Down), down(Key::Right)]);
        assert_eq!(panel.selected(), SettingField::Red);
        tick(&mut panel, 3);
        panel.handle_events(&[up(Key::Right)]);
        tick(&mut panel, 3);
        assert_eq!(settings.get().red, 3);
        assert_eq!(settings.get().pen_radius, 10);
    }

    #[test]
    fn held_left_lowers_and_right_wins_when_both_held() {
        let settings = Settings::default().shared();
        let mut panel = SettingsPanel::new(settings.clone());
        panel.handle_events(&[down(Key::S), down(Key::Left)]);
        tick(&mut panel, 4);
        assert_eq!(settings.get().pen_radius, 6);

        panel.handle_events(&[down(Key::Right)]);
        tick(&mut panel, 2);
        assert_eq!(settings.get().pen_radius, 8);
    }

    #[test]
    fn radius_saturates_at_max() {
        let settings = Settings {
            pen_radius: 100,
            ..Settings::default()
        }
        .shared();
        let mut panel = SettingsPanel::new(settings.clone());
        panel.handle_events(&[down(Key::S), down(Key::Right)]);
        tick(&mut panel, 10);
        assert_eq!(settings.get().pen_radius, 100);
    }

    #[test]
    fn selection_wraps() {
        let mut panel = SettingsPanel::new(Settings::default().shared());
        panel.handle_events(&[down(Key::S), down(Key::Up)]);
        assert_eq!(panel.selected(), SettingField::Blue);
        panel.handle_events(&[down(Key::Down)]);
        assert_eq!(panel.selected(), SettingField::PenRadius);
    }

    #[test]
    fn closing_skips_rest_of_batch() {
        let mut panel = SettingsPanel::new(Settings::default().shared());
        panel.handle_events(&[down(Key::S), down(Key::Down)]);
        assert_eq!(panel.selected(), SettingField::Red);

        panel.handle_events(&[down(Key::S), down(Key::Down), down(Key::Down)]);
        assert!(!panel.is_active());
        assert_eq!(panel.selected(), SettingField::Red);
    }

    #[test]
    fn closed_panel_draws_only_marker() {
        let panel = SettingsPanel::new(Settings::default().shared());
        let grey = Rgb::new(128, 128, 128);
        let mut frame = Pixmap::new(300, 300, grey);
        panel.draw(&mut frame);
        assert_eq!(frame.pixel(0, 0), Some(Rgb::WHITE));
        assert_eq!(frame.pixel(1, 1), Some(Rgb::BLACK));
        assert_eq!(frame.pixel(10, 0), Some(grey));
        assert_eq!(frame.pixel(100, 100), Some(grey));
    }

    #[test]
    fn open_panel_shows_swatch_and_border() {
        let settings = Settings {
            red: 200,
            green: 100,
            blue: 50,
            ..Settings::default()
        }
        .shared();
        let mut panel = SettingsPanel::new(settings);
        panel.handle_events(&[down(Key::S)]);

        let grey = Rgb::new(128, 128, 128);
        let mut frame = Pixmap::new(300, 300, grey);
        panel.draw(&mut frame);
        assert_eq!(frame.pixel(100, 250), Some(Rgb::new(200, 100, 50)));
        assert_eq!(frame.pixel(199, 20), Some(Rgb::WHITE));
        assert_eq!(frame.pixel(150, 20), Some(Rgb::BLACK));
        assert_eq!(frame.pixel(250, 20), Some(grey));
    }

    #[test]
    fn selected_field_is_highlighted() {
        let mut panel = SettingsPanel::new(Settings::default().shared());
        panel.handle_events(&[down(Key::S)]);
        let mut frame = Pixmap::new(300, 600, Rgb::new(128, 128, 128));
        panel.draw(&mut frame);

        let cyan_rows = |frame: &Pixmap, top: i32| {
            (top..top + 28).any(|y| (10..190).any(|x| frame.pixel(x, y) == Some(Rgb::CYAN)))
        };
        assert!(cyan_rows(&frame, 50));
        assert!(!cyan_rows(&frame, 150));
    }
}
