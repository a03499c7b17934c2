use std::{cell::Cell, rc::Rc};

use crate::pixmap::Rgb;

/// Pen settings read by the canvas and edited through the settings panel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub pen_radius: u32,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// Settings handle shared between components on the UI thread.
pub type SharedSettings = Rc<Cell<Settings>>;

impl Default for Settings {
    fn default() -> Self {
        Self {
            pen_radius: 10,
            red: 0,
            green: 0,
            blue: 0,
        }
    }
}

impl Settings {
    pub const MIN_PEN_RADIUS: u32 = 1;
    pub const MAX_PEN_RADIUS: u32 = 100;

    #[must_use]
    pub fn shared(self) -> SharedSettings {
        Rc::new(Cell::new(self))
    }

    #[must_use]
    pub const fn color(&self) -> Rgb {
        Rgb::new(self.red, self.green, self.blue)
    }

    #[must_use]
    pub fn get(&self, field: SettingField) -> u32 {
        match field {
            SettingField::PenRadius => self.pen_radius,
            SettingField::Red => self.red.into(),
            SettingField::Green => self.green.into(),
            SettingField::Blue => self.blue.into(),
        }
    }

    fn channel_mut(&mut self, field: SettingField) -> Option<&mut u8> {
        match field {
            SettingField::PenRadius => None,
            SettingField::Red => Some(&mut self.red),
            SettingField::Green => Some(&mut self.green),
            SettingField::Blue => Some(&mut self.blue),
        }
    }

    fn set(&mut self, field: SettingField, value: u32) {
        let value = value.clamp(field.min(), field.max());
        match self.channel_mut(field) {
            // Clamped to at most u8::MAX above.
            Some(channel) => *channel = value as u8,
            None => self.pen_radius = value,
        }
    }

    /// Raise `field` by one, saturating at its maximum.
    pub fn increment(&mut self, field: SettingField) {
        self.set(field, self.get(field).saturating_add(1));
    }

    /// Lower `field` by one, saturating at its minimum.
    pub fn decrement(&mut self, field: SettingField) {
        self.set(field, self.get(field).saturating_sub(1));
    }
}

/// The adjustable settings, in panel order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SettingField {
    PenRadius,
    Red,
    Green,
    Blue,
}

impl SettingField {
    pub const ALL: [Self; 4] = [Self::PenRadius, Self::Red, Self::Green, Self::Blue];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        Self::from_index(self.index() + Self::ALL.len() - 1)
    }

    /// Single letter shown next to the value in the panel.
    #[must_use]
    pub const fn label(self) -> char {
        match self {
            Self::PenRadius => 'p',
            Self::Red => 'r',
            Self::Green => 'g',
            Self::Blue => 'b',
        }
    }

    #[must_use]
    pub const fn min(self) -> u32 {
        match self {
            Self::PenRadius => Settings::MIN_PEN_RADIUS,
            _ => 0,
        }
    }

    #[must_use]
    pub const fn max(self) -> u32 {
        match self {
            Self::PenRadius => Settings::MAX_PEN_RADIUS,
            _ => u8::MAX as u32,
        }
    }
}
