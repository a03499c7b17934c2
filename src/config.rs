use std::{fmt, str::FromStr};

use clap::Parser;

use crate::{error::ParseError, pixmap::Rgb};

/// Width and height in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero, as for a minimized window.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl FromStr for Size {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::Size(s.to_owned());
        let (width, height) = s.split_once(|c| c == 'x' || c == 'X').ok_or_else(invalid)?;
        let width = width.trim().parse().map_err(|_| invalid())?;
        let height = height.trim().parse().map_err(|_| invalid())?;
        let size = Self::new(width, height);
        if size.is_empty() {
            return Err(invalid());
        }
        Ok(size)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Startup options. Nothing here changes once the window is open.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about = "Paint circles; S toggles settings")]
pub struct Config {
    /// Window background as `r,g,b`
    #[arg(long, default_value = "0,0,0")]
    pub bg_color: Rgb,

    /// Target frames per second
    #[arg(long, default_value_t = Config::DEFAULT_FPS, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// Paintable surface size as `WIDTHxHEIGHT`
    #[arg(long, default_value = "1000x1000")]
    pub canvas_size: Size,

    /// Window size as `WIDTHxHEIGHT`
    #[arg(long, default_value = "600x600")]
    pub window_size: Size,

    /// Window title
    #[arg(long, default_value = Config::DEFAULT_TITLE)]
    pub title: String,
}

impl Config {
    pub const DEFAULT_FPS: u32 = 30;
    pub const DEFAULT_TITLE: &'static str = "Canvas (S - settings)";
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bg_color: Rgb::BLACK,
            fps: Self::DEFAULT_FPS,
            canvas_size: Size::new(1000, 1000),
            window_size: Size::new(600, 600),
            title: Self::DEFAULT_TITLE.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sizes() {
        assert_eq!("640x480".parse::<Size>(), Ok(Size::new(640, 480)));
        assert_eq!(" 2 X 3".parse::<Size>(), Ok(Size::new(2, 3)));
        assert!("640".parse::<Size>().is_err());
        assert!("0x10".parse::<Size>().is_err());
        assert!("axb".parse::<Size>().is_err());
        assert_eq!(Size::new(7, 9).to_string(), "7x9");
    }

    #[test]
    fn minimized_window_size_is_empty() {
        assert!(Size::new(0, 0).is_empty());
        assert!(Size::new(600, 0).is_empty());
        assert!(Size::new(0, 600).is_empty());
        assert!(!Size::new(1, 1).is_empty());
    }

    #[test]
    fn defaults_match_parsed_defaults() {
        let parsed = Config::try_parse_from(["rusty_sketch"]).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn reads_every_option() {
        let parsed = Config::try_parse_from([
            "rusty_sketch",
            "--bg-color",
            "10,20,30",
            "--fps",
            "60",
            "--canvas-size",
            "320x200",
            "--window-size",
            "800x600",
            "--title",
            "sketch",
        ])
        .unwrap();
        assert_eq!(parsed.bg_color, Rgb::new(10, 20, 30));
        assert_eq!(parsed.fps, 60);
        assert_eq!(parsed.canvas_size, Size::new(320, 200));
        assert_eq!(parsed.window_size, Size::new(800, 600));
        assert_eq!(parsed.title, "sketch");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Config::try_parse_from(["rusty_sketch", "--fps", "0"]).is_err());
        assert!(Config::try_parse_from(["rusty_sketch", "--bg-color", "red"]).is_err());
        assert!(Config::try_parse_from(["rusty_sketch", "--canvas-size", "10"]).is_err());
    }
}
