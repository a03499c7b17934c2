use std::str::FromStr;

use crate::{error::ParseError, font};

/// An opaque RGB color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const CYAN: Self = Self::new(0, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    const fn rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl FromStr for Rgb {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::Color(s.to_owned());
        let channels = s
            .split(',')
            .map(|part| part.trim().parse::<u8>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;
        match channels[..] {
            [r, g, b] => Ok(Self::new(r, g, b)),
            _ => Err(invalid()),
        }
    }
}

/// A CPU-side RGBA8 pixel surface.
///
/// All drawing operations clip against the surface bounds, so callers may
/// pass coordinates that lie partially or entirely outside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    #[must_use]
    pub fn new(width: u32, height: u32, color: Rgb) -> Self {
        let mut pixmap = Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        };
        pixmap.fill(color);
        pixmap
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major without padding.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !(0..self.width as i32).contains(&x) || !(0..self.height as i32).contains(&y) {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }

    #[must_use]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        self.index(x, y).map(|i| Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.data[i..i + 4].copy_from_slice(&color.rgba());
        }
    }

    pub fn fill(&mut self, color: Rgb) {
        let rgba = color.rgba();
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Horizontal span from `x0` to `x1` inclusive.
    fn hline(&mut self, x0: i32, x1: i32, y: i32, color: Rgb) {
        if !(0..self.height as i32).contains(&y) {
            return;
        }
        let start = x0.max(0);
        let end = x1.min(self.width as i32 - 1);
        if start > end {
            return;
        }
        let rgba = color.rgba();
        let row = y as usize * self.width as usize;
        let from = (row + start as usize) * 4;
        let to = (row + end as usize + 1) * 4;
        for px in self.data[from..to].chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb) {
        if width == 0 {
            return;
        }
        for row in y..y + height as i32 {
            self.hline(x, x + width as i32 - 1, row, color);
        }
    }

    /// One pixel wide rectangle outline.
    pub fn stroke_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb) {
        if width == 0 || height == 0 {
            return;
        }
        let right = x + width as i32 - 1;
        let bottom = y + height as i32 - 1;
        self.hline(x, right, y, color);
        self.hline(x, right, bottom, color);
        for row in y..=bottom {
            self.set_pixel(x, row, color);
            self.set_pixel(right, row, color);
        }
    }

    /// Filled disk of every pixel within `radius` of the center.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: u32, color: Rgb) {
        let r = radius as i32;
        let r_sq = i64::from(r) * i64::from(r);
        for dy in -r..=r {
            let remaining = r_sq - i64::from(dy) * i64::from(dy);
            let half = (remaining as f64).sqrt() as i32;
            self.hline(cx - half, cx + half, cy + dy, color);
        }
    }

    /// Copy `src` onto this surface with its top-left corner at (`x`, `y`).
    pub fn blit(&mut self, src: &Self, x: i32, y: i32) {
        let x0 = x.max(0);
        let x1 = (x + src.width as i32).min(self.width as i32);
        if x0 >= x1 {
            return;
        }
        let span = (x1 - x0) as usize * 4;
        let src_col = (x0 - x) as usize;
        for sy in 0..src.height as i32 {
            let dy = y + sy;
            if !(0..self.height as i32).contains(&dy) {
                continue;
            }
            let src_start = (sy as usize * src.width as usize + src_col) * 4;
            let dst_start = (dy as usize * self.width as usize + x0 as usize) * 4;
            self.data[dst_start..dst_start + span]
                .copy_from_slice(&src.data[src_start..src_start + span]);
        }
    }

    /// Draw `text` with the bitmap font, each font pixel becoming a
    /// `scale` x `scale` block. Characters without a glyph leave a gap.
    pub fn draw_text(&mut self, text: &str, x: i32, y: i32, scale: u32, color: Rgb) {
        let step = (font::ADVANCE * scale) as i32;
        for (i, ch) in text.chars().enumerate() {
            let Some(rows) = font::glyph(ch) else {
                continue;
            };
            let origin_x = x + i as i32 * step;
            for (row, bits) in rows.into_iter().enumerate() {
                for col in 0..font::GLYPH_WIDTH {
                    if (bits >> (font::GLYPH_WIDTH - 1 - col)) & 1 == 1 {
                        self.fill_rect(
                            origin_x + (col * scale) as i32,
                            y + row as i32 * scale as i32,
                            scale,
                            scale,
                            color,
                        );
                    }
                }
            }
        }
    }
}
