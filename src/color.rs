//! Color helpers for RGBA values and HSL conversion.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, UtilError};
use crate::math::round_to_pos;

static RGB_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^rgba?\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*(,\s*[\d.]+)?\s*\)")
        .expect("rgb pattern is valid")
});

pub const WHITE: Rgba = Rgba::new(255, 255, 255, 1.0);
pub const TEXT_ON_LIGHT: Rgba = Rgba::new(1, 1, 1, 1.0);
pub const TEXT_ON_DARK: Rgba = Rgba::new(231, 231, 231, 1.0);

/// Hue, saturation and lightness, each in 0..1.
pub type Hsl = (f64, f64, f64);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// CSS representation; a missing color is `transparent`.
pub fn color_to_str(color: Option<&Rgba>) -> String {
    match color {
        Some(c) => c.to_string(),
        None => "transparent".to_string(),
    }
}

/// Pick a readable text color for the given background (white when absent).
pub fn text_color_from_bg(bg: Option<&Rgba>) -> Rgba {
    let color = bg.copied().unwrap_or(WHITE);
    let lum = 0.2126 * color.r as f64 + 0.7152 * color.g as f64 + 0.0722 * color.b as f64;
    if lum > 128.0 {
        TEXT_ON_LIGHT
    } else {
        TEXT_ON_DARK
    }
}

/// Scale the RGB channels by `value`: 1 keeps the color, 1.5 adds 50 %,
/// 0.5 removes 50 %. Channels saturate at 255; alpha is untouched.
pub fn luminosity(value: f64, color: &Rgba) -> Result<Rgba> {
    if value < 0.0 {
        return Err(UtilError::NegativeLuminosity(value));
    }
    let scale = |c: u8| (c as f64 * value).min(255.0).round() as u8;
    Ok(Rgba::new(
        scale(color.r),
        scale(color.g),
        scale(color.b),
        color.a,
    ))
}

/// Parse `#rrggbb`, `rgb(r, g, b)` or `rgba(r, g, b, a)`. The alpha of the
/// input is ignored in favor of `opacity`, rounded to one decimal.
pub fn import_color(opacity: f64, color: &str) -> Result<Rgba> {
    let alpha = round_to_pos(opacity, 1);
    let fail = || {
        tracing::warn!(color, "unrecognized color");
        UtilError::ColorImport(color.to_string())
    };

    if let Some(hex) = color.strip_prefix('#') {
        let channel = |pos: usize| {
            hex.get(2 * pos..2 * pos + 2)
                .and_then(|v| u8::from_str_radix(v, 16).ok())
        };
        return match (channel(0), channel(1), channel(2)) {
            (Some(r), Some(g), Some(b)) => Ok(Rgba::new(r, g, b, alpha)),
            _ => Err(fail()),
        };
    }

    let caps = RGB_PATTERN.captures(color).ok_or_else(fail)?;
    let channel = |idx: usize| caps.get(idx).and_then(|m| m.as_str().parse::<u8>().ok());
    match (channel(1), channel(2), channel(3)) {
        (Some(r), Some(g), Some(b)) => Ok(Rgba::new(r, g, b, alpha)),
        _ => Err(fail()),
    }
}

fn hue_to_rgb(m1: f64, m2: f64, mut h: f64) -> f64 {
    if h < 0.0 {
        h += 1.0;
    } else if h > 1.0 {
        h -= 1.0;
    }
    if 6.0 * h < 1.0 {
        return m1 + (m2 - m1) * 6.0 * h;
    }
    if 2.0 * h < 1.0 {
        return m2;
    }
    if 3.0 * h < 2.0 {
        return m1 + (m2 - m1) * (2.0 / 3.0 - h) * 6.0;
    }
    m1
}

/// HSL (all components 0..1) to an opaque RGBA color.
/// See <https://www.w3.org/TR/css-color-3/#hsl-color>.
pub fn hsl_to_rgb((hue, sat, lgt): Hsl) -> Rgba {
    let m2 = if lgt < 0.5 {
        lgt * (1.0 + sat)
    } else {
        lgt + sat - lgt * sat
    };
    let m1 = 2.0 * lgt - m2;
    let norm = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;

    Rgba::new(
        norm(hue_to_rgb(m1, m2, hue + 1.0 / 3.0)),
        norm(hue_to_rgb(m1, m2, hue)),
        norm(hue_to_rgb(m1, m2, hue - 1.0 / 3.0)),
        1.0,
    )
}

pub fn rgb_to_hsl(color: &Rgba) -> Hsl {
    let [nr, ng, nb] = color.channels().map(|c| c as f64 / 255.0);
    let min = nr.min(ng).min(nb);
    let max = nr.max(ng).max(nb);
    let delta = max - min;
    let lum = (max + min) / 2.0;

    if delta == 0.0 {
        return (0.0, 0.0, lum);
    }

    let sat = delta / (1.0 - (2.0 * lum - 1.0).abs());
    let mut top = 0;
    for (idx, c) in color.channels().iter().enumerate() {
        if *c > color.channels()[top] {
            top = idx;
        }
    }
    let sector = match top {
        0 => (ng - nb) / delta + if ng < nb { 6.0 } else { 0.0 },
        1 => 2.0 + (nb - nr) / delta,
        _ => 4.0 + (nr - ng) / delta,
    };

    (sector / 6.0, sat, lum)
}

#[cfg(test)]
mod tests {
    use super::{Rgba, hue_to_rgb};

    #[test]
    fn hue_wraps_into_unit_range() {
        assert_eq!(hue_to_rgb(0.0, 1.0, -0.5), hue_to_rgb(0.0, 1.0, 0.5));
        assert_eq!(hue_to_rgb(0.0, 1.0, 1.25), hue_to_rgb(0.0, 1.0, 0.25));
    }

    #[test]
    fn channels_follow_field_order() {
        assert_eq!(Rgba::new(1, 2, 3, 0.5).channels(), [1, 2, 3]);
    }
}
