//! Light colour helpers
//!
//! Colours are 8-bit RGB triples. Blending works in floating point so that
//! a transition can be sampled at any progress value.

mod kelvin;

pub use kelvin::kelvin_to_rgb;
use smart_leds::RGB8;

use crate::transition::Interpolate;

pub type Rgb = RGB8;

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Blend two 8-bit channels, rounding to the nearest step
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn blend_channel(a: u8, b: u8, t: f32) -> u8 {
    let value = f32::from(a) + (f32::from(b) - f32::from(a)) * t;
    libm::roundf(value).clamp(0.0, 255.0) as u8
}

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `t` - Blend factor (0.0 = all a, 1.0 = all b)
pub fn blend_colors(a: Rgb, b: Rgb, t: f32) -> Rgb {
    Rgb {
        r: blend_channel(a.r, b.r, t),
        g: blend_channel(a.g, b.g, t),
        b: blend_channel(a.b, b.b, t),
    }
}

/// Scale every channel by `factor`, saturating at full brightness
pub fn scale_color(color: Rgb, factor: f32) -> Rgb {
    let factor = factor.max(0.0);
    Rgb {
        r: blend_channel(0, color.r, factor),
        g: blend_channel(0, color.g, factor),
        b: blend_channel(0, color.b, factor),
    }
}

impl Interpolate for Rgb {
    fn interpolate(&self, end: &Self, t: f32) -> Self {
        blend_colors(*self, *end, t)
    }
}
