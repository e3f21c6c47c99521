//! Directional light state
//!
//! The sampled value of a day/night transition: intensity, colour and the
//! light's orientation.

use crate::color::{Rgb, kelvin_to_rgb, scale_color};
use crate::math::{Quat, lerp};
use crate::transition::Interpolate;

/// Directional light settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightState {
    /// Light intensity multiplier
    pub intensity: f32,
    pub color: Rgb,
    pub rotation: Quat,
}

impl LightState {
    pub const fn new(intensity: f32, color: Rgb, rotation: Quat) -> Self {
        Self {
            intensity,
            color,
            rotation,
        }
    }

    /// Full daylight: bright, slightly warm white, sun high in the sky
    pub fn day() -> Self {
        Self::new(
            2.0,
            Rgb {
                r: 248,
                g: 245,
                b: 224,
            },
            Quat::from_euler_degrees(120.0, 50.0, 0.0),
        )
    }

    /// Dim blue moonlight, sun below the horizon
    pub fn night() -> Self {
        Self::new(
            0.2,
            Rgb {
                r: 38,
                g: 48,
                b: 89,
            },
            Quat::from_euler_degrees(-30.0, 50.0, 0.0),
        )
    }

    /// Light whose colour comes from a colour temperature
    pub fn from_kelvin(intensity: f32, kelvin: u16, rotation: Quat) -> Self {
        Self::new(intensity, kelvin_to_rgb(kelvin), rotation)
    }

    /// Colour as seen on a display, where `full_intensity` maps to the raw colour
    pub fn display_color(&self, full_intensity: f32) -> Rgb {
        if full_intensity <= 0.0 {
            return Rgb::default();
        }
        scale_color(self.color, self.intensity / full_intensity)
    }
}

impl Interpolate for LightState {
    fn interpolate(&self, end: &Self, t: f32) -> Self {
        Self {
            intensity: lerp(self.intensity, end.intensity, t),
            color: self.color.interpolate(&end.color, t),
            rotation: self.rotation.nlerp(end.rotation, t),
        }
    }
}
