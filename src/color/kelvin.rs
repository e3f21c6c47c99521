use super::Rgb;

/// Lower bound of the supported range, in hundreds of kelvin
const MIN_TEMP: f32 = 10.0;
/// Upper bound of the supported range, in hundreds of kelvin
const MAX_TEMP: f32 = 400.0;

/// Convert a Kelvin temperature to an RGB color
///
/// Supports temperatures between 1000K and 40000K; values outside are
/// clamped. Uses the Tanner Helland curve fit.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn kelvin_to_rgb(kelvin: u16) -> Rgb {
    let temp = (f32::from(kelvin) / 100.0).clamp(MIN_TEMP, MAX_TEMP);

    let red = if temp <= 66.0 {
        255.0
    } else {
        329.698_73 * libm::powf(temp - 60.0, -0.133_204_76)
    };

    let green = if temp <= 66.0 {
        99.470_8 * libm::logf(temp) - 161.119_57
    } else {
        288.122_17 * libm::powf(temp - 60.0, -0.075_514_85)
    };

    let blue = if temp >= 66.0 {
        255.0
    } else if temp <= 19.0 {
        0.0
    } else {
        138.517_73 * libm::logf(temp - 10.0) - 305.044_8
    };

    Rgb {
        r: red.clamp(0.0, 255.0) as u8,
        g: green.clamp(0.0, 255.0) as u8,
        b: blue.clamp(0.0, 255.0) as u8,
    }
}
