//! Intensity-to-color mapping.
//!
//! Spectral magnitudes are mapped through an HSL ramp: both hue and
//! lightness follow the normalized intensity, so quiet bins come out dark
//! red-ish and loud bins sweep through the hue circle toward bright tones.

use image::Rgba;

/// Piecewise hue-to-channel helper of the standard HSL conversion.
fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Convert an HSL triple (each nominally in `0.0..=1.0`) to an opaque RGBA
/// pixel.
///
/// Hue wraps; saturation and lightness outside the nominal range are not
/// rejected. The final float-to-u8 conversion saturates, so out-of-gamut
/// channels pin to 0 or 255 instead of wrapping.
pub fn hsl_to_rgba(hue: f32, saturation: f32, lightness: f32) -> Rgba<u8> {
    let (r, g, b) = if saturation == 0.0 {
        // achromatic
        (lightness, lightness, lightness)
    } else {
        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        (
            hue_to_channel(p, q, hue + 1.0 / 3.0),
            hue_to_channel(p, q, hue),
            hue_to_channel(p, q, hue - 1.0 / 3.0),
        )
    };

    Rgba([
        (r * 255.0) as u8,
        (g * 255.0) as u8,
        (b * 255.0) as u8,
        255,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_saturation_is_achromatic() {
        for lightness in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let Rgba([r, g, b, a]) = hsl_to_rgba(0.3, 0.0, lightness);
            let expected = (lightness * 255.0) as u8;
            assert_eq!(r, expected);
            assert_eq!(g, expected);
            assert_eq!(b, expected);
            assert_eq!(a, 255);
        }
    }

    #[test]
    fn test_primary_hues_at_half_lightness() {
        assert_eq!(hsl_to_rgba(0.0, 1.0, 0.5), Rgba([255, 0, 0, 255]));
        assert_eq!(hsl_to_rgba(1.0 / 3.0, 1.0, 0.5), Rgba([0, 255, 0, 255]));
        assert_eq!(hsl_to_rgba(2.0 / 3.0, 1.0, 0.5), Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn test_lightness_extremes() {
        assert_eq!(hsl_to_rgba(0.4, 1.0, 0.0), Rgba([0, 0, 0, 255]));
        assert_eq!(hsl_to_rgba(0.4, 1.0, 1.0), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_out_of_gamut_saturates() {
        // The builder feeds intensities through unclamped. The floored
        // silence value (-1.5 for both hue and lightness) extrapolates far
        // past the gamut and every channel pins to 255.
        assert_eq!(hsl_to_rgba(-1.5, 1.0, -1.5), Rgba([255, 255, 255, 255]));
        // Lightness above one also pins to white.
        assert_eq!(hsl_to_rgba(0.2, 1.0, 3.0), Rgba([255, 255, 255, 255]));
    }
}
