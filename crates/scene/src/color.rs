/// RGB color with components in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// Magnitude-driven hue ramp: hue 60° (yellow) at magnitude 0 sliding to
/// 0° (red) at magnitude 10, full saturation, 50% lightness.
pub fn magnitude_color(magnitude: f64) -> Rgb {
    let hue = (1.0 - magnitude / 10.0) * 60.0;
    hsl_to_rgb(hue, 1.0, 0.5)
}

/// Standard HSL to RGB conversion. Hue in degrees (any value, wrapped),
/// saturation and lightness in `[0, 1]`.
pub fn hsl_to_rgb(hue_deg: f64, saturation: f64, lightness: f64) -> Rgb {
    let h = hue_deg.rem_euclid(360.0);
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = lightness - c / 2.0;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::new(r + m, g + m, b + m)
}

#[cfg(test)]
mod tests {
    use super::{hsl_to_rgb, magnitude_color, Rgb};

    fn assert_rgb_close(a: Rgb, b: Rgb) {
        assert!((a.r - b.r).abs() < 1e-9, "{a:?} vs {b:?}");
        assert!((a.g - b.g).abs() < 1e-9, "{a:?} vs {b:?}");
        assert!((a.b - b.b).abs() < 1e-9, "{a:?} vs {b:?}");
    }

    #[test]
    fn magnitude_ten_is_red() {
        assert_rgb_close(magnitude_color(10.0), Rgb::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn magnitude_zero_is_yellow() {
        assert_rgb_close(magnitude_color(0.0), Rgb::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn magnitude_five_is_orange() {
        // Hue 30° => full red, half green.
        assert_rgb_close(magnitude_color(5.0), Rgb::new(1.0, 0.5, 0.0));
    }

    #[test]
    fn hue_wraps() {
        assert_rgb_close(hsl_to_rgb(360.0, 1.0, 0.5), hsl_to_rgb(0.0, 1.0, 0.5));
        assert_rgb_close(hsl_to_rgb(-120.0, 1.0, 0.5), hsl_to_rgb(240.0, 1.0, 0.5));
    }
}
