use super::Color;

/// Hue / saturation / lightness triple.
///
/// - `h` in degrees, `[0, 360)`
/// - `s`, `l` in `[0, 1]`
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Converts back to 8-bit RGB, rounding each channel half away from zero.
    pub fn to_color(self, a: u8) -> Color {
        let Hsl { h, s, l } = self;

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            let t = h / 360.0;
            (
                hue_to_rgb(p, q, t + 1.0 / 3.0),
                hue_to_rgb(p, q, t),
                hue_to_rgb(p, q, t - 1.0 / 3.0),
            )
        };

        Color::rgba(to_channel(r), to_channel(g), to_channel(b), a)
    }
}

#[inline]
fn to_channel(v: f64) -> u8 {
    // `as` saturates, so out-of-range inputs clamp to 0..=255.
    (v * 255.0).round() as u8
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
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

impl Color {
    /// Converts RGB to HSL. Gray colors (max == min) yield `h = 0, s = 0`.
    /// Alpha is ignored.
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g.max(b));
        let min = r.min(g.min(b));
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl::new(0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

        let mut h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        h /= 6.0;

        Hsl::new(h * 360.0, s, l)
    }

    #[inline]
    pub fn from_hsl(h: f64, s: f64, l: f64, a: u8) -> Self {
        Hsl::new(h, s, l).to_color(a)
    }

    /// Scales lightness toward 0 by `factor` (`0` = unchanged, `1` = black).
    pub fn darken(self, factor: f64) -> Self {
        let mut hsl = self.to_hsl();
        hsl.l = (hsl.l * (1.0 - factor)).max(0.0);
        hsl.to_color(self.a)
    }

    /// Moves lightness toward 1 by `factor` (`0` = unchanged, `1` = white).
    pub fn lighten(self, factor: f64) -> Self {
        let mut hsl = self.to_hsl();
        hsl.l = (hsl.l + (1.0 - hsl.l) * factor).min(1.0);
        hsl.to_color(self.a)
    }

    /// Shifts hue by `degrees`, wrapped into `[0, 360)`.
    pub fn adjust_hue(self, degrees: f64) -> Self {
        let mut hsl = self.to_hsl();
        hsl.h = (hsl.h + degrees).rem_euclid(360.0);
        hsl.to_color(self.a)
    }

    /// Multiplies saturation by `factor`, clamped to `[0, 1]`.
    pub fn adjust_saturation(self, factor: f64) -> Self {
        let mut hsl = self.to_hsl();
        hsl.s = (hsl.s * factor).clamp(0.0, 1.0);
        hsl.to_color(self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);
    const GREEN: Color = Color::rgb(0, 255, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // ── to_hsl ────────────────────────────────────────────────────────────

    #[test]
    fn primaries_to_hsl() {
        let red = RED.to_hsl();
        assert!(approx(red.h, 0.0) && approx(red.s, 1.0) && approx(red.l, 0.5));
        assert!(approx(GREEN.to_hsl().h, 120.0));
        assert!(approx(BLUE.to_hsl().h, 240.0));
    }

    #[test]
    fn gray_has_no_hue_or_saturation() {
        let hsl = Color::rgb(128, 128, 128).to_hsl();
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 0.0);
        assert!(approx(hsl.l, 128.0 / 255.0));
    }

    #[test]
    fn magenta_hue_wraps_below_360() {
        // max == r and g < b takes the +6 branch.
        let hsl = Color::rgb(255, 0, 128).to_hsl();
        assert!(hsl.h > 300.0 && hsl.h < 360.0, "{hsl:?}");
    }

    // ── from_hsl ──────────────────────────────────────────────────────────

    #[test]
    fn from_hsl_primaries() {
        assert_eq!(Color::from_hsl(0.0, 1.0, 0.5, 255), RED);
        assert_eq!(Color::from_hsl(120.0, 1.0, 0.5, 255), GREEN);
        assert_eq!(Color::from_hsl(240.0, 1.0, 0.5, 255), BLUE);
    }

    #[test]
    fn gray_round_trips() {
        for v in [0u8, 1, 64, 128, 200, 255] {
            let c = Color::rgba(v, v, v, 77);
            assert_eq!(c.to_hsl().to_color(c.a), c);
        }
    }

    // ── adjustments ───────────────────────────────────────────────────────

    #[test]
    fn darken_halves_lightness() {
        // l: 0.5 -> 0.25, red channel 127.5 rounds away from zero.
        assert_eq!(RED.darken(0.5), Color::rgb(128, 0, 0));
        assert_eq!(RED.darken(1.0), Color::BLACK);
    }

    #[test]
    fn lighten_fully_is_white() {
        assert_eq!(RED.lighten(1.0), Color::WHITE);
        assert_eq!(RED.lighten(0.0), RED);
    }

    #[test]
    fn adjust_hue_wraps_both_directions() {
        assert_eq!(RED.adjust_hue(120.0), GREEN);
        assert_eq!(RED.adjust_hue(-120.0), BLUE);
        assert_eq!(RED.adjust_hue(360.0), RED);
    }

    #[test]
    fn desaturate_to_gray() {
        assert_eq!(RED.adjust_saturation(0.0), Color::rgb(128, 128, 128));
        assert_eq!(RED.adjust_saturation(4.0), RED);
    }

    #[test]
    fn adjustments_pass_alpha_through() {
        let c = Color::rgba(200, 40, 90, 17);
        assert_eq!(c.darken(0.3).a, 17);
        assert_eq!(c.lighten(0.3).a, 17);
        assert_eq!(c.adjust_hue(45.0).a, 17);
        assert_eq!(c.adjust_saturation(0.5).a, 17);
    }
}
