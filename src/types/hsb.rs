//! Hue/Saturation/Brightness colour model.

/// A colour in Hue/Saturation/Brightness form.
///
/// `h` is in degrees in `[0, 360)`, `s` and `v` are in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsb {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsb {
    /// Convert an RGB triple to HSB.
    ///
    /// Standard 6-sector conversion. The sector is chosen by the first
    /// channel that attains the maximum, compared in R, G, B order; when two
    /// channels tie, the earlier one wins. An achromatic colour (all
    /// channels equal) has hue 0, and pure black has saturation 0.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let rd = f64::from(r) / 255.0;
        let gd = f64::from(g) / 255.0;
        let bd = f64::from(b) / 255.0;

        let max_val = rd.max(gd).max(bd);
        let min_val = rd.min(gd).min(bd);
        let delta = max_val - min_val;

        let mut h = if delta == 0.0 {
            0.0
        } else if max_val == rd {
            60.0 * (((gd - bd) / delta) % 6.0)
        } else if max_val == gd {
            60.0 * (((bd - rd) / delta) + 2.0)
        } else {
            60.0 * (((rd - gd) / delta) + 4.0)
        };

        if h < 0.0 {
            h += 360.0;
        }

        let s = if max_val == 0.0 { 0.0 } else { delta / max_val };

        Self { h, s, v: max_val }
    }
}
