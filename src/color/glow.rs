use crate::color::hex::Rgb8;
use crate::foundation::math::lerp;

/// Colour plus opacity for a glowing sample.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GlowColor {
    /// Opaque colour.
    pub color: Rgb8,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
}

struct Stop {
    at: f64,
    color: Rgb8,
    alpha: f64,
}

// Band edges for the meteor glow: deep ember at 0, near-white at 1.
static STOPS: [Stop; 5] = [
    Stop {
        at: 0.0,
        color: Rgb8::new(40, 12, 4),
        alpha: 0.05,
    },
    Stop {
        at: 0.2,
        color: Rgb8::new(120, 40, 10),
        alpha: 0.3,
    },
    Stop {
        at: 0.5,
        color: Rgb8::new(220, 100, 30),
        alpha: 0.6,
    },
    Stop {
        at: 0.8,
        color: Rgb8::new(255, 190, 110),
        alpha: 0.85,
    },
    Stop {
        at: 1.0,
        color: Rgb8::new(255, 248, 235),
        alpha: 1.0,
    },
];

/// Map brightness to a glow colour.
///
/// Brightness is clamped to `[0, 1]` and falls in one of four bands,
/// `[0, 0.2)`, `[0.2, 0.5)`, `[0.5, 0.8)` and `[0.8, 1]`. Each band blends linearly between
/// its two edge stops. Neighbouring bands share their edge stop, so the mapping is continuous.
pub fn brightness_to_color(brightness: f64) -> GlowColor {
    let b = if brightness.is_nan() {
        0.0
    } else {
        brightness.clamp(0.0, 1.0)
    };

    let band = STOPS[1..STOPS.len() - 1]
        .iter()
        .take_while(|s| b >= s.at)
        .count();
    let (lo, hi) = (&STOPS[band], &STOPS[band + 1]);
    let t = (b - lo.at) / (hi.at - lo.at);

    GlowColor {
        color: lo.color.lerp(hi.color, t),
        alpha: lerp(lo.alpha, hi.alpha, t),
    }
}

/// HSL colour with alpha. Hue in degrees, the rest in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hsla {
    /// Hue in degrees; any value, wrapped on conversion.
    pub h: f64,
    /// Saturation.
    pub s: f64,
    /// Lightness.
    pub l: f64,
    /// Opacity.
    pub a: f64,
}

impl Hsla {
    /// CSS `hsla()` string.
    pub fn to_css(self) -> String {
        format!(
            "hsla({}, {}%, {}%, {})",
            self.h,
            self.s * 100.0,
            self.l * 100.0,
            self.a
        )
    }

    /// Standard HSL to sRGB conversion. Alpha is dropped.
    pub fn to_rgb(self) -> Rgb8 {
        let h = (self.h % 360.0 + 360.0) % 360.0 / 360.0;
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 {
                l * (1.0 + s)
            } else {
                l + s - l * s
            };
            let p = 2.0 * l - q;
            (
                hue_to_rgb(p, q, h + 1.0 / 3.0),
                hue_to_rgb(p, q, h),
                hue_to_rgb(p, q, h - 1.0 / 3.0),
            )
        };

        let to_u8 = |x: f64| (x.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgb8::new(to_u8(r), to_u8(g), to_u8(b))
    }
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

/// HSL glow variant: brighter samples shift hue and lighten while losing saturation.
pub fn brightness_to_hsl(brightness: f64, base_hue: f64) -> Hsla {
    let b = brightness.clamp(0.0, 1.0);
    Hsla {
        h: base_hue + b * 20.0,
        s: (1.0 - b * 0.5).max(0.3),
        l: 0.2 + b * 0.6,
        a: 0.2 + b * 0.8,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/glow.rs"]
mod tests;
