// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Shading.  Turns the result of the escape-time kernel into a pixel.
//!
//! Every palette starts from the "smooth index", a continuous
//! refinement of the integer iteration count that uses how far past
//! the escape radius the last iterate landed.  Coloring by the raw
//! count produces visible bands; coloring by the smooth index does
//! not.  Points that never escaped get a fixed sentinel color.

use crate::kernel::Escape;
use image::Rgba;
use std::f64::consts::{LN_2, PI};
use std::str::FromStr;

/// How to color points that reached the iteration limit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Inside {
    /// Opaque black.
    Black,
    /// Opaque white.
    White,
}

impl Inside {
    /// The sentinel pixel.
    pub fn color(self) -> Rgba<u8> {
        match self {
            Inside::Black => Rgba([0, 0, 0, 255]),
            Inside::White => Rgba([255, 255, 255, 255]),
        }
    }
}

/// Per-channel frequencies for the trigonometric palette.  Each
/// channel is 255·sin²(mu·π·k).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sinusoidal {
    /// Red frequency.
    pub red: f64,
    /// Green frequency.
    pub green: f64,
    /// Blue frequency.
    pub blue: f64,
}

impl Sinusoidal {
    /// Reds and oranges near the boundary, fading into blue.
    pub fn warm() -> Self {
        Sinusoidal {
            red: 0.7,
            green: 1.3,
            blue: 2.1,
        }
    }

    /// Integer harmonics: one, two and three half-waves across the range.
    pub fn harmonic() -> Self {
        Sinusoidal {
            red: 1.0,
            green: 2.0,
            blue: 3.0,
        }
    }
}

/// The coloring families.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Palette {
    /// Direct trigonometric channel functions of the smooth index.
    Sinusoidal(Sinusoidal),
    /// Hue in degrees driven by both the smooth index and the raw
    /// count, with a saturation that wobbles per iteration.
    Banded,
    /// Hue driven by the smooth index plus a per-frame shift, so an
    /// animation's colors rotate continuously.
    Cycling,
}

impl FromStr for Palette {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "warm" => Ok(Palette::Sinusoidal(Sinusoidal::warm())),
            "harmonic" => Ok(Palette::Sinusoidal(Sinusoidal::harmonic())),
            "banded" => Ok(Palette::Banded),
            "cycling" => Ok(Palette::Cycling),
            _ => Err(format!("Unknown palette '{}'", s)),
        }
    }
}

impl FromStr for Inside {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black" => Ok(Inside::Black),
            "white" => Ok(Inside::White),
            _ => Err(format!("Unknown inside color '{}'", s)),
        }
    }
}

/// A palette and a sentinel, which together color every possible
/// kernel result.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Shader {
    /// How escaped points are colored.
    pub palette: Palette,
    /// How inside points are colored.
    pub inside: Inside,
}

impl Shader {
    /// Pair a palette with its sentinel.
    pub fn new(palette: Palette, inside: Inside) -> Self {
        Shader { palette, inside }
    }

    /// Color one kernel result.  `hue_shift` is a fraction of a full
    /// turn and only moves the cycling palette.
    pub fn shade(&self, escape: &Escape, limit: usize, hue_shift: f64) -> Rgba<u8> {
        if !escape.escaped(limit) {
            return self.inside.color();
        }

        let mu = smooth_index(escape, limit);
        match self.palette {
            Palette::Sinusoidal(k) => Rgba([
                sine_channel(mu, k.red),
                sine_channel(mu, k.green),
                sine_channel(mu, k.blue),
                255,
            ]),
            Palette::Banded => {
                let iter = escape.iterations as f64;
                let hue = mu * 360.0 + iter * 0.1;
                let sat = 0.8 + 0.2 * iter.sin();
                to_rgba(hsv_degrees_to_rgb(hue, sat, 0.9))
            }
            Palette::Cycling => {
                let hue = 0.7 + mu + hue_shift;
                to_rgba(hsv_to_rgb(hue, 0.8, mu.powf(0.3)))
            }
        }
    }
}

/// The smooth iteration count, mu = n + 1 - log2(ln|z|), divided by
/// the limit.  Clamped to [0, 1]; non-finite results collapse to 0.
pub fn smooth_index(escape: &Escape, limit: usize) -> f64 {
    if limit == 0 {
        return 0.0;
    }
    let modulus = escape.z.norm();
    let mu = (escape.iterations as f64 + 1.0 - modulus.ln().ln() / LN_2) / limit as f64;
    if mu.is_finite() {
        mu.max(0.0).min(1.0)
    } else {
        0.0
    }
}

fn sine_channel(mu: f64, k: f64) -> u8 {
    (255.0 * (mu * PI * k).sin().powi(2)) as u8
}

fn to_rgba((r, g, b): (f64, f64, f64)) -> Rgba<u8> {
    Rgba([(r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8, 255])
}

/// HSV to RGB with the hue given as a fraction of a turn.  Hues
/// outside [0, 1) wrap around.  All components are in [0, 1].
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let h = h.rem_euclid(1.0) * 6.0;
    let i = h.floor();
    let f = h - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    match (i as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// HSV to RGB with the hue given in degrees.  Hues outside [0, 360)
/// wrap around.
pub fn hsv_degrees_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let h = h.rem_euclid(360.0);
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };
    (r + m, g + m, b + m)
}
