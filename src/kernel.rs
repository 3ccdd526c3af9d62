// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time kernel.
//!
//! Both fractals start at z = 0 and repeatedly apply z ← f(z) + c.
//! For the Mandelbrot f(z) is z², and for the Burning Ship it is
//! the square of z after both its parts have been folded into the
//! positive quadrant.  The number of steps it takes for |z| to leave
//! the circle of radius 2 is the "velocity" used to color the pixel;
//! points that never leave within the limit are considered inside
//! the set.

use num::Complex;
use std::fmt;
use std::str::FromStr;

/// The escape radius, squared.
pub const BAILOUT: f64 = 4.0;

/// Which map to iterate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Fractal {
    /// z ← z² + c
    Mandelbrot,
    /// z ← (|Re z| + i|Im z|)² + c
    BurningShip,
}

/// The outcome of iterating a single sample.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Escape {
    /// Number of steps taken, between 0 and the limit inclusive.
    pub iterations: usize,
    /// The last iterate, kept for smooth coloring.
    pub z: Complex<f64>,
}

impl Escape {
    /// True if the orbit left the escape radius before the limit.
    pub fn escaped(&self, limit: usize) -> bool {
        self.iterations < limit
    }
}

impl Fractal {
    /// Apply the map once.
    #[inline]
    pub fn step(self, z: Complex<f64>, c: Complex<f64>) -> Complex<f64> {
        match self {
            Fractal::Mandelbrot => z * z + c,
            Fractal::BurningShip => Complex {
                re: z.re * z.re - z.im * z.im + c.re,
                im: 2.0 * (z.re * z.im).abs() + c.im,
            },
        }
    }

    /// Iterate from zero until the orbit escapes or `limit` steps have
    /// been taken, whichever comes first.
    pub fn escape(self, c: Complex<f64>, limit: usize) -> Escape {
        let mut z = Complex::new(0.0, 0.0);
        let mut iterations = 0;
        while iterations < limit && z.norm_sqr() < BAILOUT {
            z = self.step(z, c);
            iterations += 1;
        }
        Escape { iterations, z }
    }
}

impl FromStr for Fractal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mandelbrot" => Ok(Fractal::Mandelbrot),
            "burning-ship" | "burningship" => Ok(Fractal::BurningShip),
            _ => Err(format!("Unknown fractal '{}'", s)),
        }
    }
}

impl fmt::Display for Fractal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Fractal::Mandelbrot => write!(f, "mandelbrot"),
            Fractal::BurningShip => write!(f, "burning-ship"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::iproduct;

    #[test]
    fn origin_is_inside_the_mandelbrot() {
        let e = Fractal::Mandelbrot.escape(Complex::new(0.0, 0.0), 512);
        assert_eq!(e.iterations, 512);
        assert!(!e.escaped(512));
    }

    #[test]
    fn origin_terminates_for_the_burning_ship() {
        let e = Fractal::BurningShip.escape(Complex::new(0.0, 0.0), 100);
        assert_eq!(e.iterations, 100);
        assert_eq!(e.z, Complex::new(0.0, 0.0));
    }

    #[test]
    fn points_beyond_radius_two_escape_under_the_limit() {
        for fractal in &[Fractal::Mandelbrot, Fractal::BurningShip] {
            for (re, im) in iproduct!(-8..=8, -8..=8) {
                let c = Complex::new(re as f64 * 0.75, im as f64 * 0.75);
                if c.norm() <= 2.0 {
                    continue;
                }
                let e = fractal.escape(c, 64);
                assert!(e.escaped(64), "{} at {} did not escape", fractal, c);
                assert!(e.z.norm_sqr() >= BAILOUT);
            }
        }
    }

    #[test]
    fn iteration_count_never_exceeds_the_limit() {
        for fractal in &[Fractal::Mandelbrot, Fractal::BurningShip] {
            for (re, im) in iproduct!(-20..=10, -12..=12) {
                let c = Complex::new(re as f64 / 10.0, im as f64 / 10.0);
                for limit in &[0, 1, 7, 50] {
                    assert!(fractal.escape(c, *limit).iterations <= *limit);
                }
            }
        }
    }

    #[test]
    fn zero_limit_does_no_work() {
        let e = Fractal::Mandelbrot.escape(Complex::new(5.0, 5.0), 0);
        assert_eq!(e.iterations, 0);
        assert_eq!(e.z, Complex::new(0.0, 0.0));
    }

    #[test]
    fn burning_ship_folds_the_imaginary_part() {
        let z = Complex::new(1.0, -2.0);
        let c = Complex::new(0.5, 0.25);
        assert_eq!(Fractal::Mandelbrot.step(z, c), Complex::new(-2.5, -3.75));
        assert_eq!(Fractal::BurningShip.step(z, c), Complex::new(-2.5, 4.25));
    }

    #[test]
    fn fractals_parse_and_print() {
        assert_eq!("mandelbrot".parse::<Fractal>(), Ok(Fractal::Mandelbrot));
        assert_eq!("burning-ship".parse::<Fractal>(), Ok(Fractal::BurningShip));
        assert!("julia".parse::<Fractal>().is_err());
        assert_eq!(Fractal::BurningShip.to_string(), "burning-ship");
    }
}
