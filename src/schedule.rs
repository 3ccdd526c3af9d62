// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Frame schedules.  A schedule is a closed-form function from a
//! frame index to the viewport that frame should render; it carries
//! no state between frames, so any frame can be computed on its own
//! by any worker.

use crate::errors::RenderError;
use crate::planes::Viewport;
use num::Complex;
use std::f64::consts::PI;

/// Every scheduled viewport is `scale` times this, real by imaginary.
pub const ASPECT: (f64, f64) = (3.0, 2.0);

/// How the viewport moves across an animation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Schedule {
    /// Zoom in and back out along one sine period, so the last frame
    /// leads seamlessly into the first.  With a non-zero `pan`, the
    /// center also travels once around a circle of that radius.
    Sinusoidal {
        /// Center of the loop.
        center: Complex<f64>,
        /// Scale at frame 0.
        initial_scale: f64,
        /// Strength of the zoom.
        zoom_speed: f64,
        /// Radius of the panning circle, in complex units.
        pan: f64,
        /// Length of one full period, in frames.
        frames: usize,
    },
    /// A steady zoom: each frame is `decay` times the scale of the one
    /// before it.
    Exponential {
        /// Fixed center of the zoom.
        center: Complex<f64>,
        /// Scale at frame 0.
        initial_scale: f64,
        /// Per-frame scale multiplier.
        decay: f64,
    },
}

impl Schedule {
    /// The scale factor for a frame.
    pub fn scale(&self, frame: usize) -> f64 {
        match *self {
            Schedule::Sinusoidal {
                initial_scale,
                zoom_speed,
                frames,
                ..
            } => {
                let theta = 2.0 * PI * (frame as f64) / (frames as f64);
                initial_scale * (-zoom_speed * (frame as f64) * theta.sin()).exp()
            }
            Schedule::Exponential {
                initial_scale,
                decay,
                ..
            } => initial_scale * decay.powf(frame as f64),
        }
    }

    /// The center of the viewport for a frame.
    pub fn center(&self, frame: usize) -> Complex<f64> {
        match *self {
            Schedule::Sinusoidal {
                center,
                pan,
                frames,
                ..
            } => {
                if pan == 0.0 {
                    return center;
                }
                let theta = 2.0 * PI * (frame as f64) / (frames as f64);
                center + Complex::new(pan * theta.cos() - pan, pan * theta.sin())
            }
            Schedule::Exponential { center, .. } => center,
        }
    }

    /// The viewport to render for a frame.  Fails if the schedule
    /// degenerates (a zero-length period, a scale that has underflowed
    /// to nothing or blown up to infinity).
    pub fn viewport(&self, frame: usize) -> Result<Viewport, RenderError> {
        let scale = self.scale(frame);
        Viewport::centered(self.center(frame), scale * ASPECT.0, scale * ASPECT.1)
    }
}
