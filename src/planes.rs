// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0 in
//! the upper left, and a rectangle on the complex plane (the
//! Viewport) bounded by its minimum and maximum real and imaginary
//! parts.  Image rows run downward while the imaginary axis runs
//! upward, so row 0 maps to the top of the viewport.
use crate::errors::RenderError;
use num::Complex;

/// The most pixels a single plane may hold.  At four bytes a pixel
/// this keeps one frame's buffer to a gigabyte.
pub const MAX_PIXELS: usize = 1 << 28;

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the x, y of a pixel in the integral plane.  Column
/// first, row second.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// The rectangular region of the complex plane that gets mapped onto
/// the pixel grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Leftmost real coordinate.
    pub x_min: f64,
    /// Rightmost real coordinate.
    pub x_max: f64,
    /// Lowest imaginary coordinate.
    pub y_min: f64,
    /// Highest imaginary coordinate.
    pub y_max: f64,
}

impl Viewport {
    /// Builds a viewport from its left-lower and right-upper corners,
    /// refusing rectangles that are empty, inverted, or not finite.
    pub fn new(leftlower: Complex<f64>, rightupper: Complex<f64>) -> Result<Viewport, RenderError> {
        let corners = [leftlower.re, leftlower.im, rightupper.re, rightupper.im];
        if corners.iter().any(|c| !c.is_finite()) {
            return Err(RenderError::BadPlane(
                "The viewport corners must be finite numbers.".to_string(),
            ));
        }

        if rightupper.re <= leftlower.re {
            return Err(RenderError::BadPlane(
                "The left lower corner is not to the left of the right upper corner.".to_string(),
            ));
        }

        if rightupper.im <= leftlower.im {
            return Err(RenderError::BadPlane(
                "The left lower corner is not lower than the right upper corner.".to_string(),
            ));
        }

        Ok(Viewport {
            x_min: leftlower.re,
            x_max: rightupper.re,
            y_min: leftlower.im,
            y_max: rightupper.im,
        })
    }

    /// A viewport of the given real and imaginary extent, centered on
    /// `center`.
    pub fn centered(center: Complex<f64>, x_range: f64, y_range: f64) -> Result<Viewport, RenderError> {
        Viewport::new(
            Complex::new(center.re - x_range / 2.0, center.im - y_range / 2.0),
            Complex::new(center.re + x_range / 2.0, center.im + y_range / 2.0),
        )
    }

    /// Extent along the real axis.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Extent along the imaginary axis.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// Contains the definitions of two planes: an integral cartesian
/// plane, and a viewport on the complex plane.  Maps pixels of the
/// former to points of the latter.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The size of the integral cartesian plane.
    pub integral_plane: IntegralPlane,
    /// The region of the complex plane being sampled.
    pub viewport: Viewport,
    // The size, in complex units, of a single pixel along each axis.
    grid_factors: (f64, f64),
}

impl PlaneMapper {
    /// Constructor.  Takes the size of the integral plane and the
    /// viewport it should cover.
    pub fn new(width: usize, height: usize, viewport: Viewport) -> Result<PlaneMapper, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::BadPlane(format!(
                "The integral plane {}x{} has no pixels.",
                width, height
            )));
        }

        match width.checked_mul(height) {
            Some(pixels) if pixels <= MAX_PIXELS => {}
            _ => {
                return Err(RenderError::BadPlane(format!(
                    "The integral plane {}x{} exceeds {} pixels.",
                    width, height, MAX_PIXELS
                )))
            }
        }

        let grid_factors = (
            viewport.width() / (width as f64),
            viewport.height() / (height as f64),
        );

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            viewport,
            grid_factors,
        })
    }

    /// Given a pixel on the integral cartesian plane, return the
    /// complex number at the equivalent location in the viewport.
    /// Rows are flipped so that row 0 lands at the top of the
    /// viewport.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        let flipped = (self.integral_plane.1 - pixel.1 - 1) as f64;
        Complex::new(
            self.viewport.x_min + (pixel.0 as f64) * self.grid_factors.0,
            self.viewport.y_min + flipped * self.grid_factors.1,
        )
    }
}
