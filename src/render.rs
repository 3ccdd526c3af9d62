// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Renders a single frame: for every pixel, map it to the complex
//! plane, run the kernel, and shade the result.

use image::RgbaImage;
use itertools::iproduct;
use std::convert::TryFrom;

use crate::errors::RenderError;
use crate::kernel::Fractal;
use crate::palette::Shader;
use crate::planes::{Pixel, PlaneMapper, Viewport};

/// Everything about a picture except where it is looking.  Once set,
/// this object should not be mutable; it is shared read-only by every
/// worker in an animation.
#[derive(Copy, Clone, Debug)]
pub struct Renderer {
    /// The map to iterate.
    pub fractal: Fractal,
    /// How to color the results.
    pub shader: Shader,
    /// Image width in pixels.
    pub width: usize,
    /// Image height in pixels.
    pub height: usize,
    /// The iteration cap.
    pub limit: usize,
}

impl Renderer {
    /// Requires the fractal, the shading, the size of the image, and
    /// the number of iterations to perform per pixel.
    pub fn new(fractal: Fractal, shader: Shader, width: usize, height: usize, limit: usize) -> Self {
        Renderer {
            fractal,
            shader,
            width,
            height,
            limit,
        }
    }

    /// Render the viewport into a fresh RGBA buffer.
    pub fn render(&self, viewport: Viewport, hue_shift: f64) -> Result<RgbaImage, RenderError> {
        let plane = PlaneMapper::new(self.width, self.height, viewport)?;
        let (width, height) = match (u32::try_from(self.width), u32::try_from(self.height)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => {
                return Err(RenderError::BadPlane(format!(
                    "The image {}x{} does not fit a PNG.",
                    self.width, self.height
                )))
            }
        };
        let mut buffer = RgbaImage::new(width, height);
        for (column, row) in iproduct!(0..width, 0..height) {
            let c = plane.pixel_to_point(&Pixel(column as usize, row as usize));
            let escape = self.fractal.escape(c, self.limit);
            buffer.put_pixel(column, row, self.shader.shade(&escape, self.limit, hue_shift));
        }
        Ok(buffer)
    }
}
