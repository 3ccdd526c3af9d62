// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! PNG output.

use image::png::PngEncoder;
use image::{ColorType, RgbaImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::errors::RenderError;

/// Encode an RGBA buffer as a PNG at `path`, replacing anything that
/// was already there.
pub fn write_image<P: AsRef<Path>>(path: P, pixels: &RgbaImage) -> Result<(), RenderError> {
    let output = BufWriter::new(File::create(path.as_ref())?);
    let encoder = PngEncoder::new(output);
    encoder.encode(pixels, pixels.width(), pixels.height(), ColorType::Rgba8)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgba};

    #[test]
    fn written_png_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        let mut pixels = RgbaImage::new(3, 2);
        pixels.put_pixel(2, 1, Rgba([10, 20, 30, 255]));
        write_image(&path, &pixels).unwrap();

        let back = image::open(&path).unwrap();
        assert_eq!(back.dimensions(), (3, 2));
        assert_eq!(back.get_pixel(2, 1), Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("tiny.png");
        match write_image(&path, &RgbaImage::new(1, 1)) {
            Err(RenderError::Io(_)) => {}
            other => panic!("expected an i/o error, got {:?}", other),
        }
    }
}
