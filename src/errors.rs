// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The single error type for the renderer.  Everything that can go
//! wrong here is either a malformed plane, or the filesystem and the
//! encoder refusing to cooperate.

use failure::Fail;
use std::io;

/// Errors produced while mapping planes and writing images.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// The integral or complex plane has an impossible shape.
    #[fail(display = "bad plane: {}", _0)]
    BadPlane(String),

    /// Creating or writing an output file failed.
    #[fail(display = "i/o failure: {}", _0)]
    Io(#[cause] io::Error),

    /// The PNG encoder rejected the buffer.
    #[fail(display = "encoding failure: {}", _0)]
    Image(#[cause] image::ImageError),

    /// A worker thread panicked before the pool could be joined.
    #[fail(display = "worker pool failure: {}", _0)]
    Pool(String),
}

impl From<io::Error> for RenderError {
    fn from(e: io::Error) -> Self {
        RenderError::Io(e)
    }
}

impl From<image::ImageError> for RenderError {
    fn from(e: image::ImageError) -> Self {
        RenderError::Image(e)
    }
}
