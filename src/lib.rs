#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Escape-time renderer
//!
//! The Mandelbrot set and its cousin the Burning Ship are drawn by
//! taking a point on the complex plane, repeatedly squaring a running
//! value and adding the point back in, and measuring how quickly that
//! value goes to infinity.  This "velocity" is the number used to
//! render the image.  The Burning Ship differs only in that it folds
//! the running value into the positive quadrant before squaring,
//! which turns the Mandelbrot's bulbs into something that looks like
//! a ship on fire.
//!
//! Points that never go to infinity within the iteration limit are
//! the set itself, and get a fixed color.  Everything else is colored
//! by a smoothed version of its velocity.
//!
//! A still is one viewport rendered to one PNG.  An animation is a
//! schedule of viewports rendered to a directory of numbered PNGs,
//! either one after another or by a pool of worker threads.

extern crate crossbeam;
extern crate failure;
extern crate image;
extern crate itertools;
extern crate log;
extern crate num;
extern crate num_cpus;

pub mod animation;
pub mod cli;
pub mod errors;
pub mod kernel;
pub mod output;
pub mod palette;
pub mod planes;
pub mod render;
pub mod schedule;

pub use animation::{prepare_outdir, Animation, Summary};
pub use errors::RenderError;
pub use kernel::{Escape, Fractal};
pub use output::write_image;
pub use palette::{Inside, Palette, Shader};
pub use planes::Viewport;
pub use render::Renderer;
pub use schedule::Schedule;
