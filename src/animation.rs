// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Animations: a renderer, a schedule, and a directory full of
//! numbered frames.
//!
//! Frames are independent of one another, so they can be produced in
//! order on a single thread, or handed out to a pool of workers that
//! each pull frame numbers off a shared queue until it runs dry.
//! Either way a frame that fails to write is logged and recorded,
//! and the run carries on with the next one.

use crossbeam::channel;
use crossbeam::thread::ScopedJoinHandle;
use log::{debug, error, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::RenderError;
use crate::output::write_image;
use crate::render::Renderer;
use crate::schedule::Schedule;

/// What became of each frame in a run.  Both lists are sorted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    /// Frames that were rendered and written.
    pub written: Vec<usize>,
    /// Frames that could not be rendered or written.
    pub failed: Vec<usize>,
}

impl Summary {
    fn merge(mut self, other: Summary) -> Summary {
        self.written.extend(other.written);
        self.failed.extend(other.failed);
        self
    }

    fn sorted(mut self) -> Summary {
        self.written.sort();
        self.failed.sort();
        self
    }
}

/// An animation's parameters.
#[derive(Clone, Debug)]
pub struct Animation {
    /// Renders each frame.
    pub renderer: Renderer,
    /// Positions each frame.
    pub schedule: Schedule,
    /// Number of frames; indices run from 0 to frames - 1.
    pub frames: usize,
    /// Where the frames are written.
    pub outdir: PathBuf,
}

/// Create the output directory, and any missing parents.
pub fn prepare_outdir<P: AsRef<Path>>(outdir: P) -> Result<(), RenderError> {
    fs::create_dir_all(outdir.as_ref())?;
    Ok(())
}

impl Animation {
    /// Bundle up an animation.  Nothing is rendered until one of the
    /// `run_` methods is called.
    pub fn new<P: Into<PathBuf>>(renderer: Renderer, schedule: Schedule, frames: usize, outdir: P) -> Self {
        Animation {
            renderer,
            schedule,
            frames,
            outdir: outdir.into(),
        }
    }

    /// `<outdir>/frame_<index>.png`
    pub fn frame_path(&self, frame: usize) -> PathBuf {
        self.outdir.join(format!("frame_{}.png", frame))
    }

    /// The fraction of a turn by which the hue of this frame rotates.
    pub fn hue_shift(&self, frame: usize) -> f64 {
        if self.frames == 0 {
            return 0.0;
        }
        frame as f64 / self.frames as f64
    }

    /// Render one frame and write it to its numbered file.
    pub fn render_frame(&self, frame: usize) -> Result<PathBuf, RenderError> {
        let viewport = self.schedule.viewport(frame)?;
        let pixels = self.renderer.render(viewport, self.hue_shift(frame))?;
        let path = self.frame_path(frame);
        write_image(&path, &pixels)?;
        Ok(path)
    }

    fn record(&self, frame: usize, summary: &mut Summary) {
        match self.render_frame(frame) {
            Ok(path) => {
                debug!("wrote frame {} to {}", frame, path.display());
                summary.written.push(frame);
            }
            Err(e) => {
                error!("frame {} failed: {}", frame, e);
                summary.failed.push(frame);
            }
        }
    }

    /// Render every frame, in order, on the calling thread.
    pub fn run_sequential(&self) -> Summary {
        info!(
            "rendering {} frames of {} into {}",
            self.frames,
            self.renderer.fractal,
            self.outdir.display()
        );
        let mut summary = Summary::default();
        for frame in 0..self.frames {
            self.record(frame, &mut summary);
        }
        info!("{} frames written, {} failed", summary.written.len(), summary.failed.len());
        summary
    }

    /// Render every frame on a fixed pool of `threads` workers (all
    /// CPUs if `threads` is zero).  The queue is filled with every
    /// frame index and closed before the first worker starts, so each
    /// index is handed out exactly once; the pool is joined before
    /// this returns.  Frames complete in no particular order.
    pub fn run_pool(&self, threads: usize) -> Result<Summary, RenderError> {
        let threads = if threads == 0 { num_cpus::get() } else { threads };
        info!(
            "rendering {} frames of {} into {} on {} threads",
            self.frames,
            self.renderer.fractal,
            self.outdir.display(),
            threads
        );

        let (sender, receiver) = channel::bounded(self.frames);
        for frame in 0..self.frames {
            sender
                .send(frame)
                .map_err(|e| RenderError::Pool(e.to_string()))?;
        }
        drop(sender);

        let joined = crossbeam::scope(|spawner| {
            let handles: Vec<ScopedJoinHandle<Summary>> = (0..threads)
                .map(|_| {
                    let receiver = receiver.clone();
                    spawner.spawn(move |_| {
                        let mut summary = Summary::default();
                        for frame in receiver.iter() {
                            self.record(frame, &mut summary);
                        }
                        summary
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join())
                .collect::<Result<Vec<Summary>, _>>()
        });

        let summary = match joined {
            Ok(Ok(summaries)) => summaries
                .into_iter()
                .fold(Summary::default(), Summary::merge)
                .sorted(),
            _ => return Err(RenderError::Pool("a worker thread panicked".to_string())),
        };
        info!("{} frames written, {} failed", summary.written.len(), summary.failed.len());
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::Fractal;
    use crate::palette::{Inside, Palette, Shader};
    use num::Complex;

    fn tiny(frames: usize, outdir: &Path) -> Animation {
        let renderer = Renderer::new(
            Fractal::BurningShip,
            Shader::new(Palette::Cycling, Inside::Black),
            24,
            16,
            48,
        );
        let schedule = Schedule::Sinusoidal {
            center: Complex::new(-1.75, 0.0),
            initial_scale: 2.5,
            zoom_speed: 0.02,
            pan: 0.0,
            frames,
        };
        Animation::new(renderer, schedule, frames, outdir)
    }

    #[test]
    fn frames_are_numbered_inside_the_outdir() {
        let a = tiny(10, Path::new("frames"));
        assert_eq!(a.frame_path(7), Path::new("frames").join("frame_7.png"));
        assert_eq!(a.hue_shift(0), 0.0);
        assert_eq!(a.hue_shift(5), 0.5);
    }

    #[test]
    fn pool_processes_every_frame_exactly_once() {
        let dir = tempfile::tempdir().unwrap();
        let a = tiny(13, dir.path());
        let summary = a.run_pool(4).unwrap();
        assert_eq!(summary.written, (0..13).collect::<Vec<_>>());
        assert!(summary.failed.is_empty());
        for frame in 0..13 {
            assert!(a.frame_path(frame).is_file(), "frame {} missing", frame);
        }
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 13);
    }

    #[test]
    fn pool_with_more_threads_than_frames() {
        let dir = tempfile::tempdir().unwrap();
        let summary = tiny(2, dir.path()).run_pool(8).unwrap();
        assert_eq!(summary.written, vec![0, 1]);
    }

    #[test]
    fn sequential_and_pool_agree() {
        let one = tempfile::tempdir().unwrap();
        let many = tempfile::tempdir().unwrap();
        let sequential = tiny(6, one.path()).run_sequential();
        let pooled = tiny(6, many.path()).run_pool(3).unwrap();
        assert_eq!(sequential, pooled);
        for frame in 0..6 {
            let name = format!("frame_{}.png", frame);
            assert_eq!(
                fs::read(one.path().join(&name)).unwrap(),
                fs::read(many.path().join(&name)).unwrap()
            );
        }
    }

    #[test]
    fn write_failures_are_recorded_not_raised() {
        let dir = tempfile::tempdir().unwrap();
        let a = tiny(3, &dir.path().join("never-created"));
        let summary = a.run_pool(2).unwrap();
        assert!(summary.written.is_empty());
        assert_eq!(summary.failed, vec![0, 1, 2]);
        assert_eq!(a.run_sequential().failed, vec![0, 1, 2]);
    }

    #[test]
    fn empty_animation_does_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(tiny(0, dir.path()).run_pool(2).unwrap(), Summary::default());
    }

    #[test]
    fn outdir_is_created_with_parents() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        prepare_outdir(&nested).unwrap();
        assert!(nested.is_dir());
        prepare_outdir(&nested).unwrap();
    }
}
