// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{App, Arg, ArgMatches};
use log::{error, info};
use std::str::FromStr;

use escapetime::cli::{
    parse_complex, parse_size, validate_complex, validate_parse, validate_range, validate_size,
};
use escapetime::{prepare_outdir, Animation, Fractal, Inside, Palette, Renderer, Schedule, Shader};

const OUTDIR: &str = "outdir";
const SIZE: &str = "size";
const FRAMES: &str = "frames";
const ITERATIONS: &str = "iterations";
const CENTER: &str = "center";
const SCALE: &str = "scale";
const ZOOM_SPEED: &str = "zoom-speed";
const PAN: &str = "pan";
const SCHEDULE: &str = "schedule";
const DECAY: &str = "decay";
const FRACTAL: &str = "fractal";
const THREADS: &str = "threads";
const FPS: &str = "fps";

fn args<'a>() -> ArgMatches<'a> {
    App::new("animate")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Renders a looping escape-time fractal animation to numbered PNG frames")
        .arg(
            Arg::with_name(OUTDIR)
                .long(OUTDIR)
                .short("o")
                .takes_value(true)
                .default_value("frames")
                .help("Directory for the frames; created if missing"),
        )
        .arg(
            Arg::with_name(SIZE)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("1280x720")
                .validator(validate_size)
                .help("Size of each frame"),
        )
        .arg(
            Arg::with_name(FRAMES)
                .long(FRAMES)
                .short("n")
                .takes_value(true)
                .default_value("300")
                .validator(|s| validate_range(&s, 1usize, 1_000_000))
                .help("Number of frames in the loop"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("512")
                .validator(|s| validate_range(&s, 1usize, 200_000))
                .help("Iteration cap per pixel"),
        )
        .arg(
            Arg::with_name(CENTER)
                .long(CENTER)
                .short("c")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-1.75,0.0")
                .validator(validate_complex)
                .help("Center of the zoom"),
        )
        .arg(
            Arg::with_name(SCALE)
                .long(SCALE)
                .takes_value(true)
                .default_value("2.5")
                .validator(|s| validate_range(&s, 1e-12f64, 1e6))
                .help("Scale of the first frame; the viewport is 3x2 times this"),
        )
        .arg(
            Arg::with_name(ZOOM_SPEED)
                .long(ZOOM_SPEED)
                .takes_value(true)
                .default_value("0.02")
                .validator(|s| validate_range(&s, 0.0f64, 1.0))
                .help("Zoom strength of the sinusoidal schedule"),
        )
        .arg(
            Arg::with_name(PAN)
                .long(PAN)
                .takes_value(true)
                .default_value("0.0")
                .validator(|s| validate_range(&s, 0.0f64, 10.0))
                .help("Radius of the panning circle of the sinusoidal schedule"),
        )
        .arg(
            Arg::with_name(SCHEDULE)
                .long(SCHEDULE)
                .takes_value(true)
                .possible_values(&["sinusoidal", "exponential"])
                .default_value("sinusoidal")
                .help("How the viewport moves from frame to frame"),
        )
        .arg(
            Arg::with_name(DECAY)
                .long(DECAY)
                .takes_value(true)
                .default_value("0.98")
                .validator(|s| validate_range(&s, 1e-6f64, 1.0))
                .help("Per-frame scale multiplier of the exponential schedule"),
        )
        .arg(
            Arg::with_name(FRACTAL)
                .long(FRACTAL)
                .short("f")
                .takes_value(true)
                .default_value("burning-ship")
                .validator(validate_parse::<Fractal>)
                .help("mandelbrot or burning-ship"),
        )
        .arg(
            Arg::with_name(THREADS)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(|s| validate_range(&s, 0usize, 1024))
                .help("Worker threads; 1 renders in order, 0 uses every CPU"),
        )
        .arg(
            Arg::with_name(FPS)
                .long(FPS)
                .takes_value(true)
                .default_value("30")
                .validator(|s| validate_range(&s, 1u32, 240))
                .help("Frame rate to hand to the video encoder"),
        )
        .get_matches()
}

fn main() {
    env_logger::init();
    let matches = args();

    // Every value below has a default and has passed its validator.
    let outdir = matches.value_of(OUTDIR).unwrap();
    let (width, height) = parse_size(matches.value_of(SIZE).unwrap()).unwrap();
    let frames = usize::from_str(matches.value_of(FRAMES).unwrap()).unwrap();
    let iterations = usize::from_str(matches.value_of(ITERATIONS).unwrap()).unwrap();
    let center = parse_complex(matches.value_of(CENTER).unwrap()).unwrap();
    let initial_scale = f64::from_str(matches.value_of(SCALE).unwrap()).unwrap();
    let fractal = Fractal::from_str(matches.value_of(FRACTAL).unwrap()).unwrap();
    let threads = usize::from_str(matches.value_of(THREADS).unwrap()).unwrap();
    let fps = u32::from_str(matches.value_of(FPS).unwrap()).unwrap();

    let schedule = match matches.value_of(SCHEDULE) {
        Some("exponential") => Schedule::Exponential {
            center,
            initial_scale,
            decay: f64::from_str(matches.value_of(DECAY).unwrap()).unwrap(),
        },
        _ => Schedule::Sinusoidal {
            center,
            initial_scale,
            zoom_speed: f64::from_str(matches.value_of(ZOOM_SPEED).unwrap()).unwrap(),
            pan: f64::from_str(matches.value_of(PAN).unwrap()).unwrap(),
            frames,
        },
    };

    if let Err(e) = prepare_outdir(outdir) {
        error!("could not create {}: {}", outdir, e);
        eprintln!("Could not create output directory {}: {}", outdir, e);
        std::process::exit(1);
    }

    let renderer = Renderer::new(
        fractal,
        Shader::new(Palette::Cycling, Inside::Black),
        width,
        height,
        iterations,
    );
    let animation = Animation::new(renderer, schedule, frames, outdir);

    let summary = if threads == 1 {
        animation.run_sequential()
    } else {
        match animation.run_pool(threads) {
            Ok(summary) => summary,
            Err(e) => {
                error!("render failure: {}", e);
                std::process::exit(1);
            }
        }
    };

    info!(
        "{} of {} frames in {} at {} fps",
        summary.written.len(),
        frames,
        outdir,
        fps
    );
}
