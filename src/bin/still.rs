// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{App, Arg, ArgMatches};
use log::{error, info};
use std::str::FromStr;

use escapetime::cli::{
    parse_complex, parse_size, validate_complex, validate_parse, validate_range, validate_size,
};
use escapetime::{write_image, Fractal, Inside, Palette, Renderer, Shader, Viewport};

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const LEFTLOWER: &str = "leftlower";
const RIGHTUPPER: &str = "rightupper";
const ITERATIONS: &str = "iterations";
const FRACTAL: &str = "fractal";
const PALETTE: &str = "palette";
const INSIDE: &str = "inside";

fn args<'a>() -> ArgMatches<'a> {
    App::new("still")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Renders one escape-time fractal to a PNG")
        .arg(
            Arg::with_name(OUTPUT)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value("burning_ship.png")
                .help("Output file"),
        )
        .arg(
            Arg::with_name(SIZE)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("1600x1200")
                .validator(validate_size)
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(LEFTLOWER)
                .long(LEFTLOWER)
                .short("l")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2.0,-1.8")
                .validator(validate_complex)
                .help("Left lower corner of the viewport"),
        )
        .arg(
            Arg::with_name(RIGHTUPPER)
                .long(RIGHTUPPER)
                .short("r")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("1.5,0.8")
                .validator(validate_complex)
                .help("Right upper corner of the viewport"),
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
            Arg::with_name(FRACTAL)
                .long(FRACTAL)
                .short("f")
                .takes_value(true)
                .default_value("burning-ship")
                .validator(validate_parse::<Fractal>)
                .help("mandelbrot or burning-ship"),
        )
        .arg(
            Arg::with_name(PALETTE)
                .long(PALETTE)
                .short("p")
                .takes_value(true)
                .default_value("banded")
                .validator(validate_parse::<Palette>)
                .help("banded, warm, harmonic or cycling"),
        )
        .arg(
            Arg::with_name(INSIDE)
                .long(INSIDE)
                .takes_value(true)
                .default_value("black")
                .validator(validate_parse::<Inside>)
                .help("Color of points inside the set: black or white"),
        )
        .get_matches()
}

fn main() {
    env_logger::init();
    let matches = args();

    // Every value below has a default and has passed its validator.
    let output = matches.value_of(OUTPUT).unwrap();
    let (width, height) = parse_size(matches.value_of(SIZE).unwrap()).unwrap();
    let leftlower = parse_complex(matches.value_of(LEFTLOWER).unwrap()).unwrap();
    let rightupper = parse_complex(matches.value_of(RIGHTUPPER).unwrap()).unwrap();
    let iterations = usize::from_str(matches.value_of(ITERATIONS).unwrap()).unwrap();
    let fractal = Fractal::from_str(matches.value_of(FRACTAL).unwrap()).unwrap();
    let palette = Palette::from_str(matches.value_of(PALETTE).unwrap()).unwrap();
    let inside = Inside::from_str(matches.value_of(INSIDE).unwrap()).unwrap();

    let viewport = match Viewport::new(leftlower, rightupper) {
        Ok(viewport) => viewport,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    info!(
        "rendering {} at {}x{}, {} iterations, viewport {:?}",
        fractal, width, height, iterations, viewport
    );
    let renderer = Renderer::new(fractal, Shader::new(palette, inside), width, height, iterations);
    let written = renderer
        .render(viewport, 0.0)
        .and_then(|pixels| write_image(output, &pixels));
    match written {
        Ok(()) => info!("wrote {}", output),
        Err(e) => error!("could not write {}: {}", output, e),
    }
}
