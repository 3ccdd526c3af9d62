#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};
use escapetime::{Fractal, Inside, Palette, Renderer, Shader, Viewport};
use num::Complex;

fn escape_benchmark(c: &mut Criterion) {
    let inside = Complex::new(-0.1, 0.1);
    c.bench_function("mandelbrot inside point, 512", move |b| {
        b.iter(|| Fractal::Mandelbrot.escape(black_box(inside), 512))
    });
    c.bench_function("burning ship inside point, 512", move |b| {
        b.iter(|| Fractal::BurningShip.escape(black_box(inside), 512))
    });
}

fn frame_benchmark(c: &mut Criterion) {
    let renderer = Renderer::new(
        Fractal::BurningShip,
        Shader::new(Palette::Banded, Inside::Black),
        160,
        120,
        256,
    );
    let viewport = Viewport::new(Complex::new(-2.0, -1.8), Complex::new(1.5, 0.8)).unwrap();
    c.bench_function("burning ship 160x120 frame", move |b| {
        b.iter(|| renderer.render(black_box(viewport), 0.0).unwrap())
    });
}

criterion_group!(benches, escape_benchmark, frame_benchmark);
criterion_main!(benches);
