use rand::Rng;
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    ops::Range,
    path::Path,
};

/// Default output file name, as expected by the cube-map renderer.
pub const DEFAULT_OUTPUT: &str = "StarsRandomCoords.txt";

pub const STAR_COUNT: usize = 10_000;
pub const COORD_RANGE: Range<i32> = -5000..5000;
pub const MIN_RADIUS: f64 = 2500.0;
pub const SIZE_STEPS: Range<i32> = 1..7;

/// Generation parameters. `Default` matches the file the renderer ships with.
#[derive(Clone, Debug)]
pub struct Config {
    pub count: usize,
    pub coord_range: Range<i32>,
    /// Minimum distance from the origin an accepted star must exceed.
    pub min_radius: f64,
    /// Half-step size domain: a draw from this range divided by 2.
    pub size_steps: Range<i32>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            count: STAR_COUNT,
            coord_range: COORD_RANGE,
            min_radius: MIN_RADIUS,
            size_steps: SIZE_STEPS,
        }
    }
}

/// Uniform integer draws from a half-open range.
///
/// Injected into the generator so tests can script exact draw sequences.
pub trait IntSource {
    fn next_int(&mut self, range: Range<i32>) -> i32;
}

/// Adapter over any `rand` generator.
pub struct RandSource<R>(pub R);

impl<R: Rng> IntSource for RandSource<R> {
    fn next_int(&mut self, range: Range<i32>) -> i32 {
        self.0.gen_range(range)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Star {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub size: f32,
}

fn distance_from_origin(x: i32, y: i32, z: i32) -> f64 {
    let (x, y, z) = (x as f64, y as f64, z as f64);
    (x * x + y * y + z * z).sqrt()
}

/// Rejection-samples a coordinate triple until it lies outside the
/// `min_radius` sphere, then draws the size for the accepted triple.
///
/// The cube corners dominate the sphere, so a draw is accepted with
/// probability ~0.48 and the loop takes ~2 rounds on average.
pub fn sample_star(config: &Config, source: &mut impl IntSource) -> Star {
    loop {
        let x = source.next_int(config.coord_range.clone());
        let y = source.next_int(config.coord_range.clone());
        let z = source.next_int(config.coord_range.clone());

        if distance_from_origin(x, y, z) > config.min_radius {
            let size = source.next_int(config.size_steps.clone()) as f32 / 2.0;
            return Star { x, y, z, size };
        }
    }
}

/// One record: three integers and the size with one fractional digit,
/// space-separated, trailing space before the newline. The renderer
/// tokenizes on whitespace but existing files all carry this exact shape.
pub fn write_star(out: &mut impl Write, star: &Star) -> io::Result<()> {
    writeln!(out, "{} {} {} {:.1} ", star.x, star.y, star.z, star.size)
}

/// Samples and writes `config.count` stars in generation order.
pub fn generate(
    config: &Config,
    source: &mut impl IntSource,
    out: &mut impl Write,
) -> io::Result<()> {
    for _ in 0..config.count {
        let star = sample_star(config, source);
        write_star(out, &star)?;
    }
    Ok(())
}

/// Creates or truncates the file at `path` and writes the full star field
/// through a buffered writer. The handle is held for the whole run and
/// flushed before returning.
pub fn generate_to_file(
    config: &Config,
    source: &mut impl IntSource,
    path: impl AsRef<Path>,
) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    generate(config, source, &mut out)?;
    out.flush()
}
