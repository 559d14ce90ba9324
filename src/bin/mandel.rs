extern crate clap;
extern crate env_logger;
extern crate image;
#[macro_use]
extern crate log;
extern crate mandelbrot;
extern crate num;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use image::png::PNGEncoder;
use image::ColorType;
use mandelbrot::{ColorScheme, RenderConfig, Renderer};
use num::Complex;
use std::fs::File;
use std::io;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn parse_complex(s: &str) -> Option<Complex<f64>> {
    match parse_pair(s, ',') {
        Some((re, im)) => Some(Complex { re, im }),
        None => None,
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + PartialOrd>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn validate_positive(s: &str, isnotanumber_err: &str, isnotpositive_err: &str) -> Result<(), String> {
    match f64::from_str(s) {
        Ok(f) => {
            if f > 0.0 && f.is_finite() {
                Ok(())
            } else {
                Err(isnotpositive_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const ITERATIONS: &str = "iterations";
const RADIUS: &str = "radius";
const ZOOM: &str = "zoom";
const CENTER: &str = "center";
const PALETTE: &str = "palette";
const STRETCH: &str = "stretch";
const THREADS: &str = "threads";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("mandel")
        .version("0.1.0")
        .about("Mandelbrot renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file; standard output when omitted"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("800")
                .validator(|s| {
                    validate_range::<usize>(
                        &s,
                        1,
                        65_536,
                        "Could not parse image size",
                        "Image size must be between 1 and 65536",
                    )
                })
                .help("Width and height of the square output image"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("30")
                .validator(|s| {
                    validate_range::<usize>(
                        &s,
                        2,
                        200_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 2 and 200000",
                    )
                })
                .help("Iteration budget per sample point"),
        )
        .arg(
            Arg::with_name(RADIUS)
                .required(false)
                .long(RADIUS)
                .short("r")
                .takes_value(true)
                .default_value("2.0")
                .validator(|s| {
                    validate_positive(
                        &s,
                        "Could not parse escape radius",
                        "Escape radius must be a positive number",
                    )
                })
                .help("Escape threshold; also half the base viewport width"),
        )
        .arg(
            Arg::with_name(ZOOM)
                .required(false)
                .long(ZOOM)
                .short("z")
                .takes_value(true)
                .default_value("1.0")
                .validator(|s| {
                    validate_positive(
                        &s,
                        "Could not parse zoom ratio",
                        "Zoom ratio must be a positive number",
                    )
                })
                .help("Multiplier on the viewport width; below one zooms in"),
        )
        .arg(
            Arg::with_name(CENTER)
                .required(false)
                .long(CENTER)
                .short("c")
                .takes_value(true)
                .default_value("0,0")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse the center point"))
                .help("Center of the viewport on the complex plane, as re,im"),
        )
        .arg(
            Arg::with_name(PALETTE)
                .required(false)
                .long(PALETTE)
                .short("p")
                .takes_value(true)
                .possible_values(&["smooth", "discrete"])
                .default_value("smooth")
                .help("Coloring policy"),
        )
        .arg(
            Arg::with_name(STRETCH)
                .required(false)
                .long(STRETCH)
                .takes_value(true)
                .default_value("15.0")
                .validator(|s| {
                    validate_positive(
                        &s,
                        "Could not parse hue stretch",
                        "Hue stretch must be a positive number",
                    )
                })
                .help("Stretch factor on the smoothed hue"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("0")
                .validator(move |s| {
                    validate_range(
                        &s,
                        0,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 0 and {}", max_threads),
                    )
                })
                .help("Number of render threads; 0 means one per CPU"),
        )
        .get_matches()
}

fn write_image(
    outfile: Option<&str>,
    pixels: &[u8],
    size: usize,
) -> Result<(), std::io::Error> {
    let output: Box<dyn Write> = match outfile {
        Some(outfile) => Box::new(File::create(Path::new(outfile))?),
        None => Box::new(io::stdout()),
    };
    let encoder = PNGEncoder::new(output);
    encoder.encode(pixels, size as u32, size as u32, ColorType::RGBA(8))?;
    Ok(())
}

fn main() {
    env_logger::init();
    let matches = args();

    let size =
        usize::from_str(matches.value_of(SIZE).unwrap()).expect("Could not parse image size.");
    let iterations = usize::from_str(matches.value_of(ITERATIONS).unwrap())
        .expect("Could not parse iteration count.");
    let radius =
        f64::from_str(matches.value_of(RADIUS).unwrap()).expect("Could not parse escape radius.");
    let zoom = f64::from_str(matches.value_of(ZOOM).unwrap()).expect("Could not parse zoom ratio.");
    let center =
        parse_complex(matches.value_of(CENTER).unwrap()).expect("Could not parse center point.");
    let scheme = ColorScheme::from_str(matches.value_of(PALETTE).unwrap())
        .expect("Could not parse color scheme.");
    let stretch =
        f64::from_str(matches.value_of(STRETCH).unwrap()).expect("Could not parse hue stretch.");
    let threads = match usize::from_str(matches.value_of(THREADS).unwrap())
        .expect("Could not parse thread count.")
    {
        0 => num_cpus::get(),
        n => n,
    };

    let config = match RenderConfig::new(size, iterations, radius, zoom, center, scheme, stretch) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Bad configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "rendering a {}x{} frame, {} iterations, {} threads",
        size, size, iterations, threads
    );
    let renderer = Renderer::new(config);
    let pixels = renderer.render(threads);

    if let Err(e) = write_image(matches.value_of(OUTPUT), &pixels, size) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
