// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The frozen per-render configuration.  Every knob the kernel reads
//! lives here, validated once at construction; nothing in the render
//! path re-checks or mutates it.

use num::Complex;
use std::str::FromStr;

/// The default stretch applied to the smoothed hue.  Entirely an
/// aesthetic choice; larger values cycle the palette faster.
pub const DEFAULT_HUE_STRETCH: f64 = 15.0;

/// Which of the two coloring policies to apply to escape results.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ColorScheme {
    /// A linear ramp of the raw iteration count over green.
    Discrete,
    /// Log-log smoothed, hue-cycled HSV coloring.
    Smooth,
}

impl FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<ColorScheme, String> {
        match s {
            "discrete" => Ok(ColorScheme::Discrete),
            "smooth" => Ok(ColorScheme::Smooth),
            other => Err(format!("Unrecognized color scheme: {}", other)),
        }
    }
}

/// Everything one render needs to know.  Constructed once from
/// external input through [`RenderConfig::new`], read-only after
/// that.
#[derive(Copy, Clone, Debug)]
pub struct RenderConfig {
    /// Width and height of the frame in pixels.  Frames are square.
    pub size: usize,
    /// The iteration budget given to each sample point.
    pub max_iterations: usize,
    /// The escape threshold, and also half the base viewport width.
    pub radius: f64,
    /// Multiplier on the viewport width.  Values below one zoom in.
    pub zoom_ratio: f64,
    /// The complex-plane coordinate at the center of the viewport.
    pub center: Complex<f64>,
    /// The coloring policy.
    pub scheme: ColorScheme,
    /// Stretch factor on the smoothed hue.  Ignored by the discrete
    /// scheme.
    pub hue_stretch: f64,
}

impl RenderConfig {
    /// Validating constructor.  The kernel assumes these invariants
    /// hold, so a config that fails any of them is refused here.
    pub fn new(
        size: usize,
        max_iterations: usize,
        radius: f64,
        zoom_ratio: f64,
        center: Complex<f64>,
        scheme: ColorScheme,
        hue_stretch: f64,
    ) -> Result<RenderConfig, String> {
        if size == 0 {
            return Err("The image size must be at least one pixel.".to_string());
        }
        if max_iterations < 2 {
            return Err("The iteration budget must be at least two.".to_string());
        }
        if !(radius > 0.0) {
            return Err("The escape radius must be a positive number.".to_string());
        }
        if !(zoom_ratio > 0.0) {
            return Err("The zoom ratio must be a positive number.".to_string());
        }
        if !(hue_stretch > 0.0) || !hue_stretch.is_finite() {
            return Err("The hue stretch must be a positive, finite number.".to_string());
        }
        Ok(RenderConfig {
            size,
            max_iterations,
            radius,
            zoom_ratio,
            center,
            scheme,
            hue_stretch,
        })
    }
}
