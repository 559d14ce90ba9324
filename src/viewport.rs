// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the Viewport struct, which describes a relationship
//! between the integral pixel plane with an origin at 0,0 and the
//! rectangle of the complex plane being sampled, defined by a center,
//! a width, and a zoom ratio.

use config::RenderConfig;
use num::Complex;

/// Describes the x, y of a point on the integral pixel plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// We don't need a Point, as a single Complex number is a Point.

/// The region of the complex plane covered by one frame, derived
/// once per render.  Sample points land at pixel centers, not
/// corners, and pixel spacing is identical in both axes, so there is
/// no aspect distortion.
#[derive(Copy, Clone, Debug)]
pub struct Viewport {
    size: usize,
    left: f64,
    top: f64,
    pixel_width: f64,
}

impl Viewport {
    /// Derive the viewport from a validated configuration.
    pub fn new(config: &RenderConfig) -> Viewport {
        let zoom_width = config.radius * 2.0 * config.zoom_ratio;
        let pixel_width = zoom_width / (config.size as f64);
        // Square frame, so the view height equals the zoom width.
        // For a rectangular frame this would be (height/width) times
        // the zoom width, with the same pixel spacing on both axes.
        let view_height = zoom_width;
        Viewport {
            size: config.size,
            left: (config.center.re - zoom_width / 2.0) + pixel_width / 2.0,
            top: (config.center.im - view_height / 2.0) + pixel_width / 2.0,
            pixel_width,
        }
    }

    /// Given a pixel on the integral plane, return the complex number
    /// at the center of that pixel's cell.  Coordinates outside the
    /// frame are a caller contract violation; in release builds they
    /// extrapolate along the same grid.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        debug_assert!(pixel.0 < self.size && pixel.1 < self.size);
        Complex::new(
            self.left + (pixel.0 as f64) * self.pixel_width,
            self.top + (pixel.1 as f64) * self.pixel_width,
        )
    }
}
