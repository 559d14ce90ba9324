// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Drives one full-frame render: walk the pixel grid, map each pixel
//! to its sample point, evaluate escape time, colorize, and write the
//! result into a dense row-major RGBA buffer.  Every pixel depends
//! only on its own coordinates and the frozen configuration, so the
//! threaded version hands disjoint row bands to scoped threads with
//! no locking at all.

use color::{discrete, smooth, Rgba};
use config::{ColorScheme, RenderConfig};
use escape::{escape_time, Escape};
use itertools::iproduct;
use viewport::{Pixel, Viewport};

const BYTES_PER_PIXEL: usize = 4;

/// Owns a validated configuration and its derived viewport for the
/// duration of one render.  Immutable once built; rendering the same
/// Renderer twice yields byte-identical buffers.
pub struct Renderer {
    config: RenderConfig,
    viewport: Viewport,
}

impl Renderer {
    /// Build a renderer from a validated configuration.
    pub fn new(config: RenderConfig) -> Renderer {
        let viewport = Viewport::new(&config);
        Renderer { config, viewport }
    }

    /// The number of bytes in a finished frame.  Used to calculate
    /// memory needs.
    pub fn buffer_len(&self) -> usize {
        self.config.size * self.config.size * BYTES_PER_PIXEL
    }

    fn colorize(&self, escape: &Escape) -> Rgba {
        match self.config.scheme {
            ColorScheme::Discrete => discrete(escape, self.config.max_iterations),
            ColorScheme::Smooth => smooth(escape, self.config.hue_stretch),
        }
    }

    /// Render the rows of one band.  `top` is the frame row of the
    /// band's first row; the band length decides how many rows it
    /// holds, so the last band of a threaded render may be short.
    fn render_rows(&self, top: usize, band: &mut [u8]) {
        let row_stride = self.config.size * BYTES_PER_PIXEL;
        let rows = band.len() / row_stride;
        for (row, column) in iproduct!(0..rows, 0..self.config.size) {
            let point = self.viewport.pixel_to_point(&Pixel(column, top + row));
            let escape = escape_time(point, self.config.max_iterations, self.config.radius);
            let Rgba(r, g, b, a) = self.colorize(&escape);
            let offset = row * row_stride + column * BYTES_PER_PIXEL;
            band[offset] = r;
            band[offset + 1] = g;
            band[offset + 2] = b;
            band[offset + 3] = a;
        }
    }

    /// The main function for single-threaded rendering.
    pub fn render_single(&self) -> Vec<u8> {
        let mut buffer = vec![0 as u8; self.buffer_len()];
        self.render_rows(0, &mut buffer);
        buffer
    }

    /// A multi-threaded version of the render that takes a thread
    /// count as an option.  The buffer is split into contiguous row
    /// bands, one per thread; each thread owns its band exclusively,
    /// so the result is identical to the single-threaded render.
    pub fn render(&self, threads: usize) -> Vec<u8> {
        if threads <= 1 {
            return self.render_single();
        }
        let row_stride = self.config.size * BYTES_PER_PIXEL;
        let rows_per_band = self.config.size / threads + 1;
        debug!(
            "rendering {} rows across {} threads, {} rows per band",
            self.config.size, threads, rows_per_band
        );
        let mut buffer = vec![0 as u8; self.buffer_len()];
        {
            let bands: Vec<(usize, &mut [u8])> = buffer
                .chunks_mut(rows_per_band * row_stride)
                .enumerate()
                .collect();
            crossbeam::scope(|spawner| {
                for (i, band) in bands {
                    spawner.spawn(move |_| {
                        self.render_rows(i * rows_per_band, band);
                    });
                }
            })
            .unwrap();
        }
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use color::BLACK;
    use config::DEFAULT_HUE_STRETCH;
    use num::Complex;

    fn config(size: usize, scheme: ColorScheme, zoom_ratio: f64) -> RenderConfig {
        RenderConfig::new(
            size,
            30,
            2.0,
            zoom_ratio,
            Complex::new(0.0, 0.0),
            scheme,
            DEFAULT_HUE_STRETCH,
        )
        .unwrap()
    }

    fn pixel_at(buffer: &[u8], size: usize, x: usize, y: usize) -> Rgba {
        let offset = (y * size + x) * BYTES_PER_PIXEL;
        Rgba(
            buffer[offset],
            buffer[offset + 1],
            buffer[offset + 2],
            buffer[offset + 3],
        )
    }

    #[test]
    fn discrete_frame_has_black_center_and_instant_corners() {
        let size = 4;
        let renderer = Renderer::new(config(size, ColorScheme::Discrete, 1.0));
        let buffer = renderer.render_single();

        // The center pixels sample (±0.5, ±0.5).  The pair at
        // re = -0.5 sits inside the set and stays black; the pair at
        // re = +0.5 escapes after a few iterations.
        for (x, y) in &[(1, 1), (1, 2)] {
            assert_eq!(pixel_at(&buffer, size, *x, *y), BLACK);
        }
        let near = escape_time(Complex::new(0.5, 0.5), 30, 2.0);
        assert!(near.escaped);
        for (x, y) in &[(2, 1), (2, 2)] {
            assert_eq!(pixel_at(&buffer, size, *x, *y), discrete(&near, 30));
        }
        // The corners sample points of magnitude about 2.12, which
        // escape at iteration zero.
        let corner = renderer
            .viewport
            .pixel_to_point(&Pixel(0, 0));
        let e = escape_time(corner, 30, 2.0);
        assert!(e.escaped);
        assert_eq!(e.iterations, 0);
        for (x, y) in &[(0, 0), (0, 3), (3, 0), (3, 3)] {
            assert_eq!(pixel_at(&buffer, size, *x, *y), discrete(&e, 30));
        }
    }

    #[test]
    fn interior_only_smooth_frame_is_solid_black() {
        // A deep zoom on the origin keeps every sample inside the
        // set, so the non-escaping guard must hold for every pixel.
        let size = 8;
        let renderer = Renderer::new(config(size, ColorScheme::Smooth, 0.05));
        let buffer = renderer.render_single();
        for y in 0..size {
            for x in 0..size {
                assert_eq!(pixel_at(&buffer, size, x, y), BLACK);
            }
        }
    }

    #[test]
    fn every_cell_is_written_and_opaque() {
        let size = 16;
        let renderer = Renderer::new(config(size, ColorScheme::Smooth, 1.0));
        let buffer = renderer.render_single();
        assert_eq!(buffer.len(), renderer.buffer_len());
        for y in 0..size {
            for x in 0..size {
                let Rgba(_, _, _, a) = pixel_at(&buffer, size, x, y);
                assert_eq!(a, 255);
            }
        }
    }

    #[test]
    fn rendering_twice_is_byte_identical() {
        let renderer = Renderer::new(config(16, ColorScheme::Smooth, 1.0));
        assert_eq!(renderer.render_single(), renderer.render_single());
    }

    #[test]
    fn threaded_render_matches_single_threaded() {
        let renderer = Renderer::new(config(33, ColorScheme::Smooth, 1.0));
        let single = renderer.render_single();
        for threads in &[2, 3, 4, 7] {
            assert_eq!(renderer.render(*threads), single);
        }
    }
}
