#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set takes a point on the complex plane and
//! repeatedly multiplies it by itself, measuring how quickly that
//! number goes to infinity.  This "velocity" is the number used to
//! render the image: points that rocket away get banded (or, with the
//! smooth palette, continuously blended) colors, and points that
//! never leave the threshold circle make up the black heart of the
//! set.
//!
//! Rendering a frame is three steps, evaluated per pixel with nothing
//! shared but the frozen configuration: map the pixel to its sample
//! point on the complex plane, iterate the recurrence until the orbit
//! escapes or the budget runs out, and turn that result into a color.

extern crate crossbeam;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;

#[cfg(test)]
extern crate rand;

pub mod color;
pub mod config;
pub mod escape;
pub mod render;
pub mod viewport;

pub use config::{ColorScheme, RenderConfig};
pub use render::Renderer;
