// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns escape results into colors.  Two interchangeable policies: a
//! discrete ramp of the raw iteration count, and the smooth policy,
//! which derives a continuous hue from the fractional escape behavior
//! and runs it through an HSV-to-RGB conversion.  Both paint
//! non-escaping points solid black.

use escape::Escape;

/// An 8-bit RGBA pixel: red, green, blue, alpha.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

/// Solid opaque black, the color of every non-escaping point.
pub const BLACK: Rgba = Rgba(0, 0, 0, 255);

/// A hue/saturation/value triple, all components in [0, 1].
#[derive(Copy, Clone, Debug)]
pub struct Hsv {
    /// Hue, as a fraction of the full circle.
    pub h: f64,
    /// Saturation.  Zero means gray regardless of hue.
    pub s: f64,
    /// Value.
    pub v: f64,
}

/// Standard six-sector HSV-to-RGB conversion.  The sector index runs
/// 0 through 5; a hue of exactly 1.0 lands on sector 6 through
/// floating-point rounding and wraps back to sector 0.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgba {
    if hsv.s == 0.0 {
        let gray = (hsv.v * 255.0) as u8;
        return Rgba(gray, gray, gray, 255);
    }
    let mut h6 = hsv.h * 6.0;
    if h6 >= 6.0 {
        h6 = 0.0;
    }
    let i = h6.floor();
    let f = h6 - i;
    let v1 = hsv.v * (1.0 - hsv.s);
    let v2 = hsv.v * (1.0 - hsv.s * f);
    let v3 = hsv.v * (1.0 - hsv.s * (1.0 - f));
    let (r, g, b) = match i as usize {
        0 => (hsv.v, v3, v1),
        1 => (v2, hsv.v, v1),
        2 => (v1, hsv.v, v3),
        3 => (v1, v2, hsv.v),
        4 => (v3, v1, hsv.v),
        _ => (hsv.v, v1, v2),
    };
    Rgba(
        (r * 255.0) as u8,
        (g * 255.0) as u8,
        (b * 255.0) as u8,
        255,
    )
}

/// The fallback policy: a linear ramp of iteration count over green,
/// with the raw count folded into the red channel.
pub fn discrete(escape: &Escape, limit: usize) -> Rgba {
    if !escape.escaped {
        return BLACK;
    }
    let n = escape.iterations;
    Rgba((n % 256) as u8, ((n * 255 / limit) % 256) as u8, 0, 255)
}

/// The primary policy: a continuous hue from the iteration count plus
/// a log-log correction for how far past the threshold the orbit
/// landed, so neighboring counts blend instead of banding.
pub fn smooth(escape: &Escape, hue_stretch: f64) -> Rgba {
    // The inner log is only defined when the final magnitude exceeds
    // one.  That excludes orbits that ran out the budget, and also
    // escaped orbits when the threshold is below one.  Both take the
    // black path, never the formula.
    if !escape.escaped || escape.last.norm() <= 1.0 {
        return BLACK;
    }
    let n = escape.iterations as f64;
    let mut hue = (n + 1.0) - escape.last.norm().ln().ln() / 2.0_f64.ln();
    hue = 0.95 + hue_stretch * hue; // adjust to make it prettier
    while hue > 360.0 {
        hue -= 360.0;
    }
    while hue < 0.0 {
        hue += 360.0;
    }
    hsv_to_rgb(Hsv {
        h: hue / 360.0,
        s: n / (n + 8.0),
        v: 1.0,
    })
}
