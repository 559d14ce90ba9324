// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time evaluator: runs the Mandelbrot recurrence from a
//! sample point and reports how quickly the orbit left the threshold
//! circle, or that it never did within the iteration budget.

use num::Complex;

/// The outcome of iterating one sample point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Escape {
    /// The iteration at which the orbit crossed the threshold, or the
    /// full budget if it never did.
    pub iterations: usize,
    /// False iff the orbit survived the whole budget, in which case
    /// `iterations` equals the budget.
    pub escaped: bool,
    /// The orbit value at the iteration the loop stopped.  For a
    /// non-escaping point its magnitude is still within the threshold
    /// and it must not be fed to the log-log smoothing formula.
    pub last: Complex<f64>,
}

/// Iterate `z = z*z + c` from `z = c`, at most `limit` times, and
/// report the first iteration at which `|z|` exceeded `radius`.  Pure
/// and always terminating; a sample already outside the threshold
/// escapes at iteration zero.
pub fn escape_time(c: Complex<f64>, limit: usize, radius: f64) -> Escape {
    // Comparing squared magnitudes keeps the square root off the hot
    // path; `z * z` is true complex squaring, never a log-based power.
    let threshold = radius * radius;
    let mut z = c;
    for i in 0..limit {
        if z.norm_sqr() > threshold {
            return Escape {
                iterations: i,
                escaped: true,
                last: z,
            };
        }
        z = z * z + c;
    }
    Escape {
        iterations: limit,
        escaped: false,
        last: z,
    }
}
