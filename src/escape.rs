//! Escape-time test ([Wikipedia](https://en.wikipedia.org/wiki/Plotting_algorithms_for_the_Mandelbrot_set)).

use crate::pixel::Complex;

/// Iterate `z ← z² + c` from the origin, at most `limit` times, and report
/// whether `|z|²` exceeds `threshold` before the budget runs out.
///
/// Each pass forms the new real part from the squares carried over from the
/// previous pass, the new imaginary part from the new real part and the old
/// imaginary part, and only then recomputes the squares. The checksum folded
/// over these flags is sensitive to f64 rounding, so the ordering is load
/// bearing.
pub fn escapes(c: Complex, limit: u32, threshold: f64) -> bool {
    let mut zi = 0.0;
    let mut zrzr = 0.0;
    let mut zizi = 0.0;

    for _ in 0..limit {
        let zr = zrzr - zizi + c.real;
        zi = 2.0 * zr * zi + c.imaginary;

        zrzr = zr * zr;
        zizi = zi * zi;

        debug_assert!(zrzr.is_finite() && zizi.is_finite());

        if zrzr + zizi > threshold {
            return true;
        }
    }

    false
}
