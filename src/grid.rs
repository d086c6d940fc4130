use crate::pixel::Complex;

/// Square sample grid over the classic Mandelbrot viewport.
///
/// Pixel `(x, y)` maps to `cr = 2x/size - 1.5`, `ci = 2y/size - 1.0`,
/// so the grid spans `-1.5..0.5` on the real axis and `-1.0..1.0` on the
/// imaginary axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    pub size: u32,
}

impl Grid {
    /// Imaginary component shared by every pixel in row `y`.
    pub fn imaginary_for_row(self, y: u32) -> f64 {
        2.0 * y as f64 / self.size as f64 - 1.0
    }

    /// Real component shared by every pixel in column `x`.
    pub fn real_for_column(self, x: u32) -> f64 {
        2.0 * x as f64 / self.size as f64 - 1.5
    }

    pub fn point(self, x: u32, y: u32) -> Complex {
        Complex {
            real: self.real_for_column(x),
            imaginary: self.imaginary_for_row(y),
        }
    }
}
