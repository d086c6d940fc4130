//! Drives the sample grid through the escape test and the checksum fold.

use log::{debug, trace};
use rayon::prelude::{IntoParallelIterator, ParallelIterator};

use crate::{checksum::BitPacker, escape, grid::Grid, pixel::Complex};

/// One checksum workload: grid geometry plus the escape-test bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Params {
    pub grid: Grid,
    pub iterations: u32,
    pub threshold: f64,
}

impl Params {
    /// The fixed workload of the shipped binary.
    pub const CLASSIC: Self = Params {
        grid: Grid { size: 500 },
        iterations: 50,
        threshold: 4.0,
    };

    pub fn with_size(size: u32) -> Self {
        Params {
            grid: Grid { size },
            ..Self::CLASSIC
        }
    }
}

/// Reference semantics: one pass over the grid in row-major order, feeding
/// every escape flag through a single packer.
///
/// The packer is cleared only by its own flush rules. Because every row ends
/// in either the eighth-bit flush or the padded flush, each row happens to
/// begin with an empty accumulator, but nothing here resets it directly.
pub fn checksum_sequential(params: Params) -> u32 {
    let mut packer = BitPacker::new();

    for y in 0..params.grid.size {
        let ci = params.grid.imaginary_for_row(y);
        for x in 0..params.grid.size {
            let cr = params.grid.real_for_column(x);
            let c = Complex {
                real: cr,
                imaginary: ci,
            };
            packer.push(escape::escapes(c, params.iterations, params.threshold));
        }
        packer.flush_padded();
    }

    packer.sum()
}

/// Row-parallel variant producing the identical checksum.
///
/// Rows are embarrassingly parallel as plain escape-flag sequences, but the
/// byte boundaries depend on sequential bit accumulation, so the fold walks
/// the collected rows through one packer in row-major order.
pub fn checksum_parallel(params: Params) -> u32 {
    trace!("begin parallel checksum, size {}", params.grid.size);

    let rows: Vec<Vec<bool>> = (0..params.grid.size)
        .into_par_iter()
        .map(|y| row_escapes(params, y))
        .collect();

    if log::log_enabled!(log::Level::Debug) {
        let escaped: usize = rows
            .iter()
            .map(|row| row.iter().filter(|&&flag| flag).count())
            .sum();
        let total = params.grid.size as usize * params.grid.size as usize;
        debug!("{} of {} samples escaped", escaped, total);
    }

    let mut packer = BitPacker::new();
    for row in &rows {
        for &escaped in row {
            packer.push(escaped);
        }
        packer.flush_padded();
    }

    trace!("end parallel checksum");
    packer.sum()
}

fn row_escapes(params: Params, y: u32) -> Vec<bool> {
    let ci = params.grid.imaginary_for_row(y);
    (0..params.grid.size)
        .map(|x| {
            let c = Complex {
                real: params.grid.real_for_column(x),
                imaginary: ci,
            };
            escape::escapes(c, params.iterations, params.threshold)
        })
        .collect()
}
