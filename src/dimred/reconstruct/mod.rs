//! Projection of a single sample onto the leading `k` components and back.
//!
//! `main_data` keeps the length of the sample: its first `k` entries are the projections
//! onto the first `k` components and the rest are zero. This padding mirrors the source
//! script and is probably unintended there; the compact `k`-length projection is
//! [`Reconstruction::scores`].

use ndarray::{s, Array1, ArrayView1, ArrayView2};

use crate::error::{PcaError, Result};

#[derive(Debug, Clone)]
pub struct Reconstruction {
    main_data: Array1<f64>,
    recov_data: Array1<f64>,
    k: usize,
}

impl Reconstruction {
    /// Projections onto the leading components, zero-padded to the sample dimension.
    pub fn main_data(&self) -> &Array1<f64> {
        &self.main_data
    }

    /// The sample rebuilt from `main_data`.
    pub fn recov_data(&self) -> &Array1<f64> {
        &self.recov_data
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// The `k` populated entries of `main_data`.
    pub fn scores(&self) -> ArrayView1<'_, f64> {
        self.main_data.slice(s![..self.k])
    }

    /// Euclidean distance between `data` and its reconstruction.
    pub fn residual_norm(&self, data: ArrayView1<f64>) -> f64 {
        (&data - &self.recov_data).mapv(|v| v * v).sum().sqrt()
    }
}

/// Projects `data` onto the first `k` rows of `proj` and reconstructs it.
///
/// `recov_data` is `main_data · proj`, the zero-pad-then-multiply pattern of the source
/// script, kept as is although it is likely a bug there. Entries of `main_data` past `k`
/// are zero, so only the first `min(proj.nrows(), D)` entries take part in the product.
pub fn reconstruct(
    data: ArrayView1<f64>,
    proj: ArrayView2<f64>,
    k: usize,
) -> Result<Reconstruction> {
    let (n_components, dim) = proj.dim();

    if data.len() != dim {
        return Err(PcaError::DimensionMismatch {
            name: "sample".to_string(),
            expected: dim,
            found: data.len(),
        });
    }
    let rows = n_components.min(dim);
    if k > rows {
        return Err(PcaError::TooManyComponents {
            requested: k,
            available: rows,
        });
    }

    let mut main_data = Array1::zeros(dim);
    main_data
        .slice_mut(s![..k])
        .assign(&proj.slice(s![..k, ..]).dot(&data));

    let recov_data = main_data
        .slice(s![..rows])
        .dot(&proj.slice(s![..rows, ..]));

    Ok(Reconstruction {
        main_data,
        recov_data,
        k,
    })
}
