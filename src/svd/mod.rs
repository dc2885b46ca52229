//! # Basis strategies
//!
//! Two ways of obtaining the right-singular basis of a sample matrix `X` (N×D):
//!
//! - [`GramEigen`]: eigendecomposition of the N×N Gram matrix `X·Xᵗ`. Cheap when samples are
//!   few and wide, since the D×D covariance is never formed.
//! - [`DirectSvd`]: thin singular value decomposition of `X`.
//!
//! Both return `(V, S)` with the rows of `V` ordered by descending singular value.

use ndarray::{Array1, Array2, ArrayView2};

use crate::error::{PcaError, Result};

pub mod direct;
pub mod gram;

pub use direct::DirectSvd;
pub use gram::GramEigen;

/// Relative threshold below which a singular value is treated as zero.
///
/// Normalizing by σ amplifies eigensolver error by about `ε·(S[0]/σ)²`; at `1e-4` the
/// recovered rows stay orthonormal within `1e-6`.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

pub trait BasisStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Returns the basis `V` (one component per row) and the matching singular values `S`.
    ///
    /// Empty or non-finite input is rejected before any decomposition.
    fn compute(&self, x: ArrayView2<f64>) -> Result<(Array2<f64>, Array1<f64>)>;
}

pub(crate) fn validate_input(x: ArrayView2<f64>) -> Result<()> {
    if x.nrows() == 0 || x.ncols() == 0 {
        return Err(PcaError::EmptyDataset);
    }
    if let Some(((row, col), _)) = x.indexed_iter().find(|(_, v)| !v.is_finite()) {
        return Err(PcaError::NonFinite { row, col });
    }
    Ok(())
}
