use log::debug;
use nalgebra::SymmetricEigen;
use ndarray::{Array1, Array2, ArrayView2};
use nshare::{IntoNalgebra, IntoNdarray2};

use crate::error::{PcaError, Result};
use crate::svd::{validate_input, BasisStrategy, DEFAULT_TOLERANCE};
use crate::utils::{descending_order, reorder_rows};

/// Basis from the eigendecomposition of the Gram matrix `X·Xᵗ`.
///
/// Produces one component per sample (N×D). Every component is divided by its singular
/// value, so a rank-deficient input is rejected with [`PcaError::DegenerateComponent`].
#[derive(Debug, Clone, Copy)]
pub struct GramEigen {
    tolerance: f64,
}

impl GramEigen {
    pub fn new() -> Self {
        GramEigen {
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Singular values at or below `tolerance * S[0]` are reported as degenerate.
    pub fn with_tolerance(tolerance: f64) -> Self {
        GramEigen { tolerance }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

impl Default for GramEigen {
    fn default() -> Self {
        Self::new()
    }
}

impl BasisStrategy for GramEigen {
    fn name(&self) -> &'static str {
        "gram-eigen"
    }

    fn compute(&self, x: ArrayView2<f64>) -> Result<(Array2<f64>, Array1<f64>)> {
        validate_input(x)?;
        let gram = x.dot(&x.t());
        let eigen = SymmetricEigen::new(gram.into_nalgebra());

        // Round-off can push eigenvalues of a PSD matrix slightly below zero.
        let eigenvalues: Array1<f64> = eigen.eigenvalues.iter().map(|&e| e.max(0.0)).collect();
        let eigenvectors = eigen.eigenvectors.into_ndarray2().into_owned();

        // (Xᵗ·E)ᵗ, one D-dimensional component per eigenvector
        let components = eigenvectors.t().dot(&x);

        let order = descending_order(&eigenvalues);
        let (eigenvalues, mut components) = reorder_rows(&eigenvalues, &components, &order);
        let s = eigenvalues.mapv(f64::sqrt);

        let s_max = s.first().copied().unwrap_or(0.0);
        if let Some((index, &value)) = s
            .iter()
            .enumerate()
            .find(|&(_, &v)| v == 0.0 || v <= self.tolerance * s_max)
        {
            return Err(PcaError::DegenerateComponent { index, value });
        }

        for (mut row, &sigma) in components.rows_mut().into_iter().zip(s.iter()) {
            row.mapv_inplace(|v| v / sigma);
        }

        debug!(
            "Gram eigendecomposition: {} components, leading singular value {:.6}",
            s.len(),
            s_max
        );

        Ok((components, s))
    }
}
