use log::debug;
use nalgebra::linalg::SVD;
use ndarray::{Array1, Array2, ArrayView2};
use nshare::{IntoNalgebra, IntoNdarray2};

use crate::error::{PcaError, Result};
use crate::svd::{validate_input, BasisStrategy};
use crate::utils::{descending_order, reorder_rows};

/// Basis from the thin SVD of `X`: the rows of `Vᵗ`, `min(N, D)` of them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectSvd;

impl BasisStrategy for DirectSvd {
    fn name(&self) -> &'static str {
        "direct-svd"
    }

    fn compute(&self, x: ArrayView2<f64>) -> Result<(Array2<f64>, Array1<f64>)> {
        validate_input(x)?;
        let matrix = x.to_owned().into_nalgebra();

        let svd = SVD::try_new(matrix, false, true, f64::EPSILON, 0)
            .ok_or(PcaError::SvdNotConverged)?;
        let vt = svd
            .v_t
            .ok_or(PcaError::SvdNotConverged)?
            .into_ndarray2()
            .into_owned();
        let s = Array1::from(svd.singular_values.as_slice().to_vec());

        let order = descending_order(&s);
        let (s, vt) = reorder_rows(&s, &vt, &order);

        debug!(
            "Direct SVD: {} components, leading singular value {:.6}",
            s.len(),
            s.first().copied().unwrap_or(0.0)
        );

        Ok((vt, s))
    }
}
