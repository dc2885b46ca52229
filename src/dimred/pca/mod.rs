//! # Principal Component Analysis
//!
//! Computes an orthonormal basis for a set of stacked samples (N×D), ordered by descending
//! singular value. The samples are used as given: no centering or scaling is applied.
//!
//! The strategy is picked from the shape of the data: wide inputs (D > N) go through the
//! Gram matrix eigendecomposition, everything else through a direct SVD. Either can be
//! forced with [`PcaBuilder::strategy`].

use log::debug;
use ndarray::{s, Array1, Array2, ArrayView1, ArrayView2};

use crate::error::{PcaError, Result};
use crate::svd::{BasisStrategy, DirectSvd, GramEigen, DEFAULT_TOLERANCE};
use crate::utils::rows_orthonormal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyChoice {
    /// Gram eigendecomposition when there are more dimensions than samples, SVD otherwise.
    #[default]
    Auto,
    Gram,
    Direct,
}

pub struct PcaBuilder {
    strategy: StrategyChoice,
    tolerance: f64,
}

impl PcaBuilder {
    pub fn new() -> Self {
        PcaBuilder {
            strategy: StrategyChoice::Auto,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    pub fn strategy(mut self, strategy: StrategyChoice) -> Self {
        self.strategy = strategy;
        self
    }

    /// Relative singular value threshold used by the Gram strategy to reject
    /// rank-deficient directions.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn build(self) -> Pca {
        Pca {
            strategy: self.strategy,
            tolerance: self.tolerance,
        }
    }
}

impl Default for PcaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Pca {
    strategy: StrategyChoice,
    tolerance: f64,
}

impl Pca {
    pub fn fit(&self, x: ArrayView2<f64>) -> Result<PcaBasis> {
        let (n_samples, dim) = x.dim();

        let use_gram = match self.strategy {
            StrategyChoice::Auto => dim > n_samples,
            StrategyChoice::Gram => true,
            StrategyChoice::Direct => false,
        };

        if use_gram {
            fit_with(&GramEigen::with_tolerance(self.tolerance), x)
        } else {
            fit_with(&DirectSvd, x)
        }
    }
}

/// Basis of `x` with the strategy chosen from its shape.
pub fn pca(x: ArrayView2<f64>) -> Result<PcaBasis> {
    PcaBuilder::new().build().fit(x)
}

/// Basis of `x` computed with an explicit strategy.
pub fn fit_with<S: BasisStrategy>(strategy: &S, x: ArrayView2<f64>) -> Result<PcaBasis> {
    let (n_samples, dim) = x.dim();
    debug!(
        "Computing PCA basis for {} samples x {} dimensions using {}",
        n_samples,
        dim,
        strategy.name()
    );

    let (components, singular_values) = strategy.compute(x)?;

    Ok(PcaBasis {
        components,
        singular_values,
        strategy: strategy.name(),
    })
}

/// An orthonormal basis `V` (one component per row) with its singular values `S`.
///
/// `S` is non-negative and descending, and `S[i]` belongs to row `i` of `V`.
#[derive(Debug, Clone)]
pub struct PcaBasis {
    components: Array2<f64>,
    singular_values: Array1<f64>,
    strategy: &'static str,
}

impl PcaBasis {
    pub fn components(&self) -> &Array2<f64> {
        &self.components
    }

    pub fn singular_values(&self) -> &Array1<f64> {
        &self.singular_values
    }

    pub fn into_parts(self) -> (Array2<f64>, Array1<f64>) {
        (self.components, self.singular_values)
    }

    /// Name of the strategy that produced this basis.
    pub fn strategy(&self) -> &'static str {
        self.strategy
    }

    pub fn n_components(&self) -> usize {
        self.components.nrows()
    }

    pub fn dim(&self) -> usize {
        self.components.ncols()
    }

    pub fn component(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.n_components()).then(|| self.components.row(index))
    }

    /// Share of the total squared singular values carried by each component.
    pub fn explained_variance_ratio(&self) -> Array1<f64> {
        let variance = self.singular_values.mapv(|s| s * s);
        let total = variance.sum();
        if total == 0.0 {
            return Array1::zeros(variance.len());
        }
        variance / total
    }

    pub fn cumulative_explained_variance_ratio(&self) -> Array1<f64> {
        let mut sum = 0.0;
        self.explained_variance_ratio().mapv(|ratio| {
            sum += ratio;
            sum
        })
    }

    pub fn is_orthonormal(&self, tol: f64) -> bool {
        rows_orthonormal(self.components.view(), tol)
    }

    /// The leading `k` components.
    pub fn truncate(&self, k: usize) -> Result<PcaBasis> {
        if k > self.n_components() {
            return Err(PcaError::TooManyComponents {
                requested: k,
                available: self.n_components(),
            });
        }
        Ok(PcaBasis {
            components: self.components.slice(s![..k, ..]).to_owned(),
            singular_values: self.singular_values.slice(s![..k]).to_owned(),
            strategy: self.strategy,
        })
    }
}
