pub mod dataset;
pub mod dimred;
pub mod error;
pub mod persist;
pub mod svd;
mod utils;

pub use dataset::Dataset;
pub use dimred::pca::{pca, PcaBasis, PcaBuilder, StrategyChoice};
pub use dimred::reconstruct::{reconstruct, Reconstruction};
pub use error::PcaError;
pub use utils::rows_orthonormal;
