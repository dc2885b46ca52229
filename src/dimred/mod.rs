//! # Dimensionality Reduction
//!
//! - [`pca`]: principal component basis of a stacked sample matrix, computed through the
//!   Gram matrix or a direct SVD depending on its shape
//! - [`reconstruct`]: projection of one sample onto the leading components and back

pub mod pca;
pub mod reconstruct;
