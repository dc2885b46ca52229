use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use gesture_pca::StrategyChoice;

/// Gestures recorded for the hand-pose basis, in row order.
pub const DEFAULT_GESTURES: [&str; 7] = ["剪刀", "拳头", "布", "good", "666", "1", "ok"];

/// Compute a PCA basis from recorded gesture trajectories and write it as `proj.json`.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding one `<name>.json` recording per gesture
    #[arg(short, long, default_value = ".")]
    pub input_dir: PathBuf,

    /// Gesture names to load, in order
    #[arg(short, long, num_args = 1.., default_values_t = DEFAULT_GESTURES.map(String::from))]
    pub names: Vec<String>,

    /// Index of the gesture to project and reconstruct
    #[arg(short, long, default_value_t = 6)]
    pub sample: usize,

    /// Number of leading components used for the reconstruction
    #[arg(short = 'k', long = "components", default_value_t = 3)]
    pub k: usize,

    /// Where to write the basis
    #[arg(short, long, default_value = "proj.json")]
    pub output: PathBuf,

    /// Also write the singular values to this file
    #[arg(long)]
    pub singular_values: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = StrategyArg::Auto)]
    pub strategy: StrategyArg,
}

/// How the basis is computed.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum StrategyArg {
    /// Gram matrix when there are more dimensions than gestures, SVD otherwise
    Auto,
    /// Eigendecomposition of the Gram matrix
    Gram,
    /// Singular value decomposition of the data matrix
    Direct,
}

impl From<StrategyArg> for StrategyChoice {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Auto => StrategyChoice::Auto,
            StrategyArg::Gram => StrategyChoice::Gram,
            StrategyArg::Direct => StrategyChoice::Direct,
        }
    }
}
