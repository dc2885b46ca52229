mod cli;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;

use gesture_pca::{persist, reconstruct, Dataset, PcaBuilder};

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    run(&Cli::parse())
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let dataset = Dataset::load(&cli.input_dir, cli.names.as_slice())
        .context("failed to load gesture recordings")?;

    let basis = PcaBuilder::new()
        .strategy(cli.strategy.into())
        .build()
        .fit(dataset.matrix())
        .context("failed to compute PCA basis")?;
    info!(
        "Basis has {} components of dimension {} ({})",
        basis.n_components(),
        basis.dim(),
        basis.strategy()
    );
    info!(
        "Cumulative explained variance: {}",
        basis.cumulative_explained_variance_ratio()
    );

    let sample = dataset.sample(cli.sample).with_context(|| {
        format!(
            "sample index {} is out of range for {} gestures",
            cli.sample,
            dataset.n_samples()
        )
    })?;
    let rec = reconstruct(sample, basis.components().view(), cli.k).with_context(|| {
        format!(
            "failed to reconstruct `{}` from {} components",
            dataset.names()[cli.sample],
            cli.k
        )
    })?;
    println!("{}", rec.main_data());
    println!("({}, {})", rec.recov_data(), rec.main_data());

    persist::write_basis(&cli.output, basis.components().view())?;
    if let Some(path) = &cli.singular_values {
        persist::write_singular_values(path, basis.singular_values().view())?;
    }

    Ok(())
}
