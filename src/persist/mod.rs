//! JSON persistence for the basis (`proj.json`): a nested array with one row per component.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::info;
use ndarray::{Array2, ArrayView1, ArrayView2};
use serde::Serialize;

use crate::error::{PcaError, Result};

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let io_err = |source| PcaError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
    serde_json::to_writer(&mut writer, value).map_err(|source| PcaError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(io_err)
}

pub fn write_basis(path: &Path, basis: ArrayView2<f64>) -> Result<()> {
    let rows: Vec<Vec<f64>> = basis.outer_iter().map(|row| row.to_vec()).collect();
    write_json(path, &rows)?;
    info!(
        "Wrote {}x{} basis to {}",
        basis.nrows(),
        basis.ncols(),
        path.display()
    );
    Ok(())
}

pub fn write_singular_values(path: &Path, singular_values: ArrayView1<f64>) -> Result<()> {
    write_json(path, &singular_values.to_vec())?;
    info!(
        "Wrote {} singular values to {}",
        singular_values.len(),
        path.display()
    );
    Ok(())
}

pub fn read_basis(path: &Path) -> Result<Array2<f64>> {
    let file = File::open(path).map_err(|source| PcaError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rows: Vec<Vec<f64>> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| PcaError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let dim = rows.first().map_or(0, Vec::len);
    let mut basis = Array2::zeros((rows.len(), dim));
    for (i, row) in rows.iter().enumerate() {
        if row.len() != dim {
            return Err(PcaError::RaggedRecord {
                row: i,
                expected: dim,
                found: row.len(),
            });
        }
        basis.row_mut(i).assign(&ArrayView1::from(row.as_slice()));
    }

    Ok(basis)
}
