//! # Gesture datasets
//!
//! Each recorded gesture lives in `<name>.json` as an object with a `data` key holding one
//! row per tracked joint. The last column of every row is dropped and the remaining
//! coordinates are concatenated row by row into a single sample vector.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{debug, info};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use serde::Deserialize;

use crate::error::{PcaError, Result};

/// A recorded gesture as stored on disk. Keys other than `data` are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct GestureRecord {
    pub data: Vec<Vec<f64>>,
}

/// Flattens a record into a sample, dropping the last column of every row.
pub fn flatten_record(record: &GestureRecord) -> Result<Array1<f64>> {
    let Some(width) = record.data.first().map(Vec::len) else {
        return Ok(Array1::zeros(0));
    };

    if let Some((row, found)) = record
        .data
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != width)
    {
        return Err(PcaError::RaggedRecord {
            row,
            expected: width,
            found,
        });
    }

    let kept = width.saturating_sub(1);
    Ok(record
        .data
        .iter()
        .flat_map(|row| row[..kept].iter().copied())
        .collect())
}

/// Reads `<dir>/<name>.json` and flattens it into a sample.
pub fn load_sample(dir: &Path, name: &str) -> Result<Array1<f64>> {
    let path = dir.join(format!("{name}.json"));
    let file = File::open(&path).map_err(|source| PcaError::Io {
        path: path.clone(),
        source,
    })?;
    let record: GestureRecord = serde_json::from_reader(BufReader::new(file))
        .map_err(|source| PcaError::Json { path, source })?;

    let sample = flatten_record(&record)?;
    debug!("Loaded gesture `{}` with dimension {}", name, sample.len());
    Ok(sample)
}

/// Named samples stacked into an N×D matrix, one row per sample in load order.
#[derive(Debug, Clone)]
pub struct Dataset {
    names: Vec<String>,
    matrix: Array2<f64>,
}

impl Dataset {
    pub fn from_samples(samples: Vec<(String, Array1<f64>)>) -> Result<Self> {
        let Some(dim) = samples.first().map(|(_, s)| s.len()) else {
            return Err(PcaError::EmptyDataset);
        };

        let mut matrix = Array2::zeros((samples.len(), dim));
        let mut names = Vec::with_capacity(samples.len());

        for (i, (name, sample)) in samples.into_iter().enumerate() {
            if sample.len() != dim {
                return Err(PcaError::DimensionMismatch {
                    name,
                    expected: dim,
                    found: sample.len(),
                });
            }
            matrix.row_mut(i).assign(&sample);
            names.push(name);
        }

        Ok(Dataset { names, matrix })
    }

    /// Loads `<dir>/<name>.json` for every name, in order.
    pub fn load<S: AsRef<str>>(dir: &Path, names: &[S]) -> Result<Self> {
        let samples = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                load_sample(dir, name).map(|sample| (name.to_string(), sample))
            })
            .collect::<Result<Vec<_>>>()?;

        let dataset = Self::from_samples(samples)?;
        info!(
            "Loaded {} gestures of dimension {} from {}",
            dataset.n_samples(),
            dataset.dim(),
            dir.display()
        );
        Ok(dataset)
    }

    pub fn matrix(&self) -> ArrayView2<'_, f64> {
        self.matrix.view()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn n_samples(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn dim(&self) -> usize {
        self.matrix.ncols()
    }

    pub fn sample(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.n_samples()).then(|| self.matrix.row(index))
    }

    pub fn sample_by_name(&self, name: &str) -> Option<ArrayView1<'_, f64>> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.matrix.row(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::fs;
    use std::path::PathBuf;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("gesture_pca_{}_{}", tag, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_flatten_drops_last_column() {
        let record = GestureRecord {
            data: vec![vec![1.0, 2.0, 3.0, 0.9], vec![4.0, 5.0, 6.0, 0.8]],
        };
        let sample = flatten_record(&record).unwrap();

        assert_eq!(sample, array![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_flatten_rejects_ragged_rows() {
        let record = GestureRecord {
            data: vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]],
        };

        assert!(matches!(
            flatten_record(&record),
            Err(PcaError::RaggedRecord { row: 1, expected: 3, found: 2 })
        ));
    }

    #[test]
    fn test_load_dataset_preserves_order() {
        let dir = scratch_dir("load");
        fs::write(
            dir.join("剪刀.json"),
            r#"{"data": [[1.0, 2.0, 3.0, 1.0], [4.0, 5.0, 6.0, 1.0]], "label": "scissors"}"#,
        )
        .unwrap();
        fs::write(
            dir.join("ok.json"),
            r#"{"data": [[0.5, 0.0, 1.5, 1.0], [2.0, 1.0, 0.0, 1.0]]}"#,
        )
        .unwrap();

        let dataset = Dataset::load(&dir, &["ok", "剪刀"]).unwrap();

        assert_eq!(dataset.names(), &["ok".to_string(), "剪刀".to_string()]);
        assert_eq!(dataset.matrix().dim(), (2, 6));
        assert_eq!(
            dataset.sample_by_name("剪刀").unwrap(),
            array![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]
        );
        assert_eq!(dataset.sample(0).unwrap(), array![0.5, 0.0, 1.5, 2.0, 1.0, 0.0]);
        assert!(dataset.sample(2).is_none());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let dir = scratch_dir("missing");
        let err = Dataset::load(&dir, &["拳头"]).unwrap_err();

        match err {
            PcaError::Io { path, .. } => assert!(path.ends_with("拳头.json")),
            other => panic!("unexpected error: {other}"),
        }
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_malformed_json() {
        let dir = scratch_dir("malformed");
        fs::write(dir.join("布.json"), r#"{"data": [[1.0, 2.0"#).unwrap();

        assert!(matches!(
            load_sample(&dir, "布"),
            Err(PcaError::Json { .. })
        ));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_dimension_mismatch() {
        let samples = vec![
            ("good".to_string(), array![1.0, 2.0, 3.0]),
            ("666".to_string(), array![1.0, 2.0]),
        ];

        match Dataset::from_samples(samples).unwrap_err() {
            PcaError::DimensionMismatch {
                name,
                expected,
                found,
            } => {
                assert_eq!(name, "666");
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_dataset() {
        assert!(matches!(
            Dataset::from_samples(Vec::new()),
            Err(PcaError::EmptyDataset)
        ));
    }
}
