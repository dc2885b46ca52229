use std::fs;
use std::path::{Path, PathBuf};

use approx::assert_abs_diff_eq;
use gesture_pca::persist::{read_basis, write_basis};
use gesture_pca::{pca, reconstruct, rows_orthonormal, Dataset, PcaError};
use ndarray::s;
use rand::{rngs::StdRng, Rng, SeedableRng};

const GESTURES: [&str; 7] = ["剪刀", "拳头", "布", "good", "666", "1", "ok"];
const JOINTS: usize = 21;

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("gesture_pca_it_{}_{}", tag, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Writes one recording per gesture: 21 joints of (x, y, z, visibility).
fn write_recordings(dir: &Path, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for name in GESTURES {
        let data: Vec<Vec<f64>> = (0..JOINTS)
            .map(|_| {
                vec![
                    rng.random_range(0.0..1.0),
                    rng.random_range(0.0..1.0),
                    rng.random_range(-0.1..0.1),
                    rng.random_range(0.5..1.0),
                ]
            })
            .collect();
        let json = serde_json::json!({ "data": data });
        fs::write(dir.join(format!("{name}.json")), json.to_string()).unwrap();
    }
}

#[test]
fn seven_gestures_end_to_end() {
    let dir = scratch_dir("end_to_end");
    write_recordings(&dir, 7);

    let dataset = Dataset::load(&dir, &GESTURES).unwrap();
    assert_eq!(dataset.matrix().dim(), (7, 63));

    let basis = pca(dataset.matrix()).unwrap();
    assert_eq!(basis.components().shape(), &[7, 63]);
    assert_eq!(basis.singular_values().len(), 7);
    assert!(rows_orthonormal(basis.components().view(), 1e-6));
    let s = basis.singular_values();
    assert!(s.iter().all(|&v| v >= 0.0));
    assert!(s.windows(2).into_iter().all(|w| w[0] >= w[1]));

    let sample = dataset.sample(6).unwrap();
    let rec = reconstruct(sample, basis.components().view(), 3).unwrap();
    assert_eq!(rec.main_data().len(), 63);
    assert!(rec.main_data().slice(s![3..]).iter().all(|&v| v == 0.0));

    // Every gesture lies in the span of the 7-row basis.
    let full = reconstruct(sample, basis.components().view(), 7).unwrap();
    for (a, b) in full.recov_data().iter().zip(sample.iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-8);
    }
    assert!(rec.residual_norm(sample) >= full.residual_norm(sample));

    let proj = dir.join("proj.json");
    write_basis(&proj, basis.components().view()).unwrap();
    assert_eq!(&read_basis(&proj).unwrap(), basis.components());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn duplicated_recording_is_rejected() {
    let dir = scratch_dir("duplicate");
    write_recordings(&dir, 11);
    fs::copy(dir.join("good.json"), dir.join("ok.json")).unwrap();

    let dataset = Dataset::load(&dir, &GESTURES).unwrap();
    assert!(matches!(
        pca(dataset.matrix()),
        Err(PcaError::DegenerateComponent { index: 6, .. })
    ));

    fs::remove_dir_all(&dir).unwrap();
}
