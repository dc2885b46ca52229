use ndarray::{Array1, Array2, ArrayView2};

/// Indices that sort `values` in descending order. Ties keep their original order.
pub(crate) fn descending_order(values: &Array1<f64>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[b].total_cmp(&values[a]));
    order
}

/// Reorders the singular values and the matching rows of `vt` by `order`.
pub(crate) fn reorder_rows(
    s: &Array1<f64>,
    vt: &Array2<f64>,
    order: &[usize],
) -> (Array1<f64>, Array2<f64>) {
    let mut s_sorted = Array1::zeros(order.len());
    let mut vt_sorted = Array2::zeros((order.len(), vt.ncols()));

    for (i, &idx) in order.iter().enumerate() {
        s_sorted[i] = s[idx];
        vt_sorted.row_mut(i).assign(&vt.row(idx));
    }

    (s_sorted, vt_sorted)
}

/// Checks that the rows of `basis` are unit-norm and pairwise orthogonal within `tol`.
pub fn rows_orthonormal(basis: ArrayView2<f64>, tol: f64) -> bool {
    let gram = basis.dot(&basis.t());
    gram.indexed_iter().all(|((i, j), &v)| {
        let expected = if i == j { 1.0 } else { 0.0 };
        (v - expected).abs() <= tol
    })
}
