// src/dag/median.rs

/// Median of a set of masses.
///
/// Sorts `values` in place. Odd length returns the middle element, even length
/// the mean of the two middle elements. `None` for an empty slice.
pub fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    values.sort_by(|a, b| a.total_cmp(b));
    let half = values.len() / 2;

    if values.len() % 2 == 1 {
        Some(values[half])
    } else {
        Some((values[half - 1] + values[half]) / 2.0)
    }
}
