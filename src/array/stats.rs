/// Arithmetic mean of the values.
///
/// An empty slice averages to `0.0`. This is a convention, not an absent
/// result: callers that need to tell "no data" apart should check
/// `is_empty()` themselves. The mean is returned at full precision; rounding
/// is left to presentation code.
///
/// # Examples
///
/// ```
/// use array_utils::average;
///
/// assert_eq!(average(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
/// assert_eq!(average(&[]), 0.0);
/// ```
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    values.iter().sum::<f64>() / values.len() as f64
}

/// Median of the values, or `None` for an empty slice.
///
/// The input is left untouched; a sorted copy is used. Even-length input
/// yields the mean of the two middle values.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;

    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}
