pub fn relative_difference(lhs: f64, rhs: f64, relative_floor: f64) -> f64 {
    let scale = lhs.abs().max(rhs.abs()).max(relative_floor);
    (lhs - rhs).abs() / scale
}

/// Integer count obtained by truncating a continuous ratio toward zero.
///
/// Cell counts and step counts are derived this way, never rounded, so the
/// same inputs always yield the same grid. Negative and NaN ratios map to 0
/// and ratios beyond `u64::MAX` saturate.
pub fn truncate_to_count(ratio: f64) -> u64 {
    ratio.trunc() as u64
}
