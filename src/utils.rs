/// Helper function for locating the minimum of a slice. Ties resolve to
/// the first occurrence, so the lowest index wins. Returns `None` for an
/// empty slice.
///
/// ## Example
///
/// ```
/// let values = vec![3.0, 1.0, 2.0, 1.0];
///
/// let min = spa_rs::utils::first_argmin(&values);
/// assert_eq!(min, Some((1, 1.0)));
/// ```
pub fn first_argmin(values: &[f64]) -> Option<(usize, f64)> {
    let mut iter = values.iter().copied().enumerate();
    let first = iter.next()?;
    Some(iter.fold(first, |best, (index, value)| {
        if value < best.1 {
            (index, value)
        } else {
            best
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_argmin_empty() {
        assert_eq!(first_argmin(&[]), None);
    }

    #[test]
    fn test_first_argmin_ties_resolve_to_lowest_index() {
        assert_eq!(first_argmin(&[2.0, 0.0, 5.0, 0.0]), Some((1, 0.0)));
    }
}
