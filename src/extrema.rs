use crate::error::InvalidInput;
use crate::series;
use crate::utils;
use serde::Serialize;

/// A point of the mass curve, identified by its period index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extremum {
    pub value: f64,
    pub index: usize,
}

impl Extremum {
    pub fn new(value: f64, index: usize) -> Self {
        Self { value, index }
    }
}

pub type Peak = Extremum;
pub type Trough = Extremum;

/// Finds the sequent peaks of a mass curve.
///
/// An interior index `i` is a candidate when `cum[i - 1] < cum[i]` and
/// `cum[i] > cum[i + 1]`, so plateaus never qualify. A candidate is only
/// accepted when it is the first one, or when it rises above the last
/// accepted peak. The returned peaks are therefore strictly increasing
/// in both index and value. A curve without qualifying points gives an
/// empty list, which is not an error.
pub fn maxima(cum: &[f64]) -> Result<Vec<Peak>, InvalidInput> {
    series::validate_series("cumulative storage", cum)?;
    let peaks = cum
        .windows(3)
        .enumerate()
        .filter(|(_, w)| w[0] < w[1] && w[1] > w[2])
        .map(|(offset, w)| Peak::new(w[1], offset + 1))
        .fold(Vec::<Peak>::new(), |mut accepted, candidate| {
            let rises = accepted
                .last()
                .map_or(true, |last| candidate.value > last.value);
            if rises {
                accepted.push(candidate);
            }
            accepted
        });
    Ok(peaks)
}

fn validate_peak_indices(
    len: usize,
    peak_indices: &[usize],
) -> Result<(), InvalidInput> {
    if peak_indices.is_empty() {
        return Err(InvalidInput::EmptyPeaks);
    }
    for window in peak_indices.windows(2) {
        if window[0] >= window[1] {
            return Err(InvalidInput::UnorderedPeaks {
                previous: window[0],
                next: window[1],
            });
        }
    }
    match peak_indices.iter().find(|index| **index >= len) {
        Some(index) => Err(InvalidInput::PeakIndexOutOfBounds {
            index: *index,
            len,
        }),
        None => Ok(()),
    }
}

/// Finds the trough between each pair of consecutive peaks.
///
/// The search interval is `[p_i, p_{i+1})`: the left peak is included
/// and the right peak is not. On equal values the lowest index wins.
/// Exactly `peak_indices.len() - 1` troughs are returned.
pub fn minima(
    cum: &[f64],
    peak_indices: &[usize],
) -> Result<Vec<Trough>, InvalidInput> {
    series::validate_series("cumulative storage", cum)?;
    validate_peak_indices(cum.len(), peak_indices)?;

    let mut troughs = Vec::<Trough>::with_capacity(peak_indices.len() - 1);
    for window in peak_indices.windows(2) {
        let (start, end) = (window[0], window[1]);
        // start < end was validated, so the interval is never empty
        if let Some((offset, value)) = utils::first_argmin(&cum[start..end]) {
            troughs.push(Trough::new(value, start + offset));
        }
    }
    Ok(troughs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_curve() -> Vec<f64> {
        vec![1.0, 3.0, 2.0, 3.0, 1.0, 6.0, 5.0]
    }

    #[test]
    fn test_maxima() {
        let peaks = maxima(&sample_curve()).unwrap();
        let values: Vec<f64> = peaks.iter().map(|p| p.value).collect();
        let indices: Vec<usize> = peaks.iter().map(|p| p.index).collect();
        assert_eq!(values, vec![3.0, 6.0]);
        assert_eq!(indices, vec![1, 5]);
    }

    #[test]
    fn test_maxima_empty() {
        assert!(maxima(&[]).is_err());
    }

    #[test]
    fn test_maxima_without_interior_points() {
        assert!(maxima(&[1.0]).unwrap().is_empty());
        assert!(maxima(&[1.0, 2.0]).unwrap().is_empty());
    }

    #[test]
    fn test_maxima_monotonic_curve_has_no_peaks() {
        let cum = vec![1.0, 3.0, 6.0, 7.0, 9.0, 14.0, 18.0];
        assert!(maxima(&cum).unwrap().is_empty());
    }

    #[test]
    fn test_maxima_ignores_plateaus() {
        let cum = vec![0.0, 2.0, 2.0, 1.0, 0.0, 3.0, 3.0, 0.0];
        assert!(maxima(&cum).unwrap().is_empty());
    }

    #[test]
    fn test_maxima_drops_lower_or_equal_candidates() {
        let cum = vec![0.0, 5.0, 1.0, 4.0, 0.0, 5.0, 2.0, 8.0, 1.0];
        let peaks = maxima(&cum).unwrap();
        assert_eq!(peaks, vec![Peak::new(5.0, 1), Peak::new(8.0, 7)]);
    }

    #[test]
    fn test_minima() {
        let troughs = minima(&sample_curve(), &[1, 5]).unwrap();
        assert_eq!(troughs, vec![Trough::new(1.0, 4)]);
    }

    #[test]
    fn test_minima_one_per_peak_pair() {
        let cum = vec![0.0, 2.0, 1.0, 3.0, 0.0, 4.0, 2.0, 5.0, 4.0];
        let peaks: Vec<usize> =
            maxima(&cum).unwrap().iter().map(|p| p.index).collect();
        assert_eq!(peaks, vec![1, 3, 5, 7]);
        let troughs = minima(&cum, &peaks).unwrap();
        assert_eq!(
            troughs,
            vec![
                Trough::new(1.0, 2),
                Trough::new(0.0, 4),
                Trough::new(2.0, 6)
            ]
        );
    }

    #[test]
    fn test_minima_ties_resolve_to_lowest_index() {
        let cum = vec![0.0, 4.0, 1.0, 2.0, 1.0, 6.0, 0.0];
        let troughs = minima(&cum, &[1, 5]).unwrap();
        assert_eq!(troughs, vec![Trough::new(1.0, 2)]);
    }

    #[test]
    fn test_minima_excludes_right_peak() {
        // the left bound is part of the search interval, the right is not
        let cum = vec![5.0, 1.0, 0.5];
        let troughs = minima(&cum, &[0, 2]).unwrap();
        assert_eq!(troughs, vec![Trough::new(1.0, 1)]);
    }

    #[test]
    fn test_minima_single_peak_gives_no_troughs() {
        let troughs = minima(&sample_curve(), &[1]).unwrap();
        assert!(troughs.is_empty());
    }

    #[test]
    fn test_minima_empty() {
        assert_eq!(
            minima(&sample_curve(), &[]),
            Err(InvalidInput::EmptyPeaks)
        );
        assert_eq!(
            minima(&[], &[1, 5]),
            Err(InvalidInput::EmptySeries {
                name: "cumulative storage"
            })
        );
    }

    #[test]
    fn test_maxima_rejects_non_finite_values() {
        assert_eq!(
            maxima(&[0.0, f64::NAN, 0.0]),
            Err(InvalidInput::NonFinite {
                name: "cumulative storage",
                index: 1
            })
        );
        assert!(maxima(&[0.0, f64::INFINITY, 0.0]).is_err());
    }

    #[test]
    fn test_minima_rejects_non_finite_values() {
        assert_eq!(
            minima(&[f64::NAN, 1.0, 0.0, 2.0], &[0, 3]),
            Err(InvalidInput::NonFinite {
                name: "cumulative storage",
                index: 0
            })
        );
    }

    #[test]
    fn test_minima_rejects_bad_peak_indices() {
        assert_eq!(
            minima(&sample_curve(), &[5, 1]),
            Err(InvalidInput::UnorderedPeaks {
                previous: 5,
                next: 1
            })
        );
        assert_eq!(
            minima(&sample_curve(), &[1, 7]),
            Err(InvalidInput::PeakIndexOutOfBounds { index: 7, len: 7 })
        );
    }
}
