use crate::error::InvalidInput;
use crate::extrema::{Peak, Trough};
use serde::Serialize;

/// A peak and the trough that follows it, with the drawdown between them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CapacityCandidate {
    pub capacity: f64,
    pub peak: Peak,
    pub trough: Trough,
}

impl CapacityCandidate {
    pub fn new(peak: Peak, trough: Trough) -> Self {
        Self {
            capacity: peak.value - trough.value,
            peak,
            trough,
        }
    }
}

/// Required storage capacity and every peak / trough pair that attains it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Capacity {
    pub value: f64,
    pub candidates: Vec<CapacityCandidate>,
}

fn validate_values(
    name: &'static str,
    extrema: &[Peak],
) -> Result<(), InvalidInput> {
    match extrema.iter().position(|e| !e.value.is_finite()) {
        Some(index) => Err(InvalidInput::NonFinite { name, index }),
        None => Ok(()),
    }
}

/// Extracts the required capacity as the largest drop from a peak to the
/// trough that follows it.
///
/// The last peak is left out, since no trough follows it. Pairs whose
/// drop equals the maximum exactly are all kept, in period order.
pub fn extract(
    peaks: &[Peak],
    troughs: &[Trough],
) -> Result<Capacity, InvalidInput> {
    if peaks.is_empty() {
        return Err(InvalidInput::EmptyList { name: "peaks" });
    }
    if troughs.is_empty() {
        return Err(InvalidInput::EmptyList { name: "troughs" });
    }
    if troughs.len() != peaks.len() - 1 {
        return Err(InvalidInput::ListLengthMismatch {
            name: "troughs",
            actual: troughs.len(),
            expected: peaks.len() - 1,
        });
    }
    validate_values("peaks", peaks)?;
    validate_values("troughs", troughs)?;

    let drops: Vec<CapacityCandidate> = peaks
        .iter()
        .zip(troughs)
        .map(|(peak, trough)| CapacityCandidate::new(*peak, *trough))
        .collect();
    let value = drops
        .iter()
        .map(|c| c.capacity)
        .fold(f64::NEG_INFINITY, f64::max);
    let candidates = drops
        .into_iter()
        .filter(|c| c.capacity == value)
        .collect();

    Ok(Capacity { value, candidates })
}
