use crate::capacity;
use crate::capacity::CapacityCandidate;
use crate::error::InvalidInput;
use crate::extrema;
use crate::extrema::{Peak, Trough};
use crate::series;
use serde::Serialize;

/// Everything the sequent peak algorithm computes for one inflow /
/// outflow pair, laid out as flat series so it can be handed to a
/// reporting layer as is.
///
/// `capacity` is `None` when the mass curve has fewer than two peaks,
/// so no peak is followed by a trough. The candidate lists are empty in
/// that case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpaResult {
    pub q_in: Vec<f64>,
    pub q_out: Vec<f64>,
    pub storage: Vec<f64>,
    pub cumulative_storage: Vec<f64>,
    pub max_vals: Vec<f64>,
    pub max_indices: Vec<usize>,
    pub min_vals: Vec<f64>,
    pub min_indices: Vec<usize>,
    pub capacity: Option<f64>,
    pub capacity_max_vals: Vec<f64>,
    pub capacity_max_indices: Vec<usize>,
    pub capacity_min_vals: Vec<f64>,
    pub capacity_min_indices: Vec<usize>,
}

impl SpaResult {
    pub fn peaks(&self) -> Vec<Peak> {
        self.max_vals
            .iter()
            .zip(&self.max_indices)
            .map(|(value, index)| Peak::new(*value, *index))
            .collect()
    }

    pub fn troughs(&self) -> Vec<Trough> {
        self.min_vals
            .iter()
            .zip(&self.min_indices)
            .map(|(value, index)| Trough::new(*value, *index))
            .collect()
    }

    /// The peak / trough pairs that set the capacity, ties included.
    pub fn candidates(&self) -> Vec<CapacityCandidate> {
        let peaks = self
            .capacity_max_vals
            .iter()
            .zip(&self.capacity_max_indices)
            .map(|(value, index)| Peak::new(*value, *index));
        let troughs = self
            .capacity_min_vals
            .iter()
            .zip(&self.capacity_min_indices)
            .map(|(value, index)| Trough::new(*value, *index));
        peaks
            .zip(troughs)
            .map(|(peak, trough)| CapacityCandidate::new(peak, trough))
            .collect()
    }

    pub fn num_periods(&self) -> usize {
        self.q_in.len()
    }
}

fn split(extrema: &[extrema::Extremum]) -> (Vec<f64>, Vec<usize>) {
    extrema.iter().map(|e| (e.value, e.index)).unzip()
}

/// Runs the sequent peak algorithm over an inflow / outflow pair:
/// net storage, mass curve, sequent peaks, troughs and the required
/// capacity.
pub fn spa(q_in: &[f64], q_out: &[f64]) -> Result<SpaResult, InvalidInput> {
    let storage = series::storage(q_in, q_out)?;
    let cumulative_storage = series::cumulative_storage(&storage)?;
    let peaks = extrema::maxima(&cumulative_storage)?;

    // a single peak has no trough after it, so no drawdown is defined
    let (troughs, capacity) = if peaks.len() < 2 {
        (vec![], None)
    } else {
        let peak_indices: Vec<usize> = peaks.iter().map(|p| p.index).collect();
        let troughs = extrema::minima(&cumulative_storage, &peak_indices)?;
        let capacity = capacity::extract(&peaks, &troughs)?;
        (troughs, Some(capacity))
    };

    let (max_vals, max_indices) = split(&peaks);
    let (min_vals, min_indices) = split(&troughs);
    let candidates = capacity
        .as_ref()
        .map(|c| c.candidates.clone())
        .unwrap_or_default();
    let (capacity_max_vals, capacity_max_indices) =
        split(&candidates.iter().map(|c| c.peak).collect::<Vec<Peak>>());
    let (capacity_min_vals, capacity_min_indices) =
        split(&candidates.iter().map(|c| c.trough).collect::<Vec<Trough>>());

    Ok(SpaResult {
        q_in: q_in.to_vec(),
        q_out: q_out.to_vec(),
        storage,
        cumulative_storage,
        max_vals,
        max_indices,
        min_vals,
        min_indices,
        capacity: capacity.map(|c| c.value),
        capacity_max_vals,
        capacity_max_indices,
        capacity_min_vals,
        capacity_min_indices,
    })
}
