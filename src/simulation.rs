use crate::error::InvalidInput;
use crate::series;
use serde::Serialize;

/// Condition of the reservoir at the end of a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReservoirState {
    Normal,
    Deficit,
    Overflow,
}

/// Realized values of a single simulated period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodOutcome {
    pub state: ReservoirState,
    pub storage: f64,
    pub deficit: f64,
    pub overflow: f64,
    pub q_out_real: f64,
}

impl PeriodOutcome {
    fn is_finite(&self) -> bool {
        self.storage.is_finite()
            && self.deficit.is_finite()
            && self.overflow.is_finite()
            && self.q_out_real.is_finite()
    }
}

/// Running storage of a reservoir with a fixed capacity. Lives for a
/// single simulation call.
#[derive(Debug)]
struct Reservoir {
    capacity: f64,
    current_storage: f64,
}

impl Reservoir {
    fn new(capacity: f64, initial_storage: f64) -> Self {
        Self {
            capacity,
            current_storage: initial_storage,
        }
    }

    /// Applies the net inflow of one period. Storage falling below zero
    /// cuts the release by the shortfall, which is reported as a negative
    /// deficit. Storage above capacity is spilled together with the
    /// demand. Either way the running storage is clamped back into
    /// `[0, capacity]`.
    fn step(&mut self, q_in: f64, q_out: f64) -> PeriodOutcome {
        self.current_storage += q_in - q_out;

        if self.current_storage < 0.0 {
            let shortfall = self.current_storage;
            self.current_storage = 0.0;
            PeriodOutcome {
                state: ReservoirState::Deficit,
                storage: 0.0,
                deficit: shortfall,
                overflow: 0.0,
                q_out_real: q_out + shortfall,
            }
        } else if self.current_storage > self.capacity {
            let spill = self.current_storage - self.capacity;
            self.current_storage = self.capacity;
            PeriodOutcome {
                state: ReservoirState::Overflow,
                storage: self.capacity,
                deficit: 0.0,
                overflow: spill,
                q_out_real: q_out + spill,
            }
        } else {
            PeriodOutcome {
                state: ReservoirState::Normal,
                storage: self.current_storage,
                deficit: 0.0,
                overflow: 0.0,
                q_out_real: q_out,
            }
        }
    }
}

/// Storage trajectory of a reservoir replayed against an inflow /
/// outflow pair. `deficit` holds the negative shortfall of each period,
/// `overflow` the spilled volume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimResult {
    pub q_in: Vec<f64>,
    pub q_out: Vec<f64>,
    pub capacity: f64,
    pub initial_storage: f64,
    pub q_out_real: Vec<f64>,
    pub storage: Vec<f64>,
    pub deficit: Vec<f64>,
    pub overflow: Vec<f64>,
    pub state: Vec<ReservoirState>,
}

impl SimResult {
    fn with_capacity(
        q_in: &[f64],
        q_out: &[f64],
        capacity: f64,
        initial_storage: f64,
    ) -> Self {
        let n = q_in.len();
        Self {
            q_in: q_in.to_vec(),
            q_out: q_out.to_vec(),
            capacity,
            initial_storage,
            q_out_real: Vec::<f64>::with_capacity(n),
            storage: Vec::<f64>::with_capacity(n),
            deficit: Vec::<f64>::with_capacity(n),
            overflow: Vec::<f64>::with_capacity(n),
            state: Vec::<ReservoirState>::with_capacity(n),
        }
    }

    fn push(&mut self, outcome: &PeriodOutcome) {
        self.q_out_real.push(outcome.q_out_real);
        self.storage.push(outcome.storage);
        self.deficit.push(outcome.deficit);
        self.overflow.push(outcome.overflow);
        self.state.push(outcome.state);
    }

    pub fn num_periods(&self) -> usize {
        self.storage.len()
    }

    pub fn period_state(&self, t: usize) -> Option<ReservoirState> {
        self.state.get(t).copied()
    }

    /// Sum of the shortfalls, with the same negative sign as `deficit`.
    pub fn total_deficit(&self) -> f64 {
        self.deficit.iter().sum()
    }

    pub fn total_overflow(&self) -> f64 {
        self.overflow.iter().sum()
    }

    pub fn deficit_periods(&self) -> usize {
        self.deficit.iter().filter(|d| **d < 0.0).count()
    }

    /// Share of periods in which the demand was fully met.
    pub fn reliability(&self) -> f64 {
        let n = self.num_periods();
        if n == 0 {
            return 0.0;
        }
        (n - self.deficit_periods()) as f64 / n as f64
    }
}

/// Simulates a reservoir of the given capacity, starting from
/// `initial_storage`, under the inflow / outflow pair.
pub fn sim(
    q_in: &[f64],
    q_out: &[f64],
    initial_storage: f64,
    capacity: f64,
) -> Result<SimResult, InvalidInput> {
    series::validate_flows(q_in, q_out)?;
    if !initial_storage.is_finite() || initial_storage < 0.0 {
        return Err(InvalidInput::NegativeInitialStorage(initial_storage));
    }
    if !capacity.is_finite() || capacity <= 0.0 {
        return Err(InvalidInput::NonPositiveCapacity(capacity));
    }

    let mut result =
        SimResult::with_capacity(q_in, q_out, capacity, initial_storage);
    let mut reservoir = Reservoir::new(capacity, initial_storage);
    for (period, (inflow, outflow)) in q_in.iter().zip(q_out).enumerate() {
        let outcome = reservoir.step(*inflow, *outflow);
        if !outcome.is_finite() {
            return Err(InvalidInput::NonFiniteBalance { period });
        }
        result.push(&outcome);
    }
    Ok(result)
}
