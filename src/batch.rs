use crate::error::InvalidInput;
use crate::simulation;
use crate::simulation::SimResult;
use crate::spa;
use crate::spa::SpaResult;
use rayon::prelude::*;

/// One independent reservoir study: a historical inflow / outflow pair
/// and the reservoir to replay it against.
#[derive(Debug, Clone)]
pub struct Case {
    pub name: String,
    pub q_in: Vec<f64>,
    pub q_out: Vec<f64>,
    pub initial_storage: f64,
    /// Capacity for the simulation. When absent the capacity estimated
    /// by the sequent peak algorithm is used.
    pub capacity: Option<f64>,
}

impl Case {
    pub fn new(
        name: &str,
        q_in: Vec<f64>,
        q_out: Vec<f64>,
        initial_storage: f64,
        capacity: Option<f64>,
    ) -> Self {
        Self {
            name: name.to_string(),
            q_in,
            q_out,
            initial_storage,
            capacity,
        }
    }

    /// Estimates the capacity and, when some capacity is known, simulates
    /// the reservoir with it.
    pub fn evaluate(&self) -> Result<CaseReport, InvalidInput> {
        let spa = spa::spa(&self.q_in, &self.q_out)?;
        let sim = match self.capacity.or(spa.capacity) {
            Some(capacity) => Some(simulation::sim(
                &self.q_in,
                &self.q_out,
                self.initial_storage,
                capacity,
            )?),
            None => None,
        };
        Ok(CaseReport {
            name: self.name.clone(),
            spa,
            sim,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseReport {
    pub name: String,
    pub spa: SpaResult,
    pub sim: Option<SimResult>,
}

/// Evaluates every case on the rayon thread pool. Cases share no state,
/// and each one fails on its own. Results keep the order of `cases`.
pub fn evaluate(cases: &[Case]) -> Vec<Result<CaseReport, InvalidInput>> {
    cases.par_iter().map(|case| case.evaluate()).collect()
}
