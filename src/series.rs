use crate::error::InvalidInput;

/// Checks that a single series is non-empty and holds only finite values.
pub fn validate_series(
    name: &'static str,
    values: &[f64],
) -> Result<(), InvalidInput> {
    if values.is_empty() {
        return Err(InvalidInput::EmptySeries { name });
    }
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(InvalidInput::NonFinite { name, index }),
        None => Ok(()),
    }
}

/// Checks an inflow / outflow pair before any computation takes place.
pub fn validate_flows(q_in: &[f64], q_out: &[f64]) -> Result<(), InvalidInput> {
    if q_in.is_empty() {
        return Err(InvalidInput::EmptySeries { name: "inflow" });
    }
    if q_out.is_empty() {
        return Err(InvalidInput::EmptySeries { name: "outflow" });
    }
    if q_in.len() != q_out.len() {
        return Err(InvalidInput::LengthMismatch {
            inflow: q_in.len(),
            outflow: q_out.len(),
        });
    }
    validate_series("inflow", q_in)?;
    validate_series("outflow", q_out)?;
    Ok(())
}

/// Net storage change of each period, `q_in[t] - q_out[t]`.
pub fn storage(q_in: &[f64], q_out: &[f64]) -> Result<Vec<f64>, InvalidInput> {
    validate_flows(q_in, q_out)?;
    Ok(q_in.iter().zip(q_out).map(|(i, o)| i - o).collect())
}

/// Mass curve of a net storage series: the running prefix sums, with
/// `cum[0] == storage[0]` and `cum[n-1] == storage.iter().sum()`.
pub fn cumulative_storage(storage: &[f64]) -> Result<Vec<f64>, InvalidInput> {
    validate_series("storage", storage)?;
    let cum = storage
        .iter()
        .scan(0.0, |acc, s| {
            *acc += s;
            Some(*acc)
        })
        .collect();
    Ok(cum)
}
