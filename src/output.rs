use crate::batch::CaseReport;
use crate::input::SeriesInput;
use crate::simulation::ReservoirState;

use chrono::NaiveDate;
use csv::Writer;
use std::error::Error;
use std::path::Path;

#[derive(serde::Serialize)]
enum MassCurveMarker {
    #[serde(rename = "peak")]
    Peak,
    #[serde(rename = "trough")]
    Trough,
}

#[derive(serde::Serialize)]
struct MassCurveOutput {
    period: usize,
    date: Option<NaiveDate>,
    inflow: f64,
    outflow: f64,
    storage: f64,
    cumulative_storage: f64,
    marker: Option<MassCurveMarker>,
}

fn output_path(path: &str, name: &str, suffix: &str) -> String {
    Path::new(path)
        .join(format!("{name}_{suffix}.csv"))
        .to_string_lossy()
        .into_owned()
}

fn period_and_date(
    series: &SeriesInput,
    t: usize,
) -> (usize, Option<NaiveDate>) {
    let period = series.periods.get(t).copied().unwrap_or(t);
    let date = series.dates.get(t).copied().flatten();
    (period, date)
}

fn write_mass_curve(
    report: &CaseReport,
    series: &SeriesInput,
    path: &str,
) -> Result<(), Box<dyn Error>> {
    let spa = &report.spa;
    let mut wtr = Writer::from_path(output_path(path, &report.name, "spa"))?;
    for t in 0..spa.num_periods() {
        let marker = if spa.max_indices.contains(&t) {
            Some(MassCurveMarker::Peak)
        } else if spa.min_indices.contains(&t) {
            Some(MassCurveMarker::Trough)
        } else {
            None
        };
        let (period, date) = period_and_date(series, t);
        wtr.serialize(MassCurveOutput {
            period,
            date,
            inflow: spa.q_in[t],
            outflow: spa.q_out[t],
            storage: spa.storage[t],
            cumulative_storage: spa.cumulative_storage[t],
            marker,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

#[derive(serde::Serialize)]
struct CapacityOutput {
    capacity: f64,
    peak_index: usize,
    peak_value: f64,
    trough_index: usize,
    trough_value: f64,
}

fn write_capacity(
    report: &CaseReport,
    path: &str,
) -> Result<(), Box<dyn Error>> {
    if report.spa.capacity.is_none() {
        return Ok(());
    }
    let mut wtr =
        Writer::from_path(output_path(path, &report.name, "capacity"))?;
    for candidate in report.spa.candidates() {
        wtr.serialize(CapacityOutput {
            capacity: candidate.capacity,
            peak_index: candidate.peak.index,
            peak_value: candidate.peak.value,
            trough_index: candidate.trough.index,
            trough_value: candidate.trough.value,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

#[derive(serde::Serialize)]
struct SimulationOutput {
    period: usize,
    date: Option<NaiveDate>,
    inflow: f64,
    outflow: f64,
    realized_outflow: f64,
    storage: f64,
    deficit: f64,
    overflow: f64,
    state: ReservoirState,
}

fn write_simulation(
    report: &CaseReport,
    series: &SeriesInput,
    path: &str,
) -> Result<(), Box<dyn Error>> {
    let sim = match &report.sim {
        Some(sim) => sim,
        None => return Ok(()),
    };
    let mut wtr =
        Writer::from_path(output_path(path, &report.name, "simulation"))?;
    for t in 0..sim.num_periods() {
        let (period, date) = period_and_date(series, t);
        wtr.serialize(SimulationOutput {
            period,
            date,
            inflow: sim.q_in[t],
            outflow: sim.q_out[t],
            realized_outflow: sim.q_out_real[t],
            storage: sim.storage[t],
            deficit: sim.deficit[t],
            overflow: sim.overflow[t],
            state: sim.period_state(t).unwrap_or(ReservoirState::Normal),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn generate_outputs(
    report: &CaseReport,
    series: &SeriesInput,
    path: &str,
) -> Result<(), Box<dyn Error>> {
    write_mass_curve(report, series, path)?;
    write_capacity(report, path)?;
    write_simulation(report, series, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::Case;
    use std::fs;

    fn sample_series() -> SeriesInput {
        SeriesInput {
            periods: (0..8).collect(),
            dates: vec![None; 8],
            inflow: vec![1.0, 2.0, 3.0, 1.0, 2.0, 3.0, 5.0, 2.0],
            outflow: vec![1.0, 1.0, 1.0, 4.0, 1.0, 1.0, 1.0, 4.0],
        }
    }

    fn sample_report(capacity: Option<f64>) -> CaseReport {
        let series = sample_series();
        Case::new("sample", series.inflow, series.outflow, 0.0, capacity)
            .evaluate()
            .unwrap()
    }

    fn output_dir(name: &str) -> String {
        let dir = std::env::temp_dir().join(format!("spa_rs_output_{name}"));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir.to_string_lossy().into_owned()
    }

    #[test]
    fn test_write_capacity() {
        let path = output_dir("capacity");
        write_capacity(&sample_report(None), &path).unwrap();
        let contents =
            fs::read_to_string(output_path(&path, "sample", "capacity"))
                .unwrap();
        let expected = "capacity,peak_index,peak_value,trough_index,trough_value\n3.0,2,3.0,3,0.0\n";
        assert_eq!(contents, expected);
    }

    #[test]
    fn test_write_mass_curve_marks_extrema() {
        let path = output_dir("mass_curve");
        write_mass_curve(&sample_report(None), &sample_series(), &path)
            .unwrap();
        let contents =
            fs::read_to_string(output_path(&path, "sample", "spa")).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines[0],
            "period,date,inflow,outflow,storage,cumulative_storage,marker"
        );
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[3], "2,,3.0,1.0,2.0,3.0,peak");
        assert_eq!(lines[4], "3,,1.0,4.0,-3.0,0.0,trough");
        assert_eq!(lines[1], "0,,1.0,1.0,0.0,0.0,");
    }

    #[test]
    fn test_write_simulation() {
        let path = output_dir("simulation");
        write_simulation(&sample_report(Some(5.0)), &sample_series(), &path)
            .unwrap();
        let contents =
            fs::read_to_string(output_path(&path, "sample", "simulation"))
                .unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[7], "6,,5.0,1.0,3.0,5.0,0.0,2.0,Overflow");
    }

    #[test]
    fn test_generate_outputs_without_simulation() {
        let path = output_dir("no_simulation");
        let series = SeriesInput {
            periods: vec![0, 1, 2],
            dates: vec![None; 3],
            inflow: vec![2.0; 3],
            outflow: vec![1.0; 3],
        };
        let case = Case::new(
            "rising",
            series.inflow.clone(),
            series.outflow.clone(),
            0.0,
            None,
        );
        let report = case.evaluate().unwrap();
        generate_outputs(&report, &series, &path).unwrap();
        let spa_path = output_path(&path, "rising", "spa");
        let capacity_path = output_path(&path, "rising", "capacity");
        let sim_path = output_path(&path, "rising", "simulation");
        assert!(Path::new(&spa_path).exists());
        assert!(!Path::new(&capacity_path).exists());
        assert!(!Path::new(&sim_path).exists());
    }
}
