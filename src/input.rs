use crate::batch::Case;
use chrono::NaiveDate;
use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
pub struct CaseInput {
    pub name: String,
    pub series: String,
    #[serde(default)]
    pub initial_storage: f64,
    pub capacity: Option<f64>,
}

#[derive(Deserialize)]
pub struct Config {
    pub cases: Vec<CaseInput>,
}

pub fn read_config_input(filepath: &str) -> Result<Config, Box<dyn Error>> {
    let contents = fs::read_to_string(filepath).map_err(|e| {
        format!("Error while reading config file {filepath}: {e}")
    })?;
    let parsed: Config = serde_json::from_str(&contents).map_err(|e| {
        format!("Error while parsing config file {filepath}: {e}")
    })?;
    Ok(parsed)
}

#[derive(Deserialize)]
struct SeriesRecord {
    period: usize,
    #[serde(default)]
    date: Option<NaiveDate>,
    inflow: f64,
    outflow: f64,
}

/// Inflow / outflow pair of one case, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesInput {
    pub periods: Vec<usize>,
    pub dates: Vec<Option<NaiveDate>>,
    pub inflow: Vec<f64>,
    pub outflow: Vec<f64>,
}

impl SeriesInput {
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}

pub fn read_series_input(
    filepath: &str,
) -> Result<SeriesInput, Box<dyn Error>> {
    let mut rdr = csv::Reader::from_path(filepath).map_err(|e| {
        format!("Error while reading series file {filepath}: {e}")
    })?;
    let mut series = SeriesInput {
        periods: vec![],
        dates: vec![],
        inflow: vec![],
        outflow: vec![],
    };
    for result in rdr.deserialize() {
        let record: SeriesRecord = result.map_err(|e| {
            format!("Error while parsing series file {filepath}: {e}")
        })?;
        series.periods.push(record.period);
        series.dates.push(record.date);
        series.inflow.push(record.inflow);
        series.outflow.push(record.outflow);
    }
    Ok(series)
}

/// A case as read from disk: the series it was built from is kept for
/// labelling the outputs.
pub struct CaseData {
    pub case: Case,
    pub series: SeriesInput,
}

pub struct Input {
    pub config: Config,
    pub cases: Vec<CaseData>,
}

impl Input {
    /// Reads `config.json` from the study directory and every series file
    /// it names. Series paths are relative to the study directory.
    pub fn build(path: &str) -> Result<Self, Box<dyn Error>> {
        let config_path = Path::new(path).join("config.json");
        let config = read_config_input(&config_path.to_string_lossy())?;
        let mut cases = Vec::<CaseData>::with_capacity(config.cases.len());
        for case_input in config.cases.iter() {
            let series_path = Path::new(path).join(&case_input.series);
            let series = read_series_input(&series_path.to_string_lossy())?;
            let case = Case::new(
                &case_input.name,
                series.inflow.clone(),
                series.outflow.clone(),
                case_input.initial_storage,
                case_input.capacity,
            );
            cases.push(CaseData { case, series });
        }
        Ok(Self { config, cases })
    }
}
