// src/ingest/mod.rs

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use serde::de::DeserializeOwned;
use std::{fs, io::Cursor, path::Path};
use tracing::info;

mod types;

pub use types::{CensusRecord, DailyRecord, DeathLocation, MortalityRecord, PumpLocation};

/// Fixed input file names, matching the published dataset layout.
pub const DAILY_FILE: &str = "choleraDeaths.tsv";
pub const MORTALITY_FILE: &str = "naplesCholeraAgeSexData.tsv";
pub const CENSUS_FILE: &str = "UKcensus1851.csv";
pub const PUMP_FILE: &str = "choleraPumpLocations.csv";
pub const DEATH_LOCATION_FILE: &str = "choleraDeathLocations.csv";

/// The Naples file opens with attribution text before its header row.
const MORTALITY_PREAMBLE_LINES: usize = 5;
/// The census file opens with title text before its header row.
const CENSUS_PREAMBLE_LINES: usize = 2;

/// All five input tables, loaded once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub daily: Vec<DailyRecord>,
    pub mortality: Vec<MortalityRecord>,
    pub census: Vec<CensusRecord>,
    pub pumps: Vec<PumpLocation>,
    pub death_locations: Vec<DeathLocation>,
}

impl Datasets {
    /// Load every input file from `dir`. Any missing or malformed file
    /// aborts the load with the offending path in the error chain.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let datasets = Self {
            daily: load_daily(&dir.join(DAILY_FILE))?,
            mortality: load_mortality(&dir.join(MORTALITY_FILE))?,
            census: load_census(&dir.join(CENSUS_FILE))?,
            pumps: load_pumps(&dir.join(PUMP_FILE))?,
            death_locations: load_death_locations(&dir.join(DEATH_LOCATION_FILE))?,
        };
        info!(
            daily = datasets.daily.len(),
            mortality = datasets.mortality.len(),
            census = datasets.census.len(),
            pumps = datasets.pumps.len(),
            death_locations = datasets.death_locations.len(),
            "loaded datasets from {}",
            dir.display()
        );
        Ok(datasets)
    }
}

/// Daily attack/death counts: tab-separated, one header row.
pub fn load_daily(path: &Path) -> Result<Vec<DailyRecord>> {
    read_delimited(path, b'\t', 0, true)
}

/// Naples mortality rates: tab-separated, header after the preamble.
pub fn load_mortality(path: &Path) -> Result<Vec<MortalityRecord>> {
    read_delimited(path, b'\t', MORTALITY_PREAMBLE_LINES, true)
}

/// UK census: comma-separated, header after the preamble.
pub fn load_census(path: &Path) -> Result<Vec<CensusRecord>> {
    read_delimited(path, b',', CENSUS_PREAMBLE_LINES, true)
}

/// Pump coordinates: comma-separated, no header row.
pub fn load_pumps(path: &Path) -> Result<Vec<PumpLocation>> {
    read_delimited(path, b',', 0, false)
}

/// Death coordinates with counts: comma-separated, no header row.
pub fn load_death_locations(path: &Path) -> Result<Vec<DeathLocation>> {
    read_delimited(path, b',', 0, false)
}

/// Read `path`, drop `preamble_lines` lines, and deserialize the rest as
/// delimited records. Blank trailing lines are ignored by the reader.
fn read_delimited<T: DeserializeOwned>(
    path: &Path,
    delimiter: u8,
    preamble_lines: usize,
    has_headers: bool,
) -> Result<Vec<T>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let body = skip_preamble(&text, preamble_lines);

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(has_headers)
        .trim(csv::Trim::All)
        .from_reader(Cursor::new(body));

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let record: T =
            record.with_context(|| format!("parsing record in {}", path.display()))?;
        rows.push(record);
    }
    Ok(rows)
}

fn skip_preamble(text: &str, lines: usize) -> String {
    if lines == 0 {
        return text.to_string();
    }
    text.lines().skip(lines).collect::<Vec<_>>().join("\n")
}
