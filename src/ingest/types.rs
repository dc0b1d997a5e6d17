// src/ingest/types.rs

use serde::{Deserialize, Serialize};

/// One day of the outbreak, as recorded in `choleraDeaths.tsv`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct DailyRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Attack")]
    pub attacks: u32,
    #[serde(rename = "Death")]
    pub deaths: u32,
}

/// Cholera deaths per 10,000 inhabitants of Naples, by age bracket and sex.
/// Rates come pre-computed in the file.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct MortalityRecord {
    pub age: String,
    pub male: f64,
    pub female: f64,
}

/// UK 1851 census population by age bracket and sex.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct CensusRecord {
    pub age: String,
    pub male: u64,
    pub female: u64,
}

/// A water pump position, WGS84. The pump file carries no header row;
/// fields are positional: longitude, latitude.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct PumpLocation {
    pub longitude: f64,
    pub latitude: f64,
}

/// A cluster of deaths at one address, WGS84. Headerless; fields are
/// positional: count, longitude, latitude.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct DeathLocation {
    pub deaths: u32,
    pub longitude: f64,
    pub latitude: f64,
}
