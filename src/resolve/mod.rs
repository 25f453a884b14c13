// src/resolve/mod.rs
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::fetch;
use crate::process::{months, RawTable};

/// One resolution request. Immutable once built; re-resolving after an
/// input change means building a fresh query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatingQuery {
    pub year: i32,
    /// Zero-based calendar month, 0 = January.
    pub month: usize,
    /// Location name or fragment, matched by containment against the
    /// location column.
    pub location: String,
}

/// The resolved output: one location/month cell of one yearly file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatingRecord {
    /// Full location name from the matched row, not the query fragment.
    pub location: String,
    /// Human month name plus year, e.g. "January 2023".
    pub month_label: String,
    /// Raw cell value in degree-days. Kept as the feed printed it; no
    /// numeric conversion.
    pub heating_requirement: String,
    pub data_year: i32,
}

/// A successful resolution, bundled with the refreshed set of locations
/// present in the year's file so callers can update their pickers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub record: HeatingRecord,
    pub locations: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("fetching degree-day data failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("could not parse degree-day CSV: {0}")]
    Parse(String),
    #[error("no location column in CSV header")]
    NoLocationColumn,
    #[error("no {month} column in CSV data")]
    MissingMonth {
        month: &'static str,
        available: Vec<String>,
    },
    #[error("no data found for {}; available locations: {}", .query, format_locations(.available))]
    NotFound {
        query: String,
        available: Vec<String>,
    },
    #[error("month index {0} out of range (expected 0..=11)")]
    MonthOutOfRange(usize),
}

fn format_locations(available: &[String]) -> String {
    if available.is_empty() {
        "none".to_string()
    } else {
        available.join(", ")
    }
}

#[derive(Debug, Clone)]
pub struct DataResolver {
    client: Client,
}

impl Default for DataResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl DataResolver {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetch the year's CSV and resolve one location/month cell. Exactly
    /// one fetch and one parse per call, no internal retries; every call
    /// is independent and stateless.
    #[instrument(level = "info", skip(self, query), fields(year = query.year, month = query.month, location = %query.location))]
    pub async fn resolve(&self, query: &HeatingQuery) -> Result<Resolution, ResolveError> {
        let text = fetch::csv::degree_day_csv(&self.client, query.year).await?;
        resolve_text(&text, query)
    }
}

/// The post-fetch half of a resolution, for callers that already hold the
/// CSV text. Pure: same text and query, same outcome.
pub fn resolve_text(text: &str, query: &HeatingQuery) -> Result<Resolution, ResolveError> {
    let table = RawTable::parse(text).map_err(|e| ResolveError::Parse(e.to_string()))?;
    if table.is_empty() {
        return Err(ResolveError::Parse(format!(
            "no data rows for year {}",
            query.year
        )));
    }
    resolve_table(&table, query)
}

pub fn resolve_table(table: &RawTable, query: &HeatingQuery) -> Result<Resolution, ResolveError> {
    let month =
        months::by_index(query.month).ok_or(ResolveError::MonthOutOfRange(query.month))?;
    let location_col = table
        .location_column()
        .ok_or(ResolveError::NoLocationColumn)?;
    let locations = table.locations(location_col);

    let Some(row) = table.find_location_row(location_col, &query.location) else {
        return Err(ResolveError::NotFound {
            query: query.location.clone(),
            available: locations,
        });
    };

    // Presence check only: an empty cell is valid data, a missing column
    // is not. Either way the caller learns what locations the file holds.
    let value = match table.value(row, month.roman) {
        Some(value) => value,
        None => {
            return Err(ResolveError::MissingMonth {
                month: month.name,
                available: locations,
            })
        }
    };

    debug!(row, value, "matched location row");
    Ok(Resolution {
        record: HeatingRecord {
            location: table.rows[row][location_col].clone(),
            month_label: format!("{} {}", month.name, query.year),
            heating_requirement: value.to_string(),
            data_year: query.year,
        },
        locations,
    })
}
