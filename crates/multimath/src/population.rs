//! World population data for the choropleth view
//!
//! Loads a CSV with one row per country and classifies one numeric column
//! into display ranges. The map itself is drawn elsewhere; this module
//! produces the per-country category and the legend.

use crate::classify::RangeClassifier;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Years offered by the viewer
pub const AVAILABLE_YEARS: [u16; 8] = [1970, 1980, 1990, 2000, 2010, 2015, 2020, 2022];

/// Year selected when none is given
pub const DEFAULT_YEAR: u16 = 2022;

/// ISO 3166-1 alpha-3 country code column
pub const CODE_COLUMN: &str = "code";

/// Country name column
pub const COUNTRY_COLUMN: &str = "Country";

/// Share of world population, in percent
pub const SHARE_COLUMN: &str = "World Population Percentage";

/// Result type for population data
pub type PopulationResult<T> = Result<T, PopulationError>;

/// Population data errors
#[derive(Debug, Error)]
pub enum PopulationError {
    /// File could not be opened
    #[error("cannot open {path}: {source}")]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Expected column absent from the header row
    #[error("the data has no `{column}` column; check the CSV header")]
    MissingColumn {
        /// Column name
        column: String,
    },
}

impl PopulationError {
    /// Symbolic error code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "IO_ERROR",
            Self::Csv(_) => "CSV_ERROR",
            Self::MissingColumn { .. } => "MISSING_COLUMN",
        }
    }
}

/// One country on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Three-letter country code
    pub code: String,
    /// Country name, shown on hover
    pub country: String,
    /// Column value, `None` when empty or not numeric
    pub value: Option<f64>,
    /// Range label, `None` when the region is left uncoloured
    pub range: Option<String>,
}

/// Legend entry with the number of regions in that range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    /// Range label
    pub label: String,
    /// Regions classified into it
    pub regions: usize,
}

/// A classified column, ready to colour a map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoroplethLayer {
    /// Map title
    pub title: String,
    /// Source column
    pub column: String,
    /// Every range label in ascending order
    pub legend: Vec<LegendEntry>,
    /// One entry per CSV row
    pub regions: Vec<Region>,
}

impl ChoroplethLayer {
    /// Regions without a range
    #[must_use]
    pub fn unclassified(&self) -> usize {
        self.regions.iter().filter(|r| r.range.is_none()).count()
    }
}

/// Raw CSV rows keyed by header name
#[derive(Debug, Clone)]
pub struct PopulationTable {
    headers: csv::StringRecord,
    records: Vec<csv::StringRecord>,
}

impl PopulationTable {
    /// Reads a CSV with a header row
    pub fn from_reader<R: Read>(reader: R) -> PopulationResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = reader.headers()?.clone();
        let records = reader.records().collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(
            columns = headers.len(),
            rows = records.len(),
            "loaded population table"
        );
        Ok(Self { headers, records })
    }

    /// Reads a CSV file
    pub fn from_path(path: impl AsRef<Path>) -> PopulationResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| PopulationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Number of data rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the file had no data rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True if the header row names `column`
    #[must_use]
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }

    /// Years from [`AVAILABLE_YEARS`] that have a column in this file
    #[must_use]
    pub fn years(&self) -> Vec<u16> {
        AVAILABLE_YEARS
            .into_iter()
            .filter(|y| self.has_column(&y.to_string()))
            .collect()
    }

    fn column_index(&self, column: &str) -> PopulationResult<usize> {
        self.headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| PopulationError::MissingColumn {
                column: column.to_string(),
            })
    }

    /// Population of `year`, binned by [`RangeClassifier::population`]
    pub fn population_layer(&self, year: u16) -> PopulationResult<ChoroplethLayer> {
        self.layer(
            &year.to_string(),
            format!("World population {year} (by population range)"),
            &RangeClassifier::population(),
        )
    }

    /// World share, binned by [`RangeClassifier::world_share`]
    pub fn share_layer(&self) -> PopulationResult<ChoroplethLayer> {
        self.layer(
            SHARE_COLUMN,
            "Share of world population (%) by range".to_string(),
            &RangeClassifier::world_share(),
        )
    }

    /// Classifies any numeric column
    pub fn layer(
        &self,
        column: &str,
        title: String,
        classifier: &RangeClassifier,
    ) -> PopulationResult<ChoroplethLayer> {
        let value_idx = self.column_index(column)?;
        let code_idx = self.column_index(CODE_COLUMN)?;
        let country_idx = self.column_index(COUNTRY_COLUMN)?;

        let mut counts = vec![0usize; classifier.labels().len()];
        let mut regions = Vec::with_capacity(self.records.len());

        for record in &self.records {
            let field = |idx: usize| record.get(idx).unwrap_or_default().to_string();
            let code = field(code_idx);
            let raw = field(value_idx);
            let value = parse_number(&raw);

            let range = match value.map(|v| classifier.bin_index(v)) {
                Some(Ok(idx)) => {
                    counts[idx] += 1;
                    Some(classifier.labels()[idx].clone())
                }
                Some(Err(err)) => {
                    tracing::warn!(%code, column, %err, "value outside ranges, left uncoloured");
                    None
                }
                None => {
                    if !raw.is_empty() {
                        tracing::warn!(%code, column, raw = %raw, "non-numeric value ignored");
                    }
                    None
                }
            };

            regions.push(Region {
                code,
                country: field(country_idx),
                value,
                range,
            });
        }

        let legend = classifier
            .labels()
            .iter()
            .zip(counts)
            .map(|(label, regions)| LegendEntry {
                label: label.clone(),
                regions,
            })
            .collect();

        Ok(ChoroplethLayer {
            title,
            column: column.to_string(),
            legend,
            regions,
        })
    }
}

/// Accepts plain and thousands-separated numbers; empty fields are `None`
fn parse_number(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return None;
    }
    raw.replace(',', "").parse::<f64>().ok().filter(|v| v.is_finite())
}
