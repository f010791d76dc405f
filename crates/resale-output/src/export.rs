//! Export of prediction records.
//!
//! Records go to any writer (stdout in the CLI) as CSV, JSON or pretty JSON.

use crate::price::PriceEstimate;
use resale_encoding::AttributeSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid format error.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    #[default]
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "pretty" | "pretty-json" | "pretty_json" => Ok(Self::PrettyJson),
            other => Err(ExportError::InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::PrettyJson => "pretty-json",
        })
    }
}

/// One estimate with the inputs and derived features that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionRecord {
    /// Town display name.
    pub town: String,

    /// Flat type display name.
    pub flat_type: String,

    /// Flat model display name.
    pub flat_model: String,

    /// Floor area in square metres.
    pub floor_area_sqm: f64,

    /// Storey range, `"NN TO MM"`.
    pub storey_range: String,

    /// Lease commencement year.
    pub lease_commence_year: i32,

    /// Flat age at the reference year.
    pub flat_age: i32,

    /// Midpoint of the storey range.
    pub storey_median: f64,

    /// Predicted price.
    pub predicted_price: f64,

    /// Currency of the predicted price.
    pub currency: String,
}

impl PredictionRecord {
    /// Build a record from validated attributes and their estimate.
    pub fn new(attrs: &AttributeSet, reference_year: i32, estimate: &PriceEstimate) -> Self {
        Self {
            town: attrs.town().name().to_string(),
            flat_type: attrs.flat_type().name().to_string(),
            flat_model: attrs.flat_model().name().to_string(),
            floor_area_sqm: attrs.floor_area_sqm(),
            storey_range: attrs.storey_range().to_string(),
            lease_commence_year: attrs.lease_commence_year(),
            flat_age: attrs.flat_age(reference_year),
            storey_median: attrs.storey_range().median(),
            predicted_price: estimate.amount,
            currency: estimate.currency.clone(),
        }
    }

    /// The record's estimate.
    pub fn estimate(&self) -> PriceEstimate {
        PriceEstimate::new(self.predicted_price, self.currency.clone())
    }
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a writer in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    fn export_to_writer<W: Write>(
        &self,
        writer: &mut W,
        format: ExportFormat,
    ) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        writer.write_all(content.as_bytes())?;
        if !content.ends_with('\n') {
            writer.write_all(b"\n")?;
        }
        Ok(())
    }
}

fn csv_string<'a>(
    records: impl IntoIterator<Item = &'a PredictionRecord>,
) -> Result<String, ExportError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for record in records {
        wtr.serialize(record)?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| ExportError::InvalidFormat(e.to_string()))
}

impl Exporter for PredictionRecord {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => csv_string([self]),
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for [PredictionRecord] {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => csv_string(self),
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for Vec<PredictionRecord> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        self.as_slice().export_to_string(format)
    }
}
