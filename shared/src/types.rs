//! Core domain types for savings estimation and lead capture

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{SharedError, SharedResult};

/// Business parameters supplied by a calculator visitor
///
/// Every field is optional on the wire; absent fields fall back to the
/// `Default` values (empty string / zero / empty list).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EstimationInput {
    pub company_name: String,
    pub industry: String,
    pub employees: u32,
    pub manual_hours_per_week: f64,
    pub avg_hourly_rate: f64,
    /// Selected process catalog ids, zero or more
    pub processes: Vec<String>,
}

/// Cost/benefit projection derived from an [`EstimationInput`]
///
/// Produced fresh on each estimation call and never mutated. Monetary
/// values are in whole currency units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationResult {
    pub annual_manual_cost: f64,
    pub estimated_savings_percent: i64,
    pub annual_savings: i64,
    pub monthly_productivity_gain: i64,
    /// `None` when there are no savings to pay back against
    pub payback_weeks: Option<i64>,
    pub five_year_value: f64,
}

/// One entry of the append-only lead log
///
/// Records are appended as newline-delimited JSON and never updated or
/// deleted. The timestamp is generated when the record is created for
/// writing, not when the visitor submitted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub timestamp: DateTime<Utc>,
    pub company_name: String,
    pub industry: String,
    pub employees: u32,
    pub manual_hours_per_week: f64,
    pub avg_hourly_rate: f64,
    pub processes: Vec<String>,
    pub email: String,
    pub result: Option<EstimationResult>,
}

impl LeadRecord {
    /// Build a record from visitor input, stamping the current time
    pub fn new(input: EstimationInput, email: String, result: Option<EstimationResult>) -> Self {
        Self {
            timestamp: Utc::now(),
            company_name: input.company_name,
            industry: input.industry,
            employees: input.employees,
            manual_hours_per_week: input.manual_hours_per_week,
            avg_hourly_rate: input.avg_hourly_rate,
            processes: input.processes,
            email,
            result,
        }
    }

    /// Serialize to one line of the persisted JSONL format (no trailing newline)
    pub fn to_jsonl_line(&self) -> SharedResult<String> {
        serde_json::to_string(self).map_err(|e| SharedError::SerializationError {
            message: e.to_string(),
        })
    }

    /// Parse one line of the persisted JSONL format
    pub fn from_jsonl_line(line: &str) -> SharedResult<Self> {
        serde_json::from_str(line).map_err(|e| SharedError::DeserializationError {
            message: e.to_string(),
        })
    }
}
