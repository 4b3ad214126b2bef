//! Type definitions for webserver
//!
//! Wire request shapes used by the HTTP handlers that are not service
//! traits or shared domain types.

use serde::{Deserialize, Serialize};
use shared::{EstimationInput, EstimationResult, LeadRecord};

/// Lead submission payload from the calculator UI
///
/// Calculator inputs plus contact email and the result the visitor was
/// shown. Every field is optional on the wire and defaults per the lead
/// log contract.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadSubmission {
    pub company_name: String,
    pub industry: String,
    pub employees: u32,
    pub manual_hours_per_week: f64,
    pub avg_hourly_rate: f64,
    pub processes: Vec<String>,
    pub email: String,
    pub result: Option<EstimationResult>,
}

impl LeadSubmission {
    /// Convert into a log record, stamping the write-time timestamp
    pub fn into_record(self) -> LeadRecord {
        let input = EstimationInput {
            company_name: self.company_name,
            industry: self.industry,
            employees: self.employees,
            manual_hours_per_week: self.manual_hours_per_week,
            avg_hourly_rate: self.avg_hourly_rate,
            processes: self.processes,
        };
        LeadRecord::new(input, self.email, self.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_defaults_missing_fields() {
        let submission: LeadSubmission = serde_json::from_str(r#"{"email":"a@b.c"}"#).unwrap();

        assert_eq!(submission.email, "a@b.c");
        assert_eq!(submission.company_name, "");
        assert_eq!(submission.employees, 0);
        assert!(submission.processes.is_empty());
        assert!(submission.result.is_none());
    }

    #[test]
    fn test_into_record_carries_all_fields() {
        let submission: LeadSubmission = serde_json::from_str(
            r#"{
                "companyName": "Acme",
                "industry": "Healthcare",
                "employees": 25,
                "manualHoursPerWeek": 12.5,
                "avgHourlyRate": 40,
                "processes": ["reporting", "scheduling"],
                "email": "ops@acme.test",
                "result": null
            }"#,
        )
        .unwrap();

        let record = submission.into_record();
        assert_eq!(record.company_name, "Acme");
        assert_eq!(record.industry, "Healthcare");
        assert_eq!(record.employees, 25);
        assert_eq!(record.manual_hours_per_week, 12.5);
        assert_eq!(record.avg_hourly_rate, 40.0);
        assert_eq!(record.processes.len(), 2);
        assert_eq!(record.email, "ops@acme.test");
        assert!(record.result.is_none());
    }
}
