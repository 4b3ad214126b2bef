//! Lead recorder service implementation
//!
//! Appends lead records as newline-delimited JSON to a file on local disk.
//! The log is append-only: records are never rewritten or deleted.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::{WebServerError, WebServerResult};
use crate::traits::LeadRecorder;
use shared::LeadRecord;

/// File name of the lead log inside the data directory
const LEAD_LOG_FILE: &str = "leads.jsonl";

/// JSONL-backed lead recorder
///
/// Each record becomes exactly one line. Writes are serialized through a
/// mutex so concurrent submissions never interleave within a line.
#[derive(Clone)]
pub struct JsonlLeadRecorder {
    data_dir: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl JsonlLeadRecorder {
    /// Create a recorder writing under the default `./data` directory
    pub fn new() -> Self {
        Self::with_data_dir(PathBuf::from("./data"))
    }

    /// Create a recorder writing under a specific data directory
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Path of the lead log file
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LEAD_LOG_FILE)
    }

    async fn append_line(&self, line: &str) -> Result<(), std::io::Error> {
        let _guard = self.write_lock.lock().await;

        tokio::fs::create_dir_all(&self.data_dir).await?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.log_path())
            .await?;

        file.write_all(format!("{}\n", line).as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }

    /// Read all records currently in the log, skipping blank lines
    ///
    /// Intended for operational tooling and tests, not the request path.
    pub async fn read_all(&self) -> WebServerResult<Vec<LeadRecord>> {
        let path = self.log_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| WebServerError::StorageUnavailable { source: e })?;

        let mut records = Vec::new();
        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }
            records.push(LeadRecord::from_jsonl_line(line)?);
        }

        Ok(records)
    }
}

impl Default for JsonlLeadRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LeadRecorder for JsonlLeadRecorder {
    async fn record(&self, entry: LeadRecord) -> WebServerResult<()> {
        let line = entry.to_jsonl_line()?;

        self.append_line(&line)
            .await
            .map_err(|e| WebServerError::StorageUnavailable { source: e })?;

        info!("📝 Recorded lead from '{}'", entry.email);
        debug!("Lead log file: {}", self.log_path().display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::EstimationInput;
    use tempfile::TempDir;

    fn sample_record(email: &str) -> LeadRecord {
        LeadRecord::new(
            EstimationInput {
                company_name: "Acme".to_string(),
                industry: "Healthcare".to_string(),
                employees: 25,
                manual_hours_per_week: 20.0,
                avg_hourly_rate: 35.0,
                processes: vec!["data-entry".to_string()],
            },
            email.to_string(),
            None,
        )
    }

    #[tokio::test]
    async fn test_record_creates_data_dir_and_file() {
        let temp = TempDir::new().unwrap();
        let recorder = JsonlLeadRecorder::with_data_dir(temp.path().join("nested").join("data"));

        recorder.record(sample_record("a@b.c")).await.unwrap();

        assert!(recorder.log_path().exists());
        let content = std::fs::read_to_string(recorder.log_path()).unwrap();
        assert_eq!(content.lines().count(), 1);
    }

    #[tokio::test]
    async fn test_record_appends_one_line_per_entry() {
        let temp = TempDir::new().unwrap();
        let recorder = JsonlLeadRecorder::with_data_dir(temp.path().to_path_buf());

        recorder.record(sample_record("first@test.io")).await.unwrap();
        recorder.record(sample_record("second@test.io")).await.unwrap();

        let content = std::fs::read_to_string(recorder.log_path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("first@test.io"));
        assert!(lines[1].contains("second@test.io"));
    }

    #[tokio::test]
    async fn test_recorded_lines_parse_back() {
        let temp = TempDir::new().unwrap();
        let recorder = JsonlLeadRecorder::with_data_dir(temp.path().to_path_buf());

        recorder.record(sample_record("ops@acme.test")).await.unwrap();

        let records = recorder.read_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].email, "ops@acme.test");
        assert_eq!(records[0].company_name, "Acme");
    }

    #[tokio::test]
    async fn test_read_all_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let recorder = JsonlLeadRecorder::with_data_dir(temp.path().to_path_buf());

        let records = recorder.read_all().await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_submissions_append_duplicates() {
        let temp = TempDir::new().unwrap();
        let recorder = JsonlLeadRecorder::with_data_dir(temp.path().to_path_buf());

        let record = sample_record("same@test.io");
        recorder.record(record.clone()).await.unwrap();
        recorder.record(record).await.unwrap();

        let records = recorder.read_all().await.unwrap();
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_records_never_interleave() {
        let temp = TempDir::new().unwrap();
        let recorder = JsonlLeadRecorder::with_data_dir(temp.path().to_path_buf());

        let mut handles = Vec::new();
        for i in 0..20 {
            let recorder = recorder.clone();
            handles.push(tokio::spawn(async move {
                recorder
                    .record(sample_record(&format!("lead{}@test.io", i)))
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        // Every line must be independently parseable
        let records = recorder.read_all().await.unwrap();
        assert_eq!(records.len(), 20);
    }
}
