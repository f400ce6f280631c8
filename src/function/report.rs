use serde::{Serialize, Deserialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportedReport {
    pub scan_id: i64,
    pub file_name: String,
    pub bytes_written: u64,
    pub poll_attempts: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportSummary {
    pub folder: String,
    pub folder_id: i64,
    pub reports: Vec<ExportedReport>,
    pub finished_at: String,
    pub duration_secs: u64,
}
