// config.rs
use structopt::StructOpt;
use std::path::PathBuf;
use super::ExportError;

#[derive(Debug, StructOpt)]
pub struct Config {
    /// Scan folder to download
    pub folder: String,

    /// Scanner login username
    pub username: String,

    /// Scanner login password
    pub password: String,

    /// Folder to save exported reports to (defaults to the current directory)
    pub target: Option<PathBuf>,

    /// Base URL of the scanner management API
    #[structopt(long, default_value = "https://localhost:8834")]
    pub url: String,

    /// Verify the scanner's TLS certificate (self-signed certs are rejected)
    #[structopt(long)]
    pub verify_tls: bool,

    /// Per-request timeout (seconds)
    #[structopt(long, default_value = "30")]
    pub timeout: u64,

    /// Delay between export-status polls (milliseconds)
    #[structopt(long, default_value = "100")]
    pub poll_interval_ms: u64,

    /// Maximum download polls per export before giving up (unlimited when omitted)
    #[structopt(long)]
    pub poll_attempts: Option<u64>,
}

impl Config {
    pub fn validate(&self) -> Result<(), ExportError> {
        // Scanner URL format
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ExportError::InvalidConfig(
                "scanner URL must start with http:// or https://".to_string(),
            ));
        }

        // A zero poll interval would hammer the download endpoint
        if self.poll_interval_ms == 0 {
            return Err(ExportError::InvalidConfig(
                "poll interval must be at least 1ms".to_string(),
            ));
        }

        if self.poll_attempts == Some(0) {
            return Err(ExportError::InvalidConfig(
                "poll attempt limit must be at least 1".to_string(),
            ));
        }

        // Target folder must already exist; reports are written straight into it
        if let Some(target) = &self.target {
            if !target.is_dir() {
                return Err(ExportError::InvalidConfig(format!(
                    "target folder '{}' is not a directory",
                    target.display()
                )));
            }
        }

        Ok(())
    }
}
