// Error handling for the export run
use thiserror::Error;
use std::io;
use reqwest::StatusCode;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("login failed with status {0}")]
    LoginFailed(StatusCode),

    #[error("failed to find the '{0}' folder")]
    FolderNotFound(String),

    #[error("network error: {0}")]
    NetworkError(String),

    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("file operation failed: {0}")]
    IoError(String),

    #[error("no content-disposition match: {0:?}")]
    BadFilenameHeader(String),

    #[error("export of scan {scan_id} still not ready after {attempts} download polls")]
    ExportTimeout { scan_id: i64, attempts: u64 },

    #[error("HTTP client error: {0}")]
    ClientError(String),

    #[error("unexpected response body: {0}")]
    SerializationError(String),
}

impl From<io::Error> for ExportError {
    fn from(err: io::Error) -> Self {
        ExportError::IoError(err.to_string())
    }
}

impl From<reqwest::Error> for ExportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ExportError::NetworkError(format!("request timed out: {}", err))
        } else if err.is_connect() {
            ExportError::NetworkError(format!("connection error: {}", err))
        } else {
            ExportError::RequestFailed(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::SerializationError(err.to_string())
    }
}
