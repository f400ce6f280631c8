// client.rs
use super::{Config, ExportError};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// The scanner's native report format, fixed for every export request.
pub const REPORT_FORMAT: &str = "nessus";

// The download endpoint answers 409 until the export job has finished rendering.
const EXPORT_PENDING: StatusCode = StatusCode::CONFLICT;

#[derive(Debug, Deserialize)]
struct SessionBody {
    token: String,
}

#[derive(Debug, Deserialize)]
pub struct Folder {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct FolderListBody {
    folders: Vec<Folder>,
}

#[derive(Debug, Deserialize)]
pub struct Scan {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
struct ScanListBody {
    scans: Vec<Scan>,
}

#[derive(Debug, Deserialize)]
struct ExportStartedBody {
    file: i64,
}

/// One observation of an export job's download endpoint.
pub enum DownloadPoll {
    /// Export is still rendering (the pending status code).
    Pending,
    /// Any other status; the response carries the report on success.
    Ready(Response),
}

/// Thin client over the scanner's management API. The session token is not
/// stored here; callers thread it through explicitly, mirroring the API's
/// token-as-query-parameter convention.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ExportError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()
            .map_err(|e| ExportError::ClientError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    /// Exchange credentials for a session token. Any non-200 status is a
    /// login failure; bad credentials are not distinguished from other
    /// server-side refusals.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ExportError> {
        let response = self
            .http
            .post(format!("{}/session", self.base_url))
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(ExportError::LoginFailed(response.status()));
        }

        let body: SessionBody = response.json().await?;
        Ok(body.token)
    }

    pub async fn folders(&self, token: &str) -> Result<Vec<Folder>, ExportError> {
        let response = self
            .http
            .get(format!("{}/folders?token={}", self.base_url, token))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ExportError::RequestFailed(format!(
                "folder listing returned {}",
                response.status()
            )));
        }

        let body: FolderListBody = response.json().await?;
        Ok(body.folders)
    }

    pub async fn scans_in_folder(
        &self,
        token: &str,
        folder_id: i64,
    ) -> Result<Vec<Scan>, ExportError> {
        let response = self
            .http
            .get(format!(
                "{}/scans?token={}&folder_id={}",
                self.base_url, token, folder_id
            ))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ExportError::RequestFailed(format!(
                "scan listing returned {}",
                response.status()
            )));
        }

        let body: ScanListBody = response.json().await?;
        Ok(body.scans)
    }

    /// Kick off an export job for one scan; returns the server's file handle
    /// for the pending report.
    pub async fn start_export(&self, token: &str, scan_id: i64) -> Result<i64, ExportError> {
        let response = self
            .http
            .post(format!(
                "{}/scans/{}/export?token={}",
                self.base_url, scan_id, token
            ))
            .form(&[("format", REPORT_FORMAT)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ExportError::RequestFailed(format!(
                "export request for scan {} returned {}",
                scan_id,
                response.status()
            )));
        }

        let body: ExportStartedBody = response.json().await?;
        Ok(body.file)
    }

    /// One download attempt. 409 means the export job is still pending; every
    /// other status ends the poll loop, success or not.
    pub async fn poll_download(
        &self,
        token: &str,
        scan_id: i64,
        file: i64,
    ) -> Result<DownloadPoll, ExportError> {
        let response = self
            .http
            .get(format!(
                "{}/scans/{}/export/{}/download?token={}",
                self.base_url, scan_id, file, token
            ))
            .send()
            .await?;

        if response.status() == EXPORT_PENDING {
            Ok(DownloadPoll::Pending)
        } else {
            Ok(DownloadPoll::Ready(response))
        }
    }
}
