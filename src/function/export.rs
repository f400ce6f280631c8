// export.rs
use super::client::{ApiClient, DownloadPoll, Folder};
use super::output;
use super::{Config, ExportError, ExportSummary, ExportedReport};
use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::header::CONTENT_DISPOSITION;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const ATTACHMENT_PREFIX: &str = "attachment; filename=\"";

/// Export every scan in the configured folder and write the resulting
/// reports into the target directory, one file per scan, strictly in
/// sequence. Any failure aborts the whole run, including a malformed
/// filename header on a single scan.
pub async fn run_export(config: Config) -> Result<ExportSummary, ExportError> {
    config.validate()?;

    let target = match &config.target {
        Some(target) => target.clone(),
        None => {
            output::warn("No target folder supplied, will write files to the current directory");
            PathBuf::from(".")
        }
    };

    let client = ApiClient::new(&config)?;

    let token = client.login(&config.username, &config.password).await?;
    output::info(&format!("Got token '{}'", output::mask_token(&token)));

    let folders = client.folders(&token).await?;
    for folder in &folders {
        output::info(&format!("Found folder: {} [{}]", folder.name, folder.id));
    }

    let folder_id = resolve_folder_id(&folders, &config.folder)
        .ok_or_else(|| ExportError::FolderNotFound(config.folder.clone()))?;

    output::info(&format!("Opening folder ID {} ...", folder_id));
    let scans = client.scans_in_folder(&token, folder_id).await?;
    output::info(&format!("... found {} scan(s)", scans.len()));

    let started = Instant::now();
    let mut reports = Vec::new();
    for scan in &scans {
        let report = export_one(&client, &config, &token, scan.id, &target).await?;
        reports.push(report);
    }

    let summary = ExportSummary {
        folder: config.folder.clone(),
        folder_id,
        reports,
        finished_at: Local::now().to_string(),
        duration_secs: started.elapsed().as_secs(),
    };

    print_summary(&summary);

    Ok(summary)
}

/// Linear scan over the folder list; when several folders share the target
/// name the last one encountered wins. Ids must be positive.
pub fn resolve_folder_id(folders: &[Folder], name: &str) -> Option<i64> {
    let mut resolved = None;
    for folder in folders {
        if folder.name == name {
            resolved = Some(folder.id);
        }
    }
    resolved.filter(|id| *id > 0)
}

/// The download response names the report via its content-disposition
/// header. Only the exact `attachment; filename="..."` shape is accepted.
pub fn attachment_filename(header: &str) -> Result<&str, ExportError> {
    header
        .strip_prefix(ATTACHMENT_PREFIX)
        .and_then(|rest| rest.strip_suffix('"'))
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ExportError::BadFilenameHeader(header.to_string()))
}

async fn export_one(
    client: &ApiClient,
    config: &Config,
    token: &str,
    scan_id: i64,
    target: &Path,
) -> Result<ExportedReport, ExportError> {
    let file = client.start_export(token, scan_id).await?;
    output::info(&format!("Triggered export for Scan ID {}", scan_id));

    // The report is rendered server-side; poll the download endpoint until
    // it stops answering the pending status.
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.yellow} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Waiting for Scan ID {} export", scan_id));

    let mut attempts: u64 = 0;
    let response = loop {
        attempts += 1;
        match client.poll_download(token, scan_id, file).await? {
            DownloadPoll::Ready(response) => break response,
            DownloadPoll::Pending => {
                if let Some(max) = config.poll_attempts {
                    if attempts >= max {
                        spinner.finish_and_clear();
                        return Err(ExportError::ExportTimeout { scan_id, attempts });
                    }
                }
                spinner.tick();
                tokio::time::sleep(Duration::from_millis(config.poll_interval_ms)).await;
            }
        }
    };
    spinner.finish_and_clear();

    let header = response
        .headers()
        .get(CONTENT_DISPOSITION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string();
    let file_name = attachment_filename(&header)?.to_string();

    let path = target.join(&file_name);
    let body = response.bytes().await?;
    fs::write(&path, &body)?;
    output::info(&format!("Writing file '{}'", path.display()));

    Ok(ExportedReport {
        scan_id,
        file_name,
        bytes_written: body.len() as u64,
        poll_attempts: attempts,
    })
}

fn print_summary(summary: &ExportSummary) {
    println!("\n=== Export Summary ===");
    println!("Folder: {} [{}]", summary.folder, summary.folder_id);
    println!("Reports saved: {}", summary.reports.len());

    let total_bytes: u64 = summary.reports.iter().map(|r| r.bytes_written).sum();
    println!("Total bytes: {}", total_bytes);
    println!("Duration: {}s", summary.duration_secs);
    println!("Finished at: {}", summary.finished_at);
}
