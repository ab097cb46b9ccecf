//! File download stage
//!
//! Streams each selected file to the destination directory, one at a time.
//! Transfers are best-effort: a failure is recorded, its truncated file is
//! removed, and the batch continues. Files already present at the
//! destination are skipped. Interrupting the process leaves the partial
//! file in place.

use crate::error::TransferError;
use crate::filter::SelectedFile;
use crate::progress::Progress;
use crate::registry::HttpClient;
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// What happened to one scheduled transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    /// File was downloaded
    Downloaded { filename: String, bytes: u64 },
    /// File already existed at the destination
    Skipped { filename: String },
}

/// Result of a download batch
pub struct BatchResult {
    /// Outcomes for transfers that completed or were skipped
    pub outcomes: Vec<TransferOutcome>,
    /// Per-file failures, in the order they occurred
    pub errors: Vec<TransferError>,
}

/// Download all selected files into the destination directory, sequentially.
///
/// The directory is created if missing. Every file is attempted even when an
/// earlier one fails; failures are collected in the result.
pub async fn download_batch(
    client: &HttpClient,
    files: &[SelectedFile],
    dest: &Path,
    show_progress: bool,
) -> Result<BatchResult, std::io::Error> {
    tokio::fs::create_dir_all(dest).await?;

    let mut outcomes = Vec::new();
    let mut errors = Vec::new();

    for selected in files {
        let filename = &selected.file.filename;
        let target = dest.join(filename);

        if target.exists() {
            outcomes.push(TransferOutcome::Skipped {
                filename: filename.clone(),
            });
            continue;
        }

        let mut progress = Progress::new(show_progress);
        match download_file(client, &selected.file.url, filename, &target, &mut progress).await {
            Ok(bytes) => {
                progress.finish_and_clear();
                outcomes.push(TransferOutcome::Downloaded {
                    filename: filename.clone(),
                    bytes,
                });
            }
            Err(e) => {
                progress.finish_and_clear();
                // A truncated file left behind would be skipped as complete
                // on the next run; only interrupt partials stay in place
                let _ = tokio::fs::remove_file(&target).await;
                errors.push(e);
            }
        }
    }

    Ok(BatchResult { outcomes, errors })
}

/// Stream one file to disk, returning the number of bytes written
async fn download_file(
    client: &HttpClient,
    url: &str,
    filename: &str,
    target: &Path,
    progress: &mut Progress,
) -> Result<u64, TransferError> {
    let mut response = client
        .inner()
        .get(url)
        .send()
        .await
        .map_err(|e| TransferError::request(filename, e.to_string()))?;

    if !response.status().is_success() {
        return Err(TransferError::request(
            filename,
            format!("HTTP {}", response.status()),
        ));
    }

    progress.start_download(response.content_length(), filename);

    let mut file = tokio::fs::File::create(target)
        .await
        .map_err(|e| TransferError::write(filename, e))?;

    let mut written: u64 = 0;
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| TransferError::request(filename, e.to_string()))?
    {
        file.write_all(&chunk)
            .await
            .map_err(|e| TransferError::write(filename, e))?;
        written += chunk.len() as u64;
        progress.inc(chunk.len() as u64);
    }

    file.flush()
        .await
        .map_err(|e| TransferError::write(filename, e))?;

    Ok(written)
}
