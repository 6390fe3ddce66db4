use crate::cve_report::domain::FeedYear;
use crate::ports::outbound::FeedDownloader;
use crate::shared::error::ReportError;
use crate::shared::security::{validate_file_size, validate_not_symlink, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

/// Where NVD publishes the JSON 1.1 yearly feeds
pub const DEFAULT_FEED_BASE_URL: &str = "https://nvd.nist.gov/feeds/json/cve/1.1";

/// Yearly archives are tens of megabytes; allow slow links to finish
const DOWNLOAD_TIMEOUT_SECS: u64 = 300;

/// Suffix of the file a feed is decompressed into before it is renamed
const PARTIAL_SUFFIX: &str = ".part";

/// NvdFeedClient adapter for downloading yearly feed archives
///
/// This adapter implements the FeedDownloader port with a blocking
/// reqwest client. The archive is kept next to the extracted feed so a
/// later run can reuse it.
pub struct NvdFeedClient {
    client: reqwest::blocking::Client,
    base_url: String,
    max_retries: u32,
}

impl NvdFeedClient {
    /// Creates a client for the given feed base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("nvd-cpe-report/{}", version);
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(DOWNLOAD_TIMEOUT_SECS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            max_retries: 3,
        })
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    /// `{base_url}/nvdcve-1.1-{year}.json.zip`
    pub fn archive_url(&self, year: FeedYear) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            year.archive_file_name()
        )
    }

    fn fetch_with_retry(&self, url: &str) -> Result<Vec<u8>> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch_archive(url) {
                Ok(bytes) => return Ok(bytes),
                Err(e) => {
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        thread::sleep(Duration::from_millis(500 * attempt as u64));
                    }
                }
            }
        }

        let details = last_error.map_or_else(
            || "no attempt made".to_string(),
            |e| format!("{:#}", e),
        );
        Err(ReportError::FeedDownloadError {
            url: url.to_string(),
            details,
        }
        .into())
    }

    fn fetch_archive(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send()?;

        if !response.status().is_success() {
            anyhow::bail!("NVD returned status code {}", response.status());
        }

        if let Some(length) = response.content_length() {
            validate_file_size(length, Path::new(url), MAX_FILE_SIZE)?;
        }

        let bytes = response.bytes()?;
        validate_file_size(bytes.len() as u64, Path::new(url), MAX_FILE_SIZE)?;

        Ok(bytes.to_vec())
    }
}

impl FeedDownloader for NvdFeedClient {
    fn download(&self, year: FeedYear, destination_dir: &Path) -> Result<PathBuf> {
        let url = self.archive_url(year);
        let bytes = self.fetch_with_retry(&url)?;

        fs::create_dir_all(destination_dir).map_err(|e| ReportError::FileWriteError {
            path: destination_dir.to_path_buf(),
            details: e.to_string(),
        })?;

        let archive_path = destination_dir.join(year.archive_file_name());
        if fs::symlink_metadata(&archive_path).is_ok() {
            validate_not_symlink(&archive_path, "Write")?;
        }
        fs::write(&archive_path, &bytes).map_err(|e| ReportError::FileWriteError {
            path: archive_path.clone(),
            details: e.to_string(),
        })?;

        extract_feed_archive(&archive_path, &year.feed_file_name(), destination_dir)
    }

    fn source_url(&self, year: FeedYear) -> String {
        self.archive_url(year)
    }
}

/// Extracts `member` from the zip archive at `archive_path` into `destination_dir`
///
/// The member is decompressed into `{member}.part` first and renamed into
/// place only once the copy succeeded, so a failed extraction never leaves
/// a feed behind that a later run would pick up.
///
/// # Returns
/// Path of the extracted file
///
/// # Errors
/// Returns an error if the archive is damaged, does not contain `member`,
/// the member exceeds the size limit, or the target is a symbolic link
pub fn extract_feed_archive(
    archive_path: &Path,
    member: &str,
    destination_dir: &Path,
) -> Result<PathBuf> {
    let archive_error = |details: String| ReportError::ArchiveError {
        path: archive_path.to_path_buf(),
        details,
    };

    let file = File::open(archive_path).map_err(|e| ReportError::FileReadError {
        path: archive_path.to_path_buf(),
        details: e.to_string(),
    })?;
    let mut archive = zip::ZipArchive::new(file).map_err(|e| archive_error(e.to_string()))?;
    let entry = archive
        .by_name(member)
        .map_err(|e| archive_error(format!("{}: {}", member, e)))?;

    validate_file_size(entry.size(), Path::new(member), MAX_FILE_SIZE)?;

    let target = destination_dir.join(member);
    let partial = destination_dir.join(format!("{}{}", member, PARTIAL_SUFFIX));
    for path in [&target, &partial] {
        if fs::symlink_metadata(path).is_ok() {
            validate_not_symlink(path, "Write")?;
        }
    }

    let copied = copy_bounded(entry, &partial, archive_path).and_then(|_| {
        fs::rename(&partial, &target).map_err(|e| {
            anyhow::Error::from(ReportError::FileWriteError {
                path: target.clone(),
                details: e.to_string(),
            })
        })
    });

    if copied.is_err() {
        let _ = fs::remove_file(&partial);
    }
    copied.map(|_| target)
}

/// Copies at most `MAX_FILE_SIZE` decompressed bytes of `entry` into `path`
fn copy_bounded(entry: impl Read, path: &Path, archive_path: &Path) -> Result<u64> {
    let mut output = File::create(path).map_err(|e| ReportError::FileWriteError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let written = io::copy(&mut entry.take(MAX_FILE_SIZE + 1), &mut output).map_err(|e| {
        ReportError::ArchiveError {
            path: archive_path.to_path_buf(),
            details: e.to_string(),
        }
    })?;
    validate_file_size(written, path, MAX_FILE_SIZE)?;

    Ok(written)
}
