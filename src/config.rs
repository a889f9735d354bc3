//! Run configuration and retry tuning.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

/// Export format requested from the workspace, also used as the local
/// file extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Md,
    Pdf,
    Docx,
    Jpg,
}

impl ExportFormat {
    /// The wire value of the format, identical to the file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Md => "md",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
            ExportFormat::Jpg => "jpg",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// User-supplied settings for a single mirror run. Immutable once the run
/// starts.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Destination directory the remote tree is mirrored under.
    pub root_path: PathBuf,
    /// Format every document is exported as.
    pub format: ExportFormat,
    /// Value of the `shimo_sid` session cookie.
    pub session: String,
    /// Strip spaces from every mirrored path segment.
    pub remove_blank: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            root_path: PathBuf::from("./download"),
            format: ExportFormat::Md,
            session: String::new(),
            remove_blank: false,
        }
    }
}

/// Retry budgets and pacing, constant for the process lifetime.
///
/// Budgets apply to the transport's 429 handling and are call-site
/// specific: listings and payload downloads tolerate little waiting,
/// export requests and status polls tolerate more.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Fixed sleep between rate-limit retries.
    pub backoff: Duration,
    /// 429 budget for directory listings.
    pub listing_budget: u32,
    /// 429 budget for export requests.
    pub export_budget: u32,
    /// 429 budget for a single export-status query.
    pub poll_budget: u32,
    /// 429 budget for fetching the exported payload.
    pub download_budget: u32,
    /// Sleep between export-status queries while a job is incomplete.
    pub poll_interval: Duration,
    /// Optional wall-clock cap on the status poll loop. `None` polls
    /// until the job completes, however long that takes.
    pub poll_timeout: Option<Duration>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            backoff: Duration::from_secs(10),
            listing_budget: 2,
            export_budget: 10,
            poll_budget: 20,
            download_budget: 2,
            poll_interval: Duration::from_secs(2),
            poll_timeout: None,
        }
    }
}
