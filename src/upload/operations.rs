//! Upload operations implementation

use crate::data::TabularData;
use crate::error::{Result, UploadError};
use crate::filename::{resolve_filename, Clock, SystemClock};
use crate::upload::config::UploaderConfig;
use crate::upload::transport::{ReqwestTransport, Transport};
use crate::upload::types::{UploadOutcome, UploadPayload, UploadReport};
use std::io::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Serializes tabular data to CSV and posts it to a fixed endpoint
#[derive(Clone)]
pub struct Uploader {
    config: UploaderConfig,
    transport: Arc<dyn Transport>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for Uploader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Uploader")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Uploader {
    /// Create an uploader for `url` with a 30 second timeout.
    ///
    /// The URL is not validated; an unusable URL shows up as a failed upload.
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_config(UploaderConfig::new(url))
    }

    /// Create an uploader from a validated configuration
    pub fn from_config(config: UploaderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    fn with_config(config: UploaderConfig) -> Self {
        Self {
            config,
            transport: Arc::new(ReqwestTransport),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the network transport
    pub fn with_transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Arc::new(transport);
        self
    }

    /// Replace the clock used for generated filenames
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn url(&self) -> &str {
        &self.config.upload_url
    }

    pub fn config(&self) -> &UploaderConfig {
        &self.config
    }

    /// Upload `data` as CSV and report whether the endpoint answered 200.
    ///
    /// A status line is printed to stdout on every path.
    ///
    /// # Errors
    ///
    /// Only usage errors are returned: an empty record sequence
    /// ([`UploadError::NoData`]), a record with an unknown column, or a
    /// failure inside a structured table's own rendering. No request is
    /// made in those cases. HTTP and transport failures yield `Ok(false)`.
    pub fn upload<'a>(
        &self,
        data: impl Into<TabularData<'a>>,
        filename: Option<&str>,
    ) -> Result<bool> {
        self.upload_to(data, filename, &mut std::io::stdout().lock())
    }

    /// Same as [`upload`](Self::upload) with the status line written to `out`
    pub fn upload_to<'a, W: Write>(
        &self,
        data: impl Into<TabularData<'a>>,
        filename: Option<&str>,
        out: &mut W,
    ) -> Result<bool> {
        let report = self.upload_report(data, filename)?;
        if let Err(e) = writeln!(out, "{}", report.message()) {
            log::warn!("Failed to write status line: {}", e);
        }
        Ok(report.is_success())
    }

    /// Same as [`upload`](Self::upload) but returns the full report and
    /// prints nothing.
    pub fn upload_report<'a>(
        &self,
        data: impl Into<TabularData<'a>>,
        filename: Option<&str>,
    ) -> Result<UploadReport> {
        let payload = self.prepare(data.into(), filename)?;

        let start_time = Instant::now();
        let outcome = self.send(&payload);
        let report = UploadReport::new(payload.filename, outcome)
            .duration_ms(whole_millis(start_time.elapsed()));

        if report.is_success() {
            log::info!(
                "Uploaded {} in {} ms",
                report.filename,
                report.duration_ms
            );
        } else {
            log::error!("{}", report.message());
        }

        Ok(report)
    }

    /// Resolve the filename and render the CSV content
    pub fn prepare(&self, data: TabularData<'_>, filename: Option<&str>) -> Result<UploadPayload> {
        let filename = resolve_filename(filename, self.clock.as_ref());
        log::debug!("Resolved filename: {}", filename);

        let content = data.to_csv()?;
        Ok(UploadPayload::new(filename, content))
    }

    /// Issue one POST for `payload` and classify the result
    pub fn send(&self, payload: &UploadPayload) -> UploadOutcome {
        match self
            .transport
            .post_json(self.url(), payload, self.config.timeout())
        {
            Ok(response) => UploadOutcome::from_response(response.status, response.body),
            Err(UploadError::Http(e)) => UploadOutcome::transport(describe(&e)),
            Err(e) => UploadOutcome::transport(describe(&e)),
        }
    }
}

/// Milliseconds in `duration`, saturating at `u64::MAX`
fn whole_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Error text followed by its chain of causes
fn describe(error: &(dyn std::error::Error + 'static)) -> String {
    let mut description = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !description.contains(&cause_text) {
            description.push_str(": ");
            description.push_str(&cause_text);
        }
        source = cause.source();
    }
    description
}
