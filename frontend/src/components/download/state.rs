//! State owned by one `ButtonDownload` instance.
//!
//! Kept free of DOM access so the request lifecycle can be driven directly in
//! tests: `begin` when the button is clicked, `finish` once the request has
//! settled.

use crate::api::FetchOutcome;
use crate::error::DownloadError;
use crate::helpers::save_file::SaveFile;

#[derive(Debug, Default)]
pub struct DownloadState {
    pub is_loading: bool,
}

impl DownloadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) {
        self.is_loading = true;
    }

    /// Settle a request. Only a successful body reaches `saver`; the loading
    /// flag is cleared whatever the outcome.
    pub fn finish<S: SaveFile + ?Sized>(
        &mut self,
        outcome: FetchOutcome,
        file_name: &str,
        saver: &S,
    ) -> Result<(), DownloadError> {
        let result = match outcome {
            FetchOutcome::Body(bytes) => saver.save(bytes, file_name),
            FetchOutcome::Status(status) => Err(DownloadError::Status(status)),
            FetchOutcome::Network(reason) => Err(DownloadError::Network(reason)),
        };
        self.is_loading = false;
        result
    }

    pub fn label(&self) -> &'static str {
        if self.is_loading {
            "Generating export..."
        } else {
            "Fetch download"
        }
    }
}
