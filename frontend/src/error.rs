use thiserror::Error;

/// Reasons a download did not end in a saved file.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DownloadError {
    #[error("export failed with HTTP status {0}")]
    Status(u16),

    #[error("export request failed: {0}")]
    Network(String),

    #[error("browser refused to save the file: {0}")]
    Dom(String),
}
