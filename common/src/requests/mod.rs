use serde::{Deserialize, Serialize};

/// Path of the CSV generation endpoint.
pub const CSV_EXPORT_PATH: &str = "/api/csv";

/// Query string accepted by `GET /api/csv`.
///
/// `records` stays a raw string on the wire so the backend can reject a
/// non-numeric value with a readable message instead of a generic extractor
/// error.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CsvExportQuery {
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
    pub records: Option<String>,
}

impl CsvExportQuery {
    pub fn new(file_name: impl Into<String>, records: u64) -> Self {
        Self {
            file_name: Some(file_name.into()),
            records: Some(records.to_string()),
        }
    }

    /// Present parameters as `(name, value)` pairs, ready to be URL-encoded.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(file_name) = &self.file_name {
            pairs.push(("fileName", file_name.as_str()));
        }
        if let Some(records) = &self.records {
            pairs.push(("records", records.as_str()));
        }
        pairs
    }
}
