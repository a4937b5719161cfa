//! Client side of `GET /api/csv`.

use common::model::csv::CSV_CONTENT_TYPE;
use common::requests::{CsvExportQuery, CSV_EXPORT_PATH};
use gloo_net::http::Request;

/// How a single export request settled.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome {
    /// `200 OK` with the complete body.
    Body(Vec<u8>),
    /// Any other HTTP status.
    Status(u16),
    /// The request never produced a readable response.
    Network(String),
}

/// Issue one export request and buffer the whole body.
pub async fn fetch_csv(file_name: &str, records: u64) -> FetchOutcome {
    let query = CsvExportQuery::new(file_name, records);
    let response = Request::get(CSV_EXPORT_PATH)
        .query(query.pairs())
        .header("Accept", CSV_CONTENT_TYPE)
        .send()
        .await;

    match response {
        Ok(resp) if resp.status() == 200 => match resp.binary().await {
            Ok(bytes) => FetchOutcome::Body(bytes),
            Err(err) => FetchOutcome::Network(err.to_string()),
        },
        Ok(resp) => FetchOutcome::Status(resp.status()),
        Err(err) => FetchOutcome::Network(err.to_string()),
    }
}
