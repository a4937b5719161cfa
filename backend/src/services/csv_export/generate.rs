use crate::config::Settings;
use crate::error::ExportError;
use actix_web::http::header;
use actix_web::{web, HttpResponse};
use common::model::csv::{CSV_CONTENT_TYPE, DEFAULT_FILE_NAME, DEFAULT_RECORDS};
use common::requests::CsvExportQuery;
use futures_util::stream;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::iter;

use super::stream::{faked_rows, CsvStream, WriteRow};

/// Longest accepted download name, in bytes.
const MAX_FILE_NAME_LEN: usize = 255;

/// Validated parameters of one generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub file_name: String,
    pub records: u64,
}

impl TryFrom<CsvExportQuery> for GenerationRequest {
    type Error = ExportError;

    fn try_from(query: CsvExportQuery) -> Result<Self, Self::Error> {
        let file_name = query
            .file_name
            .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());
        validate_file_name(&file_name)?;

        let records = match query.records {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ExportError::InvalidRecords(raw))?,
            None => DEFAULT_RECORDS,
        };

        Ok(Self { file_name, records })
    }
}

/// The name ends up verbatim in `Content-Disposition`, so anything that could
/// terminate or extend the header value is refused.
fn validate_file_name(file_name: &str) -> Result<(), ExportError> {
    let forbidden = |ch: char| ch.is_control() || matches!(ch, '"' | '\\' | '/' | ';');
    if file_name.trim().is_empty()
        || file_name.len() > MAX_FILE_NAME_LEN
        || file_name.chars().any(forbidden)
    {
        return Err(ExportError::InvalidFileName(file_name.escape_debug().to_string()));
    }
    Ok(())
}

/// Handler for `GET /api/csv`.
///
/// The first chunk (header plus the first batch of rows) is generated before
/// the response head is built, so a failure there still turns into a `500`.
/// The remaining chunks are produced on demand while actix writes the body.
pub async fn process(
    query: web::Query<CsvExportQuery>,
    settings: web::Data<Settings>,
) -> Result<HttpResponse, ExportError> {
    let request = GenerationRequest::try_from(query.into_inner())?;
    info!(
        "Generating {} with {} records",
        request.file_name, request.records
    );

    let rows = CsvStream::new(
        request.records,
        settings.chunk_rows,
        faked_rows(StdRng::from_entropy()),
    );
    stream_response(&request.file_name, rows)
}

/// Build the download response around `rows`, committing to `200` only once
/// the first chunk exists.
fn stream_response<W>(file_name: &str, mut rows: CsvStream<W>) -> Result<HttpResponse, ExportError>
where
    W: WriteRow + 'static,
{
    let first = rows.next().transpose()?.unwrap_or_default();
    let body = stream::iter(iter::once(Ok(first)).chain(rows));

    Ok(HttpResponse::Ok()
        .content_type(CSV_CONTENT_TYPE)
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", file_name),
        ))
        .streaming(body))
}
