//! Lazy CSV body.
//!
//! `CsvStream` yields the document as a sequence of byte chunks, the first one
//! carrying the header line. Rows are written only when the next chunk is
//! pulled, so at most `chunk_rows` rows live in memory at once no matter how
//! many records were requested. When the response body is dropped early (the
//! client went away) generation simply stops.

use actix_web::web::Bytes;
use common::model::csv::CSV_HEADER;
use fake::{Fake, Faker};
use log::{debug, warn};
use rand::Rng;

use super::row::DataRow;
use crate::error::ExportError;

/// Rough size of a generated line, used to pre-size chunk buffers.
const APPROX_ROW_BYTES: usize = 256;

/// Upper bound of the pre-allocated chunk buffer, whatever `chunk_rows` says.
const MAX_CHUNK_CAPACITY: usize = 8 * 1024 * 1024;

/// Writes the line of row `id` into the chunk buffer.
pub trait WriteRow: FnMut(u64, &mut String) -> Result<(), ExportError> {}

impl<F> WriteRow for F where F: FnMut(u64, &mut String) -> Result<(), ExportError> {}

pub struct CsvStream<W> {
    write_row: W,
    records: u64,
    next_id: u64,
    chunk_rows: usize,
    header_written: bool,
    finished: bool,
}

/// Rows faked with `rng`.
pub fn faked_rows<R: Rng>(mut rng: R) -> impl WriteRow {
    move |id: u64, out: &mut String| -> Result<(), ExportError> {
        let row: DataRow = Faker.fake_with_rng(&mut rng);
        row.write_line(id, out)?;
        Ok(())
    }
}

impl<W: WriteRow> CsvStream<W> {
    pub fn new(records: u64, chunk_rows: usize, write_row: W) -> Self {
        Self {
            write_row,
            records,
            next_id: 1,
            chunk_rows: chunk_rows.max(1),
            header_written: false,
            finished: false,
        }
    }

    fn next_chunk(&mut self) -> Result<Bytes, ExportError> {
        let capacity = self
            .chunk_rows
            .saturating_mul(APPROX_ROW_BYTES)
            .min(MAX_CHUNK_CAPACITY);
        let mut buf = String::with_capacity(capacity);
        if !self.header_written {
            buf.push_str(CSV_HEADER);
            buf.push('\n');
            self.header_written = true;
        }

        let mut rows = 0;
        while rows < self.chunk_rows && self.next_id <= self.records {
            (self.write_row)(self.next_id, &mut buf)?;
            self.next_id += 1;
            rows += 1;
        }

        if self.next_id > self.records {
            self.finished = true;
        }
        Ok(Bytes::from(buf))
    }
}

impl<W> CsvStream<W> {
    /// Number of data rows already handed out.
    pub fn rows_written(&self) -> u64 {
        self.next_id - 1
    }
}

impl<W: WriteRow> Iterator for CsvStream<W> {
    type Item = Result<Bytes, ExportError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let chunk = self.next_chunk();
        if chunk.is_err() {
            // A failed chunk ends the stream; the transport aborts the response.
            self.finished = true;
        }
        Some(chunk)
    }
}

impl<W> Drop for CsvStream<W> {
    fn drop(&mut self) {
        if self.rows_written() == self.records {
            debug!("CSV stream completed with {} rows", self.records);
        } else {
            warn!(
                "CSV stream stopped after {} of {} rows",
                self.rows_written(),
                self.records
            );
        }
    }
}
