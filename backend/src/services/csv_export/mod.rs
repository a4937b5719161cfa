//! CSV export endpoint.
//!
//! `GET /api/csv?fileName=<name>&records=<count>` answers with a synthetic CSV
//! document offered as a file download. Both parameters are optional
//! (`data.csv` and one million rows by default).
//!
//! - `generate`: request validation and the actix handler.
//! - `stream`: the lazy chunk iterator that feeds the response body.
//! - `row`: one fake record and its CSV serialization.

use actix_web::web::{get, scope};
use actix_web::Scope;
use common::requests::CSV_EXPORT_PATH;

mod generate;
mod row;
mod stream;

/// Configures and returns the Actix scope for the export route.
pub fn configure_routes() -> Scope {
    scope(CSV_EXPORT_PATH).route("", get().to(generate::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, web, App};
    use actix_web::body::MessageBody;
    use common::model::csv::{CSV_COLUMNS, CSV_HEADER};
    use futures_util::future::poll_fn;
    use std::pin::Pin;

    fn settings(chunk_rows: usize) -> web::Data<Settings> {
        web::Data::new(Settings {
            chunk_rows,
            ..Settings::default()
        })
    }

    async fn get_body(uri: &str) -> (StatusCode, header::HeaderMap, String) {
        let app = test::init_service(
            App::new()
                .app_data(settings(4))
                .service(configure_routes()),
        )
        .await;
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = test::read_body(resp).await;
        (status, headers, String::from_utf8(body.to_vec()).unwrap())
    }

    #[actix_web::test]
    async fn serves_requested_rows_as_attachment() {
        let (status, headers, body) = get_body("/api/csv?fileName=test.csv&records=5").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            headers.get(header::CONTENT_DISPOSITION).unwrap(),
            "attachment; filename=test.csv"
        );
        assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), "application/csv");
        assert_eq!(body.lines().count(), 6);
        assert!(body.ends_with('\n'));
    }

    #[actix_web::test]
    async fn rows_are_numbered_after_the_header() {
        let (_, _, body) = get_body("/api/csv?fileName=rows.csv&records=13").await;
        let lines: Vec<&str> = body.lines().collect();

        assert_eq!(lines[0], CSV_HEADER);
        for i in 1..=13 {
            assert!(lines[i].starts_with(&format!("{},", i)));
        }
    }

    #[actix_web::test]
    async fn zero_records_yield_header_only() {
        let (status, _, body) = get_body("/api/csv?records=0").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, format!("{}\n", CSV_HEADER));
    }

    #[actix_web::test]
    async fn omitted_file_name_defaults_to_data_csv() {
        let (_, headers, _) = get_body("/api/csv?records=1").await;
        assert_eq!(
            headers.get(header::CONTENT_DISPOSITION).unwrap(),
            "attachment; filename=data.csv"
        );
    }

    #[actix_web::test]
    async fn document_parses_into_named_columns() {
        let (_, _, body) = get_body("/api/csv?fileName=parse.csv&records=40").await;

        let mut reader = csv::Reader::from_reader(body.as_bytes());
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, CSV_COLUMNS);

        let mut count = 0;
        for (index, record) in reader.records().enumerate() {
            let record = record.unwrap();
            assert_eq!(record.len(), CSV_COLUMNS.len());
            assert_eq!(record[0].parse::<usize>().unwrap(), index + 1);
            count += 1;
        }
        assert_eq!(count, 40);
    }

    #[actix_web::test]
    async fn repeated_requests_keep_shape() {
        let (_, _, first) = get_body("/api/csv?records=3").await;
        let (_, _, second) = get_body("/api/csv?records=3").await;

        assert_eq!(first.lines().next(), second.lines().next());
        assert_eq!(first.lines().count(), second.lines().count());
    }

    #[actix_web::test]
    async fn non_numeric_records_are_a_bad_request() {
        let (status, _, body) = get_body("/api/csv?records=abc").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("abc"));
    }

    #[actix_web::test]
    async fn header_injection_is_a_bad_request() {
        let (status, headers, _) =
            get_body("/api/csv?fileName=x.csv%0D%0ASet-Cookie:%20a=1&records=1").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(headers.get(header::SET_COOKIE).is_none());
    }

    #[actix_web::test]
    async fn other_methods_are_not_routed() {
        let app = test::init_service(
            App::new()
                .app_data(settings(4))
                .service(configure_routes()),
        )
        .await;
        let req = test::TestRequest::post().uri("/api/csv").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_client_error());
    }

    #[actix_web::test]
    async fn client_going_away_after_first_chunk_ends_the_response() {
        let app = test::init_service(
            App::new()
                .app_data(settings(4))
                .service(configure_routes()),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/api/csv?fileName=big.csv&records=1000000")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let mut body = resp.into_body();
        let chunk = poll_fn(|cx| Pin::new(&mut body).poll_next(cx))
            .await
            .unwrap()
            .unwrap();
        drop(body);

        let text = std::str::from_utf8(&chunk).unwrap();
        assert_eq!(text.lines().count(), 5); // header + one chunk of rows
        assert!(text.starts_with(CSV_HEADER));
    }
}
