//! Shape of the generated CSV document.
//!
//! Both the generation service and the download button agree on these values:
//! the backend writes rows in `CSV_COLUMNS` order, and the frontend falls back
//! to `DEFAULT_FILE_NAME` when it has to name a download itself.

/// Column names, in the order every row is written.
pub const CSV_COLUMNS: [&str; 17] = [
    "ID",
    "Name",
    "Phone",
    "Country",
    "City",
    "Street",
    "Address",
    "Address1",
    "Address2",
    "State",
    "State Abbr",
    "Lat",
    "Lng",
    "Building Number",
    "Description",
    "URL",
    "Email",
];

/// Header line of the document, without the trailing newline.
pub const CSV_HEADER: &str = "ID,Name,Phone,Country,City,Street,Address,Address1,Address2,State,State Abbr,Lat,Lng,Building Number,Description,URL,Email";

/// Free-text columns that are always wrapped in double quotes.
pub const QUOTED_COLUMNS: [&str; 4] = ["Street", "Address", "Address1", "Address2"];

/// File name used when the request does not carry one.
pub const DEFAULT_FILE_NAME: &str = "data.csv";

/// Row count used when the request does not carry one.
pub const DEFAULT_RECORDS: u64 = 1_000_000;

/// Media type of the response body.
pub const CSV_CONTENT_TYPE: &str = "application/csv";
