pub mod csv_export;
