pub mod save_file;
