pub mod header_file;
