//! File-system adapters: roster spreadsheets in, JSON and Excel reports out.

pub mod excel_read;
pub mod excel_write;
pub mod json_write;
