//! Core library for the roster-tools command line application.
//!
//! The library merges a directory of program roster spreadsheets into one
//! table, cleans it, and derives the reports the CLI writes. IO adapters live
//! under [`io`], the table representation inside [`model`], the cleaning rules
//! in [`normalize`], the derived reports under [`report`], and the end-to-end
//! run in [`pipeline`].

pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod report;

pub use config::Config;
pub use error::{Result, ToolError};
