use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, ToolError};
use crate::io::json_write::JsonOrient;

/// Run settings read once from the configuration file and handed to every
/// stage of the pipeline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Closing date of the reporting period. Names every output file and
    /// fills the `Date` column of the masterlist addition.
    pub end_date: String,
    /// Term label written to the `Semester` column.
    pub term: String,
    /// Directory holding the roster spreadsheets.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Directory receiving the JSON artifacts.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Roster column carried into the masterlist `Comment` column.
    #[serde(default = "default_comment_column")]
    pub comment_column: String,
    #[serde(default)]
    pub json_orient: JsonOrient,
    #[serde(default)]
    pub domains: CategoryDomains,
    /// Also write the masterlist addition as an Excel workbook.
    #[serde(default)]
    pub excel_reports: bool,
}

/// Optional explicit label sets for the categorical roster columns.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CategoryDomains {
    #[serde(default)]
    pub final_status: Option<Vec<String>>,
    #[serde(default)]
    pub college_or_school: Option<Vec<String>>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_comment_column() -> String {
    "Unnamed: 14".to_string()
}

impl Config {
    /// Creates a configuration with default directories and settings.
    pub fn new(end_date: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            end_date: end_date.into(),
            term: term.into(),
            data_dir: default_data_dir(),
            output_dir: default_output_dir(),
            comment_column: default_comment_column(),
            json_orient: JsonOrient::default(),
            domains: CategoryDomains::default(),
            excel_reports: false,
        }
    }

    /// Loads and validates the configuration file. Relative directories are
    /// resolved against the directory containing the file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ToolError::MissingInput(path.to_path_buf()));
        }

        let source = fs::read_to_string(path)?;
        let mut config: Config =
            serde_json::from_str(&source).map_err(|error| ToolError::Config {
                path: path.to_path_buf(),
                message: error.to_string(),
            })?;

        config.validate().map_err(|message| ToolError::Config {
            path: path.to_path_buf(),
            message,
        })?;

        if let Some(base) = path.parent() {
            config.data_dir = base.join(&config.data_dir);
            config.output_dir = base.join(&config.output_dir);
        }

        Ok(config)
    }

    fn validate(&self) -> std::result::Result<(), String> {
        if self.end_date.trim().is_empty() {
            return Err("end_date must not be empty".into());
        }
        if self.end_date.contains(['/', '\\']) {
            return Err(format!(
                "end_date '{}' must not contain path separators",
                self.end_date
            ));
        }
        if self.term.trim().is_empty() {
            return Err("term must not be empty".into());
        }
        Ok(())
    }

    /// Path of the cleaned roster artifact.
    pub fn pto_data_path(&self) -> PathBuf {
        self.output_dir.join(format!("pto_data_{}.json", self.end_date))
    }

    /// Path of the participation projection artifact.
    pub fn participation_data_path(&self) -> PathBuf {
        self.output_dir.join(format!("participation_data_{}.json", self.end_date))
    }

    /// Path of the masterlist addition report with the given file extension.
    pub fn masterlist_addition_path(&self, extension: &str) -> PathBuf {
        self.output_dir
            .join("reports")
            .join(format!("masterlist_addition_{}.{extension}", self.end_date))
    }
}
