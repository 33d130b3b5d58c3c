use tracing::{info, instrument};

use crate::config::Config;
use crate::error::Result;
use crate::io::excel_read;
use crate::normalize;
use crate::report::{self, ParticipationSummary};

/// Runs the whole batch: load the rosters, clean them, then write the
/// participation and masterlist addition reports. Every stage writes its
/// artifact before the next stage starts.
#[instrument(
    level = "info",
    skip_all,
    fields(end_date = %config.end_date, term = %config.term)
)]
pub fn process_rosters(config: &Config) -> Result<ParticipationSummary> {
    let roster = excel_read::load_rosters(&config.data_dir)?;
    let roster = normalize::normalize(roster, config)?;
    let summary = report::report_participation(&roster, config)?;
    report::report_additions(&roster, config)?;
    info!(output = %config.output_dir.display(), "all reports written");
    Ok(summary)
}
