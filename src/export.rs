// Writes normalized reviews to a timestamped CSV file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ScrapeResult;
use crate::models::ReviewRecord;

/// Make an app name safe for use as a filename stem: every character that
/// is not alphanumeric or a space becomes an underscore, then spaces become
/// underscores too.
pub fn sanitize_app_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() || c == ' ' { c } else { '_' })
        .collect::<String>()
        .replace(' ', "_")
}

/// Write `records` as CSV under `output_dir`, creating the directory if
/// needed, and return the path of the file written.
///
/// Two exports of the same app within the same second produce the same
/// filename and the later one wins; accepted for a single-user tool.
pub fn save_to_csv(
    records: &[ReviewRecord],
    app_name: &str,
    output_dir: &Path,
) -> ScrapeResult<PathBuf> {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let filename = format!("{}_{}.csv", sanitize_app_name(app_name), timestamp);

    fs::create_dir_all(output_dir)?;
    let filepath = output_dir.join(filename);

    // Headers come from the ReviewRecord field names:
    // username,rating,comment,date,developer_response
    let mut writer = csv::Writer::from_path(&filepath)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    tracing::debug!(path = %filepath.display(), rows = records.len(), "CSV export written");
    Ok(filepath)
}
