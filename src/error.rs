// Error types for the two failure domains the pipeline distinguishes:
// catalog calls and CSV export. Both are caught at the orchestration layer
// and degrade to "no results" / "no file" rather than aborting the run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("catalog request failed: {0}")]
    Catalog(#[from] reqwest::Error),

    #[error("unexpected catalog response: {0}")]
    Response(String),

    #[error("failed to write CSV export: {0}")]
    Export(#[from] std::io::Error),

    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),
}

pub type ScrapeResult<T> = Result<T, ScrapeError>;
