// Data structures shared across the pipeline.

use serde::Serialize;

/// App metadata scraped from the store details page. Used for the console
/// summary and to derive the export filename; never persisted.
#[derive(Debug, Clone)]
pub struct AppDetails {
    pub title: String,
    pub developer: String,
    /// Aggregate rating, e.g. 4.3. Absent for apps with no ratings yet.
    pub score: Option<f64>,
    pub ratings: Option<u64>,
}

/// One normalized review row. Field order matches the CSV header
/// `username,rating,comment,date,developer_response`; missing source
/// fields are empty strings (or a zero rating), never omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewRecord {
    pub username: String,
    pub rating: i64,
    pub comment: String,
    pub date: String,
    pub developer_response: String,
}
