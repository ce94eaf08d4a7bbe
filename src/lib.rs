//! Fetches Google Play app metadata and user reviews for one app/country
//! and exports the reviews to a timestamped CSV file.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod locale;
pub mod models;
pub mod normalize;
pub mod play_api;
