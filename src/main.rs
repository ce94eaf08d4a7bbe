use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use playreviews::cli::Cli;
use playreviews::config::Settings;
use playreviews::models::ReviewRecord;
use playreviews::{export, input, locale, normalize, play_api};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging. User-facing progress goes to stdout via println;
    // tracing carries diagnostics, off by default unless RUST_LOG is set.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "playreviews=info".into()))
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();

    // Listing mode short-circuits the whole pipeline.
    if cli.list_countries {
        print!("{}", locale::format_country_table());
        return Ok(());
    }

    let settings = match Settings::new() {
        Ok(s) => {
            tracing::debug!(?s, "Configuration loaded");
            s
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };

    let args = cli.resolve_inputs(settings.default_count)?;
    let app_id = input::resolve_app_id(&args.app_input);
    let lang = locale::resolve_language(&args.country);
    let output_dir = cli.output.clone().unwrap_or_else(|| settings.output_dir.clone());

    let client = play_api::get_client(&settings)?;

    println!(
        "Fetching details for app ID: {} from country: {}",
        app_id, args.country
    );

    // App details are best-effort: on failure the app id stands in for the
    // name and the pipeline carries on.
    let app_name = match play_api::fetch_app_details(
        &client,
        &settings.base_url,
        &app_id,
        &args.country,
        lang,
    )
    .await
    {
        Ok(details) => {
            println!("App name: {}", details.title);
            println!("Developer: {}", details.developer);
            println!(
                "Rating: {} ({} ratings)",
                details
                    .score
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "N/A".to_string()),
                details.ratings.unwrap_or(0)
            );
            details.title
        }
        Err(e) => {
            tracing::warn!("App details fetch failed: {}", e);
            println!(
                "Could not fetch app details for {}. Using app ID as name.",
                app_id
            );
            app_id.clone()
        }
    };

    if args.count == 0 {
        println!(
            "Fetching all reviews for {} from country: {}",
            app_id, args.country
        );
        println!("This might take a while for a large number of reviews...");
    } else {
        println!(
            "Fetching up to {} reviews for {} from country: {}",
            args.count, app_id, args.country
        );
    }

    // Any catalog failure degrades to zero results; the run still exits
    // cleanly with only the printed message as a signal.
    let records: Vec<ReviewRecord> = match play_api::fetch_reviews(
        &client,
        &settings.base_url,
        &app_id,
        &args.country,
        lang,
        args.count,
    )
    .await
    {
        Ok(raw) => raw.iter().map(normalize::normalize).collect(),
        Err(e) => {
            println!("Error fetching reviews: {}", e);
            Vec::new()
        }
    };

    if records.is_empty() {
        println!("No reviews found or error occurred.");
        return Ok(());
    }
    println!("Successfully fetched {} reviews", records.len());

    match export::save_to_csv(&records, &app_name, Path::new(&output_dir)) {
        Ok(path) => println!("Reviews saved to {}", path.display()),
        Err(e) => println!("Error saving to CSV: {}", e),
    }

    Ok(())
}
