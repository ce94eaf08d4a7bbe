//! CLI definition and interactive fallbacks.

use std::io::{self, Write};

use clap::Parser;

use crate::locale;

/// Export Google Play app reviews to CSV
#[derive(Debug, Parser)]
#[command(name = "playreviews")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// App ID or Google Play Store URL
    #[arg(long)]
    pub app: Option<String>,

    /// Country code (e.g., us, gb, ca)
    #[arg(long)]
    pub country: Option<String>,

    /// Number of reviews to fetch (0 = all)
    #[arg(long)]
    pub count: Option<u32>,

    /// Output directory for the CSV file
    #[arg(long)]
    pub output: Option<String>,

    /// List available country codes and exit
    #[arg(long)]
    pub list_countries: bool,
}

/// Fully resolved inputs for one pipeline run, after prompting for anything
/// the flags left out.
#[derive(Debug)]
pub struct RunArgs {
    pub app_input: String,
    pub country: String,
    pub count: u32,
}

impl Cli {
    /// Fill in any missing inputs interactively, mirroring the flag
    /// semantics. `default_count` applies when --count is absent and the
    /// user picks the default menu option (or --app was given on the
    /// command line, which skips the menu entirely).
    pub fn resolve_inputs(&self, default_count: u32) -> io::Result<RunArgs> {
        let (app_input, interactive) = match &self.app {
            Some(app) => (app.clone(), false),
            None => (prompt("Enter Google Play Store app URL or app ID: ")?, true),
        };

        let country = match &self.country {
            Some(c) => c.trim().to_lowercase(),
            None => {
                print!("{}", locale::format_country_table());
                prompt("\nEnter country code (e.g., us, gb, ca): ")?.to_lowercase()
            }
        };

        let count = match self.count {
            Some(n) => n,
            None if interactive => prompt_count(default_count)?,
            None => default_count,
        };

        Ok(RunArgs {
            app_input,
            country,
            count,
        })
    }
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Menu-driven review count: default / custom / all.
fn prompt_count(default_count: u32) -> io::Result<u32> {
    println!("\nHow many reviews should be fetched?");
    println!("  1) Default ({default_count})");
    println!("  2) Custom amount");
    println!("  3) All reviews");

    loop {
        let choice = prompt("Choice [1-3]: ")?;
        match choice.as_str() {
            "" | "1" => return Ok(default_count),
            "2" => {
                let raw = prompt("Number of reviews: ")?;
                match raw.parse::<u32>() {
                    Ok(n) => return Ok(n),
                    Err(_) => println!("Please enter a non-negative whole number."),
                }
            }
            "3" => return Ok(0),
            _ => println!("Please choose 1, 2 or 3."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_bypass_all_prompts() {
        let cli = Cli::parse_from([
            "playreviews",
            "--app",
            "com.example.app",
            "--country",
            "US",
            "--count",
            "50",
        ]);
        let args = cli.resolve_inputs(100).unwrap();
        assert_eq!(args.app_input, "com.example.app");
        assert_eq!(args.country, "us");
        assert_eq!(args.count, 50);
    }

    #[test]
    fn count_defaults_when_app_flag_given() {
        let cli = Cli::parse_from(["playreviews", "--app", "com.example.app", "--country", "us"]);
        let args = cli.resolve_inputs(100).unwrap();
        assert_eq!(args.count, 100);
    }

    #[test]
    fn negative_count_is_rejected_at_parse_time() {
        let result = Cli::try_parse_from(["playreviews", "--count", "-5"]);
        assert!(result.is_err());
    }
}
