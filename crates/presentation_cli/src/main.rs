//! Taxifare CLI
//!
//! Command-line front end for the NYC taxi fare prediction service.

#![allow(clippy::print_stdout)]

mod render;

use std::path::PathBuf;

use anyhow::Context;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Args, Parser, Subcommand};
use domain::{Coordinates, PassengerCount, PickupDatetime, RideRequest, RideRequestBuilder};
use infrastructure::{AppConfig, build_fare_service, init_logging};
use tracing::{debug, info};

use crate::render::JsonReport;

/// Taxifare CLI
#[derive(Parser)]
#[command(name = "taxifare-cli")]
#[command(author, version, about = "NYC taxi fare prediction CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (defaults to ./taxifare.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict the fare of a ride
    ///
    /// Date and time default to the current moment in the configured
    /// pickup timezone. Coordinates default to an Upper East Side to
    /// Midtown ride.
    ///
    /// Example: taxifare-cli predict --date 2024-05-17 --time 18:42 --passengers 1
    Predict(PredictArgs),

    /// Print the effective configuration as TOML
    Config,
}

#[derive(Args, Debug)]
struct PredictArgs {
    /// Pickup date (YYYY-MM-DD, years 0001-9999)
    #[arg(long, value_parser = parse_date_arg)]
    date: Option<NaiveDate>,

    /// Pickup time (HH:MM or HH:MM:SS)
    #[arg(long, value_parser = parse_time_arg)]
    time: Option<NaiveTime>,

    /// Pickup longitude
    #[arg(long, allow_negative_numbers = true, default_value_t = Coordinates::default_pickup().longitude())]
    pickup_longitude: f64,

    /// Pickup latitude
    #[arg(long, allow_negative_numbers = true, default_value_t = Coordinates::default_pickup().latitude())]
    pickup_latitude: f64,

    /// Dropoff longitude
    #[arg(long, allow_negative_numbers = true, default_value_t = Coordinates::default_dropoff().longitude())]
    dropoff_longitude: f64,

    /// Dropoff latitude
    #[arg(long, allow_negative_numbers = true, default_value_t = Coordinates::default_dropoff().latitude())]
    dropoff_latitude: f64,

    /// Number of passengers
    #[arg(short, long, allow_negative_numbers = true, default_value_t = PassengerCount::default().value())]
    passengers: i64,

    /// Prediction endpoint URL (overrides configuration)
    #[arg(long)]
    endpoint: Option<String>,

    /// Request timeout in seconds (overrides configuration)
    #[arg(long)]
    timeout: Option<u64>,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,
}

impl PredictArgs {
    /// Build the request, filling date and time from `now` when absent
    fn ride_request(&self, now: NaiveDateTime) -> RideRequest {
        let pickup = PickupDatetime::new(
            self.date.unwrap_or_else(|| now.date()),
            self.time.unwrap_or_else(|| now.time()),
        );

        RideRequestBuilder::at(pickup)
            .pickup(self.pickup_longitude, self.pickup_latitude)
            .dropoff(self.dropoff_longitude, self.dropoff_latitude)
            .passenger_count(self.passengers)
            .build()
    }

    /// Apply endpoint and timeout flags on top of loaded configuration
    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(endpoint) = &self.endpoint {
            config.fare_api.endpoint.clone_from(endpoint);
        }
        if let Some(timeout) = self.timeout {
            config.fare_api.timeout_secs = timeout;
        }
    }
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    domain::parse_date(s).map_err(|e| e.to_string())
}

fn parse_time_arg(s: &str) -> Result<NaiveTime, String> {
    domain::parse_time(s).map_err(|e| e.to_string())
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_from(cli.config.as_deref())
        .context("Failed to load configuration")?;

    if cli.verbose > 0 {
        config.logging = config
            .logging
            .with_filter(log_filter_from_verbosity(cli.verbose));
    }
    init_logging(&config.logging)?;

    match cli.command {
        Commands::Predict(args) => {
            args.apply_overrides(&mut config);
            let request = args.ride_request(config.pickup_timezone.now_naive());
            let service = build_fare_service(&config.fare_api)?;

            for tip in render::advisories(&request) {
                debug!(%tip, "Unusual ride input");
                if !args.json {
                    println!("⚠️  {tip}");
                }
            }

            if !args.json {
                println!("{}", render::route_summary(&request));
                if cli.verbose > 0 {
                    println!("{}", render::sent_params(&request));
                }
                println!();
            }

            info!(endpoint = %config.fare_api.endpoint, "Requesting fare prediction");
            let outcome = service.predict(&request).await;

            if args.json {
                println!("{}", JsonReport::new(&request, &outcome).to_json()?);
            } else {
                println!("{}", render::outcome_text(&outcome));
            }

            if outcome.is_failure() {
                std::process::exit(1);
            }
        },

        Commands::Config => {
            println!("{}", toml::to_string_pretty(&config)?);
        },
    }

    Ok(())
}
