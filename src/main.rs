//! CLI entry point for the NextBus feed client.
//!
//! One subcommand per feed command; results are printed as JSON. The
//! `vehicles` subcommand can also poll and append snapshots to a CSV file.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use nextbus::output::{append_vehicle_records, print_json};
use nextbus::{
    ClientConfig, DEFAULT_BASE_URL, MultiStopOption, NextbusClient, RouteConfigOption,
    VehicleLocationOption,
};
use std::ffi::OsStr;
use std::path::Path;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "nextbus")]
#[command(about = "Query the NextBus public XML feed", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all agencies
    Agencies,
    /// List the routes of an agency
    Routes {
        agency: String,
    },
    /// Show stops, directions and paths of an agency's routes
    RouteConfig {
        agency: String,

        /// Restrict to a single route tag
        #[arg(short, long)]
        route: Option<String>,

        /// Leave out path geometry
        #[arg(long, default_value_t = false)]
        terse: bool,

        /// Include directions not meant for UIs
        #[arg(long, default_value_t = false)]
        verbose: bool,
    },
    /// Predictions for one route at one stop
    Predictions {
        agency: String,

        #[arg(short, long)]
        route: String,

        /// Stop tag within the route
        #[arg(short, long)]
        stop: String,
    },
    /// Predictions for every route serving a stop
    StopPredictions {
        agency: String,

        /// Route-independent stop id
        #[arg(value_name = "STOP_ID")]
        stop_id: String,
    },
    /// Predictions for several route/stop pairs at once
    MultiStop {
        agency: String,

        /// Route and stop tag joined by a pipe, e.g. "N|5205"
        #[arg(short, long = "stop", value_name = "ROUTE|STOP", required = true)]
        stops: Vec<String>,

        #[arg(long, default_value_t = false)]
        short_titles: bool,
    },
    /// Vehicle locations, optionally polled repeatedly
    Vehicles {
        agency: String,

        #[arg(short, long)]
        route: Option<String>,

        /// Only vehicles reporting after this epoch-milliseconds time
        #[arg(long)]
        since: Option<String>,

        /// CSV file to append each snapshot to instead of printing JSON
        #[arg(long)]
        csv: Option<String>,

        /// Number of snapshots to collect (0 = infinite)
        #[arg(short = 'n', long, default_value_t = 1)]
        samples: usize,

        /// Seconds between snapshots
        #[arg(short, long, default_value_t = 15)]
        interval: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("NEXTBUS_LOG_FILE").unwrap_or_else(|_| "logs/nextbus.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("nextbus.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let client = NextbusClient::from_config(&config_from_env()?)?;

    match cli.command {
        Commands::Agencies => print_json(&client.agency_list().await?)?,
        Commands::Routes { agency } => print_json(&client.route_list(&agency).await?)?,
        Commands::RouteConfig {
            agency,
            route,
            terse,
            verbose,
        } => {
            let mut options = Vec::new();
            if let Some(route) = route {
                options.push(RouteConfigOption::Route(route));
            }
            if terse {
                options.push(RouteConfigOption::Terse);
            }
            if verbose {
                options.push(RouteConfigOption::Verbose);
            }
            print_json(&client.route_config(&agency, &options).await?)?;
        }
        Commands::Predictions {
            agency,
            route,
            stop,
        } => print_json(&client.predictions(&agency, &route, &stop).await?)?,
        Commands::StopPredictions { agency, stop_id } => {
            print_json(&client.stop_predictions(&agency, &stop_id).await?)?
        }
        Commands::MultiStop {
            agency,
            stops,
            short_titles,
        } => {
            let mut options = stops
                .iter()
                .map(|pair| parse_stop_pair(pair))
                .collect::<Result<Vec<_>>>()?;
            if short_titles {
                options.push(MultiStopOption::ShortTitles);
            }
            print_json(&client.predictions_for_multi_stops(&agency, &options).await?)?;
        }
        Commands::Vehicles {
            agency,
            route,
            since,
            csv,
            samples,
            interval,
        } => {
            poll_vehicles(
                &client,
                &agency,
                route,
                since,
                csv.as_deref(),
                samples,
                interval,
            )
            .await?;
        }
    }

    Ok(())
}

/// Builds the client config from `NEXTBUS_*` environment variables.
fn config_from_env() -> Result<ClientConfig> {
    let mut config = ClientConfig::default().with_base_url(
        std::env::var("NEXTBUS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
    );
    if let Ok(secs) = std::env::var("NEXTBUS_TIMEOUT_SECS") {
        let secs = secs
            .parse()
            .with_context(|| format!("NEXTBUS_TIMEOUT_SECS is not a number: {secs:?}"))?;
        config = config.with_timeout(Duration::from_secs(secs));
    }
    if let Ok(secs) = std::env::var("NEXTBUS_CONNECT_TIMEOUT_SECS") {
        let secs = secs
            .parse()
            .with_context(|| format!("NEXTBUS_CONNECT_TIMEOUT_SECS is not a number: {secs:?}"))?;
        config = config.with_connect_timeout(Duration::from_secs(secs));
    }
    Ok(config)
}

fn parse_stop_pair(pair: &str) -> Result<MultiStopOption> {
    match pair.split_once('|') {
        Some((route, stop)) if !route.is_empty() && !stop.is_empty() => {
            Ok(MultiStopOption::stop(route, stop))
        }
        _ => bail!("expected ROUTE|STOP, got {pair:?}"),
    }
}

/// Collects vehicle snapshots, feeding each response's `lastTime` back as the
/// since-time of the next request.
#[tracing::instrument(skip(client, route, since, csv))]
async fn poll_vehicles(
    client: &NextbusClient,
    agency: &str,
    route: Option<String>,
    since: Option<String>,
    csv: Option<&str>,
    samples: usize,
    interval: u64,
) -> Result<()> {
    let mut since = since;
    let mut sample_count = 0;
    loop {
        if samples > 0 && sample_count >= samples {
            break;
        }
        sample_count += 1;

        let mut options = Vec::new();
        if let Some(route) = &route {
            options.push(VehicleLocationOption::route(route.as_str()));
        }
        if let Some(since) = &since {
            options.push(VehicleLocationOption::since_time(since.as_str()));
        }

        let snapshot = client.vehicle_locations(agency, &options).await?;
        info!(
            sample = sample_count,
            vehicles = snapshot.vehicles.len(),
            last_time = %snapshot.last_time.time,
            "Vehicle snapshot fetched"
        );

        match csv {
            Some(path) => append_vehicle_records(path, &snapshot)?,
            None => print_json(&snapshot)?,
        }

        if !snapshot.last_time.time.is_empty() {
            since = Some(snapshot.last_time.time);
        }

        if samples == 0 || sample_count < samples {
            tokio::time::sleep(Duration::from_secs(interval)).await;
        }
    }

    Ok(())
}
