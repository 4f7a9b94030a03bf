use std::sync::Arc;

use fincast_clock::{Clock, FixedClock};
use fincast_service::{AnalyticsConfig, AnalyticsService, ServiceError};

fn print_help() {
    eprintln!(
        r#"fincast - budget forecasting, anomaly detection and risk scoring

USAGE:
    fincast [OPTIONS] <REQUEST>

ARGS:
    <REQUEST>           Path to a JSON request, or - to read stdin

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --now <RFC3339>     Evaluate as of this instant instead of the wall clock
    --help              Print this help message

ENVIRONMENT VARIABLES:
    ANOMALY_DETECTION_SENSITIVITY   Anomaly z-score threshold (default: 2.0)
    RUST_LOG                        Log level filter

EXAMPLES:
    # Forecast from a request file
    fincast forecast.json

    # Reproducible risk score as of a fixed date
    fincast --now 2024-06-30T00:00:00Z risk.json
"#
    );
}

/// File (if any) plus environment overrides
fn load_config(path: Option<&str>) -> Result<AnalyticsConfig, ServiceError> {
    let config = match path {
        Some(path) => {
            log::info!("Loading configuration from: {}", path);
            AnalyticsConfig::from_file(path)?
        }
        None => AnalyticsConfig::default(),
    };

    Ok(config.with_process_env()?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;
    let mut now: Option<String> = None;
    let mut request_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            "--now" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --now requires an RFC 3339 timestamp");
                    std::process::exit(1);
                }
                now = Some(args[i].clone());
            }
            arg if request_path.is_none() && (arg == "-" || !arg.starts_with('-')) => {
                request_path = Some(arg.to_string());
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let Some(request_path) = request_path else {
        eprintln!("Error: missing request argument");
        print_help();
        std::process::exit(1);
    };

    let config = match load_config(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Configuration rejected: {}", e);
            println!("{}", serde_json::to_string_pretty(&e.to_response())?);
            std::process::exit(1);
        }
    };

    let request = if request_path == "-" {
        std::io::read_to_string(std::io::stdin())?
    } else {
        std::fs::read_to_string(&request_path)?
    };

    let service = match now {
        Some(at) => {
            let clock = FixedClock::parse(&at)?;
            log::info!("Evaluating as of {}", clock.now());
            AnalyticsService::new(config, Arc::new(clock))
        }
        None => AnalyticsService::with_system_clock(config),
    };
    let response = service.respond(&request);
    println!("{}", serde_json::to_string_pretty(&response)?);

    if !response.is_ok() {
        std::process::exit(1);
    }

    Ok(())
}
