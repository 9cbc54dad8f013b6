use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Vehicle search server
#[derive(Parser, Debug, Clone)]
#[command(name = "vehicle-search")]
#[command(about = "Server-rendered vehicle search with a JSON API")]
pub struct Args {
    /// Listen address
    #[arg(long, default_value = "127.0.0.1:3000", env = "VEHICLE_SEARCH_BIND")]
    pub bind: SocketAddr,

    /// Results per page
    #[arg(
        long,
        default_value_t = DEFAULT_PAGE_SIZE,
        env = "VEHICLE_SEARCH_PAGE_SIZE",
        value_parser = parse_page_size
    )]
    pub page_size: usize,

    /// JSON file with an array of {id, title, price, description}; the demo fixture is used when absent
    #[arg(long, env = "VEHICLE_SEARCH_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Simulated catalog fetch latency in milliseconds
    #[arg(long, default_value_t = 0, env = "VEHICLE_SEARCH_LATENCY_MS")]
    pub latency_ms: u64,

    /// Maximum log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", env = "VEHICLE_SEARCH_LOG_LEVEL")]
    pub log_level: tracing::Level,
}

fn parse_page_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("page size must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
