use std::{net::SocketAddr, time::Duration};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use derive_getters::Getters;

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Debug, Parser)]
#[command(version, about = "Resolve tickers, WKNs, ISINs or names and serve normalized stock data")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[arg(long, env = "STOCKDATA_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8888)]
    pub port: u16,

    #[arg(
        long,
        env = "STOCKDATA_CHART_URL",
        default_value = "https://query1.finance.yahoo.com/v8/finance/chart"
    )]
    pub chart_url: String,

    #[arg(
        long,
        env = "STOCKDATA_SEARCH_URL",
        default_value = "https://query1.finance.yahoo.com/v1/finance/search"
    )]
    pub search_url: String,

    #[arg(long, env = "STOCKDATA_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Years of dividend history to aggregate, counted back from the current year.
    #[arg(long, env = "STOCKDATA_DIVIDEND_YEARS", default_value_t = 10)]
    pub dividend_years: i32,

    /// Exchange suffixes tried when a bare ticker is unknown to the provider.
    #[arg(
        long,
        env = "STOCKDATA_PROBE_SUFFIXES",
        value_delimiter = ',',
        default_value = ".DE,.F"
    )]
    pub probe_suffixes: Vec<String>,

    #[arg(long, env = "STOCKDATA_DEFAULT_CURRENCY", default_value = "EUR")]
    pub default_currency: String,

    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log: String,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP endpoint (default)
    Serve,
    /// Resolve and fetch a single identifier, printing the JSON payload
    Lookup { symbol: String },
}

#[derive(Clone, Debug, Getters)]
pub struct ProviderConfig {
    chart_url: String,
    search_url: String,
    timeout: Duration,
    user_agent: String,
}

#[derive(Clone, Debug, Getters)]
pub struct ServiceConfig {
    dividend_years: i32,
    probe_suffixes: Vec<String>,
    default_currency: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            dividend_years: 10,
            probe_suffixes: vec![String::from(".DE"), String::from(".F")],
            default_currency: String::from("EUR"),
        }
    }
}

impl ServiceConfig {
    pub fn new(dividend_years: i32, probe_suffixes: Vec<String>, default_currency: String) -> Self {
        Self {
            dividend_years,
            probe_suffixes,
            default_currency,
        }
    }
}

#[derive(Clone, Debug, Getters)]
pub struct Config {
    host: String,
    port: u16,
    provider: ProviderConfig,
    service: ServiceConfig,
    log_filter: String,
}

impl Config {
    pub fn from_args(args: &Args) -> Self {
        let probe_suffixes = args
            .probe_suffixes
            .iter()
            .map(|s| s.trim().to_uppercase())
            .filter(|s| !s.is_empty())
            .map(|s| if s.starts_with('.') { s } else { format!(".{}", s) })
            .collect();

        Self {
            host: args.host.clone(),
            port: args.port,
            provider: ProviderConfig {
                chart_url: args.chart_url.trim_end_matches('/').to_string(),
                search_url: args.search_url.trim_end_matches('/').to_string(),
                timeout: Duration::from_secs(args.timeout_secs.max(1)),
                user_agent: USER_AGENT.to_string(),
            },
            service: ServiceConfig::new(
                args.dividend_years.max(0),
                probe_suffixes,
                args.default_currency.to_uppercase(),
            ),
            log_filter: args.log.clone(),
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}
