//! Command-line and environment configuration for the server binary.

use std::net::SocketAddr;

use clap::Parser;

/// Default listen address.
pub const DEFAULT_BIND: &str = "127.0.0.1:7860";

/// Default cap on how many numbers one submission may contain.
pub const DEFAULT_MAX_NUMBERS: usize = 200;

/// Default tracing filter when neither `RUST_LOG` nor `--log-filter` is set.
pub const DEFAULT_LOG_FILTER: &str = "bubble_trace=debug";

/// Server configuration. Every flag can also be set through the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "bubble-trace")]
#[command(about = "Interactive step-by-step Bubble Sort visualizer", long_about = None)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "BUBBLE_TRACE_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Largest list a single request may sort
    #[arg(long, env = "BUBBLE_TRACE_MAX_NUMBERS", default_value_t = DEFAULT_MAX_NUMBERS)]
    pub max_numbers: usize,

    /// Tracing filter directive, e.g. "bubble_trace=info"
    #[arg(long, env = "BUBBLE_TRACE_LOG")]
    pub log_filter: Option<String>,
}

impl ServerConfig {
    /// Returns the filter to install, preferring `RUST_LOG`, then `--log-filter`.
    pub fn log_filter(&self) -> tracing_subscriber::EnvFilter {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            self.log_filter
                .as_deref()
                .unwrap_or(DEFAULT_LOG_FILTER)
                .into()
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: SocketAddr::from(([127, 0, 0, 1], 7860)),
            max_numbers: DEFAULT_MAX_NUMBERS,
            log_filter: None,
        }
    }
}
