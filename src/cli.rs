use crate::http_client::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "metascout")]
#[command(about = "Score a page's SEO meta tags and suggest fixes", long_about = None)]
pub struct Cli {
    /// The URL of the page to analyze
    #[arg(value_name = "URL", required_unless_present = "serve")]
    pub url: Option<String>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub output: String,

    /// Save the JSON report to file
    #[arg(short, long)]
    pub save: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Timeout for fetching the page, in seconds (default: 30)
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// User agent sent when fetching the page
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Serve the analysis API on this address (e.g., 127.0.0.1:8080) instead of analyzing a URL
    #[arg(long, value_name = "ADDR")]
    pub serve: Option<String>,

    /// Path to configuration file (JSON, TOML, or YAML)
    #[arg(long)]
    pub config: Option<String>,
}
