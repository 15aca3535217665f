pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod http_client;
pub mod models;
pub mod preview;
pub mod recommendations;
pub mod reporter;
pub mod score;
pub mod seo_analyzer;
pub mod server;
pub mod tags;

use anyhow::{Context, Result};
use cli::Cli;
use colored::*;
use error::AnalyzeError;
use extractor::TagExtractor;
use http_client::{build_http_client, fetch_html, validate_url};
use indicatif::{ProgressBar, ProgressStyle};
use models::SeoAnalysis;
use reporter::Reporter;
use seo_analyzer::SeoAnalyzer;
use std::time::Duration;

/// Fetches `url`, extracts its metadata and runs the full analysis
pub async fn analyze_url(client: &reqwest::Client, url: &str) -> Result<SeoAnalysis, AnalyzeError> {
    let parsed = validate_url(url)?;
    let html = fetch_html(client, &parsed).await?;
    let page = TagExtractor::extract(&html, url);
    Ok(SeoAnalyzer::analyze(page))
}

pub async fn run(args: Cli) -> Result<()> {
    let client = build_http_client(args.timeout, &args.user_agent)?;

    if let Some(addr) = &args.serve {
        println!(
            "{} {}",
            "MetaScout API listening on".bright_cyan().bold(),
            addr
        );
        return server::serve(addr, client).await;
    }

    let url = args
        .url
        .as_deref()
        .context("A URL is required unless --serve is given")?;

    // Validate URL before printing anything else
    validate_url(url)?;

    let text_output = args.output != "json";

    if text_output {
        println!(
            "{}",
            "MetaScout - SEO Meta Tag Analyzer".bright_cyan().bold()
        );
        println!("{}", "=".repeat(50).bright_blue());
        println!();
        println!("{} {}", "Analyzing:".bright_white().bold(), url);
    }

    let spinner = (text_output && !args.verbose).then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("[{elapsed_precise}] {spinner:.cyan} {msg}")
                .expect("Progress bar template should be valid"),
        );
        pb.set_message("Fetching page...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });

    if args.verbose {
        println!("{}", "Fetching page...".bright_yellow());
    }

    let result = analyze_url(&client, url).await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let analysis = result.with_context(|| format!("Failed to analyze {}", url))?;

    if args.verbose {
        println!(
            "{} {} meta tags, {} recommendations",
            "Analysis complete:".bright_green(),
            analysis.meta_tags.len(),
            analysis.recommendations.len()
        );
    }

    match args.output.as_str() {
        "json" => {
            println!("{}", Reporter::to_json(&analysis)?);
        }
        _ => {
            Reporter::print_text_report(&analysis);
        }
    }

    if let Some(filename) = &args.save {
        Reporter::save_json_report(&analysis, filename)?;
    }

    Ok(())
}
