use crate::analyze_url;
use crate::error::AnalyzeError;
use actix_web::{App, HttpResponse, HttpServer, web};
use anyhow::{Context, Result};
use serde::Deserialize;

/// Shared across workers; reqwest clients pool connections internally
#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeQuery {
    pub url: Option<String>,
}

/// Registers the analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/analyze", web::get().to(analyze));
}

/// GET /api/analyze?url=<encoded-url>
async fn analyze(
    state: web::Data<AppState>,
    query: web::Query<AnalyzeQuery>,
) -> Result<HttpResponse, AnalyzeError> {
    let url = query
        .url
        .as_deref()
        .filter(|url| !url.is_empty())
        .ok_or(AnalyzeError::MissingUrl)?;

    tracing::info!(url = %url, "Analyzing page");

    let analysis = analyze_url(&state.client, url).await?;
    let body = serde_json::to_string(&analysis).map_err(|e| {
        tracing::error!(error = %e, "Failed to serialize analysis");
        AnalyzeError::Internal
    })?;

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}

/// Runs the analysis API until the process is stopped
pub async fn serve(addr: &str, client: reqwest::Client) -> Result<()> {
    let state = web::Data::new(AppState { client });

    let server = HttpServer::new(move || App::new().app_data(state.clone()).configure(configure))
        .bind(addr)
        .with_context(|| format!("Failed to bind {}", addr))?;

    for bound in server.addrs() {
        tracing::info!(addr = %bound, "Serving GET /api/analyze");
    }

    server.run().await.context("Server error")?;
    Ok(())
}
