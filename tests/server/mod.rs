use actix_web::{App, HttpResponse, HttpServer, web};

#[allow(dead_code)]
pub const COMPLETE_TITLE: &str = "MetaScout Fixture Page | Example Website";
#[allow(dead_code)]
pub const COMPLETE_DESCRIPTION: &str = "A complete fixture page used to check that every SEO meta tag is detected and scored correctly by the analyzer.";
#[allow(dead_code)]
pub const CANONICAL_URL: &str = "https://example.com/canonical-page";

/// Every tag the analyzer looks for, with good lengths
#[allow(dead_code)]
pub const COMPLETE_PAGE: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <meta charset="utf-8">
        <title>MetaScout Fixture Page | Example Website</title>
        <meta name="description" content="A complete fixture page used to check that every SEO meta tag is detected and scored correctly by the analyzer.">
        <meta name="viewport" content="width=device-width, initial-scale=1">
        <meta property="og:title" content="Fixture Page">
        <meta property="og:description" content="Open Graph description">
        <meta property="og:image" content="https://example.com/og.jpg">
        <meta property="og:image:width" content="1200">
        <meta property="og:image:height" content="630">
        <meta property="og:url" content="https://example.com/canonical-page">
        <meta property="og:type" content="website">
        <meta name="twitter:card" content="summary_large_image">
        <meta name="twitter:title" content="Twitter Fixture Title">
        <meta name="twitter:description" content="Twitter description">
        <meta name="twitter:image" content="https://example.com/twitter.jpg">
        <link rel="canonical" href="https://example.com/canonical-page">
    </head>
    <body><h1>Complete</h1></body>
</html>"#;

/// Short title and description, three Open Graph tags, one Twitter tag
#[allow(dead_code)]
pub const PARTIAL_PAGE: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <title>Short title</title>
        <meta name="description" content="Too short.">
        <meta property="og:title" content="Partial OG title">
        <meta property="og:description" content="Partial OG description">
        <meta property="og:image" content="https://example.com/partial.jpg">
        <meta name="twitter:card" content="summary">
        <meta name="robots" content="">
    </head>
    <body><h1>Partial</h1></body>
</html>"#;

#[allow(dead_code)]
pub const BARE_PAGE: &str = r#"<!DOCTYPE html>
<html>
    <head></head>
    <body><p>No metadata at all</p></body>
</html>"#;

#[allow(dead_code)]
/// Starts an in-process server hosting the fixture pages and returns its base URL
pub async fn get_test_server_url() -> String {
    let http_server = HttpServer::new(|| {
        App::new()
            .route(
                "/",
                web::get().to(|| async {
                    HttpResponse::Ok()
                        .content_type("text/html; charset=utf-8")
                        .body(COMPLETE_PAGE)
                }),
            )
            .route(
                "/partial",
                web::get().to(|| async {
                    HttpResponse::Ok()
                        .content_type("text/html; charset=utf-8")
                        .body(PARTIAL_PAGE)
                }),
            )
            .route(
                "/bare",
                web::get().to(|| async {
                    HttpResponse::Ok()
                        .content_type("text/html; charset=utf-8")
                        .body(BARE_PAGE)
                }),
            )
            .route(
                "/plain",
                web::get().to(|| async {
                    HttpResponse::Ok()
                        .content_type("text/plain")
                        .body("just text")
                }),
            )
            .route(
                "/not-found",
                web::get().to(|| async { HttpResponse::NotFound().body("Not Found") }),
            )
            .route(
                "/server-error",
                web::get().to(|| async { HttpResponse::InternalServerError().body("Error") }),
            )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("Failed to bind test server");

    let addr = http_server
        .addrs()
        .first()
        .cloned()
        .expect("No address bound");
    let url = format!("http://{}", addr);

    let app_server = http_server.run();

    tokio::spawn(async move {
        if let Err(e) = app_server.await {
            eprintln!("Test server error: {}", e);
        }
    });

    url
}
