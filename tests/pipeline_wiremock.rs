//! End-to-end neutralisation against a local mock server.

use clap::Parser;
use neutralise_link::{
    run_batch, Cli, FailureKind, MaliceReason, Neutraliser, Outcome, ResolverConfig,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn local_neutraliser() -> Neutraliser {
    Neutraliser::new(ResolverConfig {
        allow_private_hosts: true,
        ..Default::default()
    })
    .expect("neutraliser should build")
}

#[tokio::test]
async fn test_malicious_url_never_reaches_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let neutraliser = local_neutraliser();
    assert_eq!(
        neutraliser
            .process(&format!("{}/?backfill=x", server.uri()))
            .await,
        Outcome::Malicious(MaliceReason::ForbiddenParameter)
    );
    assert_eq!(
        neutraliser
            .process(&format!("{}/page?q=<script>alert(1)</script>", server.uri()))
            .await,
        Outcome::Malicious(MaliceReason::ScriptInjection)
    );
    assert_eq!(
        neutraliser
            .neutralise(&format!("{}/../../etc/passwd", server.uri()))
            .await,
        None
    );
}

#[tokio::test]
async fn test_tracking_parameters_are_gone_before_the_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/article"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let input = format!(
        "{}/article/?utm_source=newsletter&id=7&fbclid=abc&ref=home",
        server.uri()
    );
    let outcome = local_neutraliser().process(&input).await;
    assert_eq!(
        outcome,
        Outcome::Neutralised(format!("{}/article?id=7", server.uri()))
    );

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("id=7"));
}

#[tokio::test]
async fn test_short_link_resolves_to_destination() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/s/abc"))
        .respond_with(ResponseTemplate::new(301).insert_header("Location", "/landing"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/landing"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let url = local_neutraliser()
        .neutralise(&format!("{}/s/abc?gclid=123", server.uri()))
        .await;
    assert_eq!(url, Some(format!("{}/landing", server.uri())));
}

#[tokio::test]
async fn test_unreachable_url_is_reported_separately() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let outcome = local_neutraliser()
        .process(&format!("http://127.0.0.1:{}/", port))
        .await;
    assert_eq!(outcome, Outcome::Unreachable(FailureKind::Connect));
}

#[tokio::test]
async fn test_default_neutraliser_refuses_local_targets() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let neutraliser = Neutraliser::new(ResolverConfig::default()).unwrap();
    assert_eq!(
        neutraliser.process(&server.uri()).await,
        Outcome::Unreachable(FailureKind::UnsafeTarget)
    );
    assert_eq!(neutralise_link::neutralise(&server.uri()).await, None);
}

#[tokio::test]
async fn test_run_batch_online() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let good = format!("{}/ok?utm_campaign=spring", server.uri());
    let bad = format!("{}/?backfill=1", server.uri());
    let cli = Cli::parse_from([
        "neutralise_link",
        "--allow-private-hosts",
        "--max-concurrency",
        "2",
        "--output",
        "json",
        &good,
        &bad,
    ]);

    let report = run_batch(&cli).await.unwrap();
    assert_eq!(report.total, 2);
    assert_eq!(report.neutralised, 1);
    assert_eq!(report.malicious, 1);
    assert_eq!(report.exit_code(), 2);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/ok");
}
