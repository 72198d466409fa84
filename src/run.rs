//! Batch neutralisation for the command-line interface.

use std::time::Instant;

use anyhow::{bail, Context, Result};
use futures::stream::{self, StreamExt};
use log::info;

use crate::app::{print_run_statistics, read_urls, render};
use crate::config::{Cli, ResolverConfig};
use crate::error_handling::RunStats;
use crate::pipeline::{Neutraliser, Outcome};

/// Summary of a batch run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Number of URLs processed
    pub total: usize,
    /// URLs that came out neutralised
    pub neutralised: usize,
    /// URLs rejected by the classifier
    pub malicious: usize,
    /// URLs that could not be resolved
    pub unreachable: usize,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

impl RunReport {
    /// 0 when every URL was neutralised, 2 when any was rejected.
    pub fn exit_code(&self) -> i32 {
        if self.malicious + self.unreachable > 0 {
            2
        } else {
            0
        }
    }
}

/// Neutralises every URL named on the command line or in `--file`.
///
/// Results are printed to stdout as they complete, in the requested format.
/// Online runs process up to `max_concurrency` URLs at once over one shared
/// HTTP client.
///
/// # Errors
///
/// Returns an error if the input file cannot be read, no URL was given, or
/// the HTTP client cannot be built.
pub async fn run_batch(cli: &Cli) -> Result<RunReport> {
    let mut urls = cli.urls.clone();
    if let Some(path) = &cli.file {
        urls.extend(read_urls(path).await?);
    }
    if urls.is_empty() {
        bail!("No URLs given; pass them as arguments or with --file");
    }

    let start_time = Instant::now();
    let stats = RunStats::new();

    if cli.offline {
        info!("Offline mode: cleaning and screening {} URL(s)", urls.len());
        for url in &urls {
            let outcome = Neutraliser::process_offline(url);
            record(&stats, &outcome);
            println!("{}", render(url, &outcome, cli.output));
        }
    } else {
        let neutraliser = Neutraliser::new(ResolverConfig::from(cli))
            .context("Failed to initialize HTTP client")?;
        let neutraliser = &neutraliser;

        let mut results = stream::iter(urls.iter())
            .map(|url| async move { (url, neutraliser.process(url).await) })
            .buffer_unordered(cli.max_concurrency.max(1));

        while let Some((url, outcome)) = results.next().await {
            record(&stats, &outcome);
            println!("{}", render(url, &outcome, cli.output));
        }
    }

    let elapsed_seconds = start_time.elapsed().as_secs_f64();
    print_run_statistics(&stats, elapsed_seconds);

    Ok(RunReport {
        total: stats.total(),
        neutralised: stats.neutralised(),
        malicious: stats.total_malicious(),
        unreachable: stats.total_unreachable(),
        elapsed_seconds,
    })
}

fn record(stats: &RunStats, outcome: &Outcome) {
    match outcome {
        Outcome::Neutralised(_) => stats.increment_neutralised(),
        Outcome::Malicious(reason) => stats.increment_malicious(*reason),
        Outcome::Unreachable(kind) => stats.increment_unreachable(*kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn report(malicious: usize, unreachable: usize) -> RunReport {
        RunReport {
            total: 3,
            neutralised: 3 - malicious - unreachable,
            malicious,
            unreachable,
            elapsed_seconds: 0.1,
        }
    }

    #[test]
    fn test_exit_code() {
        assert_eq!(report(0, 0).exit_code(), 0);
        assert_eq!(report(1, 0).exit_code(), 2);
        assert_eq!(report(0, 1).exit_code(), 2);
    }

    #[tokio::test]
    async fn test_run_batch_offline_from_args_and_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# comment").unwrap();
        writeln!(file, "https://example.com/?backfill=1").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let cli = Cli::parse_from([
            "neutralise_link",
            "--offline",
            "-f",
            &path,
            "www.example.com/?utm_source=x",
        ]);

        let report = run_batch(&cli).await.unwrap();
        assert_eq!(report.total, 2);
        assert_eq!(report.neutralised, 1);
        assert_eq!(report.malicious, 1);
        assert_eq!(report.unreachable, 0);
        assert_eq!(report.exit_code(), 2);
    }

    #[tokio::test]
    async fn test_run_batch_without_urls_fails() {
        let cli = Cli::parse_from(["neutralise_link", "--offline"]);
        let err = run_batch(&cli).await.unwrap_err();
        assert!(err.to_string().contains("No URLs given"));
    }

    #[tokio::test]
    async fn test_run_batch_missing_file_fails() {
        let cli = Cli::parse_from(["neutralise_link", "-f", "/no/such/list.txt"]);
        assert!(run_batch(&cli).await.is_err());
    }
}
