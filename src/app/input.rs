//! Reading URL lists from files or stdin.

use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Reads URLs from `path`, one per line. A path of `-` reads stdin.
///
/// Blank lines and lines starting with `#` are skipped; surrounding
/// whitespace is trimmed.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or reading it fails.
/// Lines that are not valid UTF-8 are skipped with a warning.
pub async fn read_urls(path: &Path) -> Result<Vec<String>> {
    let urls = if path.as_os_str() == "-" {
        info!("Reading URLs from stdin");
        collect_urls(BufReader::new(tokio::io::stdin()))
            .await
            .context("Failed to read URLs from stdin")?
    } else {
        let file = tokio::fs::File::open(path)
            .await
            .with_context(|| format!("Failed to open input file {}", path.display()))?;
        collect_urls(BufReader::new(file))
            .await
            .with_context(|| format!("Failed to read input file {}", path.display()))?
    };
    info!("Read {} URL(s) from {}", urls.len(), path.display());
    Ok(urls)
}

async fn collect_urls<R: AsyncBufRead + Unpin>(reader: R) -> std::io::Result<Vec<String>> {
    let mut lines = reader.lines();
    let mut urls = Vec::new();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                warn!("Skipping input line that is not valid UTF-8: {e}");
                continue;
            }
            Err(e) => return Err(e),
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        urls.push(trimmed.to_string());
    }
    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_read_urls_skips_blank_and_comment_lines() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# tracked links").unwrap();
        writeln!(file, "https://example.com/?utm_source=x").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "   example.org  ").unwrap();
        writeln!(file, "  # indented comment").unwrap();

        let urls = read_urls(file.path()).await.unwrap();
        assert_eq!(
            urls,
            vec![
                "https://example.com/?utm_source=x".to_string(),
                "example.org".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_read_urls_empty_file() {
        let file = NamedTempFile::new().unwrap();
        assert!(read_urls(file.path()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_read_urls_missing_file() {
        let err = read_urls(Path::new("/definitely/not/here.txt"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to open input file"));
    }

    #[tokio::test]
    async fn test_collect_urls_from_memory() {
        let input: &[u8] = b"a.com\r\n\r\nb.com\n#c.com";
        let urls = collect_urls(input).await.unwrap();
        assert_eq!(urls, vec!["a.com".to_string(), "b.com".to_string()]);
    }

    #[tokio::test]
    async fn test_read_urls_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = tokio::time::timeout(
            std::time::Duration::from_secs(5),
            read_urls(dir.path()),
        )
        .await
        .expect("reading a directory should not hang");
        assert!(result.is_err());
    }
}
