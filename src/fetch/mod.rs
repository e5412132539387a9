//! Loading the raw bytes of an input file from disk or over HTTP(S).

mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use anyhow::{Context, Result, bail};
use std::path::Path;
use tracing::debug;

/// Issues a GET for `url` and returns the body. Non-success statuses are errors.
pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>> {
    let req = reqwest::Request::new(reqwest::Method::GET, url.parse()?);

    let resp = client.execute(req).await?;
    let status = resp.status();
    if !status.is_success() {
        bail!("GET {url} failed with status {status}");
    }
    Ok(resp.bytes().await?.to_vec())
}

pub fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// File name used for the extension gate: the last path segment of a URL or
/// the file name of a local path.
pub fn source_file_name(source: &str) -> String {
    if is_url(source) {
        if let Ok(url) = reqwest::Url::parse(source) {
            if let Some(last) = url.path_segments().and_then(|mut s| s.next_back()) {
                return last.to_string();
            }
        }
        return String::new();
    }

    Path::new(source)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(source)
        .to_string()
}

/// Reads `source` from a local path, or fetches it when it is a URL.
#[tracing::instrument(skip(client))]
pub async fn load_source<C: HttpClient>(client: &C, source: &str) -> Result<Vec<u8>> {
    let bytes = if is_url(source) {
        fetch_bytes(client, source).await?
    } else {
        std::fs::read(source).with_context(|| format!("failed to read '{source}'"))?
    };
    debug!(bytes = bytes.len(), "Loaded source");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.com/comments.csv"));
        assert!(is_url("http://example.com/comments.csv"));
        assert!(!is_url("comments.csv"));
        assert!(!is_url("/tmp/http.csv"));
    }

    #[test]
    fn test_source_file_name() {
        assert_eq!(source_file_name("data/comments.csv"), "comments.csv");
        assert_eq!(
            source_file_name("https://example.com/exports/reviews.CSV?token=1"),
            "reviews.CSV"
        );
        assert_eq!(source_file_name("https://example.com/"), "");
    }

    #[tokio::test]
    async fn test_load_missing_local_file_fails() {
        let client = BasicClient::new();
        let result = load_source(&client, "/nonexistent/comments.csv").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_load_local_file() {
        let path = format!(
            "{}/comment_sentiment_fetch_test.csv",
            std::env::temp_dir().display()
        );
        std::fs::write(&path, "text\ngood\n").unwrap();

        let client = BasicClient::new();
        let bytes = load_source(&client, &path).await.unwrap();
        assert_eq!(bytes, b"text\ngood\n");

        std::fs::remove_file(&path).unwrap();
    }
}
