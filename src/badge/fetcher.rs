//! Badge image downloads from a shields.io-style endpoint

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

use super::Badge;

/// Default static badge endpoint
pub const DEFAULT_ENDPOINT: &str = "https://img.shields.io/badge";

/// Port for retrieving badge images
pub trait BadgeClient {
    /// GET `url` and return the response body; non-success statuses are errors.
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Blocking HTTP implementation backed by reqwest
pub struct HttpBadgeClient {
    client: reqwest::blocking::Client,
}

impl HttpBadgeClient {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("covbadge/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl BadgeClient for HttpBadgeClient {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send()?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().unwrap_or_default();
            anyhow::bail!("Badge request failed: {} - {}", status, text);
        }

        Ok(response.bytes()?.to_vec())
    }
}

/// Escape a caption for the static badge path.
///
/// Dashes and underscores are doubled so shields.io reads them literally,
/// then the whole caption is percent-encoded as one path segment.
fn escape_caption(caption: &str) -> String {
    let doubled = caption.replace('-', "--").replace('_', "__");
    urlencoding::encode(&doubled).into_owned()
}

/// Build `{endpoint}/{caption}-{label}-{color}`
pub fn badge_url(endpoint: &str, caption: &str, badge: &Badge) -> String {
    format!(
        "{}/{}-{}-{}",
        endpoint.trim_end_matches('/'),
        escape_caption(caption),
        badge.label,
        badge.color
    )
}

/// Download one badge and write it to `target`, replacing any existing file
pub fn download_badge(
    client: &dyn BadgeClient,
    endpoint: &str,
    caption: &str,
    badge: &Badge,
    target: &Path,
) -> Result<()> {
    let url = badge_url(endpoint, caption, badge);
    let image = client
        .fetch(&url)
        .with_context(|| format!("Failed to fetch badge from {}", url))?;

    fs::write(target, image)
        .with_context(|| format!("Failed to write badge to {}", target.display()))?;

    println!(
        "  {} {} {}",
        "↓".cyan(),
        caption.bold(),
        target.display().to_string().dimmed()
    );

    Ok(())
}
