//! One-shot catalog loading: fetch the document, verify the shape, normalize.
//!
//! The fetch happens exactly once per session. On any failure the collection
//! stays empty and the caller shows the load-failure placeholder; there is no
//! automatic retry.

use async_trait::async_trait;
use reqwest::Client;
use sha2::{Digest, Sha256};
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::catalog::{Catalog, RawGame};
use crate::config::Config;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("unexpected response status {0}")]
    Status(u16),
    #[error("cannot read {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog document: {0}")]
    Malformed(String),
}

/// Provenance for a successful load.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub source: String,
    pub records: usize,
    pub sha256_hex: String,
}

/// Where the document bytes come from. One implementation per transport.
#[async_trait]
pub trait CatalogSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError>;
    fn describe(&self) -> String;
}

pub struct HttpSource {
    url: String,
    client: Client,
}

impl HttpSource {
    pub fn new(url: String, timeout_secs: u64) -> Self {
        Self {
            url,
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(LoadError::Status(resp.status().as_u16()));
        }
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

pub struct FileSource {
    path: String,
}

impl FileSource {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        std::fs::read(&self.path).map_err(|source| LoadError::File {
            path: self.path.clone(),
            source,
        })
    }

    fn describe(&self) -> String {
        self.path.clone()
    }
}

/// Pick a source for the configured location: http(s) URLs go over the wire,
/// anything else is a filesystem path.
pub fn source_for(cfg: &Config) -> Box<dyn CatalogSource + Send + Sync> {
    match Url::parse(&cfg.catalog_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Box::new(HttpSource::new(
            cfg.catalog_url.clone(),
            cfg.http_timeout_secs,
        )),
        _ => Box::new(FileSource::new(cfg.catalog_url.clone())),
    }
}

/// Parse the document body: a top-level object whose `list_field` holds the
/// game list.
fn parse_document(bytes: &[u8], list_field: &str) -> Result<Vec<RawGame>, LoadError> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| LoadError::Malformed(e.to_string()))?;
    let list = value
        .get(list_field)
        .ok_or_else(|| LoadError::Malformed(format!("missing field \"{}\"", list_field)))?;
    serde_json::from_value(list.clone()).map_err(|e| LoadError::Malformed(e.to_string()))
}

/// Fetch once and normalize. Returns the immutable collection plus a
/// provenance report for logging.
pub async fn load(
    source: &(dyn CatalogSource + Send + Sync),
    list_field: &str,
) -> Result<(Catalog, LoadReport), LoadError> {
    let bytes = source.fetch().await?;
    let sha256_hex = hex::encode(Sha256::digest(&bytes));
    let raw = parse_document(&bytes, list_field)?;
    let catalog = Catalog::from_raw(raw);
    let report = LoadReport {
        source: source.describe(),
        records: catalog.len(),
        sha256_hex,
    };
    Ok((catalog, report))
}
