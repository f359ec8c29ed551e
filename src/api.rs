// Catalog client module: a small blocking HTTP client for the Google Books
// "volumes" endpoint, plus the `Catalog` trait the rest of the crate talks to
// so the search workflow can run against a fake catalog in tests.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::book::BookRecord;
use crate::config::Config;

/// Anything that can answer a book search. Results are returned in the
/// order the catalog ranks them and are displayed in that order.
pub trait Catalog {
    fn search(&self, filters: &SearchFilters, max_results: u32) -> Result<Vec<BookRecord>>;
}

/// Optional title/author/publisher filters for a search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub title: Option<String>,
    pub author: Option<String>,
    pub publisher: Option<String>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.publisher.is_none()
    }

    /// Build the `q` parameter: one `field:value` clause per present filter,
    /// joined with `+`. Returns `None` when no filter is set.
    pub fn query_string(&self) -> Option<String> {
        let clauses: Vec<String> = [
            ("intitle", &self.title),
            ("inauthor", &self.author),
            ("inpublisher", &self.publisher),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_ref().map(|v| format!("{field}:{v}")))
        .collect();

        if clauses.is_empty() {
            None
        } else {
            Some(clauses.join("+"))
        }
    }
}

/// Shape of the volumes list response. `items` is omitted by the API when
/// nothing matches.
#[derive(Debug, Deserialize)]
pub struct VolumesResponse {
    #[serde(default)]
    pub items: Vec<BookRecord>,
}

/// Google Books client holding a reqwest blocking client, the API base URL
/// and the developer key sent with every request.
#[derive(Clone)]
pub struct GoogleBooksClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GoogleBooksClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("lightbrarian/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(GoogleBooksClient {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_token.clone(),
        })
    }
}

impl Catalog for GoogleBooksClient {
    fn search(&self, filters: &SearchFilters, max_results: u32) -> Result<Vec<BookRecord>> {
        if filters.is_empty() {
            anyhow::bail!("at least one of title, author or publisher is required to search");
        }
        let query = filters.query_string().unwrap_or_default();
        let url = format!("{}/volumes", self.base_url);
        log::debug!("GET {url} q={query} maxResults={max_results}");

        let res = self
            .client
            .get(&url)
            .query(&[("q", query.as_str())])
            .query(&[("maxResults", max_results)])
            .query(&[("key", self.api_key.as_str())])
            .send()
            .context("Failed to send search request")?;
        if !res.status().is_success() {
            let status = res.status();
            let txt = res.text().unwrap_or_default();
            anyhow::bail!("Search failed: {} - {}", status, txt);
        }
        let body: VolumesResponse = res.json().context("Parsing search response json")?;
        log::debug!("catalog returned {} item(s)", body.items.len());
        Ok(body.items)
    }
}
