//! ApiClient - Hosted Database REST Access
//!
//! Talks PostgREST-style REST to the hosted backend: `Range` headers for
//! pagination, `Prefer: count=exact` to get totals back in `Content-Range`,
//! and `{column}=eq.{value}` filters for mutations.

use reqwest::header::{HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::config::ApiConfig;
use crate::error::{Error, Result};

/// Client for the hosted database REST API
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from the configured base URL and API key
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&config.api_key).map_err(|_| Error::Invalid {
            message: "API key contains invalid header characters".to_string(),
        })?;
        let bearer =
            HeaderValue::from_str(&format!("Bearer {}", config.api_key)).map_err(|_| {
                Error::Invalid {
                    message: "API key contains invalid header characters".to_string(),
                }
            })?;
        headers.insert("apikey", key);
        headers.insert("Authorization", bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Fetch one page of rows plus the exact total row count.
    ///
    /// `page` is 1-based; `order` is a PostgREST order clause such as
    /// `created_at.desc`.
    pub async fn fetch_page<T: DeserializeOwned>(
        &self,
        table: &str,
        order: &str,
        page: usize,
        per_page: usize,
    ) -> Result<(Vec<T>, usize)> {
        let start = (page - 1) * per_page;
        let end = start + per_page - 1;

        let resp = self
            .http
            .get(self.table_url(table))
            .query(&[("select", "*"), ("order", order)])
            .header("Range-Unit", "items")
            .header("Range", format!("{start}-{end}"))
            .header("Prefer", "count=exact")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                message: resp.text().await.unwrap_or_default(),
            });
        }

        let total = resp
            .headers()
            .get("Content-Range")
            .and_then(|v| v.to_str().ok())
            .and_then(parse_content_range_total);

        let rows: Vec<T> = resp.json().await?;
        let total = total.unwrap_or(rows.len());
        Ok((rows, total))
    }

    /// Insert a row
    pub async fn insert<T: Serialize + Sync>(&self, table: &str, row: &T) -> Result<()> {
        let resp = self
            .http
            .post(self.table_url(table))
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                message: resp.text().await.unwrap_or_default(),
            });
        }
        Ok(())
    }

    /// Delete a row by id
    pub async fn delete(&self, table: &str, id: &str) -> Result<()> {
        let resp = self
            .http
            .delete(self.table_url(table))
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                message: resp.text().await.unwrap_or_default(),
            });
        }
        Ok(())
    }
}

/// Pull the total out of a `Content-Range` value like `0-24/193`.
///
/// Returns `None` for the unknown-total form (`0-24/*`) or malformed input
/// rather than erroring; callers fall back to the row count.
fn parse_content_range_total(value: &str) -> Option<usize> {
    value.rsplit('/').next()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn content_range_total_parses() {
        assert_eq!(parse_content_range_total("0-24/193"), Some(193));
        assert_eq!(parse_content_range_total("*/0"), Some(0));
        assert_eq!(parse_content_range_total("0-24/*"), None);
        assert_eq!(parse_content_range_total("garbage"), None);
    }
}
