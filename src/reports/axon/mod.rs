//! Axon (AppLovin) reporting API adapter

use crate::error::{AppError, Result};
use crate::reports::types::{shape_of, Column, ReportQuery, ReportRow};
use crate::reports::ReportSource;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

pub const BASE_URL: &str = "https://r.applovin.com/report";
pub const USER_AGENT: &str = "AxonReportFetcher/1.0";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Axon reporting API client
pub struct AxonReporter {
    client: Client,
    base_url: String,
}

impl AxonReporter {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Build the full report URL for a query
    pub fn build_url(&self, query: &ReportQuery) -> Result<Url> {
        let columns = Column::query_list();
        let params = [
            ("api_key", query.api_key.as_str()),
            ("start", query.start.as_str()),
            ("end", query.end.as_str()),
            ("columns", columns.as_str()),
            ("format", "json"),
            ("report_type", "advertiser"),
        ];

        Url::parse_with_params(&self.base_url, &params).map_err(|e| {
            AppError::Validation(format!("Invalid base URL {}: {}", self.base_url, e))
        })
    }

    /// Decode a response body into rows, checking envelopes in order:
    /// error object, results object, bare array.
    pub fn parse_envelope(body: &str) -> Result<Vec<ReportRow>> {
        let data: Value =
            serde_json::from_str(body).map_err(|e| AppError::MalformedResponse(e.to_string()))?;

        let entries = match data {
            Value::Object(mut obj) if obj.contains_key("error") => {
                let error = obj.remove("error").unwrap_or(Value::Null);
                return Err(AppError::Api(match error {
                    Value::String(s) => s,
                    other => other.to_string(),
                }));
            }
            Value::Object(mut obj) if obj.contains_key("results") => {
                match obj.remove("results").unwrap_or(Value::Null) {
                    Value::Array(entries) => entries,
                    Value::Null => Vec::new(),
                    other => {
                        return Err(AppError::UnexpectedFormat(format!(
                            "results is {}",
                            shape_of(&other)
                        )))
                    }
                }
            }
            Value::Array(entries) => entries,
            other => return Err(AppError::UnexpectedFormat(shape_of(&other).to_string())),
        };

        entries
            .into_iter()
            .map(|entry| match entry {
                Value::Object(fields) => Ok(ReportRow::new(fields)),
                other => Err(AppError::UnexpectedFormat(format!(
                    "report entry is {}",
                    shape_of(&other)
                ))),
            })
            .collect()
    }
}

/// URL with the API key masked, for logging
fn redacted(url: &Url) -> String {
    let mut masked = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "api_key" { "***".into() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}

fn transport_error(e: reqwest::Error) -> AppError {
    let reason = if e.is_timeout() {
        format!("request timed out after {}s", REQUEST_TIMEOUT.as_secs())
    } else {
        e.to_string()
    };

    AppError::Transport {
        status: e.status().map(|s| s.as_u16()),
        reason,
        body: None,
    }
}

#[async_trait]
impl ReportSource for AxonReporter {
    fn id(&self) -> &'static str {
        "axon"
    }

    fn name(&self) -> &'static str {
        "Axon (AppLovin)"
    }

    async fn fetch_report(&self, query: &ReportQuery) -> Result<Vec<ReportRow>> {
        let url = self.build_url(query)?;
        debug!("GET {}", redacted(&url));

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(AppError::Transport {
                status: Some(status.as_u16()),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                body: Some(body),
            });
        }

        debug!("Received {} bytes from {}", body.len(), self.name());
        Self::parse_envelope(&body)
    }
}
