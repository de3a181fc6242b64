// src/parser/remote.rs

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::parser::types::Sentence;
use crate::parser::{LanguageModel, ParserError};

/// Body shape of an external parser; only the sentences matter here
#[derive(Debug, Deserialize)]
struct RemoteParseResponse {
    #[serde(default)]
    sentence_list: Vec<Sentence>,
}

/// Client for an external parser that speaks the `/parse` JSON format
pub struct RemoteModel {
    client: Client,
    endpoint: Url,
}

impl RemoteModel {
    pub fn new(endpoint: &str, request_timeout: Duration) -> Result<Self, ParserError> {
        let endpoint = Url::parse(endpoint).map_err(|source| ParserError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            source,
        })?;

        // Create HTTP client with timeout
        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(ParserError::Client)?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// An HTML page instead of JSON means the remote parser fell over
fn is_distress_page(body: &str) -> bool {
    let start = body.trim_start();
    ["<!doctype", "<html"].iter().any(|prefix| {
        start
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

#[async_trait]
impl LanguageModel for RemoteModel {
    fn name(&self) -> &str {
        "remote"
    }

    async fn analyze(&self, text: &str) -> Result<Vec<Sentence>, ParserError> {
        let endpoint = self.endpoint.to_string();
        debug!("Posting {} bytes to parser at {}", text.len(), endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "text/plain")
            .body(text.to_string())
            .send()
            .await
            .map_err(|source| ParserError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| ParserError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;

        if is_distress_page(&body) {
            warn!("Parser at {} returned an HTML page ({})", endpoint, status);
            return Err(ParserError::Distress);
        }
        if !status.is_success() {
            return Err(ParserError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let parsed: RemoteParseResponse = serde_json::from_str(&body)?;
        Ok(parsed.sentence_list)
    }
}
