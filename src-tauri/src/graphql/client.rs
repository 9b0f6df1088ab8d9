//! GraphQL Client
//!
//! Minimal POST-based client for the admin API. Understands the standard
//! `{ data, errors }` response envelope.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::BoardConfig;

/// Header carrying the channel token expected by the admin API
const CHANNEL_TOKEN_HEADER: &str = "vendure-token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Connection, timeout or body read failure
    Transport(String),
    /// Non-success HTTP status without a GraphQL error body
    Status(u16),
    /// The server answered with an `errors` array
    GraphQl(Vec<String>),
    /// `data` was missing or null
    EmptyResponse,
    Decode(String),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Transport(msg) => write!(f, "request failed: {}", msg),
            ClientError::Status(code) => write!(f, "server responded with HTTP {}", code),
            ClientError::GraphQl(messages) => write!(f, "{}", messages.join("; ")),
            ClientError::EmptyResponse => write!(f, "No response from API"),
            ClientError::Decode(msg) => write!(f, "unexpected response shape: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

#[derive(Serialize)]
struct GraphQlRequest<'a, V> {
    query: &'a str,
    variables: V,
}

#[derive(Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<serde_json::Value>,
    errors: Option<Vec<GraphQlErrorEntry>>,
}

impl GraphQlResponse {
    fn error_messages(&mut self) -> Option<Vec<String>> {
        match self.errors.take() {
            Some(errors) if !errors.is_empty() => {
                Some(errors.into_iter().map(|e| e.message).collect())
            }
            _ => None,
        }
    }
}

/// Decode a response body into `T`, surfacing GraphQL errors first
pub fn parse_response<T: DeserializeOwned>(body: &str) -> Result<T, ClientError> {
    let mut envelope: GraphQlResponse =
        serde_json::from_str(body).map_err(|e| ClientError::Decode(e.to_string()))?;

    if let Some(messages) = envelope.error_messages() {
        return Err(ClientError::GraphQl(messages));
    }

    match envelope.data {
        None | Some(serde_json::Value::Null) => Err(ClientError::EmptyResponse),
        Some(data) => serde_json::from_value(data).map_err(|e| ClientError::Decode(e.to_string())),
    }
}

pub struct GraphQlClient {
    http: reqwest::Client,
    endpoint: String,
    auth_token: Option<String>,
    channel_token: Option<String>,
}

impl GraphQlClient {
    pub fn new(config: &BoardConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.api_url.clone(),
            auth_token: config.auth_token.clone(),
            channel_token: config.channel_token.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run one operation and decode its `data`
    pub async fn execute<V, T>(&self, document: &str, variables: V) -> Result<T, ClientError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let mut request = self
            .http
            .post(&self.endpoint)
            .json(&GraphQlRequest { query: document, variables });

        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }
        if let Some(channel) = &self.channel_token {
            request = request.header(CHANNEL_TOKEN_HEADER, channel);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if !status.is_success() {
            // Servers often pair 4xx with a regular error envelope
            return match parse_response::<serde_json::Value>(&body) {
                Err(ClientError::GraphQl(messages)) => Err(ClientError::GraphQl(messages)),
                _ => Err(ClientError::Status(status.as_u16())),
            };
        }

        parse_response(&body)
    }
}
