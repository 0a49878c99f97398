// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP API for the faucet service
//!
//! | route | handler |
//! |---|---|
//! | `GET /balance/{address}` | [`FaucetBackend::balance`] |
//! | `POST /faucet` | [`FaucetBackend::request_faucet`] |
//! | `GET /events/faucet` | [`FaucetBackend::recent_activity`] |
//!
//! Handlers only parse input and map errors; the work happens behind the
//! [`FaucetBackend`] trait so routes can be exercised without a chain.

use std::sync::Arc;

use alloy_primitives::Address;
use alloy_provider::Provider;
use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use crate::activity::{ActivityFeed, ActivityPage, ActivityQuery};
use crate::errors::{ActivityError, TokenError};
use crate::token::{FaucetReceipt, FaucetToken, TokenBalance};

/// Operations the HTTP routes delegate to
#[async_trait]
pub trait FaucetBackend: Send + Sync {
    async fn balance(&self, owner: Address) -> Result<TokenBalance, TokenError>;

    /// Dispense the configured faucet amount to `recipient`
    async fn request_faucet(&self, recipient: Address) -> Result<FaucetReceipt, TokenError>;

    async fn recent_activity(&self, query: ActivityQuery) -> Result<ActivityPage, ActivityError>;
}

#[async_trait]
impl<P: Provider> FaucetBackend for ActivityFeed<FaucetToken<P>> {
    async fn balance(&self, owner: Address) -> Result<TokenBalance, TokenError> {
        self.client().balance(owner).await
    }

    async fn request_faucet(&self, recipient: Address) -> Result<FaucetReceipt, TokenError> {
        self.client()
            .request_faucet(recipient, &self.config().faucet_amount)
            .await
    }

    async fn recent_activity(&self, query: ActivityQuery) -> Result<ActivityPage, ActivityError> {
        ActivityFeed::recent_activity(self, query).await
    }
}

/// Shared handler state
pub type SharedBackend = Arc<dyn FaucetBackend>;

/// JSON error body: `{ "error": ..., "message": ... }`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Errors a handler can answer with
#[derive(Debug)]
pub enum ApiError {
    /// Malformed client input (400)
    BadRequest(&'static str),
    /// Chain or contract failure (500)
    Internal {
        error: &'static str,
        message: String,
    },
}

impl ApiError {
    fn internal(error: &'static str, source: impl std::fmt::Display) -> Self {
        ApiError::Internal {
            error,
            message: source.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(error) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error,
                    message: None,
                },
            ),
            ApiError::Internal { error, message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error,
                    message: Some(message),
                },
            ),
        };
        (status, Json(body)).into_response()
    }
}

/// Parse a hex address the way wallets accept it
///
/// All-lowercase and all-uppercase hex is accepted as is; mixed case must be
/// a valid EIP-55 checksum.
pub fn parse_address(input: &str) -> Option<Address> {
    let address = input.parse::<Address>().ok()?;

    let digits = input.strip_prefix("0x").unwrap_or(input);
    let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper && address.to_checksum(None).trim_start_matches("0x") != digits {
        return None;
    }

    Some(address)
}

async fn get_balance(
    State(backend): State<SharedBackend>,
    Path(address): Path<String>,
) -> Result<Json<TokenBalance>, ApiError> {
    let owner =
        parse_address(&address).ok_or(ApiError::BadRequest("Invalid address format"))?;

    match backend.balance(owner).await {
        Ok(balance) => Ok(Json(balance)),
        Err(e) => {
            error!(owner = %owner, error = ?e, "Error fetching balance");
            Err(ApiError::internal("Failed to fetch balance", e))
        }
    }
}

/// Body of `POST /faucet`
#[derive(Debug, Default, Deserialize)]
pub struct FaucetRequest {
    pub address: Option<String>,
}

async fn request_faucet(
    State(backend): State<SharedBackend>,
    body: Result<Json<FaucetRequest>, JsonRejection>,
) -> Result<Json<FaucetReceipt>, ApiError> {
    let request = body.map(|Json(request)| request).unwrap_or_default();

    let address = request
        .address
        .filter(|address| !address.is_empty())
        .ok_or(ApiError::BadRequest("Address is required"))?;
    let recipient =
        parse_address(&address).ok_or(ApiError::BadRequest("Invalid address format"))?;

    match backend.request_faucet(recipient).await {
        Ok(receipt) => Ok(Json(receipt)),
        Err(e) => {
            error!(recipient = %recipient, error = ?e, "Error calling faucet");
            Err(ApiError::internal("Failed to call faucet", e))
        }
    }
}

/// Query string of `GET /events/faucet`
///
/// Values are kept as text so that malformed numbers fall back to defaults
/// instead of rejecting the request.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EventsParams {
    pub limit: Option<String>,
    pub from_block: Option<String>,
    pub to_block: Option<String>,
}

impl EventsParams {
    /// Collect the known keys from raw query pairs
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "limit" => &mut params.limit,
                "fromBlock" => &mut params.from_block,
                "toBlock" => &mut params.to_block,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}

impl From<EventsParams> for ActivityQuery {
    fn from(params: EventsParams) -> Self {
        ActivityQuery {
            limit: params.limit.and_then(|v| v.trim().parse().ok()),
            from_block: params.from_block.and_then(|v| v.trim().parse().ok()),
            to_block: params.to_block.and_then(|v| v.trim().parse().ok()),
        }
    }
}

async fn get_events(
    State(backend): State<SharedBackend>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ActivityPage>, ApiError> {
    let query: ActivityQuery = EventsParams::from_pairs(pairs).into();
    match backend.recent_activity(query).await {
        Ok(page) => Ok(Json(page)),
        Err(e) => {
            error!(error = ?e, "Error fetching faucet events");
            Err(ApiError::internal("Failed to fetch faucet events", e))
        }
    }
}

/// Build the service router
pub fn router(backend: SharedBackend) -> Router {
    Router::new()
        .route("/balance/{address}", get(get_balance))
        .route("/faucet", post(request_faucet))
        .route("/events/faucet", get(get_events))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(backend)
}

/// Starts the API server.
pub async fn serve_api(listener: TcpListener, backend: SharedBackend) -> anyhow::Result<()> {
    let app = router(backend);

    let addr = listener.local_addr()?;

    info!(address = ?addr, "Starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = ?e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl+C, shutting down");
}
