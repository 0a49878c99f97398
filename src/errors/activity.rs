// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the activity feed.
//!
//! Only [`ActivityError::HeadUnavailable`] ever reaches a caller of
//! [`ActivityFeed::recent_activity`](crate::ActivityFeed::recent_activity).
//! The remaining variants describe why a single raw log entry was dropped;
//! they are logged and swallowed by the pipeline.

use super::RpcError;
use crate::chain::ActivityStream;

/// Errors that can occur while building the faucet activity feed.
#[derive(Debug, thiserror::Error)]
pub enum ActivityError {
    /// The chain head could not be read, so an open-ended block range cannot
    /// be resolved. This is the only request-fatal failure.
    #[error("Chain head unavailable: {0}")]
    HeadUnavailable(#[source] RpcError),

    /// A log entry did not decode as the event its stream expects.
    ///
    /// Covers missing or truncated data (e.g. no `amount` word) and logs
    /// carrying an unexpected event signature.
    #[error("Failed to decode {stream} log: {details}")]
    DecodeFailed {
        stream: ActivityStream,
        details: String,
    },

    /// A log entry is missing block metadata the feed needs.
    #[error("{stream} log is missing {field}")]
    MissingField {
        stream: ActivityStream,
        field: &'static str,
    },

    /// The raw amount could not be scaled by the token's decimals.
    #[error("Invalid {stream} amount: {details}")]
    InvalidAmount {
        stream: ActivityStream,
        details: String,
    },
}

impl ActivityError {
    pub fn head_unavailable(source: RpcError) -> Self {
        ActivityError::HeadUnavailable(source)
    }

    /// Create a `DecodeFailed` error with details.
    pub fn decode_failed(stream: ActivityStream, details: impl Into<String>) -> Self {
        ActivityError::DecodeFailed {
            stream,
            details: details.into(),
        }
    }

    pub fn missing_field(stream: ActivityStream, field: &'static str) -> Self {
        ActivityError::MissingField { stream, field }
    }

    pub fn invalid_amount(stream: ActivityStream, details: impl Into<String>) -> Self {
        ActivityError::InvalidAmount {
            stream,
            details: details.into(),
        }
    }
}
