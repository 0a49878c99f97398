// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across faucetscan.
//!
//! - Token decimals and metadata
//! - Configuration values (block ranges, lookback windows)

pub mod config;
pub mod tokens;

// Note: Public types are re-exported from lib.rs, not here
