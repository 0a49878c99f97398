// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for configuration values
//!
//! These types keep configuration quantities (chunk sizes, lookback windows)
//! apart from the block numbers they are combined with.

use serde::{Deserialize, Serialize};

/// Maximum block range for a single `eth_getLogs` call
///
/// Log queries spanning more blocks than this are split into consecutive
/// chunks. Most hosted RPC providers accept 2000 blocks per call.
///
/// # Examples
///
/// ```
/// use faucetscan::MaxBlockRange;
///
/// let range = MaxBlockRange::DEFAULT;
/// assert_eq!(range.as_u64(), 2000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaxBlockRange(u64);

impl MaxBlockRange {
    /// Works on most hosted RPC providers
    pub const DEFAULT: Self = Self(2000);

    /// For local development chains (Ganache, Anvil) with no log limits
    pub const UNBOUNDED_LOCAL: Self = Self(100_000);

    /// Create a new max block range
    ///
    /// A zero range is bumped to one block so that chunking always progresses.
    pub const fn new(blocks: u64) -> Self {
        if blocks == 0 {
            Self(1)
        } else {
            Self(blocks)
        }
    }

    /// Get the inner u64 value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Calculate number of chunks needed to cover an inclusive range
    ///
    /// # Examples
    ///
    /// ```
    /// use faucetscan::MaxBlockRange;
    ///
    /// let range = MaxBlockRange::new(1000);
    /// assert_eq!(range.chunks_needed(0, 2500), 3);
    /// assert_eq!(range.chunks_needed(10, 5), 0);
    /// ```
    pub fn chunks_needed(&self, start: u64, end: u64) -> usize {
        if end < start {
            return 0;
        }
        let total_blocks = (end - start).saturating_add(1);
        total_blocks.div_ceil(self.0) as usize
    }

    /// Split an inclusive block range into chunks
    ///
    /// # Examples
    ///
    /// ```
    /// use faucetscan::MaxBlockRange;
    ///
    /// let chunks: Vec<_> = MaxBlockRange::new(1000).chunk_range(0, 2500).collect();
    /// assert_eq!(chunks, vec![(0, 999), (1000, 1999), (2000, 2500)]);
    /// ```
    pub fn chunk_range(&self, start: u64, end: u64) -> ChunkIterator {
        ChunkIterator {
            current: start,
            end,
            chunk_size: self.0,
            done: end < start,
        }
    }
}

impl Default for MaxBlockRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u64> for MaxBlockRange {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for MaxBlockRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} blocks", self.0)
    }
}

/// Iterator over block range chunks
///
/// Created by [`MaxBlockRange::chunk_range`]. Yields inclusive
/// `(start, end)` tuples.
#[derive(Debug, Clone)]
pub struct ChunkIterator {
    current: u64,
    end: u64,
    chunk_size: u64,
    done: bool,
}

impl Iterator for ChunkIterator {
    type Item = (u64, u64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let chunk_start = self.current;
        let chunk_end = chunk_start
            .saturating_add(self.chunk_size - 1)
            .min(self.end);

        // chunk_end == u64::MAX would overflow the cursor
        if chunk_end == self.end {
            self.done = true;
        } else {
            self.current = chunk_end + 1;
        }

        Some((chunk_start, chunk_end))
    }
}

/// A number of blocks, used for lookback windows
///
/// # Examples
///
/// ```
/// use faucetscan::BlockCount;
///
/// let lookback = BlockCount::DEFAULT_LOOKBACK;
/// assert_eq!(lookback.as_u64(), 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockCount(u64);

impl BlockCount {
    /// Default activity window when the caller gives no `fromBlock`
    pub const DEFAULT_LOOKBACK: Self = Self(1000);

    pub const fn new(count: u64) -> Self {
        Self(count)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Default for BlockCount {
    fn default() -> Self {
        Self::DEFAULT_LOOKBACK
    }
}

impl std::fmt::Display for BlockCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} blocks", self.0)
    }
}
