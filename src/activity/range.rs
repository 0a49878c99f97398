//! Block window resolution for activity queries

use alloy_primitives::BlockNumber;
use tracing::debug;

use crate::chain::ChainClient;
use crate::errors::ActivityError;
use crate::types::config::BlockCount;

/// Inclusive `[from, to]` block window
///
/// Caller-supplied bounds are never clamped, so the window may be inverted
/// (`from > to`). An inverted window matches no logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRange {
    pub from: BlockNumber,
    pub to: BlockNumber,
}

impl BlockRange {
    pub const fn new(from: BlockNumber, to: BlockNumber) -> Self {
        Self { from, to }
    }

    /// True when the window cannot contain any block
    pub const fn is_inverted(&self) -> bool {
        self.from > self.to
    }

    /// Resolve optional bounds against a known chain head
    ///
    /// A missing `to` becomes `head`; a missing `from` becomes
    /// `head - lookback`, floored at genesis.
    ///
    /// ```rust
    /// use faucetscan::BlockRange;
    /// use faucetscan::types::config::BlockCount;
    ///
    /// let range = BlockRange::with_head(None, None, 5000, BlockCount::DEFAULT_LOOKBACK);
    /// assert_eq!(range, BlockRange::new(4000, 5000));
    ///
    /// let range = BlockRange::with_head(None, None, 300, BlockCount::DEFAULT_LOOKBACK);
    /// assert_eq!(range, BlockRange::new(0, 300));
    /// ```
    pub fn with_head(
        from: Option<BlockNumber>,
        to: Option<BlockNumber>,
        head: BlockNumber,
        lookback: BlockCount,
    ) -> Self {
        Self {
            from: from.unwrap_or_else(|| head.saturating_sub(lookback.as_u64())),
            to: to.unwrap_or(head),
        }
    }

    /// Resolve optional bounds, reading the chain head only if a bound is missing
    ///
    /// Fails with [`ActivityError::HeadUnavailable`] when the head is needed
    /// and cannot be read.
    pub async fn resolve<C: ChainClient + ?Sized>(
        client: &C,
        from: Option<BlockNumber>,
        to: Option<BlockNumber>,
        lookback: BlockCount,
    ) -> Result<Self, ActivityError> {
        if let (Some(from), Some(to)) = (from, to) {
            return Ok(Self::new(from, to));
        }

        let head = client
            .current_height()
            .await
            .map_err(ActivityError::head_unavailable)?;

        let range = Self::with_head(from, to, head, lookback);
        debug!(head, from_block = range.from, to_block = range.to, "Resolved block range");
        Ok(range)
    }
}

impl std::fmt::Display for BlockRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_from_head() {
        let range = BlockRange::with_head(None, None, 5000, BlockCount::new(1000));
        assert_eq!(range, BlockRange::new(4000, 5000));
    }

    #[test]
    fn test_lookback_floors_at_genesis() {
        let range = BlockRange::with_head(None, None, 10, BlockCount::new(1000));
        assert_eq!(range, BlockRange::new(0, 10));
    }

    #[test]
    fn test_supplied_bounds_are_not_clamped() {
        let range = BlockRange::with_head(Some(7000), Some(9000), 5000, BlockCount::new(1000));
        assert_eq!(range, BlockRange::new(7000, 9000));
    }

    #[test]
    fn test_explicit_to_keeps_head_based_from() {
        let range = BlockRange::with_head(None, Some(100), 5000, BlockCount::new(1000));
        assert_eq!(range, BlockRange::new(4000, 100));
        assert!(range.is_inverted());
    }

    #[test]
    fn test_zero_from_is_a_real_bound() {
        let range = BlockRange::with_head(Some(0), None, 5000, BlockCount::new(1000));
        assert_eq!(range, BlockRange::new(0, 5000));
    }

    #[test]
    fn test_single_block_window_is_not_inverted() {
        assert!(!BlockRange::new(42, 42).is_inverted());
        assert!(BlockRange::new(43, 42).is_inverted());
    }

    #[test]
    fn test_display() {
        assert_eq!(BlockRange::new(4000, 5000).to_string(), "4000-5000");
    }
}
