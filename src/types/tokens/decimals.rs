//! Token decimal precision type

use alloy_primitives::utils::{format_units, parse_units, UnitsError};
use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// ERC-20 token decimal precision
///
/// Converts between raw integer token units and the decimal strings shown to
/// users. All conversions are exact integer arithmetic; no floating point is
/// involved.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use faucetscan::TokenDecimals;
///
/// let decimals = TokenDecimals::STANDARD;
/// let raw = U256::from(1_500_000_000_000_000_000u128);
/// assert_eq!(decimals.format_amount(raw).unwrap(), "1.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenDecimals(u8);

impl TokenDecimals {
    /// Largest precision whose scaling factor fits in a U256 (10^77)
    pub const MAX_SCALABLE: u8 = 77;

    /// Standard decimals for ETH-like tokens (18)
    pub const STANDARD: Self = Self(18);

    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Render a raw amount as a decimal string with trailing fractional zeros trimmed
    ///
    /// `100 * 10^18` with 18 decimals renders as `"100"`, `1` with 6 decimals
    /// renders as `"0.000001"`.
    ///
    /// # Errors
    ///
    /// Fails when the precision exceeds [`Self::MAX_SCALABLE`].
    pub fn format_amount(&self, raw: U256) -> Result<String, UnitsError> {
        let formatted = format_units(raw, self.0)?;
        if !formatted.contains('.') {
            return Ok(formatted);
        }
        Ok(formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string())
    }

    /// Parse a human-readable, non-negative amount into raw token units
    ///
    /// # Examples
    ///
    /// ```
    /// use alloy_primitives::U256;
    /// use faucetscan::TokenDecimals;
    ///
    /// let raw = TokenDecimals::new(6).parse_amount("2.5").unwrap();
    /// assert_eq!(raw, U256::from(2_500_000u64));
    /// ```
    pub fn parse_amount(&self, amount: &str) -> Result<U256, UnitsError> {
        let amount = amount.trim();
        if amount.starts_with('-') {
            return Err(UnitsError::InvalidUnit(format!(
                "negative amount {amount}"
            )));
        }
        Ok(parse_units(amount, self.0)?.get_absolute())
    }
}

impl From<u8> for TokenDecimals {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenDecimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}
