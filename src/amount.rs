//! Exact decimal amounts over raw `U256` token units.

use alloy_primitives::U256;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("empty amount")]
    Empty,

    #[error("malformed amount: {0}")]
    Malformed(String),

    #[error("amount does not fit in 256 bits: {0}")]
    Overflow(String),

    #[error("percent must be between 0 and 100, got {0}")]
    PercentOutOfRange(u8),
}

fn pow10(exp: usize) -> Option<U256> {
    U256::from(10u64).checked_pow(U256::from(exp))
}

/// An amount of a token expressed in its smallest unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAmount {
    raw: U256,
    decimals: u8,
}

impl TokenAmount {
    pub fn from_raw(raw: U256, decimals: u8) -> Self {
        Self { raw, decimals }
    }

    pub fn zero(decimals: u8) -> Self {
        Self::from_raw(U256::ZERO, decimals)
    }

    /// Parse a user-typed decimal string such as "1.5", ".25" or "3.".
    ///
    /// Fractional digits beyond `decimals` are rounded half-up on the first
    /// dropped digit.
    pub fn parse(input: &str, decimals: u8) -> Result<Self, AmountError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(AmountError::Empty);
        }

        let (int_part, frac_part) = input.split_once('.').unwrap_or((input, ""));
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (int_part.is_empty() && frac_part.is_empty())
            || !all_digits(int_part)
            || !all_digits(frac_part)
        {
            return Err(AmountError::Malformed(input.to_string()));
        }

        let overflow = || AmountError::Overflow(input.to_string());
        let places = decimals as usize;
        let scale = pow10(places).ok_or_else(overflow)?;

        let int_value = if int_part.is_empty() {
            U256::ZERO
        } else {
            U256::from_str_radix(int_part, 10).map_err(|_| overflow())?
        };

        let (kept, dropped) = if frac_part.len() > places {
            frac_part.split_at(places)
        } else {
            (frac_part, "")
        };
        let frac_value = if kept.is_empty() {
            U256::ZERO
        } else {
            let digits = U256::from_str_radix(kept, 10).map_err(|_| overflow())?;
            let pad = pow10(places - kept.len()).ok_or_else(overflow)?;
            digits.checked_mul(pad).ok_or_else(overflow)?
        };

        let mut raw = int_value
            .checked_mul(scale)
            .and_then(|v| v.checked_add(frac_value))
            .ok_or_else(overflow)?;
        if dropped.as_bytes().first().is_some_and(|d| *d >= b'5') {
            raw = raw.checked_add(U256::from(1u8)).ok_or_else(overflow)?;
        }

        Ok(Self { raw, decimals })
    }

    pub fn raw(&self) -> U256 {
        self.raw
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Minimal decimal representation, e.g. "1.5" or "0".
    pub fn to_exact(&self) -> String {
        format_units(self.raw, self.decimals)
    }

    /// Lossy conversion used for USD display math only.
    pub fn to_f64(&self) -> f64 {
        self.to_exact().parse::<f64>().unwrap_or(0.0)
    }

    /// `self × percent / 100`, rounded down on the raw integer.
    pub fn mul_percent(&self, percent: u8) -> Result<Self, AmountError> {
        if percent > 100 {
            return Err(AmountError::PercentOutOfRange(percent));
        }
        if percent == 100 {
            return Ok(*self);
        }
        let scaled = self
            .raw
            .checked_mul(U256::from(percent))
            .ok_or_else(|| AmountError::Overflow(self.to_exact()))?;
        Ok(Self::from_raw(scaled / U256::from(100u8), self.decimals))
    }

    pub fn saturating_sub(&self, other: U256) -> Self {
        Self::from_raw(self.raw.saturating_sub(other), self.decimals)
    }

    pub fn exceeds(&self, other: &TokenAmount) -> bool {
        self.raw > other.raw
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_exact())
    }
}

/// Render a raw integer amount with `decimals` implied places, trimming
/// trailing zeros.
pub fn format_units(raw: U256, decimals: u8) -> String {
    let digits = raw.to_string();
    if decimals == 0 {
        return digits;
    }
    let places = decimals as usize;
    let padded = if digits.len() <= places {
        format!("{}{}", "0".repeat(places + 1 - digits.len()), digits)
    } else {
        digits
    };
    let (int_part, frac_part) = padded.split_at(padded.len() - places);
    let frac_part = frac_part.trim_end_matches('0');
    if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{int_part}.{frac_part}")
    }
}

/// Computes how much of a balance may actually be sent.
pub trait MaxSpend {
    fn max_spend(&self, balance: &TokenAmount, is_native: bool) -> TokenAmount;
}

/// Keeps a fixed amount of the native currency back for gas.
#[derive(Debug, Clone, Copy)]
pub struct ReservedGasMaxSpend {
    pub reserve: U256,
}

impl ReservedGasMaxSpend {
    pub fn new(reserve: U256) -> Self {
        Self { reserve }
    }
}

impl MaxSpend for ReservedGasMaxSpend {
    fn max_spend(&self, balance: &TokenAmount, is_native: bool) -> TokenAmount {
        if is_native {
            balance.saturating_sub(self.reserve)
        } else {
            *balance
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_ETH: u128 = 1_000_000_000_000_000_000;

    #[test]
    fn parses_plain_and_fractional_inputs() {
        let amount = TokenAmount::parse("1.5", 18).unwrap();
        assert_eq!(amount.raw(), U256::from(ONE_ETH + ONE_ETH / 2));

        assert_eq!(TokenAmount::parse(".25", 2).unwrap().raw(), U256::from(25u8));
        assert_eq!(TokenAmount::parse("3.", 6).unwrap().raw(), U256::from(3_000_000u64));
        assert_eq!(TokenAmount::parse("42", 0).unwrap().raw(), U256::from(42u8));
    }

    #[test]
    fn rounds_excess_fraction_half_up() {
        assert_eq!(TokenAmount::parse("1.005", 2).unwrap().raw(), U256::from(101u32));
        assert_eq!(TokenAmount::parse("1.004", 2).unwrap().raw(), U256::from(100u32));
        assert_eq!(TokenAmount::parse("0.999", 2).unwrap().raw(), U256::from(100u32));
    }

    #[test]
    fn rejects_malformed_inputs() {
        assert_eq!(TokenAmount::parse("  ", 18), Err(AmountError::Empty));
        for bad in [".", "-1", "1.2.3", "1e5", "abc", "+2"] {
            assert!(
                matches!(TokenAmount::parse(bad, 18), Err(AmountError::Malformed(_))),
                "{bad} should be malformed"
            );
        }
    }

    #[test]
    fn formats_minimal_representation() {
        assert_eq!(format_units(U256::from(ONE_ETH), 18), "1");
        assert_eq!(format_units(U256::from(1_500u32), 3), "1.5");
        assert_eq!(format_units(U256::from(21_000u32), 9), "0.000021");
        assert_eq!(format_units(U256::ZERO, 18), "0");
    }

    #[test]
    fn percent_of_max_is_exact() {
        let max = TokenAmount::parse("7.77", 18).unwrap();
        assert_eq!(max.mul_percent(100).unwrap(), max);
        assert_eq!(max.mul_percent(100).unwrap().mul_percent(100).unwrap(), max);
        assert_eq!(max.mul_percent(50).unwrap().to_exact(), "3.885");
        assert_eq!(max.mul_percent(0).unwrap().to_exact(), "0");
        assert_eq!(max.mul_percent(101), Err(AmountError::PercentOutOfRange(101)));
    }

    #[test]
    fn reserves_gas_only_for_native_balances() {
        let policy = ReservedGasMaxSpend::new(U256::from(ONE_ETH / 100));
        let balance = TokenAmount::parse("1", 18).unwrap();
        assert_eq!(policy.max_spend(&balance, true).to_exact(), "0.99");
        assert_eq!(policy.max_spend(&balance, false), balance);

        let dust = TokenAmount::parse("0.001", 18).unwrap();
        assert!(policy.max_spend(&dust, true).is_zero());
    }
}
