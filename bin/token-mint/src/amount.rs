//! Scaling of decimal token amounts into base units.

use alloy::primitives::{
    U256,
    utils::{ParseUnits, parse_units},
};

use crate::{
    constants::{MINT_AMOUNT, TOKEN_DECIMALS},
    error::Error,
};

/// Scale a decimal `amount` by `10^decimals`.
///
/// `"5000"` with 18 decimals yields `5000 * 10^18`. Fractional digits beyond
/// the precision and negative amounts are rejected.
pub fn scale(amount: &str, decimals: u8) -> Result<U256, Error> {
    match parse_units(amount, decimals).map_err(|source| Error::InvalidAmount {
        amount: amount.to_string(),
        source,
    })? {
        ParseUnits::U256(value) => Ok(value),
        ParseUnits::I256(_) => Err(Error::NegativeAmount(amount.to_string())),
    }
}

/// The amount minted on every run, in base units.
pub fn mint_amount() -> Result<U256, Error> {
    scale(MINT_AMOUNT, TOKEN_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mint_amount_is_5000_tokens_with_18_decimals() {
        let expected = U256::from(5000u64) * U256::from(10u64).pow(U256::from(18u64));
        assert_eq!(mint_amount().unwrap(), expected);
        assert_eq!(
            mint_amount().unwrap().to_string(),
            "5000000000000000000000"
        );
    }

    #[test]
    fn scale_keeps_fractional_digits() {
        assert_eq!(scale("1.5", 6).unwrap(), U256::from(1_500_000u64));
        assert_eq!(scale("0", 18).unwrap(), U256::ZERO);
    }

    #[test]
    fn scale_rejects_garbage() {
        assert!(matches!(
            scale("five thousand", 18),
            Err(Error::InvalidAmount { .. })
        ));
    }

    #[test]
    fn scale_rejects_negative_amounts() {
        assert!(matches!(scale("-1", 18), Err(Error::NegativeAmount(_))));
    }
}
