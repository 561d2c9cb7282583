/*!
# Display Amounts

Conversion between SOL as typed or shown to a user and lamports, the unit every
on-chain amount is denominated in. All math goes through `rust_decimal` so a
display value with at most nine fractional digits maps to exactly one lamport
count, every time.
*/

use rust_decimal::prelude::*;
use solana_sdk::native_token::LAMPORTS_PER_SOL;
use thiserror::Error;

/// Lamports are nine decimal places below SOL
pub const SOL_DECIMALS: u32 = 9;

/// Amount donated or withdrawn when the caller does not pick one: 0.25 SOL
pub const DEFAULT_DONATION_SOL: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Invalid amount: {0}")]
    Parse(String),

    #[error("Negative amount: {0}")]
    Negative(Decimal),

    #[error("Amount {0} has more than 9 decimal places")]
    TooPrecise(Decimal),

    #[error("Amount {0} does not fit in u64 lamports")]
    Overflow(Decimal),
}

pub type AmountResult<T> = Result<T, AmountError>;

/// Convert a SOL amount to lamports, refusing anything that would round
pub fn sol_to_lamports(sol: Decimal) -> AmountResult<u64> {
    if sol.is_sign_negative() && !sol.is_zero() {
        return Err(AmountError::Negative(sol));
    }

    let sol = sol.normalize();
    if sol.scale() > SOL_DECIMALS {
        return Err(AmountError::TooPrecise(sol));
    }

    let lamports = sol
        .checked_mul(Decimal::from(LAMPORTS_PER_SOL))
        .ok_or(AmountError::Overflow(sol))?;

    lamports.to_u64().ok_or(AmountError::Overflow(sol))
}

/// Lamports as SOL, exact
pub fn lamports_to_sol(lamports: u64) -> Decimal {
    Decimal::from_i128_with_scale(lamports as i128, SOL_DECIMALS).normalize()
}

/// Parse user input such as `"0.25"` into lamports
pub fn parse_sol(input: &str) -> AmountResult<u64> {
    let sol = Decimal::from_str(input.trim())
        .map_err(|e| AmountError::Parse(format!("{input}: {e}")))?;
    sol_to_lamports(sol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn test_quarter_sol_is_exact() {
        assert_eq!(DEFAULT_DONATION_SOL, dec!(0.25));
        for _ in 0..3 {
            assert_eq!(sol_to_lamports(DEFAULT_DONATION_SOL).unwrap(), 250_000_000);
        }
        assert_eq!(parse_sol("0.25").unwrap(), 250_000_000);
        assert_eq!(lamports_to_sol(250_000_000), dec!(0.25));
    }

    #[test]
    fn test_whole_and_smallest_units() {
        assert_eq!(sol_to_lamports(dec!(1)).unwrap(), LAMPORTS_PER_SOL);
        assert_eq!(sol_to_lamports(dec!(0.000000001)).unwrap(), 1);
        assert_eq!(sol_to_lamports(dec!(0)).unwrap(), 0);
        assert_eq!(lamports_to_sol(1), dec!(0.000000001));
        assert_eq!(lamports_to_sol(0), dec!(0));
    }

    #[test]
    fn test_trailing_zeros_do_not_count_as_precision() {
        assert_eq!(parse_sol("1.50000000000").unwrap(), 1_500_000_000);
    }

    #[test]
    fn test_rejects_sub_lamport_amounts() {
        assert!(matches!(
            sol_to_lamports(dec!(0.0000000001)),
            Err(AmountError::TooPrecise(_))
        ));
    }

    #[test]
    fn test_rejects_negative_and_garbage() {
        assert!(matches!(
            sol_to_lamports(dec!(-0.25)),
            Err(AmountError::Negative(_))
        ));
        assert!(matches!(parse_sol("a quarter"), Err(AmountError::Parse(_))));
    }

    #[test]
    fn test_rejects_overflow() {
        assert!(matches!(
            sol_to_lamports(dec!(18446744074)),
            Err(AmountError::Overflow(_))
        ));
        assert_eq!(lamports_to_sol(u64::MAX), dec!(18446744073.709551615));
    }
}
