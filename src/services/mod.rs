//! Service layer for Tally
//!
//! The service layer validates caller input and resolves category names
//! before anything reaches the store. Each mutation is a single write.

pub mod budget;
pub mod category;
pub mod expense;

pub use budget::BudgetService;
pub use category::CategoryService;
pub use expense::ExpenseService;

use crate::error::{TallyError, TallyResult};
use crate::models::Money;

/// Largest accepted expense or budget amount (ten billion units)
///
/// Keeps any realistic number of summed amounts inside the cents counter.
pub const MAX_AMOUNT: Money = Money::from_cents(1_000_000_000_000);

/// Parse user input as a strictly positive amount
///
/// Text that is not a number, numbers that round to zero or below, and
/// numbers above [`MAX_AMOUNT`] are all `InvalidAmount`.
pub fn parse_amount(input: &str) -> TallyResult<Money> {
    let amount =
        Money::parse(input).map_err(|_| TallyError::InvalidAmount(input.trim().to_string()))?;
    ensure_positive(amount).map_err(|_| TallyError::InvalidAmount(input.trim().to_string()))
}

pub(crate) fn ensure_positive(amount: Money) -> TallyResult<Money> {
    if amount.is_positive() && amount <= MAX_AMOUNT {
        Ok(amount)
    } else {
        Err(TallyError::InvalidAmount(amount.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_accepts_positive() {
        assert_eq!(parse_amount("50.50").unwrap(), Money::from_cents(5050));
        assert_eq!(parse_amount("0.01").unwrap(), Money::from_cents(1));
        assert_eq!(parse_amount("12.345").unwrap(), Money::from_cents(1235));
        assert_eq!(parse_amount("1e2").unwrap(), Money::from_cents(10000));
        assert_eq!(parse_amount("+5").unwrap(), Money::from_cents(500));
        assert_eq!(parse_amount("10000000000").unwrap(), MAX_AMOUNT);
    }

    #[test]
    fn test_parse_amount_rejects_amounts_over_limit() {
        for input in ["10000000000.01", "90000000000000000", "1e11"] {
            assert_eq!(
                parse_amount(input).unwrap_err().to_string(),
                format!(
                    "Invalid amount '{}': must be a number greater than zero and at most 10000000000.00",
                    input
                )
            );
        }
        assert!(matches!(
            ensure_positive(Money::from_cents(i64::MAX)),
            Err(TallyError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_parse_amount_rejects_non_positive_and_garbage() {
        for input in ["0", "0.00", "0.001", "-5", "-0.01", "abc", "", "1e-3"] {
            let err = parse_amount(input).unwrap_err();
            assert!(
                matches!(err, TallyError::InvalidAmount(_)),
                "{:?} gave {:?}",
                input,
                err
            );
        }
    }
}
