use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places used for customer-facing balance amounts.
pub const CURRENCY_SCALE: u32 = 2;

/// Rounds a monetary amount to two fractional digits, half away from zero.
///
/// This matches multiply-by-100/round/divide-by-100 semantics, so 333.335
/// becomes 333.34 rather than banker's-rounded 333.34/333.33 ambiguity.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
