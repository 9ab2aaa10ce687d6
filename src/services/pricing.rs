use rust_decimal::Decimal;

/// Total price for a sale: `quantity * (unit_price - unit_price * discount / 100)`.
///
/// Decimal arithmetic throughout, so currency totals carry no float drift.
/// A zero quantity yields a zero total; rejecting it is the caller's concern.
pub fn compute_total(unit_price: Decimal, discount_percent: Decimal, quantity: i32) -> Decimal {
    let discounted = unit_price - unit_price * discount_percent / Decimal::ONE_HUNDRED;
    Decimal::from(quantity) * discounted
}
