//! Crossing detection
//!
//! Determines when an incoming taker may trade against a resting maker.

use types::numeric::Price;
use types::order::{Order, Side};

/// Check if a bid and ask price cross
///
/// A buy matches a sell when the bid price is at or above the ask price.
pub fn can_match(bid_price: Price, ask_price: Price) -> bool {
    bid_price >= ask_price
}

/// Whether the taker crosses a resting maker quoted at `maker_price`
///
/// A MARKET taker crosses any resting maker: everything resting is a LIMIT
/// order with an agreed price (MARKET orders never rest), so the maker's
/// price is always defined. A LIMIT taker crosses when its own limit
/// overlaps the maker's quote.
pub fn taker_crosses(taker: &Order, maker_price: Price) -> bool {
    match taker.price {
        None => true,
        Some(limit) => match taker.side {
            Side::Buy => can_match(limit, maker_price),
            Side::Sell => can_match(maker_price, limit),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::OrderId;
    use types::numeric::Quantity;
    use types::order::OrderType;

    fn taker(side: Side, price: Option<u64>) -> Order {
        Order {
            id: OrderId::new("T"),
            side,
            order_type: if price.is_some() {
                OrderType::Limit
            } else {
                OrderType::Market
            },
            price: price.map(Price::from_u64),
            qty: Quantity::from_u64(1),
            seq: 1,
            canceled: false,
        }
    }

    #[test]
    fn test_can_match_boundaries() {
        assert!(can_match(Price::from_u64(100), Price::from_u64(99)));
        assert!(can_match(Price::from_u64(100), Price::from_u64(100)));
        assert!(!can_match(Price::from_u64(99), Price::from_u64(100)));
    }

    #[test]
    fn test_limit_buy_crosses_at_or_above_ask() {
        let buy = taker(Side::Buy, Some(101));
        assert!(taker_crosses(&buy, Price::from_u64(100)));
        assert!(taker_crosses(&buy, Price::from_u64(101)));
        assert!(!taker_crosses(&buy, Price::from_u64(102)));
    }

    #[test]
    fn test_limit_sell_crosses_at_or_below_bid() {
        let sell = taker(Side::Sell, Some(99));
        assert!(taker_crosses(&sell, Price::from_u64(100)));
        assert!(taker_crosses(&sell, Price::from_u64(99)));
        assert!(!taker_crosses(&sell, Price::from_u64(98)));
    }

    #[test]
    fn test_market_taker_crosses_any_quote() {
        let buy = taker(Side::Buy, None);
        assert!(taker_crosses(&buy, Price::from_u64(1)));
        assert!(taker_crosses(&buy, Price::from_u64(1_000_000)));
    }
}
