//! Identity index over live order records
//!
//! CANCEL and REPLACE locate orders here without scanning the book. The
//! index owns the mutable order records; the books only hold handles into
//! it.

use std::collections::HashMap;
use types::ids::OrderId;
use types::order::Order;

/// Map from order id to its record
///
/// Entries are inserted when an order rests, removed when the residual hits
/// zero or the book is drained. CANCEL flips the record's flag but keeps the
/// entry, so a later REPLACE of the same id still resolves.
#[derive(Debug, Default)]
pub struct OrderIndex {
    orders: HashMap<OrderId, Order>,
}

impl OrderIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self {
            orders: HashMap::new(),
        }
    }

    /// Insert or overwrite the record for an order
    pub fn insert(&mut self, order: Order) {
        self.orders.insert(order.id.clone(), order);
    }

    /// Look up an order by id
    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.orders.get(id)
    }

    /// Look up an order for mutation
    pub fn get_mut(&mut self, id: &OrderId) -> Option<&mut Order> {
        self.orders.get_mut(id)
    }

    /// Remove an order record
    pub fn remove(&mut self, id: &OrderId) -> Option<Order> {
        self.orders.remove(id)
    }

    /// Whether an id is present (live or canceled)
    pub fn contains(&self, id: &OrderId) -> bool {
        self.orders.contains_key(id)
    }

    /// Number of indexed records
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Iterate over indexed records (unspecified order)
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::numeric::{Price, Quantity};
    use types::order::{OrderType, Side};

    fn order(id: &str, seq: u64) -> Order {
        Order {
            id: OrderId::new(id),
            side: Side::Buy,
            order_type: OrderType::Limit,
            price: Some(Price::from_u64(100)),
            qty: Quantity::from_u64(1),
            seq,
            canceled: false,
        }
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut index = OrderIndex::new();
        index.insert(order("B1", 1));

        assert!(index.contains(&OrderId::new("B1")));
        assert_eq!(index.get(&OrderId::new("B1")).unwrap().seq, 1);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_canceled_entry_remains_resolvable() {
        let mut index = OrderIndex::new();
        index.insert(order("B1", 1));

        index.get_mut(&OrderId::new("B1")).unwrap().canceled = true;
        assert!(index.contains(&OrderId::new("B1")));
        assert!(index.get(&OrderId::new("B1")).unwrap().canceled);
    }

    #[test]
    fn test_remove_unknown_is_none() {
        let mut index = OrderIndex::new();
        assert!(index.remove(&OrderId::new("missing")).is_none());
        assert!(index.is_empty());
    }

    #[test]
    fn test_insert_overwrites_same_id() {
        let mut index = OrderIndex::new();
        index.insert(order("B1", 1));
        index.insert(order("B1", 5));

        assert_eq!(index.len(), 1);
        assert_eq!(index.get(&OrderId::new("B1")).unwrap().seq, 5);
    }
}
