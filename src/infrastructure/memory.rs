//! In-memory order store.
//!
//! Keeps orders in a `HashMap` behind a read-write lock. Besides the
//! repository operations it can simulate outages and counts status writes,
//! which makes it the store of choice for tests and local experiments.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::errors::StoreError;
use crate::domain::order::{Order, OrderStatus};
use crate::domain::ports::OrderRepository;

#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<HashMap<String, Order>>,
    update_calls: AtomicUsize,
    fail_lookups: AtomicBool,
    fail_updates: AtomicBool,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orders(orders: impl IntoIterator<Item = Order>) -> Self {
        let orders = orders
            .into_iter()
            .map(|order| (order.id.clone(), order))
            .collect();
        Self {
            orders: RwLock::new(orders),
            ..Self::default()
        }
    }

    /// Inserts or replaces an order.
    pub async fn insert(&self, order: Order) {
        self.orders.write().await.insert(order.id.clone(), order);
    }

    pub async fn remove(&self, id: &str) -> Option<Order> {
        self.orders.write().await.remove(id)
    }

    /// Snapshot of the stored order, bypassing outage simulation.
    pub async fn get(&self, id: &str) -> Option<Order> {
        self.orders.read().await.get(id).cloned()
    }

    /// Number of `update_status` calls received, failed ones included.
    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn set_fail_lookups(&self, fail: bool) {
        self.fail_lookups.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_updates(&self, fail: bool) {
        self.fail_updates.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Order>, StoreError> {
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("lookup rejected".to_string()));
        }
        Ok(self.get(id).await)
    }

    async fn update_status(&self, id: &str, status: OrderStatus) -> Result<usize, StoreError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("update rejected".to_string()));
        }

        let mut orders = self.orders.write().await;
        match orders.get_mut(id) {
            Some(order) => {
                order.status = status;
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn order(id: &str, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            customer_id: Uuid::new_v4(),
            status,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn basic_operations() {
        let repo = InMemoryOrderRepository::new();
        assert!(repo.find_by_id("a").await.unwrap().is_none());

        repo.insert(order("a", OrderStatus::Pending)).await;
        let found = repo.find_by_id("a").await.unwrap().expect("order should exist");
        assert_eq!(found.status, OrderStatus::Pending);

        assert_eq!(repo.update_status("a", OrderStatus::Shipped).await.unwrap(), 1);
        assert_eq!(repo.get("a").await.unwrap().status, OrderStatus::Shipped);

        assert!(repo.remove("a").await.is_some());
        assert!(repo.get("a").await.is_none());
    }

    #[tokio::test]
    async fn update_of_missing_order_matches_nothing() {
        let repo = InMemoryOrderRepository::new();

        let affected = repo.update_status("missing", OrderStatus::Shipped).await.unwrap();

        assert_eq!(affected, 0);
        assert_eq!(repo.update_calls(), 1);
        assert!(repo.get("missing").await.is_none());
    }

    #[tokio::test]
    async fn simulated_outages() {
        let repo = InMemoryOrderRepository::with_orders([order("a", OrderStatus::Pending)]);

        repo.set_fail_lookups(true);
        assert!(matches!(
            repo.find_by_id("a").await,
            Err(StoreError::Unavailable(_))
        ));
        repo.set_fail_lookups(false);

        repo.set_fail_updates(true);
        assert!(matches!(
            repo.update_status("a", OrderStatus::Shipped).await,
            Err(StoreError::Unavailable(_))
        ));
        assert_eq!(repo.get("a").await.unwrap().status, OrderStatus::Pending);
        assert_eq!(repo.update_calls(), 1);
    }
}
