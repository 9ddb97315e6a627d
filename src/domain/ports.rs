use async_trait::async_trait;

use super::errors::StoreError;
use super::order::{Order, OrderStatus};

/// Keyed access to persisted orders.
#[async_trait]
pub trait OrderRepository: Send + Sync + 'static {
    async fn find_by_id(&self, id: &str) -> Result<Option<Order>, StoreError>;

    /// Sets the status of the order with the given id, leaving every other
    /// field as it is. Returns the number of matched rows (0 or 1).
    async fn update_status(&self, id: &str, status: OrderStatus) -> Result<usize, StoreError>;
}

#[async_trait]
impl<T: OrderRepository + ?Sized> OrderRepository for std::sync::Arc<T> {
    async fn find_by_id(&self, id: &str) -> Result<Option<Order>, StoreError> {
        (**self).find_by_id(id).await
    }

    async fn update_status(&self, id: &str, status: OrderStatus) -> Result<usize, StoreError> {
        (**self).update_status(id, status).await
    }
}
