use crate::domain::errors::DomainError;
use crate::domain::order::{Order, OrderStatus};
use crate::domain::ports::OrderRepository;

const HEALTH_MESSAGE: &str = "Order status service is up";

pub struct OrderService<R> {
    repo: R,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn health_message() -> &'static str {
        HEALTH_MESSAGE
    }

    pub async fn get_order(&self, order_id: &str) -> Result<Option<Order>, DomainError> {
        Ok(self.repo.find_by_id(order_id).await?)
    }

    /// Sets the status of an existing order.
    ///
    /// Fails with [`DomainError::NotFound`] when no order has this id, and
    /// with [`DomainError::Store`] carrying the store's own error when the
    /// lookup or the write fails. Failures are logged before being returned.
    pub async fn update_status(
        &self,
        order_id: &str,
        new_status: OrderStatus,
    ) -> Result<(), DomainError> {
        self.apply_status(order_id, new_status)
            .await
            .inspect_err(|e| {
                log::error!(
                    "Failed to update status of order {} to {}: {}",
                    order_id,
                    new_status,
                    e
                )
            })
    }

    async fn apply_status(&self, order_id: &str, new_status: OrderStatus) -> Result<(), DomainError> {
        if self.repo.find_by_id(order_id).await?.is_none() {
            return Err(DomainError::NotFound(order_id.to_string()));
        }

        // A zero count means the order was deleted after the lookup.
        if self.repo.update_status(order_id, new_status).await? == 0 {
            return Err(DomainError::NotFound(order_id.to_string()));
        }

        log::info!("Order {} status set to {}", order_id, new_status);
        Ok(())
    }
}
