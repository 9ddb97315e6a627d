use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::StoreError;
use crate::domain::order::{Order, OrderStatus};
use crate::domain::ports::OrderRepository;
use crate::schema::orders;

use super::models::OrderRow;

pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Runs a blocking Diesel operation on a pooled connection off the async
    /// executor.
    async fn with_conn<T, F>(&self, op: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> Result<T, StoreError> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            op(&mut conn)
        })
        .await?
    }
}

#[async_trait]
impl OrderRepository for DieselOrderRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Order>, StoreError> {
        let id = id.to_owned();
        self.with_conn(move |conn| {
            orders::table
                .filter(orders::id.eq(&id))
                .select(OrderRow::as_select())
                .first(conn)
                .optional()?
                .map(Order::try_from)
                .transpose()
        })
        .await
    }

    async fn update_status(&self, id: &str, status: OrderStatus) -> Result<usize, StoreError> {
        let id = id.to_owned();
        self.with_conn(move |conn| {
            // Matches nothing if the row vanished after the caller's lookup.
            let affected = diesel::update(orders::table.filter(orders::id.eq(&id)))
                .set(orders::status.eq(status.as_str()))
                .execute(conn)?;
            Ok(affected)
        })
        .await
    }
}
