use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::errors::StoreError;
use crate::domain::order::{Order, OrderStatus};
use crate::schema::orders;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: String,
    pub customer_id: Uuid,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow {
    pub id: String,
    pub customer_id: Uuid,
    pub status: String,
}

impl TryFrom<OrderRow> for Order {
    type Error = StoreError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse::<OrderStatus>()
            .map_err(|_| StoreError::UnknownStatus {
                id: row.id.clone(),
                value: row.status.clone(),
            })?;

        Ok(Order {
            id: row.id,
            customer_id: row.customer_id,
            status,
            created_at: row.created_at,
        })
    }
}
