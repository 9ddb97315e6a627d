use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::RunQueryDsl;

use crate::domain::errors::StoreError;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

pub fn create_pool(database_url: &str, max_size: u32) -> Result<DbPool, r2d2::Error> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder().max_size(max_size).build(manager)
}

/// Checks out a pooled connection and runs `SELECT 1` on it.
pub async fn check_connection(pool: &DbPool) -> Result<(), StoreError> {
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || -> Result<(), StoreError> {
        let mut conn = pool.get()?;
        diesel::sql_query("SELECT 1").execute(&mut conn)?;
        Ok(())
    })
    .await?
}
