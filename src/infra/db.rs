use std::str::FromStr;

use anyhow::Result;
use sqlx::{pool::PoolConnection, sqlite::SqliteConnectOptions, Pool, Sqlite, SqlitePool};

use super::config;

#[derive(Clone)]
pub(crate) struct Db {
    pool: Pool<Sqlite>,
}

impl Db {
    pub(crate) fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub(crate) async fn get_connection(&self) -> Result<PoolConnection<Sqlite>, sqlx::Error> {
        self.pool.acquire().await
    }
}

pub(crate) async fn init() -> Result<Db> {
    let conn_string = config::get().get_db_conn_string();
    let options = SqliteConnectOptions::from_str(conn_string)?.create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await?;

    sqlx::migrate!().run(&pool).await?;

    Ok(Db::new(pool))
}
