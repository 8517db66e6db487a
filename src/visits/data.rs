use crate::infra::db;
use anyhow::Result;
use sqlx::query_scalar;

use super::domain::{VisitCount, COUNTER_ID};

#[derive(Clone)]
pub(super) struct Repository {
    db: db::Db,
}

impl Repository {
    pub(super) fn new(db: &db::Db) -> Self {
        Self { db: db.clone() }
    }

    /// Bump the counter and read back the stored value.
    ///
    /// The insert-or-update runs as a single statement, so concurrent calls
    /// each observe a distinct value with no lost updates.
    pub(super) async fn increment(&self) -> Result<VisitCount> {
        let mut conn = self.db.get_connection().await?;

        let value: i64 = query_scalar(
            r#"
                INSERT INTO visits ( id, visit_count )
                VALUES ( ?1, 1 )
                ON CONFLICT ( id ) DO UPDATE SET visit_count = visit_count + 1
                RETURNING visit_count
            "#,
        )
        .bind(COUNTER_ID)
        .fetch_one(&mut *conn)
        .await?;

        Ok(VisitCount::new(value)?)
    }
}
