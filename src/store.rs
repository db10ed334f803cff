use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, TransactionTrait,
};

use crate::{entities::title, error::AppResult};

// Keeps a single bulk insert under sqlite's bind-variable limit.
const INSERT_CHUNK: usize = 100;

/// Handle to the persisted title collection. Cloned into every handler via
/// the shared application state.
#[derive(Clone)]
pub struct TitleStore {
    db: DatabaseConnection,
}

impl TitleStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Runs a filter predicate over the whole collection, natural order.
    pub async fn search(&self, condition: Condition) -> AppResult<Vec<title::Model>> {
        Ok(title::Entity::find().filter(condition).all(&self.db).await?)
    }

    pub async fn by_id(&self, id: i32) -> AppResult<Option<title::Model>> {
        Ok(title::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn by_year(&self, year: i32) -> AppResult<Vec<title::Model>> {
        Ok(title::Entity::find()
            .filter(title::Column::ReleaseYear.eq(year))
            .all(&self.db)
            .await?)
    }

    /// Replaces the whole collection: every existing row is deleted and the
    /// given records inserted, in one transaction. Returns the inserted count.
    pub async fn reseed(&self, records: Vec<title::ActiveModel>) -> AppResult<usize> {
        let total = records.len();

        let txn = self.db.begin().await?;

        title::Entity::delete_many().exec(&txn).await?;

        for chunk in records.chunks(INSERT_CHUNK) {
            title::Entity::insert_many(chunk.to_vec()).exec(&txn).await?;
        }

        txn.commit().await?;

        Ok(total)
    }
}
