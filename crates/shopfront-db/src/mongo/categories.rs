use async_trait::async_trait;
use bson::oid::ObjectId;
use futures_util::TryStreamExt;
use mongodb::{Collection, Database, bson::doc, options::FindOptions};
use shopfront_models::{Category, NewCategory};
use tracing::instrument;

use crate::CATEGORIES;
use crate::error::{DbError, DbResult};
use crate::repository::CategoryRepository;

pub struct MongoCategoryRepository {
    collection: Collection<Category>,
}

impl MongoCategoryRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Category>(CATEGORIES),
        }
    }
}

#[async_trait]
impl CategoryRepository for MongoCategoryRepository {
    #[instrument(skip(self))]
    async fn exists_by_name(&self, name: &str) -> DbResult<bool> {
        let count = self.collection.count_documents(doc! { "name": name }).await?;
        Ok(count > 0)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ObjectId) -> DbResult<Option<Category>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    #[instrument(skip(self, category), fields(name = %category.name))]
    async fn create(&self, category: NewCategory) -> DbResult<Category> {
        let category = Category::from(category);
        self.collection
            .insert_one(&category)
            .await
            .map_err(|e| DbError::from_insert(e, "Category already exists"))?;

        tracing::info!(category_id = %category.id, "Category created");
        Ok(category)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> DbResult<u64> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    #[instrument(skip(self))]
    async fn list(&self, skip: u64, limit: u64) -> DbResult<Vec<Category>> {
        let options = FindOptions::builder()
            .skip(skip)
            .limit(limit as i64)
            .build();

        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        Ok(cursor.try_collect().await?)
    }

    #[instrument(skip(self, categories), fields(count = categories.len()))]
    async fn insert_many(&self, categories: Vec<Category>) -> DbResult<()> {
        if categories.is_empty() {
            return Ok(());
        }
        self.collection.insert_many(categories).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_all(&self) -> DbResult<u64> {
        Ok(self.collection.delete_many(doc! {}).await?.deleted_count)
    }
}
