use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc},
};
use shopfront_models::{NewProduct, PopulatedProduct, Product};
use tracing::instrument;

use crate::error::{DbError, DbResult};
use crate::repository::ProductRepository;
use crate::{CATEGORIES, PRODUCTS, USERS};

pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Product>(PRODUCTS),
        }
    }

    /// Slice first, then join only the page's references.
    fn populated_pipeline(skip: u64, limit: u64) -> Vec<Document> {
        vec![
            doc! { "$skip": skip as i64 },
            doc! { "$limit": limit as i64 },
            doc! { "$lookup": {
                "from": USERS,
                "localField": "user",
                "foreignField": "_id",
                "as": "user",
            }},
            doc! { "$unwind": { "path": "$user", "preserveNullAndEmptyArrays": true } },
            doc! { "$lookup": {
                "from": CATEGORIES,
                "localField": "category",
                "foreignField": "_id",
                "as": "category",
            }},
            doc! { "$unwind": { "path": "$category", "preserveNullAndEmptyArrays": true } },
            doc! { "$project": {
                "name": 1,
                "available": 1,
                "price": 1,
                "description": 1,
                "user._id": 1,
                "user.name": 1,
                "user.email": 1,
                "category._id": 1,
                "category.name": 1,
            }},
        ]
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self))]
    async fn exists_by_name(&self, name: &str) -> DbResult<bool> {
        let count = self.collection.count_documents(doc! { "name": name }).await?;
        Ok(count > 0)
    }

    #[instrument(skip(self, product), fields(name = %product.name))]
    async fn create(&self, product: NewProduct) -> DbResult<Product> {
        let product = Product::from(product);
        self.collection
            .insert_one(&product)
            .await
            .map_err(|e| DbError::from_insert(e, "Product already exists"))?;

        tracing::info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> DbResult<u64> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    #[instrument(skip(self))]
    async fn list_populated(&self, skip: u64, limit: u64) -> DbResult<Vec<PopulatedProduct>> {
        let cursor = self
            .collection
            .aggregate(Self::populated_pipeline(skip, limit))
            .await?;
        let documents: Vec<Document> = cursor.try_collect().await?;

        documents
            .into_iter()
            .map(|document| bson::from_document(document).map_err(DbError::from))
            .collect()
    }

    #[instrument(skip(self, products), fields(count = products.len()))]
    async fn insert_many(&self, products: Vec<Product>) -> DbResult<()> {
        if products.is_empty() {
            return Ok(());
        }
        self.collection.insert_many(products).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_all(&self) -> DbResult<u64> {
        Ok(self.collection.delete_many(doc! {}).await?.deleted_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_slices_before_lookup() {
        let pipeline = MongoProductRepository::populated_pipeline(20, 10);
        assert_eq!(pipeline[0].get_i64("$skip").unwrap(), 20);
        assert_eq!(pipeline[1].get_i64("$limit").unwrap(), 10);
        assert!(pipeline[2].contains_key("$lookup"));
        assert!(pipeline.iter().all(|stage| !stage.contains_key("$sort")));
    }
}
