use async_trait::async_trait;
use bson::oid::ObjectId;
use mongodb::{Collection, Database, bson::doc};
use shopfront_models::User;
use tracing::instrument;

use crate::USERS;
use crate::error::{DbError, DbResult};
use crate::repository::UserRepository;

pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<User>(USERS),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> DbResult<Option<User>> {
        Ok(self.collection.find_one(doc! { "email": email }).await?)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ObjectId) -> DbResult<Option<User>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn create(&self, user: User) -> DbResult<User> {
        self.collection
            .insert_one(&user)
            .await
            .map_err(|e| DbError::from_insert(e, "Email already exists"))?;

        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn mark_email_validated(&self, email: &str) -> DbResult<bool> {
        let result = self
            .collection
            .update_one(
                doc! { "email": email },
                doc! { "$set": { "emailValidated": true } },
            )
            .await?;
        Ok(result.matched_count > 0)
    }

    #[instrument(skip(self, users), fields(count = users.len()))]
    async fn insert_many(&self, users: Vec<User>) -> DbResult<()> {
        if users.is_empty() {
            return Ok(());
        }
        self.collection.insert_many(users).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_all(&self) -> DbResult<u64> {
        Ok(self.collection.delete_many(doc! {}).await?.deleted_count)
    }
}
