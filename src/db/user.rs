use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, user::DBUserCreate};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set, TransactionTrait};

impl PostgresService {
    pub async fn list_users(&self) -> Result<Vec<UserModel>, AppError> {
        Ok(User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// Registration: insert the opaque pair. The store assigns the id.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<i32, AppError> {
        let txn = self.db.begin().await?;

        let inserted = UserActive {
            name_encrypted: Set(payload.name_encrypted),
            password_hash: Set(payload.password_hash),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(inserted.id)
    }
}
