use actix_web::{post, web};
use std::sync::Arc;

use crate::crypto::CryptoContext;
use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserCreate, UserEntry, UsersRes};

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    crypto: web::Data<CryptoContext>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UsersRes> {
    let name_encrypted = crypto.codec.encrypt(&body.name);
    let password_hash = crypto.hasher.hash(&body.password)?;

    db.create_user(DBUserCreate {
        name_encrypted,
        password_hash,
    })
    .await?;

    // Legacy contract: registration answers with the full record list.
    let users = db.list_users().await?;
    Ok(ApiResponse::Ok(UsersRes {
        users: users
            .into_iter()
            .map(|u| UserEntry {
                name: u.name_encrypted,
                password: u.password_hash,
            })
            .collect(),
    }))
}
