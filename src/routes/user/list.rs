use actix_web::{get, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserEntry;

// The response is the stored blobs verbatim: ciphertext token as `name`,
// hash token as `password`.
#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<Vec<UserEntry>> {
    let users = db.list_users().await?;

    Ok(ApiResponse::Ok(
        users
            .into_iter()
            .map(|u| UserEntry {
                name: u.name_encrypted,
                password: u.password_hash,
            })
            .collect(),
    ))
}
