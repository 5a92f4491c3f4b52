use actix_web::{post, web};
use std::sync::Arc;

use crate::crypto::CryptoContext;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RReveal, UserEntry, UsersRes};

const NOT_YOURS: &str = "Not yours";

/// Decrypts the name of every record whose hash matches the supplied
/// password; everything else comes back masked. The caller proves
/// knowledge of a record's password, nothing more.
#[post("")]
async fn reveal(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    crypto: web::Data<CryptoContext>,
    body: web::Json<RReveal>,
) -> ApiResult<UsersRes> {
    let body = body.into_inner();
    let password = match body.global_password.or(body.password) {
        Some(p) => p,
        None => return Err(AppError::BadRequest("Missing password".to_string())),
    };

    let users = db.list_users().await?;

    let mut output = Vec::with_capacity(users.len());
    for user in users {
        if crypto.hasher.verify(&password, &user.password_hash) {
            let name = crypto.codec.decrypt(&user.name_encrypted)?;
            output.push(UserEntry {
                name,
                password: password.clone(),
            });
        } else {
            output.push(UserEntry {
                name: NOT_YOURS.to_string(),
                password: NOT_YOURS.to_string(),
            });
        }
    }

    Ok(ApiResponse::Ok(UsersRes { users: output }))
}
