use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

use crate::crypto::CryptoError;

#[derive(Debug, Error)]
pub enum AppError {
    // standard web stuffs
    #[error("not found")]
    NotFound,
    #[error("bad request: {0}")]
    BadRequest(String),

    // infra things
    #[error(transparent)]
    Db(sea_orm::DbErr),
    #[error(transparent)]
    Crypto(#[from] CryptoError),
    #[error("mail delivery failed: {0}")]
    Mail(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::from_db(e)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a, 'b> {
    error: &'a str,
    message: &'b str,
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Db(_) => "DB_ERROR",
            Self::Crypto(_) => "CRYPTO_ERROR",
            Self::Mail(_) => "MAIL_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
    fn from_db(err: DbErr) -> Self {
        match &err {
            DbErr::RecordNotFound(_) => AppError::NotFound,
            _ => AppError::Db(err),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Db(_) | Self::Crypto(_) | Self::Mail(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.kind(),
            message: &self.to_string(),
        })
    }
}
