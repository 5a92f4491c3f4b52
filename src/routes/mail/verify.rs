use actix_web::{post, web};

use crate::crypto::CryptoContext;
use crate::types::mail::{RVerifySignature, VerifySignatureRes};
use crate::types::response::{ApiResponse, ApiResult};

// A mismatch is a normal answer here, not an error: always 200 with a bool.
#[post("")]
async fn verify(
    _req: actix_web::HttpRequest,
    crypto: web::Data<CryptoContext>,
    body: web::Json<RVerifySignature>,
) -> ApiResult<VerifySignatureRes> {
    let is_valid = crypto.authenticator.verify(&body.message, &body.signature);

    Ok(ApiResponse::Ok(VerifySignatureRes { is_valid }))
}
