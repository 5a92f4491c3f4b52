use actix_web::{post, web};
use chrono::Utc;

use crate::config::EnvConfig;
use crate::crypto::CryptoContext;
use crate::types::error::AppError;
use crate::types::mail::{EmailDetails, RSendMail, SendEmail, SendMailRes};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::mail::send_email;

#[post("")]
async fn send(
    _req: actix_web::HttpRequest,
    config: web::Data<EnvConfig>,
    crypto: web::Data<CryptoContext>,
    body: web::Json<RSendMail>,
) -> ApiResult<SendMailRes> {
    let body = body.into_inner();
    let (recipient, message) = match (body.email, body.message) {
        (Some(e), Some(m)) => (e, m),
        _ => return Err(AppError::BadRequest("Missing email or message".to_string())),
    };

    let signature = crypto.authenticator.sign(&message);

    send_email(
        &config.mail,
        SendEmail {
            from: config.mail.from.clone(),
            to: vec![recipient.clone()],
            subject: "Secure Message with Signature".to_string(),
            text: Some(format!(
                "Message:\n{message}\n\nSignature:\n{signature}"
            )),
            ..Default::default()
        },
    )
    .await
    .map_err(AppError::Mail)?;

    Ok(ApiResponse::Ok(SendMailRes {
        email_details: EmailDetails {
            recipient,
            message,
            signed: true,
            time: Utc::now().to_rfc3339(),
            signature,
        },
    }))
}
