use crate::config::MailConfig;
use crate::types::mail::SendEmail;
use log::{debug, info, warn};
use reqwest::{Client, ClientBuilder};
use std::time::Instant;

pub async fn send_email(config: &MailConfig, email: SendEmail) -> Result<String, String> {
    // Pre-serialize for logging + request body
    let payload = serde_json::to_string(&email)
        .map_err(|e| format!("serialize email failed: {e}"))?;

    info!("[mail] -> POST {}", config.endpoint);
    debug!("[mail] payload: {payload}");

    let client: Client = ClientBuilder::new()
        .user_agent("namevault/0.1 (+reqwest)")
        .tcp_nodelay(true)
        .pool_idle_timeout(std::time::Duration::from_secs(30))
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .map_err(|e| format!("build client failed: {e}"))?;

    let t0 = Instant::now();
    let res = client
        .post(&config.endpoint)
        .bearer_auth(&config.api_key) // do NOT log the key
        .header("Content-Type", "application/json")
        .body(payload)
        .send()
        .await
        .map_err(|e| format!("send failed: {e}"))?;
    let dt = t0.elapsed();

    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|e| format!("read body failed: {e}"))?;

    info!("[mail] <- status: {status} in {} ms", dt.as_millis());
    debug!("[mail] response body: {body}");

    if status.is_success() {
        Ok(body)
    } else {
        warn!("[mail] delivery rejected: HTTP {status}");
        Err(format!("Resend API error: HTTP {status}: {body}"))
    }
}
