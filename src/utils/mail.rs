use log::{debug, info};
use reqwest::{Client, ClientBuilder};
use std::time::Instant;

use entity::account::Model as Account;

use crate::config::MailConfig;
use crate::types::error::AppError;
use crate::types::mail::SendEmail;

pub async fn send_email(cfg: &MailConfig, email: SendEmail) -> Result<String, AppError> {
    let payload = serde_json::to_string(&email)
        .map_err(|e| AppError::Mail(format!("serialize email failed: {e}")))?;

    let client: Client = ClientBuilder::new()
        .user_agent("account-service/1.0 (+reqwest)")
        .tcp_nodelay(true)
        .pool_idle_timeout(std::time::Duration::from_secs(30))
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .map_err(|e| AppError::Mail(format!("build client failed: {e}")))?;

    debug!("[mail] -> POST {}", cfg.endpoint);
    debug!("[mail] body bytes: {}", payload.len());

    let t0 = Instant::now();
    let res = client
        .post(&cfg.endpoint)
        .bearer_auth(&cfg.api_key) // do NOT log the key
        .header("Content-Type", "application/json")
        .body(payload)
        .send()
        .await
        .map_err(|e| AppError::Mail(format!("send failed: {e}")))?;

    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|e| AppError::Mail(format!("read body failed: {e}")))?;

    info!("[mail] <- status: {status} in {} ms", t0.elapsed().as_millis());

    if status.is_success() {
        Ok(body)
    } else {
        Err(AppError::Mail(format!("mail API error: HTTP {status}: {body}")))
    }
}

/// Send a plain-text message to the account's address.
pub async fn notify(
    cfg: &MailConfig,
    account: &Account,
    subject: &str,
    text: &str,
) -> Result<String, AppError> {
    send_email(
        cfg,
        SendEmail {
            from: cfg.from.clone(),
            to: vec![account.email.clone()],
            subject: subject.to_string(),
            text: Some(text.to_string()),
            ..Default::default()
        },
    )
    .await
}
