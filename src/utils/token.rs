use chrono::Utc;
use entity::account::Model as Account;
use jsonwebtoken::{encode, EncodingKey, Header};
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::types::error::AppError;
use crate::types::token::{Claims, TokenKind, TokenPair};

fn sign(account: &Account, jwt: &JwtConfig, kind: TokenKind, ttl_secs: i64) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: account.id,
        email: account.email.clone(),
        typ: kind,
        iat: now,
        exp: now + ttl_secs,
        jti: Uuid::new_v4(),
    };
    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt.secret.as_bytes()),
    )?)
}

/// Mint a refresh/access pair bound to the account. Signing only, nothing
/// is persisted; verification belongs to the consuming layer.
pub fn issue_tokens(account: &Account, jwt: &JwtConfig) -> Result<TokenPair, AppError> {
    Ok(TokenPair {
        refresh: sign(account, jwt, TokenKind::Refresh, jwt.refresh_ttl_secs)?,
        access: sign(account, jwt, TokenKind::Access, jwt.access_ttl_secs)?,
    })
}
