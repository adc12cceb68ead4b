use serde::{Deserialize, Serialize};

use crate::types::error::AppError;

/// Creation payload for the account factory. Flag fields left as `None`
/// take the factory defaults.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AccountCreate {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub is_staff: Option<bool>,
    #[serde(default)]
    pub is_superuser: Option<bool>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

#[derive(Clone, Copy, Debug)]
pub struct AccountFlags {
    pub is_staff: bool,
    pub is_superuser: bool,
    pub is_active: bool,
}

impl AccountCreate {
    /// Flags for a regular account: anything not overridden defaults to
    /// an unprivileged, active user.
    pub fn user_flags(&self) -> AccountFlags {
        AccountFlags {
            is_staff: self.is_staff.unwrap_or(false),
            is_superuser: self.is_superuser.unwrap_or(false),
            is_active: self.is_active.unwrap_or(true),
        }
    }

    /// Flags for a superuser. Explicitly passing either elevated flag as
    /// false is a contradiction and rejected.
    pub fn superuser_flags(&self) -> Result<AccountFlags, AppError> {
        if self.is_staff == Some(false) {
            return Err(AppError::Validation(
                "superuser must have is_staff=true".to_string(),
            ));
        }
        if self.is_superuser == Some(false) {
            return Err(AppError::Validation(
                "superuser must have is_superuser=true".to_string(),
            ));
        }
        Ok(AccountFlags {
            is_staff: true,
            is_superuser: true,
            is_active: self.is_active.unwrap_or(true),
        })
    }
}

/// Trim, then lowercase the domain part. The local part keeps its casing,
/// only everything after the last `@` is case-insensitive.
pub fn normalize_email(raw: &str) -> String {
    let email = raw.trim();
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
        None => email.to_string(),
    }
}
