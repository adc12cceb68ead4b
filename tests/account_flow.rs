mod common;

use account_service::types::account::AccountCreate;
use account_service::types::error::AppError;
use common::{test_data, TestContext};

#[tokio::test]
async fn test_create_user_applies_defaults() {
    println!("\n\n[+] Running test: test_create_user_applies_defaults");
    let ctx = TestContext::new().await;

    let payload = test_data::sample_user();
    println!("[>] Creating user: {}", payload.email);
    let account = ctx.db.create_user(payload.clone()).await.unwrap();
    println!("[<] Created account {}", account.id);

    assert_eq!(account.email, payload.email);
    assert!(!account.is_staff);
    assert!(!account.is_superuser);
    assert!(account.is_active);
    assert!(account.phone_number.is_none());

    // Never the raw password, and verification must accept it.
    assert_ne!(account.password_hash, payload.password);
    assert!(ctx
        .db
        .check_password(&account.id, &payload.password)
        .await
        .unwrap());
    assert!(!ctx.db.check_password(&account.id, "wrong").await.unwrap());
    println!("[/] Test passed: defaults and hashing applied.");
}

#[tokio::test]
async fn test_create_user_respects_flag_overrides() {
    println!("\n\n[+] Running test: test_create_user_respects_flag_overrides");
    let ctx = TestContext::new().await;

    let payload = AccountCreate {
        is_staff: Some(true),
        is_active: Some(false),
        ..test_data::sample_user()
    };
    let account = ctx.db.create_user(payload).await.unwrap();

    assert!(account.is_staff);
    assert!(!account.is_superuser);
    assert!(!account.is_active);
    println!("[/] Test passed: overrides kept.");
}

#[tokio::test]
async fn test_create_user_normalizes_email() {
    println!("\n\n[+] Running test: test_create_user_normalizes_email");
    let ctx = TestContext::new().await;

    let payload = AccountCreate {
        email: "  John@EXAMPLE.Com ".to_string(),
        ..test_data::sample_user()
    };
    let account = ctx.db.create_user(payload).await.unwrap();

    assert_eq!(account.email, "John@example.com");
    println!("[/] Test passed: domain lowercased, local part kept.");
}

#[tokio::test]
async fn test_create_user_empty_email_rejected() {
    println!("\n\n[+] Running test: test_create_user_empty_email_rejected");
    let ctx = TestContext::new().await;

    let payload = AccountCreate {
        email: "".to_string(),
        ..test_data::sample_user()
    };
    let err = ctx.db.create_user(payload).await.unwrap_err();
    println!("[<] Got error: {err}");

    assert!(matches!(err, AppError::Validation(_)));
    println!("[/] Test passed: empty email is a validation error.");
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    println!("\n\n[+] Running test: test_duplicate_email_rejected");
    let ctx = TestContext::new().await;

    ctx.db.create_user(test_data::sample_user()).await.unwrap();
    let err = ctx
        .db
        .create_user(test_data::sample_user())
        .await
        .unwrap_err();
    println!("[<] Got error: {err}");

    assert!(matches!(err, AppError::AlreadyExists));
    println!("[/] Test passed: email collision surfaced.");
}

#[tokio::test]
async fn test_duplicate_phone_rejected() {
    println!("\n\n[+] Running test: test_duplicate_phone_rejected");
    let ctx = TestContext::new().await;

    let first = AccountCreate {
        phone_number: Some("+15550100".to_string()),
        ..test_data::sample_user()
    };
    ctx.db.create_user(first).await.unwrap();

    let second = AccountCreate {
        email: "other@example.com".to_string(),
        phone_number: Some("+15550100".to_string()),
        ..test_data::sample_user()
    };
    let err = ctx.db.create_user(second).await.unwrap_err();
    println!("[<] Got error: {err}");

    assert!(matches!(err, AppError::AlreadyExists));
    println!("[/] Test passed: phone collision surfaced.");
}

#[tokio::test]
async fn test_create_superuser_defaults_elevated() {
    println!("\n\n[+] Running test: test_create_superuser_defaults_elevated");
    let ctx = TestContext::new().await;

    let account = ctx
        .db
        .create_superuser(test_data::sample_user())
        .await
        .unwrap();

    assert!(account.is_staff);
    assert!(account.is_superuser);
    assert!(account.is_active);
    println!("[/] Test passed: superuser flags defaulted to true.");
}

#[tokio::test]
async fn test_create_superuser_rejects_contradiction() {
    println!("\n\n[+] Running test: test_create_superuser_rejects_contradiction");
    let ctx = TestContext::new().await;

    let payload = AccountCreate {
        is_staff: Some(false),
        ..test_data::sample_user()
    };
    let err = ctx.db.create_superuser(payload).await.unwrap_err();
    println!("[<] Got error: {err}");
    assert!(matches!(err, AppError::Validation(_)));

    // Nothing was persisted by the rejected call.
    assert!(!ctx
        .db
        .account_exists_by_email("test@example.com")
        .await
        .unwrap());
    println!("[/] Test passed: contradictory flags rejected before insert.");
}
