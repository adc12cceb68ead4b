use crate::db::postgres_service::PostgresService;
use crate::types::{
    account::{normalize_email, AccountCreate, AccountFlags},
    error::AppError,
};
use crate::utils::password::{hash_password, verify_password};
use chrono::Utc;
use entity::account::{ActiveModel as AccountActive, Entity as Account, Model as AccountModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn account_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(Account::find()
            .filter(entity::account::Column::Email.eq(email))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn get_account_by_id(&self, id: &Uuid) -> Result<AccountModel, AppError> {
        Ok(Account::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Account does not exist".into()))?)
    }

    pub async fn get_account_by_email(&self, email: &str) -> Result<AccountModel, AppError> {
        Ok(Account::find()
            .filter(entity::account::Column::Email.eq(email))
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Account does not exist".into()))?)
    }

    async fn phone_taken(&self, phone: &str) -> Result<bool, AppError> {
        Ok(Account::find()
            .filter(entity::account::Column::PhoneNumber.eq(phone))
            .count(&self.db)
            .await?
            > 0)
    }

    /// Shared creation path: normalize, pre-check uniqueness, hash, insert.
    /// The unique constraints on email and phone_number back the pre-checks
    /// at the storage level.
    async fn insert_account(
        &self,
        payload: AccountCreate,
        flags: AccountFlags,
    ) -> Result<AccountModel, AppError> {
        let email = normalize_email(&payload.email);
        if email.is_empty() {
            return Err(AppError::Validation("email must be set".to_string()));
        }
        if self.account_exists_by_email(&email).await? {
            return Err(AppError::AlreadyExists);
        }
        if let Some(phone) = payload.phone_number.as_deref() {
            if self.phone_taken(phone).await? {
                return Err(AppError::AlreadyExists);
            }
        }

        let hash = hash_password(&payload.password)?;
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let account = AccountActive {
            id: Set(Uuid::new_v4()),
            email: Set(email),
            first_name: Set(payload.first_name),
            last_name: Set(payload.last_name),
            phone_number: Set(payload.phone_number),
            password_hash: Set(hash),
            is_staff: Set(flags.is_staff),
            is_superuser: Set(flags.is_superuser),
            is_active: Set(flags.is_active),
            date_joined: Set(now),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(account)
    }

    /// Signup: create a regular account.
    pub async fn create_user(&self, payload: AccountCreate) -> Result<AccountModel, AppError> {
        let flags = payload.user_flags();
        self.insert_account(payload, flags).await
    }

    /// Create an account with both elevated flags set. Explicitly passing
    /// either as false is rejected before anything touches the database.
    pub async fn create_superuser(&self, payload: AccountCreate) -> Result<AccountModel, AppError> {
        let flags = payload.superuser_flags()?;
        self.insert_account(payload, flags).await
    }

    pub async fn set_password(&self, account_id: &Uuid, raw: &str) -> Result<(), AppError> {
        let account = self.get_account_by_id(account_id).await?;
        let mut am: AccountActive = account.into();
        am.password_hash = Set(hash_password(raw)?);
        am.update(&self.db).await?;
        Ok(())
    }

    pub async fn check_password(&self, account_id: &Uuid, raw: &str) -> Result<bool, AppError> {
        let account = self.get_account_by_id(account_id).await?;
        Ok(verify_password(raw, &account.password_hash)?)
    }

    pub async fn update_email(&self, account_id: Uuid, email: String) -> Result<(), AppError> {
        let email = normalize_email(&email);
        if email.is_empty() {
            return Err(AppError::Validation("email must be set".to_string()));
        }
        if self.account_exists_by_email(&email).await? {
            return Err(AppError::AlreadyExists);
        }
        let mut am: AccountActive = self.get_account_by_id(&account_id).await?.into();
        am.email = Set(email);
        Ok(am.update(&self.db).await.map(|_| ())?)
    }

    /// Soft delete: clear is_active instead of dropping the row.
    pub async fn deactivate(&self, account_id: &Uuid) -> Result<(), AppError> {
        let mut am: AccountActive = self.get_account_by_id(account_id).await?.into();
        am.is_active = Set(false);
        Ok(am.update(&self.db).await.map(|_| ())?)
    }
}
