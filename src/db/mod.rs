pub mod account;
pub mod postgres_service;
