pub mod account;
pub mod error;
pub mod mail;
pub mod token;
