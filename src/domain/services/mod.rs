pub mod account;
pub mod translation;
