pub mod account;
pub mod language;
pub mod translation;
