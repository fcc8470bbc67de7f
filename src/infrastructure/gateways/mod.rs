pub mod notification;
pub mod translation;
