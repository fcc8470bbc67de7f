pub mod api;
pub mod app;
pub mod config;
pub mod container;
pub mod domain;
pub mod infrastructure;
pub mod opentelemetry;
pub mod services;

use include_dir::{Dir, include_dir};

#[cfg(test)]
mod tests;

pub const MIGRATIONS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/migration");
