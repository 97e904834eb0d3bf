pub mod background;
pub mod cache;
pub mod commands;
pub mod config;
pub mod data_provider;
pub mod error;
pub mod fixtures;
pub mod formatting;
pub mod series;
pub mod team_abbrev;
pub mod types;

#[cfg(any(test, feature = "development"))]
pub mod dev;
