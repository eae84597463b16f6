//! # showbill common library
//!
//! Shared code for the showbill listing service:
//! - Error type used across the workspace
//! - Configuration loading (CLI / env / TOML / defaults)
//! - Database bootstrap, migrations and record repositories
//! - Listing services: name search, show partitioning, venue grouping
//! - Form choice lists and time formatting helpers

pub mod choices;
pub mod config;
pub mod db;
pub mod error;
pub mod listing;
pub mod seed;
pub mod time;

pub use error::{Error, Result};
