//! Shared types, errors, and configuration for Nongsan.
//!
//! This crate provides common types used across all other crates:
//! - Money kernel with whole-đồng rounding
//! - Typed IDs for type-safe entity references
//! - Calendar periods for payroll and depreciation
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult, ErrorCategory};
