//! Infrastructure layer module
//!
//! This module contains the infrastructure adapters and external integrations:
//! - PostgREST artist store (reqwest)
//! - Configuration management
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod logging;
pub mod postgrest;
