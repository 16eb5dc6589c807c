//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Fetchers: Outbound clients for the six domain services
//! - Http: Inbound search API

pub mod config;
pub mod fetchers;
pub mod http;
