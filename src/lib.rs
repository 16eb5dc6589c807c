//! Universal search service for the Saku finance platform
//!
//! Accepts one user query over HTTP and fans it out, in parallel, to the
//! expense, budget, category, bill, payment-method and friendship services,
//! each with its own filtering rules, under a single wall-clock timeout.
//! Any subset of domains may fail or stall without failing the request.

pub mod application;
pub mod domain;
pub mod infrastructure;
