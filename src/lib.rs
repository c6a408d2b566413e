//! Review Console - client-side resource stores for the employee review service.
//!
//! Turns asynchronous remote CRUD calls on employees, reviews, feedback and
//! the login session into normalized, observable local state guarded by a
//! single-flight rule.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
