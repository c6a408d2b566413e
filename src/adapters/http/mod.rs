//! HTTP adapter - reqwest client for the review service's REST API.
//!
//! `HttpRemoteClient` implements every Remote Resource Client port.

mod client;
mod dto;

pub use client::{HttpClientConfig, HttpRemoteClient};
