//! HTTP communication module for the ThinkTank API
//!
//! This module handles all HTTP communication with the remote ThinkTank
//! service. Every operation is a single request/response round trip that
//! returns the decoded JSON payload unchanged.
//!
//! # Communication Pattern
//!
//! 1. Client formats `base_url + endpoint` (query string included)
//! 2. Client attaches the JSON content type and, on authenticated calls,
//!    the `x-api-key` header
//! 3. Response body is decoded as JSON and handed back verbatim
//!
//! Application-level failures travel inside the payload (`status` /
//! `success` field conventions) and are interpreted by the caller, not
//! by this module. Transport failures and non-2xx responses are errors.

pub mod client;
pub mod operations;

pub use client::ThinkTankClient;
