//! Reusable test utilities:
//! - Mock ThinkTank API server
//! - Client builders pointed at the mock

// Allow unused code in test fixtures - they are utilities shared across test files
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod mock_api;

// Re-export commonly used items
pub use mock_api::{client_for, MockApiServer};
