pub mod config;
pub mod constants;
pub mod http;

// Re-export commonly used types
pub use config::ClientConfig;
pub use http::ThinkTankClient;
