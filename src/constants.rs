//! Application-wide constants for endpoints, headers, and default values
//!
//! This module organizes constants by category to provide a single source
//! of truth for the API contract shared by the client and the demo driver.

/// API service constants
pub mod api {
    /// Production base URL, path prefix included
    pub const DEFAULT_BASE_URL: &str = "https://paparazzime.cloud/api";

    /// Header carrying the API key on authenticated requests
    pub const API_KEY_HEADER: &str = "x-api-key";

    /// Environment variable holding the API key
    pub const API_KEY_ENV: &str = "THINKTANK_API_KEY";

    /// Environment variable overriding the base URL
    pub const BASE_URL_ENV: &str = "THINKTANK_API_URL";
}

/// Default argument values mirroring the server-side defaults
pub mod defaults {
    /// Default role when generating an API key
    pub const AGENT_ROLE: &str = "researcher";

    /// Default message priority
    pub const MESSAGE_PRIORITY: &str = "normal";

    /// Default number of messages to fetch
    pub const MESSAGE_LIMIT: u32 = 50;

    /// Default analytics window in days
    pub const ANALYTICS_DAYS: u32 = 7;

    /// Default number of available tasks to fetch
    pub const TASK_LIMIT: u32 = 10;
}
