/// Environment variable pointing at an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "LOBO_CONFIG_PATH";

/// Prefix for environment overrides, e.g. `LOBO__API__PAGE_SIZE=50`.
pub const ENV_PREFIX: &str = "LOBO";

/// Both load balancer APIs reject page sizes above this.
pub const MAX_PAGE_SIZE: i32 = 400;

/// Ceiling for `api.max_concurrent_calls`.
pub const MAX_CONCURRENT_CALLS: usize = 1000;

pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const DEFAULT_PAGE_SIZE: i32 = 100;
pub const DEFAULT_MAX_CONCURRENT_CALLS: usize = 10;
pub const DEFAULT_CALL_TIMEOUT_SECS: u64 = 30;

/// Example configuration
pub const DEFAULT_CONFIG: &str = r#"
# Logging configuration
[log]
# Level can be "error", "warn", "info", "debug", or "trace"
level = "warn"

# Load balancer API configuration
[api]
# Records requested per describe call (1 to 400)
page_size = 100

# Upper bound on provider calls in flight at once (1 to 1000)
max_concurrent_calls = 10

# Seconds before a single provider call is abandoned
call_timeout_secs = 30
"#;
