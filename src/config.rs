/// Environment variable overriding the evaluation-service base URL.
pub const API_URL_ENV: &str = "RISKPAY_API_URL";

/// Default base URL for local development, matching the service's default
/// bind address.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
