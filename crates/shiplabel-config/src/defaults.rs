//! Default backend origin and environment keys.
//!
//! # Design
//! - Keep the fixed origin in one place so both clients agree on it.
//! - Environment keys are shared by the CLI flags and compile-time UI builds.

/// Origin of the hosted label backend used when no override is supplied.
pub const DEFAULT_API_BASE_URL: &str = "https://logistics-backend-hu3k.onrender.com";

/// Environment variable overriding the backend origin.
pub const ENV_API_URL: &str = "SHIPLABEL_API_URL";

/// Environment variable selecting where downloaded labels are written.
pub const ENV_OUTPUT_DIR: &str = "SHIPLABEL_OUTPUT_DIR";
