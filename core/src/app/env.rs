use std::env;

/// Load environment variables from a `.env` file in the current directory or its ancestors, if one exists. Variables
/// already set in the environment take precedence.
pub fn load_dotenv() {
  let _ = dotenvy::dotenv(); // Ignore error ok: .env file is not required.
}

/// Returns the value of environment variable `key`, or `None` when it is not set or not valid unicode.
pub fn var_opt(key: &str) -> Option<String> {
  env::var(key).ok()
}

/// Returns the value of environment variable `key`, or `default` when it is not set or not valid unicode.
pub fn var_or(key: &str, default: impl Into<String>) -> String {
  var_opt(key).unwrap_or_else(|| default.into())
}
