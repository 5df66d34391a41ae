//! Parameter resolution: flag value, environment fallback, default.

use crate::error::{ManifestError, ManifestResult};

/// Resolve a parameter from its sources in priority order.
///
/// A non-empty flag value wins, then a non-empty environment value, then the
/// default. The default may itself be empty; required fields are checked
/// separately with [`require`].
pub fn resolve(flag: &str, env_value: Option<&str>, default: &str) -> String {
    if !flag.is_empty() {
        return flag.to_string();
    }
    if let Some(value) = env_value {
        if !value.is_empty() {
            return value.to_string();
        }
    }
    default.to_string()
}

/// Resolve a parameter against a process environment variable.
pub fn resolve_env(flag: &str, var: &str) -> String {
    let env_value = std::env::var(var).ok();
    resolve(flag, env_value.as_deref(), "")
}

/// Check that a required parameter resolved to a non-empty value.
pub fn require(flag_name: &str, value: &str) -> ManifestResult<String> {
    if value.is_empty() {
        Err(ManifestError::MissingFlag(flag_name.to_string()))
    } else {
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_env_and_default() {
        assert_eq!(resolve("from-flag", Some("from-env"), "fallback"), "from-flag");
    }

    #[test]
    fn test_empty_flag_falls_back_to_env() {
        assert_eq!(resolve("", Some("from-env"), "fallback"), "from-env");
    }

    #[test]
    fn test_empty_env_falls_back_to_default() {
        assert_eq!(resolve("", Some(""), "fallback"), "fallback");
        assert_eq!(resolve("", None, "fallback"), "fallback");
    }

    #[test]
    fn test_everything_empty_resolves_empty() {
        assert_eq!(resolve("", None, ""), "");
    }

    #[test]
    fn test_require_accepts_non_empty() {
        assert_eq!(require("name", "nginx").unwrap(), "nginx");
    }

    #[test]
    fn test_require_rejects_empty() {
        let err = require("name", "").unwrap_err();
        assert_eq!(err.to_string(), "the --name flag is required");
    }
}
