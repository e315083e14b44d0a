use thiserror::Error;

/// An environment variable required by the application is not set.
#[derive(Debug, Error)]
#[error("Missing environment variable: {0}")]
pub struct MissingEnvVarError(pub String);

/// Reads an environment variable, returning a structured error if it's missing.
///
/// This is a thin wrapper around `std::env::var` that provides a more
/// ergonomic and specific error type for missing variables.
///
/// # Arguments
/// * `name` - The name of the environment variable to read.
pub fn get_env_var(name: &str) -> Result<String, MissingEnvVarError> {
    std::env::var(name).map_err(|_| MissingEnvVarError(name.to_string()))
}

/// Reads an environment variable, falling back to a default when unset.
pub fn get_env_var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_var_is_a_structured_error() {
        let err = get_env_var("THIS_VAR_SHOULD_NOT_EXIST_12345").unwrap_err();
        assert!(err.to_string().contains("THIS_VAR_SHOULD_NOT_EXIST_12345"));
    }

    #[test]
    fn default_applies_when_unset() {
        let v = get_env_var_or("THIS_VAR_SHOULD_NOT_EXIST_12345", "fallback");
        assert_eq!(v, "fallback");
    }
}
