use std::env::var;

/// Get the value of ENV var
///
/// Only when:
/// - It is set
/// - It is not empty
pub fn non_empty_env_var(var_name: &str) -> Option<String> {
    var(var_name).ok().filter(|value| !value.is_empty())
}

/// Get the value of ENV var, or a default
///
/// Same rules as [`non_empty_env_var`]
pub fn env_var_or_else(var_name: &str, or_else: fn() -> String) -> String {
    non_empty_env_var(var_name).unwrap_or_else(or_else)
}
