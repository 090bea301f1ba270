use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// `${VAR}` or `$VAR`; names follow the shell rules
    static ref ENV_VAR_PATTERN: Regex =
        Regex::new(r"\$(?:\{([A-Za-z_][A-Za-z0-9_]*)\}|([A-Za-z_][A-Za-z0-9_]*))").unwrap();
}

/// Expand `$VAR` and `${VAR}` references from the process environment.
///
/// Unset variables are left in place so the unexpanded path shows up in
/// later error messages.
pub fn expand_env_vars(input: &str) -> String {
    expand_env_vars_with(input, |name| std::env::var(name).ok())
}

/// Expand `$VAR` and `${VAR}` references using `lookup`.
pub fn expand_env_vars_with<F>(input: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if !input.contains('$') {
        return input.to_string();
    }

    ENV_VAR_PATTERN
        .replace_all(input, |caps: &Captures| {
            let name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or_default();

            lookup(name).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
