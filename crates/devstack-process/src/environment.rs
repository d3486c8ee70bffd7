//! Overlay environment construction.
//!
//! Children receive the parent's environment plus a small set of fixed
//! overrides. The merge is a pure function over plain maps so it can be
//! tested without spawning anything; the spawn path hands the merged map
//! to the child as its entire environment.

use std::collections::HashMap;
use std::env;

/// Environment mapping handed to a child process.
pub type EnvMap = HashMap<String, String>;

/// Captures the parent process's current environment.
pub fn parent_environment() -> EnvMap {
    env::vars().collect()
}

/// Merges `overrides` over `base` into a fresh map.
///
/// Overrides win on key collision; `base` is never mutated. Every variable
/// present in `base` and not explicitly overridden survives the merge, so
/// the overlay is additive.
pub fn overlay(base: &EnvMap, overrides: &EnvMap) -> EnvMap {
    let mut merged = base.clone();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> EnvMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_overlay_is_additive() {
        let base = env(&[("HOME", "/home/dev"), ("PATH", "/usr/bin")]);
        let overrides = env(&[("PORT", "8080")]);

        let merged = overlay(&base, &overrides);

        assert_eq!(merged.get("HOME").map(String::as_str), Some("/home/dev"));
        assert_eq!(merged.get("PATH").map(String::as_str), Some("/usr/bin"));
        assert_eq!(merged.get("PORT").map(String::as_str), Some("8080"));
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_overrides_win_on_collision() {
        let base = env(&[("PORT", "3000")]);
        let overrides = env(&[("PORT", "8080")]);

        let merged = overlay(&base, &overrides);

        assert_eq!(merged.get("PORT").map(String::as_str), Some("8080"));
    }

    #[test]
    fn test_base_is_never_mutated() {
        let base = env(&[("PORT", "3000")]);
        let overrides = env(&[("PORT", "8080"), ("FLASK_DEBUG", "1")]);

        let _ = overlay(&base, &overrides);

        assert_eq!(base.get("PORT").map(String::as_str), Some("3000"));
        assert!(!base.contains_key("FLASK_DEBUG"));
    }

    #[test]
    fn test_empty_overrides_copy_base() {
        let base = env(&[("HOME", "/home/dev")]);

        let merged = overlay(&base, &EnvMap::new());

        assert_eq!(merged, base);
    }
}
