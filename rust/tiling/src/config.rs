// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tiling configuration, optionally loaded from environment variables.

/// Tolerance used for every equality and containment check
pub const DEFAULT_EPSILON: f64 = 1e-3;

/// Partitioner configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilingConfig {
    /// Tolerance for coordinate comparisons.
    pub epsilon: f64,
    /// Check coverage and non-overlap of every partition before returning it.
    pub verify_output: bool,
}

impl TilingConfig {
    pub fn new() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            verify_output: cfg!(debug_assertions),
        }
    }

    /// Use a custom tolerance; non-positive or non-finite values keep the default.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = sanitize_epsilon(epsilon);
        self
    }

    pub fn with_verification(mut self, verify_output: bool) -> Self {
        self.verify_output = verify_output;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// - `PANEL_TILING_EPSILON`: comparison tolerance (default `1e-3`)
    /// - `PANEL_TILING_VERIFY`: `1`/`true`/`yes`/`on` to verify every partition
    pub fn from_env() -> Self {
        let defaults = Self::new();
        Self {
            epsilon: std::env::var("PANEL_TILING_EPSILON")
                .ok()
                .and_then(|v| v.trim().parse::<f64>().ok())
                .map(sanitize_epsilon)
                .unwrap_or(defaults.epsilon),
            verify_output: std::env::var("PANEL_TILING_VERIFY")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.verify_output),
        }
    }
}

impl Default for TilingConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn sanitize_epsilon(epsilon: f64) -> f64 {
    if epsilon.is_finite() && epsilon > 0.0 {
        epsilon
    } else {
        DEFAULT_EPSILON
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TilingConfig::default();
        assert_eq!(config.epsilon, DEFAULT_EPSILON);
        assert_eq!(config.verify_output, cfg!(debug_assertions));
    }

    #[test]
    fn test_with_epsilon_rejects_bad_values() {
        assert_eq!(TilingConfig::new().with_epsilon(1e-6).epsilon, 1e-6);
        assert_eq!(TilingConfig::new().with_epsilon(0.0).epsilon, DEFAULT_EPSILON);
        assert_eq!(TilingConfig::new().with_epsilon(-1.0).epsilon, DEFAULT_EPSILON);
        assert_eq!(
            TilingConfig::new().with_epsilon(f64::NAN).epsilon,
            DEFAULT_EPSILON
        );
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" on "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
