//! Configuration for the allocation engine.

use allot_math::nnls::NnlsConfig;
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Default damping constant ε.
pub const DEFAULT_DAMPING: f64 = 1e-6;

/// Configuration for the allocation engine.
///
/// Controls the solver; the monetary parameters live in
/// [`AllocationOptions`](super::AllocationOptions).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Damping constant ε of the NNLS solve.
    ///
    /// Also the resolution of the vote counts handed to apportionment: a weight
    /// `w` becomes `round(w / ε)` votes.
    pub damping: f64,

    /// Tolerance and iteration limit of the NNLS solve.
    pub nnls: NnlsConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            nnls: NnlsConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Creates a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the damping constant.
    #[must_use]
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Sets the NNLS configuration.
    #[must_use]
    pub fn with_nnls(mut self, nnls: NnlsConfig) -> Self {
        self.nnls = nnls;
        self
    }

    /// Sets the NNLS iteration limit.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.nnls = self.nnls.with_max_iterations(max_iterations);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigurationError> {
        // Votes are round(w / ε) for w ≤ 1, so ε below ~1e-15 would overflow them.
        if !(self.damping.is_finite() && self.damping >= 1e-15 && self.damping < 1.0) {
            return Err(ConfigurationError::InvalidDamping {
                damping: self.damping,
            });
        }
        match self.nnls.tolerance {
            Some(tolerance) if !(tolerance.is_finite() && tolerance >= 0.0) => {
                Err(ConfigurationError::InvalidTolerance { tolerance })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.damping, 1e-6);
        assert_eq!(config.nnls, NnlsConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::new()
            .with_damping(1e-8)
            .with_max_iterations(500);
        assert_eq!(config.damping, 1e-8);
        assert_eq!(config.nnls.max_iterations, Some(500));
    }

    #[test]
    fn test_invalid_damping() {
        for damping in [0.0, -1e-6, f64::NAN, f64::INFINITY, 1.0, 1e-20] {
            assert!(matches!(
                EngineConfig::new().with_damping(damping).validate(),
                Err(ConfigurationError::InvalidDamping { .. })
            ));
        }
    }

    #[test]
    fn test_invalid_tolerance() {
        for tolerance in [-1e-9, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut config = EngineConfig::new();
            config.nnls = config.nnls.with_tolerance(tolerance);
            assert!(matches!(
                config.validate(),
                Err(ConfigurationError::InvalidTolerance { .. })
            ));
        }

        let mut config = EngineConfig::new();
        config.nnls = config.nnls.with_tolerance(0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_serde_partial() {
        let config: EngineConfig = serde_json::from_str(r#"{"damping":1e-7}"#).unwrap();
        assert_eq!(config.damping, 1e-7);
        assert_eq!(config.nnls, NnlsConfig::default());

        let json = serde_json::to_string(&EngineConfig::default()).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EngineConfig::default());
    }
}
