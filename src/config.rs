//! Loading and validating [`AnalysisConfig`].
//!
//! Sources, in order of precedence when using [`AnalysisConfig::from_env`]:
//!
//! 1. process environment
//! 2. a `.env` file in the working directory (via `dotenvy`)
//! 3. built-in lab defaults
//!
//! | variable | field |
//! |---|---|
//! | `AERO_AOA_CUTOFF_DEG` | `aoa_cutoff_deg` |
//! | `AERO_WEIGHT_CL` / `AERO_WEIGHT_CM` | `rmse_weights` |
//! | `AERO_TOP_N` | `top_n` |
//! | `AERO_FREESTREAM_VELOCITY` | `wake.freestream_velocity` |
//! | `AERO_AIR_DENSITY` | `wake.air_density` |
//! | `AERO_SPAN` | `wake.span` |
//! | `AERO_REFERENCE_AREA` | `wake.reference_area` |

use std::str::FromStr;

use crate::aero::wake::validate_wake_config;
use crate::domain::AnalysisConfig;
use crate::error::AeroError;

impl AnalysisConfig {
    /// Build a config from the environment (and `.env`), falling back to defaults.
    pub fn from_env() -> Result<Self, AeroError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AeroError> {
        let mut config = Self::default();

        override_with(&lookup, "AERO_AOA_CUTOFF_DEG", &mut config.aoa_cutoff_deg)?;
        override_with(&lookup, "AERO_WEIGHT_CL", &mut config.rmse_weights.cl)?;
        override_with(&lookup, "AERO_WEIGHT_CM", &mut config.rmse_weights.cm)?;
        override_with(&lookup, "AERO_TOP_N", &mut config.top_n)?;
        override_with(&lookup, "AERO_FREESTREAM_VELOCITY", &mut config.wake.freestream_velocity)?;
        override_with(&lookup, "AERO_AIR_DENSITY", &mut config.wake.air_density)?;
        override_with(&lookup, "AERO_SPAN", &mut config.wake.span)?;
        override_with(&lookup, "AERO_REFERENCE_AREA", &mut config.wake.reference_area)?;

        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, AeroError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| AeroError::config(format!("invalid config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field is usable.
    pub fn validate(&self) -> Result<(), AeroError> {
        if !self.aoa_cutoff_deg.is_finite() {
            return Err(AeroError::config(format!(
                "aoa_cutoff_deg must be finite, got {}",
                self.aoa_cutoff_deg
            )));
        }
        let w = self.rmse_weights;
        if !(w.cl.is_finite() && w.cm.is_finite() && w.cl >= 0.0 && w.cm >= 0.0) {
            return Err(AeroError::config(format!(
                "rmse_weights must be finite and non-negative, got cl={}, cm={}",
                w.cl, w.cm
            )));
        }
        if w.cl + w.cm == 0.0 {
            return Err(AeroError::config("rmse_weights must not both be zero"));
        }
        if self.top_n == 0 {
            return Err(AeroError::config("top_n must be > 0"));
        }
        validate_wake_config(&self.wake)
    }
}

fn override_with<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    slot: &mut T,
) -> Result<(), AeroError>
where
    T::Err: std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return Ok(());
    };
    *slot = raw
        .trim()
        .parse()
        .map_err(|e| AeroError::config(format!("{key}='{raw}' is not valid: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error::ErrorKind;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_lookup_gives_lab_defaults() {
        let config = AnalysisConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AnalysisConfig::default());
        assert_eq!(config.aoa_cutoff_deg, 16.0);
        assert_eq!(config.rmse_weights.cl, 0.6);
        assert_eq!(config.rmse_weights.cm, 0.4);
        assert_eq!(config.top_n, 10);
    }

    #[test]
    fn lookup_overrides_fields() {
        let config = AnalysisConfig::from_lookup(lookup_from(&[
            ("AERO_AOA_CUTOFF_DEG", "12"),
            ("AERO_WEIGHT_CL", " 0.5 "),
            ("AERO_WEIGHT_CM", "0.5"),
            ("AERO_TOP_N", "3"),
            ("AERO_SPAN", "0.5"),
        ]))
        .unwrap();
        assert_eq!(config.aoa_cutoff_deg, 12.0);
        assert_eq!(config.rmse_weights.cl, 0.5);
        assert_eq!(config.top_n, 3);
        assert_eq!(config.wake.span, 0.5);
        assert_eq!(config.wake.air_density, 1.225);
    }

    #[test]
    fn unparsable_value_is_a_config_error() {
        let err = AnalysisConfig::from_lookup(lookup_from(&[("AERO_TOP_N", "ten")])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
        assert!(err.message().contains("AERO_TOP_N"));
    }

    #[test]
    fn negative_weight_is_rejected() {
        let err = AnalysisConfig::from_lookup(lookup_from(&[("AERO_WEIGHT_CM", "-0.4")])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = AnalysisConfig::from_json_str(r#"{ "aoa_cutoff_deg": 14.0, "wake": { "span": 0.6 } }"#).unwrap();
        assert_eq!(config.aoa_cutoff_deg, 14.0);
        assert_eq!(config.wake.span, 0.6);
        assert_eq!(config.wake.freestream_velocity, 11.36);
        assert_eq!(config.rmse_weights.cl, 0.6);
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(AnalysisConfig::from_json_str("{ aoa_cutoff_deg: }").is_err());
        assert!(AnalysisConfig::from_json_str(r#"{ "top_n": 0 }"#).is_err());
    }
}
