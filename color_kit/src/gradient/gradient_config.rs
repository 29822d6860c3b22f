// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A serializable description of a multi-stop gradient, so gradients can live in
//! settings files next to the rest of an app's configuration.
//!
//! ```json
//! { "stops": ["FF0000", "00FF00", "0000FF"], "steps": 4 }
//! { "stops": ["FF0000", "00FF00", "0000FF"], "steps": [2, 6] }
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::{GradientColors, gradient_multi, gradient_uniform};
use crate::{ColorKitError, ColorKitResult, RgbColor};

/// Color stops are `RRGGBB` hex strings, parsed with [`RgbColor::try_from_hex_str`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradientConfig {
    pub stops: Vec<String>,
    pub steps: GradientSteps,
}

/// Intermediate color counts, either one count for every segment or one count per
/// segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GradientSteps {
    Uniform(usize),
    PerSegment(Vec<usize>),
}

impl GradientConfig {
    #[must_use]
    pub fn new(stops: impl IntoIterator<Item = impl Into<String>>, steps: GradientSteps) -> Self {
        Self {
            stops: stops.into_iter().map(Into::into).collect(),
            steps,
        }
    }

    /// # Errors
    ///
    /// Returns [`ColorKitError::InvalidGradientConfig`] if `json` is not a valid config.
    pub fn try_from_json_str(json: &str) -> ColorKitResult<Self> {
        serde_json::from_str(json).map_err(|error| ColorKitError::InvalidGradientConfig {
            reason: error.to_string(),
        })
    }

    /// # Errors
    ///
    /// Returns [`ColorKitError::InvalidGradientConfig`] if serialization fails.
    pub fn try_to_json_string(&self) -> ColorKitResult<String> {
        serde_json::to_string(self).map_err(|error| ColorKitError::InvalidGradientConfig {
            reason: error.to_string(),
        })
    }

    /// # Errors
    ///
    /// Returns [`ColorKitError::InvalidHexColorFormat`] for the first stop that isn't a
    /// valid hex color.
    pub fn try_parse_stops(&self) -> ColorKitResult<SmallVec<[RgbColor; 8]>> {
        self.stops
            .iter()
            .map(String::as_str)
            .map(RgbColor::try_from_hex_str)
            .collect()
    }

    /// Parses the stops and generates the gradient they describe.
    ///
    /// # Errors
    ///
    /// Any error from [`GradientConfig::try_parse_stops`], [`gradient_multi()`], or
    /// [`gradient_uniform()`].
    pub fn build(&self) -> ColorKitResult<GradientColors> {
        let stops = self.try_parse_stops()?;
        debug!(stops = stops.len(), steps = ?self.steps, "building gradient from config");
        match &self.steps {
            GradientSteps::Uniform(steps) => gradient_uniform(&stops, *steps),
            GradientSteps::PerSegment(steps) => gradient_multi(&stops, steps),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MAX_GRADIENT_LEN, assert_eq2, rgb_color};

    #[test]
    fn test_deserialize_uniform() {
        let config =
            GradientConfig::try_from_json_str(r#"{ "stops": ["000000", "646464"], "steps": 3 }"#)
                .unwrap();
        assert_eq2!(config, GradientConfig::new(["000000", "646464"], GradientSteps::Uniform(3)));

        let result = config.build().unwrap();
        let reds: Vec<i32> = result.iter().map(RgbColor::red).collect();
        assert_eq2!(reds, vec![0, 25, 50, 75, 100]);
    }

    #[test]
    fn test_deserialize_per_segment() {
        let config = GradientConfig::try_from_json_str(
            r#"{ "stops": ["000000", "640000", "646400"], "steps": [1, 3] }"#,
        )
        .unwrap();
        assert_eq2!(config.steps, GradientSteps::PerSegment(vec![1, 3]));

        let result = config.build().unwrap();
        assert_eq2!(
            result,
            gradient_multi(
                &[rgb_color!(0, 0, 0), rgb_color!(100, 0, 0), rgb_color!(100, 100, 0)],
                &[1, 3]
            )
            .unwrap()
        );
    }

    #[test]
    fn test_json_round_trip() {
        let config = GradientConfig::new(["FF0000", "0000FF"], GradientSteps::PerSegment(vec![5]));
        let json = config.try_to_json_string().unwrap();
        assert_eq2!(GradientConfig::try_from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_json() {
        let result = GradientConfig::try_from_json_str(r#"{ "stops": ["000000"] }"#);
        assert!(matches!(
            result,
            Err(ColorKitError::InvalidGradientConfig { .. })
        ));

        let result = GradientConfig::try_from_json_str(r#"{ "stops": [], "steps": -1 }"#);
        assert!(matches!(
            result,
            Err(ColorKitError::InvalidGradientConfig { .. })
        ));
    }

    #[test]
    fn test_invalid_stop() {
        let config = GradientConfig::new(["000000", "nope!!"], GradientSteps::Uniform(1));
        assert_eq2!(
            config.build(),
            Err(ColorKitError::InvalidHexColorFormat {
                input: "nope!!".into()
            })
        );
    }

    #[test]
    fn test_build_propagates_gradient_errors() {
        let config = GradientConfig::new(["000000", "FFFFFF"], GradientSteps::PerSegment(vec![]));
        assert!(matches!(
            config.build(),
            Err(ColorKitError::StepCountMismatch { .. })
        ));

        let config = GradientConfig::new(["000000"], GradientSteps::Uniform(2));
        assert_eq2!(config.build(), Err(ColorKitError::TooFewColorStops { count: 1 }));
    }

    #[test]
    fn test_build_rejects_huge_step_counts() {
        let config = GradientConfig::try_from_json_str(
            r#"{ "stops": ["000000", "FFFFFF"], "steps": [18446744073709551615] }"#,
        )
        .unwrap();
        assert_eq2!(
            config.build(),
            Err(ColorKitError::GradientTooLong {
                max: MAX_GRADIENT_LEN
            })
        );

        let config = GradientConfig::new(
            ["000000", "FFFFFF", "000000"],
            GradientSteps::Uniform(MAX_GRADIENT_LEN),
        );
        assert_eq2!(
            config.build(),
            Err(ColorKitError::GradientTooLong {
                max: MAX_GRADIENT_LEN
            })
        );
    }
}
