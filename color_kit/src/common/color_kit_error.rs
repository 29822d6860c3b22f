// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors for color construction, blending, and gradient generation. See
//! [`ColorKitError`] for the failure modes.

/// Result type returned by every fallible operation in this crate.
pub type ColorKitResult<T> = Result<T, ColorKitError>;

/// Errors from color parsing, [`blend()`], and the gradient functions.
///
/// | Variant                   | Cause                                                   |
/// | :------------------------ | :------------------------------------------------------ |
/// | [`InvalidHexColorFormat`] | Fewer than 6 chars, or a non hex digit in the first 6   |
/// | [`BlendWeightsSumToZero`] | `weight_a + weight_b == 0`                              |
/// | [`NonFiniteBlendWeights`] | A weight is `NaN` or infinite                           |
/// | [`InvalidGradientLength`] | A total length below 2 can't hold both endpoints        |
/// | [`TooFewColorStops`]      | A multi-stop gradient needs at least 2 stops            |
/// | [`StepCountMismatch`]     | There must be exactly one step count per segment        |
/// | [`GradientTooLong`]       | The output would exceed [`MAX_GRADIENT_LEN`] colors     |
/// | [`InvalidGradientConfig`] | A [`GradientConfig`] could not be deserialized          |
///
/// [`blend()`]: crate::blend
/// [`BlendWeightsSumToZero`]: Self::BlendWeightsSumToZero
/// [`GradientConfig`]: crate::GradientConfig
/// [`GradientTooLong`]: Self::GradientTooLong
/// [`MAX_GRADIENT_LEN`]: crate::MAX_GRADIENT_LEN
/// [`InvalidGradientConfig`]: Self::InvalidGradientConfig
/// [`InvalidGradientLength`]: Self::InvalidGradientLength
/// [`InvalidHexColorFormat`]: Self::InvalidHexColorFormat
/// [`NonFiniteBlendWeights`]: Self::NonFiniteBlendWeights
/// [`StepCountMismatch`]: Self::StepCountMismatch
/// [`TooFewColorStops`]: Self::TooFewColorStops
#[derive(Debug, Clone, PartialEq, thiserror::Error, miette::Diagnostic)]
pub enum ColorKitError {
    #[error("Invalid hex color format: '{input}'")]
    #[diagnostic(
        code(color_kit::parse::invalid_hex),
        help("Expected 6 hex digits in the form `RRGGBB`, eg: `FF8040`")
    )]
    InvalidHexColorFormat { input: String },

    #[error("Blend weights sum to zero ({weight_a} + {weight_b})")]
    #[diagnostic(
        code(color_kit::blend::zero_total_weight),
        help("At least one of the two weights must be non-zero")
    )]
    BlendWeightsSumToZero { weight_a: f64, weight_b: f64 },

    #[error("Blend weights must be finite ({weight_a}, {weight_b})")]
    #[diagnostic(code(color_kit::blend::non_finite_weight))]
    NonFiniteBlendWeights { weight_a: f64, weight_b: f64 },

    #[error("Gradient length {len} is too short to hold both endpoints")]
    #[diagnostic(
        code(color_kit::gradient::invalid_length),
        help("Use a length of at least 2, or use `gradient()` with an intermediate step count")
    )]
    InvalidGradientLength { len: usize },

    #[error("A multi-stop gradient needs at least 2 color stops, got {count}")]
    #[diagnostic(code(color_kit::gradient::too_few_stops))]
    TooFewColorStops { count: usize },

    #[error("{stops} color stops need {expected} step counts, got {actual}")]
    #[diagnostic(
        code(color_kit::gradient::step_count_mismatch),
        help("Provide one step count for each pair of adjacent color stops")
    )]
    StepCountMismatch {
        stops: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Gradient would have more than {max} colors")]
    #[diagnostic(
        code(color_kit::gradient::too_long),
        help("Use fewer intermediate steps per segment")
    )]
    GradientTooLong { max: usize },

    #[error("Invalid gradient config: {reason}")]
    #[diagnostic(code(color_kit::config::invalid))]
    InvalidGradientConfig { reason: String },
}
