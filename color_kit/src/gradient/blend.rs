// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::{trace, warn};

use crate::{ColorKitError, ColorKitResult, RgbColor,
            common::{ChannelAsF64, RoundToChannel}};

/// Blends two colors based on their respective weights.
///
/// The blend ratio is `weight_a / (weight_a + weight_b)`, the share of `color_a` in the
/// result. Each channel is `round(a * ratio + b * (1 - ratio))`, rounding half away from
/// zero. The result is not clamped.
///
/// Negative weights are allowed as long as the sum isn't zero. They extrapolate past
/// the endpoints.
///
/// # Errors
///
/// - [`ColorKitError::NonFiniteBlendWeights`] if a weight (or their sum) is `NaN` or
///   infinite.
/// - [`ColorKitError::BlendWeightsSumToZero`] if `weight_a + weight_b == 0`.
#[allow(clippy::float_cmp)]
pub fn blend(
    color_a: RgbColor,
    color_b: RgbColor,
    weight_a: f64,
    weight_b: f64,
) -> ColorKitResult<RgbColor> {
    let total_weight = weight_a + weight_b;

    if !weight_a.is_finite() || !weight_b.is_finite() || !total_weight.is_finite() {
        warn!(weight_a, weight_b, "blend rejected, non finite weights");
        return Err(ColorKitError::NonFiniteBlendWeights { weight_a, weight_b });
    }

    if total_weight == 0.0 {
        warn!(weight_a, weight_b, "blend rejected, weights sum to zero");
        return Err(ColorKitError::BlendWeightsSumToZero { weight_a, weight_b });
    }

    let ratio = weight_a / total_weight;
    let it = RgbColor::from_channel_fn(|channel| {
        let a = color_a.channel(channel).as_f64();
        let b = color_b.channel(channel).as_f64();
        (a * ratio + b * (1.0 - ratio)).round_to_channel()
    });

    trace!(%color_a, %color_b, ratio, result = %it, "blend");
    Ok(it)
}

mod rgb_color_blend_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl RgbColor {
        /// Method form of [`blend()`], with `self` as the first color.
        ///
        /// # Errors
        ///
        /// See [`blend()`].
        pub fn blend_with(
            self,
            other: RgbColor,
            self_weight: f64,
            other_weight: f64,
        ) -> ColorKitResult<RgbColor> {
            blend(self, other, self_weight, other_weight)
        }
    }
}
