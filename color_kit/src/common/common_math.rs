// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Numeric conversions used by the blend and gradient arithmetic. The casts are
//! intentional, so the clippy cast lints are silenced in exactly one place.

use crate::ChannelValue;

/// Rounds a floating point channel value half away from zero, then converts it to a
/// [`ChannelValue`].
///
/// Negative ties round down, eg: `-0.5` becomes `-1`, where round-half-up would give
/// `0`. Non-negative values round the same way under both rules.
pub trait RoundToChannel {
    /// Values outside the [`ChannelValue`] range saturate, and `NaN` becomes `0`.
    #[must_use]
    fn round_to_channel(self) -> ChannelValue;
}

impl RoundToChannel for f64 {
    #[allow(clippy::cast_possible_truncation)]
    fn round_to_channel(self) -> ChannelValue { self.round() as ChannelValue }
}

/// Lossless widening of a [`ChannelValue`] for floating point arithmetic.
pub trait ChannelAsF64 {
    #[must_use]
    fn as_f64(self) -> f64;
}

impl ChannelAsF64 for ChannelValue {
    fn as_f64(self) -> f64 { f64::from(self) }
}

/// Lossless widening of a step index or count for floating point arithmetic. Step
/// counts beyond `u32::MAX` are not meaningful for a color gradient.
pub trait StepAsF64 {
    #[must_use]
    fn as_f64(self) -> f64;
}

impl StepAsF64 for usize {
    #[allow(clippy::cast_precision_loss)]
    fn as_f64(self) -> f64 { self as f64 }
}

/// Clamps a [`ChannelValue`] into `0..=255`.
pub trait ClampToByte {
    #[must_use]
    fn clamp_to_u8(self) -> u8;
}

impl ClampToByte for ChannelValue {
    fn clamp_to_u8(self) -> u8 { u8::try_from(self.clamp(0, 255)).unwrap_or(u8::MAX) }
}
