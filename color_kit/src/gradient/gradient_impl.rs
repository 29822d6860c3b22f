// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Gradient generation between two or more color stops.
//!
//! `steps` always counts the *intermediate* colors of a segment, so a segment holds
//! `steps + 2` colors and the interpolation fraction of index `i` is `i / (steps + 1)`.
//! Multi-stop gradients are built by concatenating segments, dropping the first color
//! of every segment after the first one since it equals the end of the previous segment:
//!
//! ```text
//! stops:  A         B              C
//! steps:    [ 2 ]      [   3   ]
//! output: A  a1  a2  B  b1  b2  b3  C     len = (2 + 3) + 3
//! ```

use smallvec::{SmallVec, smallvec};
use tracing::{debug, trace, warn};

use crate::{ChannelValue, ColorKitError, ColorKitResult, RgbColor,
            common::{ChannelAsF64, RoundToChannel, StepAsF64}};

/// These are sized to allow for stack allocation rather than heap allocation. If for some
/// reason these are exceeded, then they will [`smallvec::SmallVec::spilled`] over into
/// the heap.
pub mod sizing {
    use super::{RgbColor, SmallVec};

    pub type GradientColors = SmallVec<[RgbColor; MAX_INLINE_COLORS]>;
    const MAX_INLINE_COLORS: usize = 16;

    pub type VecStepCounts = SmallVec<[usize; MAX_INLINE_SEGMENTS]>;
    const MAX_INLINE_SEGMENTS: usize = 8;
}
pub use sizing::*;

/// Upper bound on the number of colors [`gradient_with_len()`], [`gradient_multi()`] and
/// [`gradient_uniform()`] will generate.
pub const MAX_GRADIENT_LEN: usize = 1 << 20;

/// Generates a gradient from `start` to `end` with `steps` intermediate colors.
///
/// The result has `steps + 2` colors. The first is `start`, the last is `end`, and each
/// channel of the intermediate color at index `i` is
/// `round(start + (end - start) * i / (steps + 1))`, rounding half away from zero. With
/// `steps == 0` the result is just `[start, end]`.
///
/// Every color is allocated, so `steps` is not bounded here. Use [`gradient_with_len()`]
/// when the length comes from untrusted input.
///
/// ```
/// use color_kit::{RgbColor, gradient};
///
/// let colors = gradient(RgbColor::new(0, 0, 0), RgbColor::new(10, 10, 10), 3);
/// let reds: Vec<i32> = colors.iter().map(RgbColor::red).collect();
/// assert_eq!(reds, vec![0, 3, 5, 8, 10]);
/// ```
#[must_use]
pub fn gradient(start: RgbColor, end: RgbColor, steps: usize) -> GradientColors {
    let denominator = steps.saturating_add(1).as_f64();

    let mut acc = GradientColors::with_capacity(steps.saturating_add(2).min(MAX_GRADIENT_LEN));
    acc.push(start);
    for index in 1..=steps {
        acc.push(interpolate(start, end, index, denominator));
    }
    acc.push(end);

    debug!(%start, %end, steps, len = acc.len(), "gradient");
    acc
}

/// Generates a gradient from `start` to `end` that has exactly `len` colors, including
/// both endpoints. This is the same as [`gradient()`] with `len - 2` steps.
///
/// # Errors
///
/// - [`ColorKitError::InvalidGradientLength`] if `len < 2`, since such a gradient can't
///   hold both `start` and `end`.
/// - [`ColorKitError::GradientTooLong`] if `len > MAX_GRADIENT_LEN`.
pub fn gradient_with_len(
    start: RgbColor,
    end: RgbColor,
    len: usize,
) -> ColorKitResult<GradientColors> {
    let Some(steps) = len.checked_sub(2) else {
        warn!(len, "gradient rejected, length too short");
        return Err(ColorKitError::InvalidGradientLength { len });
    };
    if len > MAX_GRADIENT_LEN {
        warn!(len, max = MAX_GRADIENT_LEN, "gradient rejected, too long");
        return Err(ColorKitError::GradientTooLong {
            max: MAX_GRADIENT_LEN,
        });
    }
    Ok(gradient(start, end, steps))
}

/// Generates a gradient through all the `stops`, with `steps[i]` intermediate colors
/// between `stops[i]` and `stops[i + 1]`.
///
/// The result has `sum(steps) + stops.len()` colors. Each boundary stop appears exactly
/// once, and slicing the result at the stops reproduces [`gradient()`] for every
/// segment.
///
/// # Errors
///
/// - [`ColorKitError::TooFewColorStops`] if there are fewer than 2 stops.
/// - [`ColorKitError::StepCountMismatch`] if `steps.len() != stops.len() - 1`.
/// - [`ColorKitError::GradientTooLong`] if the result would have more than
///   [`MAX_GRADIENT_LEN`] colors.
#[tracing::instrument(level = "debug", skip_all, fields(stops = stops.len()))]
pub fn gradient_multi(stops: &[RgbColor], steps: &[usize]) -> ColorKitResult<GradientColors> {
    check_enough_stops(stops)?;

    let expected = stops.len() - 1;
    if steps.len() != expected {
        warn!(expected, actual = steps.len(), "gradient rejected, step count mismatch");
        return Err(ColorKitError::StepCountMismatch {
            stops: stops.len(),
            expected,
            actual: steps.len(),
        });
    }

    let Some(total_len) = steps
        .iter()
        .try_fold(stops.len(), |acc, &it| acc.checked_add(it))
        .filter(|&it| it <= MAX_GRADIENT_LEN)
    else {
        warn!(max = MAX_GRADIENT_LEN, "gradient rejected, too long");
        return Err(ColorKitError::GradientTooLong {
            max: MAX_GRADIENT_LEN,
        });
    };
    let mut acc = GradientColors::with_capacity(total_len);
    acc.push(stops[0]);

    for (segment_index, (pair, &segment_steps)) in stops.windows(2).zip(steps).enumerate() {
        let segment = gradient(pair[0], pair[1], segment_steps);
        trace!(segment_index, segment_steps, segment_len = segment.len(), "segment");
        // The first color of this segment is the last color already in `acc`.
        acc.extend(segment.into_iter().skip(1));
    }

    debug!(len = acc.len(), "gradient_multi");
    Ok(acc)
}

/// Same as [`gradient_multi()`] with `steps` intermediate colors between every pair of
/// adjacent stops.
///
/// # Errors
///
/// - [`ColorKitError::TooFewColorStops`] if there are fewer than 2 stops.
/// - [`ColorKitError::GradientTooLong`] if the result would have more than
///   [`MAX_GRADIENT_LEN`] colors.
pub fn gradient_uniform(stops: &[RgbColor], steps: usize) -> ColorKitResult<GradientColors> {
    check_enough_stops(stops)?;
    let step_counts: VecStepCounts = smallvec![steps; stops.len() - 1];
    gradient_multi(stops, &step_counts)
}

fn check_enough_stops(stops: &[RgbColor]) -> ColorKitResult<()> {
    if stops.len() < 2 {
        warn!(count = stops.len(), "gradient rejected, too few color stops");
        return Err(ColorKitError::TooFewColorStops { count: stops.len() });
    }
    Ok(())
}

/// The color at `index / denominator` of the way from `start` to `end`. Multiplies by
/// `index` before dividing, so exact ties like `2.5` stay exact.
fn interpolate(start: RgbColor, end: RgbColor, index: usize, denominator: f64) -> RgbColor {
    let index = index.as_f64();
    RgbColor::from_channel_fn(|channel| {
        let from: ChannelValue = start.channel(channel);
        let to: ChannelValue = end.channel(channel);
        let delta = to.as_f64() - from.as_f64();
        (from.as_f64() + delta * index / denominator).round_to_channel()
    })
}

mod rgb_color_gradient_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl RgbColor {
        /// Method form of [`gradient()`], starting at `self`.
        #[must_use]
        pub fn gradient_to(self, end: RgbColor, steps: usize) -> GradientColors {
            gradient(self, end, steps)
        }
    }
}
