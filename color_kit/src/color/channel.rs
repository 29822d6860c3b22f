// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumCount, EnumIter};

/// The integer type of a single color channel. Channels are conceptually in `0..=255`
/// but are never clamped, so negative or large values flow through arithmetic as is.
pub type ChannelValue = i32;

/// Names one of the three channels of an [`RgbColor`](crate::RgbColor). Iterate them
/// in `Red, Green, Blue` order with [`strum::IntoEnumIterator::iter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
pub enum Channel {
    Red,
    Green,
    Blue,
}
