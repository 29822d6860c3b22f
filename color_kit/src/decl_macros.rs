// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// A wrapper for `pretty_assertions::assert_eq!` macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Shorthand to create an [`RgbColor`](crate::RgbColor) from decimal channels.
///
/// ```
/// use color_kit::{RgbColor, rgb_color};
///
/// assert_eq!(rgb_color!(1, 2, 3), RgbColor::new(1, 2, 3));
/// ```
#[macro_export]
macro_rules! rgb_color {
    ($red:expr, $green:expr, $blue:expr $(,)?) => {
        $crate::RgbColor::new($red, $green, $blue)
    };
}
