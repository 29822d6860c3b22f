// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `color_kit`
//!
//! Immutable RGB colors, weighted blending of two colors, and smooth multi-stop color
//! gradients. Everything here is a pure function over [`RgbColor`] values, so results
//! are deterministic and the types are safe to share across threads.
//!
//! ## Colors
//!
//! An [`RgbColor`] holds three integer channels. They are conceptually in `0..=255`,
//! but they are *not* clamped on construction, which keeps intermediate arithmetic
//! lossless. Clamping only happens at explicit boundary conversions like
//! [`RgbColor::to_rgb8`].
//!
//! ```
//! use color_kit::RgbColor;
//!
//! let from_decimal = RgbColor::new(255, 128, 64);
//! let from_packed = RgbColor::from_packed(0xFF8040);
//! let from_hex = RgbColor::try_from_hex_str("FF8040").unwrap();
//!
//! assert_eq!(from_decimal, from_packed);
//! assert_eq!(from_packed, from_hex);
//! assert_eq!(from_hex.to_string(), "(255,128,64)");
//! ```
//!
//! Channel values are plain `i32`s, and the numeric conversion helpers used by the
//! arithmetic are internal:
//!
//! ```rust,compile_fail
//! use color_kit::StepAsF64; // Not exported!
//! ```
//!
//! ## Blending
//!
//! [`blend`] computes a weighted average of two colors. The weight of the first color
//! is `weight_a / (weight_a + weight_b)`, and each channel is rounded half away from
//! zero.
//!
//! ## Gradients
//!
//! Throughout this crate, `steps` is the number of *intermediate* colors generated
//! between two endpoints. So a segment always has `steps + 2` colors, the first being
//! the start color and the last being the end color.
//!
//! | Function               | Output length      |
//! | :--------------------- | :----------------- |
//! | [`gradient`]           | `steps + 2`        |
//! | [`gradient_with_len`]  | `len` (`len >= 2`) |
//! | [`gradient_multi`]     | `sum(steps) + N`   |
//! | [`gradient_uniform`]   | `steps * (N-1) + N`|
//!
//! ```
//! use color_kit::{RgbColor, gradient};
//!
//! let black = RgbColor::new(0, 0, 0);
//! let gray = RgbColor::new(100, 100, 100);
//! let colors = gradient(black, gray, 3);
//!
//! let reds: Vec<i32> = colors.iter().map(|it| it.red()).collect();
//! assert_eq!(reds, vec![0, 25, 50, 75, 100]);
//! ```
//!
//! Multi-stop gradients share the boundary color between adjacent segments, so it is
//! never duplicated in the output.
//!
//! ## Errors and logging
//!
//! Fallible operations return [`ColorKitResult`], whose error type [`ColorKitError`]
//! implements [`miette::Diagnostic`]. The engine emits [`tracing`] events; install a
//! subscriber with [`try_initialize_logging_global`] (or your own) to see them.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod color;
pub mod common;
pub mod decl_macros;
pub mod gradient;
pub mod log;

// Re-export.
pub use color::*;
pub use common::*;
pub use gradient::*;
pub use log::*;
