// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The [`RgbColor`] value type and the ways to construct it:
//! - decimal channels, [`RgbColor::new`]
//! - a packed `0x??RRGGBB` integer, [`RgbColor::from_packed`]
//! - a `RRGGBB` hex string, [`RgbColor::try_from_hex_str`] (see [`parse_hex_color`])

// Attach.
mod channel;
mod hex_color_parser;
mod rgb_color;

// Re-export.
pub use channel::*;
pub use hex_color_parser::*;
pub use rgb_color::*;
