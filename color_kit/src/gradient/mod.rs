// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Blending and gradient generation.
//!
//! ## Organization:
//! - `blend` - weighted average of two colors
//! - `gradient_impl` - two-color, fixed length, and multi-stop gradients
//! - `gradient_config` - serde description of a multi-stop gradient

// Attach sources.
pub mod blend;
pub mod gradient_config;
pub mod gradient_impl;

// Re-export.
pub use blend::*;
pub use gradient_config::*;
pub use gradient_impl::*;
