// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod color_kit_error;
pub(crate) mod common_math;

// Re-export.
pub use color_kit_error::*;
pub(crate) use common_math::*;
