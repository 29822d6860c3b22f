// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into an [`RgbColor`].
//! The hex color string has the format `RRGGBB`, eg: `FF0000` for red. There is no `#`
//! prefix. Anything after the sixth character is returned as the unparsed remainder.

use nom::{IResult, Parser, bytes::complete::take_while_m_n, combinator::map_res};

use crate::{ChannelValue, RgbColor};

/// Parse function that generates an [`RgbColor`] from a valid hex color string.
///
/// # Errors
///
/// Returns a [`nom::Err`] if any of the first 6 characters is not an ASCII hex digit, or
/// if the input is shorter than 6 characters.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbColor> {
    let (remainder, (red, green, blue)) = (
        helper_fns::parse_hex_seg,
        helper_fns::parse_hex_seg,
        helper_fns::parse_hex_seg,
    )
        .parse(input)?;
    Ok((remainder, RgbColor::new(red, green, blue)))
}

/// Helper functions to match and parse hex digits.
mod helper_fns {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    /// This function is used by [`map_res`] and it returns a [Result], not [`IResult`].
    pub fn parse_str_to_hex_num(input: &str) -> Result<ChannelValue, std::num::ParseIntError> {
        ChannelValue::from_str_radix(input, 16)
    }

    /// As long as this returns `true` items will be taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    pub fn parse_hex_seg(input: &str) -> IResult<&str, ChannelValue> {
        map_res(
            take_while_m_n(2, 2, match_is_hex_digit),
            parse_str_to_hex_num,
        )
        .parse(input)
    }
}
