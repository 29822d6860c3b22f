// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB color representation with unclamped integer channels.

use std::{fmt::{Display, Formatter},
          str::FromStr};

use strum::IntoEnumIterator;

use super::{Channel, ChannelValue, parse_hex_color};
use crate::common::{ClampToByte, ColorKitError, ColorKitResult};

/// An immutable RGB color.
///
/// The channels are private, so once constructed a color never changes. No constructor
/// validates or clamps its input; see [`RgbColor::to_rgb8`] for the explicit conversion
/// into a fixed width pixel format.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RgbColor {
    red: ChannelValue,
    green: ChannelValue,
    blue: ChannelValue,
}

impl RgbColor {
    #[must_use]
    pub const fn new(red: ChannelValue, green: ChannelValue, blue: ChannelValue) -> Self {
        Self { red, green, blue }
    }

    /// Bits 16..=23 are red, 8..=15 are green, 0..=7 are blue. Anything above bit 23 is
    /// ignored, so `0xAAFF8040` and `0xFF8040` produce the same color.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn from_packed(packed: u32) -> Self {
        Self::new(
            ((packed >> 16) & 0xFF) as ChannelValue,
            ((packed >> 8) & 0xFF) as ChannelValue,
            (packed & 0xFF) as ChannelValue,
        )
    }

    /// Parses the first 6 characters of `input` as `RRGGBB` hex digits. Anything after
    /// them is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ColorKitError::InvalidHexColorFormat`] if `input` is shorter than 6
    /// characters, or if any of the first 6 characters is not a hex digit.
    pub fn try_from_hex_str(input: &str) -> ColorKitResult<RgbColor> {
        match parse_hex_color(input) {
            Ok((_, color)) => Ok(color),
            Err(_) => Err(ColorKitError::InvalidHexColorFormat {
                input: input.to_string(),
            }),
        }
    }

    /// Builds a color by asking `channel_fn` for each channel, in red, green, blue order.
    #[must_use]
    pub fn from_channel_fn(mut channel_fn: impl FnMut(Channel) -> ChannelValue) -> Self {
        let red = channel_fn(Channel::Red);
        let green = channel_fn(Channel::Green);
        let blue = channel_fn(Channel::Blue);
        Self::new(red, green, blue)
    }

    #[must_use]
    pub const fn red(&self) -> ChannelValue { self.red }

    #[must_use]
    pub const fn green(&self) -> ChannelValue { self.green }

    #[must_use]
    pub const fn blue(&self) -> ChannelValue { self.blue }

    #[must_use]
    pub const fn channel(&self, channel: Channel) -> ChannelValue {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    #[must_use]
    pub const fn into_channels(self) -> [ChannelValue; 3] { [self.red, self.green, self.blue] }

    /// `true` if every channel is within `0..=255`.
    #[must_use]
    pub fn is_in_gamut(&self) -> bool {
        Channel::iter().all(|channel| (0..=255).contains(&self.channel(channel)))
    }

    /// Clamps each channel into `0..=255`.
    #[must_use]
    pub fn to_rgb8(&self) -> [u8; 3] {
        [
            self.red.clamp_to_u8(),
            self.green.clamp_to_u8(),
            self.blue.clamp_to_u8(),
        ]
    }

    /// Packs the clamped channels into `0x00RRGGBB`. For in gamut colors this is the
    /// inverse of [`RgbColor::from_packed`].
    #[must_use]
    pub fn to_packed(&self) -> u32 {
        let [red, green, blue] = self.to_rgb8();
        (u32::from(red) << 16) | (u32::from(green) << 8) | u32::from(blue)
    }

    /// Formats the clamped channels as uppercase `RRGGBB`. For in gamut colors this is
    /// the inverse of [`RgbColor::try_from_hex_str`].
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        let [red, green, blue] = self.to_rgb8();
        format!("{red:02X}{green:02X}{blue:02X}")
    }
}

/// Formats as `(R,G,B)` with decimal channels and no padding.
impl Display for RgbColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.red, self.green, self.blue)
    }
}

impl From<(ChannelValue, ChannelValue, ChannelValue)> for RgbColor {
    fn from((red, green, blue): (ChannelValue, ChannelValue, ChannelValue)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<[ChannelValue; 3]> for RgbColor {
    fn from([red, green, blue]: [ChannelValue; 3]) -> Self { Self::new(red, green, blue) }
}

impl From<u32> for RgbColor {
    fn from(packed: u32) -> Self { Self::from_packed(packed) }
}

impl FromStr for RgbColor {
    type Err = ColorKitError;

    fn from_str(input: &str) -> Result<Self, Self::Err> { Self::try_from_hex_str(input) }
}

impl TryFrom<&str> for RgbColor {
    type Error = ColorKitError;

    fn try_from(input: &str) -> Result<Self, Self::Error> { Self::try_from_hex_str(input) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, rgb_color};
    use test_case::test_case;

    #[test_case(1, 2, 3)]
    #[test_case(0, 0, 0)]
    #[test_case(255, 255, 255)]
    #[test_case(-20, 300, 1024; "out of range passes through")]
    fn test_new(red: ChannelValue, green: ChannelValue, blue: ChannelValue) {
        let value = RgbColor::new(red, green, blue);
        assert_eq2!((value.red(), value.green(), value.blue()), (red, green, blue));
        assert_eq2!(value.into_channels(), [red, green, blue]);
    }

    #[test_case(0xFF8040, (255, 128, 64))]
    #[test_case(0x00_0000, (0, 0, 0))]
    #[test_case(0xFF_FFFF, (255, 255, 255))]
    #[test_case(0xAAFF_8040, (255, 128, 64); "bits above 23 ignored")]
    #[test_case(0xFFFF_FFFF, (255, 255, 255); "all bits set")]
    fn test_from_packed(packed: u32, expected: (ChannelValue, ChannelValue, ChannelValue)) {
        assert_eq2!(RgbColor::from_packed(packed), RgbColor::from(expected));
        assert_eq2!(RgbColor::from(packed), RgbColor::from(expected));
    }

    #[test]
    fn test_try_from_hex_str() {
        // Valid.
        {
            let value = RgbColor::try_from_hex_str("FF8040").unwrap();
            assert_eq2!(value, RgbColor::from_packed(0xFF8040));
        }

        // Valid, trailing chars ignored.
        {
            let value = RgbColor::try_from_hex_str("ff8040zz").unwrap();
            assert_eq2!(value, rgb_color!(255, 128, 64));
        }

        // Invalid.
        {
            let value = RgbColor::try_from_hex_str("FF804");
            assert_eq2!(
                value,
                Err(ColorKitError::InvalidHexColorFormat {
                    input: "FF804".into()
                })
            );
        }
    }

    #[test]
    fn test_from_str_and_try_from() {
        let parsed: RgbColor = "0A0B0C".parse().unwrap();
        assert_eq2!(parsed, rgb_color!(10, 11, 12));
        assert_eq2!(RgbColor::try_from("0A0B0C"), Ok(parsed));
        assert!("0A0B0X".parse::<RgbColor>().is_err());
    }

    #[test]
    fn test_hex_string_and_packed_agree() {
        for packed in [0x000000_u32, 0x123456, 0xABCDEF, 0xFF8040, 0xFFFFFF] {
            let hex = format!("{packed:06X}");
            assert_eq2!(
                RgbColor::try_from_hex_str(&hex).unwrap(),
                RgbColor::from_packed(packed)
            );
            assert_eq2!(RgbColor::from_packed(packed).to_hex_string(), hex);
            assert_eq2!(RgbColor::from_packed(packed).to_packed(), packed);
        }
    }

    #[test_case(rgb_color!(255, 128, 64), "(255,128,64)")]
    #[test_case(rgb_color!(0, 0, 0), "(0,0,0)")]
    #[test_case(rgb_color!(-1, 7, 300), "(-1,7,300)")]
    fn test_display(color: RgbColor, expected: &str) {
        assert_eq2!(color.to_string(), expected);
    }

    #[test]
    fn test_channel_accessor() {
        let color = rgb_color!(1, 2, 3);
        let rebuilt = RgbColor::from_channel_fn(|channel| color.channel(channel));
        assert_eq2!(rebuilt, color);
        assert_eq2!(color.channel(Channel::Green), 2);
    }

    #[test]
    fn test_gamut_and_clamping() {
        let in_gamut = rgb_color!(0, 128, 255);
        assert!(in_gamut.is_in_gamut());
        assert_eq2!(in_gamut.to_rgb8(), [0, 128, 255]);

        let out_of_gamut = rgb_color!(-5, 128, 999);
        assert!(!out_of_gamut.is_in_gamut());
        assert_eq2!(out_of_gamut.to_rgb8(), [0, 128, 255]);
        assert_eq2!(out_of_gamut.to_hex_string(), "0080FF");
        assert_eq2!(out_of_gamut.to_packed(), 0x0080FF);
    }
}
