//! Pixel values and the channel layouts they are shifted out in.
use smart_leds::White;

pub use smart_leds::RGBW;

/// One stored pixel. Three channel formats simply never transmit the white channel.
pub type RGBW8 = RGBW<u8>;

/// Build a pixel from one value per channel, in red, green, blue, white order.
pub const fn color(r: u8, g: u8, b: u8, w: u8) -> RGBW8 {
    RGBW {
        r,
        g,
        b,
        a: White(w),
    }
}

pub const OFF: RGBW8 = color(0, 0, 0, 0);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Red,
    Green,
    Blue,
    White,
}

/// Channel set and the order in which the channels go out on the wire.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelFormat {
    Rgb,
    Grb,
    Rgbw,
    Grbw,
}

impl PixelFormat {
    pub const fn wire_order(self) -> &'static [Channel] {
        const R: Channel = Channel::Red;
        const G: Channel = Channel::Green;
        const B: Channel = Channel::Blue;
        const W: Channel = Channel::White;
        match self {
            PixelFormat::Rgb => &[R, G, B],
            PixelFormat::Grb => &[G, R, B],
            PixelFormat::Rgbw => &[R, G, B, W],
            PixelFormat::Grbw => &[G, R, B, W],
        }
    }

    pub const fn channels(self) -> usize {
        self.wire_order().len()
    }

    pub const fn has_white(self) -> bool {
        self.channels() == 4
    }
}

pub fn channel_value(pixel: RGBW8, channel: Channel) -> u8 {
    match channel {
        Channel::Red => pixel.r,
        Channel::Green => pixel.g,
        Channel::Blue => pixel.b,
        Channel::White => pixel.a.0,
    }
}

/// Scale every channel of a pixel by a brightness value.
///
/// Same arithmetic as [smart_leds::brightness]: 255 leaves the pixel untouched and 0 always yields
/// an unlit pixel.
pub fn scale(pixel: RGBW8, brightness: u8) -> RGBW8 {
    let scale_channel = |c: u8| ((c as u16 * (brightness as u16 + 1)) >> 8) as u8;
    color(
        scale_channel(pixel.r),
        scale_channel(pixel.g),
        scale_channel(pixel.b),
        scale_channel(pixel.a.0),
    )
}
