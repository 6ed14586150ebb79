use crate::color::{color, PixelFormat, RGBW8};
use crate::timing::Timing;

// Onboard status pixel of the Feather. It sits behind a power switch.
pub const STATUS_PIN: u8 = 33;
pub const STATUS_POWER_PIN: u8 = 21;
pub const STATUS_LEDS: usize = 1;
pub const STATUS_FORMAT: PixelFormat = PixelFormat::Grb;

// Group 1, wired pin 7 -> ring IN -> ring OUT -> strip IN.
// 16 ring pixels followed by 10 strip pixels.
pub const CHAIN_PIN: u8 = 7;
pub const CHAIN_LEDS: usize = 26;

// Group 2, wired pin 10 -> strip IN.
pub const SECONDARY_PIN: u8 = 10;
pub const SECONDARY_LEDS: usize = 10;

/// Both external strips are RGBW.
pub const STRIP_FORMAT: PixelFormat = PixelFormat::Grbw;
pub const LED_TIMING: Timing = Timing::Khz800;

pub const STATUS_BRIGHTNESS: u8 = 0;
pub const STRIP_BRIGHTNESS: u8 = 255;

/// Pure blue, white channel unused.
pub const STRIP_COLOR: RGBW8 = color(0, 0, 255, 0);

pub const IDLE_PERIOD_MS: u64 = 1000;

const _: () = assert!(
    STATUS_PIN != CHAIN_PIN && STATUS_PIN != SECONDARY_PIN && CHAIN_PIN != SECONDARY_PIN,
    "every LED group needs its own data pin"
);
