#![cfg_attr(not(test), no_std)]

pub mod color;
pub mod conf;
pub mod encode;
pub mod group;
pub mod lights;
#[cfg(feature = "esp32s3")]
pub mod rmt;
pub mod timing;

pub use color::{color, PixelFormat, RGBW8};
pub use group::{GroupConfig, GroupError, LedGroup, OutputGroup, PixelDriver, StaticLook};
pub use lights::{ConfigError, InitError, Lights, Phase};
pub use timing::Timing;
