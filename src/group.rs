//! A run of addressable LEDs sharing one data pin.
//!
//! Pixel writes and brightness only touch the in-memory state of a [LedGroup]. Nothing reaches the
//! LEDs until [LedGroup::show] hands the brightness-scaled buffer to the group's [PixelDriver].
use log::{debug, warn};

use crate::color::{scale, PixelFormat, OFF, RGBW8};
use crate::timing::Timing;

/// Hardware side of a LED group.
pub trait PixelDriver {
    type Error;

    /// Bring up the data line for `count` pixels. Called on every [LedGroup::begin].
    fn configure(
        &mut self,
        pin: u8,
        count: usize,
        format: PixelFormat,
        timing: Timing,
    ) -> Result<(), Self::Error>;

    /// Transmit a full frame, pixel 0 first. Brightness is already applied.
    fn write<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: Iterator<Item = RGBW8>;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GroupConfig {
    pub name: &'static str,
    pub pin: u8,
    pub format: PixelFormat,
    pub timing: Timing,
}

impl GroupConfig {
    pub const fn new(name: &'static str, pin: u8, format: PixelFormat, timing: Timing) -> Self {
        Self {
            name,
            pin,
            format,
            timing,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GroupError<E> {
    /// [LedGroup::show] was called before [LedGroup::begin].
    NotStarted,
    Driver(E),
}

pub struct LedGroup<D, const N: usize> {
    config: GroupConfig,
    driver: D,
    started: bool,
    brightness: u8,
    pixels: [RGBW8; N],
}

impl<D: PixelDriver, const N: usize> LedGroup<D, N> {
    pub fn new(config: GroupConfig, driver: D) -> Self {
        Self {
            config,
            driver,
            started: false,
            brightness: u8::MAX,
            pixels: [OFF; N],
        }
    }

    pub fn begin(&mut self) -> Result<(), GroupError<D::Error>> {
        debug!(
            "{}: configuring {} pixels on pin {}",
            self.config.name, N, self.config.pin
        );
        self.driver
            .configure(self.config.pin, N, self.config.format, self.config.timing)
            .map_err(GroupError::Driver)?;
        self.started = true;
        Ok(())
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    pub fn fill(&mut self, color: RGBW8) {
        self.pixels = [color; N];
    }

    pub fn clear(&mut self) {
        self.fill(OFF);
    }

    pub fn set_pixel(&mut self, index: usize, color: RGBW8) {
        match self.pixels.get_mut(index) {
            Some(pixel) => *pixel = color,
            None => warn!(
                "{}: ignoring write to pixel {} of {}",
                self.config.name, index, N
            ),
        }
    }

    pub fn pixel(&self, index: usize) -> Option<RGBW8> {
        self.pixels.get(index).copied()
    }

    pub fn show(&mut self) -> Result<(), GroupError<D::Error>> {
        if !self.started {
            return Err(GroupError::NotStarted);
        }
        let brightness = self.brightness;
        self.driver
            .write(self.pixels.iter().map(|pixel| scale(*pixel, brightness)))
            .map_err(GroupError::Driver)
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn pixels(&self) -> &[RGBW8; N] {
        &self.pixels
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn config(&self) -> &GroupConfig {
        &self.config
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }
}

/// What a group shows once it is started.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StaticLook {
    pub brightness: u8,
    /// `None` keeps whatever the buffer holds.
    pub fill: Option<RGBW8>,
}

// The smart-leds pixel type has no defmt support, so the fill goes out as a channel tuple.
#[cfg(feature = "defmt")]
impl defmt::Format for StaticLook {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "StaticLook {{ brightness: {}, fill: {} }}",
            self.brightness,
            self.fill.map(|c| (c.r, c.g, c.b, c.a.0))
        )
    }
}

/// Common operations of all groups, independent of pixel count and driver.
pub trait OutputGroup {
    type Error;

    fn name(&self) -> &'static str;
    fn begin(&mut self) -> Result<(), Self::Error>;
    fn set_brightness(&mut self, brightness: u8);
    fn fill(&mut self, color: RGBW8);
    fn show(&mut self) -> Result<(), Self::Error>;

    /// Begin, apply the look and show it, in that order.
    fn render(&mut self, look: StaticLook) -> Result<(), Self::Error> {
        self.begin()?;
        self.set_brightness(look.brightness);
        if let Some(color) = look.fill {
            self.fill(color);
        }
        self.show()
    }
}

impl<D: PixelDriver, const N: usize> OutputGroup for LedGroup<D, N> {
    type Error = GroupError<D::Error>;

    fn name(&self) -> &'static str {
        self.config.name
    }

    fn begin(&mut self) -> Result<(), Self::Error> {
        LedGroup::begin(self)
    }

    fn set_brightness(&mut self, brightness: u8) {
        LedGroup::set_brightness(self, brightness)
    }

    fn fill(&mut self, color: RGBW8) {
        LedGroup::fill(self, color)
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        LedGroup::show(self)
    }
}
