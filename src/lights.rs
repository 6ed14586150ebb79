//! The three LED groups of the board and their startup sequence.
use log::{info, warn};

use crate::conf::{
    CHAIN_LEDS, CHAIN_PIN, LED_TIMING, SECONDARY_LEDS, SECONDARY_PIN, STATUS_BRIGHTNESS,
    STATUS_FORMAT, STATUS_LEDS, STATUS_PIN, STRIP_BRIGHTNESS, STRIP_COLOR, STRIP_FORMAT,
};
use crate::group::{GroupConfig, GroupError, LedGroup, OutputGroup, PixelDriver, StaticLook};

pub const STATUS_CONFIG: GroupConfig =
    GroupConfig::new("status", STATUS_PIN, STATUS_FORMAT, LED_TIMING);
pub const CHAIN_CONFIG: GroupConfig =
    GroupConfig::new("chain", CHAIN_PIN, STRIP_FORMAT, LED_TIMING);
pub const SECONDARY_CONFIG: GroupConfig =
    GroupConfig::new("secondary", SECONDARY_PIN, STRIP_FORMAT, LED_TIMING);

/// Only the brightness hides the status pixel. Its buffer is left alone.
pub const STATUS_LOOK: StaticLook = StaticLook {
    brightness: STATUS_BRIGHTNESS,
    fill: None,
};

pub const STRIP_LOOK: StaticLook = StaticLook {
    brightness: STRIP_BRIGHTNESS,
    fill: Some(STRIP_COLOR),
};

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    #[default]
    Unstarted,
    Initializing,
    Steady,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Two groups were configured with the same data pin.
    PinConflict { pin: u8 },
}

/// First group which failed during [Lights::initialize].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitError<S, C, P> {
    Status(GroupError<S>),
    Chain(GroupError<C>),
    Secondary(GroupError<P>),
}

/// Reject any configuration where two groups would drive the same pin.
pub fn check_pins(configs: &[&GroupConfig]) -> Result<(), ConfigError> {
    for (idx, config) in configs.iter().enumerate() {
        if configs[idx + 1..].iter().any(|other| other.pin == config.pin) {
            return Err(ConfigError::PinConflict { pin: config.pin });
        }
    }
    Ok(())
}

pub struct Lights<S, C, P> {
    pub status: LedGroup<S, STATUS_LEDS>,
    pub chain: LedGroup<C, CHAIN_LEDS>,
    pub secondary: LedGroup<P, SECONDARY_LEDS>,
    phase: Phase,
}

impl<S: PixelDriver, C: PixelDriver, P: PixelDriver> Lights<S, C, P> {
    pub fn new(status: S, chain: C, secondary: P) -> Result<Self, ConfigError> {
        Self::with_configs(
            (STATUS_CONFIG, status),
            (CHAIN_CONFIG, chain),
            (SECONDARY_CONFIG, secondary),
        )
    }

    pub fn with_configs(
        status: (GroupConfig, S),
        chain: (GroupConfig, C),
        secondary: (GroupConfig, P),
    ) -> Result<Self, ConfigError> {
        check_pins(&[&status.0, &chain.0, &secondary.0])?;
        Ok(Self {
            status: LedGroup::new(status.0, status.1),
            chain: LedGroup::new(chain.0, chain.1),
            secondary: LedGroup::new(secondary.0, secondary.1),
            phase: Phase::Unstarted,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Bring up status pixel, chain and secondary strip, in that order.
    ///
    /// A failing group does not stop the others from being brought up. The first failure is
    /// returned, and the lights end up in [Phase::Steady] either way.
    pub fn initialize(&mut self) -> Result<(), InitError<S::Error, C::Error, P::Error>> {
        self.phase = Phase::Initializing;
        let status = render(&mut self.status, STATUS_LOOK).map_err(InitError::Status);
        let chain = render(&mut self.chain, STRIP_LOOK).map_err(InitError::Chain);
        let secondary = render(&mut self.secondary, STRIP_LOOK).map_err(InitError::Secondary);
        self.phase = Phase::Steady;
        status.and(chain).and(secondary)
    }
}

fn render<G: OutputGroup>(group: &mut G, look: StaticLook) -> Result<(), G::Error> {
    let result = group.render(look);
    match &result {
        Ok(()) => info!(
            "{} group on at brightness {}",
            group.name(),
            look.brightness
        ),
        Err(_) => warn!("{} group could not be brought up", group.name()),
    }
    result
}
