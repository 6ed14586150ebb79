//! [PixelDriver] on top of one RMT transmit channel.
use esp_hal::{
    clock::Clocks,
    gpio::{OutputPin, Pin},
    peripheral::{Peripheral, PeripheralRef},
    rmt::{Error as RmtError, PulseCode, TxChannel, TxChannelConfig, TxChannelCreator},
};
use log::debug;

use crate::color::{PixelFormat, RGBW8};
use crate::encode::{check_line, encode_frame, EncodeError, LineError};
use crate::group::PixelDriver;
use crate::timing::{BitTicks, Timing};

#[derive(Debug)]
pub enum RmtDriverError {
    Line(LineError),
    /// A previous transmission lost the channel.
    ChannelLost,
    Encode(EncodeError),
    Transmission(RmtError),
}

impl From<LineError> for RmtDriverError {
    fn from(value: LineError) -> Self {
        Self::Line(value)
    }
}

impl From<EncodeError> for RmtDriverError {
    fn from(value: EncodeError) -> Self {
        Self::Encode(value)
    }
}

fn pulse(ticks: BitTicks) -> u32 {
    PulseCode {
        level1: true,
        length1: ticks.high,
        level2: false,
        length2: ticks.low,
    }
    .into()
}

/// One LED data line driven by an RMT channel.
///
/// `BUFFER_SIZE` should be computed with [crate::encode::buffer_size] for the largest pixel count
/// and format the line will ever carry. The GPIO number is read from the pin itself, a group
/// configured for any other pin fails to begin.
pub struct RmtPixelDriver<TX: TxChannel, const BUFFER_SIZE: usize> {
    channel: Option<TX>,
    pin: u8,
    rmt_buffer: [u32; BUFFER_SIZE],
    pulses: (u32, u32),
    format: PixelFormat,
}

impl<'d, TX, const BUFFER_SIZE: usize> RmtPixelDriver<TX, BUFFER_SIZE>
where
    TX: TxChannel,
{
    pub fn new<C, O>(
        channel: C,
        pin: impl Peripheral<P = O> + 'd,
    ) -> Result<Self, RmtDriverError>
    where
        O: OutputPin + 'd,
        C: TxChannelCreator<'d, TX, O>,
    {
        let config = TxChannelConfig {
            clk_divider: 1,
            idle_output_level: false,
            carrier_modulation: false,
            idle_output: true,
            ..TxChannelConfig::default()
        };
        let pin: PeripheralRef<'d, O> = pin.into_ref();
        let pin_number = pin.number();
        let channel = channel
            .configure(pin, config)
            .map_err(RmtDriverError::Transmission)?;
        Ok(Self {
            channel: Some(channel),
            pin: pin_number,
            rmt_buffer: [0; BUFFER_SIZE],
            pulses: (0, 0),
            format: PixelFormat::Grb,
        })
    }
}

impl<TX: TxChannel, const BUFFER_SIZE: usize> PixelDriver for RmtPixelDriver<TX, BUFFER_SIZE> {
    type Error = RmtDriverError;

    fn configure(
        &mut self,
        pin: u8,
        count: usize,
        format: PixelFormat,
        timing: Timing,
    ) -> Result<(), Self::Error> {
        check_line(self.pin, pin, count, format, BUFFER_SIZE)?;
        // Assume the RMT peripheral is set up to use the APB clock
        let src_clock = Clocks::get().apb_clock.to_MHz();
        let (zero, one) = timing.bit_ticks(src_clock);
        self.pulses = (pulse(zero), pulse(one));
        self.format = format;
        debug!(
            "pin {}: {} pixels, {:?}, {:?} at {} MHz",
            pin, count, format, timing, src_clock
        );
        Ok(())
    }

    fn write<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: Iterator<Item = RGBW8>,
    {
        let used = encode_frame(pixels, self.format, &mut self.rmt_buffer, self.pulses)?;
        // Only the end marker, nothing to clock out.
        if used == 1 {
            return Ok(());
        }
        let channel = self.channel.take().ok_or(RmtDriverError::ChannelLost)?;
        let data = &self.rmt_buffer[..used];
        // The buffer is refilled into RMT memory by software, an interrupt in between corrupts
        // the frame.
        match critical_section::with(|_| channel.transmit(data).wait()) {
            Ok(channel) => {
                self.channel = Some(channel);
                Ok(())
            }
            Err((err, channel)) => {
                self.channel = Some(channel);
                Err(RmtDriverError::Transmission(err))
            }
        }
    }
}
