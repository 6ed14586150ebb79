//! Conversion of pixel data into RMT pulse words.
use core::slice::IterMut;

use crate::color::{channel_value, PixelFormat, RGBW8};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// Raised if the pulse buffer can not hold all pixels plus the end marker.
    BufferSizeExceeded,
}

/// Why a data line can not carry a group.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// The group's pin is not the GPIO the line is bound to.
    PinMismatch { bound: u8, requested: u8 },
    /// The pulse buffer is too small for the requested pixel count and format.
    CapacityExceeded { needed: usize, available: usize },
}

/// Check a group against the GPIO a line is bound to and the line's pulse buffer capacity.
///
/// Returns the number of pulse words a full frame of the group takes.
pub fn check_line(
    bound_pin: u8,
    requested_pin: u8,
    count: usize,
    format: PixelFormat,
    capacity: usize,
) -> Result<usize, LineError> {
    if requested_pin != bound_pin {
        return Err(LineError::PinMismatch {
            bound: bound_pin,
            requested: requested_pin,
        });
    }
    let needed = buffer_size(count, format.channels());
    if needed > capacity {
        return Err(LineError::CapacityExceeded {
            needed,
            available: capacity,
        });
    }
    Ok(needed)
}

/// Number of pulse words needed for `count` pixels with `channels` channels each, including the
/// end marker.
pub const fn buffer_size(count: usize, channels: usize) -> usize {
    count * channels * 8 + 1
}

/// Encode a whole frame, terminated by a zero word.
///
/// Returns the number of words written.
pub fn encode_frame<I>(
    pixels: I,
    format: PixelFormat,
    buffer: &mut [u32],
    pulses: (u32, u32),
) -> Result<usize, EncodeError>
where
    I: IntoIterator<Item = RGBW8>,
{
    let capacity = buffer.len();
    let mut seq_iter = buffer.iter_mut();
    for pixel in pixels {
        encode_pixel(pixel, format, &mut seq_iter, pulses)?;
    }
    *seq_iter.next().ok_or(EncodeError::BufferSizeExceeded)? = 0;
    Ok(capacity - seq_iter.len())
}

/// Converts one pixel into pulse words, channels in wire order.
pub fn encode_pixel(
    pixel: RGBW8,
    format: PixelFormat,
    mut_iter: &mut IterMut<u32>,
    pulses: (u32, u32),
) -> Result<(), EncodeError> {
    for channel in format.wire_order() {
        encode_channel(channel_value(pixel, *channel), mut_iter, pulses)?;
    }
    Ok(())
}

fn encode_channel(
    channel_value: u8,
    mut_iter: &mut IterMut<u32>,
    pulses: (u32, u32),
) -> Result<(), EncodeError> {
    for position in [128, 64, 32, 16, 8, 4, 2, 1] {
        *mut_iter.next().ok_or(EncodeError::BufferSizeExceeded)? = match channel_value & position {
            0 => pulses.0,
            _ => pulses.1,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::color;

    const ZERO: u32 = 0xA;
    const ONE: u32 = 0xB;

    fn bits(value: u8) -> [u32; 8] {
        let mut out = [ZERO; 8];
        for (i, word) in out.iter_mut().enumerate() {
            if value & (0x80 >> i) != 0 {
                *word = ONE;
            }
        }
        out
    }

    #[test]
    fn grbw_pixel_goes_out_green_first() {
        let mut buffer = [0xFFFF_FFFF; buffer_size(1, 4)];
        let used = encode_frame(
            [color(0x01, 0x80, 0xFF, 0x00)],
            PixelFormat::Grbw,
            &mut buffer,
            (ZERO, ONE),
        )
        .unwrap();
        assert_eq!(used, 33);
        assert_eq!(buffer[0..8], bits(0x80));
        assert_eq!(buffer[8..16], bits(0x01));
        assert_eq!(buffer[16..24], bits(0xFF));
        assert_eq!(buffer[24..32], bits(0x00));
        assert_eq!(buffer[32], 0);
    }

    #[test]
    fn three_channel_format_drops_white() {
        let mut buffer = [0xFFFF_FFFF; buffer_size(2, 3)];
        let used = encode_frame(
            [color(0, 0, 0, 0xFF), color(0, 0, 0, 0xFF)],
            PixelFormat::Grb,
            &mut buffer,
            (ZERO, ONE),
        )
        .unwrap();
        assert_eq!(used, 49);
        assert!(buffer[..48].iter().all(|word| *word == ZERO));
        assert_eq!(buffer[48], 0);
    }

    #[test]
    fn empty_frame_is_only_the_end_marker() {
        let mut buffer = [0xFFFF_FFFF; buffer_size(0, 4)];
        let used = encode_frame([], PixelFormat::Grbw, &mut buffer, (ZERO, ONE)).unwrap();
        assert_eq!(used, 1);
        assert_eq!(buffer, [0]);
    }

    #[test]
    fn line_bound_to_other_gpio_is_rejected() {
        assert_eq!(
            check_line(7, 8, 26, PixelFormat::Grbw, buffer_size(26, 4)),
            Err(LineError::PinMismatch {
                bound: 7,
                requested: 8
            })
        );
    }

    #[test]
    fn line_capacity() {
        assert_eq!(
            check_line(10, 10, 10, PixelFormat::Grbw, buffer_size(10, 4)),
            Ok(321)
        );
        assert_eq!(
            check_line(10, 10, 11, PixelFormat::Grbw, buffer_size(10, 4)),
            Err(LineError::CapacityExceeded {
                needed: 353,
                available: 321
            })
        );
        assert_eq!(check_line(33, 33, 0, PixelFormat::Grb, 1), Ok(1));
    }

    #[test]
    fn too_small_buffer() {
        let mut buffer = [0; 32];
        assert_eq!(
            encode_frame([color(0, 0, 255, 0)], PixelFormat::Grbw, &mut buffer, (ZERO, ONE)),
            Err(EncodeError::BufferSizeExceeded)
        );
    }
}
