/// Protocol speed of an LED data line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Timing {
    /// WS2812/SK6812 class pixels.
    Khz800,
    /// Older WS2811 driver chips.
    Khz400,
}

/// High and low time of one encoded bit, in clock ticks.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitTicks {
    pub high: u16,
    pub low: u16,
}

impl Timing {
    pub const fn code_period_ns(self) -> u32 {
        match self {
            Timing::Khz800 => 1200,
            Timing::Khz400 => 2500,
        }
    }

    pub const fn t0h_ns(self) -> u32 {
        match self {
            Timing::Khz800 => 320,
            Timing::Khz400 => 500,
        }
    }

    pub const fn t1h_ns(self) -> u32 {
        match self {
            Timing::Khz800 => 640,
            Timing::Khz400 => 1200,
        }
    }

    /// Tick lengths for a zero bit and a one bit at the given source clock.
    pub const fn bit_ticks(self, src_clock_mhz: u32) -> (BitTicks, BitTicks) {
        let period = self.code_period_ns();
        let zero = BitTicks {
            high: ((self.t0h_ns() * src_clock_mhz) / 1000) as u16,
            low: (((period - self.t0h_ns()) * src_clock_mhz) / 1000) as u16,
        };
        let one = BitTicks {
            high: ((self.t1h_ns() * src_clock_mhz) / 1000) as u16,
            low: (((period - self.t1h_ns()) * src_clock_mhz) / 1000) as u16,
        };
        (zero, one)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_at_apb_clock() {
        let (zero, one) = Timing::Khz800.bit_ticks(80);
        assert_eq!(zero, BitTicks { high: 25, low: 70 });
        assert_eq!(one, BitTicks { high: 51, low: 44 });
    }

    #[test]
    fn slow_timing_is_longer() {
        let (fast, _) = Timing::Khz800.bit_ticks(80);
        let (slow, _) = Timing::Khz400.bit_ticks(80);
        assert!(slow.high + slow.low > fast.high + fast.low);
    }
}
