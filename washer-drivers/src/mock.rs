//! Test doubles for embedded-hal pins and delays

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};

/// Mock GPIO pin that counts rising edges and can be told to fail
#[derive(Default)]
pub struct MockPin {
    pub high: bool,
    pub rises: u32,
    pub falls: u32,
    /// Fail on the n-th `set_high` call (1-based)
    pub fail_on_rise: Option<u32>,
    /// Fail on the n-th `set_low` call (1-based), leaving the pin high
    pub fail_on_fall: Option<u32>,
}

impl MockPin {
    pub fn failing_on(rise: u32) -> Self {
        Self {
            fail_on_rise: Some(rise),
            ..Self::default()
        }
    }

    pub fn failing_on_fall(fall: u32) -> Self {
        Self {
            fail_on_fall: Some(fall),
            ..Self::default()
        }
    }
}

impl ErrorType for MockPin {
    type Error = ErrorKind;
}

impl OutputPin for MockPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.rises += 1;
        if self.fail_on_rise == Some(self.rises) {
            return Err(ErrorKind::Other);
        }
        self.high = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.falls += 1;
        if self.fail_on_fall == Some(self.falls) {
            return Err(ErrorKind::Other);
        }
        self.high = false;
        Ok(())
    }
}

/// Delay that only adds up the requested time
#[derive(Default)]
pub struct RecordingDelay {
    pub total_ns: u64,
}

impl RecordingDelay {
    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.total_ns += u64::from(ms) * 1_000_000;
    }
}
