//! Relay-switched drum drive
//!
//! The wash motion tumbles the drum in alternating directions:
//!
//! ```text
//! | tumble CW | pause | tumble CCW | pause | tumble CW | ...
//! ```
//!
//! Direction is only switched while the motor relay is open. The spin
//! cycle energizes the high-speed winding through its own relay.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};
use washer_core::traits::{DriveError, DriveUnit};

/// Drive timing configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriveConfig {
    /// Motor on-time per tumble (seconds)
    pub tumble_s: u16,
    /// Rest between tumbles, during which direction flips (seconds)
    pub pause_s: u16,
    /// Spin cycle duration (seconds)
    pub spin_s: u16,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            tumble_s: 12,
            pause_s: 4,
            spin_s: 300,
        }
    }
}

/// Drum drive on three relays
pub struct RelayDriveUnit<M, R, S, D> {
    /// Wash winding relay
    motor: M,
    /// Reversing relay (high = counter-clockwise)
    reverse: R,
    /// Spin winding relay
    spin: S,
    delay: D,
    config: DriveConfig,
}

impl<M, R, S, D> RelayDriveUnit<M, R, S, D>
where
    M: OutputPin,
    R: OutputPin,
    S: OutputPin,
    D: DelayNs,
{
    /// Create a new drive unit
    ///
    /// Relays are not touched until the first command.
    pub fn new(motor: M, reverse: R, spin: S, delay: D, config: DriveConfig) -> Self {
        Self {
            motor,
            reverse,
            spin,
            delay,
            config,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &DriveConfig {
        &self.config
    }

    /// Open every relay
    pub fn stop(&mut self) -> Result<(), DriveError> {
        // Attempt every relay even if one fails
        let motor = self.motor.set_low().is_ok();
        let spin = self.spin.set_low().is_ok();
        let reverse = self.reverse.set_low().is_ok();
        if motor && spin && reverse {
            Ok(())
        } else {
            Err(DriveError::Relay)
        }
    }

    /// Release the pins and delay
    pub fn free(self) -> (M, R, S, D) {
        (self.motor, self.reverse, self.spin, self.delay)
    }

    fn tumble(&mut self, reverse: bool, on_ms: u32) -> Result<(), DriveError> {
        self.reverse
            .set_state(PinState::from(reverse))
            .map_err(|_| DriveError::Relay)?;
        self.motor.set_high().map_err(|_| DriveError::Relay)?;
        self.delay.delay_ms(on_ms);
        self.motor.set_low().map_err(|_| DriveError::Relay)
    }
}

impl<M, R, S, D> DriveUnit for RelayDriveUnit<M, R, S, D>
where
    M: OutputPin,
    R: OutputPin,
    S: OutputPin,
    D: DelayNs,
{
    fn run(&mut self, minutes: u16) -> Result<(), DriveError> {
        let total_ms = u32::from(minutes) * 60_000;
        let tumble_ms = u32::from(self.config.tumble_s.max(1)) * 1000;
        let pause_ms = u32::from(self.config.pause_s) * 1000;

        let mut elapsed_ms = 0;
        let mut reverse = false;
        while elapsed_ms < total_ms {
            let on_ms = tumble_ms.min(total_ms - elapsed_ms);
            if let Err(e) = self.tumble(reverse, on_ms) {
                let _ = self.stop();
                return Err(e);
            }
            elapsed_ms += on_ms;

            let rest_ms = pause_ms.min(total_ms - elapsed_ms);
            self.delay.delay_ms(rest_ms);
            elapsed_ms += rest_ms;
            reverse = !reverse;
        }

        self.reverse.set_low().map_err(|_| DriveError::Relay)
    }

    fn spin(&mut self) -> Result<(), DriveError> {
        // Never spin with the wash winding closed
        self.motor.set_low().map_err(|_| DriveError::Relay)?;

        if self.spin.set_high().is_err() {
            let _ = self.stop();
            return Err(DriveError::Relay);
        }
        self.delay.delay_ms(u32::from(self.config.spin_s) * 1000);
        self.spin.set_low().map_err(|_| DriveError::Relay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockPin, RecordingDelay};

    type TestDrive = RelayDriveUnit<MockPin, MockPin, MockPin, RecordingDelay>;

    fn drive(motor: MockPin, spin: MockPin) -> TestDrive {
        RelayDriveUnit::new(
            motor,
            MockPin::default(),
            spin,
            RecordingDelay::default(),
            DriveConfig::default(),
        )
    }

    #[test]
    fn test_run_takes_requested_time() {
        let mut unit = drive(MockPin::default(), MockPin::default());
        unit.run(30).unwrap();

        assert_eq!(unit.delay.total_ms(), 30 * 60_000);
        assert!(!unit.motor.high);
        assert!(!unit.reverse.high);
    }

    #[test]
    fn test_run_alternates_direction() {
        let mut unit = drive(MockPin::default(), MockPin::default());
        // 1 minute = 3 full 16 s periods + 12 s tumble
        unit.run(1).unwrap();

        assert_eq!(unit.motor.rises, 4);
        // Reverse relay closes on the 2nd and 4th tumble
        assert_eq!(unit.reverse.rises, 2);
    }

    #[test]
    fn test_zero_minutes_does_nothing() {
        let mut unit = drive(MockPin::default(), MockPin::default());
        unit.run(0).unwrap();

        assert_eq!(unit.motor.rises, 0);
        assert_eq!(unit.delay.total_ms(), 0);
    }

    #[test]
    fn test_relay_failure_stops_motor() {
        let mut unit = drive(MockPin::failing_on(2), MockPin::default());

        assert_eq!(unit.run(10), Err(DriveError::Relay));
        assert!(!unit.motor.high);
        assert!(!unit.spin.high);
    }

    #[test]
    fn test_spin() {
        let mut unit = drive(MockPin::default(), MockPin::default());
        unit.spin().unwrap();

        assert_eq!(unit.spin.rises, 1);
        assert!(!unit.spin.high);
        assert_eq!(unit.delay.total_ms(), 300_000);
    }

    #[test]
    fn test_spin_relay_failure() {
        let mut unit = drive(MockPin::default(), MockPin::failing_on(1));

        assert_eq!(unit.spin(), Err(DriveError::Relay));
        assert_eq!(unit.delay.total_ms(), 0);
    }
}
