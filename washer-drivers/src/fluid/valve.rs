//! Inlet valve and drain pump
//!
//! Water is metered by time: the inlet valve stays open for as long as the
//! configured flow rate needs to deliver the requested volume. Draining
//! runs the pump for a fixed time.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use washer_core::traits::{FluidError, FluidSystem};

/// Fluid system configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FluidConfig {
    /// Water per kilogram of laundry (litres)
    pub litres_per_kg: f32,
    /// Inlet flow rate (litres per minute)
    pub inlet_flow_lpm: f32,
    /// Maximum water in the tub (litres)
    pub tub_capacity_l: f32,
    /// Drain pump run time (seconds)
    pub drain_s: u16,
}

impl Default for FluidConfig {
    fn default() -> Self {
        Self {
            litres_per_kg: 6.0,
            inlet_flow_lpm: 12.0,
            tub_capacity_l: 65.0,
            drain_s: 90,
        }
    }
}

/// Solenoid inlet valve and drain pump
pub struct ValveFluidSystem<I, P, D> {
    inlet: I,
    pump: P,
    delay: D,
    config: FluidConfig,
    /// Water currently in the tub (litres)
    volume_l: f32,
}

impl<I, P, D> ValveFluidSystem<I, P, D>
where
    I: OutputPin,
    P: OutputPin,
    D: DelayNs,
{
    /// Create a new fluid system with an empty tub
    pub fn new(inlet: I, pump: P, delay: D, config: FluidConfig) -> Self {
        Self {
            inlet,
            pump,
            delay,
            config,
            volume_l: 0.0,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &FluidConfig {
        &self.config
    }

    /// Water currently in the tub (litres)
    pub fn volume_litres(&self) -> f32 {
        self.volume_l
    }

    /// Volume poured for a batch weight (litres)
    pub fn litres_for(&self, weight_kg: f32) -> f32 {
        weight_kg * self.config.litres_per_kg
    }

    /// Release the pins and delay
    pub fn free(self) -> (I, P, D) {
        (self.inlet, self.pump, self.delay)
    }

    fn fill_ms(&self, litres: f32) -> Result<u32, FluidError> {
        let flow = self.config.inlet_flow_lpm;
        if !flow.is_finite() || flow <= 0.0 {
            return Err(FluidError::InvalidVolume);
        }
        Ok((litres / flow * 60_000.0) as u32)
    }
}

impl<I, P, D> FluidSystem for ValveFluidSystem<I, P, D>
where
    I: OutputPin,
    P: OutputPin,
    D: DelayNs,
{
    fn pour(&mut self, weight_kg: f32) -> Result<(), FluidError> {
        let litres = self.litres_for(weight_kg);
        if !litres.is_finite() || litres <= 0.0 {
            return Err(FluidError::InvalidVolume);
        }
        if self.volume_l + litres > self.config.tub_capacity_l {
            return Err(FluidError::Overfill);
        }
        let open_ms = self.fill_ms(litres)?;

        self.inlet.set_high().map_err(|_| FluidError::Actuator)?;
        self.delay.delay_ms(open_ms);
        // Water is in the tub even if the valve fails to close
        self.volume_l += litres;
        self.inlet.set_low().map_err(|_| FluidError::Actuator)
    }

    fn release(&mut self) -> Result<(), FluidError> {
        // Inlet must be closed while draining
        self.inlet.set_low().map_err(|_| FluidError::Actuator)?;

        self.pump.set_high().map_err(|_| FluidError::Actuator)?;
        self.delay.delay_ms(u32::from(self.config.drain_s) * 1000);
        self.volume_l = 0.0;
        self.pump.set_low().map_err(|_| FluidError::Actuator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockPin, RecordingDelay};

    type TestFluid = ValveFluidSystem<MockPin, MockPin, RecordingDelay>;

    fn fluid(inlet: MockPin, pump: MockPin) -> TestFluid {
        ValveFluidSystem::new(inlet, pump, RecordingDelay::default(), FluidConfig::default())
    }

    #[test]
    fn test_pour_meters_by_weight() {
        let mut unit = fluid(MockPin::default(), MockPin::default());
        unit.pour(7.0).unwrap();

        // 42 litres at 12 l/min
        assert_eq!(unit.volume_litres(), 42.0);
        assert_eq!(unit.delay.total_ms(), 210_000);
        assert_eq!(unit.inlet.rises, 1);
        assert!(!unit.inlet.high);
    }

    #[test]
    fn test_release_empties_tub() {
        let mut unit = fluid(MockPin::default(), MockPin::default());
        unit.pour(2.0).unwrap();
        unit.release().unwrap();

        assert_eq!(unit.volume_litres(), 0.0);
        assert_eq!(unit.pump.rises, 1);
        assert!(!unit.pump.high);
    }

    #[test]
    fn test_overfill() {
        let mut unit = fluid(MockPin::default(), MockPin::default());
        assert_eq!(unit.pour(11.0), Err(FluidError::Overfill));
        assert_eq!(unit.inlet.rises, 0);

        unit.pour(6.0).unwrap();
        assert_eq!(unit.pour(6.0), Err(FluidError::Overfill));
    }

    #[test]
    fn test_invalid_volume() {
        let mut unit = fluid(MockPin::default(), MockPin::default());
        assert_eq!(unit.pour(0.0), Err(FluidError::InvalidVolume));
        assert_eq!(unit.pour(f32::NAN), Err(FluidError::InvalidVolume));
    }

    #[test]
    fn test_valve_failure() {
        let mut unit = fluid(MockPin::failing_on(1), MockPin::default());
        assert_eq!(unit.pour(3.0), Err(FluidError::Actuator));
        assert_eq!(unit.volume_litres(), 0.0);
    }

    #[test]
    fn test_pump_failure_keeps_water() {
        let mut unit = fluid(MockPin::default(), MockPin::failing_on(1));
        unit.pour(3.0).unwrap();

        assert_eq!(unit.release(), Err(FluidError::Actuator));
        assert_eq!(unit.volume_litres(), 18.0);
    }

    #[test]
    fn test_stuck_valve_still_counts_water() {
        let mut unit = fluid(MockPin::failing_on_fall(1), MockPin::default());

        assert_eq!(unit.pour(7.0), Err(FluidError::Actuator));
        assert_eq!(unit.volume_litres(), 42.0);
        // A second fill would exceed the 65 l tub
        assert_eq!(unit.pour(7.0), Err(FluidError::Overfill));
        assert_eq!(unit.inlet.rises, 1);
    }

    #[test]
    fn test_stuck_pump_still_empties_count() {
        let mut unit = fluid(MockPin::default(), MockPin::failing_on_fall(1));
        unit.pour(3.0).unwrap();

        assert_eq!(unit.release(), Err(FluidError::Actuator));
        assert_eq!(unit.volume_litres(), 0.0);
    }
}
