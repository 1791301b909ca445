//! Optical turbidity dirt sensor
//!
//! An IR LED shines through the wash water onto a phototransistor. Clear
//! water gives a high ADC reading, dirty water a low one. The reading is
//! mapped linearly between two calibration points.
//!
//! ```text
//! VCC -- pullup -- ADC_PIN -- phototransistor -- GND
//! ```

use washer_core::laundry::{LaundryBatch, Percentage};
use washer_core::traits::{DirtSensor, SensorError};

/// ADC reading trait for platform abstraction
pub trait AdcReader {
    /// Read ADC value (12-bit, 0-4095)
    #[allow(clippy::result_unit_err)]
    fn read(&mut self) -> Result<u16, ()>;
}

/// Margin from the rails treated as a wiring fault
const RAIL_MARGIN: u16 = 10;

/// Turbidity sensor calibration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TurbidityConfig {
    /// ADC value for clear water (0% dirt)
    pub clear_adc: u16,
    /// ADC value for opaque water (100% dirt)
    pub opaque_adc: u16,
    /// Samples averaged per reading
    pub samples: u8,
    /// Largest allowed difference between samples
    pub max_spread: u16,
}

impl Default for TurbidityConfig {
    fn default() -> Self {
        Self {
            clear_adc: 3600,
            opaque_adc: 400,
            samples: 4,
            max_spread: 200,
        }
    }
}

/// Turbidity probe on an ADC channel
pub struct TurbiditySensor<ADC> {
    adc: ADC,
    config: TurbidityConfig,
    /// ADC resolution (typically 4096 for 12-bit)
    adc_max: u16,
}

impl<ADC> TurbiditySensor<ADC> {
    /// Create a new turbidity sensor on a 12-bit ADC
    pub fn new(adc: ADC, config: TurbidityConfig) -> Self {
        Self {
            adc,
            config,
            adc_max: 4096,
        }
    }

    /// Get the calibration
    pub fn config(&self) -> &TurbidityConfig {
        &self.config
    }

    /// Check a raw sample for wiring faults
    ///
    /// The pull-up drives an open circuit to the top rail; a short pulls
    /// the pin to ground.
    pub fn check_sample(&self, adc_value: u16) -> Result<u16, SensorError> {
        if adc_value >= self.adc_max - RAIL_MARGIN {
            return Err(SensorError::OpenCircuit);
        }
        if adc_value < RAIL_MARGIN {
            return Err(SensorError::ShortCircuit);
        }
        Ok(adc_value)
    }

    /// Convert an averaged ADC value to dirtiness
    ///
    /// Returns `None` if the calibration points are not ordered.
    pub fn adc_to_dirt(&self, adc_value: u16) -> Option<Percentage> {
        let clear = self.config.clear_adc;
        let opaque = self.config.opaque_adc;
        if clear <= opaque {
            return None;
        }

        let span = f32::from(clear - opaque);
        let darkening = f32::from(clear) - f32::from(adc_value);
        Some(Percentage::saturating(darkening * 100.0 / span))
    }
}

impl<ADC: AdcReader> DirtSensor for TurbiditySensor<ADC> {
    fn detect_dirt(&mut self, _batch: &LaundryBatch) -> Result<Option<Percentage>, SensorError> {
        let samples = self.config.samples.max(1);
        let mut sum: u32 = 0;
        let mut min = u16::MAX;
        let mut max = u16::MIN;

        for _ in 0..samples {
            let raw = self.adc.read().map_err(|_| SensorError::ConversionError)?;
            let sample = self.check_sample(raw)?;
            sum += u32::from(sample);
            min = min.min(sample);
            max = max.max(sample);
        }

        // Water still settling or bubbles in the light path
        if max - min > self.config.max_spread {
            return Ok(None);
        }

        let average = (sum / u32::from(samples)) as u16;
        Ok(self.adc_to_dirt(average))
    }
}
