//! Program resolution
//!
//! Turns a requested program configuration into a program with a known
//! duration. Static programs pass through unchanged; auto-detect asks the
//! dirt sensor and maps the reading onto a band.

use crate::config::DirtThresholds;
use crate::laundry::{LaundryBatch, Percentage, ProgramConfiguration, ResolvedProgram};
use crate::traits::{DirtSensor, SensorError};

/// Reasons a program could not be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResolutionError {
    /// No program configuration was supplied
    MissingConfiguration,
    /// Dirt sensor reported a fault
    Sensor(SensorError),
    /// Dirt sensor answered without a usable reading
    NoReading,
}

impl From<SensorError> for ResolutionError {
    fn from(e: SensorError) -> Self {
        ResolutionError::Sensor(e)
    }
}

/// Map a dirtiness reading onto a program
///
/// Bands are `[0, medium)` short, `[medium, high)` medium and
/// `[high, 100]` long.
pub fn program_for_dirt(dirt: Percentage, thresholds: &DirtThresholds) -> ResolvedProgram {
    let pct = dirt.value();
    if pct >= thresholds.high_pct {
        ResolvedProgram::LONG
    } else if pct >= thresholds.medium_pct {
        ResolvedProgram::MEDIUM
    } else {
        ResolvedProgram::SHORT
    }
}

/// Resolve the program to run
///
/// The sensor is only queried for auto-detect.
pub fn resolve_program<S: DirtSensor>(
    batch: &LaundryBatch,
    config: Option<&ProgramConfiguration>,
    sensor: &mut S,
    thresholds: &DirtThresholds,
) -> Result<ResolvedProgram, ResolutionError> {
    let config = config.ok_or(ResolutionError::MissingConfiguration)?;

    if let Some(program) = config.program.resolved() {
        return Ok(program);
    }

    let dirt = sensor
        .detect_dirt(batch)?
        .ok_or(ResolutionError::NoReading)?;
    Ok(program_for_dirt(dirt, thresholds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::laundry::{Material, Program};

    /// Sensor returning a canned answer and counting reads
    struct FixedSensor {
        reading: Result<Option<Percentage>, SensorError>,
        reads: u8,
    }

    impl FixedSensor {
        fn new(reading: Result<Option<Percentage>, SensorError>) -> Self {
            Self { reading, reads: 0 }
        }

        fn pct(value: f32) -> Self {
            Self::new(Ok(Percentage::new(value)))
        }
    }

    impl DirtSensor for FixedSensor {
        fn detect_dirt(
            &mut self,
            _batch: &LaundryBatch,
        ) -> Result<Option<Percentage>, SensorError> {
            self.reads += 1;
            self.reading
        }
    }

    fn cotton() -> LaundryBatch {
        LaundryBatch::new(Material::Cotton, 7.0).unwrap()
    }

    fn resolve(
        config: Option<&ProgramConfiguration>,
        sensor: &mut FixedSensor,
    ) -> Result<ResolvedProgram, ResolutionError> {
        resolve_program(&cotton(), config, sensor, &DirtThresholds::default())
    }

    #[test]
    fn test_static_program_passes_through() {
        for program in [Program::Short, Program::Medium, Program::Long] {
            let mut sensor = FixedSensor::pct(99.0);
            let config = ProgramConfiguration::with_spin(program);
            let resolved = resolve(Some(&config), &mut sensor).unwrap();
            assert_eq!(resolved.program(), program);
            assert_eq!(sensor.reads, 0);
        }
    }

    #[test]
    fn test_autodetect_bands() {
        let thresholds = DirtThresholds::default();
        let band = |v: f32| program_for_dirt(Percentage::new(v).unwrap(), &thresholds).program();

        assert_eq!(band(0.0), Program::Short);
        assert_eq!(band(19.9), Program::Short);
        assert_eq!(band(20.0), Program::Medium);
        assert_eq!(band(39.9), Program::Medium);
        assert_eq!(band(40.0), Program::Long);
        assert_eq!(band(100.0), Program::Long);
    }

    #[test]
    fn test_autodetect_queries_sensor() {
        let mut sensor = FixedSensor::pct(20.0);
        let config = ProgramConfiguration::with_spin(Program::AutoDetect);
        let resolved = resolve(Some(&config), &mut sensor).unwrap();
        assert_eq!(resolved, ResolvedProgram::MEDIUM);
        assert_eq!(sensor.reads, 1);
    }

    #[test]
    fn test_sensor_fault() {
        let mut sensor = FixedSensor::new(Err(SensorError::OpenCircuit));
        let config = ProgramConfiguration::new(Program::AutoDetect);
        assert_eq!(
            resolve(Some(&config), &mut sensor),
            Err(ResolutionError::Sensor(SensorError::OpenCircuit))
        );
    }

    #[test]
    fn test_no_reading() {
        let mut sensor = FixedSensor::new(Ok(None));
        let config = ProgramConfiguration::new(Program::AutoDetect);
        assert_eq!(
            resolve(Some(&config), &mut sensor),
            Err(ResolutionError::NoReading)
        );
    }

    #[test]
    fn test_missing_configuration() {
        let mut sensor = FixedSensor::pct(50.0);
        assert_eq!(
            resolve(None, &mut sensor),
            Err(ResolutionError::MissingConfiguration)
        );
        assert_eq!(sensor.reads, 0);
    }
}
