//! Wash controller
//!
//! Decides whether a batch may be washed, resolves the program and drives
//! the fluid system and drive unit through one wash cycle:
//!
//! ```text
//! weight check -> resolve -> pour -> run -> release -> [spin]
//! ```
//!
//! Each step only runs if the previous one succeeded. The first fault ends
//! the attempt; nothing already done is rolled back. Collaborator faults
//! never leave this module, they are folded into the returned
//! [`LaundryStatus`].

use crate::config::{ConfigError, ControllerConfig};
use crate::laundry::{LaundryBatch, ProgramConfiguration, ResolvedProgram};
use crate::policy::{is_overweight, resolve_program};
use crate::state::{CycleEvent, CycleState, CycleTrace};
use crate::status::{ErrorCode, LaundryStatus};
use crate::traits::{DirtSensor, DriveError, DriveUnit, FluidError, FluidSystem};

/// Wash controller over a dirt sensor, drive unit and fluid system
///
/// Holds no state between attempts apart from its collaborators and the
/// configuration table. Callers sharing the same physical actuators must
/// serialize attempts themselves.
pub struct WashController<S, D, F> {
    sensor: S,
    drive: D,
    fluid: F,
    config: ControllerConfig,
}

impl<S, D, F> WashController<S, D, F>
where
    S: DirtSensor,
    D: DriveUnit,
    F: FluidSystem,
{
    /// Create a controller with the factory configuration
    pub fn new(sensor: S, drive: D, fluid: F) -> Self {
        Self {
            sensor,
            drive,
            fluid,
            config: ControllerConfig::default(),
        }
    }

    /// Create a controller with a custom configuration
    pub fn with_config(
        sensor: S,
        drive: D,
        fluid: F,
        config: ControllerConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            sensor,
            drive,
            fluid,
            config,
        })
    }

    /// Get the active configuration
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Get the dirt sensor
    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    /// Get the drive unit
    pub fn drive(&self) -> &D {
        &self.drive
    }

    /// Get the fluid system
    pub fn fluid(&self) -> &F {
        &self.fluid
    }

    /// Release the collaborators
    pub fn into_parts(self) -> (S, D, F) {
        (self.sensor, self.drive, self.fluid)
    }

    /// Run one wash attempt
    ///
    /// `config` may be `None` when no program was selected; a batch within
    /// its weight ceiling then fails with [`ErrorCode::UnknownError`]
    /// without touching any actuator.
    pub fn resolve_and_wash(
        &mut self,
        batch: &LaundryBatch,
        config: Option<&ProgramConfiguration>,
    ) -> LaundryStatus {
        self.run_cycle(batch, config).0
    }

    /// Run one wash attempt and return the states it went through
    pub fn run_cycle(
        &mut self,
        batch: &LaundryBatch,
        config: Option<&ProgramConfiguration>,
    ) -> (LaundryStatus, CycleTrace) {
        let mut cycle = Cycle::new();
        cycle.advance(CycleEvent::Begin);

        if is_overweight(batch, &self.config.weight_limits) {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "Batch too heavy: {} kg of {}",
                batch.weight_kg(),
                batch.material()
            );
            cycle.advance(CycleEvent::Overweight);
            return cycle.finish(None);
        }
        cycle.advance(CycleEvent::WeightAccepted);

        let program = match resolve_program(
            batch,
            config,
            &mut self.sensor,
            &self.config.dirt_thresholds,
        ) {
            Ok(program) => program,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Program resolution failed: {}", _e);
                cycle.advance(CycleEvent::ResolutionFailed);
                return cycle.finish(None);
            }
        };
        cycle.advance(CycleEvent::ProgramResolved);

        let spin = config.map_or(false, |c| c.spin);
        self.sequence(&mut cycle, batch, program, spin);
        cycle.finish(Some(program))
    }

    /// Drive the actuators until the cycle reaches a terminal state
    fn sequence(
        &mut self,
        cycle: &mut Cycle,
        batch: &LaundryBatch,
        program: ResolvedProgram,
        spin: bool,
    ) {
        while !cycle.state.is_terminal() {
            debug_assert!(cycle.state.touches_actuator());
            let event = match cycle.state {
                CycleState::Pour => fluid_event(self.fluid.pour(batch.weight_kg())),
                CycleState::Run => drive_event(self.drive.run(program.minutes())),
                CycleState::Release => fluid_event(self.fluid.release()),
                CycleState::Spin if spin => drive_event(self.drive.spin()),
                CycleState::Spin => CycleEvent::SpinSkipped,
                _ => return,
            };
            cycle.advance(event);
        }
    }
}

fn fluid_event(result: Result<(), FluidError>) -> CycleEvent {
    match result {
        Ok(()) => CycleEvent::StepComplete,
        Err(_e) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("Fluid system fault: {}", _e);
            CycleEvent::FluidFault
        }
    }
}

fn drive_event(result: Result<(), DriveError>) -> CycleEvent {
    match result {
        Ok(()) => CycleEvent::StepComplete,
        Err(_e) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("Drive unit fault: {}", _e);
            CycleEvent::DriveFault
        }
    }
}

/// Progress of a single attempt
struct Cycle {
    state: CycleState,
    trace: CycleTrace,
}

impl Cycle {
    fn new() -> Self {
        let mut trace = CycleTrace::new();
        // Trace capacity covers the longest path
        let _ = trace.push(CycleState::Start);
        Self {
            state: CycleState::Start,
            trace,
        }
    }

    fn advance(&mut self, event: CycleEvent) {
        let next = self.state.transition(event);
        if next != self.state {
            #[cfg(feature = "defmt")]
            defmt::debug!("Cycle {} -> {}", self.state, next);
            let _ = self.trace.push(next);
            self.state = next;
        }
    }

    fn finish(self, program: Option<ResolvedProgram>) -> (LaundryStatus, CycleTrace) {
        let ran = program.map(|p| p.program());
        let status = match (self.state, ran) {
            (CycleState::Complete, Some(ran)) => LaundryStatus::success(ran),
            (CycleState::Failed(code), ran) => LaundryStatus::failure(code, ran),
            // Cycle stopped outside a terminal state
            (_, ran) => LaundryStatus::failure(ErrorCode::UnknownError, ran),
        };
        (status, self.trace)
    }
}
