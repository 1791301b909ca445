//! Cycle state definition
//!
//! Every actuator call the controller makes is a function of the current
//! state; every state change is a function of the state and an event.

use heapless::Vec;

use super::events::CycleEvent;
use crate::status::ErrorCode;

/// Longest possible path: Start through Spin plus the terminal state
pub const MAX_TRACE_LEN: usize = 8;

/// States visited during one wash attempt
pub type CycleTrace = Vec<CycleState, MAX_TRACE_LEN>;

/// Cycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleState {
    /// Attempt created, nothing checked yet
    Start,
    /// Checking batch weight against its ceiling
    WeightCheck,
    /// Turning the configuration into a runnable program
    ResolveProgram,
    /// Filling the tub
    Pour,
    /// Drum running the wash motion
    Run,
    /// Draining the tub
    Release,
    /// Spin cycle (skipped when not requested)
    Spin,
    /// All steps completed successfully
    Complete,
    /// Attempt aborted
    Failed(ErrorCode),
}

impl CycleState {
    /// Check if this state drives an actuator
    pub fn touches_actuator(&self) -> bool {
        matches!(
            self,
            CycleState::Pour | CycleState::Run | CycleState::Release | CycleState::Spin
        )
    }

    /// Check if this is a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, CycleState::Complete | CycleState::Failed(_))
    }

    /// Process an event and return the next state
    ///
    /// Pairs without a defined transition leave the state unchanged.
    pub fn transition(self, event: CycleEvent) -> Self {
        use CycleEvent::*;
        use CycleState::*;

        match (self, event) {
            (Start, Begin) => WeightCheck,

            (WeightCheck, WeightAccepted) => ResolveProgram,
            (WeightCheck, Overweight) => Failed(ErrorCode::TooHeavy),

            (ResolveProgram, ProgramResolved) => Pour,
            (ResolveProgram, ResolutionFailed) => Failed(ErrorCode::UnknownError),

            (Pour, StepComplete) => Run,
            (Pour, FluidFault) => Failed(ErrorCode::WaterPumpFailure),

            (Run, StepComplete) => Release,
            (Run, DriveFault) => Failed(ErrorCode::EngineFailure),

            (Release, StepComplete) => Spin,
            (Release, FluidFault) => Failed(ErrorCode::WaterPumpFailure),

            (Spin, StepComplete) => Complete,
            (Spin, SpinSkipped) => Complete,
            (Spin, DriveFault) => Failed(ErrorCode::EngineFailure),

            // Terminal states and unexpected events: stay put
            _ => self,
        }
    }
}
