//! Events that trigger cycle transitions

/// Events produced by each controller phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleEvent {
    /// Wash attempt started
    Begin,

    // Weight check
    /// Batch is within its ceiling
    WeightAccepted,
    /// Batch exceeds its ceiling
    Overweight,

    // Program resolution
    /// A program with a duration was found
    ProgramResolved,
    /// No program could be resolved
    ResolutionFailed,

    // Actuator steps
    /// Current actuator step finished
    StepComplete,
    /// Spin was not requested
    SpinSkipped,
    /// Pour or release failed
    FluidFault,
    /// Run or spin failed
    DriveFault,
}
