//! Wash programs and program selection

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Short program duration (minutes)
pub const SHORT_MINUTES: u16 = 30;

/// Medium program duration (minutes)
pub const MEDIUM_MINUTES: u16 = 60;

/// Long program duration (minutes)
pub const LONG_MINUTES: u16 = 120;

/// Wash profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Program {
    Short,
    Medium,
    Long,
    /// Derive the program from a live dirtiness reading
    AutoDetect,
}

impl Program {
    /// Get the wash duration in minutes
    ///
    /// Returns `None` for [`Program::AutoDetect`], which has no duration of
    /// its own until it is resolved.
    pub const fn duration_minutes(self) -> Option<u16> {
        match self {
            Program::Short => Some(SHORT_MINUTES),
            Program::Medium => Some(MEDIUM_MINUTES),
            Program::Long => Some(LONG_MINUTES),
            Program::AutoDetect => None,
        }
    }

    /// Check if this program carries its own duration
    pub const fn is_concrete(self) -> bool {
        self.duration_minutes().is_some()
    }

    /// Turn a concrete program into a runnable one
    pub const fn resolved(self) -> Option<ResolvedProgram> {
        match self.duration_minutes() {
            Some(minutes) => Some(ResolvedProgram {
                program: self,
                minutes,
            }),
            None => None,
        }
    }
}

/// A program with a known duration, ready to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResolvedProgram {
    program: Program,
    minutes: u16,
}

impl ResolvedProgram {
    pub const SHORT: ResolvedProgram = ResolvedProgram {
        program: Program::Short,
        minutes: SHORT_MINUTES,
    };
    pub const MEDIUM: ResolvedProgram = ResolvedProgram {
        program: Program::Medium,
        minutes: MEDIUM_MINUTES,
    };
    pub const LONG: ResolvedProgram = ResolvedProgram {
        program: Program::Long,
        minutes: LONG_MINUTES,
    };

    /// Get the program that will run
    pub const fn program(&self) -> Program {
        self.program
    }

    /// Get the wash duration in minutes
    pub const fn minutes(&self) -> u16 {
        self.minutes
    }
}

/// Requested program plus spin flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProgramConfiguration {
    pub program: Program,
    /// Run a spin cycle after the water is released
    pub spin: bool,
}

impl ProgramConfiguration {
    /// Create a configuration without spin
    pub const fn new(program: Program) -> Self {
        Self {
            program,
            spin: false,
        }
    }

    /// Create a configuration with a spin cycle
    pub const fn with_spin(program: Program) -> Self {
        Self {
            program,
            spin: true,
        }
    }
}
