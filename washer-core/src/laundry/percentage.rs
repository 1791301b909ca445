//! Bounded percentage used for dirtiness readings

/// A real number in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Percentage(f32);

impl Percentage {
    /// 0%
    pub const ZERO: Percentage = Percentage(0.0);
    /// 100%
    pub const FULL: Percentage = Percentage(100.0);

    /// Create a percentage, rejecting NaN and values outside [0, 100]
    pub fn new(value: f32) -> Option<Self> {
        if (0.0..=100.0).contains(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Create a percentage, clamping into [0, 100]
    ///
    /// NaN maps to 0%.
    pub fn saturating(value: f32) -> Self {
        if value.is_nan() {
            Self::ZERO
        } else {
            Self(value.clamp(0.0, 100.0))
        }
    }

    /// Get the raw value
    pub fn value(self) -> f32 {
        self.0
    }
}
