//! Binary storage of the controller configuration
//!
//! The configuration is serialized with postcard so it can be kept in
//! flash next to the rest of the machine settings.

use super::types::{ConfigError, ControllerConfig};

/// Upper bound on the serialized configuration size
pub const MAX_CONFIG_SIZE: usize = 32;

impl ControllerConfig {
    /// Serialize into `buf`, returning the used prefix
    pub fn to_bytes<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Serialize)
    }

    /// Deserialize and validate a stored configuration
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;
        config.validate()?;
        Ok(config)
    }
}
