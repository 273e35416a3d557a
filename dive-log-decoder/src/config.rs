//! Parser configuration types
//!
//! A raw dive blob does not carry everything its parser needs: the model
//! number and the serial number are known to the download layer, which
//! reads them from the device. This module carries those values over.

use crate::descriptor::DeviceDescriptor;
use serde::{Deserialize, Serialize};

/// Configuration for constructing a family parser
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Model number, as listed in the descriptor table
    #[serde(default)]
    pub model: u32,

    /// Device serial number (reported in the "Serial" string field)
    #[serde(default)]
    pub serial: u32,
}

impl ParserConfig {
    /// Create a new parser configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration pre-filled with the model number of a registry row
    pub fn for_descriptor(descriptor: &DeviceDescriptor) -> Self {
        Self::new().with_model(descriptor.model())
    }

    /// Builder method: set the model number
    pub fn with_model(mut self, model: u32) -> Self {
        self.model = model;
        self
    }

    /// Builder method: set the serial number
    pub fn with_serial(mut self, serial: u32) -> Self {
        self.serial = serial;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{self, Family};

    #[test]
    fn test_parser_config_builder() {
        let config = ParserConfig::new().with_model(5).with_serial(0xCAFE);
        assert_eq!(config.model, 5);
        assert_eq!(config.serial, 0xCAFE);
    }

    #[test]
    fn test_config_for_descriptor() {
        let predator = descriptor::iter()
            .find(|d| d.family() == Family::ShearwaterPredator)
            .unwrap();

        let config = ParserConfig::for_descriptor(predator);
        assert_eq!(config.model, 2);
        assert_eq!(config.serial, 0);
    }
}
