//! BSP configuration.
//!
//! Mirrors the board's Kconfig options. Fields missing from a serialized
//! override fall back to the Kconfig defaults.

use serde::{Deserialize, Serialize};

use crate::error::{BspError, Result};

/// Number of I²C controllers on the ESP32 family.
pub const I2C_PORT_COUNT: u8 = 2;

/// Board-level configuration consumed by [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BspConfig {
    /// I²C controller the sensor/camera bus is attached to.
    pub i2c_port: u8,
    /// I²C master clock in Hz.
    pub i2c_clk_speed_hz: u32,
}

impl Default for BspConfig {
    fn default() -> Self {
        Self {
            i2c_port: 1,
            i2c_clk_speed_hz: 400_000,
        }
    }
}

impl BspConfig {
    /// Parse a JSON override, e.g. `{"i2c_clk_speed_hz": 100000}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            log::warn!("config: rejected override: {}", e);
            BspError::InvalidArg
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the I²C controller cannot be configured with.
    pub fn validate(&self) -> Result<()> {
        if self.i2c_port >= I2C_PORT_COUNT {
            return Err(BspError::InvalidArg);
        }
        if !(1_000..=1_000_000).contains(&self.i2c_clk_speed_hz) {
            return Err(BspError::InvalidArg);
        }
        Ok(())
    }
}
