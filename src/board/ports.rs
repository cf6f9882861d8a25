//! Port traits: the boundary between the BSP and the vendor drivers.
//!
//! ```text
//!   EspIdfDrivers ──▶ Port trait ──▶ Board (BSP logic)
//! ```
//!
//! The [`Board`](super::Board) consumes these via generics, so the
//! initialisation rules can be exercised on the host against a mock.
//! Every method is a single driver call; implementations report the
//! driver's status code unchanged through [`BspError`](crate::error::BspError).

use crate::board::buttons::ButtonConfig;
use crate::config::BspConfig;
use crate::error::Result;
use crate::pins;

// ───────────────────────────────────────────────────────────────
// GPIO
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioMode {
    Input,
    Output,
    OutputOpenDrain,
    InputOutput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioIntr {
    Disabled,
    PosEdge,
    NegEdge,
    AnyEdge,
}

/// Mirror of `gpio_config_t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioConfig {
    pub pin_bit_mask: u64,
    pub mode: GpioMode,
    pub pull_up: bool,
    pub pull_down: bool,
    pub intr: GpioIntr,
}

impl GpioConfig {
    /// Push-pull output on a single pin, no pulls, no interrupt.
    pub const fn output(pin: i32) -> Self {
        Self {
            pin_bit_mask: 1u64 << pin,
            mode: GpioMode::Output,
            pull_up: false,
            pull_down: false,
            intr: GpioIntr::Disabled,
        }
    }
}

pub trait GpioPort {
    /// Apply a pin configuration (`gpio_config`).
    fn configure(&mut self, config: &GpioConfig) -> Result<()>;

    /// Drive an output pin (`gpio_set_level`).
    fn set_level(&mut self, pin: i32, high: bool) -> Result<()>;
}

// ───────────────────────────────────────────────────────────────
// I²C
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum I2cMode {
    Master,
    Slave,
}

/// Mirror of the master half of `i2c_config_t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct I2cConfig {
    pub mode: I2cMode,
    pub sda: i32,
    pub sda_pullup: bool,
    pub scl: i32,
    pub scl_pullup: bool,
    pub clk_speed_hz: u32,
}

impl I2cConfig {
    /// The board's sensor/camera bus: master, internal pull-ups on both lines.
    pub fn for_board(config: &BspConfig) -> Self {
        Self {
            mode: I2cMode::Master,
            sda: pins::I2C_SDA_GPIO,
            sda_pullup: true,
            scl: pins::I2C_SCL_GPIO,
            scl_pullup: true,
            clk_speed_hz: config.i2c_clk_speed_hz,
        }
    }
}

pub trait I2cPort {
    /// Load bus parameters into the controller (`i2c_param_config`).
    fn param_config(&mut self, port: u8, config: &I2cConfig) -> Result<()>;

    /// Install the driver with no slave buffers and default interrupt
    /// flags (`i2c_driver_install`).
    fn driver_install(&mut self, port: u8, mode: I2cMode) -> Result<()>;

    /// Remove the driver and free its resources (`i2c_driver_delete`).
    fn driver_delete(&mut self, port: u8) -> Result<()>;
}

// ───────────────────────────────────────────────────────────────
// Buttons
// ───────────────────────────────────────────────────────────────

/// Factory for button handles (`iot_button_create`).
pub trait ButtonPort {
    /// Opaque handle owned by the button library.
    type Handle;

    /// Create one button. `None` is the library's null handle.
    fn create(&mut self, config: &ButtonConfig) -> Option<Self::Handle>;
}
