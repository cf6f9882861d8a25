//! Mock driver set for integration tests.
//!
//! Records every driver call so tests can assert on the full call history
//! without touching real GPIO/I²C registers. Failures are injected per call
//! kind.

use esp_eye_bsp::board::ports::{
    ButtonPort, GpioConfig, GpioPort, I2cConfig, I2cMode, I2cPort,
};
use esp_eye_bsp::{BspError, ButtonConfig, Result};

// ── Driver call record ────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum DriverCall {
    GpioConfigure(GpioConfig),
    GpioSetLevel { pin: i32, high: bool },
    I2cParamConfig { port: u8, config: I2cConfig },
    I2cInstall { port: u8, mode: I2cMode },
    I2cDelete { port: u8 },
    ButtonCreate(ButtonConfig),
}

// ── MockDrivers ───────────────────────────────────────────────

#[derive(Default)]
pub struct MockDrivers {
    pub calls: Vec<DriverCall>,
    pub fail_param_config: Option<BspError>,
    pub fail_install: Option<BspError>,
    pub fail_delete: Option<BspError>,
    /// Fail `configure` for the given pin.
    pub fail_configure_pin: Option<(i32, BspError)>,
    pub fail_set_level: Option<BspError>,
    /// Return a null handle once this many buttons have been created.
    pub buttons_before_null: Option<usize>,
    buttons_created: usize,
}

#[allow(dead_code)]
impl MockDrivers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, pred: impl Fn(&DriverCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    pub fn installs(&self) -> usize {
        self.count(|c| matches!(c, DriverCall::I2cInstall { .. }))
    }

    pub fn level_of(&self, pin: i32) -> Option<bool> {
        self.calls.iter().rev().find_map(|c| match c {
            DriverCall::GpioSetLevel { pin: p, high } if *p == pin => Some(*high),
            _ => None,
        })
    }
}

fn outcome(fail: Option<BspError>) -> Result<()> {
    match fail {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

impl GpioPort for MockDrivers {
    fn configure(&mut self, config: &GpioConfig) -> Result<()> {
        self.calls.push(DriverCall::GpioConfigure(*config));
        match self.fail_configure_pin {
            Some((pin, e)) if config.pin_bit_mask == 1u64 << pin => Err(e),
            _ => Ok(()),
        }
    }

    fn set_level(&mut self, pin: i32, high: bool) -> Result<()> {
        self.calls.push(DriverCall::GpioSetLevel { pin, high });
        outcome(self.fail_set_level)
    }
}

impl I2cPort for MockDrivers {
    fn param_config(&mut self, port: u8, config: &I2cConfig) -> Result<()> {
        self.calls.push(DriverCall::I2cParamConfig {
            port,
            config: *config,
        });
        outcome(self.fail_param_config)
    }

    fn driver_install(&mut self, port: u8, mode: I2cMode) -> Result<()> {
        self.calls.push(DriverCall::I2cInstall { port, mode });
        outcome(self.fail_install)
    }

    fn driver_delete(&mut self, port: u8) -> Result<()> {
        self.calls.push(DriverCall::I2cDelete { port });
        outcome(self.fail_delete)
    }
}

impl ButtonPort for MockDrivers {
    type Handle = usize;

    fn create(&mut self, config: &ButtonConfig) -> Option<usize> {
        self.calls.push(DriverCall::ButtonCreate(*config));
        if self
            .buttons_before_null
            .is_some_and(|n| self.buttons_created >= n)
        {
            return None;
        }
        self.buttons_created += 1;
        Some(self.buttons_created)
    }
}
